// ABOUTME: Stateless workout sub-generators for strength, cardio, HIIT, and yoga
// ABOUTME: Shared template type, equipment flags, and the exercise constructor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

//! Workout sub-generators
//!
//! Each generator is a pure table lookup keyed by intensity (and equipment for
//! strength and HIIT). Generators return a [`WorkoutTemplate`]; the engine
//! stamps the id and cover image.

/// Cardio sessions per tier
pub mod cardio;
/// HIIT pool, pick, and derived duration
pub mod hiit;
/// Push/pull/legs/core strength ladder
pub mod strength;
/// Hand-authored yoga sequences
pub mod yoga;

pub use cardio::cardio_workout;
pub use hiit::{hiit_duration_minutes, hiit_exercise_count, hiit_pool, hiit_workout};
pub use strength::strength_workout;
pub use yoga::yoga_workout;

use forma_core::models::{Dose, Equipment, Exercise, Intensity, Rest, Workout, WorkoutCategory};
use std::collections::BTreeSet;

/// A workout before an id and image are attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutTemplate {
    /// Title
    pub title: String,
    /// Short description
    pub description: String,
    /// Duration in minutes
    pub duration_minutes: u32,
    /// Intensity tier
    pub intensity: Intensity,
    /// Category
    pub category: WorkoutCategory,
    /// Ordered exercises
    pub exercises: Vec<Exercise>,
}

impl WorkoutTemplate {
    /// Finish the template
    #[must_use]
    pub fn into_workout(self, id: String, image_url: Option<String>) -> Workout {
        Workout {
            id,
            title: self.title,
            description: self.description,
            duration_minutes: self.duration_minutes,
            intensity: self.intensity,
            category: self.category,
            exercises: self.exercises,
            image_url,
        }
    }
}

/// Equipment flags the ladders branch on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Kit {
    pub gym: bool,
    pub dumbbells: bool,
    pub kettlebells: bool,
    pub bench: bool,
    pub declared_none: bool,
}

impl Kit {
    pub(crate) fn from_equipment(equipment: &BTreeSet<Equipment>) -> Self {
        Self {
            gym: equipment.contains(&Equipment::FullGym),
            dumbbells: equipment.contains(&Equipment::Dumbbells),
            kettlebells: equipment.contains(&Equipment::Kettlebells),
            bench: equipment.contains(&Equipment::Bench),
            declared_none: equipment.contains(&Equipment::NoEquipment),
        }
    }

    /// Free weight used by leg and HIIT movements; kettlebells win
    pub(crate) const fn free_weight(self) -> Option<FreeWeight> {
        if self.kettlebells {
            Some(FreeWeight::Kettlebell)
        } else if self.dumbbells {
            Some(FreeWeight::Dumbbell)
        } else {
            None
        }
    }
}

/// Hand weight substituted into leg and HIIT movements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FreeWeight {
    Dumbbell,
    Kettlebell,
}

impl FreeWeight {
    /// Lowercase noun used in descriptions
    pub(crate) const fn noun(self) -> &'static str {
        match self {
            Self::Dumbbell => "dumbbell",
            Self::Kettlebell => "kettlebell",
        }
    }

    /// Capitalized noun used in exercise names
    pub(crate) const fn title(self) -> &'static str {
        match self {
            Self::Dumbbell => "Dumbbell",
            Self::Kettlebell => "Kettlebell",
        }
    }

    /// Equipment tag listed on the exercise
    pub(crate) const fn tag(self) -> &'static str {
        match self {
            Self::Dumbbell => "dumbbells",
            Self::Kettlebell => "kettlebells",
        }
    }
}

pub(crate) fn exercise(
    name: impl Into<String>,
    sets: u32,
    reps: Dose,
    rest_time: Rest,
    description: impl Into<String>,
    equipment: &[&str],
    target_muscle: &str,
) -> Exercise {
    Exercise {
        name: name.into(),
        sets,
        reps,
        rest_time,
        description: description.into(),
        equipment: equipment.iter().map(|&tag| tag.to_owned()).collect(),
        target_muscle: target_muscle.to_owned(),
    }
}
