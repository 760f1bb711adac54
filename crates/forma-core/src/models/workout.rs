// ABOUTME: Workout and exercise models returned by the recommendation generator
// ABOUTME: Category classification plus ordered exercise sequences with prescriptions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

use super::{Dose, Intensity, Rest};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse workout classification used for filtering and "already have one" checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WorkoutCategory {
    /// Resistance training
    Strength,
    /// Steady-state or interval cardio
    Cardio,
    /// High intensity interval training
    #[serde(rename = "HIIT")]
    Hiit,
    /// Yoga or pilates flow
    Yoga,
    /// Stretching; catalog only, never generated
    Flexibility,
}

impl WorkoutCategory {
    /// Display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Cardio => "Cardio",
            Self::Hiit => "HIIT",
            Self::Yoga => "Yoga",
            Self::Flexibility => "Flexibility",
        }
    }

    /// Lowercase prefix for generated workout ids
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Cardio => "cardio",
            Self::Hiit => "hiit",
            Self::Yoga => "yoga",
            Self::Flexibility => "flexibility",
        }
    }
}

impl fmt::Display for WorkoutCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One exercise inside a workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// Number of sets
    pub sets: u32,
    /// Work per set
    pub reps: Dose,
    /// Rest after each set
    pub rest_time: Rest,
    /// How to perform it
    pub description: String,
    /// Equipment tags the exercise needs; empty for bodyweight
    pub equipment: Vec<String>,
    /// Muscles or system trained
    pub target_muscle: String,
}

impl Exercise {
    /// True when no equipment is needed
    #[must_use]
    pub fn is_bodyweight(&self) -> bool {
        self.equipment.is_empty()
    }
}

/// A generated or catalog workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Identifier unique within a generation run
    pub id: String,
    /// Title
    pub title: String,
    /// Short description
    pub description: String,
    /// Total duration in minutes
    pub duration_minutes: u32,
    /// Intensity tier; every exercise inherits it
    pub intensity: Intensity,
    /// Category
    pub category: WorkoutCategory,
    /// Exercises in suggested performance order
    pub exercises: Vec<Exercise>,
    /// Cover image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Workout {
    /// Duration as shown on workout cards ("45 min")
    #[must_use]
    pub fn duration_label(&self) -> String {
        format!("{} min", self.duration_minutes)
    }

    /// Names of the exercises in order
    #[must_use]
    pub fn exercise_names(&self) -> Vec<&str> {
        self.exercises.iter().map(|e| e.name.as_str()).collect()
    }
}
