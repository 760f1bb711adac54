// ABOUTME: User profile model produced by onboarding and consumed by the generator
// ABOUTME: Fitness level, intensity tiers, and the goal/workout/equipment tag vocabularies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Self-assessed training experience
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FitnessLevel {
    /// New to structured training
    #[default]
    Beginner,
    /// Trains regularly
    Intermediate,
    /// Experienced athlete
    Advanced,
}

impl FitnessLevel {
    /// All levels in ascending order
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Fixed total mapping to the intensity tier
    #[must_use]
    pub const fn intensity(self) -> Intensity {
        match self {
            Self::Beginner => Intensity::Easy,
            Self::Intermediate => Intensity::Medium,
            Self::Advanced => Intensity::Hard,
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        })
    }
}

/// Intensity tier driving sets, reps, rest, and duration constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intensity {
    /// Derived from `Beginner`
    Easy,
    /// Derived from `Intermediate`
    Medium,
    /// Derived from `Advanced`
    Hard,
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        })
    }
}

/// Gender as chosen during onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Other or prefer not to say
    Other,
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            other => Err(AppError::invalid_input(format!("unknown gender '{other}'"))),
        }
    }
}

/// Fitness goal tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitnessGoal {
    /// Lose body fat
    WeightLoss,
    /// Build muscle
    MuscleGain,
    /// Improve endurance
    Endurance,
    /// Improve mobility and flexibility
    Flexibility,
    /// General fitness
    OverallFitness,
}

impl FitnessGoal {
    /// Every goal in checklist order
    pub const ALL: [Self; 5] = [
        Self::WeightLoss,
        Self::MuscleGain,
        Self::Endurance,
        Self::Flexibility,
        Self::OverallFitness,
    ];

    /// Wire tag
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::WeightLoss => "weight-loss",
            Self::MuscleGain => "muscle-gain",
            Self::Endurance => "endurance",
            Self::Flexibility => "flexibility",
            Self::OverallFitness => "overall-fitness",
        }
    }

    /// Checklist label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WeightLoss => "Weight Loss",
            Self::MuscleGain => "Muscle Gain",
            Self::Endurance => "Endurance",
            Self::Flexibility => "Flexibility",
            Self::OverallFitness => "Overall Fitness",
        }
    }
}

impl FromStr for FitnessGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|goal| goal.tag() == s)
            .ok_or_else(|| AppError::invalid_input(format!("unknown fitness goal '{s}'")))
    }
}

/// Preferred workout type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkoutType {
    /// High intensity interval training
    Hiit,
    /// Strength training
    Strength,
    /// Cardio
    Cardio,
    /// Yoga
    Yoga,
    /// Pilates
    Pilates,
    /// Calisthenics
    Calisthenics,
}

impl WorkoutType {
    /// Every workout type in checklist order
    pub const ALL: [Self; 6] = [
        Self::Hiit,
        Self::Strength,
        Self::Cardio,
        Self::Yoga,
        Self::Pilates,
        Self::Calisthenics,
    ];

    /// Wire tag
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Hiit => "hiit",
            Self::Strength => "strength",
            Self::Cardio => "cardio",
            Self::Yoga => "yoga",
            Self::Pilates => "pilates",
            Self::Calisthenics => "calisthenics",
        }
    }

    /// Checklist label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hiit => "HIIT (High Intensity Interval Training)",
            Self::Strength => "Strength Training",
            Self::Cardio => "Cardio",
            Self::Yoga => "Yoga",
            Self::Pilates => "Pilates",
            Self::Calisthenics => "Calisthenics",
        }
    }
}

impl FromStr for WorkoutType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| AppError::invalid_input(format!("unknown workout type '{s}'")))
    }
}

/// Equipment the user has access to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Equipment {
    /// Bodyweight only; exclusive with every other option
    NoEquipment,
    /// Dumbbells
    Dumbbells,
    /// Resistance bands
    ResistanceBands,
    /// Kettlebells
    Kettlebells,
    /// Pull-up bar
    PullUpBar,
    /// Flat bench
    Bench,
    /// Full gym access
    FullGym,
}

impl Equipment {
    /// Every option in checklist order
    pub const ALL: [Self; 7] = [
        Self::NoEquipment,
        Self::Dumbbells,
        Self::ResistanceBands,
        Self::Kettlebells,
        Self::PullUpBar,
        Self::Bench,
        Self::FullGym,
    ];

    /// Wire tag
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::NoEquipment => "no-equipment",
            Self::Dumbbells => "dumbbells",
            Self::ResistanceBands => "resistance-bands",
            Self::Kettlebells => "kettlebells",
            Self::PullUpBar => "pull-up-bar",
            Self::Bench => "bench",
            Self::FullGym => "full-gym",
        }
    }

    /// Checklist label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoEquipment => "No Equipment (Bodyweight only)",
            Self::Dumbbells => "Dumbbells",
            Self::ResistanceBands => "Resistance Bands",
            Self::Kettlebells => "Kettlebells",
            Self::PullUpBar => "Pull-up Bar",
            Self::Bench => "Bench",
            Self::FullGym => "Full Gym Access",
        }
    }
}

impl FromStr for Equipment {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|item| item.tag() == s)
            .ok_or_else(|| AppError::invalid_input(format!("unknown equipment '{s}'")))
    }
}

/// Parse a list of wire tags into a set, failing on the first unknown tag
///
/// # Errors
///
/// Returns `InvalidInput` if any tag is not part of the vocabulary
pub fn parse_tags<T, S>(tags: impl IntoIterator<Item = S>) -> Result<BTreeSet<T>, AppError>
where
    T: FromStr<Err = AppError> + Ord,
    S: AsRef<str>,
{
    tags.into_iter().map(|tag| tag.as_ref().parse()).collect()
}

/// Finished user profile
///
/// Built incrementally by the onboarding wizard and frozen on commit. Nothing
/// persists it; it lives in session memory only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// Body weight in pounds
    pub weight: f64,
    /// Height in centimeters
    pub height: f64,
    /// Self-assessed level
    pub fitness_level: FitnessLevel,
    /// Selected goals
    pub fitness_goals: BTreeSet<FitnessGoal>,
    /// Selected workout types
    pub preferred_workouts: BTreeSet<WorkoutType>,
    /// Declared equipment
    pub available_equipment: BTreeSet<Equipment>,
}

impl UserProfile {
    /// Create a profile with empty tag sets
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        age: u32,
        gender: Gender,
        weight: f64,
        height: f64,
        fitness_level: FitnessLevel,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            gender,
            weight,
            height,
            fitness_level,
            fitness_goals: BTreeSet::new(),
            preferred_workouts: BTreeSet::new(),
            available_equipment: BTreeSet::new(),
        }
    }

    /// Replace the goal set
    #[must_use]
    pub fn with_goals(mut self, goals: impl IntoIterator<Item = FitnessGoal>) -> Self {
        self.fitness_goals = goals.into_iter().collect();
        self
    }

    /// Replace the preferred workout set
    #[must_use]
    pub fn with_workouts(mut self, workouts: impl IntoIterator<Item = WorkoutType>) -> Self {
        self.preferred_workouts = workouts.into_iter().collect();
        self
    }

    /// Replace the equipment set
    #[must_use]
    pub fn with_equipment(mut self, equipment: impl IntoIterator<Item = Equipment>) -> Self {
        self.available_equipment = equipment.into_iter().collect();
        self
    }

    /// Intensity tier for every workout generated from this profile
    #[must_use]
    pub const fn intensity(&self) -> Intensity {
        self.fitness_level.intensity()
    }

    /// Whether the user declared this equipment
    #[must_use]
    pub fn has_equipment(&self, item: Equipment) -> bool {
        self.available_equipment.contains(&item)
    }

    /// Whether the user selected this goal
    #[must_use]
    pub fn has_goal(&self, goal: FitnessGoal) -> bool {
        self.fitness_goals.contains(&goal)
    }

    /// Whether the user prefers this workout type
    #[must_use]
    pub fn prefers(&self, kind: WorkoutType) -> bool {
        self.preferred_workouts.contains(&kind)
    }
}
