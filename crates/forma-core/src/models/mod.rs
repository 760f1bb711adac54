// ABOUTME: Core data models for profiles, workouts, prescriptions, and nutrition
// ABOUTME: Re-exports every model type from its domain module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

/// Nutrition analysis results and meal history
pub mod nutrition;
/// Structured sets, reps, and rest prescriptions
pub mod prescription;
/// User profile and tag vocabularies
pub mod profile;
/// Workouts and exercises
pub mod workout;

pub use nutrition::{MacroBars, MealHistoryEntry, NutritionResult};
pub use prescription::{Dose, DoseAmount, DoseModifier, IntervalActivity, Rest, TierValues};
pub use profile::{
    parse_tags, Equipment, FitnessGoal, FitnessLevel, Gender, Intensity, UserProfile,
    WorkoutType,
};
pub use workout::{Exercise, Workout, WorkoutCategory};
