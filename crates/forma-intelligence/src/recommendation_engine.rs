// ABOUTME: Workout recommendation engine turning a user profile into ordered workout plans
// ABOUTME: Preference pass, strength/cardio backfill, and goal-based augmentation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

//! Workout recommendation engine
//!
//! Generation runs four append-only passes:
//!
//! 1. intensity is derived from the fitness level,
//! 2. one workout per preferred workout type (strength, cardio, HIIT, then
//!    yoga or pilates),
//! 3. strength and cardio are backfilled when fewer workouts than the
//!    configured threshold were produced,
//! 4. HIIT is added for weight loss and yoga for flexibility when missing.
//!
//! Each pass only checks the categories it adds itself, so the result is
//! exactly what the rules above produce with no further de-duplication.

use crate::config::RecommendationEngineConfig;
use crate::generators::{
    cardio_workout, hiit_workout, strength_workout, yoga_workout, WorkoutTemplate,
};
use crate::selection::{SeededShuffle, SelectionOrder, SelectionSeed, WorkoutIds};
use forma_core::models::{
    FitnessGoal, Intensity, UserProfile, Workout, WorkoutCategory, WorkoutType,
};
use tracing::debug;

/// Source of workout recommendations for a profile
pub trait WorkoutRecommender {
    /// Generate workouts for `profile`; a fixed seed reproduces the same output
    fn generate_workouts(&self, profile: &UserProfile, seed: SelectionSeed) -> Vec<Workout>;
}

/// Rule-based workout generator
#[derive(Debug, Clone, Default)]
pub struct WorkoutGenerator {
    config: RecommendationEngineConfig,
}

impl WorkoutGenerator {
    /// Generator with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator with a custom configuration
    #[must_use]
    pub const fn with_config(config: RecommendationEngineConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &RecommendationEngineConfig {
        &self.config
    }

    /// Generate workouts, shuffling the HIIT pool with `seed`
    #[must_use]
    pub fn generate(&self, profile: &UserProfile, seed: SelectionSeed) -> Vec<Workout> {
        let mut order = SeededShuffle::new(seed);
        self.generate_with_order(profile, seed, &mut order)
    }

    /// Generate workouts with an injected HIIT pool ordering
    ///
    /// `seed` only drives workout ids here.
    #[must_use]
    pub fn generate_with_order(
        &self,
        profile: &UserProfile,
        seed: SelectionSeed,
        order: &mut dyn SelectionOrder,
    ) -> Vec<Workout> {
        let intensity = profile.intensity();
        let mut plan = Plan {
            profile,
            intensity,
            order,
            ids: WorkoutIds::new(seed),
            config: &self.config,
            workouts: Vec::new(),
        };

        if profile.prefers(WorkoutType::Strength) {
            plan.push(WorkoutCategory::Strength);
        }
        if profile.prefers(WorkoutType::Cardio) {
            plan.push(WorkoutCategory::Cardio);
        }
        if profile.prefers(WorkoutType::Hiit) {
            plan.push(WorkoutCategory::Hiit);
        }
        if profile.prefers(WorkoutType::Yoga) || profile.prefers(WorkoutType::Pilates) {
            plan.push(WorkoutCategory::Yoga);
        }

        if plan.workouts.len() < self.config.backfill_threshold {
            plan.push_if_missing(WorkoutCategory::Strength);
            plan.push_if_missing(WorkoutCategory::Cardio);
        }

        if profile.has_goal(FitnessGoal::WeightLoss) {
            plan.push_if_missing(WorkoutCategory::Hiit);
        }
        if profile.has_goal(FitnessGoal::Flexibility) {
            plan.push_if_missing(WorkoutCategory::Yoga);
        }

        debug!(
            intensity = %intensity,
            count = plan.workouts.len(),
            seed = %seed,
            "Generated workout plan"
        );
        plan.workouts
    }
}

impl WorkoutRecommender for WorkoutGenerator {
    fn generate_workouts(&self, profile: &UserProfile, seed: SelectionSeed) -> Vec<Workout> {
        self.generate(profile, seed)
    }
}

/// Accumulator for one generation run
struct Plan<'a> {
    profile: &'a UserProfile,
    intensity: Intensity,
    order: &'a mut dyn SelectionOrder,
    ids: WorkoutIds,
    config: &'a RecommendationEngineConfig,
    workouts: Vec<Workout>,
}

impl Plan<'_> {
    fn contains(&self, category: WorkoutCategory) -> bool {
        self.workouts.iter().any(|w| w.category == category)
    }

    fn push_if_missing(&mut self, category: WorkoutCategory) {
        if !self.contains(category) {
            self.push(category);
        }
    }

    fn push(&mut self, category: WorkoutCategory) {
        let template = self.template(category);
        let id = self.ids.next_id(category.slug());
        let workout = template.into_workout(id, self.config.image_for(category));
        debug!(
            id = %workout.id,
            category = %workout.category,
            exercises = workout.exercises.len(),
            duration_minutes = workout.duration_minutes,
            "Generated workout"
        );
        self.workouts.push(workout);
    }

    fn template(&mut self, category: WorkoutCategory) -> WorkoutTemplate {
        let equipment = &self.profile.available_equipment;
        match category {
            WorkoutCategory::Strength => strength_workout(self.intensity, equipment),
            WorkoutCategory::Cardio => cardio_workout(self.intensity),
            WorkoutCategory::Hiit => hiit_workout(self.intensity, equipment, &mut *self.order),
            // Flexibility has no generator of its own; it is only reachable through the catalog
            WorkoutCategory::Yoga | WorkoutCategory::Flexibility => yoga_workout(self.intensity),
        }
    }
}
