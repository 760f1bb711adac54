// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, profile builders, and a completed onboarding helper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `forma`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use forma::onboarding::OnboardingWizard;
use forma::{Equipment, FitnessGoal, FitnessLevel, Gender, UserProfile, WorkoutType};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Profile with no goals, no preferred workouts, and no equipment
pub fn bare_profile(level: FitnessLevel) -> UserProfile {
    UserProfile::new("Jordan", 29, Gender::Other, 165.0, 172.0, level)
}

/// Bodyweight-only profile
pub fn bodyweight_profile(level: FitnessLevel) -> UserProfile {
    bare_profile(level).with_equipment([Equipment::NoEquipment])
}

/// Profile that prefers every workout type and owns a full gym
pub fn everything_profile(level: FitnessLevel) -> UserProfile {
    bare_profile(level)
        .with_workouts(WorkoutType::ALL)
        .with_goals(FitnessGoal::ALL)
        .with_equipment([Equipment::FullGym])
}

/// Wizard with every form filled in validly, still at the welcome screen
pub fn filled_wizard() -> OnboardingWizard {
    let mut wizard = OnboardingWizard::new();
    wizard.basic_info.name = "Riley".into();
    wizard.basic_info.age = "34".into();
    wizard.basic_info.gender = Some(Gender::Female);
    wizard.physical_info.weight = "150".into();
    wizard.physical_info.height = "168".into();
    wizard.fitness_profile.fitness_level = Some(FitnessLevel::Intermediate);
    wizard.fitness_profile.toggle_goal(FitnessGoal::WeightLoss);
    wizard.equipment.toggle_workout(WorkoutType::Yoga);
    wizard
}

/// Submit steps until the wizard reports completion
pub fn submit_all(wizard: &mut OnboardingWizard) {
    while !wizard.is_complete() {
        wizard.submit().expect("every step should validate");
    }
}
