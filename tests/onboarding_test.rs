// ABOUTME: Integration tests for the onboarding wizard and profile session
// ABOUTME: Step navigation, inline validation, equipment exclusivity, commit, and edit cycles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use forma::config::FormaConfig;
use forma::errors::{ErrorCode, FormField};
use forma::onboarding::{BasicInfoForm, OnboardingStep, OnboardingWizard, ProfileSession};
use forma::{
    Equipment, FitnessGoal, FitnessLevel, Gender, Intensity, WorkoutCategory, WorkoutType,
};

#[test]
fn test_step_order() {
    let indices: Vec<_> = OnboardingStep::ALL.iter().map(|s| s.index()).collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    assert_eq!(OnboardingStep::PhysicalInfo.title(), "Physical Information");
    assert_eq!(
        OnboardingStep::Welcome.next(),
        Some(OnboardingStep::BasicInfo)
    );
    assert_eq!(OnboardingStep::Equipment.next(), None);
    assert_eq!(OnboardingStep::Welcome.previous(), None);
    assert_eq!(
        OnboardingStep::FitnessProfile.previous(),
        Some(OnboardingStep::PhysicalInfo)
    );
}

#[test]
fn test_full_flow_commits_profile() {
    common::init_test_logging();
    let mut wizard = common::filled_wizard();

    assert_eq!(wizard.submit().unwrap(), OnboardingStep::BasicInfo);
    assert_eq!(wizard.submit().unwrap(), OnboardingStep::PhysicalInfo);
    assert_eq!(wizard.submit().unwrap(), OnboardingStep::FitnessProfile);
    assert_eq!(wizard.submit().unwrap(), OnboardingStep::Equipment);
    assert!(!wizard.is_complete());
    assert_eq!(wizard.submit().unwrap(), OnboardingStep::Equipment);
    assert!(wizard.is_complete());

    let profile = wizard.commit().unwrap();
    assert_eq!(profile.name, "Riley");
    assert_eq!(profile.age, 34);
    assert_eq!(profile.gender, Gender::Female);
    assert!((profile.weight - 150.0).abs() < f64::EPSILON);
    assert!((profile.height - 168.0).abs() < f64::EPSILON);
    assert_eq!(profile.fitness_level, FitnessLevel::Intermediate);
    assert_eq!(profile.intensity(), Intensity::Medium);
    assert!(profile.has_goal(FitnessGoal::WeightLoss));
    assert!(profile.prefers(WorkoutType::Yoga));
    assert!(profile.has_equipment(Equipment::NoEquipment));
}

#[test]
fn test_invalid_step_blocks_advancement() {
    let mut wizard = OnboardingWizard::new();
    wizard.submit().unwrap();
    wizard.basic_info.name = "   ".into();
    wizard.basic_info.age = "12".into();

    let errors = wizard.submit().unwrap_err();
    assert_eq!(wizard.step(), OnboardingStep::BasicInfo);
    assert_eq!(errors.len(), 3);
    assert_eq!(errors.message(FormField::Name), Some("Name is required"));
    assert_eq!(
        errors.message(FormField::Age),
        Some("Age must be between 13 and 100")
    );
    assert_eq!(
        errors.get(FormField::Age).unwrap().code,
        ErrorCode::ValueOutOfRange
    );
    assert_eq!(wizard.errors(), &errors);

    wizard.basic_info.name = "Casey".into();
    wizard.basic_info.age = "13".into();
    wizard.basic_info.gender = Some(Gender::Male);
    assert_eq!(wizard.submit().unwrap(), OnboardingStep::PhysicalInfo);
    assert!(wizard.errors().is_empty());
}

#[test]
fn test_physical_ranges() {
    let mut wizard = common::filled_wizard();
    wizard.submit().unwrap();
    wizard.submit().unwrap();

    wizard.physical_info.weight = "501".into();
    wizard.physical_info.height = String::new();
    let errors = wizard.submit().unwrap_err();
    assert_eq!(
        errors.message(FormField::Weight),
        Some("Weight must be between 30 and 500 lbs")
    );
    assert_eq!(errors.message(FormField::Height), Some("Height is required"));

    wizard.physical_info.weight = "500".into();
    wizard.physical_info.height = "100".into();
    assert_eq!(wizard.submit().unwrap(), OnboardingStep::FitnessProfile);
}

#[test]
fn test_fitness_profile_requires_a_goal() {
    let mut wizard = common::filled_wizard();
    wizard.fitness_profile.toggle_goal(FitnessGoal::WeightLoss);
    for _ in 0..3 {
        wizard.submit().unwrap();
    }

    let errors = wizard.submit().unwrap_err();
    assert_eq!(
        errors.message(FormField::Goals),
        Some("Select at least one fitness goal")
    );
    assert!(errors.message(FormField::FitnessLevel).is_none());
}

#[test]
fn test_equipment_step_requires_selections() {
    let mut wizard = common::filled_wizard();
    wizard.equipment.toggle_equipment(Equipment::NoEquipment);
    wizard.equipment.toggle_workout(WorkoutType::Yoga);
    for _ in 0..4 {
        wizard.submit().unwrap();
    }

    let errors = wizard.submit().unwrap_err();
    assert_eq!(
        errors.message(FormField::Equipment),
        Some("Select at least one equipment option")
    );
    assert_eq!(
        errors.message(FormField::Workouts),
        Some("Select at least one workout type")
    );
    assert!(!wizard.is_complete());
}

#[test]
fn test_equipment_toggle_exclusivity_in_wizard() {
    let mut wizard = OnboardingWizard::new();
    assert!(wizard.equipment.equipment.contains(Equipment::NoEquipment));

    wizard.equipment.toggle_equipment(Equipment::PullUpBar);
    assert!(!wizard.equipment.equipment.contains(Equipment::NoEquipment));
    assert!(wizard.equipment.equipment.contains(Equipment::PullUpBar));

    wizard.equipment.toggle_equipment(Equipment::NoEquipment);
    assert!(!wizard.equipment.equipment.contains(Equipment::PullUpBar));
}

#[test]
fn test_back_navigation_keeps_drafts() {
    let mut wizard = common::filled_wizard();
    assert_eq!(
        wizard.back().unwrap_err().code,
        ErrorCode::InvalidState
    );

    wizard.submit().unwrap();
    wizard.submit().unwrap();
    assert_eq!(wizard.back().unwrap(), OnboardingStep::BasicInfo);
    assert_eq!(wizard.basic_info.name, "Riley");
}

#[test]
fn test_commit_requires_every_step() {
    let mut wizard = common::filled_wizard();
    wizard.submit().unwrap();
    wizard.submit().unwrap();
    let error = wizard.commit().unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidState);
}

#[test]
fn test_going_back_requires_resubmitting_later_steps() {
    let mut wizard = common::filled_wizard();
    common::submit_all(&mut wizard);
    for _ in 0..3 {
        wizard.back().unwrap();
    }
    assert_eq!(wizard.step(), OnboardingStep::BasicInfo);
    assert!(!wizard.is_complete());

    wizard.basic_info.name = String::new();
    wizard.basic_info.age = "7".into();
    let stale = wizard.clone().commit().unwrap_err();
    assert_eq!(stale.code, ErrorCode::InvalidState);

    assert!(wizard.submit().is_err());
    wizard.basic_info.name = "Sam".into();
    wizard.basic_info.age = "41".into();
    common::submit_all(&mut wizard);
    let profile = wizard.commit().unwrap();
    assert_eq!(profile.name, "Sam");
    assert_eq!(profile.age, 41);
}

#[test]
fn test_going_back_keeps_earlier_steps() {
    let mut wizard = common::filled_wizard();
    common::submit_all(&mut wizard);
    assert_eq!(wizard.back().unwrap(), OnboardingStep::FitnessProfile);
    assert!(!wizard.is_complete());

    assert_eq!(wizard.submit().unwrap(), OnboardingStep::Equipment);
    assert_eq!(wizard.submit().unwrap(), OnboardingStep::Equipment);
    assert!(wizard.is_complete());
    assert_eq!(wizard.commit().unwrap().name, "Riley");
}

#[test]
fn test_session_edit_cycle_replaces_profile() {
    let mut session = ProfileSession::new(FormaConfig::default());
    assert!(!session.has_completed_onboarding());
    assert_eq!(
        session.recommendations().unwrap_err().code,
        ErrorCode::InvalidState
    );

    let fresh = session.begin_onboarding();
    assert_eq!(fresh.basic_info, BasicInfoForm::default());
    assert!(fresh.equipment.equipment.contains(Equipment::NoEquipment));

    let mut wizard = common::filled_wizard();
    common::submit_all(&mut wizard);
    session.complete(wizard).unwrap();
    assert!(session.has_completed_onboarding());

    let mut edit = session.begin_onboarding();
    assert_eq!(edit.step(), OnboardingStep::Welcome);
    assert_eq!(edit.basic_info.name, "Riley");
    assert_eq!(edit.basic_info.age, "34");
    assert_eq!(edit.physical_info.weight, "150");

    edit.basic_info.name = "Riley Q".into();
    edit.fitness_profile.fitness_level = Some(FitnessLevel::Advanced);
    edit.fitness_profile.toggle_goal(FitnessGoal::WeightLoss);
    edit.fitness_profile.toggle_goal(FitnessGoal::Flexibility);
    common::submit_all(&mut edit);
    let profile = session.complete(edit).unwrap();

    assert_eq!(profile.name, "Riley Q");
    assert_eq!(profile.fitness_level, FitnessLevel::Advanced);
    assert_eq!(
        profile.fitness_goals.iter().copied().collect::<Vec<_>>(),
        vec![FitnessGoal::Flexibility]
    );
}

#[test]
fn test_session_recommendations_use_configured_seed() {
    let config = FormaConfig {
        selection_seed: Some(17),
        ..FormaConfig::default()
    };
    let mut session = ProfileSession::new(config);
    let mut wizard = common::filled_wizard();
    common::submit_all(&mut wizard);
    session.complete(wizard).unwrap();

    let first = session.recommendations().unwrap();
    let second = session.recommendations().unwrap();
    assert_eq!(first, second);

    // Prefers yoga (1) < threshold, backfill strength and cardio, weight loss adds HIIT
    let categories: Vec<_> = first.iter().map(|w| w.category).collect();
    assert_eq!(
        categories,
        vec![
            WorkoutCategory::Yoga,
            WorkoutCategory::Strength,
            WorkoutCategory::Cardio,
            WorkoutCategory::Hiit
        ]
    );
    assert!(first.iter().all(|w| w.intensity == Intensity::Medium));
    assert_eq!(first[1].title, "Bodyweight Strength Circuit");
}
