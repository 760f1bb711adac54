// ABOUTME: Integration tests for the strength, cardio, HIIT, and yoga sub-generators
// ABOUTME: Equipment ladders, tier tables, derived HIIT duration, and fixed pose sequences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use forma::forma_intelligence::generators::{
    cardio_workout, hiit_duration_minutes, hiit_exercise_count, hiit_pool, hiit_workout,
    strength_workout, yoga_workout,
};
use forma::forma_intelligence::{FixedOrder, Identity, SeededShuffle, SelectionSeed};
use forma::{Equipment, Intensity};
use std::collections::{BTreeSet, HashSet};

const TIERS: [Intensity; 3] = [Intensity::Easy, Intensity::Medium, Intensity::Hard];

fn kit(items: &[Equipment]) -> BTreeSet<Equipment> {
    items.iter().copied().collect()
}

fn names(exercises: &[forma::Exercise]) -> Vec<&str> {
    exercises.iter().map(|e| e.name.as_str()).collect()
}

// Strength

#[test]
fn test_strength_without_equipment_is_bodyweight_only() {
    for equipment in [kit(&[]), kit(&[Equipment::NoEquipment])] {
        for intensity in TIERS {
            let workout = strength_workout(intensity, &equipment);
            assert_eq!(
                names(&workout.exercises),
                vec!["Push-ups", "Inverted Rows", "Bodyweight Squats", "Plank"]
            );
            assert!(workout.exercises.iter().all(|e| e.equipment.is_empty()));
        }
    }
}

#[test]
fn test_strength_title_follows_declared_tag() {
    let declared = strength_workout(Intensity::Easy, &kit(&[Equipment::NoEquipment]));
    assert_eq!(declared.title, "Bodyweight Strength Circuit");

    let undeclared = strength_workout(Intensity::Easy, &kit(&[]));
    assert_eq!(undeclared.title, "Full Body Strength Training");
}

#[test]
fn test_strength_equipment_ladder() {
    let gym = strength_workout(Intensity::Medium, &kit(&[Equipment::FullGym]));
    assert_eq!(
        names(&gym.exercises),
        vec!["Bench Press", "Barbell Rows", "Barbell Squats", "Plank"]
    );

    let bench = strength_workout(
        Intensity::Medium,
        &kit(&[Equipment::Dumbbells, Equipment::Bench]),
    );
    assert_eq!(
        names(&bench.exercises),
        vec![
            "Dumbbell Bench Press",
            "Dumbbell Rows",
            "Dumbbell Goblet Squats",
            "Plank"
        ]
    );

    let dumbbells = strength_workout(Intensity::Medium, &kit(&[Equipment::Dumbbells]));
    assert_eq!(dumbbells.exercises[0].name, "Floor Dumbbell Press");

    let kettlebells = strength_workout(
        Intensity::Medium,
        &kit(&[Equipment::Dumbbells, Equipment::Kettlebells]),
    );
    assert_eq!(kettlebells.exercises[2].name, "Kettlebell Goblet Squats");
}

#[test]
fn test_strength_tier_tables() {
    let sets: Vec<u32> = TIERS
        .iter()
        .map(|&i| strength_workout(i, &kit(&[])).exercises[0].sets)
        .collect();
    assert_eq!(sets, vec![3, 4, 5]);

    let durations: Vec<u32> = TIERS
        .iter()
        .map(|&i| strength_workout(i, &kit(&[])).duration_minutes)
        .collect();
    assert_eq!(durations, vec![30, 45, 60]);

    let hard = strength_workout(Intensity::Hard, &kit(&[Equipment::FullGym]));
    assert_eq!(hard.exercises[0].reps.to_string(), "6-8");
    assert_eq!(hard.exercises[0].rest_time.to_string(), "90 seconds");
    assert_eq!(hard.exercises[2].rest_time.to_string(), "120 seconds");
    assert_eq!(hard.exercises[3].reps.to_string(), "60 seconds");
    assert_eq!(hard.exercises[3].rest_time.to_string(), "45 seconds");

    let easy = strength_workout(Intensity::Easy, &kit(&[]));
    assert_eq!(easy.exercises[0].reps.to_string(), "8-10");
    assert_eq!(easy.exercises[0].rest_time.to_string(), "60 seconds");
    assert_eq!(easy.exercises[2].reps.to_string(), "15");

    let rows = strength_workout(Intensity::Medium, &kit(&[Equipment::Dumbbells]));
    assert_eq!(rows.exercises[1].reps.to_string(), "10-12 each side");
}

// Cardio

#[test]
fn test_cardio_template_per_tier() {
    let easy = cardio_workout(Intensity::Easy);
    assert_eq!(easy.title, "Walking Cardio");
    assert_eq!(easy.exercises[0].reps.to_string(), "30 minutes");

    let medium = cardio_workout(Intensity::Medium);
    assert_eq!(medium.title, "Jogging Intervals");
    assert_eq!(medium.exercises[0].sets, 8);
    assert_eq!(medium.exercises[0].reps.to_string(), "3 min jog, 1 min walk");
    assert_eq!(
        medium.exercises[0].rest_time.to_string(),
        "Walking periods serve as rest"
    );

    let hard = cardio_workout(Intensity::Hard);
    assert_eq!(hard.title, "Running Intervals");
    assert_eq!(hard.exercises[0].sets, 10);
    assert_eq!(hard.exercises[0].reps.to_string(), "2 min run, 1 min walk");

    assert!(TIERS
        .iter()
        .all(|&i| cardio_workout(i).duration_minutes == 30));
}

// HIIT

#[test]
fn test_hiit_medium_duration_for_six_exercises() {
    assert_eq!(hiit_exercise_count(Intensity::Medium), 6);
    assert_eq!(hiit_duration_minutes(Intensity::Medium, 6), 6);
}

#[test]
fn test_hiit_duration_rounds_up() {
    // Every tier spends 60s per exercise, so minutes equal the count
    assert_eq!(hiit_duration_minutes(Intensity::Easy, 5), 5);
    assert_eq!(hiit_duration_minutes(Intensity::Hard, 8), 8);
    assert_eq!(hiit_duration_minutes(Intensity::Hard, 1), 1);
    assert_eq!(hiit_duration_minutes(Intensity::Medium, 0), 0);
}

#[test]
fn test_hiit_pool_grows_with_free_weights() {
    assert_eq!(hiit_pool(Intensity::Easy, &kit(&[])).len(), 5);

    let dumbbells = hiit_pool(Intensity::Easy, &kit(&[Equipment::Dumbbells]));
    assert_eq!(dumbbells.len(), 7);
    assert_eq!(dumbbells[5].name, "Dumbbell Swings");
    assert_eq!(dumbbells[6].equipment, vec!["dumbbells".to_owned()]);

    let both = hiit_pool(
        Intensity::Easy,
        &kit(&[Equipment::Dumbbells, Equipment::Kettlebells]),
    );
    assert_eq!(both[5].name, "Kettlebell Swings");
    assert_eq!(both[6].name, "Kettlebell Squat Press");
}

#[test]
fn test_hiit_count_is_capped_by_pool() {
    let hard = hiit_workout(Intensity::Hard, &kit(&[]), &mut Identity);
    assert_eq!(hard.exercises.len(), 5);
    assert_eq!(hard.duration_minutes, 5);

    let stocked = hiit_workout(Intensity::Hard, &kit(&[Equipment::Kettlebells]), &mut Identity);
    assert_eq!(stocked.exercises.len(), 7);
    assert_eq!(stocked.duration_minutes, 7);
}

#[test]
fn test_hiit_work_and_rest_per_tier() {
    let expected = [
        (Intensity::Easy, "30 seconds", "30 seconds"),
        (Intensity::Medium, "40 seconds", "20 seconds"),
        (Intensity::Hard, "50 seconds", "10 seconds"),
    ];
    for (intensity, work, rest) in expected {
        let workout = hiit_workout(intensity, &kit(&[]), &mut Identity);
        assert!(workout
            .exercises
            .iter()
            .all(|e| e.reps.to_string() == work && e.rest_time.to_string() == rest));
    }
}

#[test]
fn test_hiit_selection_is_a_distinct_subset_of_the_pool() {
    let equipment = kit(&[Equipment::Dumbbells]);
    let pool: HashSet<String> = hiit_pool(Intensity::Medium, &equipment)
        .into_iter()
        .map(|e| e.name)
        .collect();

    for seed in 0..20 {
        let mut order = SeededShuffle::new(SelectionSeed(seed));
        let workout = hiit_workout(Intensity::Medium, &equipment, &mut order);
        let picked: HashSet<&str> = workout.exercises.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(picked.len(), 6);
        assert!(picked.iter().all(|name| pool.contains(*name)));
        assert_eq!(workout.duration_minutes, 6);
    }
}

#[test]
fn test_hiit_fixed_order() {
    let mut order = FixedOrder::new(vec![6, 5]);
    let workout = hiit_workout(Intensity::Easy, &kit(&[Equipment::Dumbbells]), &mut order);
    assert_eq!(
        names(&workout.exercises),
        vec![
            "Dumbbell Squat Press",
            "Dumbbell Swings",
            "Jumping Jacks",
            "Mountain Climbers",
            "Burpees"
        ]
    );
}

// Yoga

#[test]
fn test_yoga_easy_sequence() {
    let workout = yoga_workout(Intensity::Easy);
    assert_eq!(workout.title, "Gentle Yoga Flow");
    assert_eq!(
        names(&workout.exercises),
        vec![
            "Child's Pose",
            "Cat-Cow Stretch",
            "Downward-Facing Dog",
            "Mountain Pose",
            "Warrior I"
        ]
    );
}

#[test]
fn test_yoga_sequences_per_tier() {
    assert_eq!(
        names(&yoga_workout(Intensity::Medium).exercises),
        vec!["Sun Salutation A", "Warrior II", "Triangle Pose", "Boat Pose"]
    );
    assert_eq!(
        names(&yoga_workout(Intensity::Hard).exercises),
        vec!["Sun Salutation B", "Crow Pose", "Side Plank", "Wheel Pose"]
    );

    let medium = yoga_workout(Intensity::Medium);
    assert_eq!(medium.exercises[0].reps.to_string(), "Full sequence");
    assert_eq!(medium.exercises[1].reps.to_string(), "45 seconds each side");
}

#[test]
fn test_yoga_duration_and_mat() {
    let durations: Vec<u32> = TIERS
        .iter()
        .map(|&i| yoga_workout(i).duration_minutes)
        .collect();
    assert_eq!(durations, vec![20, 30, 45]);

    for intensity in TIERS {
        assert!(yoga_workout(intensity)
            .exercises
            .iter()
            .all(|e| e.equipment == vec!["yoga mat".to_owned()]
                && e.rest_time.to_string() == "None"));
    }
}
