// ABOUTME: Strength workout generator using an equipment-priority ladder
// ABOUTME: Picks one push, one pull, one leg movement, and a plank scaled by intensity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

use super::{exercise, FreeWeight, Kit, WorkoutTemplate};
use forma_core::models::{Dose, Equipment, Exercise, Intensity, Rest, TierValues, WorkoutCategory};
use std::collections::BTreeSet;

const SETS: TierValues<u32> = TierValues::new(3, 4, 5);
const DURATION_MINUTES: TierValues<u32> = TierValues::new(30, 45, 60);

const BARBELL_REPS: TierValues<Dose> =
    TierValues::new(Dose::reps(10), Dose::rep_range(8, 10), Dose::rep_range(6, 8));
const FREE_WEIGHT_REPS: TierValues<Dose> =
    TierValues::new(Dose::reps(12), Dose::rep_range(10, 12), Dose::rep_range(8, 10));
const PUSH_UP_REPS: TierValues<Dose> = TierValues::new(
    Dose::rep_range(8, 10),
    Dose::rep_range(12, 15),
    Dose::rep_range(15, 20),
);
const INVERTED_ROW_REPS: TierValues<Dose> = TierValues::new(
    Dose::rep_range(8, 10),
    Dose::rep_range(10, 12),
    Dose::rep_range(12, 15),
);
const BODYWEIGHT_SQUAT_REPS: TierValues<Dose> =
    TierValues::new(Dose::reps(15), Dose::reps(20), Dose::reps(25));
const PLANK_HOLD: TierValues<Dose> =
    TierValues::new(Dose::seconds(30), Dose::seconds(45), Dose::seconds(60));

const LOADED_REST: Rest = Rest::seconds(90);
const SQUAT_RACK_REST: Rest = Rest::seconds(120);
const BODYWEIGHT_REST: Rest = Rest::seconds(60);
const CORE_REST: Rest = Rest::seconds(45);

/// Full-body strength session for the given tier and equipment
///
/// Ladder per movement: full gym, then dumbbells with bench, then dumbbells
/// (kettlebells for legs), then bodyweight. The plank is always last.
#[must_use]
pub fn strength_workout(intensity: Intensity, equipment: &BTreeSet<Equipment>) -> WorkoutTemplate {
    let kit = Kit::from_equipment(equipment);
    let sets = SETS.pick(intensity);

    let exercises = vec![
        push_exercise(kit, intensity, sets),
        pull_exercise(kit, intensity, sets),
        leg_exercise(kit, intensity, sets),
        exercise(
            "Plank",
            sets,
            PLANK_HOLD.pick(intensity),
            CORE_REST,
            "Support your weight on forearms and toes, keep body in straight line from head to heels.",
            &[],
            "core",
        ),
    ];

    // Title follows the declared tag, not the exercises actually chosen
    let (title, style) = if kit.declared_none {
        ("Bodyweight Strength Circuit", "bodyweight")
    } else {
        ("Full Body Strength Training", "equipment-based")
    };

    WorkoutTemplate {
        title: title.to_owned(),
        description: format!(
            "A comprehensive {style} strength workout targeting all major muscle groups."
        ),
        duration_minutes: DURATION_MINUTES.pick(intensity),
        intensity,
        category: WorkoutCategory::Strength,
        exercises,
    }
}

fn push_exercise(kit: Kit, intensity: Intensity, sets: u32) -> Exercise {
    if kit.gym {
        exercise(
            "Bench Press",
            sets,
            BARBELL_REPS.pick(intensity),
            LOADED_REST,
            "Lie on a bench, grip the bar slightly wider than shoulder-width, lower to chest and press back up.",
            &["barbell", "bench"],
            "chest",
        )
    } else if kit.dumbbells && kit.bench {
        exercise(
            "Dumbbell Bench Press",
            sets,
            FREE_WEIGHT_REPS.pick(intensity),
            LOADED_REST,
            "Lie on a bench with dumbbells at chest level, press up until arms are extended.",
            &["dumbbells", "bench"],
            "chest",
        )
    } else if kit.dumbbells {
        exercise(
            "Floor Dumbbell Press",
            sets,
            FREE_WEIGHT_REPS.pick(intensity),
            LOADED_REST,
            "Lie on the floor with dumbbells at chest level, press up until arms are extended.",
            &["dumbbells"],
            "chest",
        )
    } else {
        exercise(
            "Push-ups",
            sets,
            PUSH_UP_REPS.pick(intensity),
            BODYWEIGHT_REST,
            "Place hands shoulder-width apart, lower body until chest nearly touches floor, push back up.",
            &[],
            "chest",
        )
    }
}

fn pull_exercise(kit: Kit, intensity: Intensity, sets: u32) -> Exercise {
    if kit.gym {
        exercise(
            "Barbell Rows",
            sets,
            BARBELL_REPS.pick(intensity),
            LOADED_REST,
            "Bend at hips with slight knee bend, pull barbell to lower chest, lower with control.",
            &["barbell"],
            "back",
        )
    } else if kit.dumbbells {
        exercise(
            "Dumbbell Rows",
            sets,
            FREE_WEIGHT_REPS.pick(intensity).each_side(),
            LOADED_REST,
            "Place one hand and knee on bench, pull dumbbell to hip, lower with control.",
            &["dumbbells"],
            "back",
        )
    } else {
        exercise(
            "Inverted Rows",
            sets,
            INVERTED_ROW_REPS.pick(intensity),
            BODYWEIGHT_REST,
            "Position yourself under a table or bar, pull chest toward the bar, lower with control.",
            &[],
            "back",
        )
    }
}

fn leg_exercise(kit: Kit, intensity: Intensity, sets: u32) -> Exercise {
    if kit.gym {
        return exercise(
            "Barbell Squats",
            sets,
            BARBELL_REPS.pick(intensity),
            SQUAT_RACK_REST,
            "Place barbell on upper back, squat down until thighs are parallel to floor, stand back up.",
            &["barbell", "squat rack"],
            "legs",
        );
    }

    match kit.free_weight() {
        Some(weight) => goblet_squat(weight, intensity, sets),
        None => exercise(
            "Bodyweight Squats",
            sets,
            BODYWEIGHT_SQUAT_REPS.pick(intensity),
            BODYWEIGHT_REST,
            "Stand with feet shoulder-width apart, squat down until thighs are parallel to floor, stand back up.",
            &[],
            "legs",
        ),
    }
}

fn goblet_squat(weight: FreeWeight, intensity: Intensity, sets: u32) -> Exercise {
    exercise(
        format!("{} Goblet Squats", weight.title()),
        sets,
        FREE_WEIGHT_REPS.pick(intensity),
        LOADED_REST,
        format!(
            "Hold {} at chest level, squat down until thighs are parallel to floor, stand back up.",
            weight.noun()
        ),
        &[weight.tag()],
        "legs",
    )
}
