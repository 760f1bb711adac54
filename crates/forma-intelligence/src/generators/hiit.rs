// ABOUTME: HIIT workout generator drawing a tier-sized pick from an equipment-aware pool
// ABOUTME: Work/rest seconds per tier and total duration derived from the pick size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

use super::{exercise, FreeWeight, Kit, WorkoutTemplate};
use crate::selection::SelectionOrder;
use forma_core::models::{Dose, Equipment, Exercise, Intensity, Rest, TierValues, WorkoutCategory};
use std::collections::BTreeSet;

const WORK_SECONDS: TierValues<u32> = TierValues::new(30, 40, 50);
const REST_SECONDS: TierValues<u32> = TierValues::new(30, 20, 10);
const EXERCISE_COUNT: TierValues<usize> = TierValues::new(5, 6, 8);

/// Bodyweight moves always in the pool: name, description, target
const BODYWEIGHT_MOVES: [(&str, &str, &str); 5] = [
    (
        "Jumping Jacks",
        "Start with feet together and arms at sides, jump feet out and arms up, then back to start position.",
        "full body",
    ),
    (
        "Mountain Climbers",
        "In plank position, quickly alternate bringing knees toward chest.",
        "core, shoulders",
    ),
    (
        "Burpees",
        "From standing, squat down, kick feet back to plank, perform a push-up, jump feet forward, and jump up with arms overhead.",
        "full body",
    ),
    (
        "High Knees",
        "Jog in place, lifting knees as high as possible toward chest.",
        "core, legs",
    ),
    (
        "Plank Jacks",
        "In plank position, jump feet out wide and back together like a jumping jack.",
        "core, shoulders",
    ),
];

/// Number of exercises a tier asks for before the pool size caps it
#[must_use]
pub const fn hiit_exercise_count(intensity: Intensity) -> usize {
    EXERCISE_COUNT.pick(intensity)
}

/// Total minutes for `count` exercises: `ceil(count * (work + rest) / 60)`
#[must_use]
pub fn hiit_duration_minutes(intensity: Intensity, count: usize) -> u32 {
    let per_exercise = WORK_SECONDS.pick(intensity) + REST_SECONDS.pick(intensity);
    let count = u32::try_from(count).unwrap_or(u32::MAX);
    count.saturating_mul(per_exercise).div_ceil(60)
}

/// Candidate pool in authoring order; two weighted moves join when a free weight is available
#[must_use]
pub fn hiit_pool(intensity: Intensity, equipment: &BTreeSet<Equipment>) -> Vec<Exercise> {
    let work = Dose::seconds(WORK_SECONDS.pick(intensity));
    let rest = Rest::seconds(REST_SECONDS.pick(intensity));

    let mut pool: Vec<Exercise> = BODYWEIGHT_MOVES
        .iter()
        .map(|&(name, description, target)| exercise(name, 1, work, rest, description, &[], target))
        .collect();

    if let Some(weight) = Kit::from_equipment(equipment).free_weight() {
        pool.extend(weighted_moves(weight, work, rest));
    }
    pool
}

fn weighted_moves(weight: FreeWeight, work: Dose, rest: Rest) -> [Exercise; 2] {
    let noun = weight.noun();
    [
        exercise(
            format!("{} Swings", weight.title()),
            1,
            work,
            rest,
            format!(
                "Hold {noun} with both hands, hinge at hips and swing {noun} between legs, then thrust hips forward to swing {noun} to chest height."
            ),
            &[weight.tag()],
            "posterior chain",
        ),
        exercise(
            format!("{} Squat Press", weight.title()),
            1,
            work,
            rest,
            format!(
                "Hold {noun}(s) at shoulder height, perform a squat, then press {noun}(s) overhead as you stand."
            ),
            &[weight.tag()],
            "legs, shoulders",
        ),
    ]
}

/// HIIT session whose exercises are the first `min(count, pool)` entries of `order`
#[must_use]
pub fn hiit_workout(
    intensity: Intensity,
    equipment: &BTreeSet<Equipment>,
    order: &mut dyn SelectionOrder,
) -> WorkoutTemplate {
    let pool = hiit_pool(intensity, equipment);
    let wanted = hiit_exercise_count(intensity).min(pool.len());

    let exercises: Vec<Exercise> = order
        .order(pool.len())
        .into_iter()
        .take(wanted)
        .filter_map(|index| pool.get(index).cloned())
        .collect();

    WorkoutTemplate {
        title: "HIIT Cardio Blast".to_owned(),
        description: "A high-intensity interval training workout to boost cardio endurance and maximize calorie burn.".to_owned(),
        duration_minutes: hiit_duration_minutes(intensity, exercises.len()),
        intensity,
        category: WorkoutCategory::Hiit,
        exercises,
    }
}
