// ABOUTME: Yoga workout generator with a hand-authored pose sequence per tier
// ABOUTME: Gentle, balanced, and power flows with fixed per-tier durations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

use super::{exercise, WorkoutTemplate};
use forma_core::models::{Dose, Exercise, Intensity, Rest, TierValues, WorkoutCategory};

/// Independent of the poses chosen
const DURATION_MINUTES: TierValues<u32> = TierValues::new(20, 30, 45);
const MAT: &[&str] = &["yoga mat"];

/// Yoga flow for the given tier
#[must_use]
pub fn yoga_workout(intensity: Intensity) -> WorkoutTemplate {
    let (title, description, exercises) = match intensity {
        Intensity::Easy => (
            "Gentle Yoga Flow",
            "A calming sequence of basic yoga poses to improve flexibility and reduce stress.",
            gentle_sequence(),
        ),
        Intensity::Medium => (
            "Balanced Yoga Flow",
            "A balanced sequence of intermediate yoga poses to build strength and flexibility.",
            balanced_sequence(),
        ),
        Intensity::Hard => (
            "Power Yoga Flow",
            "An energetic sequence of advanced yoga poses to build strength, flexibility, and balance.",
            power_sequence(),
        ),
    };

    WorkoutTemplate {
        title: title.to_owned(),
        description: description.to_owned(),
        duration_minutes: DURATION_MINUTES.pick(intensity),
        intensity,
        category: WorkoutCategory::Yoga,
        exercises,
    }
}

fn pose(name: &str, sets: u32, hold: Dose, description: &str, target: &str) -> Exercise {
    exercise(name, sets, hold, Rest::None, description, MAT, target)
}

fn gentle_sequence() -> Vec<Exercise> {
    vec![
        pose(
            "Child's Pose",
            1,
            Dose::minutes(1),
            "Kneel on the floor, touch big toes together and sit on heels, then fold forward with arms extended or by your side.",
            "back, hips",
        ),
        pose(
            "Cat-Cow Stretch",
            1,
            Dose::minutes(1).alternating(),
            "On hands and knees, alternate between arching and rounding your back while breathing deeply.",
            "spine",
        ),
        pose(
            "Downward-Facing Dog",
            1,
            Dose::minutes(1),
            "Form an inverted V-shape with your body, hands and feet on the floor, hips high, heels reaching toward floor.",
            "full body",
        ),
        pose(
            "Mountain Pose",
            1,
            Dose::seconds(30),
            "Stand tall with feet together, arms at sides, weight evenly distributed through feet.",
            "posture muscles",
        ),
        pose(
            "Warrior I",
            1,
            Dose::seconds(30).each_side(),
            "From mountain pose, step one foot back, turn it out, bend front knee, and raise arms overhead.",
            "legs, shoulders",
        ),
    ]
}

fn balanced_sequence() -> Vec<Exercise> {
    vec![
        pose(
            "Sun Salutation A",
            3,
            Dose::full_sequence(),
            "A flowing sequence of poses: mountain pose, forward fold, half-lift, plank, low push-up, upward dog, downward dog, and back to standing.",
            "full body",
        ),
        pose(
            "Warrior II",
            1,
            Dose::seconds(45).each_side(),
            "From mountain pose, step one foot back, turn it out, bend front knee, and extend arms parallel to floor.",
            "legs, shoulders",
        ),
        pose(
            "Triangle Pose",
            1,
            Dose::seconds(45).each_side(),
            "From warrior II, straighten front leg, hinge at hip, and reach hand toward floor with opposite arm extended upward.",
            "legs, obliques",
        ),
        pose(
            "Boat Pose",
            1,
            Dose::seconds(30),
            "Sit on floor, lift legs off ground with knees bent or straight, balance on sit bones with chest lifted.",
            "core",
        ),
    ]
}

fn power_sequence() -> Vec<Exercise> {
    vec![
        pose(
            "Sun Salutation B",
            3,
            Dose::full_sequence(),
            "An extended sun salutation sequence adding chair pose and warrior I poses to the flow.",
            "full body",
        ),
        pose(
            "Crow Pose",
            1,
            Dose::seconds(30),
            "Place hands on floor, knees on back of arms, lean forward until feet lift off floor.",
            "arms, core",
        ),
        pose(
            "Side Plank",
            1,
            Dose::seconds(30).each_side(),
            "From plank position, rotate onto one hand and outer edge of same-side foot, extend other arm upward.",
            "core, shoulders",
        ),
        pose(
            "Wheel Pose",
            1,
            Dose::seconds(30),
            "Lie on back, place hands by ears, lift hips and chest to form an arch with body.",
            "spine, chest, shoulders",
        ),
    ]
}
