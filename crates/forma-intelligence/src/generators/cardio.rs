// ABOUTME: Cardio workout generator with one session template per intensity tier
// ABOUTME: Brisk walking, jog/walk intervals, or run/walk intervals at a fixed duration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

use super::{exercise, WorkoutTemplate};
use forma_core::models::{Dose, Intensity, IntervalActivity, Rest, WorkoutCategory};

const DURATION_MINUTES: u32 = 30;
const TARGET: &str = "cardiovascular system";

/// Cardio session for the given tier
#[must_use]
pub fn cardio_workout(intensity: Intensity) -> WorkoutTemplate {
    let (title, description, session) = match intensity {
        Intensity::Easy => (
            "Walking Cardio",
            "A low-impact walking routine to build cardio endurance without stressing your joints.",
            exercise(
                "Brisk Walking",
                1,
                Dose::minutes(30),
                Rest::None,
                "Walk at a brisk pace where you can still hold a conversation but feel slightly breathless.",
                &[],
                TARGET,
            ),
        ),
        Intensity::Medium => (
            "Jogging Intervals",
            "Alternating between jogging and walking to build cardio endurance and burn calories.",
            exercise(
                "Jog/Walk Intervals",
                8,
                Dose::interval(3, IntervalActivity::Jog, 1, IntervalActivity::Walk),
                Rest::ActiveRecovery,
                "Alternate between jogging at a moderate pace and walking for recovery.",
                &[],
                TARGET,
            ),
        ),
        Intensity::Hard => (
            "Running Intervals",
            "High-intensity running intervals to maximize calorie burn and cardiovascular fitness.",
            exercise(
                "Running Intervals",
                10,
                Dose::interval(2, IntervalActivity::Run, 1, IntervalActivity::Walk),
                Rest::ActiveRecovery,
                "Alternate between running at a challenging pace and walking for recovery.",
                &[],
                TARGET,
            ),
        ),
    };

    WorkoutTemplate {
        title: title.to_owned(),
        description: description.to_owned(),
        duration_minutes: DURATION_MINUTES,
        intensity,
        category: WorkoutCategory::Cardio,
        exercises: vec![session],
    }
}
