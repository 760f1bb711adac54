// ABOUTME: Structured exercise prescriptions (reps, holds, intervals, rest periods)
// ABOUTME: Keeps tier-driven values numeric and renders display strings only on demand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

//! Exercise prescriptions
//!
//! Rep counts and durations are numeric internally and become display text
//! ("8-10", "30 seconds each side", "3 min jog, 1 min walk") through `Display`.

use super::Intensity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One value per intensity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierValues<T> {
    /// Value for `Easy`
    pub easy: T,
    /// Value for `Medium`
    pub medium: T,
    /// Value for `Hard`
    pub hard: T,
}

impl<T: Copy> TierValues<T> {
    /// Build a tier table
    pub const fn new(easy: T, medium: T, hard: T) -> Self {
        Self { easy, medium, hard }
    }

    /// Value for the given tier
    pub const fn pick(&self, intensity: Intensity) -> T {
        match intensity {
            Intensity::Easy => self.easy,
            Intensity::Medium => self.medium,
            Intensity::Hard => self.hard,
        }
    }
}

/// What a single set asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DoseAmount {
    /// Fixed repetition count
    Reps {
        /// Repetitions
        count: u32,
    },
    /// Repetition range
    RepRange {
        /// Lower bound
        min: u32,
        /// Upper bound
        max: u32,
    },
    /// Timed work in seconds
    Seconds {
        /// Seconds of work
        seconds: u32,
    },
    /// Timed work in minutes
    Minutes {
        /// Minutes of work
        minutes: u32,
    },
    /// Alternating work/recovery blocks within one set
    Interval {
        /// Minutes of work
        work_minutes: u32,
        /// Work activity
        work: IntervalActivity,
        /// Minutes of recovery
        recover_minutes: u32,
        /// Recovery activity
        recover: IntervalActivity,
    },
    /// One pass through a flowing sequence
    FullSequence,
}

/// Activity performed during one block of an interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalActivity {
    /// Brisk walk
    Walk,
    /// Moderate jog
    Jog,
    /// Challenging run
    Run,
}

impl fmt::Display for IntervalActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Walk => "walk",
            Self::Jog => "jog",
            Self::Run => "run",
        })
    }
}

/// Qualifier appended to the amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoseModifier {
    /// Performed once per side
    EachSide,
    /// Two movements alternated for the duration
    Alternating,
}

/// Prescription for one set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dose {
    /// Amount of work
    pub amount: DoseAmount,
    /// Optional qualifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<DoseModifier>,
}

impl Dose {
    /// Fixed repetition count
    #[must_use]
    pub const fn reps(count: u32) -> Self {
        Self::plain(DoseAmount::Reps { count })
    }

    /// Repetition range
    #[must_use]
    pub const fn rep_range(min: u32, max: u32) -> Self {
        Self::plain(DoseAmount::RepRange { min, max })
    }

    /// Timed hold or effort in seconds
    #[must_use]
    pub const fn seconds(seconds: u32) -> Self {
        Self::plain(DoseAmount::Seconds { seconds })
    }

    /// Timed effort in minutes
    #[must_use]
    pub const fn minutes(minutes: u32) -> Self {
        Self::plain(DoseAmount::Minutes { minutes })
    }

    /// Work/recovery interval
    #[must_use]
    pub const fn interval(
        work_minutes: u32,
        work: IntervalActivity,
        recover_minutes: u32,
        recover: IntervalActivity,
    ) -> Self {
        Self::plain(DoseAmount::Interval {
            work_minutes,
            work,
            recover_minutes,
            recover,
        })
    }

    /// A full flow sequence
    #[must_use]
    pub const fn full_sequence() -> Self {
        Self::plain(DoseAmount::FullSequence)
    }

    const fn plain(amount: DoseAmount) -> Self {
        Self {
            amount,
            modifier: None,
        }
    }

    /// Mark the dose as per side
    #[must_use]
    pub const fn each_side(self) -> Self {
        Self {
            modifier: Some(DoseModifier::EachSide),
            ..self
        }
    }

    /// Mark the dose as alternating
    #[must_use]
    pub const fn alternating(self) -> Self {
        Self {
            modifier: Some(DoseModifier::Alternating),
            ..self
        }
    }

    /// Work time in seconds for timed doses
    #[must_use]
    pub const fn work_seconds(&self) -> Option<u32> {
        match self.amount {
            DoseAmount::Seconds { seconds } => Some(seconds),
            DoseAmount::Minutes { minutes } => Some(minutes * 60),
            _ => None,
        }
    }
}

impl fmt::Display for Dose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.amount {
            DoseAmount::Reps { count } => write!(f, "{count}")?,
            DoseAmount::RepRange { min, max } => write!(f, "{min}-{max}")?,
            DoseAmount::Seconds { seconds } => write_unit(f, seconds, "second")?,
            DoseAmount::Minutes { minutes } => write_unit(f, minutes, "minute")?,
            DoseAmount::Interval {
                work_minutes,
                work,
                recover_minutes,
                recover,
            } => write!(f, "{work_minutes} min {work}, {recover_minutes} min {recover}")?,
            DoseAmount::FullSequence => f.write_str("Full sequence")?,
        }
        match self.modifier {
            Some(DoseModifier::EachSide) => f.write_str(" each side"),
            Some(DoseModifier::Alternating) => f.write_str(" (alternating)"),
            None => Ok(()),
        }
    }
}

fn write_unit(f: &mut fmt::Formatter<'_>, value: u32, unit: &str) -> fmt::Result {
    if value == 1 {
        write!(f, "{value} {unit}")
    } else {
        write!(f, "{value} {unit}s")
    }
}

/// Rest after each set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rest {
    /// Passive rest in seconds
    Seconds {
        /// Seconds of rest
        seconds: u32,
    },
    /// Continuous effort, no rest
    None,
    /// Recovery happens in the easy blocks of an interval
    ActiveRecovery,
}

impl Rest {
    /// Passive rest in seconds
    #[must_use]
    pub const fn seconds(seconds: u32) -> Self {
        Self::Seconds { seconds }
    }

    /// Rest time in seconds, zero for continuous work
    #[must_use]
    pub const fn as_seconds(&self) -> u32 {
        match self {
            Self::Seconds { seconds } => *seconds,
            Self::None | Self::ActiveRecovery => 0,
        }
    }
}

impl fmt::Display for Rest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seconds { seconds } => write_unit(f, *seconds, "second"),
            Self::None => f.write_str("None"),
            Self::ActiveRecovery => f.write_str("Walking periods serve as rest"),
        }
    }
}
