// ABOUTME: Dashboard statistics helpers for stat cards, achievements, and greetings
// ABOUTME: Lenient numeric parsing of display values and day-change percentages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

//! Dashboard statistics
//!
//! Stat card values are display strings such as `"72 bpm"` or `"7h 24m"`. The
//! change percentage reads only the leading number of each value, so `"5,248"`
//! compares as `5`. That matches how the values were always compared and is
//! kept as-is.

use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label shown next to a stat card's change percentage
pub const CHANGE_LABEL: &str = "vs yesterday";

/// Direction a stat moved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Improved
    Up,
    /// Declined
    Down,
    /// No meaningful movement
    #[default]
    Neutral,
}

impl Trend {
    /// Glyph rendered before the percentage
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Down => "↓",
            Self::Neutral => "•",
        }
    }
}

/// One dashboard stat card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    /// Card title
    pub title: String,
    /// Current display value
    pub value: String,
    /// Previous display value, if tracked
    pub previous_value: Option<String>,
    /// Direction indicator
    pub trend: Trend,
}

impl StatCard {
    /// Card without a previous value
    #[must_use]
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            previous_value: None,
            trend: Trend::Neutral,
        }
    }

    /// Attach the previous value and trend
    #[must_use]
    pub fn with_previous(mut self, previous: impl Into<String>, trend: Trend) -> Self {
        self.previous_value = Some(previous.into());
        self.trend = trend;
        self
    }

    /// Change from the previous value in percent, rounded to one decimal
    ///
    /// `None` when there is no previous value, either value has no leading
    /// number, or the previous value is zero.
    #[must_use]
    pub fn percentage_change(&self) -> Option<f64> {
        let previous = self.previous_value.as_deref().filter(|p| !p.is_empty())?;
        let current = leading_number(&self.value)?;
        let previous = leading_number(previous)?;
        if previous.abs() < f64::EPSILON {
            return None;
        }
        let change = (current - previous) / previous * 100.0;
        Some((change * 10.0).round() / 10.0)
    }

    /// Change line such as `"↑ 5.9%"`, when a change can be computed
    #[must_use]
    pub fn change_text(&self) -> Option<String> {
        self.percentage_change()
            .map(|change| format!("{} {change:.1}%", self.trend.glyph()))
    }
}

/// Parse the leading decimal number of a display string
///
/// Accepts optional leading whitespace, a sign, digits with at most one
/// decimal point, and an optional exponent. Everything after is ignored.
#[must_use]
pub fn leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let mantissa_start = end;
    let mut seen_point = false;
    while let Some(&byte) = bytes.get(end) {
        match byte {
            b'0'..=b'9' => end += 1,
            b'.' if !seen_point => {
                seen_point = true;
                end += 1;
            }
            _ => break,
        }
    }
    let mantissa = &text[mantissa_start..end];
    if !mantissa.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }

    // Exponent only counts when digits follow it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    text[..end].parse().ok()
}

/// Profile achievement with completion progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    /// Title
    pub title: String,
    /// What earns it
    pub description: String,
    progress: u8,
}

impl Achievement {
    /// Achievement with progress clamped to `0..=100`
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>, progress: u32) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            progress: u8::try_from(progress.min(100)).unwrap_or(100),
        }
    }

    /// Progress percentage
    #[must_use]
    pub const fn progress(&self) -> u8 {
        self.progress
    }

    /// Whether the achievement is earned
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.progress == 100
    }

    /// Badge text: a check mark when complete, otherwise the percentage
    #[must_use]
    pub fn badge(&self) -> String {
        if self.is_complete() {
            "✓".to_owned()
        } else {
            format!("{}%", self.progress)
        }
    }
}

/// Labeled profile statistic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStat {
    /// Label
    pub label: String,
    /// Display value
    pub value: String,
}

/// Stats and achievements shown on the profile screen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    /// Headline stats in display order
    pub stats: Vec<ProfileStat>,
    /// Achievements in display order
    pub achievements: Vec<Achievement>,
}

impl ProfileSummary {
    /// Append a stat
    #[must_use]
    pub fn with_stat(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.stats.push(ProfileStat {
            label: label.into(),
            value: value.into(),
        });
        self
    }

    /// Append an achievement
    #[must_use]
    pub fn with_achievement(mut self, achievement: Achievement) -> Self {
        self.achievements.push(achievement);
        self
    }

    /// Earned achievements
    pub fn completed(&self) -> impl Iterator<Item = &Achievement> {
        self.achievements.iter().filter(|a| a.is_complete())
    }
}

impl fmt::Display for ProfileStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// Home screen greeting for an hour of the day (0-23)
#[must_use]
pub const fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 18 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

/// Greeting for the current local time
#[must_use]
pub fn greeting_now() -> &'static str {
    greeting_for_hour(Local::now().hour())
}
