// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Onboarding ranges, generator limits, analyzer defaults, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

//! Constants module
//!
//! Constants are grouped by the component that owns them.

/// Onboarding validation ranges (inclusive)
pub mod onboarding {
    /// Youngest supported user
    pub const MIN_AGE: u32 = 13;
    /// Oldest supported user
    pub const MAX_AGE: u32 = 100;
    /// Lowest accepted body weight in pounds
    pub const MIN_WEIGHT_LBS: f64 = 30.0;
    /// Highest accepted body weight in pounds
    pub const MAX_WEIGHT_LBS: f64 = 500.0;
    /// Shortest accepted height in centimeters
    pub const MIN_HEIGHT_CM: f64 = 100.0;
    /// Tallest accepted height in centimeters
    pub const MAX_HEIGHT_CM: f64 = 250.0;
    /// Number of wizard steps including the welcome screen
    pub const TOTAL_STEPS: usize = 5;
}

/// Recommendation generator limits
pub mod generation {
    /// Below this many preference-driven workouts, strength and cardio are backfilled
    pub const DEFAULT_BACKFILL_THRESHOLD: usize = 3;
    /// Number of catalog workouts shown on the home screen
    pub const HOME_RECOMMENDATION_LIMIT: usize = 2;
}

/// Nutrition analyzer defaults
pub mod nutrition {
    /// Simulated analyzer latency in milliseconds
    pub const DEFAULT_ANALYZER_LATENCY_MS: u64 = 3_000;
    /// Upper bound accepted from configuration
    pub const MAX_ANALYZER_LATENCY_MS: u64 = 60_000;
    /// Protein grams that fill the protein bar
    pub const PROTEIN_BAR_FULL_G: f64 = 50.0;
    /// Carbohydrate grams that fill the carbs bar
    pub const CARBS_BAR_FULL_G: f64 = 100.0;
    /// Fat grams that fill the fat bar
    pub const FAT_BAR_FULL_G: f64 = 50.0;
}

/// Service identification for structured logging
pub mod service_names {
    /// Default service name
    pub const FORMA: &str = "forma";
}
