// ABOUTME: Configuration module for the forma-intelligence crate
// ABOUTME: Re-exports recommendation engine configuration and its error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

/// Configuration validation errors
pub mod error;
/// Recommendation engine settings and category imagery
pub mod recommendation;

pub use error::ConfigError;
pub use recommendation::{RecommendationEngineConfig, WorkoutImages};
