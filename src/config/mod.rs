// ABOUTME: Configuration management module for the Forma session services
// ABOUTME: Environment configuration plus re-exported recommendation engine settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness
//! Configuration module
//!
//! - **Environment**: analyzer latency, selection seed, engine overrides
//! - **Engine**: recommendation engine settings from `forma-intelligence`

/// Environment configuration
pub mod environment;

pub use environment::FormaConfig;
pub use forma_intelligence::config::{ConfigError, RecommendationEngineConfig, WorkoutImages};
