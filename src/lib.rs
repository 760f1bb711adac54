// ABOUTME: Main library entry point for the Forma fitness application services
// ABOUTME: Onboarding, nutrition scanning, camera capture, configuration, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

#![deny(unsafe_code)]

//! # Forma
//!
//! Session-level services of the Forma fitness app, layered on the workspace
//! crates:
//!
//! - **`forma-core`**: profile, workout, and nutrition models plus errors
//! - **`forma-intelligence`**: the workout recommendation generator and catalog
//! - **this crate**: onboarding wizard, nutrition scanner, camera capture,
//!   environment configuration, and logging setup
//!
//! All state is in memory and lives for the session only.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use forma::config::FormaConfig;
//! use forma::errors::AppResult;
//! use forma::onboarding::ProfileSession;
//!
//! fn main() -> AppResult<()> {
//!     let config = FormaConfig::from_env()?;
//!     let session = ProfileSession::new(config);
//!     let mut wizard = session.begin_onboarding();
//!     wizard.basic_info.name = "Alex".into();
//!     Ok(())
//! }
//! ```

/// Camera capture with upload fallback
pub mod capture;

/// Environment configuration
pub mod config;

/// Unified error handling shared with `forma-core`
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Food analysis, scanner state, and meal history
pub mod nutrition;

/// Onboarding wizard and profile session
pub mod onboarding;

pub use forma_core;
pub use forma_intelligence;

pub use forma_core::models::{
    Equipment, Exercise, FitnessGoal, FitnessLevel, Gender, Intensity, UserProfile, Workout,
    WorkoutCategory, WorkoutType,
};
pub use forma_intelligence::{SelectionSeed, WorkoutGenerator, WorkoutRecommender};
