// ABOUTME: Workout recommendation engine, catalog, and dashboard statistics for Forma
// ABOUTME: Pure generators keyed by intensity and equipment with injected selection ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

#![deny(unsafe_code)]

//! # Forma Intelligence
//!
//! The rule-based workout generator and everything it depends on. Nothing in
//! this crate performs I/O or reads the clock (apart from [`stats::greeting_now`]),
//! so every result is reproducible from a profile and a [`SelectionSeed`].
//!
//! ## Modules
//!
//! - **generators**: strength, cardio, HIIT, and yoga sub-generators
//! - **recommendation_engine**: the preference, backfill, and goal passes
//! - **selection**: seeded shuffles, fixed orderings, and workout ids
//! - **catalog**: the static workout library and home screen picks
//! - **stats**: stat cards, achievements, and greetings
//! - **config**: engine configuration

/// Static workout library
pub mod catalog;
/// Engine configuration
pub mod config;
/// Per-category workout sub-generators
pub mod generators;
/// Profile to workout plan generation
pub mod recommendation_engine;
/// Injected selection ordering
pub mod selection;
/// Dashboard statistics helpers
pub mod stats;

pub use catalog::{filter_catalog, home_recommendations, workout_catalog, CategoryFilter};
pub use config::{ConfigError, RecommendationEngineConfig};
pub use recommendation_engine::{WorkoutGenerator, WorkoutRecommender};
pub use selection::{FixedOrder, Identity, SeededShuffle, SelectionOrder, SelectionSeed};
