// ABOUTME: Core types and constants for the Forma fitness companion
// ABOUTME: Foundation crate with the data model, prescriptions, and error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

#![deny(unsafe_code)]

//! # Forma Core
//!
//! Foundation crate providing shared types and constants for Forma. It changes
//! rarely, so the intelligence crate and the root crate compile against a stable base.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and field-scoped `ValidationErrors`
//! - **constants**: onboarding ranges, generator limits, analyzer defaults
//! - **models**: profiles, workouts, prescriptions, nutrition results

/// Unified error handling with stable error codes
pub mod errors;

/// Application constants organized by component
pub mod constants;

/// Core data models
pub mod models;
