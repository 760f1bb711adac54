// ABOUTME: Error types re-exported from forma-core for the root crate
// ABOUTME: AppError, ErrorCode, AppResult, and field-scoped validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

//! Unified error handling shared by every Forma crate

pub use forma_core::errors::*;
