// ABOUTME: Nutrition module with the food analyzer boundary, scanner state, and meal history
// ABOUTME: Images from camera or upload are normalized before reaching the analyzer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

//! Nutrition scanning
//!
//! - **Image**: normalized byte buffer for camera frames and uploads
//! - **Analyzer**: `FoodAnalyzer` collaborator trait and the deterministic mock
//! - **Scanner**: per-session state with an abortable analysis task
//! - **History**: saved meals with daily totals

/// Food analyzer boundary and mock
pub mod analyzer;
/// Saved meal log
pub mod history;
/// Normalized image buffers
pub mod image;
/// Scanner session state
pub mod scanner;

pub use analyzer::{canned_index, canned_result, image_hash, FoodAnalyzer, MockFoodAnalyzer};
pub use history::{MealHistory, MealTotals};
pub use image::{ImageData, ImageSource};
pub use scanner::{CaptureTab, NutritionScanner};
