// ABOUTME: Nutrition models for food photo analysis and the session meal history
// ABOUTME: NutritionResult, MacroBars, and MealHistoryEntry definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

use crate::constants::nutrition::{CARBS_BAR_FULL_G, FAT_BAR_FULL_G, PROTEIN_BAR_FULL_G};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Nutrition estimate for one photographed dish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionResult {
    /// Recognized dish
    pub food_name: String,
    /// Energy in kcal
    pub calories: u32,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
    /// Serving description
    pub serving_size: String,
}

/// Fill fractions for the macro progress bars, each in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroBars {
    /// Protein bar
    pub protein: f64,
    /// Carbohydrate bar
    pub carbs: f64,
    /// Fat bar
    pub fat: f64,
}

impl NutritionResult {
    /// Macro bar fill fractions
    #[must_use]
    pub fn macro_bars(&self) -> MacroBars {
        MacroBars {
            protein: fill(self.protein, PROTEIN_BAR_FULL_G),
            carbs: fill(self.carbs, CARBS_BAR_FULL_G),
            fat: fill(self.fat, FAT_BAR_FULL_G),
        }
    }
}

fn fill(grams: f64, full: f64) -> f64 {
    (grams / full).clamp(0.0, 1.0)
}

/// Saved analysis in the in-memory meal history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealHistoryEntry {
    /// Entry id
    pub id: Uuid,
    /// When the result was saved
    pub logged_at: DateTime<Utc>,
    /// The saved estimate
    pub result: NutritionResult,
}

impl MealHistoryEntry {
    /// Stamp a result for the meal history
    #[must_use]
    pub fn new(result: NutritionResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            logged_at: Utc::now(),
            result,
        }
    }
}
