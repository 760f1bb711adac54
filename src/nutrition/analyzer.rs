// ABOUTME: Food analyzer collaborator boundary and the deterministic mock implementation
// ABOUTME: Mock picks one of four canned results from a rolling hash of the image bytes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

//! Food analyzer
//!
//! A real deployment would call an external vision service behind
//! [`FoodAnalyzer`]. The bundled [`MockFoodAnalyzer`] waits a fixed delay and
//! then maps the image to one of four canned records via
//! `|hash(bytes)| mod 4`, where `hash` is the 32-bit polynomial rolling hash
//! `h = h * 31 + byte`.

use super::image::ImageData;
use crate::config::FormaConfig;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use forma_core::constants::nutrition::DEFAULT_ANALYZER_LATENCY_MS;
use forma_core::models::NutritionResult;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};

/// Dish name, kcal, protein g, carbs g, fat g, serving
const CANNED_RESULTS: [(&str, u32, f64, f64, f64, &str); 4] = [
    ("Grilled Chicken Salad", 320, 28.0, 12.0, 18.0, "1 bowl (250g)"),
    ("Avocado Toast", 350, 9.0, 35.0, 21.0, "2 slices (180g)"),
    ("Salmon with Quinoa", 480, 34.0, 38.0, 20.0, "1 plate (320g)"),
    ("Greek Yogurt Parfait", 260, 15.0, 36.0, 6.0, "1 cup (220g)"),
];

/// Analyzes a food photo into a nutrition estimate
#[async_trait]
pub trait FoodAnalyzer: Send + Sync {
    /// Estimate the nutrition content of `image`
    ///
    /// # Errors
    ///
    /// Returns `AnalysisFailed` if the analyzer could not produce a result
    async fn analyze(&self, image: &ImageData) -> AppResult<NutritionResult>;
}

/// 32-bit signed polynomial rolling hash, `h = h * 31 + byte` with wraparound
#[must_use]
pub fn image_hash(bytes: &[u8]) -> i32 {
    bytes
        .iter()
        .fold(0_i32, |hash, &byte| hash.wrapping_mul(31).wrapping_add(i32::from(byte)))
}

/// Canned record index for an image, `|hash| mod 4`
#[must_use]
pub fn canned_index(bytes: &[u8]) -> usize {
    (image_hash(bytes).unsigned_abs() % 4) as usize
}

/// Canned record at `index`, wrapping modulo the table size
#[must_use]
pub fn canned_result(index: usize) -> NutritionResult {
    let (food_name, calories, protein, carbs, fat, serving_size) =
        CANNED_RESULTS[index % CANNED_RESULTS.len()];
    NutritionResult {
        food_name: food_name.to_owned(),
        calories,
        protein,
        carbs,
        fat,
        serving_size: serving_size.to_owned(),
    }
}

/// Stand-in analyzer with a fixed delay and deterministic canned output
#[derive(Debug, Clone)]
pub struct MockFoodAnalyzer {
    latency: Duration,
}

impl MockFoodAnalyzer {
    /// Mock analyzer with the given simulated latency
    #[must_use]
    pub const fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Mock analyzer using the configured latency
    #[must_use]
    pub const fn from_config(config: &FormaConfig) -> Self {
        Self::new(config.analyzer_latency())
    }

    /// Simulated latency
    #[must_use]
    pub const fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for MockFoodAnalyzer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_ANALYZER_LATENCY_MS))
    }
}

#[async_trait]
impl FoodAnalyzer for MockFoodAnalyzer {
    async fn analyze(&self, image: &ImageData) -> AppResult<NutritionResult> {
        if image.is_empty() {
            return Err(AppError::invalid_input("image is empty"));
        }
        debug!(
            bytes = image.len(),
            source = %image.source(),
            latency_ms = self.latency.as_millis(),
            "Mock analysis started"
        );
        sleep(self.latency).await;

        let result = canned_result(canned_index(image.bytes()));
        info!(food = %result.food_name, calories = result.calories, "Mock analysis finished");
        Ok(result)
    }
}
