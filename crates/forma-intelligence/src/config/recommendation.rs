// ABOUTME: Recommendation engine configuration for workout generation
// ABOUTME: Configures the backfill threshold and per-category cover images
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

//! Recommendation Engine Configuration
//!
//! The generator's tier tables are fixed; only presentation details and the
//! backfill threshold are configurable.

use super::ConfigError;
use forma_core::constants::generation::DEFAULT_BACKFILL_THRESHOLD;
use forma_core::models::WorkoutCategory;
use serde::{Deserialize, Serialize};

/// Recommendation Engine Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationEngineConfig {
    /// Strength and cardio are backfilled when fewer workouts than this were produced
    pub backfill_threshold: usize,
    /// Attach cover images to generated workouts
    pub include_images: bool,
    /// Cover image per category
    pub images: WorkoutImages,
}

impl Default for RecommendationEngineConfig {
    fn default() -> Self {
        Self {
            backfill_threshold: DEFAULT_BACKFILL_THRESHOLD,
            include_images: true,
            images: WorkoutImages::default(),
        }
    }
}

impl RecommendationEngineConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold is zero or an image URL is blank while images are enabled
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backfill_threshold == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "backfill_threshold must be at least 1",
            ));
        }
        if self.include_images && self.images.any_blank() {
            return Err(ConfigError::MissingField("images"));
        }
        Ok(())
    }

    /// Cover image for a category, if images are enabled
    #[must_use]
    pub fn image_for(&self, category: WorkoutCategory) -> Option<String> {
        self.include_images
            .then(|| self.images.for_category(category).to_owned())
    }
}

/// Cover images per workout category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutImages {
    /// Strength workouts
    pub strength: String,
    /// Cardio workouts
    pub cardio: String,
    /// HIIT workouts
    pub hiit: String,
    /// Yoga workouts
    pub yoga: String,
    /// Flexibility workouts
    pub flexibility: String,
}

impl WorkoutImages {
    /// Image for a category
    #[must_use]
    pub fn for_category(&self, category: WorkoutCategory) -> &str {
        match category {
            WorkoutCategory::Strength => &self.strength,
            WorkoutCategory::Cardio => &self.cardio,
            WorkoutCategory::Hiit => &self.hiit,
            WorkoutCategory::Yoga => &self.yoga,
            WorkoutCategory::Flexibility => &self.flexibility,
        }
    }

    fn any_blank(&self) -> bool {
        [
            &self.strength,
            &self.cardio,
            &self.hiit,
            &self.yoga,
            &self.flexibility,
        ]
        .iter()
        .any(|url| url.trim().is_empty())
    }
}

impl Default for WorkoutImages {
    fn default() -> Self {
        Self {
            strength: "https://images.unsplash.com/photo-1581009146145-b5ef050c2e1e?q=80&w=3270&auto=format&fit=crop".into(),
            cardio: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?q=80&w=3270&auto=format&fit=crop".into(),
            hiit: "https://images.unsplash.com/photo-1599058917212-d750089bc07e?q=80&w=3269&auto=format&fit=crop".into(),
            yoga: "https://images.unsplash.com/photo-1575052814086-f385e2e2ad1b?q=80&w=3270&auto=format&fit=crop".into(),
            flexibility: "https://images.unsplash.com/photo-1518611012118-696072aa579a?q=80&w=3270&auto=format&fit=crop".into(),
        }
    }
}
