// ABOUTME: Environment configuration for the Forma session services
// ABOUTME: Analyzer latency, selection seed, and recommendation engine overrides from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

//! Environment-only configuration
//!
//! | Variable                   | Default | Meaning                                   |
//! |----------------------------|---------|-------------------------------------------|
//! | `FORMA_ANALYZER_LATENCY_MS`| 3000    | Simulated food analyzer delay             |
//! | `FORMA_SELECTION_SEED`     | unset   | Fixed generation seed; unset means random |
//! | `FORMA_BACKFILL_THRESHOLD` | 3       | Strength/cardio backfill threshold        |
//! | `FORMA_INCLUDE_IMAGES`     | true    | Attach cover images to workouts           |

use forma_core::constants::nutrition::{DEFAULT_ANALYZER_LATENCY_MS, MAX_ANALYZER_LATENCY_MS};
use forma_intelligence::config::{ConfigError, RecommendationEngineConfig};
use forma_intelligence::selection::SelectionSeed;
use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Analyzer latency variable
pub const ANALYZER_LATENCY_VAR: &str = "FORMA_ANALYZER_LATENCY_MS";
/// Selection seed variable
pub const SELECTION_SEED_VAR: &str = "FORMA_SELECTION_SEED";
/// Backfill threshold variable
pub const BACKFILL_THRESHOLD_VAR: &str = "FORMA_BACKFILL_THRESHOLD";
/// Cover image toggle variable
pub const INCLUDE_IMAGES_VAR: &str = "FORMA_INCLUDE_IMAGES";

/// Session-level configuration
#[derive(Debug, Clone)]
pub struct FormaConfig {
    /// Simulated food analyzer delay in milliseconds
    pub analyzer_latency_ms: u64,
    /// Fixed seed for workout generation; `None` draws a fresh seed per request
    pub selection_seed: Option<u64>,
    /// Recommendation engine settings
    pub engine: RecommendationEngineConfig,
}

impl Default for FormaConfig {
    fn default() -> Self {
        Self {
            analyzer_latency_ms: DEFAULT_ANALYZER_LATENCY_MS,
            selection_seed: None,
            engine: RecommendationEngineConfig::default(),
        }
    }
}

impl FormaConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable fails to parse or a value is out of range
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let config = Self {
            analyzer_latency_ms: parse_var(ANALYZER_LATENCY_VAR)?
                .unwrap_or(defaults.analyzer_latency_ms),
            selection_seed: parse_var(SELECTION_SEED_VAR)?,
            engine: RecommendationEngineConfig {
                backfill_threshold: parse_var(BACKFILL_THRESHOLD_VAR)?
                    .unwrap_or(defaults.engine.backfill_threshold),
                include_images: parse_bool_var(INCLUDE_IMAGES_VAR)?
                    .unwrap_or(defaults.engine.include_images),
                images: defaults.engine.images,
            },
        };

        config.validate()?;
        info!(
            analyzer_latency_ms = config.analyzer_latency_ms,
            fixed_seed = config.selection_seed.is_some(),
            backfill_threshold = config.engine.backfill_threshold,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the latency exceeds its cap or the engine settings are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.analyzer_latency_ms > MAX_ANALYZER_LATENCY_MS {
            return Err(ConfigError::InvalidRange(format!(
                "{ANALYZER_LATENCY_VAR} must be at most {MAX_ANALYZER_LATENCY_MS}"
            )));
        }
        self.engine.validate()
    }

    /// Simulated analyzer delay
    #[must_use]
    pub const fn analyzer_latency(&self) -> Duration {
        Duration::from_millis(self.analyzer_latency_ms)
    }

    /// The configured seed, or a fresh random one
    #[must_use]
    pub fn selection_seed(&self) -> SelectionSeed {
        self.selection_seed
            .map_or_else(SelectionSeed::random, SelectionSeed)
    }

    /// Single-line summary for logging
    #[must_use]
    pub fn summary(&self) -> String {
        let seed = self
            .selection_seed
            .map_or_else(|| "random".to_owned(), |seed| seed.to_string());
        format!(
            "analyzer_latency_ms={} selection_seed={seed} backfill_threshold={} include_images={}",
            self.analyzer_latency_ms, self.engine.backfill_threshold, self.engine.include_images
        )
    }
}

/// Parse an optional variable; unset or blank means `None`
fn parse_var<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse(format!("{key}: cannot parse '{value}'"))),
        _ => Ok(None),
    }
}

fn parse_bool_var(key: &'static str) -> Result<Option<bool>, ConfigError> {
    let Some(value) = parse_var::<String>(key)? else {
        return Ok(None);
    };
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(Some(true)),
        "false" | "0" | "no" | "off" => Ok(Some(false)),
        _ => Err(ConfigError::Parse(format!("{key}: expected a boolean, got '{value}'"))),
    }
}
