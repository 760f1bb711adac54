// ABOUTME: In-memory profile session holding the committed profile for the app's lifetime
// ABOUTME: Starts and completes onboarding cycles and serves workout recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

use super::wizard::OnboardingWizard;
use crate::config::FormaConfig;
use crate::errors::{AppError, AppResult};
use forma_core::models::{UserProfile, Workout};
use forma_intelligence::{WorkoutGenerator, WorkoutRecommender};
use tracing::info;

/// Session state owning the current profile
#[derive(Debug, Clone)]
pub struct ProfileSession {
    config: FormaConfig,
    generator: WorkoutGenerator,
    profile: Option<UserProfile>,
}

impl ProfileSession {
    /// Empty session using `config`
    #[must_use]
    pub fn new(config: FormaConfig) -> Self {
        let generator = WorkoutGenerator::with_config(config.engine.clone());
        Self {
            config,
            generator,
            profile: None,
        }
    }

    /// Whether a profile was committed
    #[must_use]
    pub const fn has_completed_onboarding(&self) -> bool {
        self.profile.is_some()
    }

    /// Committed profile, if any
    #[must_use]
    pub const fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// Start an onboarding cycle, pre-filled when a profile exists
    #[must_use]
    pub fn begin_onboarding(&self) -> OnboardingWizard {
        self.profile
            .as_ref()
            .map_or_else(OnboardingWizard::new, OnboardingWizard::edit)
    }

    /// Commit a finished wizard, fully replacing any previous profile
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the wizard has unaccepted steps
    pub fn complete(&mut self, wizard: OnboardingWizard) -> AppResult<&UserProfile> {
        let profile = wizard.commit()?;
        let replaced = self.profile.is_some();
        info!(replaced, "Profile committed to session");
        Ok(self.profile.insert(profile))
    }

    /// Generate recommendations for the current profile
    ///
    /// Uses the configured selection seed, or a fresh random seed when none is set.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` before onboarding has completed
    pub fn recommendations(&self) -> AppResult<Vec<Workout>> {
        let profile = self
            .profile
            .as_ref()
            .ok_or_else(|| AppError::invalid_state("complete onboarding first"))?;
        Ok(self
            .generator
            .generate_workouts(profile, self.config.selection_seed()))
    }
}
