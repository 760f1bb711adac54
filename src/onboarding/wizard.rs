// ABOUTME: Linear onboarding wizard driving the profile draft through five steps
// ABOUTME: Explicit state object with per-step submit, back navigation, and a final commit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

use super::equipment::EquipmentSelection;
use super::forms::{
    BasicInfo, BasicInfoForm, EquipmentForm, EquipmentInfo, FitnessInfo, FitnessProfileForm,
    PhysicalInfo, PhysicalInfoForm,
};
use crate::errors::{AppError, AppResult};
use forma_core::constants::onboarding::TOTAL_STEPS;
use forma_core::errors::ValidationErrors;
use forma_core::models::UserProfile;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Wizard steps in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OnboardingStep {
    /// Introduction screen
    Welcome,
    /// Name, age, gender
    BasicInfo,
    /// Weight and height
    PhysicalInfo,
    /// Level and goals
    FitnessProfile,
    /// Equipment and workout preferences
    Equipment,
}

impl OnboardingStep {
    /// Every step in order
    pub const ALL: [Self; TOTAL_STEPS] = [
        Self::Welcome,
        Self::BasicInfo,
        Self::PhysicalInfo,
        Self::FitnessProfile,
        Self::Equipment,
    ];

    /// Zero-based position
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Following step, `None` after the last one
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Preceding step, `None` at the welcome screen
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// Step heading
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Welcome => "Welcome to Forma",
            Self::BasicInfo => "Basic Information",
            Self::PhysicalInfo => "Physical Information",
            Self::FitnessProfile => "Fitness Profile",
            Self::Equipment => "Equipment & Preferences",
        }
    }
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Values accepted so far, one slot per data step
#[derive(Debug, Clone, Default)]
struct Accepted {
    basic: Option<BasicInfo>,
    physical: Option<PhysicalInfo>,
    fitness: Option<FitnessInfo>,
    equipment: Option<EquipmentInfo>,
}

impl Accepted {
    /// Drop the values of `step` and every later step
    fn reopen_from(&mut self, step: OnboardingStep) {
        if step <= OnboardingStep::BasicInfo {
            self.basic = None;
        }
        if step <= OnboardingStep::PhysicalInfo {
            self.physical = None;
        }
        if step <= OnboardingStep::FitnessProfile {
            self.fitness = None;
        }
        self.equipment = None;
    }
}

/// Onboarding state object
///
/// Forms are public so the UI can bind to them. `submit` validates the
/// current step's form and advances; `commit` consumes the wizard and yields
/// the finished profile once the last step was accepted.
#[derive(Debug, Clone)]
pub struct OnboardingWizard {
    step: OnboardingStep,
    errors: ValidationErrors,
    accepted: Accepted,
    /// Basic info draft
    pub basic_info: BasicInfoForm,
    /// Physical info draft
    pub physical_info: PhysicalInfoForm,
    /// Fitness profile draft
    pub fitness_profile: FitnessProfileForm,
    /// Equipment draft
    pub equipment: EquipmentForm,
}

impl Default for OnboardingWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingWizard {
    /// Fresh wizard at the welcome screen with empty drafts
    #[must_use]
    pub fn new() -> Self {
        Self {
            step: OnboardingStep::Welcome,
            errors: ValidationErrors::new(),
            accepted: Accepted::default(),
            basic_info: BasicInfoForm::default(),
            physical_info: PhysicalInfoForm::default(),
            fitness_profile: FitnessProfileForm::default(),
            equipment: EquipmentForm::default(),
        }
    }

    /// Wizard for editing an existing profile, restarted at the welcome screen
    #[must_use]
    pub fn edit(profile: &UserProfile) -> Self {
        Self {
            basic_info: BasicInfoForm {
                name: profile.name.clone(),
                age: profile.age.to_string(),
                gender: Some(profile.gender),
            },
            physical_info: PhysicalInfoForm {
                weight: profile.weight.to_string(),
                height: profile.height.to_string(),
            },
            fitness_profile: FitnessProfileForm {
                fitness_level: Some(profile.fitness_level),
                goals: profile.fitness_goals.clone(),
            },
            equipment: EquipmentForm {
                equipment: EquipmentSelection::from_items(
                    profile.available_equipment.iter().copied(),
                ),
                workouts: profile.preferred_workouts.clone(),
            },
            ..Self::new()
        }
    }

    /// Current step
    #[must_use]
    pub const fn step(&self) -> OnboardingStep {
        self.step
    }

    /// Validation errors from the last rejected submit
    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Whether every step was accepted and the profile can be committed
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.accepted.basic.is_some()
            && self.accepted.physical.is_some()
            && self.accepted.fitness.is_some()
            && self.accepted.equipment.is_some()
    }

    /// Validate the current step and advance
    ///
    /// Returns the step now shown; the equipment step stays put once accepted.
    ///
    /// # Errors
    ///
    /// Returns the failing fields; the step does not change and the errors are
    /// also kept for [`Self::errors`]
    pub fn submit(&mut self) -> Result<OnboardingStep, ValidationErrors> {
        let outcome = match self.step {
            OnboardingStep::Welcome => Ok(()),
            OnboardingStep::BasicInfo => self
                .basic_info
                .validate()
                .map(|info| self.accepted.basic = Some(info)),
            OnboardingStep::PhysicalInfo => self
                .physical_info
                .validate()
                .map(|info| self.accepted.physical = Some(info)),
            OnboardingStep::FitnessProfile => self
                .fitness_profile
                .validate()
                .map(|info| self.accepted.fitness = Some(info)),
            OnboardingStep::Equipment => self
                .equipment
                .validate()
                .map(|info| self.accepted.equipment = Some(info)),
        };

        match outcome {
            Ok(()) => {
                self.errors = ValidationErrors::new();
                if let Some(next) = self.step.next() {
                    self.step = next;
                }
                debug!(step = %self.step, "Onboarding step accepted");
                Ok(self.step)
            }
            Err(errors) => {
                debug!(step = %self.step, failing = errors.len(), "Onboarding step rejected");
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Return to the previous step, keeping every draft
    ///
    /// The step returned to and every later step must be submitted again
    /// before the wizard can commit.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` at the welcome screen
    pub fn back(&mut self) -> AppResult<OnboardingStep> {
        let previous = self
            .step
            .previous()
            .ok_or_else(|| AppError::invalid_state("already at the first onboarding step"))?;
        self.errors = ValidationErrors::new();
        self.accepted.reopen_from(previous);
        self.step = previous;
        Ok(previous)
    }

    /// Finish onboarding and freeze the profile
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if any step has not been accepted
    pub fn commit(self) -> AppResult<UserProfile> {
        let Accepted {
            basic: Some(basic),
            physical: Some(physical),
            fitness: Some(fitness),
            equipment: Some(equipment),
        } = self.accepted
        else {
            return Err(AppError::invalid_state(
                "every onboarding step must be completed before committing",
            ));
        };

        let profile = UserProfile::new(
            basic.name,
            basic.age,
            basic.gender,
            physical.weight,
            physical.height,
            fitness.fitness_level,
        )
        .with_goals(fitness.goals)
        .with_workouts(equipment.workouts)
        .with_equipment(equipment.equipment);

        info!(
            name = %profile.name,
            level = %profile.fitness_level,
            goals = profile.fitness_goals.len(),
            workouts = profile.preferred_workouts.len(),
            "Onboarding completed"
        );
        Ok(profile)
    }
}
