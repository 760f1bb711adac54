// ABOUTME: Onboarding module with the five-step profile wizard and session state
// ABOUTME: Form drafts, field validation, equipment exclusivity, and profile commit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

//! Onboarding
//!
//! The wizard is an explicit state object: each step's form is validated on
//! [`OnboardingWizard::submit`], and [`OnboardingWizard::commit`] freezes the
//! draft into a [`UserProfile`](forma_core::models::UserProfile). The
//! [`ProfileSession`] owns the committed profile and replaces it wholesale on
//! every edit cycle.

/// Exclusive equipment checklist
pub mod equipment;
/// Per-step form drafts and validation
pub mod forms;
/// In-memory profile session
pub mod session;
/// Step navigation and commit
pub mod wizard;

pub use equipment::EquipmentSelection;
pub use forms::{
    BasicInfo, BasicInfoForm, EquipmentForm, EquipmentInfo, FitnessInfo, FitnessProfileForm,
    PhysicalInfo, PhysicalInfoForm,
};
pub use session::ProfileSession;
pub use wizard::{OnboardingStep, OnboardingWizard};
