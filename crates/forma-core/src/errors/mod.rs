// ABOUTME: Unified error handling with stable error codes for every Forma component
// ABOUTME: Defines ErrorCode, AppError, AppResult and field-scoped validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

//! # Unified Error Handling System
//!
//! Forma has three failure families and nothing systemic behind them:
//!
//! - **validation**: field-scoped, recoverable, blocks onboarding advancement
//! - **device unavailable**: camera busy, denied, or absent; recovered by file upload
//! - **analysis failed**: the food analyzer collaborator failed; transient and retryable
//!
//! Every public operation returns [`AppResult`]. Form validation collects all
//! failing fields into [`ValidationErrors`] first and converts to an [`AppError`]
//! only when a single error is wanted.

mod validation;

pub use validation::{FormField, ValidationErrors};

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use thiserror::Error;

/// Standard error codes used throughout the application
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed validation
    InvalidInput = 3000,
    /// A required field was left empty
    MissingRequiredField = 3001,
    /// A numeric value is outside its accepted range
    ValueOutOfRange = 3003,

    // Devices (4000-4999)
    /// No usable video input device, or the device is busy
    DeviceUnavailable = 4003,
    /// The user or platform denied access to the device
    PermissionDenied = 4004,

    // Collaborators (5000-5999)
    /// The food analyzer failed to produce a result
    AnalysisFailed = 5000,
    /// The caller abandoned a pending analysis
    AnalysisCancelled = 5001,

    // Configuration (6000-6999)
    /// Configuration value is invalid
    ConfigInvalid = 6002,

    // Internal (9000-9999)
    /// Operation not allowed in the current state
    InvalidState = 9001,
    /// Unexpected internal failure
    InternalError = 9000,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::DeviceUnavailable => "The capture device is unavailable",
            Self::PermissionDenied => "Access to the capture device was denied",
            Self::AnalysisFailed => "Food analysis failed",
            Self::AnalysisCancelled => "Food analysis was cancelled",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InvalidState => "Operation is not allowed in the current state",
            Self::InternalError => "An internal error occurred",
        }
    }

    /// Whether the user can simply try again
    #[must_use]
    pub const fn is_retryable(self) -> bool {
        matches!(self, Self::AnalysisFailed | Self::DeviceUnavailable)
    }

    /// Whether the error belongs to the validation family
    #[must_use]
    pub const fn is_validation(self) -> bool {
        matches!(
            self,
            Self::InvalidInput | Self::MissingRequiredField | Self::ValueOutOfRange
        )
    }
}

/// Application error carrying a stable code and a human readable message
#[derive(Debug, Error)]
#[error("{}: {message}", code.description())]
pub struct AppError {
    /// Machine readable error code
    pub code: ErrorCode,
    /// Message suitable for display next to the failing control
    pub message: String,
    /// Underlying cause, if any
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach an underlying cause for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Operation attempted in the wrong state
    #[must_use]
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidState, message)
    }

    /// Capture device could not be used
    #[must_use]
    pub fn device_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DeviceUnavailable, message)
    }

    /// Analyzer collaborator failed
    #[must_use]
    pub fn analysis_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AnalysisFailed, message)
    }

    /// Pending analysis was abandoned
    #[must_use]
    pub fn analysis_cancelled() -> Self {
        Self::new(
            ErrorCode::AnalysisCancelled,
            "The selected image was cleared before analysis finished",
        )
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Whether the user can retry the operation
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        self.code.is_retryable()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let code = errors.dominant_code();
        Self::new(code, errors.summary())
    }
}

/// Result alias used across all Forma crates
pub type AppResult<T> = Result<T, AppError>;
