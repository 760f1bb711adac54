// ABOUTME: Field-scoped validation errors collected from onboarding forms
// ABOUTME: Maps each failing form field to an inline message and error code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

use super::ErrorCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

/// Form fields that can carry an inline validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    /// Full name
    Name,
    /// Age in years
    Age,
    /// Gender selection
    Gender,
    /// Body weight in pounds
    Weight,
    /// Height in centimeters
    Height,
    /// Fitness level selection
    FitnessLevel,
    /// Fitness goals checklist
    Goals,
    /// Available equipment checklist
    Equipment,
    /// Preferred workout types checklist
    Workouts,
}

impl FormField {
    /// Key used when surfacing the message next to its control
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Weight => "weight",
            Self::Height => "height",
            Self::FitnessLevel => "fitness_level",
            Self::Goals => "goals",
            Self::Equipment => "equipment",
            Self::Workouts => "workouts",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One failing field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Why the field failed
    pub code: ErrorCode,
    /// Inline message shown to the user
    pub message: String,
}

/// All validation failures of a single form submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    fields: BTreeMap<FormField, FieldError>,
}

impl ValidationErrors {
    /// Create an empty error set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a required field that was left empty
    pub fn missing(&mut self, field: FormField, message: impl Into<String>) {
        self.insert(field, ErrorCode::MissingRequiredField, message);
    }

    /// Record a value outside its accepted range
    pub fn out_of_range(&mut self, field: FormField, message: impl Into<String>) {
        self.insert(field, ErrorCode::ValueOutOfRange, message);
    }

    /// Record a generic invalid value
    pub fn invalid(&mut self, field: FormField, message: impl Into<String>) {
        self.insert(field, ErrorCode::InvalidInput, message);
    }

    fn insert(&mut self, field: FormField, code: ErrorCode, message: impl Into<String>) {
        self.fields.insert(
            field,
            FieldError {
                code,
                message: message.into(),
            },
        );
    }

    /// True when no field failed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of failing fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Inline message for a field, if it failed
    #[must_use]
    pub fn message(&self, field: FormField) -> Option<&str> {
        self.fields.get(&field).map(|e| e.message.as_str())
    }

    /// Error details for a field, if it failed
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&FieldError> {
        self.fields.get(&field)
    }

    /// Iterate failing fields in form order
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &FieldError)> {
        self.fields.iter().map(|(field, err)| (*field, err))
    }

    /// `Ok(())` when empty, otherwise `Err(self)`
    ///
    /// # Errors
    ///
    /// Returns the collected errors when at least one field failed
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Code for the error as a whole; missing fields outrank range errors
    pub(super) fn dominant_code(&self) -> ErrorCode {
        let codes = self.fields.values().map(|e| e.code);
        codes
            .clone()
            .find(|c| *c == ErrorCode::MissingRequiredField)
            .or_else(|| codes.clone().find(|c| *c == ErrorCode::ValueOutOfRange))
            .unwrap_or(ErrorCode::InvalidInput)
    }

    /// Single-line summary of every failing field
    #[must_use]
    pub fn summary(&self) -> String {
        self.fields
            .iter()
            .map(|(field, err)| format!("{field}: {}", err.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

impl Error for ValidationErrors {}
