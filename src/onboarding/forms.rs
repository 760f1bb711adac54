// ABOUTME: Per-step onboarding form drafts and their field validation
// ABOUTME: Each form collects every failing field before reporting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

use super::equipment::EquipmentSelection;
use forma_core::constants::onboarding::{
    MAX_AGE, MAX_HEIGHT_CM, MAX_WEIGHT_LBS, MIN_AGE, MIN_HEIGHT_CM, MIN_WEIGHT_LBS,
};
use forma_core::errors::{FormField, ValidationErrors};
use forma_core::models::{Equipment, FitnessGoal, FitnessLevel, Gender, WorkoutType};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Validated basic information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicInfo {
    /// Trimmed display name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Gender
    pub gender: Gender,
}

/// Validated body measurements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalInfo {
    /// Weight in pounds
    pub weight: f64,
    /// Height in centimeters
    pub height: f64,
}

/// Validated fitness profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FitnessInfo {
    /// Self-assessed level
    pub fitness_level: FitnessLevel,
    /// Selected goals
    pub goals: BTreeSet<FitnessGoal>,
}

/// Validated equipment and workout preferences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentInfo {
    /// Declared equipment
    pub equipment: BTreeSet<Equipment>,
    /// Preferred workout types
    pub workouts: BTreeSet<WorkoutType>,
}

/// Basic info step; fields hold raw text as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasicInfoForm {
    /// Full name
    pub name: String,
    /// Age as typed
    pub age: String,
    /// Gender choice
    pub gender: Option<Gender>,
}

impl BasicInfoForm {
    /// Validate every field
    ///
    /// # Errors
    ///
    /// Returns all failing fields
    pub fn validate(&self) -> Result<BasicInfo, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.missing(FormField::Name, "Name is required");
        }
        let age = parse_in_range::<u32>(
            &mut errors,
            FormField::Age,
            &self.age,
            &(MIN_AGE..=MAX_AGE),
            "Age is required",
            &format!("Age must be between {MIN_AGE} and {MAX_AGE}"),
        );
        if self.gender.is_none() {
            errors.missing(FormField::Gender, "Gender is required");
        }

        match (age, self.gender) {
            (Some(age), Some(gender)) if errors.is_empty() => Ok(BasicInfo {
                name: name.to_owned(),
                age,
                gender,
            }),
            _ => Err(errors),
        }
    }
}

/// Physical info step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhysicalInfoForm {
    /// Weight in pounds as typed
    pub weight: String,
    /// Height in centimeters as typed
    pub height: String,
}

impl PhysicalInfoForm {
    /// Validate every field
    ///
    /// # Errors
    ///
    /// Returns all failing fields
    pub fn validate(&self) -> Result<PhysicalInfo, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let weight = parse_in_range::<f64>(
            &mut errors,
            FormField::Weight,
            &self.weight,
            &(MIN_WEIGHT_LBS..=MAX_WEIGHT_LBS),
            "Weight is required",
            &format!("Weight must be between {MIN_WEIGHT_LBS} and {MAX_WEIGHT_LBS} lbs"),
        );
        let height = parse_in_range::<f64>(
            &mut errors,
            FormField::Height,
            &self.height,
            &(MIN_HEIGHT_CM..=MAX_HEIGHT_CM),
            "Height is required",
            &format!("Height must be between {MIN_HEIGHT_CM} and {MAX_HEIGHT_CM} cm"),
        );

        match (weight, height) {
            (Some(weight), Some(height)) => Ok(PhysicalInfo { weight, height }),
            _ => Err(errors),
        }
    }
}

/// Fitness profile step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FitnessProfileForm {
    /// Level choice
    pub fitness_level: Option<FitnessLevel>,
    /// Checked goals
    pub goals: BTreeSet<FitnessGoal>,
}

impl Default for FitnessProfileForm {
    fn default() -> Self {
        Self {
            fitness_level: Some(FitnessLevel::default()),
            goals: BTreeSet::new(),
        }
    }
}

impl FitnessProfileForm {
    /// Flip one goal checkbox
    pub fn toggle_goal(&mut self, goal: FitnessGoal) {
        if !self.goals.remove(&goal) {
            self.goals.insert(goal);
        }
    }

    /// Validate every field
    ///
    /// # Errors
    ///
    /// Returns all failing fields
    pub fn validate(&self) -> Result<FitnessInfo, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.fitness_level.is_none() {
            errors.missing(FormField::FitnessLevel, "Fitness level is required");
        }
        if self.goals.is_empty() {
            errors.missing(FormField::Goals, "Select at least one fitness goal");
        }

        match self.fitness_level {
            Some(fitness_level) if errors.is_empty() => Ok(FitnessInfo {
                fitness_level,
                goals: self.goals.clone(),
            }),
            _ => Err(errors),
        }
    }
}

/// Equipment and workout preference step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquipmentForm {
    /// Equipment checklist
    pub equipment: EquipmentSelection,
    /// Checked workout types
    pub workouts: BTreeSet<WorkoutType>,
}

impl EquipmentForm {
    /// Flip one equipment checkbox
    pub fn toggle_equipment(&mut self, item: Equipment) {
        self.equipment.toggle(item);
    }

    /// Flip one workout type checkbox
    pub fn toggle_workout(&mut self, kind: WorkoutType) {
        if !self.workouts.remove(&kind) {
            self.workouts.insert(kind);
        }
    }

    /// Validate every field
    ///
    /// # Errors
    ///
    /// Returns all failing fields
    pub fn validate(&self) -> Result<EquipmentInfo, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.equipment.is_empty() {
            errors.missing(FormField::Equipment, "Select at least one equipment option");
        }
        if self.workouts.is_empty() {
            errors.missing(FormField::Workouts, "Select at least one workout type");
        }

        errors.into_result().map(|()| EquipmentInfo {
            equipment: self.equipment.items().clone(),
            workouts: self.workouts.clone(),
        })
    }
}

/// Parse a required numeric field and check its range
///
/// Unparseable text is reported with the range message.
fn parse_in_range<T>(
    errors: &mut ValidationErrors,
    field: FormField,
    raw: &str,
    range: &RangeInclusive<T>,
    required_message: &str,
    range_message: &str,
) -> Option<T>
where
    T: FromStr + PartialOrd,
{
    let raw = raw.trim();
    if raw.is_empty() {
        errors.missing(field, required_message);
        return None;
    }
    match raw.parse::<T>() {
        Ok(value) if range.contains(&value) => Some(value),
        _ => {
            errors.out_of_range(field, range_message);
            None
        }
    }
}
