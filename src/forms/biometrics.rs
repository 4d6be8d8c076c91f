// ABOUTME: BMI and TDEE calculator forms
// ABOUTME: Validate submitted biometrics into BiometricInput and TdeeInput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{positive_number, required_choice};
use crate::errors::ValidationError;
use crate::intelligence::{BiometricInput, TdeeInput};
use serde::{Deserialize, Serialize};

/// BMI calculator form as submitted
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BmiForm {
    /// Weight (kg)
    pub weight: Option<String>,
    /// Height (cm)
    pub height: Option<String>,
}

impl BmiForm {
    /// Validate into calculator input
    ///
    /// # Errors
    ///
    /// Returns the first field that is missing, blank, zero, non-numeric or negative
    pub fn validate(&self) -> Result<BiometricInput, ValidationError> {
        Ok(BiometricInput {
            weight_kg: positive_number("weight", self.weight.as_deref())?,
            height_cm: positive_number("height", self.height.as_deref())?,
        })
    }
}

/// TDEE calculator form as submitted
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TdeeForm {
    /// `male` or `female`
    pub gender: Option<String>,
    /// Weight (kg)
    pub weight: Option<String>,
    /// Height (cm)
    pub height: Option<String>,
    /// Age (years), fractional values accepted
    pub age: Option<String>,
    /// One of the four activity levels
    pub activity_level: Option<String>,
}

impl TdeeForm {
    /// Validate into calculator input
    ///
    /// # Errors
    ///
    /// Returns the first rejected field: unknown gender or activity level, or a
    /// missing, zero, non-numeric or negative measurement
    pub fn validate(&self) -> Result<TdeeInput, ValidationError> {
        Ok(TdeeInput {
            gender: required_choice("gender", self.gender.as_deref())?,
            weight_kg: positive_number("weight", self.weight.as_deref())?,
            height_cm: positive_number("height", self.height.as_deref())?,
            age_years: positive_number("age", self.age.as_deref())?,
            activity_level: required_choice("activity_level", self.activity_level.as_deref())?,
        })
    }
}
