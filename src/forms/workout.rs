// ABOUTME: Workout assessment, workout preference, and split day forms
// ABOUTME: Enforce the planner's age and body weight bounds before any calculation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ensure_range, positive_number, required_choice, required_integer, required_number};
use crate::constants::limits::{MAX_AGE_YEARS, MIN_AGE_YEARS, MIN_BODY_WEIGHT_KG, SPLIT_DAYS};
use crate::errors::ValidationError;
use crate::intelligence::WorkoutPlanInput;
use crate::models::{SplitDays, TrainingPreference, UserProfile};
use serde::{Deserialize, Serialize};

/// Validated answers of the workout assessment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WorkoutAssessment {
    /// Age (years), 18-100
    pub age_years: u32,
    /// Current weight (kg), at least 30
    pub current_weight_kg: f64,
    /// Goal weight (kg), at least 30
    pub goal_weight_kg: f64,
    /// Workout focus
    pub training_preference: TrainingPreference,
}

impl WorkoutAssessment {
    /// Store the answers on the user profile
    pub fn apply_to(&self, profile: &mut UserProfile) {
        profile.update_training_goals(
            self.age_years,
            self.current_weight_kg,
            self.goal_weight_kg,
            self.training_preference,
        );
    }

    /// Combine with the user's stored TDEE into plan input
    #[must_use]
    pub const fn with_tdee(&self, tdee_kcal: f64) -> WorkoutPlanInput {
        WorkoutPlanInput {
            age_years: self.age_years,
            current_weight_kg: self.current_weight_kg,
            goal_weight_kg: self.goal_weight_kg,
            training_preference: self.training_preference,
            tdee_kcal,
        }
    }
}

/// Body weight in kilograms, at least the planner's minimum
fn body_weight(field: &'static str, value: Option<&str>) -> Result<f64, ValidationError> {
    ensure_range(
        field,
        required_number(field, value)?,
        Some(MIN_BODY_WEIGHT_KG),
        None,
    )
}

/// Workout assessment form as submitted
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutPlanForm {
    /// Age (whole years)
    pub age: Option<String>,
    /// Current weight (kg)
    pub current_weight: Option<String>,
    /// Goal weight (kg)
    pub goal_weight: Option<String>,
    /// `weight`, `cardio` or `hybrid`
    pub training_preference: Option<String>,
}

impl WorkoutPlanForm {
    /// Validate the assessment
    ///
    /// # Errors
    ///
    /// Returns the first rejected field: age outside 18-100, a weight below 30 kg,
    /// or an unknown training preference
    pub fn validate(&self) -> Result<WorkoutAssessment, ValidationError> {
        let age = required_integer("age", self.age.as_deref())?;
        let age_years = u32::try_from(age)
            .ok()
            .filter(|years| (MIN_AGE_YEARS..=MAX_AGE_YEARS).contains(years))
            .ok_or_else(|| {
                ValidationError::out_of_range(
                    "age",
                    age as f64,
                    Some(f64::from(MIN_AGE_YEARS)),
                    Some(f64::from(MAX_AGE_YEARS)),
                )
            })?;

        let current_weight_kg = body_weight("current_weight", self.current_weight.as_deref())?;
        let goal_weight_kg = body_weight("goal_weight", self.goal_weight.as_deref())?;

        Ok(WorkoutAssessment {
            age_years,
            current_weight_kg,
            goal_weight_kg,
            training_preference: required_choice(
                "training_preference",
                self.training_preference.as_deref(),
            )?,
        })
    }
}

/// Validated nutrition goal request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NutritionRequest {
    /// Stored TDEE (kcal/day)
    pub tdee_kcal: f64,
    /// Current weight (kg), at least 30
    pub current_weight_kg: f64,
    /// Goal weight (kg), at least 30
    pub goal_weight_kg: f64,
    /// Workout focus
    pub training_preference: TrainingPreference,
}

/// Nutrition goal form: the assessment weights and focus plus a TDEE
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionForm {
    /// TDEE (kcal/day)
    pub tdee: Option<String>,
    /// Current weight (kg)
    pub current_weight: Option<String>,
    /// Goal weight (kg)
    pub goal_weight: Option<String>,
    /// `weight`, `cardio` or `hybrid`
    pub training_preference: Option<String>,
}

impl NutritionForm {
    /// Validate the request
    ///
    /// # Errors
    ///
    /// Returns the first rejected field: a missing or negative TDEE, a weight
    /// below 30 kg, or an unknown training preference
    pub fn validate(&self) -> Result<NutritionRequest, ValidationError> {
        Ok(NutritionRequest {
            tdee_kcal: positive_number("tdee", self.tdee.as_deref())?,
            current_weight_kg: body_weight("current_weight", self.current_weight.as_deref())?,
            goal_weight_kg: body_weight("goal_weight", self.goal_weight.as_deref())?,
            training_preference: required_choice(
                "training_preference",
                self.training_preference.as_deref(),
            )?,
        })
    }
}

/// First step of split selection: the workout focus
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutPreferenceForm {
    /// `weight`, `cardio` or `hybrid`
    pub preference: Option<String>,
}

impl WorkoutPreferenceForm {
    /// Validate the chosen focus
    ///
    /// # Errors
    ///
    /// Returns an error if the preference is missing or not one of the choices
    pub fn validate(&self) -> Result<TrainingPreference, ValidationError> {
        required_choice("preference", self.preference.as_deref())
    }
}

/// Second step of split selection: days per week
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutDaysForm {
    /// `3`, `4` or `5`
    pub days: Option<String>,
}

impl WorkoutDaysForm {
    /// Validate the chosen number of days
    ///
    /// # Errors
    ///
    /// Returns an error unless the value is 3, 4 or 5
    pub fn validate(&self) -> Result<SplitDays, ValidationError> {
        let days = required_integer("days", self.days.as_deref())?;
        u8::try_from(days)
            .map_err(|_| {
                ValidationError::out_of_range(
                    "days",
                    days as f64,
                    SPLIT_DAYS.first().copied().map(f64::from),
                    SPLIT_DAYS.last().copied().map(f64::from),
                )
            })
            .and_then(SplitDays::try_from)
    }
}
