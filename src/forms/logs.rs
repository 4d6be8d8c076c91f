// ABOUTME: Food log and workout log entry forms
// ABOUTME: Validate submitted log values and timestamps into log details
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{required_choice, required_datetime, required_number, required_text};
use crate::constants::date_formats;
use crate::errors::ValidationError;
use crate::models::{FoodLogDetails, WorkoutLogDetails};
use serde::{Deserialize, Serialize};

/// Food log form as submitted
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodLogForm {
    /// Food name
    pub food_name: Option<String>,
    /// Quantity (grams)
    pub quantity: Option<String>,
    /// Energy (kcal)
    pub calories: Option<String>,
    /// Protein (grams)
    pub protein: Option<String>,
    /// Carbohydrates (grams)
    pub carbs: Option<String>,
    /// Fats (grams)
    pub fats: Option<String>,
    /// `YYYY-MM-DD HH:MM:SS`
    pub log_date: Option<String>,
}

impl FoodLogForm {
    /// Validate into food log details
    ///
    /// # Errors
    ///
    /// Returns the first field that is missing, blank, zero, non-numeric, or a
    /// timestamp not in `%Y-%m-%d %H:%M:%S`
    pub fn validate(&self) -> Result<FoodLogDetails, ValidationError> {
        Ok(FoodLogDetails {
            food_name: required_text("food_name", self.food_name.as_deref())?.to_owned(),
            quantity_g: required_number("quantity", self.quantity.as_deref())?,
            calories: required_number("calories", self.calories.as_deref())?,
            protein_g: required_number("protein", self.protein.as_deref())?,
            carbs_g: required_number("carbs", self.carbs.as_deref())?,
            fats_g: required_number("fats", self.fats.as_deref())?,
            log_date: required_datetime(
                "log_date",
                self.log_date.as_deref(),
                date_formats::FOOD_LOG,
            )?,
        })
    }
}

/// Workout log form as submitted
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutLogForm {
    /// Exercise name, e.g. "Running"
    pub exercise_name: Option<String>,
    /// `Low`, `Medium` or `High`
    pub intensity: Option<String>,
    /// Duration (minutes)
    pub duration: Option<String>,
    /// `YYYY-MM-DDTHH:MM`
    pub log_date: Option<String>,
}

impl WorkoutLogForm {
    /// Validate into workout log details
    ///
    /// # Errors
    ///
    /// Returns the first rejected field: a blank name, an intensity other than
    /// `Low`/`Medium`/`High`, a missing or zero duration, or a bad timestamp
    pub fn validate(&self) -> Result<WorkoutLogDetails, ValidationError> {
        Ok(WorkoutLogDetails {
            exercise_name: required_text("exercise_name", self.exercise_name.as_deref())?
                .to_owned(),
            intensity: required_choice("intensity", self.intensity.as_deref())?,
            duration_minutes: required_number("duration", self.duration.as_deref())?,
            log_date: required_datetime(
                "log_date",
                self.log_date.as_deref(),
                date_formats::WORKOUT_LOG,
            )?,
        })
    }
}
