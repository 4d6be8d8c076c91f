// ABOUTME: Web layer boundary: raw submitted form records and their validation
// ABOUTME: Field parsers shared by the biometric, workout, and log forms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Form validation
//!
//! Every form record holds the fields exactly as submitted (optional strings)
//! and exposes `validate()`, which returns the typed calculator input or the
//! first rejected field. A required field is rejected when it is missing,
//! blank, or numerically zero.

/// BMI and TDEE forms
pub mod biometrics;
/// Food and workout log forms
pub mod logs;
/// Workout assessment, preference, and split forms
pub mod workout;

pub use biometrics::{BmiForm, TdeeForm};
pub use logs::{FoodLogForm, WorkoutLogForm};
pub use workout::{
    NutritionForm, NutritionRequest, WorkoutAssessment, WorkoutDaysForm, WorkoutPlanForm,
    WorkoutPreferenceForm,
};

use crate::errors::ValidationError;
use chrono::NaiveDateTime;
use std::str::FromStr;

/// Trimmed, non-blank text
fn required_text<'a>(
    field: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, ValidationError> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(ValidationError::required(field)),
    }
}

/// Finite, non-zero decimal number
fn required_number(field: &'static str, value: Option<&str>) -> Result<f64, ValidationError> {
    let text = required_text(field, value)?;
    let number: f64 = text
        .parse()
        .ok()
        .filter(|n: &f64| n.is_finite())
        .ok_or_else(|| ValidationError::invalid_format(field, text, "a number"))?;
    if number == 0.0 {
        return Err(ValidationError::required(field));
    }
    Ok(number)
}

/// Non-zero whole number
fn required_integer(field: &'static str, value: Option<&str>) -> Result<i64, ValidationError> {
    let text = required_text(field, value)?;
    let number: i64 = text
        .parse()
        .map_err(|_| ValidationError::invalid_format(field, text, "a whole number"))?;
    if number == 0 {
        return Err(ValidationError::required(field));
    }
    Ok(number)
}

/// Strictly positive decimal number
fn positive_number(field: &'static str, value: Option<&str>) -> Result<f64, ValidationError> {
    let number = required_number(field, value)?;
    if number < 0.0 {
        return Err(ValidationError::out_of_range(field, number, Some(0.0), None));
    }
    Ok(number)
}

/// Number within inclusive bounds
fn ensure_range(
    field: &'static str,
    number: f64,
    min: Option<f64>,
    max: Option<f64>,
) -> Result<f64, ValidationError> {
    let below = min.is_some_and(|min| number < min);
    let above = max.is_some_and(|max| number > max);
    if below || above {
        return Err(ValidationError::out_of_range(field, number, min, max));
    }
    Ok(number)
}

/// One of a closed set of choices, reported under this form's field name
fn required_choice<T>(field: &'static str, value: Option<&str>) -> Result<T, ValidationError>
where
    T: FromStr<Err = ValidationError>,
{
    required_text(field, value)?
        .parse()
        .map_err(|error| match error {
            ValidationError::InvalidChoice { value, allowed, .. } => {
                ValidationError::invalid_choice(field, value, allowed)
            }
            other => other,
        })
}

/// Timestamp in the given `chrono` format
fn required_datetime(
    field: &'static str,
    value: Option<&str>,
    format: &'static str,
) -> Result<NaiveDateTime, ValidationError> {
    let text = required_text(field, value)?;
    NaiveDateTime::parse_from_str(text, format)
        .map_err(|_| ValidationError::invalid_format(field, text, format))
}
