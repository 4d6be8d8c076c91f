// ABOUTME: Field-level validation errors raised while checking submitted forms
// ABOUTME: Converts into AppError so callers see one error type with a precise code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Validation Error Types
//!
//! - `ValidationError` - why a single form field was rejected
//! - Conversion to `AppError` for the web layer's error responses

use super::{AppError, ErrorCode};
use std::error::Error;
use std::fmt;

/// Reasons a submitted form field is rejected
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Field was absent, blank, or zero
    Required {
        /// Name of the form field
        field: &'static str,
    },
    /// Field could not be parsed as the expected type
    InvalidFormat {
        /// Name of the form field
        field: &'static str,
        /// Raw submitted value
        value: String,
        /// What was expected instead
        expected: &'static str,
    },
    /// Numeric field outside its accepted range
    OutOfRange {
        /// Name of the form field
        field: &'static str,
        /// Parsed value
        value: f64,
        /// Inclusive lower bound, if any
        min: Option<f64>,
        /// Inclusive upper bound, if any
        max: Option<f64>,
    },
    /// Value is not one of the offered choices
    InvalidChoice {
        /// Name of the form field
        field: &'static str,
        /// Raw submitted value
        value: String,
        /// Accepted values
        allowed: &'static [&'static str],
    },
}

impl ValidationError {
    /// Create a "required" error
    #[must_use]
    pub const fn required(field: &'static str) -> Self {
        Self::Required { field }
    }

    /// Create an "invalid format" error
    #[must_use]
    pub fn invalid_format(
        field: &'static str,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::InvalidFormat {
            field,
            value: value.into(),
            expected,
        }
    }

    /// Create an "out of range" error
    #[must_use]
    pub const fn out_of_range(
        field: &'static str,
        value: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Self {
        Self::OutOfRange {
            field,
            value,
            min,
            max,
        }
    }

    /// Create an "invalid choice" error
    #[must_use]
    pub fn invalid_choice(
        field: &'static str,
        value: impl Into<String>,
        allowed: &'static [&'static str],
    ) -> Self {
        Self::InvalidChoice {
            field,
            value: value.into(),
            allowed,
        }
    }

    /// Name of the rejected field
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Required { field }
            | Self::InvalidFormat { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::InvalidChoice { field, .. } => field,
        }
    }

    /// Error code this failure maps to
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Required { .. } => ErrorCode::MissingRequiredField,
            Self::InvalidFormat { .. } | Self::InvalidChoice { .. } => ErrorCode::InvalidFormat,
            Self::OutOfRange { .. } => ErrorCode::ValueOutOfRange,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { field } => write!(f, "'{field}' is required"),
            Self::InvalidFormat {
                field,
                value,
                expected,
            } => write!(f, "'{field}' must be {expected}, got '{value}'"),
            Self::OutOfRange {
                field,
                value,
                min: Some(min),
                max: Some(max),
            } => write!(f, "'{field}' must be between {min} and {max}, got {value}"),
            Self::OutOfRange {
                field,
                value,
                min: Some(min),
                max: None,
            } => write!(f, "'{field}' must be at least {min}, got {value}"),
            Self::OutOfRange {
                field,
                value,
                min: None,
                max: Some(max),
            } => write!(f, "'{field}' must be at most {max}, got {value}"),
            Self::OutOfRange {
                field,
                value,
                min: None,
                max: None,
            } => write!(f, "'{field}' is out of range: {value}"),
            Self::InvalidChoice {
                field,
                value,
                allowed,
            } => write!(
                f,
                "'{field}' must be one of [{}], got '{value}'",
                allowed.join(", ")
            ),
        }
    }
}

impl Error for ValidationError {}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        Self::new(error.code(), error.to_string())
            .with_details(serde_json::json!({ "field": error.field() }))
    }
}
