// ABOUTME: Configuration error types for calculator configuration validation
// ABOUTME: Defines error variants for parse failures, invalid ranges, and ratio sums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for calculator configuration.

use fittrack_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment override could not be parsed
    #[error("Invalid value '{value}' for {key}")]
    Parse {
        /// Environment variable name
        key: String,
        /// Raw value found
        value: String,
    },

    /// Thresholds or bounds in the wrong order, or non-positive factors
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Macro ratios don't sum to 1.0
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match error {
            ConfigError::Parse { .. } => ErrorCode::ConfigError,
            ConfigError::InvalidRange(_) | ConfigError::InvalidWeights(_) => {
                ErrorCode::ConfigInvalid
            }
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
