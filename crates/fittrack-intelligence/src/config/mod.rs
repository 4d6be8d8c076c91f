// ABOUTME: Configuration module for the fittrack-intelligence crate
// ABOUTME: Re-exports calculator configuration sections and their error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Top-level calculator configuration, environment overrides and validation
pub mod calculator;
/// BMR coefficients and activity multipliers
pub mod energy;
/// Configuration error types
pub mod error;
/// Calorie targets and macronutrient ratios
pub mod nutrition;
/// Intensity, volume, and session heuristics
pub mod training;

pub use calculator::{
    CalculatorConfig, ENV_ACTIVITY_FACTOR_LIGHTLY_ACTIVE, ENV_ACTIVITY_FACTOR_MODERATELY_ACTIVE,
    ENV_ACTIVITY_FACTOR_SEDENTARY, ENV_ACTIVITY_FACTOR_VERY_ACTIVE,
    ENV_NUTRITION_CALORIE_ADJUSTMENT, ENV_SESSIONS_MAX_PER_WEEK, ENV_VOLUME_MAINTENANCE_FACTOR,
    ENV_VOLUME_MAX_SETS, ENV_VOLUME_MIN_SETS,
};
pub use energy::{ActivityFactorsConfig, BmrConfig};
pub use error::ConfigError;
pub use nutrition::{MacroRatios, NutritionGoalConfig};
pub use training::{IntensityConfig, SessionConfig, VolumeConfig};
