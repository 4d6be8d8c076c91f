// ABOUTME: Top-level calculator configuration with environment overrides and validation
// ABOUTME: Global OnceLock instance falls back to defaults when overrides are invalid
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calculator Configuration
//!
//! Configuration is environment-only. Every section has a `Default` that
//! reproduces the stock formulas; a small set of `FITTRACK_*` variables can
//! override individual values.

use super::energy::{ActivityFactorsConfig, BmrConfig};
use super::error::ConfigError;
use super::nutrition::NutritionGoalConfig;
use super::training::{IntensityConfig, SessionConfig, VolumeConfig};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Activity multiplier override for sedentary users
pub const ENV_ACTIVITY_FACTOR_SEDENTARY: &str = "FITTRACK_ACTIVITY_FACTOR_SEDENTARY";
/// Activity multiplier override for lightly active users
pub const ENV_ACTIVITY_FACTOR_LIGHTLY_ACTIVE: &str = "FITTRACK_ACTIVITY_FACTOR_LIGHTLY_ACTIVE";
/// Activity multiplier override for moderately active users
pub const ENV_ACTIVITY_FACTOR_MODERATELY_ACTIVE: &str =
    "FITTRACK_ACTIVITY_FACTOR_MODERATELY_ACTIVE";
/// Activity multiplier override for very active users
pub const ENV_ACTIVITY_FACTOR_VERY_ACTIVE: &str = "FITTRACK_ACTIVITY_FACTOR_VERY_ACTIVE";
/// Lower bound of weekly sets
pub const ENV_VOLUME_MIN_SETS: &str = "FITTRACK_VOLUME_MIN_SETS";
/// Upper bound of weekly sets
pub const ENV_VOLUME_MAX_SETS: &str = "FITTRACK_VOLUME_MAX_SETS";
/// Volume factor when goal weight equals current weight
pub const ENV_VOLUME_MAINTENANCE_FACTOR: &str = "FITTRACK_VOLUME_MAINTENANCE_FACTOR";
/// Hard cap on sessions per week
pub const ENV_SESSIONS_MAX_PER_WEEK: &str = "FITTRACK_SESSIONS_MAX_PER_WEEK";
/// Daily deficit/surplus when changing weight
pub const ENV_NUTRITION_CALORIE_ADJUSTMENT: &str = "FITTRACK_NUTRITION_CALORIE_ADJUSTMENT_KCAL";

/// Complete metrics calculator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// TDEE activity multipliers
    pub activity_factors: ActivityFactorsConfig,
    /// Workout intensity score
    pub intensity: IntensityConfig,
    /// Weekly set volume
    pub volume: VolumeConfig,
    /// Sessions per week
    pub sessions: SessionConfig,
    /// Calorie targets and macro ratios
    pub nutrition: NutritionGoalConfig,
}

/// Global configuration singleton
static CALCULATOR_CONFIG: OnceLock<CalculatorConfig> = OnceLock::new();

impl CalculatorConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        CALCULATOR_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load calculator config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from process environment
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or the result fails validation
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| env::var(key).ok())
    }

    /// Load configuration reading overrides through `get`
    ///
    /// Lets tests supply overrides without mutating the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or the result fails validation
    pub fn load_with<F>(get: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let config = Self::default().apply_overrides(get)?;
        config.validate()?;
        debug!(
            min_sets = config.volume.min_sets,
            max_sets = config.volume.max_sets,
            calorie_adjustment_kcal = config.nutrition.calorie_adjustment_kcal,
            "Calculator configuration loaded"
        );
        Ok(config)
    }

    fn apply_overrides<F>(mut self, mut get: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let factors = &mut self.activity_factors;
        override_value(&mut get, ENV_ACTIVITY_FACTOR_SEDENTARY, &mut factors.sedentary)?;
        override_value(
            &mut get,
            ENV_ACTIVITY_FACTOR_LIGHTLY_ACTIVE,
            &mut factors.lightly_active,
        )?;
        override_value(
            &mut get,
            ENV_ACTIVITY_FACTOR_MODERATELY_ACTIVE,
            &mut factors.moderately_active,
        )?;
        override_value(
            &mut get,
            ENV_ACTIVITY_FACTOR_VERY_ACTIVE,
            &mut factors.very_active,
        )?;

        override_value(&mut get, ENV_VOLUME_MIN_SETS, &mut self.volume.min_sets)?;
        override_value(&mut get, ENV_VOLUME_MAX_SETS, &mut self.volume.max_sets)?;
        override_value(
            &mut get,
            ENV_VOLUME_MAINTENANCE_FACTOR,
            &mut self.volume.maintenance_factor,
        )?;

        override_value(
            &mut get,
            ENV_SESSIONS_MAX_PER_WEEK,
            &mut self.sessions.max_sessions_per_week,
        )?;

        override_value(
            &mut get,
            ENV_NUTRITION_CALORIE_ADJUSTMENT,
            &mut self.nutrition.calorie_adjustment_kcal,
        )?;

        Ok(self)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` for misordered thresholds or
    /// non-positive factors and `ConfigError::InvalidWeights` for macro ratios
    /// that do not sum to 1.0
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factors = &self.activity_factors;
        let ordered = [
            factors.sedentary,
            factors.lightly_active,
            factors.moderately_active,
            factors.very_active,
        ];
        if ordered.iter().any(|factor| *factor <= 0.0)
            || ordered.windows(2).any(|pair| pair[0] > pair[1])
        {
            return Err(ConfigError::InvalidRange(
                "activity factors must be positive and increase with activity".to_owned(),
            ));
        }

        let intensity = &self.intensity;
        if intensity.years_per_point <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "intensity years_per_point must be positive".to_owned(),
            ));
        }
        if intensity.moderate_threshold >= intensity.high_threshold {
            return Err(ConfigError::InvalidRange(
                "moderate intensity threshold must be < high threshold".to_owned(),
            ));
        }

        let volume = &self.volume;
        if volume.min_sets < 0.0 || volume.min_sets >= volume.max_sets {
            return Err(ConfigError::InvalidRange(format!(
                "volume min_sets ({}) must be non-negative and < max_sets ({})",
                volume.min_sets, volume.max_sets
            )));
        }
        if volume.older_age_threshold >= volume.senior_age_threshold {
            return Err(ConfigError::InvalidRange(
                "older age threshold must be < senior age threshold".to_owned(),
            ));
        }
        let volume_factors = [
            volume.youth_multiplier,
            volume.weight_multiplier,
            volume.cardio_multiplier,
            volume.hybrid_multiplier,
            volume.older_factor,
            volume.senior_factor,
            volume.bulking_factor,
            volume.cutting_factor,
            volume.maintenance_factor,
        ];
        if volume_factors.iter().any(|factor| *factor <= 0.0) {
            return Err(ConfigError::InvalidRange(
                "volume multipliers must be positive".to_owned(),
            ));
        }

        let sessions = &self.sessions;
        if !(1..=7).contains(&sessions.max_sessions_per_week) {
            return Err(ConfigError::InvalidRange(format!(
                "max sessions per week must be between 1 and 7, got {}",
                sessions.max_sessions_per_week
            )));
        }
        if sessions.younger_sessions > sessions.max_sessions_per_week
            || sessions.older_sessions > sessions.max_sessions_per_week
        {
            return Err(ConfigError::InvalidRange(
                "base sessions must not exceed max sessions per week".to_owned(),
            ));
        }

        self.nutrition.validate()
    }
}

fn override_value<T, F>(get: &mut F, key: &str, target: &mut T) -> Result<(), ConfigError>
where
    T: FromStr,
    F: FnMut(&str) -> Option<String>,
{
    if let Some(raw) = get(key) {
        *target = raw.trim().parse().map_err(|_| ConfigError::Parse {
            key: key.to_owned(),
            value: raw.clone(),
        })?;
    }
    Ok(())
}
