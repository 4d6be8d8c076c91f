// ABOUTME: Rule-of-thumb workout heuristics: intensity score, weekly volume, session count
// ABOUTME: Age and training preference drive every value; volume is kept in a safe range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::{IntensityConfig, SessionConfig, VolumeConfig};
use fittrack_core::models::TrainingPreference;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse band of the intensity score shown to the user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IntensityBand {
    /// Below the moderate threshold
    Light,
    /// From the moderate threshold up to the high threshold
    Moderate,
    /// At or above the high threshold
    High,
}

impl IntensityBand {
    /// Band for a score
    #[must_use]
    pub fn from_score(score: f64, config: &IntensityConfig) -> Self {
        if score < config.moderate_threshold {
            Self::Light
        } else if score < config.high_threshold {
            Self::Moderate
        } else {
            Self::High
        }
    }

    /// Advice sentence shown in the plan
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Light => "Light intensity. consider increasing intensity over time.",
            Self::Moderate => {
                "Moderate intensity. Aim to have a few reps left in the tank after your sets."
            }
            Self::High => {
                "High intensity. Push yourself close to your limits (failure), ensuring proper form."
            }
        }
    }
}

impl fmt::Display for IntensityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "Light",
            Self::Moderate => "Moderate",
            Self::High => "High",
        })
    }
}

/// Calculate the workout intensity score
///
/// Formula: max(10 - (age - 20) / 5, 1) x preference multiplier
///
/// The score drops one point every five years past 20 and never goes below
/// the floor before the multiplier is applied. It is not capped above, so
/// users younger than 20 score higher than 10.
#[must_use]
pub fn calculate_intensity(
    age_years: u32,
    preference: TrainingPreference,
    config: &IntensityConfig,
) -> f64 {
    let years_past_reference = f64::from(age_years) - config.reference_age_years;
    let base = (config.base_score - years_past_reference / config.years_per_point)
        .max(config.floor_score);
    base * config.multiplier(preference)
}

/// Calculate the recommended weekly set volume
///
/// Steps, in order:
/// 1. 5 sets per kilogram between current and goal weight
/// 2. x1.2 for users younger than 30
/// 3. preference multiplier (hybrid 1.1, cardio 0.8, weight 1.0)
/// 4. for users 30 and older: x0.5 past 60, x0.75 past 50
/// 5. kept within 10 to 70 sets
#[must_use]
pub fn calculate_volume(
    current_weight_kg: f64,
    goal_weight_kg: f64,
    preference: TrainingPreference,
    age_years: u32,
    config: &VolumeConfig,
) -> f64 {
    let mut volume = (current_weight_kg - goal_weight_kg).abs() * config.sets_per_kg_change;

    if age_years < config.youth_age_limit {
        volume *= config.youth_multiplier;
    }

    volume *= config.multiplier(preference);

    if age_years >= config.youth_age_limit {
        volume *= config.age_factor(age_years);
    }

    volume.min(config.max_sets).max(config.min_sets)
}

/// Recommended training sessions per week
///
/// Five sessions below 40, three from 40 on. Hybrid training adds one, capped
/// at the weekly maximum.
#[must_use]
pub fn workout_sessions_per_week(
    age_years: u32,
    preference: TrainingPreference,
    config: &SessionConfig,
) -> u32 {
    let base = if age_years < config.age_threshold {
        config.younger_sessions
    } else {
        config.older_sessions
    };

    match preference {
        TrainingPreference::Hybrid => {
            base
                .saturating_add(config.hybrid_bonus)
                .min(config.max_sessions_per_week)
        }
        TrainingPreference::Weight | TrainingPreference::Cardio => base,
    }
}

/// Scale a base volume by the direction of the weight goal
///
/// Gaining weight raises volume by 10%; losing weight lowers it by 10%.
/// Equal weights use the maintenance factor.
#[must_use]
pub fn adjust_workout_volume(
    goal_weight_kg: f64,
    current_weight_kg: f64,
    base_volume: f64,
    config: &VolumeConfig,
) -> f64 {
    let factor = if goal_weight_kg > current_weight_kg {
        config.bulking_factor
    } else if goal_weight_kg < current_weight_kg {
        config.cutting_factor
    } else {
        config.maintenance_factor
    };
    base_volume * factor
}
