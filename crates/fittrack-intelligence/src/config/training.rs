// ABOUTME: Workout heuristics configuration for intensity, weekly volume, and sessions
// ABOUTME: Age thresholds, preference multipliers, and the safe volume range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training Configuration
//!
//! Rule-of-thumb heuristics rather than published formulas. Younger users get
//! more volume and sessions; volume is capped on both ends so every plan leaves
//! room for recovery.

use fittrack_core::models::TrainingPreference;
use serde::{Deserialize, Serialize};

/// Intensity score settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntensityConfig {
    /// Score at the reference age (10.0)
    pub base_score: f64,
    /// Age at which the score starts declining (20)
    pub reference_age_years: f64,
    /// Years per one-point decline (5)
    pub years_per_point: f64,
    /// Lowest base score before the preference multiplier (1.0)
    pub floor_score: f64,
    /// Weight training multiplier (0.9)
    pub weight_multiplier: f64,
    /// Cardio training multiplier (1.1)
    pub cardio_multiplier: f64,
    /// Hybrid training multiplier (1.0)
    pub hybrid_multiplier: f64,
    /// Scores from here up are "Moderate" (4.0)
    pub moderate_threshold: f64,
    /// Scores from here up are "High" (7.0)
    pub high_threshold: f64,
}

impl IntensityConfig {
    /// Multiplier for a training preference
    #[must_use]
    pub const fn multiplier(&self, preference: TrainingPreference) -> f64 {
        match preference {
            TrainingPreference::Weight => self.weight_multiplier,
            TrainingPreference::Cardio => self.cardio_multiplier,
            TrainingPreference::Hybrid => self.hybrid_multiplier,
        }
    }
}

/// Weekly set volume settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeConfig {
    /// Sets per kilogram of weight change (5.0)
    pub sets_per_kg_change: f64,
    /// Users younger than this get the youth boost (30)
    pub youth_age_limit: u32,
    /// Youth boost multiplier (1.2)
    pub youth_multiplier: f64,
    /// Weight training multiplier (1.0)
    pub weight_multiplier: f64,
    /// Cardio training multiplier (0.8)
    pub cardio_multiplier: f64,
    /// Hybrid training multiplier (1.1)
    pub hybrid_multiplier: f64,
    /// Users older than this get the middle-age dampening (50)
    pub older_age_threshold: u32,
    /// Middle-age dampening factor (0.75)
    pub older_factor: f64,
    /// Users older than this get the senior dampening (60)
    pub senior_age_threshold: u32,
    /// Senior dampening factor (0.5)
    pub senior_factor: f64,
    /// Lower bound of the safe range (10 sets)
    pub min_sets: f64,
    /// Upper bound of the safe range (70 sets)
    pub max_sets: f64,
    /// Adjustment when the goal weight is above the current weight (1.1)
    pub bulking_factor: f64,
    /// Adjustment when the goal weight is below the current weight (0.9)
    pub cutting_factor: f64,
    /// Adjustment when goal and current weight are equal (0.9)
    pub maintenance_factor: f64,
}

impl VolumeConfig {
    /// Multiplier for a training preference
    #[must_use]
    pub const fn multiplier(&self, preference: TrainingPreference) -> f64 {
        match preference {
            TrainingPreference::Weight => self.weight_multiplier,
            TrainingPreference::Cardio => self.cardio_multiplier,
            TrainingPreference::Hybrid => self.hybrid_multiplier,
        }
    }

    /// Age dampening for users at or past the youth limit
    #[must_use]
    pub const fn age_factor(&self, age_years: u32) -> f64 {
        if age_years > self.senior_age_threshold {
            self.senior_factor
        } else if age_years > self.older_age_threshold {
            self.older_factor
        } else {
            1.0
        }
    }
}

/// Sessions per week settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Users younger than this get `younger_sessions` (40)
    pub age_threshold: u32,
    /// Sessions for younger users (5)
    pub younger_sessions: u32,
    /// Sessions for older users (3)
    pub older_sessions: u32,
    /// Extra sessions for hybrid training (1)
    pub hybrid_bonus: u32,
    /// Hard cap on sessions per week (7)
    pub max_sessions_per_week: u32,
}

impl Default for IntensityConfig {
    fn default() -> Self {
        Self {
            base_score: 10.0,
            reference_age_years: 20.0,
            years_per_point: 5.0,
            floor_score: 1.0,
            weight_multiplier: 0.9,
            cardio_multiplier: 1.1,
            hybrid_multiplier: 1.0,
            moderate_threshold: 4.0,
            high_threshold: 7.0,
        }
    }
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            sets_per_kg_change: 5.0,
            youth_age_limit: 30,
            youth_multiplier: 1.2,
            weight_multiplier: 1.0,
            cardio_multiplier: 0.8,
            hybrid_multiplier: 1.1,
            older_age_threshold: 50,
            older_factor: 0.75,
            senior_age_threshold: 60,
            senior_factor: 0.5,
            min_sets: 10.0,
            max_sets: 70.0,
            bulking_factor: 1.1,
            cutting_factor: 0.9,
            maintenance_factor: 0.9,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            age_threshold: 40,
            younger_sessions: 5,
            older_sessions: 3,
            hybrid_bonus: 1,
            max_sessions_per_week: 7,
        }
    }
}
