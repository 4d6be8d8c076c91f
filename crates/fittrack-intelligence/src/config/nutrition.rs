// ABOUTME: Nutrition goal configuration: calorie offset and macro ratios per training focus
// ABOUTME: MacroRatios must always sum to 1.0; validated when the configuration loads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use fittrack_core::constants::energy::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use fittrack_core::models::TrainingPreference;
use serde::{Deserialize, Serialize};

/// Largest tolerated deviation of a ratio sum from 1.0
const RATIO_SUM_TOLERANCE: f64 = 1e-9;

/// Share of daily calories given to each macronutrient
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroRatios {
    /// Protein share (0.0-1.0)
    pub protein: f64,
    /// Fat share (0.0-1.0)
    pub fat: f64,
    /// Carbohydrate share (0.0-1.0)
    pub carb: f64,
}

impl MacroRatios {
    /// Create a ratio triple
    #[must_use]
    pub const fn new(protein: f64, fat: f64, carb: f64) -> Self {
        Self { protein, fat, carb }
    }

    /// Sum of the three shares
    #[must_use]
    pub fn total(&self) -> f64 {
        self.protein + self.fat + self.carb
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        let shares = [self.protein, self.fat, self.carb];
        if shares.iter().any(|share| !(0.0..=1.0).contains(share)) {
            return Err(ConfigError::InvalidRange(format!(
                "{name} macro ratios must each be between 0.0 and 1.0"
            )));
        }
        let total = self.total();
        if (total - 1.0).abs() > RATIO_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights(format!(
                "{name} macro ratios must sum to 1.0, got {total}"
            )));
        }
        Ok(())
    }
}

/// Nutrition goal configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionGoalConfig {
    /// Deficit or surplus applied to TDEE when changing weight (250 kcal)
    pub calorie_adjustment_kcal: f64,
    /// Ratios for weight intensive training (0.30 / 0.25 / 0.45)
    pub weight_ratios: MacroRatios,
    /// Ratios for cardio intensive training (0.25 / 0.20 / 0.55)
    pub cardio_ratios: MacroRatios,
    /// Ratios for hybrid training (0.25 / 0.30 / 0.45)
    pub hybrid_ratios: MacroRatios,
    /// Protein energy density (4 kcal/g)
    pub kcal_per_gram_protein: f64,
    /// Fat energy density (9 kcal/g)
    pub kcal_per_gram_fat: f64,
    /// Carbohydrate energy density (4 kcal/g)
    pub kcal_per_gram_carbs: f64,
}

impl NutritionGoalConfig {
    /// Ratios for a training preference
    #[must_use]
    pub const fn ratios(&self, preference: TrainingPreference) -> MacroRatios {
        match preference {
            TrainingPreference::Weight => self.weight_ratios,
            TrainingPreference::Cardio => self.cardio_ratios,
            TrainingPreference::Hybrid => self.hybrid_ratios,
        }
    }

    /// Validate ratio sums, energy densities and the calorie offset
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` if any preference's ratios do not sum
    /// to 1.0, or `ConfigError::InvalidRange` for negative offsets or non-positive
    /// energy densities.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weight_ratios.validate("weight")?;
        self.cardio_ratios.validate("cardio")?;
        self.hybrid_ratios.validate("hybrid")?;

        if self.calorie_adjustment_kcal < 0.0 {
            return Err(ConfigError::InvalidRange(format!(
                "calorie adjustment must not be negative, got {}",
                self.calorie_adjustment_kcal
            )));
        }

        let densities = [
            self.kcal_per_gram_protein,
            self.kcal_per_gram_fat,
            self.kcal_per_gram_carbs,
        ];
        if densities.iter().any(|kcal| *kcal <= 0.0) {
            return Err(ConfigError::InvalidRange(
                "kcal per gram must be positive".to_owned(),
            ));
        }

        Ok(())
    }
}

impl Default for NutritionGoalConfig {
    fn default() -> Self {
        Self {
            calorie_adjustment_kcal: 250.0,
            // Higher protein share for weight training
            weight_ratios: MacroRatios::new(0.30, 0.25, 0.45),
            // Higher carbs for endurance energy
            cardio_ratios: MacroRatios::new(0.25, 0.20, 0.55),
            hybrid_ratios: MacroRatios::new(0.25, 0.30, 0.45),
            kcal_per_gram_protein: KCAL_PER_GRAM_PROTEIN,
            kcal_per_gram_fat: KCAL_PER_GRAM_FAT,
            kcal_per_gram_carbs: KCAL_PER_GRAM_CARBS,
        }
    }
}
