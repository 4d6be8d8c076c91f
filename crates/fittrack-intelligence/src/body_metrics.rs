// ABOUTME: Body composition and energy expenditure: BMI, Mifflin-St Jeor BMR, TDEE
// ABOUTME: Pure functions over validated biometric inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Body Metrics
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise Physiology*.

use crate::config::{BmrConfig, CalculatorConfig};
use fittrack_core::models::{ActivityLevel, Gender};
use serde::{Deserialize, Serialize};

/// Weight and height submitted on the BMI form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BiometricInput {
    /// Body weight (kg), positive
    pub weight_kg: f64,
    /// Height (cm), positive
    pub height_cm: f64,
}

impl BiometricInput {
    /// Body Mass Index for these measurements
    #[must_use]
    pub fn bmi(&self) -> f64 {
        calculate_bmi(self.height_cm, self.weight_kg)
    }
}

/// Everything the TDEE form collects
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TdeeInput {
    /// Sex for the BMR constant
    pub gender: Gender,
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Height (cm)
    pub height_cm: f64,
    /// Age (years); fractional ages are accepted
    pub age_years: f64,
    /// Daily activity level
    pub activity_level: ActivityLevel,
}

impl TdeeInput {
    /// Total daily energy expenditure for this input
    #[must_use]
    pub fn tdee(&self, config: &CalculatorConfig) -> f64 {
        calculate_tdee(
            self.gender,
            self.height_cm,
            self.weight_kg,
            self.age_years,
            self.activity_level,
            config,
        )
    }
}

/// Calculate Body Mass Index
///
/// Formula: BMI = `weight_kg` / (`height_cm` / 100)^2
///
/// No validation: the caller guarantees `height_cm > 0`.
#[must_use]
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / height_m.powi(2)
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// # Arguments
/// * `gender` - Male or Female
/// * `height_cm` - Height in centimeters
/// * `weight_kg` - Body weight in kilograms
/// * `age_years` - Age in years
/// * `config` - BMR configuration with formula coefficients
#[must_use]
pub fn calculate_bmr(
    gender: Gender,
    height_cm: f64,
    weight_kg: f64,
    age_years: f64,
    config: &BmrConfig,
) -> f64 {
    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    config.msj_weight_coef * weight_kg
        + config.msj_height_coef * height_cm
        + config.msj_age_coef * age_years
        + gender_constant
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x Activity Factor
///
/// Activity factors based on `McArdle` et al. (2010):
/// - Sedentary: 1.2 (little/no exercise)
/// - Lightly active: 1.375 (1-3 days/week)
/// - Moderately active: 1.55 (3-5 days/week)
/// - Very active: 1.725 (6-7 days/week)
#[must_use]
pub fn calculate_tdee(
    gender: Gender,
    height_cm: f64,
    weight_kg: f64,
    age_years: f64,
    activity_level: ActivityLevel,
    config: &CalculatorConfig,
) -> f64 {
    let bmr = calculate_bmr(gender, height_cm, weight_kg, age_years, &config.bmr);
    bmr * config.activity_factors.factor(activity_level)
}
