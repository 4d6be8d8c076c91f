// ABOUTME: Daily calorie target and macronutrient grams from TDEE and weight goal
// ABOUTME: Fixed calorie offset by goal direction, ratios by training preference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Goals
//!
//! The calorie target is TDEE shifted by a fixed 250 kcal deficit or surplus.
//! Macronutrient grams split that target by the training preference's ratios
//! and divide by energy density (protein 4, fat 9, carbs 4 kcal/g).

use crate::config::{MacroRatios, NutritionGoalConfig};
use crate::rounding::round_to;
use fittrack_core::models::TrainingPreference;
use serde::{Deserialize, Serialize};

/// Direction of the user's weight goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CaloricGoal {
    /// Goal weight below current weight
    Lose,
    /// Goal weight above current weight
    Gain,
    /// Goal weight equal to current weight
    Maintain,
}

impl CaloricGoal {
    /// Goal direction from current and goal weight
    #[must_use]
    pub fn from_weights(current_weight_kg: f64, goal_weight_kg: f64) -> Self {
        if goal_weight_kg < current_weight_kg {
            Self::Lose
        } else if goal_weight_kg > current_weight_kg {
            Self::Gain
        } else {
            Self::Maintain
        }
    }

    fn statement_prefix(self) -> &'static str {
        match self {
            Self::Lose => "To lose weight",
            Self::Gain => "To gain weight",
            Self::Maintain => "To maintain your current weight",
        }
    }
}

/// Daily calorie and macronutrient targets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionGoals {
    /// Target energy intake (kcal/day), unrounded
    pub daily_calories: f64,
    /// Protein target (grams, one decimal)
    pub protein_grams: f64,
    /// Fat target (grams, one decimal)
    pub fat_grams: f64,
    /// Carbohydrate target (grams, one decimal)
    pub carb_grams: f64,
    /// Sentence shown to the user
    pub caloric_goal_statement: String,
    /// Goal direction the target was derived from
    pub caloric_goal: CaloricGoal,
    /// Ratios applied for the training preference
    pub macro_ratios: MacroRatios,
}

/// Calculate daily calorie and macronutrient targets
///
/// # Arguments
/// * `tdee` - Total daily energy expenditure (kcal/day)
/// * `current_weight_kg` - Current body weight
/// * `goal_weight_kg` - Goal body weight
/// * `preference` - Training preference selecting the macro ratios
/// * `config` - Calorie offset, ratios and energy densities
#[must_use]
pub fn calculate_nutritional_goals(
    tdee: f64,
    current_weight_kg: f64,
    goal_weight_kg: f64,
    preference: TrainingPreference,
    config: &NutritionGoalConfig,
) -> NutritionGoals {
    let caloric_goal = CaloricGoal::from_weights(current_weight_kg, goal_weight_kg);
    let daily_calories = match caloric_goal {
        CaloricGoal::Lose => tdee - config.calorie_adjustment_kcal,
        CaloricGoal::Gain => tdee + config.calorie_adjustment_kcal,
        CaloricGoal::Maintain => tdee,
    };

    let displayed_calories = round_to(daily_calories, 0);
    let caloric_goal_statement = format!(
        "{}, aim for a daily caloric intake of about {displayed_calories:.0} calories.",
        caloric_goal.statement_prefix()
    );

    let ratios = config.ratios(preference);
    let protein_grams = (daily_calories * ratios.protein) / config.kcal_per_gram_protein;
    let fat_grams = (daily_calories * ratios.fat) / config.kcal_per_gram_fat;
    let carb_grams = (daily_calories * ratios.carb) / config.kcal_per_gram_carbs;

    NutritionGoals {
        daily_calories,
        protein_grams: round_to(protein_grams, 1),
        fat_grams: round_to(fat_grams, 1),
        carb_grams: round_to(carb_grams, 1),
        caloric_goal_statement,
        caloric_goal,
        macro_ratios: ratios,
    }
}
