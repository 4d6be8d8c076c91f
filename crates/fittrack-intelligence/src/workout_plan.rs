// ABOUTME: Assembles the workout and nutrition plan shown after the workout assessment
// ABOUTME: Runs intensity, volume, sessions and nutrition calculators and formats sentences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::CalculatorConfig;
use crate::nutrition_goals::{calculate_nutritional_goals, NutritionGoals};
use crate::rounding::round_to;
use crate::workout_planner::{
    adjust_workout_volume, calculate_intensity, calculate_volume, workout_sessions_per_week,
    IntensityBand,
};
use fittrack_core::errors::{AppError, AppResult};
use fittrack_core::models::{TrainingPreference, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Inputs of a workout plan: the assessment answers plus the stored TDEE
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WorkoutPlanInput {
    /// Age (years), 18-100
    pub age_years: u32,
    /// Current weight (kg), at least 30
    pub current_weight_kg: f64,
    /// Goal weight (kg), at least 30
    pub goal_weight_kg: f64,
    /// Workout focus
    pub training_preference: TrainingPreference,
    /// Last computed TDEE (kcal/day)
    pub tdee_kcal: f64,
}

impl WorkoutPlanInput {
    /// Build the plan input from the values stored on a user profile
    ///
    /// # Errors
    ///
    /// Returns `MISSING_REQUIRED_FIELD` naming the first absent value: the TDEE
    /// must have been calculated and the workout assessment completed.
    pub fn from_profile(profile: &UserProfile) -> AppResult<Self> {
        Ok(Self {
            age_years: profile
                .age_years
                .ok_or_else(|| AppError::missing_field("age"))?,
            current_weight_kg: profile
                .current_weight_kg
                .ok_or_else(|| AppError::missing_field("current_weight"))?,
            goal_weight_kg: profile
                .goal_weight_kg
                .ok_or_else(|| AppError::missing_field("goal_weight"))?,
            training_preference: profile
                .training_preference
                .ok_or_else(|| AppError::missing_field("training_preference"))?,
            tdee_kcal: profile
                .tdee
                .ok_or_else(|| AppError::missing_field("tdee"))?,
        })
    }
}

/// Complete workout and nutrition recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutPlan {
    /// Raw intensity score
    pub intensity_score: f64,
    /// Band of the intensity score
    pub intensity_band: IntensityBand,
    /// Advice sentence for the band
    pub intensity_description: String,
    /// Weekly sets after the goal-direction adjustment
    pub weekly_volume_sets: f64,
    /// Volume sentence
    pub volume_description: String,
    /// Sessions per week
    pub sessions_per_week: u32,
    /// Sessions sentence, e.g. "5 sessions per week."
    pub sessions_description: String,
    /// Focus sentence, e.g. "Focus on Weight intensive training."
    pub focus: String,
    /// Calorie and macronutrient targets
    pub nutrition: NutritionGoals,
}

/// Generate the complete workout and nutrition plan
///
/// Order: intensity, volume, goal-adjusted volume, sessions, nutrition.
#[must_use]
pub fn generate_workout_plan(input: &WorkoutPlanInput, config: &CalculatorConfig) -> WorkoutPlan {
    let preference = input.training_preference;

    let intensity_score = calculate_intensity(input.age_years, preference, &config.intensity);
    let base_volume = calculate_volume(
        input.current_weight_kg,
        input.goal_weight_kg,
        preference,
        input.age_years,
        &config.volume,
    );
    let weekly_volume_sets = adjust_workout_volume(
        input.goal_weight_kg,
        input.current_weight_kg,
        base_volume,
        &config.volume,
    );
    let sessions_per_week =
        workout_sessions_per_week(input.age_years, preference, &config.sessions);
    let nutrition = calculate_nutritional_goals(
        input.tdee_kcal,
        input.current_weight_kg,
        input.goal_weight_kg,
        preference,
        &config.nutrition,
    );

    let intensity_band = IntensityBand::from_score(intensity_score, &config.intensity);
    let displayed_sets = round_to(weekly_volume_sets, 1);

    debug!(
        age_years = input.age_years,
        preference = preference.as_str(),
        intensity_score,
        base_volume,
        weekly_volume_sets,
        sessions_per_week,
        daily_calories = nutrition.daily_calories,
        "Generated workout plan"
    );

    WorkoutPlan {
        intensity_score,
        intensity_band,
        intensity_description: intensity_band.description().to_owned(),
        weekly_volume_sets,
        volume_description: format!(
            "Your weekly exercise volume is recommended to be {displayed_sets:.1} sets. \
             Distribute this evenly over your sessions."
        ),
        sessions_per_week,
        sessions_description: format!("{sessions_per_week} sessions per week."),
        focus: format!("Focus on {} intensive training.", preference.title()),
        nutrition,
    }
}
