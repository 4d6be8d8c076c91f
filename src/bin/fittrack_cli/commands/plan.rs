// ABOUTME: Workout plan, nutrition goal, and training split commands for fittrack-cli
// ABOUTME: Validates the assessment arguments and prints the assembled recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display;
use crate::OutputFormat;
use fittrack::errors::{AppError, AppResult};
use fittrack::forms::{NutritionForm, WorkoutDaysForm, WorkoutPlanForm, WorkoutPreferenceForm};
use fittrack::intelligence::{calculate_nutritional_goals, generate_workout_plan, CalculatorConfig};
use fittrack::models::WorkoutSplit;
use serde_json::json;
use tracing::info;

/// Raw `plan` subcommand arguments
pub struct PlanArgs {
    pub age: String,
    pub current_weight: String,
    pub goal_weight: String,
    pub preference: String,
    pub tdee: f64,
}

/// Raw `nutrition` subcommand arguments
pub struct NutritionArgs {
    pub tdee: String,
    pub current_weight: String,
    pub goal_weight: String,
    pub preference: String,
}

fn ensure_positive_tdee(tdee: f64) -> AppResult<()> {
    if tdee.is_finite() && tdee > 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "tdee must be a positive number, got {tdee}"
        )))
    }
}

/// Generate and print the workout and nutrition plan
pub fn plan(args: PlanArgs, config: &CalculatorConfig, format: OutputFormat) -> AppResult<()> {
    ensure_positive_tdee(args.tdee)?;
    let assessment = WorkoutPlanForm {
        age: Some(args.age),
        current_weight: Some(args.current_weight),
        goal_weight: Some(args.goal_weight),
        training_preference: Some(args.preference),
    }
    .validate()?;

    let plan = generate_workout_plan(&assessment.with_tdee(args.tdee), config);
    info!(
        sessions_per_week = plan.sessions_per_week,
        band = %plan.intensity_band,
        "Workout plan generated"
    );

    match format {
        OutputFormat::Json => display::print_json(&plan),
        OutputFormat::Text => {
            display::display_plan(&plan);
            Ok(())
        }
    }
}

/// Calculate and print nutrition goals
pub fn nutrition(
    args: NutritionArgs,
    config: &CalculatorConfig,
    format: OutputFormat,
) -> AppResult<()> {
    let request = NutritionForm {
        tdee: Some(args.tdee),
        current_weight: Some(args.current_weight),
        goal_weight: Some(args.goal_weight),
        training_preference: Some(args.preference),
    }
    .validate()?;

    let goals = calculate_nutritional_goals(
        request.tdee_kcal,
        request.current_weight_kg,
        request.goal_weight_kg,
        request.training_preference,
        &config.nutrition,
    );
    info!(caloric_goal = ?goals.caloric_goal, "Nutrition goals calculated");

    match format {
        OutputFormat::Json => display::print_json(&goals),
        OutputFormat::Text => {
            display::display_nutrition(&goals);
            Ok(())
        }
    }
}

/// Print the prepared split for a focus and day count
pub fn split(preference: String, days: String, format: OutputFormat) -> AppResult<()> {
    let preference = WorkoutPreferenceForm {
        preference: Some(preference),
    }
    .validate()?;
    let days = WorkoutDaysForm { days: Some(days) }.validate()?;
    let split = WorkoutSplit::new(preference, days);

    match format {
        OutputFormat::Json => display::print_json(&json!({
            "preference": split.preference,
            "days": split.days,
            "template": split.template_name(),
        })),
        OutputFormat::Text => {
            display::display_split(&split);
            Ok(())
        }
    }
}
