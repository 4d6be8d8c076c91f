// ABOUTME: Output formatting helpers for fittrack-cli
// ABOUTME: Prints calculator results as readable text or pretty JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fittrack::errors::AppResult;
use fittrack::intelligence::{round_to, NutritionGoals, WorkoutPlan};
use fittrack::models::{ActivityLevel, WorkoutSplit};
use serde::Serialize;

/// Print any serializable result as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display a BMI result
pub fn display_bmi(bmi: f64) {
    println!("Your BMI is {:.2}", round_to(bmi, 2));
}

/// Display a TDEE result
pub fn display_tdee(tdee: f64, activity_level: ActivityLevel) {
    println!(
        "Your TDEE is {:.0} calories per day ({}).",
        round_to(tdee, 0),
        activity_level.label()
    );
}

/// Display the calorie and macronutrient targets
pub fn display_nutrition(goals: &NutritionGoals) {
    println!("{}", goals.caloric_goal_statement);
    println!("   Protein: {:.1} g", goals.protein_grams);
    println!("   Fat:     {:.1} g", goals.fat_grams);
    println!("   Carbs:   {:.1} g", goals.carb_grams);
}

/// Display a complete workout plan
pub fn display_plan(plan: &WorkoutPlan) {
    println!("\nYour Workout Plan");
    println!("{}", "=".repeat(50));
    println!("Intensity: {}", plan.intensity_description);
    println!("Volume:    {}", plan.volume_description);
    println!("Sessions:  {}", plan.sessions_description);
    println!("Focus:     {}", plan.focus);
    println!("\nNutrition");
    println!("{}", "=".repeat(50));
    display_nutrition(&plan.nutrition);
}

/// Display the chosen training split
pub fn display_split(split: &WorkoutSplit) {
    println!(
        "{} - {} ({})",
        split.preference.label(),
        split.days,
        split.template_name()
    );
}
