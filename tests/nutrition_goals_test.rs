// ABOUTME: Tests for daily calorie targets and macronutrient gram calculations
// ABOUTME: Covers goal direction statements, preference ratios, and rounding ties
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use common::assert_close;
use fittrack::intelligence::config::NutritionGoalConfig;
use fittrack::intelligence::{calculate_nutritional_goals, CaloricGoal};
use fittrack::models::TrainingPreference::{Cardio, Hybrid, Weight};

mod common;

#[test]
fn test_weight_loss_targets() {
    common::init_test_logging();
    let config = NutritionGoalConfig::default();

    let goals = calculate_nutritional_goals(2259.0, 80.0, 70.0, Weight, &config);

    assert_eq!(goals.caloric_goal, CaloricGoal::Lose);
    assert_close(goals.daily_calories, 2009.0);
    assert_close(goals.protein_grams, 150.7);
    assert_close(goals.fat_grams, 55.8);
    assert_close(goals.carb_grams, 226.0);
    assert_eq!(
        goals.caloric_goal_statement,
        "To lose weight, aim for a daily caloric intake of about 2009 calories."
    );
}

#[test]
fn test_weight_gain_targets() {
    let config = NutritionGoalConfig::default();

    let goals = calculate_nutritional_goals(2500.0, 70.0, 80.0, Cardio, &config);

    assert_eq!(goals.caloric_goal, CaloricGoal::Gain);
    assert_close(goals.daily_calories, 2750.0);
    assert_close(goals.protein_grams, 171.9);
    assert_close(goals.fat_grams, 61.1);
    assert_close(goals.carb_grams, 378.1);
    assert_eq!(
        goals.caloric_goal_statement,
        "To gain weight, aim for a daily caloric intake of about 2750 calories."
    );
}

#[test]
fn test_maintenance_targets() {
    let config = NutritionGoalConfig::default();

    let goals = calculate_nutritional_goals(2000.0, 70.0, 70.0, Hybrid, &config);

    assert_eq!(goals.caloric_goal, CaloricGoal::Maintain);
    assert_close(goals.daily_calories, 2000.0);
    assert_close(goals.protein_grams, 125.0);
    assert_close(goals.fat_grams, 66.7);
    assert_close(goals.carb_grams, 225.0);
    assert_eq!(
        goals.caloric_goal_statement,
        "To maintain your current weight, aim for a daily caloric intake of about 2000 calories."
    );
}

#[test]
fn test_grams_round_half_away_from_zero() {
    let config = NutritionGoalConfig::default();

    // 996 * 0.25 / 4 = 62.25 exactly
    let hybrid = calculate_nutritional_goals(996.0, 70.0, 70.0, Hybrid, &config);
    assert_close(hybrid.protein_grams, 62.3);
    assert_close(hybrid.fat_grams, 33.2);
    assert_close(hybrid.carb_grams, 112.1);

    let cardio = calculate_nutritional_goals(996.0, 70.0, 70.0, Cardio, &config);
    assert_close(cardio.protein_grams, 62.3);
    assert_close(cardio.fat_grams, 22.1);
    assert_close(cardio.carb_grams, 137.0);
}

#[test]
fn test_statement_rounds_fractional_calories() {
    let config = NutritionGoalConfig::default();

    let goals = calculate_nutritional_goals(2_277.431_25, 70.0, 70.0, Weight, &config);
    assert_close(goals.daily_calories, 2_277.431_25);
    assert!(goals.caloric_goal_statement.contains("about 2277 calories"));

    let tie = calculate_nutritional_goals(2166.5, 70.0, 70.0, Hybrid, &config);
    assert!(tie.caloric_goal_statement.contains("about 2167 calories"));
}

#[test]
fn test_ratios_follow_preference() {
    let config = NutritionGoalConfig::default();

    for preference in [Weight, Cardio, Hybrid] {
        let goals = calculate_nutritional_goals(2000.0, 70.0, 70.0, preference, &config);
        assert_eq!(goals.macro_ratios, config.ratios(preference));
        assert_close(goals.macro_ratios.total(), 1.0);
    }

    assert_close(config.ratios(Weight).protein, 0.30);
    assert_close(config.ratios(Cardio).carb, 0.55);
    assert_close(config.ratios(Hybrid).fat, 0.30);
}

#[test]
fn test_custom_calorie_adjustment() {
    let config = NutritionGoalConfig {
        calorie_adjustment_kcal: 500.0,
        ..NutritionGoalConfig::default()
    };

    let goals = calculate_nutritional_goals(2500.0, 90.0, 80.0, Weight, &config);
    assert_close(goals.daily_calories, 2000.0);
    assert_close(goals.protein_grams, 150.0);
}
