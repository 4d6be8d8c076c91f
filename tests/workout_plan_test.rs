// ABOUTME: Tests for the assembled workout and nutrition plan
// ABOUTME: Checks formatted sentences, band boundaries, and building input from a profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::Utc;
use common::{assert_close, plan_input};
use fittrack::errors::ErrorCode;
use fittrack::intelligence::{
    adjust_workout_volume, calculate_bmi, calculate_intensity, calculate_nutritional_goals,
    calculate_tdee, calculate_volume, generate_workout_plan, workout_sessions_per_week,
    CalculatorConfig, CaloricGoal, IntensityBand, WorkoutPlanInput,
};
use fittrack::models::TrainingPreference::{Cardio, Hybrid, Weight};
use fittrack::models::{ActivityLevel, Gender, UserProfile};

mod common;

#[test]
fn test_plan_for_young_weight_loss() {
    common::init_test_logging();
    let config = CalculatorConfig::default();

    let plan = generate_workout_plan(&plan_input(25, 100.0, 80.0, Weight, 2259.0), &config);

    assert_close(plan.intensity_score, 8.1);
    assert_eq!(plan.intensity_band, IntensityBand::High);
    assert_eq!(
        plan.intensity_description,
        "High intensity. Push yourself close to your limits (failure), ensuring proper form."
    );
    assert_close(plan.weekly_volume_sets, 63.0);
    assert_eq!(
        plan.volume_description,
        "Your weekly exercise volume is recommended to be 63.0 sets. \
         Distribute this evenly over your sessions."
    );
    assert_eq!(plan.sessions_per_week, 5);
    assert_eq!(plan.sessions_description, "5 sessions per week.");
    assert_eq!(plan.focus, "Focus on Weight intensive training.");

    assert_eq!(plan.nutrition.caloric_goal, CaloricGoal::Lose);
    assert_close(plan.nutrition.daily_calories, 2009.0);
    assert_close(plan.nutrition.protein_grams, 150.7);
    assert_close(plan.nutrition.fat_grams, 55.8);
    assert_close(plan.nutrition.carb_grams, 226.0);
}

#[test]
fn test_plan_for_maintenance_cardio() {
    let config = CalculatorConfig::default();

    let plan = generate_workout_plan(&plan_input(45, 60.0, 60.0, Cardio, 2000.0), &config);

    assert_close(plan.intensity_score, 5.5);
    assert_eq!(plan.intensity_band, IntensityBand::Moderate);
    // Minimum 10 sets, then the maintenance factor
    assert_close(plan.weekly_volume_sets, 9.0);
    assert!(plan.volume_description.contains("9.0 sets."));
    assert_eq!(plan.sessions_description, "3 sessions per week.");
    assert_eq!(plan.focus, "Focus on Cardio intensive training.");

    assert_eq!(plan.nutrition.caloric_goal, CaloricGoal::Maintain);
    assert_close(plan.nutrition.protein_grams, 125.0);
    assert_close(plan.nutrition.fat_grams, 44.4);
    assert_close(plan.nutrition.carb_grams, 275.0);
}

#[test]
fn test_plan_for_hybrid_at_high_band_boundary() {
    let config = CalculatorConfig::default();

    let plan = generate_workout_plan(&plan_input(35, 80.0, 70.0, Hybrid, 2500.0), &config);

    // 10 - (35 - 20) / 5 = 7.0 exactly
    assert_close(plan.intensity_score, 7.0);
    assert_eq!(plan.intensity_band, IntensityBand::High);
    assert!(plan.volume_description.contains("49.5 sets."));
    assert_eq!(plan.sessions_per_week, 6);
    assert_eq!(plan.focus, "Focus on Hybrid intensive training.");

    assert_close(plan.nutrition.daily_calories, 2250.0);
    assert_close(plan.nutrition.protein_grams, 140.6);
    assert_close(plan.nutrition.fat_grams, 75.0);
    assert_close(plan.nutrition.carb_grams, 253.1);
}

#[test]
fn test_plan_volume_sentence_rounds_to_one_decimal() {
    let config = CalculatorConfig::default();

    // 55.00000000000001 * 1.1 for a gain goal
    let plan = generate_workout_plan(&plan_input(35, 70.0, 80.0, Hybrid, 2500.0), &config);
    assert!(plan.volume_description.contains("60.5 sets."));

    // 41.25 * 0.9 = 37.125
    let plan = generate_workout_plan(&plan_input(55, 90.0, 80.0, Hybrid, 2500.0), &config);
    assert!(plan.volume_description.contains("37.1 sets."));
}

#[test]
fn test_plan_sentences_round_exact_ties_away_from_zero() {
    let mut config = CalculatorConfig::default();
    config.volume.cutting_factor = 1.0;

    // 10.25 kg * 5 sets = 51.25 sets, exactly representable
    let plan = generate_workout_plan(&plan_input(35, 80.25, 70.0, Weight, 2416.5), &config);
    assert_close(plan.weekly_volume_sets, 51.25);
    assert!(plan.volume_description.contains("51.3 sets."));

    let plan = generate_workout_plan(&plan_input(35, 80.0, 80.0, Weight, 2416.5), &config);
    assert!(plan
        .nutrition
        .caloric_goal_statement
        .contains("about 2417 calories."));
}

#[test]
fn test_calculators_return_identical_results_for_identical_input() {
    let config = CalculatorConfig::default();

    assert_eq!(
        calculate_bmi(170.0, 70.0).to_bits(),
        calculate_bmi(170.0, 70.0).to_bits()
    );
    assert_eq!(
        calculate_tdee(Gender::Male, 180.0, 80.0, 25.0, ActivityLevel::Sedentary, &config)
            .to_bits(),
        calculate_tdee(Gender::Male, 180.0, 80.0, 25.0, ActivityLevel::Sedentary, &config)
            .to_bits()
    );

    for preference in [Weight, Cardio, Hybrid] {
        for age in 18..=100 {
            let first = calculate_intensity(age, preference, &config.intensity);
            let second = calculate_intensity(age, preference, &config.intensity);
            assert_eq!(first.to_bits(), second.to_bits());

            let first = calculate_volume(90.0, 75.0, preference, age, &config.volume);
            let second = calculate_volume(90.0, 75.0, preference, age, &config.volume);
            assert_eq!(first.to_bits(), second.to_bits());
            assert_eq!(
                adjust_workout_volume(75.0, 90.0, first, &config.volume).to_bits(),
                adjust_workout_volume(75.0, 90.0, second, &config.volume).to_bits()
            );

            assert_eq!(
                workout_sessions_per_week(age, preference, &config.sessions),
                workout_sessions_per_week(age, preference, &config.sessions)
            );

            let input = plan_input(age, 90.0, 75.0, preference, 2300.0);
            assert_eq!(
                generate_workout_plan(&input, &config),
                generate_workout_plan(&input, &config)
            );
        }

        assert_eq!(
            calculate_nutritional_goals(2300.0, 90.0, 75.0, preference, &config.nutrition),
            calculate_nutritional_goals(2300.0, 90.0, 75.0, preference, &config.nutrition)
        );
    }
}

#[test]
fn test_plan_light_band_for_older_users() {
    let config = CalculatorConfig::default();

    let plan = generate_workout_plan(&plan_input(65, 90.0, 80.0, Weight, 1800.0), &config);

    assert_close(plan.intensity_score, 0.9);
    assert_eq!(plan.intensity_band, IntensityBand::Light);
    assert_eq!(
        plan.intensity_description,
        "Light intensity. consider increasing intensity over time."
    );
}

#[test]
fn test_plan_serializes_to_json() {
    let config = CalculatorConfig::default();
    let plan = generate_workout_plan(&plan_input(25, 100.0, 80.0, Weight, 2259.0), &config);

    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["intensity_band"], "high");
    assert_eq!(json["sessions_per_week"], 5);
    assert_eq!(json["nutrition"]["caloric_goal"], "lose");
}

// ============================================================================
// PLAN INPUT FROM PROFILE
// ============================================================================

#[test]
fn test_plan_input_from_complete_profile() {
    let mut profile = UserProfile::new(1, "alice");
    profile.record_tdee(2259.0, Utc::now());
    profile.update_training_goals(25, 100.0, 80.0, Weight);

    let input = WorkoutPlanInput::from_profile(&profile).unwrap();
    assert_eq!(input, plan_input(25, 100.0, 80.0, Weight, 2259.0));
}

#[test]
fn test_plan_input_requires_stored_tdee() {
    let mut profile = UserProfile::new(1, "alice");
    profile.update_training_goals(25, 100.0, 80.0, Weight);

    let error = WorkoutPlanInput::from_profile(&profile).unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);
    assert_eq!(error.context.details["field"], "tdee");
}

#[test]
fn test_plan_input_requires_assessment() {
    let mut profile = UserProfile::new(1, "alice");
    profile.record_tdee(2259.0, Utc::now());

    let error = WorkoutPlanInput::from_profile(&profile).unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);
    assert_eq!(error.context.details["field"], "age");
}

#[test]
fn test_global_config_matches_defaults_without_overrides() {
    let input = plan_input(25, 100.0, 80.0, Weight, 2259.0);

    let from_global = generate_workout_plan(&input, CalculatorConfig::global());
    let from_default = generate_workout_plan(&input, &CalculatorConfig::default());
    assert_eq!(from_global, from_default);
}
