// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, float comparison, and domain record builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::float_cmp
)]
//! Shared test utilities for `fittrack`

use chrono::{NaiveDate, NaiveDateTime};
use fittrack::intelligence::WorkoutPlanInput;
use fittrack::models::{
    ExerciseIntensity, FoodLogDetails, FoodLogEntry, TrainingPreference, WorkoutLogDetails,
    WorkoutLogEntry,
};
use std::env;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Assert two floats are equal within `1e-9`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Plan input with the given assessment answers
pub fn plan_input(
    age_years: u32,
    current_weight_kg: f64,
    goal_weight_kg: f64,
    training_preference: TrainingPreference,
    tdee_kcal: f64,
) -> WorkoutPlanInput {
    WorkoutPlanInput {
        age_years,
        current_weight_kg,
        goal_weight_kg,
        training_preference,
        tdee_kcal,
    }
}

/// Timestamp on the given day at `hour:00`
pub fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .expect("valid test timestamp")
}

/// Food log entry with round macro values
pub fn food_entry(user_id: i64, food_name: &str, calories: f64, log_date: NaiveDateTime) -> FoodLogEntry {
    FoodLogEntry::new(
        user_id,
        FoodLogDetails {
            food_name: food_name.to_owned(),
            quantity_g: 100.0,
            calories,
            protein_g: 10.0,
            carbs_g: 20.0,
            fats_g: 5.0,
            log_date,
        },
    )
}

/// Workout log entry of medium intensity
pub fn workout_entry(user_id: i64, exercise_name: &str, log_date: NaiveDateTime) -> WorkoutLogEntry {
    WorkoutLogEntry::new(
        user_id,
        WorkoutLogDetails {
            exercise_name: exercise_name.to_owned(),
            duration_minutes: 30.0,
            intensity: ExerciseIntensity::Medium,
            log_date,
        },
    )
}
