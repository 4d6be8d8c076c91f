// ABOUTME: Metrics calculator for FitTrack: BMI, TDEE, workout planning, nutrition goals
// ABOUTME: Pure synchronous functions driven by an environment-tunable configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # FitTrack Intelligence
//!
//! The derived-metrics engine. Every calculation is a pure function over typed
//! inputs and a configuration section; none of them validate their inputs or
//! fail. Validation happens at the form boundary in the root crate.
//!
//! ## Modules
//!
//! - **config**: `CalculatorConfig` and its sections, with `FITTRACK_*` overrides
//! - **`body_metrics`**: BMI, Mifflin-St Jeor BMR and TDEE
//! - **`workout_planner`**: intensity score, weekly set volume, sessions per week
//! - **`nutrition_goals`**: daily calorie target and macronutrient grams
//! - **`workout_plan`**: assembles the complete plan shown to the user
//! - **rounding**: the half-away-from-zero rounding used for displayed values

/// Calculator configuration with environment overrides
pub mod config;

/// Decimal rounding for displayed values
pub mod rounding;

/// BMI, BMR and TDEE
pub mod body_metrics;

/// Workout intensity, volume and frequency heuristics
pub mod workout_planner;

/// Calorie target and macronutrient distribution
pub mod nutrition_goals;

/// Complete workout and nutrition plan
pub mod workout_plan;

pub use body_metrics::{
    calculate_bmi, calculate_bmr, calculate_tdee, BiometricInput, TdeeInput,
};
pub use config::CalculatorConfig;
pub use nutrition_goals::{calculate_nutritional_goals, CaloricGoal, NutritionGoals};
pub use rounding::round_to;
pub use workout_plan::{generate_workout_plan, WorkoutPlan, WorkoutPlanInput};
pub use workout_planner::{
    adjust_workout_volume, calculate_intensity, calculate_volume, workout_sessions_per_week,
    IntensityBand,
};
