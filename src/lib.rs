// ABOUTME: Main library entry point for FitTrack personal fitness tracking
// ABOUTME: Re-exports the core and metrics crates and adds form validation and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # FitTrack
//!
//! Users log food and workouts and receive computed health metrics: BMI, TDEE,
//! and a rule-based workout and nutrition plan.
//!
//! ## Architecture
//!
//! - **`fittrack-core`**: errors, constants, and the persisted domain records
//! - **`fittrack-intelligence`**: the metrics calculator and its configuration
//! - **forms**: validation of raw submitted form values into calculator inputs
//! - **logging**: `tracing` subscriber setup for the binaries
//!
//! ## Example Usage
//!
//! ```rust
//! use fittrack::forms::WorkoutPlanForm;
//! use fittrack::intelligence::{generate_workout_plan, CalculatorConfig};
//!
//! let form = WorkoutPlanForm {
//!     age: Some("25".into()),
//!     current_weight: Some("100".into()),
//!     goal_weight: Some("80".into()),
//!     training_preference: Some("weight".into()),
//! };
//! let assessment = form.validate().unwrap();
//! let plan = generate_workout_plan(&assessment.with_tdee(2259.0), CalculatorConfig::global());
//! assert_eq!(plan.sessions_per_week, 5);
//! ```

/// Unified error handling re-exported from `fittrack-core`
pub use fittrack_core::errors;

/// Application constants re-exported from `fittrack-core`
pub use fittrack_core::constants;

/// Domain models re-exported from `fittrack-core`
pub use fittrack_core::models;

/// Metrics calculator
pub use fittrack_intelligence as intelligence;

/// Submitted form records and their validation
pub mod forms;

/// Structured logging setup
pub mod logging;
