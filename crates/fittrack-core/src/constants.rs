// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Form bounds, date formats, and service names shared across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants grouped by domain rather than kept in a single flat list.

/// Service identification used by structured logging
pub mod service_names {
    /// Library and CLI service name
    pub const FITTRACK: &str = "fittrack";
    /// Command line front-end
    pub const FITTRACK_CLI: &str = "fittrack-cli";
}

/// Bounds enforced by the workout plan form before the calculator runs
pub mod limits {
    /// Youngest age accepted by the workout planner
    pub const MIN_AGE_YEARS: u32 = 18;
    /// Oldest age accepted by the workout planner
    pub const MAX_AGE_YEARS: u32 = 100;
    /// Lightest body weight accepted for current and goal weight (kg)
    pub const MIN_BODY_WEIGHT_KG: f64 = 30.0;
    /// Training split lengths a user can choose from (days per week)
    pub const SPLIT_DAYS: [u8; 3] = [3, 4, 5];
}

/// Date/time formats accepted from submitted log forms
pub mod date_formats {
    /// Food log timestamp, e.g. `2024-03-01 12:30:00`
    pub const FOOD_LOG: &str = "%Y-%m-%d %H:%M:%S";
    /// Workout log timestamp from a `datetime-local` input, e.g. `2024-03-01T07:15`
    pub const WORKOUT_LOG: &str = "%Y-%m-%dT%H:%M";
}

/// Energy density of macronutrients (kcal per gram)
pub mod energy {
    /// Protein: 4 kcal/g
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Carbohydrate: 4 kcal/g
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Fat: 9 kcal/g
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}
