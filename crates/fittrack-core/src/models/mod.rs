// ABOUTME: Core data models shared by the calculators, forms, and the web layer
// ABOUTME: Re-exports profile, food log, workout log, and workout split types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain models
//!
//! Plain value records. The web layer owns their persistence; this crate only
//! defines their shape and the pure helpers around them.

/// Food log entries and nutrition totals
pub mod food_log;
/// User profile metrics and calculator enums
pub mod profile;
/// Workout log entries and exercise intensity
pub mod workout_log;
/// Workout split selection
pub mod workout_split;

pub use food_log::{daily_totals, FoodLogDetails, FoodLogEntry, NutritionTotals};
pub use profile::{ActivityLevel, Gender, TrainingPreference, UserProfile};
pub use workout_log::{ExerciseIntensity, WorkoutLogDetails, WorkoutLogEntry};
pub use workout_split::{SplitDays, WorkoutSplit};

use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;

/// A user-owned, timestamped log row
pub trait LogEntry {
    /// Database id, `None` until persisted
    fn id(&self) -> Option<i64>;
    /// Owning user
    fn user_id(&self) -> i64;
    /// When the food was eaten or the workout done
    fn log_date(&self) -> NaiveDateTime;
    /// Short name used in error messages
    fn kind() -> &'static str;

    /// Whether `user_id` owns this entry
    fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id() == user_id
    }

    /// Reject access to an entry owned by someone else
    ///
    /// # Errors
    ///
    /// Returns `PERMISSION_DENIED` when `user_id` does not own the entry
    fn ensure_owned_by(&self, user_id: i64) -> AppResult<()> {
        if self.is_owned_by(user_id) {
            return Ok(());
        }
        let error = AppError::permission_denied(format!(
            "{} belongs to another user",
            Self::kind()
        ));
        Err(match self.id() {
            Some(id) => error.with_resource_id(id.to_string()),
            None => error,
        })
    }
}

/// Order entries for the history pages: most recent first
pub fn sort_newest_first<T: LogEntry>(entries: &mut [T]) {
    entries.sort_by(|a, b| b.log_date().cmp(&a.log_date()));
}
