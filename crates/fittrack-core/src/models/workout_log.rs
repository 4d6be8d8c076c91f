// ABOUTME: Workout log entries with their self-reported intensity
// ABOUTME: WorkoutLogEntry, WorkoutLogDetails and the Low/Medium/High intensity choice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::LogEntry;
use crate::errors::ValidationError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How hard a logged workout felt
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ExerciseIntensity {
    /// Easy session
    Low,
    /// Steady session
    Medium,
    /// Hard session
    High,
}

impl ExerciseIntensity {
    /// Values accepted by the workout log form
    pub const CHOICES: &'static [&'static str] = &["Low", "Medium", "High"];

    /// Form value (and stored text) for this intensity
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl FromStr for ExerciseIntensity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Low" => Ok(Self::Low),
            "Medium" => Ok(Self::Medium),
            "High" => Ok(Self::High),
            _ => Err(ValidationError::invalid_choice(
                "intensity",
                s,
                Self::CHOICES,
            )),
        }
    }
}

impl fmt::Display for ExerciseIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user-editable part of a workout log row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutLogDetails {
    /// Exercise name, e.g. "Running"
    pub exercise_name: String,
    /// Duration (minutes)
    pub duration_minutes: f64,
    /// Perceived intensity
    pub intensity: ExerciseIntensity,
    /// When the workout took place
    pub log_date: NaiveDateTime,
}

/// A persisted workout log row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutLogEntry {
    /// Row id, `None` until stored
    pub id: Option<i64>,
    /// Owning user
    pub user_id: i64,
    /// Logged values
    #[serde(flatten)]
    pub details: WorkoutLogDetails,
}

impl WorkoutLogEntry {
    /// Create a new, not yet persisted entry
    #[must_use]
    pub const fn new(user_id: i64, details: WorkoutLogDetails) -> Self {
        Self {
            id: None,
            user_id,
            details,
        }
    }

    /// Apply an edit; every field including `log_date` is replaced
    pub fn apply_update(&mut self, update: WorkoutLogDetails) {
        self.details = update;
    }
}

impl LogEntry for WorkoutLogEntry {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn user_id(&self) -> i64 {
        self.user_id
    }

    fn log_date(&self) -> NaiveDateTime {
        self.details.log_date
    }

    fn kind() -> &'static str {
        "Workout log entry"
    }
}
