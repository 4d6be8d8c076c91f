// ABOUTME: User profile metrics and the string-backed enums the calculators consume
// ABOUTME: Gender, ActivityLevel, TrainingPreference with strict and lossy parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sex used by the Mifflin-St Jeor BMR equation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (+5 kcal BMR constant)
    Male,
    /// Female (-161 kcal BMR constant)
    Female,
}

impl Gender {
    /// Values accepted by the TDEE form
    pub const CHOICES: &'static [&'static str] = &["male", "female"];

    /// Form value for this gender
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Parse leniently: anything other than `male` uses the female constant
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" => Self::Male,
            _ => Self::Female,
        }
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(ValidationError::invalid_choice("gender", s, Self::CHOICES)),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Daily activity level for the TDEE multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
}

impl ActivityLevel {
    /// Values accepted by the TDEE form
    pub const CHOICES: &'static [&'static str] = &[
        "sedentary",
        "lightly_active",
        "moderately_active",
        "very_active",
    ];

    /// Form value for this level
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly_active",
            Self::ModeratelyActive => "moderately_active",
            Self::VeryActive => "very_active",
        }
    }

    /// Human-readable label shown next to the form choice
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary",
            Self::LightlyActive => "Lightly Active",
            Self::ModeratelyActive => "Moderately Active",
            Self::VeryActive => "Very Active",
        }
    }

    /// Parse leniently: unrecognised values are treated as the most active level
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or(Self::VeryActive)
    }
}

impl FromStr for ActivityLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "lightly_active" => Ok(Self::LightlyActive),
            "moderately_active" => Ok(Self::ModeratelyActive),
            "very_active" => Ok(Self::VeryActive),
            _ => Err(ValidationError::invalid_choice(
                "activity_level",
                s,
                Self::CHOICES,
            )),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user's stated workout focus
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrainingPreference {
    /// Weight intensive training
    Weight,
    /// Cardio intensive training
    Cardio,
    /// Balanced mix of both
    Hybrid,
}

impl TrainingPreference {
    /// Values accepted by the workout forms
    pub const CHOICES: &'static [&'static str] = &["weight", "cardio", "hybrid"];

    /// Form value for this preference
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Cardio => "cardio",
            Self::Hybrid => "hybrid",
        }
    }

    /// Title-cased name used in plan sentences ("Weight", "Cardio", "Hybrid")
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Weight => "Weight",
            Self::Cardio => "Cardio",
            Self::Hybrid => "Hybrid",
        }
    }

    /// Human-readable label shown next to the form choice
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Weight => "Weight Intensive",
            Self::Cardio => "Cardio Intensive",
            Self::Hybrid => "Hybrid (Balanced)",
        }
    }

    /// Parse leniently: unrecognised values fall back to the balanced plan
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or(Self::Hybrid)
    }
}

impl FromStr for TrainingPreference {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weight" => Ok(Self::Weight),
            "cardio" => Ok(Self::Cardio),
            "hybrid" => Ok(Self::Hybrid),
            _ => Err(ValidationError::invalid_choice(
                "training_preference",
                s,
                Self::CHOICES,
            )),
        }
    }
}

impl fmt::Display for TrainingPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metric fields stored on the user row
///
/// Credentials live elsewhere; this record only carries what the calculators
/// read and write.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// User id
    pub id: i64,
    /// Login name
    pub username: String,
    /// Last computed BMI
    pub bmi: Option<f64>,
    /// When `bmi` was computed
    pub bmi_date: Option<DateTime<Utc>>,
    /// Last computed TDEE (kcal/day)
    pub tdee: Option<f64>,
    /// When `tdee` was computed
    pub tdee_date: Option<DateTime<Utc>>,
    /// Age from the last workout assessment
    pub age_years: Option<u32>,
    /// Current weight from the last workout assessment (kg)
    pub current_weight_kg: Option<f64>,
    /// Goal weight from the last workout assessment (kg)
    pub goal_weight_kg: Option<f64>,
    /// Preference from the last workout assessment
    pub training_preference: Option<TrainingPreference>,
}

impl UserProfile {
    /// Create an empty profile for a newly registered user
    #[must_use]
    pub fn new(id: i64, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            ..Self::default()
        }
    }

    /// Store a freshly computed BMI together with its timestamp
    pub fn record_bmi(&mut self, bmi: f64, at: DateTime<Utc>) {
        self.bmi = Some(bmi);
        self.bmi_date = Some(at);
    }

    /// Store a freshly computed TDEE together with its timestamp
    pub fn record_tdee(&mut self, tdee: f64, at: DateTime<Utc>) {
        self.tdee = Some(tdee);
        self.tdee_date = Some(at);
    }

    /// Store the answers of a workout assessment
    pub fn update_training_goals(
        &mut self,
        age_years: u32,
        current_weight_kg: f64,
        goal_weight_kg: f64,
        training_preference: TrainingPreference,
    ) {
        self.age_years = Some(age_years);
        self.current_weight_kg = Some(current_weight_kg);
        self.goal_weight_kg = Some(goal_weight_kg);
        self.training_preference = Some(training_preference);
    }
}
