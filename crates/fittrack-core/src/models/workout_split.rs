// ABOUTME: Workout split selection from a training focus and days per week
// ABOUTME: Maps a (preference, days) pair to the prepared plan it should display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::TrainingPreference;
use crate::constants::limits::SPLIT_DAYS;
use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Training days per week offered for a split
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub enum SplitDays {
    /// 3 day split
    Three,
    /// 4 day split
    Four,
    /// 5 day split
    Five,
}

impl SplitDays {
    /// Number of training days
    #[must_use]
    pub const fn days(self) -> u8 {
        match self {
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
        }
    }
}

impl TryFrom<u8> for SplitDays {
    type Error = ValidationError;

    fn try_from(days: u8) -> Result<Self, Self::Error> {
        match days {
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            _ => Err(ValidationError::out_of_range(
                "days",
                f64::from(days),
                Some(f64::from(SPLIT_DAYS[0])),
                Some(f64::from(SPLIT_DAYS[SPLIT_DAYS.len() - 1])),
            )),
        }
    }
}

impl From<SplitDays> for u8 {
    fn from(days: SplitDays) -> Self {
        days.days()
    }
}

impl fmt::Display for SplitDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Day Split", self.days())
    }
}

/// A prepared training split chosen by focus and frequency
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct WorkoutSplit {
    /// Training focus
    pub preference: TrainingPreference,
    /// Days per week
    pub days: SplitDays,
}

impl WorkoutSplit {
    /// Create a split selection
    #[must_use]
    pub const fn new(preference: TrainingPreference, days: SplitDays) -> Self {
        Self { preference, days }
    }

    /// Key of the prepared plan, e.g. `weight_3_day_split`
    #[must_use]
    pub fn template_name(&self) -> String {
        format!("{}_{}_day_split", self.preference.as_str(), self.days.days())
    }

    /// Every selectable split, in form order
    pub fn all() -> impl Iterator<Item = Self> {
        [
            TrainingPreference::Weight,
            TrainingPreference::Cardio,
            TrainingPreference::Hybrid,
        ]
        .into_iter()
        .flat_map(|preference| {
            [SplitDays::Three, SplitDays::Four, SplitDays::Five]
                .into_iter()
                .map(move |days| Self::new(preference, days))
        })
    }
}
