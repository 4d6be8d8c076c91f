// ABOUTME: Food log entries and the nutrition totals shown on the dashboard
// ABOUTME: FoodLogEntry, FoodLogDetails, NutritionTotals and per-day grouping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::LogEntry;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The user-editable part of a food log row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodLogDetails {
    /// Food name
    pub food_name: String,
    /// Quantity eaten (grams)
    pub quantity_g: f64,
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (grams)
    pub protein_g: f64,
    /// Carbohydrates (grams)
    pub carbs_g: f64,
    /// Fats (grams)
    pub fats_g: f64,
    /// When the food was eaten
    pub log_date: NaiveDateTime,
}

/// A persisted food log row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodLogEntry {
    /// Row id, `None` until stored
    pub id: Option<i64>,
    /// Owning user
    pub user_id: i64,
    /// Logged values
    #[serde(flatten)]
    pub details: FoodLogDetails,
}

impl FoodLogEntry {
    /// Create a new, not yet persisted entry
    #[must_use]
    pub const fn new(user_id: i64, details: FoodLogDetails) -> Self {
        Self {
            id: None,
            user_id,
            details,
        }
    }

    /// Apply an edit. The original `log_date` is kept; only the food values change.
    pub fn apply_update(&mut self, update: FoodLogDetails) {
        let log_date = self.details.log_date;
        self.details = FoodLogDetails { log_date, ..update };
    }
}

impl LogEntry for FoodLogEntry {
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
        "Food log entry"
    }
}

/// Summed intake over a set of food log entries
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionTotals {
    /// Number of entries summed
    pub entries: usize,
    /// Total energy (kcal)
    pub calories: f64,
    /// Total protein (grams)
    pub protein_g: f64,
    /// Total carbohydrates (grams)
    pub carbs_g: f64,
    /// Total fats (grams)
    pub fats_g: f64,
}

impl NutritionTotals {
    /// Sum every entry
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a FoodLogEntry>) -> Self {
        entries.into_iter().fold(Self::default(), |mut totals, entry| {
            totals.add(&entry.details);
            totals
        })
    }

    fn add(&mut self, details: &FoodLogDetails) {
        self.entries += 1;
        self.calories += details.calories;
        self.protein_g += details.protein_g;
        self.carbs_g += details.carbs_g;
        self.fats_g += details.fats_g;
    }
}

/// Group entries by calendar day of `log_date`, oldest day first
pub fn daily_totals<'a>(
    entries: impl IntoIterator<Item = &'a FoodLogEntry>,
) -> BTreeMap<NaiveDate, NutritionTotals> {
    let mut days: BTreeMap<NaiveDate, NutritionTotals> = BTreeMap::new();
    for entry in entries {
        days.entry(entry.details.log_date.date())
            .or_default()
            .add(&entry.details);
    }
    days
}
