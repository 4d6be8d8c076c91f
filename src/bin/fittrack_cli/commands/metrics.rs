// ABOUTME: BMI and TDEE commands for fittrack-cli
// ABOUTME: Runs arguments through the calculator forms before calculating
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display;
use crate::OutputFormat;
use fittrack::errors::AppResult;
use fittrack::forms::{BmiForm, TdeeForm};
use fittrack::intelligence::CalculatorConfig;
use serde_json::json;
use tracing::info;

/// Raw `tdee` subcommand arguments
pub struct TdeeArgs {
    pub gender: String,
    pub weight: String,
    pub height: String,
    pub age: String,
    pub activity_level: String,
}

/// Calculate and print BMI
pub fn bmi(weight: String, height: String, format: OutputFormat) -> AppResult<()> {
    let input = BmiForm {
        weight: Some(weight),
        height: Some(height),
    }
    .validate()?;

    let bmi = input.bmi();
    info!(bmi, "BMI calculated");

    match format {
        OutputFormat::Json => display::print_json(&json!({
            "weight_kg": input.weight_kg,
            "height_cm": input.height_cm,
            "bmi": bmi,
        })),
        OutputFormat::Text => {
            display::display_bmi(bmi);
            Ok(())
        }
    }
}

/// Calculate and print TDEE
pub fn tdee(args: TdeeArgs, config: &CalculatorConfig, format: OutputFormat) -> AppResult<()> {
    let input = TdeeForm {
        gender: Some(args.gender),
        weight: Some(args.weight),
        height: Some(args.height),
        age: Some(args.age),
        activity_level: Some(args.activity_level),
    }
    .validate()?;

    let tdee = input.tdee(config);
    info!(tdee, activity_level = %input.activity_level, "TDEE calculated");

    match format {
        OutputFormat::Json => display::print_json(&json!({
            "input": input,
            "tdee_kcal": tdee,
        })),
        OutputFormat::Text => {
            display::display_tdee(tdee, input.activity_level);
            Ok(())
        }
    }
}
