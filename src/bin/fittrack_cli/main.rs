// ABOUTME: FitTrack CLI - command-line front-end for the metrics calculator
// ABOUTME: Validates arguments through the web forms and prints results as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Body mass index
//! fittrack-cli bmi --weight 70 --height 170
//!
//! # Total daily energy expenditure
//! fittrack-cli tdee --gender male --weight 80 --height 180 --age 25 --activity-level sedentary
//!
//! # Workout and nutrition plan
//! fittrack-cli plan --age 25 --current-weight 100 --goal-weight 80 --preference weight --tdee 2259
//!
//! # Nutrition goals only, as JSON
//! fittrack-cli --format json nutrition --tdee 2259 --current-weight 80 --goal-weight 70 --preference weight
//!
//! # Prepared training split
//! fittrack-cli split --preference hybrid --days 4
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand, ValueEnum};
use fittrack::constants::service_names;
use fittrack::errors::AppResult;
use fittrack::intelligence::CalculatorConfig;
use fittrack::logging::LoggingConfig;
use std::env;
use std::process::ExitCode;
use tracing::{debug, warn};

#[derive(Parser)]
#[command(
    name = "fittrack-cli",
    about = "FitTrack metrics calculator",
    long_about = "Calculate BMI, TDEE, workout plans, nutrition goals and training splits."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// How results are printed
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable sentences
    Text,
    /// Pretty-printed JSON
    Json,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Body mass index from weight and height
    Bmi {
        /// Weight (kg)
        #[arg(long)]
        weight: String,

        /// Height (cm)
        #[arg(long)]
        height: String,
    },

    /// Total daily energy expenditure (Mifflin-St Jeor)
    Tdee {
        /// male or female
        #[arg(long)]
        gender: String,

        /// Weight (kg)
        #[arg(long)]
        weight: String,

        /// Height (cm)
        #[arg(long)]
        height: String,

        /// Age (years)
        #[arg(long)]
        age: String,

        /// sedentary, lightly_active, moderately_active or very_active
        #[arg(long)]
        activity_level: String,
    },

    /// Complete workout and nutrition plan
    Plan {
        /// Age (18-100)
        #[arg(long)]
        age: String,

        /// Current weight (kg, at least 30)
        #[arg(long)]
        current_weight: String,

        /// Goal weight (kg, at least 30)
        #[arg(long)]
        goal_weight: String,

        /// weight, cardio or hybrid
        #[arg(long)]
        preference: String,

        /// Previously calculated TDEE (kcal/day)
        #[arg(long)]
        tdee: f64,
    },

    /// Daily calorie and macronutrient targets
    Nutrition {
        /// TDEE (kcal/day)
        #[arg(long)]
        tdee: String,

        /// Current weight (kg, at least 30)
        #[arg(long)]
        current_weight: String,

        /// Goal weight (kg, at least 30)
        #[arg(long)]
        goal_weight: String,

        /// weight, cardio or hybrid
        #[arg(long)]
        preference: String,
    },

    /// Prepared training split for a focus and days per week
    Split {
        /// weight, cardio or hybrid
        #[arg(long)]
        preference: String,

        /// 3, 4 or 5
        #[arg(long)]
        days: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    logging.service_name = service_names::FITTRACK_CLI.into();
    if cli.verbose {
        logging = logging.verbose();
    } else if env::var_os("RUST_LOG").is_none() {
        logging.level = "warn".into();
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli.command, cli.format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            warn!(code = ?e.code, "Command failed: {e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, format: OutputFormat) -> AppResult<()> {
    let config = CalculatorConfig::global();
    debug!(?format, "Running command");

    match command {
        Command::Bmi { weight, height } => commands::metrics::bmi(weight, height, format),
        Command::Tdee {
            gender,
            weight,
            height,
            age,
            activity_level,
        } => commands::metrics::tdee(
            commands::metrics::TdeeArgs {
                gender,
                weight,
                height,
                age,
                activity_level,
            },
            config,
            format,
        ),
        Command::Plan {
            age,
            current_weight,
            goal_weight,
            preference,
            tdee,
        } => commands::plan::plan(
            commands::plan::PlanArgs {
                age,
                current_weight,
                goal_weight,
                preference,
                tdee,
            },
            config,
            format,
        ),
        Command::Nutrition {
            tdee,
            current_weight,
            goal_weight,
            preference,
        } => commands::plan::nutrition(
            commands::plan::NutritionArgs {
                tdee,
                current_weight,
                goal_weight,
                preference,
            },
            config,
            format,
        ),
        Command::Split { preference, days } => commands::plan::split(preference, days, format),
    }
}
