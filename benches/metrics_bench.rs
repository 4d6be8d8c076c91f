// ABOUTME: Criterion benchmarks for the metrics calculator
// ABOUTME: Measures body metrics, plan generation, food log totals, and form validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the metrics calculator.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Duration, NaiveDate, NaiveDateTime};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fittrack::forms::WorkoutPlanForm;
use fittrack::intelligence::{
    calculate_bmi, calculate_tdee, generate_workout_plan, CalculatorConfig, WorkoutPlanInput,
};
use fittrack::models::{
    daily_totals, ActivityLevel, FoodLogDetails, FoodLogEntry, Gender, NutritionTotals,
    TrainingPreference,
};

/// Food log sizes: a week, a quarter, and a year of three meals a day
const LOG_SIZES: [usize; 3] = [21, 270, 1095];

fn base_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|date| date.and_hms_opt(8, 0, 0))
        .unwrap_or_default()
}

#[allow(clippy::cast_possible_wrap)]
fn generate_food_log(count: usize) -> Vec<FoodLogEntry> {
    let start = base_date();
    (0..count)
        .map(|index| {
            FoodLogEntry::new(
                1,
                FoodLogDetails {
                    food_name: format!("Meal {index}"),
                    quantity_g: 150.0 + (index % 7) as f64 * 25.0,
                    calories: 350.0 + (index % 11) as f64 * 40.0,
                    protein_g: 20.0 + (index % 5) as f64,
                    carbs_g: 40.0 + (index % 9) as f64,
                    fats_g: 10.0 + (index % 3) as f64,
                    log_date: start + Duration::hours((index * 8) as i64),
                },
            )
        })
        .collect()
}

fn bench_body_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("body_metrics");
    let config = CalculatorConfig::default();

    group.bench_function("bmi", |b| {
        b.iter(|| calculate_bmi(black_box(170.0), black_box(70.0)));
    });

    group.bench_function("tdee", |b| {
        b.iter(|| {
            calculate_tdee(
                black_box(Gender::Female),
                black_box(165.0),
                black_box(60.0),
                black_box(30.0),
                black_box(ActivityLevel::ModeratelyActive),
                &config,
            )
        });
    });

    group.finish();
}

fn bench_workout_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("workout_plan");
    let config = CalculatorConfig::default();

    for preference in [
        TrainingPreference::Weight,
        TrainingPreference::Cardio,
        TrainingPreference::Hybrid,
    ] {
        let input = WorkoutPlanInput {
            age_years: 35,
            current_weight_kg: 85.0,
            goal_weight_kg: 75.0,
            training_preference: preference,
            tdee_kcal: 2400.0,
        };
        group.bench_with_input(
            BenchmarkId::new("generate", preference.as_str()),
            &input,
            |b, input| {
                b.iter(|| generate_workout_plan(black_box(input), &config));
            },
        );
    }

    let form = WorkoutPlanForm {
        age: Some("35".to_owned()),
        current_weight: Some("85".to_owned()),
        goal_weight: Some("75".to_owned()),
        training_preference: Some("hybrid".to_owned()),
    };
    group.bench_function("validate_and_generate", |b| {
        b.iter(|| {
            black_box(&form)
                .validate()
                .map(|assessment| generate_workout_plan(&assessment.with_tdee(2400.0), &config))
        });
    });

    group.finish();
}

fn bench_food_log_totals(c: &mut Criterion) {
    let mut group = c.benchmark_group("food_log_totals");

    for size in LOG_SIZES {
        let entries = generate_food_log(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("overall", size), &entries, |b, entries| {
            b.iter(|| NutritionTotals::from_entries(black_box(entries)));
        });

        group.bench_with_input(BenchmarkId::new("per_day", size), &entries, |b, entries| {
            b.iter(|| daily_totals(black_box(entries)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_body_metrics,
    bench_workout_plan,
    bench_food_log_totals
);
criterion_main!(benches);
