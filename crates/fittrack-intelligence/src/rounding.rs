// ABOUTME: Decimal rounding for calculator output
// ABOUTME: Rounds half away from zero on the scaled binary value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Round `value` to `decimals` places, ties away from zero
///
/// The value is scaled by `10^decimals` and rounded as a binary double, so
/// `62.25` becomes `62.3` and `-2.5` becomes `-3.0`.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round() / scale
}
