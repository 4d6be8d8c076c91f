// ABOUTME: Command modules for fittrack-cli
// ABOUTME: Body metric commands and plan, nutrition, and split commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod metrics;
pub mod plan;
