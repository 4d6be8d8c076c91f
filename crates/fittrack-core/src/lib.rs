// ABOUTME: Core types and constants for the FitTrack fitness tracker
// ABOUTME: Foundation crate with error handling, constants, and persisted domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # FitTrack Core
//!
//! Foundation crate providing shared types and constants for the FitTrack
//! workspace. The metrics engine and the web-facing form layer both depend on
//! it, so it is kept small and free of calculation logic.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ValidationError`
//! - **constants**: Input bounds and labels shared by forms and calculators
//! - **models**: User profile, food/workout log entries, workout splits and the
//!   string-backed enums (gender, activity level, training preference)

/// Unified error handling system with standard error codes and HTTP status mapping
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models persisted and displayed by the web layer
pub mod models;
