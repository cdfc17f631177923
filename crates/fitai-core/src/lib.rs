// ABOUTME: Core types and constants for the Fit-AI training analytics engine
// ABOUTME: Foundation crate with error handling, record and volume models, formatters, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fit-AI Core
//!
//! Foundation crate providing shared types and constants for the Fit-AI
//! training analytics engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Engine-wide constants organized by domain
//! - **models**: Inbound rows (personal records, volume samples, logged sets) and display tags
//! - **formatters**: Output format abstraction (JSON, TOON) for outbound shapes

/// Unified error handling system with standard error codes
pub mod errors;

/// Engine constants organized by domain
pub mod constants;

/// Core data models (`PersonalRecord`, `RecordType`, `MuscleVolumeSample`, etc.)
pub mod models;

/// Output format abstraction (JSON, TOON) for outbound data
pub mod formatters;
