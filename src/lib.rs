// ABOUTME: Main library entry point for the Fit-AI training analytics engine
// ABOUTME: Re-exports the engine crates and adds configuration, logging, and view services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fit-AI Analytics
//!
//! Turns personal-record rows and per-muscle-group volume samples, already
//! fetched by a storage collaborator, into display-ready structures: exercise
//! cards, record timelines, recent-record feeds, donut segments, imbalance
//! warnings and readiness indicators.
//!
//! ## Architecture
//!
//! - **`fitai-core`**: errors, constants, inbound models, output formatters
//! - **`fitai-intelligence`**: the pure aggregation engine
//! - **this crate**: environment configuration, logging setup, and services
//!   that compose the engine into complete views
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitai_analytics::config::EngineConfig;
//! use fitai_analytics::errors::AppResult;
//! use fitai_analytics::intelligence::Recency;
//! use fitai_analytics::models::RecordTypeFilter;
//! use fitai_analytics::services::RecordsService;
//!
//! fn main() -> AppResult<()> {
//!     let config = EngineConfig::from_env()?;
//!     let service = RecordsService::new(config.analytics.records);
//!     let overview = service.overview(&[], "", &RecordTypeFilter::All, &Recency::current());
//!     println!("{} exercise cards", overview.groups.len());
//!     Ok(())
//! }
//! ```

/// Unified error handling with `AppError` and `ErrorCode`
pub use fitai_core::errors;

/// Engine constants organized by domain
pub use fitai_core::constants;

/// Inbound models and display tags
pub use fitai_core::models;

/// Output format abstraction (JSON, TOON)
pub use fitai_core::formatters;

/// Pure aggregation engine
pub use fitai_intelligence as intelligence;

/// Environment-driven configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// View services composing the engine
pub mod services;
