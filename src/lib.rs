// ABOUTME: Main library entry point for the fitness ledger
// ABOUTME: Exposes the ledger, storage backends, models, and gamification rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Ledger Contributors

#![deny(unsafe_code)]

//! # Fitness Ledger
//!
//! A local-first fitness progress ledger: workout and meal logging, goals,
//! meal plans, and gamified progression (XP, levels, achievements, streaks),
//! persisted in a namespaced key-value store.
//!
//! ## Architecture
//!
//! - **Models**: serde-serializable records for all persisted entities
//! - **Storage**: pluggable key-value backends (SQLite file, in-memory)
//! - **Ledger**: single source of truth; every mutation re-derives the
//!   aggregate stats and evaluates achievement unlocks
//! - **Gamification**: pure derivation rules (streaks, XP curve, catalog)
//!
//! ## Example
//!
//! ```rust,no_run
//! use fitness_ledger::ledger::Ledger;
//! use fitness_ledger::models::NewWorkout;
//! use fitness_ledger::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let ledger = Ledger::connect("sqlite:ledger.db").await?;
//!     let workout = ledger
//!         .add_workout(NewWorkout {
//!             date: chrono::Utc::now(),
//!             workout_type: "Cardio".into(),
//!             duration_minutes: 30,
//!             calories_burned: 250,
//!             exercises: Vec::new(),
//!             notes: None,
//!         })
//!         .await?;
//!     println!("earned {} xp", workout.xp_gained);
//!     Ok(())
//! }
//! ```

/// Configuration management (environment variables, data directory)
pub mod config;

/// Application constants: storage keys, progression rates, thresholds
pub mod constants;

/// Unified error handling with standard error codes
pub mod errors;

/// Pure derivation rules: streaks, XP/levels, achievements, recommendations
pub mod gamification;

/// The ledger component: all read/write operations over user progress data
pub mod ledger;

/// Structured logging setup
pub mod logging;

/// Core data models for all persisted entities
pub mod models;

/// Pluggable key-value storage backends
pub mod storage;
