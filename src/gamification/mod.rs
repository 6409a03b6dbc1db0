// ABOUTME: Gamification rules for the fitness ledger
// ABOUTME: Pure derivation logic for streaks, XP progression, achievements, and coaching tips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Ledger Contributors

//! # Gamification Rules
//!
//! Pure functions deriving progress values from history. The ledger calls
//! these on every mutation; nothing in here touches storage.

/// Achievement catalog and unlock evaluation
pub mod achievements;
/// XP and level progression curve
pub mod progression;
/// Canned workout recommendations by training focus
pub mod recommendation;
/// Consecutive-day streak computation
pub mod streak;

pub use achievements::{evaluate, AchievementDef, CATALOG};
pub use progression::{level_for_xp, xp_for_workout};
pub use recommendation::{workout_recommendation, TrainingFocus};
pub use streak::current_streak;
