// ABOUTME: System-wide constants for the fitness ledger
// ABOUTME: Storage key names, progression rates, achievement thresholds, and env defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Ledger Contributors

//! # Constants Module
//!
//! Application constants and environment-based configuration values.

use std::env;

/// Fixed logical keys of the namespaced key-value store, one per collection
pub mod storage_keys {
    /// Aggregate user statistics (singleton record)
    pub const USER_STATS: &str = "user-stats";
    /// User-defined goals
    pub const GOALS: &str = "goals";
    /// Unlocked achievements
    pub const ACHIEVEMENTS: &str = "achievements";
    /// Workout history (append-only)
    pub const WORKOUTS: &str = "workouts";
    /// Meal history (append-only)
    pub const MEALS: &str = "meals";
    /// Saved meal plans
    pub const MEAL_PLANS: &str = "meal-plans";

    /// Every namespaced key, in clear-all order
    pub const ALL: [&str; 6] = [USER_STATS, GOALS, ACHIEVEMENTS, WORKOUTS, MEALS, MEAL_PLANS];
}

/// XP and level progression rates
pub mod progression {
    /// XP earned per minute of workout duration
    pub const XP_PER_MINUTE: f64 = 10.0;
    /// XP earned per calorie burned
    pub const XP_PER_CALORIE: f64 = 0.5;
    /// XP required per level step under the square-root curve:
    /// `level = floor(1 + sqrt(xp / LEVEL_XP_BASE))`
    pub const LEVEL_XP_BASE: f64 = 100.0;
}

/// Unlock thresholds for the achievement catalog
pub mod thresholds {
    /// Workout counts for first-workout / workout-warrior / fitness-master
    pub const WORKOUTS_FIRST: usize = 1;
    pub const WORKOUTS_WARRIOR: usize = 10;
    pub const WORKOUTS_MASTER: usize = 50;
    /// Consecutive-day streaks for streak-starter / streak-legend
    pub const STREAK_STARTER: u32 = 3;
    pub const STREAK_LEGEND: u32 = 7;
    /// Lifetime calories for calorie-crusher
    pub const CALORIES_CRUSHER: i64 = 5000;
    /// Meal counts for nutrition-novice / meal-planner
    pub const MEALS_NOVICE: usize = 1;
    pub const MEALS_PLANNER: usize = 20;
    /// Level for level-up
    pub const LEVEL_UP: i32 = 5;
    /// Lifetime XP for xp-master
    pub const XP_MASTER: i64 = 10_000;
}

/// Default goals seeded on first read of an empty goal collection
pub mod default_goals {
    /// Weekly workout count goal
    pub const WEEKLY_WORKOUTS_TARGET: f64 = 5.0;
    /// Weekly calorie burn goal
    pub const WEEKLY_CALORIES_TARGET: f64 = 3000.0;
    /// Both default goals expire one week out
    pub const DEADLINE_DAYS: i64 = 7;
}

/// Environment-based configuration
pub mod env_config {
    use super::env;

    /// Environment variable naming the storage URL
    pub const STORAGE_URL_VAR: &str = "LEDGER_STORAGE_URL";
    /// Environment variable naming the log level
    pub const LOG_LEVEL_VAR: &str = "LEDGER_LOG_LEVEL";
    /// Environment variable overriding the data directory
    pub const DATA_DIR_VAR: &str = "LEDGER_DATA_DIR";

    /// Default SQLite database file name inside the data directory
    pub const DEFAULT_DB_FILE: &str = "ledger.db";
    /// Application directory name under the platform data dir
    pub const APP_DIR: &str = "fitledger";

    /// Get log level from environment or default
    #[must_use]
    pub fn log_level() -> String {
        env::var(LOG_LEVEL_VAR).unwrap_or_else(|_| "info".into())
    }
}

/// Service identity for structured logging
pub mod service {
    /// Service name reported in log output
    pub const NAME: &str = "fitness-ledger";
    /// Service version from Cargo.toml
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}
