// ABOUTME: fitledger - command-line client for the local fitness ledger
// ABOUTME: Logs workouts and meals, manages goals and plans, shows progress, exports and imports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Ledger Contributors
//!
//! Usage:
//! ```bash
//! # Log a workout
//! fitledger workout log --workout-type Cardio --duration 30 --calories 250
//!
//! # Log a meal
//! fitledger meal log --meal-type lunch --item "Chicken Salad:420:35:25:18"
//!
//! # Show aggregate stats and unlocked achievements
//! fitledger stats
//! fitledger achievements
//!
//! # Manage goals
//! fitledger goal add --goal-type "Weekly Runs" --target 3 --icon 🏃
//! fitledger goal update <id> --current 2
//! fitledger goal delete <id>
//!
//! # Archive round-trip
//! fitledger export --output backup.json
//! fitledger import --input backup.json
//!
//! # Wipe everything
//! fitledger reset --yes
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fitness_ledger::config::LedgerConfig;
use fitness_ledger::ledger::Ledger;
use fitness_ledger::logging;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "fitledger",
    about = "Local fitness ledger CLI",
    long_about = "Command-line client for the local fitness ledger: workout and meal logging, goals, gamified progress, and archive export/import."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Storage URL override (sqlite:<path> or memory)
    #[arg(long, global = true)]
    storage_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Workout logging and history
    Workout {
        #[command(subcommand)]
        action: commands::WorkoutCommand,
    },

    /// Meal logging and daily macros
    Meal {
        #[command(subcommand)]
        action: commands::MealCommand,
    },

    /// Goal management
    Goal {
        #[command(subcommand)]
        action: commands::GoalCommand,
    },

    /// Meal plan management
    Plan {
        #[command(subcommand)]
        action: commands::PlanCommand,
    },

    /// Show aggregate stats (level, XP, streak, totals)
    Stats,

    /// Show achievements
    Achievements {
        /// Include locked catalog entries
        #[arg(long)]
        all: bool,
    },

    /// Canned workout recommendation for a training focus
    Recommend {
        /// weight-loss, muscle-gain, or general
        #[arg(long, default_value = "general")]
        focus: String,
    },

    /// Export every collection to a JSON archive
    Export {
        /// Output file (stdout when omitted)
        #[arg(long)]
        output: Option<std::path::PathBuf>,
    },

    /// Import a JSON archive, overwriting the collections it contains
    Import {
        /// Input file
        #[arg(long)]
        input: std::path::PathBuf,
    },

    /// Delete all ledger data
    Reset {
        /// Confirm the wipe; refused otherwise
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_from_env(cli.verbose)?;

    let config = LedgerConfig::from_env()?;
    let storage_url = cli.storage_url.unwrap_or_else(|| config.storage_url.clone());
    debug!(config = %config.summary(), "starting fitledger");

    // The default store lives under the data dir; make sure it exists
    // before SQLite tries to create the file.
    if let Some(path) = storage_url.strip_prefix("sqlite:") {
        if path != ":memory:" {
            if let Some(parent) = std::path::Path::new(path).parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
    }

    let ledger = Ledger::connect(&storage_url).await?;

    match cli.command {
        Command::Workout { action } => commands::workout(&ledger, action).await,
        Command::Meal { action } => commands::meal(&ledger, action).await,
        Command::Goal { action } => commands::goal(&ledger, action).await,
        Command::Plan { action } => commands::plan(&ledger, action).await,
        Command::Stats => commands::stats(&ledger).await,
        Command::Achievements { all } => commands::achievements(&ledger, all).await,
        Command::Recommend { focus } => commands::recommend(&focus),
        Command::Export { output } => commands::export(&ledger, output.as_deref()).await,
        Command::Import { input } => commands::import(&ledger, &input).await,
        Command::Reset { yes } => commands::reset(&ledger, yes).await,
    }
}
