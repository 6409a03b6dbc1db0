// ABOUTME: Environment configuration management for the fitness ledger
// ABOUTME: Parses storage URL, log level, and data directory from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Ledger Contributors

//! Environment-based configuration

use crate::constants::env_config;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => LogLevel::Error,
            "warn" => LogLevel::Warn,
            "debug" => LogLevel::Debug,
            "trace" => LogLevel::Trace,
            _ => LogLevel::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

/// Ledger runtime configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Storage URL: `sqlite:<path>`, `sqlite::memory:`, or `memory`
    pub storage_url: String,
    /// Log level
    pub log_level: LogLevel,
    /// Directory holding the default database file and exports
    pub data_dir: PathBuf,
}

impl LedgerConfig {
    /// Load configuration from environment variables.
    ///
    /// `LEDGER_STORAGE_URL` overrides the storage location entirely;
    /// otherwise the default is a SQLite file under `LEDGER_DATA_DIR` or
    /// the platform data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no data directory can be resolved when the
    /// storage URL is defaulted.
    pub fn from_env() -> AppResult<Self> {
        let data_dir = resolve_data_dir()?;

        let storage_url = match env::var(env_config::STORAGE_URL_VAR) {
            Ok(url) => url,
            Err(_) => {
                let db_path = data_dir.join(env_config::DEFAULT_DB_FILE);
                format!("sqlite:{}", db_path.display())
            }
        };

        let log_level = LogLevel::from_str_or_default(&env_config::log_level());

        Ok(Self {
            storage_url,
            log_level,
            data_dir,
        })
    }

    /// One-line summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "storage={} log_level={} data_dir={}",
            self.storage_url,
            self.log_level,
            self.data_dir.display()
        )
    }
}

fn resolve_data_dir() -> AppResult<PathBuf> {
    if let Ok(dir) = env::var(env_config::DATA_DIR_VAR) {
        return Ok(PathBuf::from(dir));
    }
    dirs::data_dir()
        .map(|base| base.join(env_config::APP_DIR))
        .ok_or_else(|| {
            AppError::config(format!(
                "no platform data directory; set {}",
                env_config::DATA_DIR_VAR
            ))
        })
}
