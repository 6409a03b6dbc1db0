// ABOUTME: Configuration management module for the fitness ledger
// ABOUTME: Environment-variable driven settings with platform-aware defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Ledger Contributors
//! Configuration module for the fitness ledger
//!
//! Configuration is environment-only: no config files. The binaries read a
//! `LedgerConfig` once at startup and pass it down; nothing reads the
//! environment after initialization.

/// Environment-based configuration
pub mod environment;

pub use environment::{LedgerConfig, LogLevel};
