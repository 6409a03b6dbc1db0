// ABOUTME: Integration tests for environment-based configuration
// ABOUTME: Validates storage URL resolution and log level parsing from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Ledger Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitness_ledger::config::{LedgerConfig, LogLevel};
use serial_test::serial;
use std::env;

#[test]
#[serial]
fn test_storage_url_override_wins() {
    env::set_var("LEDGER_STORAGE_URL", "memory");
    env::set_var("LEDGER_DATA_DIR", "/tmp/fitledger-test");

    let config = LedgerConfig::from_env().unwrap();
    assert_eq!(config.storage_url, "memory");

    env::remove_var("LEDGER_STORAGE_URL");
    env::remove_var("LEDGER_DATA_DIR");
}

#[test]
#[serial]
fn test_default_storage_url_lives_under_data_dir() {
    env::remove_var("LEDGER_STORAGE_URL");
    env::set_var("LEDGER_DATA_DIR", "/tmp/fitledger-test");

    let config = LedgerConfig::from_env().unwrap();
    assert_eq!(config.storage_url, "sqlite:/tmp/fitledger-test/ledger.db");
    assert_eq!(config.data_dir.display().to_string(), "/tmp/fitledger-test");

    env::remove_var("LEDGER_DATA_DIR");
}

#[test]
#[serial]
fn test_log_level_from_env() {
    env::set_var("LEDGER_DATA_DIR", "/tmp/fitledger-test");
    env::set_var("LEDGER_LOG_LEVEL", "debug");

    let config = LedgerConfig::from_env().unwrap();
    assert_eq!(config.log_level, LogLevel::Debug);
    assert!(config.summary().contains("log_level=debug"));

    env::remove_var("LEDGER_LOG_LEVEL");
    env::remove_var("LEDGER_DATA_DIR");
}
