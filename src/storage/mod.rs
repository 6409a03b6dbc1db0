// ABOUTME: Storage abstraction layer for the fitness ledger
// ABOUTME: Pluggable key-value backends with SQLite and in-memory implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Ledger Contributors

//! # Storage Abstraction
//!
//! The ledger persists each collection as one opaque JSON string under a
//! fixed logical key (`user-stats`, `goals`, `achievements`, `workouts`,
//! `meals`, `meal-plans`). Backends only move strings; all shape knowledge
//! lives in the ledger layer. This keeps the same ledger logic runnable
//! against an embedded database, an in-memory map, or any future remote
//! store.

use crate::errors::AppResult;
use async_trait::async_trait;

/// Storage factory with URL-based backend selection
pub mod factory;
/// In-memory storage implementation
pub mod memory;
/// SQLite storage implementation
pub mod sqlite;

pub use factory::Storage;

/// Core storage abstraction trait
///
/// All backends must implement this trait to provide a consistent
/// interface for the ledger layer.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Read the value stored under a key, if any
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Write a value under a key, replacing any previous value
    async fn put(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove a key and its value; removing an absent key is a no-op
    async fn remove(&self, key: &str) -> AppResult<()>;

    /// List every stored key
    async fn keys(&self) -> AppResult<Vec<String>>;
}
