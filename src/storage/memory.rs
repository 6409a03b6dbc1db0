// ABOUTME: In-memory storage backend for the fitness ledger
// ABOUTME: DashMap-backed ephemeral store for tests and throwaway runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Ledger Contributors

//! In-memory storage implementation
//!
//! Holds collection blobs in a shared concurrent map. Nothing survives the
//! process; useful for tests and `--storage-url memory` dry runs.

use super::StorageBackend;
use crate::errors::AppResult;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// Ephemeral storage over a concurrent map
#[derive(Clone, Default, Debug)]
pub struct MemoryStorage {
    entries: Arc<DashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageBackend for MemoryStorage {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn put(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    async fn keys(&self) -> AppResult<Vec<String>> {
        let mut keys: Vec<String> = self
            .entries
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        keys.sort();
        Ok(keys)
    }
}
