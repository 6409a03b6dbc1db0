// ABOUTME: Storage factory and backend abstraction with runtime selection
// ABOUTME: Detects SQLite vs in-memory backends from the storage URL
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Ledger Contributors

//! Storage factory for creating backends from connection strings

use super::memory::MemoryStorage;
use super::sqlite::SqliteStorage;
use super::StorageBackend;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use tracing::{debug, info};

/// Supported storage backend types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    Sqlite,
    Memory,
}

/// Storage instance wrapper that delegates to the selected implementation
#[derive(Clone, Debug)]
pub enum Storage {
    Sqlite(SqliteStorage),
    Memory(MemoryStorage),
}

impl Storage {
    /// Create a storage instance based on the URL.
    ///
    /// `sqlite:<path>` and `sqlite::memory:` select SQLite; `memory`
    /// selects the ephemeral in-memory store.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL scheme is unsupported or the backend
    /// fails to open
    pub async fn connect(storage_url: &str) -> AppResult<Self> {
        debug!("detecting storage type from URL: {}", storage_url);
        let storage_type = detect_storage_type(storage_url)?;
        info!("using storage backend: {:?}", storage_type);

        match storage_type {
            StorageType::Sqlite => Ok(Self::Sqlite(SqliteStorage::new(storage_url).await?)),
            StorageType::Memory => Ok(Self::Memory(MemoryStorage::new())),
        }
    }

    /// Get a descriptive string for the current backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::Sqlite(_) => "SQLite (durable file store)",
            Self::Memory(_) => "In-memory (ephemeral)",
        }
    }

    /// Get the backend type enum
    #[must_use]
    pub const fn storage_type(&self) -> StorageType {
        match self {
            Self::Sqlite(_) => StorageType::Sqlite,
            Self::Memory(_) => StorageType::Memory,
        }
    }
}

#[async_trait]
impl StorageBackend for Storage {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        match self {
            Self::Sqlite(storage) => storage.get(key).await,
            Self::Memory(storage) => storage.get(key).await,
        }
    }

    async fn put(&self, key: &str, value: &str) -> AppResult<()> {
        match self {
            Self::Sqlite(storage) => storage.put(key, value).await,
            Self::Memory(storage) => storage.put(key, value).await,
        }
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        match self {
            Self::Sqlite(storage) => storage.remove(key).await,
            Self::Memory(storage) => storage.remove(key).await,
        }
    }

    async fn keys(&self) -> AppResult<Vec<String>> {
        match self {
            Self::Sqlite(storage) => storage.keys().await,
            Self::Memory(storage) => storage.keys().await,
        }
    }
}

/// Detect backend type from a storage URL
fn detect_storage_type(url: &str) -> AppResult<StorageType> {
    if url == "memory" || url.starts_with("memory:") {
        Ok(StorageType::Memory)
    } else if url.starts_with("sqlite:") {
        Ok(StorageType::Sqlite)
    } else {
        Err(AppError::config(format!(
            "unsupported storage URL: {url} (expected sqlite:<path> or memory)"
        )))
    }
}
