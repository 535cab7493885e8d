//! Grid preferences behind an injected storage interface.
//!
//! Presentation state worth keeping across sessions (the page size picker)
//! is owned explicitly and persisted through a backend the caller injects —
//! never through ambient global state.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::page::DEFAULT_PAGE_SIZE;

/// Preference storage error type.
#[derive(Debug, Error)]
pub enum PrefsError {
    /// The backend failed to read or write.
    #[error("storage error: {0}")]
    Storage(String),
    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Backend trait for preference storage.
///
/// Implementations handle raw byte storage/retrieval; [`PrefsProvider`]
/// wraps this with typed serialization.
#[async_trait]
pub trait PrefsBackend: Send + Sync {
    /// Get raw bytes for a key.
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, PrefsError>;

    /// Set raw bytes for a key.
    async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), PrefsError>;
}

/// Typed preference provider.
///
/// Wraps a [`PrefsBackend`] with typed serialization via JSON.
#[derive(Clone)]
pub struct PrefsProvider {
    backend: Arc<dyn PrefsBackend>,
}

impl PrefsProvider {
    /// Create a provider over the given backend.
    pub fn new(backend: impl PrefsBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Get a typed value for a key.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, PrefsError> {
        match self.backend.get_bytes(key).await? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Get a typed value for a key, returning a default if not found.
    pub async fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, PrefsError> {
        Ok(self.get(key).await?.unwrap_or(default))
    }

    /// Set a typed value for a key.
    pub async fn set<T: Serialize + Sync>(&self, key: &str, value: &T) -> Result<(), PrefsError> {
        let bytes = serde_json::to_vec(value)?;
        self.backend.set_bytes(key, bytes).await
    }
}

/// Persisted grid preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPrefs {
    /// Preferred rows per page.
    pub page_size: usize,
}

impl Default for GridPrefs {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// In-memory backend, for tests and callers without persistence.
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PrefsBackend for MemoryBackend {
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, PrefsError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| PrefsError::Storage(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), PrefsError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| PrefsError::Storage(e.to_string()))?;
        entries.insert(key.to_owned(), value);
        Ok(())
    }
}
