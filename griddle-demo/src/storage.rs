//! JSON-file preference backend and platform paths.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use directories::ProjectDirs;
use griddle::prefs::{PrefsBackend, PrefsError};
use tokio::fs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "griddle";
const APPLICATION: &str = "griddle-demo";

/// Get the config directory for the demo, or None if the home directory
/// cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Preference backend storing all keys in one JSON file.
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Create a backend over the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    async fn read_map(&self) -> Result<HashMap<String, serde_json::Value>, PrefsError> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(PrefsError::Storage(e.to_string())),
        }
    }

    async fn write_map(
        &self,
        map: &HashMap<String, serde_json::Value>,
    ) -> Result<(), PrefsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| PrefsError::Storage(e.to_string()))?;
        }
        let bytes = serde_json::to_vec_pretty(map)?;
        fs::write(&self.path, bytes)
            .await
            .map_err(|e| PrefsError::Storage(e.to_string()))
    }
}

#[async_trait]
impl PrefsBackend for JsonFileBackend {
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, PrefsError> {
        let map = self.read_map().await?;
        match map.get(key) {
            Some(value) => Ok(Some(serde_json::to_vec(value)?)),
            None => Ok(None),
        }
    }

    async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), PrefsError> {
        let mut map = self.read_map().await?;
        map.insert(key.to_owned(), serde_json::from_slice(&value)?);
        self.write_map(&map).await
    }
}
