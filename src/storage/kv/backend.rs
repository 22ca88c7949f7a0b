//! KeyValueBackend enum with dispatch methods

use crate::config::{SessionBackendKind, SessionConfig};
use crate::utils::error::Result;
use tracing::info;

use super::file::FileStore;
use super::memory::MemoryStore;

/// Key-value backend
#[derive(Debug, Clone)]
pub enum KeyValueBackend {
    /// Process-local map
    Memory(MemoryStore),
    /// JSON files in a directory
    File(FileStore),
}

impl KeyValueBackend {
    /// Create the backend selected by the session configuration
    pub async fn new(config: &SessionConfig) -> Result<Self> {
        info!("Initializing key-value backend: {:?}", config.backend);

        match config.backend {
            SessionBackendKind::Memory => Ok(Self::memory()),
            SessionBackendKind::File => Ok(Self::File(FileStore::new(config.data_path()).await?)),
        }
    }

    pub fn memory() -> Self {
        Self::Memory(MemoryStore::new())
    }

    /// Read a slot
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        match self {
            Self::Memory(store) => Ok(store.get(key)),
            Self::File(store) => store.get(key).await,
        }
    }

    /// Write a slot
    pub async fn set(&self, key: &str, value: &str) -> Result<()> {
        match self {
            Self::Memory(store) => {
                store.set(key, value.to_string());
                Ok(())
            }
            Self::File(store) => store.set(key, value).await,
        }
    }

    /// Remove a slot
    pub async fn remove(&self, key: &str) -> Result<()> {
        match self {
            Self::Memory(store) => {
                store.remove(key);
                Ok(())
            }
            Self::File(store) => store.remove(key).await,
        }
    }
}
