//! Directory-backed key-value slots
//!
//! Each key maps to `<base_path>/<key>.json`.

use crate::utils::error::{Result, StudyGeniusError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Slot directory on the local file system
#[derive(Debug, Clone)]
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    /// Open a slot directory, creating it if needed
    pub async fn new<P: AsRef<Path>>(base_path: P) -> Result<Self> {
        let path = base_path.as_ref().to_path_buf();

        fs::create_dir_all(&path).await.map_err(|e| {
            StudyGeniusError::storage(format!(
                "Failed to create data directory {}: {}",
                path.display(),
                e
            ))
        })?;

        info!("File key-value store initialized at: {}", path.display());
        Ok(Self { base_path: path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Read a slot; a missing file is an empty slot
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StudyGeniusError::storage(format!(
                "Failed to read slot '{}': {}",
                key, e
            ))),
        }
    }

    /// Write a slot through a temporary file and rename
    pub async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        let tmp_path = path.with_extension("json.tmp");

        fs::write(&tmp_path, value.as_bytes()).await.map_err(|e| {
            StudyGeniusError::storage(format!("Failed to write slot '{}': {}", key, e))
        })?;
        fs::rename(&tmp_path, &path).await.map_err(|e| {
            StudyGeniusError::storage(format!("Failed to commit slot '{}': {}", key, e))
        })?;

        debug!("Slot written: {}", key);
        Ok(())
    }

    /// Remove a slot; removing a missing slot succeeds
    pub async fn remove(&self, key: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!("Slot removed: {}", key);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StudyGeniusError::storage(format!(
                "Failed to remove slot '{}': {}",
                key, e
            ))),
        }
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(StudyGeniusError::storage(format!("Invalid slot key: {:?}", key)));
        }
        Ok(self.base_path.join(format!("{}.json", key)))
    }
}
