//! Session storage configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Key-value backend kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionBackendKind {
    /// Process-local map, gone when the process exits
    #[default]
    Memory,
    /// One JSON file per key under `data_dir`
    File,
}

impl std::str::FromStr for SessionBackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "file" => Ok(Self::File),
            _ => Err(format!("Invalid session backend: {}", s)),
        }
    }
}

/// Session storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Backend kind
    #[serde(default)]
    pub backend: SessionBackendKind,
    /// Directory for the file backend
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Slot key holding the logged-in account
    #[serde(default = "default_session_key")]
    pub key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            backend: SessionBackendKind::default(),
            data_dir: default_data_dir(),
            key: default_session_key(),
        }
    }
}

impl SessionConfig {
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }
}
