//! Study workspace configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Document upload configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyConfig {
    /// Largest accepted upload in megabytes
    #[serde(default = "default_max_upload_mb")]
    pub max_upload_mb: u64,
    /// Accepted file extensions, each with a leading dot
    #[serde(default = "default_accepted_extensions")]
    pub accepted_extensions: Vec<String>,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            max_upload_mb: default_max_upload_mb(),
            accepted_extensions: default_accepted_extensions(),
        }
    }
}

impl StudyConfig {
    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_mb * 1024 * 1024
    }
}
