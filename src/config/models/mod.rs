//! Configuration data models
//!
//! This module defines all configuration structures used by the services.

pub mod auth;
pub mod billing;
pub mod latency;
pub mod logging;
pub mod session;
pub mod study;

pub use auth::*;
pub use billing::*;
pub use latency::*;
pub use logging::*;
pub use session::*;
pub use study::*;

/// Default slot key for the stored account
pub fn default_session_key() -> String {
    "user".to_string()
}

/// Default data directory for the file backend
pub fn default_data_dir() -> String {
    "./.studygenius".to_string()
}

/// Default free-trial length in days
pub fn default_trial_days() -> u32 {
    14
}

/// Default upload size limit in megabytes
pub fn default_max_upload_mb() -> u64 {
    10
}

/// Default accepted upload extensions
pub fn default_accepted_extensions() -> Vec<String> {
    [".pdf", ".docx", ".doc", ".txt"]
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}

/// Default billing currency
pub fn default_currency() -> String {
    "USD".to_string()
}
