//! Section-level configuration validation

use crate::utils::error::{Result, StudyGeniusError};

/// A configuration section that can check its own values
pub trait Validate {
    /// Section name used in error messages
    const SECTION: &'static str;

    /// Describe the first invalid value, if any
    fn validate(&self) -> std::result::Result<(), String>;

    /// Run [`validate`](Self::validate) and report failures as config errors
    fn check(&self) -> Result<()> {
        self.validate().map_err(|e| {
            StudyGeniusError::config(format!("{} config error: {}", Self::SECTION, e))
        })
    }
}
