//! Configuration validators
//!
//! Validation implementations for each configuration section.

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

impl Validate for SessionConfig {
    const SECTION: &'static str = "Session";

    fn validate(&self) -> Result<(), String> {
        debug!("Validating session configuration");

        if self.key.trim().is_empty() {
            return Err("Session key cannot be empty".to_string());
        }

        if self.key.contains(['/', '\\']) {
            return Err(format!("Session key must not contain path separators: {}", self.key));
        }

        let reserved = [crate::core::PAYMENT_METHODS_KEY, crate::core::DOCUMENTS_KEY];
        if reserved.contains(&self.key.as_str()) {
            return Err(format!("Session key '{}' is reserved", self.key));
        }

        if self.backend == SessionBackendKind::File && self.data_dir.trim().is_empty() {
            return Err("File session backend requires a data_dir".to_string());
        }

        Ok(())
    }
}

impl Validate for AuthConfig {
    const SECTION: &'static str = "Auth";

    fn validate(&self) -> Result<(), String> {
        debug!("Validating auth configuration");

        if self.trial_days == 0 {
            return Err("Trial length must be at least 1 day".to_string());
        }

        if self.trial_days > 365 {
            return Err("Trial length cannot exceed 365 days".to_string());
        }

        self.password_policy.validate()
    }
}

impl Validate for PasswordPolicy {
    const SECTION: &'static str = "Password policy";

    fn validate(&self) -> Result<(), String> {
        if self.min_length == 0 {
            return Err("Password minimum length must be greater than 0".to_string());
        }

        if self.min_length > 128 {
            return Err("Password minimum length cannot exceed 128".to_string());
        }

        Ok(())
    }
}

impl Validate for BillingConfig {
    const SECTION: &'static str = "Billing";

    fn validate(&self) -> Result<(), String> {
        debug!("Validating billing configuration");

        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(format!(
                "Currency must be a three-letter ISO code, got: {}",
                self.currency
            ));
        }

        Ok(())
    }
}

impl Validate for StudyConfig {
    const SECTION: &'static str = "Study";

    fn validate(&self) -> Result<(), String> {
        debug!("Validating study configuration");

        if self.max_upload_mb == 0 {
            return Err("Maximum upload size must be at least 1MB".to_string());
        }

        if self.accepted_extensions.is_empty() {
            return Err("At least one accepted file extension must be configured".to_string());
        }

        for ext in &self.accepted_extensions {
            if !ext.starts_with('.') || ext.len() < 2 {
                return Err(format!(
                    "File extension must start with '.' and name a type: {}",
                    ext
                ));
            }
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    const SECTION: &'static str = "Logging";

    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        Ok(())
    }
}
