//! Error types for StudyGenius services

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type alias used across the crate
pub type Result<T> = std::result::Result<T, StudyGeniusError>;

/// Form field an error is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorField {
    Email,
    Password,
    Name,
    CardNumber,
    CardName,
    Expiry,
    Cvv,
    Plan,
    File,
    General,
}

impl fmt::Display for ErrorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorField::Email => "email",
            ErrorField::Password => "password",
            ErrorField::Name => "name",
            ErrorField::CardNumber => "cardNumber",
            ErrorField::CardName => "cardName",
            ErrorField::Expiry => "expiry",
            ErrorField::Cvv => "cvv",
            ErrorField::Plan => "plan",
            ErrorField::File => "file",
            ErrorField::General => "general",
        };
        f.write_str(name)
    }
}

/// Main error type for StudyGenius
#[derive(Error, Debug)]
pub enum StudyGeniusError {
    /// Malformed input: bad email, short password or name, invalid card
    #[error("Validation error on {field}: {message}")]
    Validation { field: ErrorField, message: String },

    /// Login rejected
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Unknown payment method, document, or similar record
    #[error("Not found: {0}")]
    NotFound(String),

    /// Operation needs a stored session and none exists
    #[error("No active session: {0}")]
    NoActiveSession(String),

    /// Purchase could not resolve the paying account
    #[error("No account: {0}")]
    NoAccount(String),

    /// Caller tried to remove the only stored payment method
    #[error("Last payment method: {0}")]
    LastPaymentMethod(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Key-value backend errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for failures nothing else describes
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}
