//! Helper functions for creating specific error types

use super::types::{ErrorField, StudyGeniusError};

impl StudyGeniusError {
    pub fn validation<S: Into<String>>(field: ErrorField, message: S) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn invalid_credentials<S: Into<String>>(message: S) -> Self {
        Self::InvalidCredentials(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn no_active_session<S: Into<String>>(message: S) -> Self {
        Self::NoActiveSession(message.into())
    }

    pub fn no_account<S: Into<String>>(message: S) -> Self {
        Self::NoAccount(message.into())
    }

    pub fn last_payment_method<S: Into<String>>(message: S) -> Self {
        Self::LastPaymentMethod(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage(message.into())
    }

    pub fn unexpected<S: Into<String>>(message: S) -> Self {
        Self::Unexpected(message.into())
    }

    /// Field the error is attributed to, if it came from input validation
    pub fn field(&self) -> Option<ErrorField> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            Self::InvalidCredentials(_) => Some(ErrorField::General),
            _ => None,
        }
    }

    /// True for failures caused by user input or session state rather than
    /// by the environment
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. }
                | Self::InvalidCredentials(_)
                | Self::NotFound(_)
                | Self::NoActiveSession(_)
                | Self::NoAccount(_)
                | Self::LastPaymentMethod(_)
        )
    }

    /// Message suitable for showing to the user verbatim
    ///
    /// Expected failures carry their own wording; infrastructure failures
    /// collapse to a generic message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. }
            | Self::InvalidCredentials(message)
            | Self::NotFound(message)
            | Self::NoActiveSession(message)
            | Self::NoAccount(message)
            | Self::LastPaymentMethod(message) => message.clone(),
            Self::Config(_)
            | Self::Storage(_)
            | Self::Serialization(_)
            | Self::Yaml(_)
            | Self::Io(_)
            | Self::Unexpected(_) => "An unexpected error occurred".to_string(),
        }
    }

    /// Stable machine-readable code for the error
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::InvalidCredentials(_) => "INVALID_CREDENTIALS",
            Self::NotFound(_) => "NOT_FOUND",
            Self::NoActiveSession(_) => "NO_ACTIVE_SESSION",
            Self::NoAccount(_) => "NO_ACCOUNT",
            Self::LastPaymentMethod(_) => "LAST_PAYMENT_METHOD",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Yaml(_) => "YAML_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Unexpected(_) => "UNEXPECTED_ERROR",
        }
    }
}
