//! Result-object view of errors for UI callers

use super::types::{ErrorField, Result, StudyGeniusError};
use serde::{Deserialize, Serialize};

/// Success flag plus optional error, the shape UI event handlers consume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<ErrorField>,
}

impl OperationOutcome {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
            code: None,
            field: None,
        }
    }

    pub fn failed(error: &StudyGeniusError) -> Self {
        Self {
            success: false,
            error: Some(error.user_message()),
            code: Some(error.code().to_string()),
            field: error.field(),
        }
    }
}

impl From<&StudyGeniusError> for OperationOutcome {
    fn from(error: &StudyGeniusError) -> Self {
        Self::failed(error)
    }
}

impl<T> From<&Result<T>> for OperationOutcome {
    fn from(result: &Result<T>) -> Self {
        match result {
            Ok(_) => Self::ok(),
            Err(e) => Self::failed(e),
        }
    }
}
