//! Error handling for StudyGenius
//!
//! This module defines the error type shared by every service together with
//! the success/error outcome view handed to UI callers.

mod helpers;
mod outcome;
mod types;

pub use outcome::OperationOutcome;
pub use types::{ErrorField, Result, StudyGeniusError};
