//! Simulated latency configuration

use serde::{Deserialize, Serialize};

/// Delay in milliseconds applied to each mocked backend call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub login_ms: u64,
    pub signup_ms: u64,
    pub trial_ms: u64,
    pub password_reset_ms: u64,
    pub payment_ms: u64,
    pub upload_ms: u64,
    pub generation_ms: u64,
    pub chat_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            login_ms: 1000,
            signup_ms: 1000,
            trial_ms: 800,
            password_reset_ms: 1000,
            payment_ms: 1500,
            upload_ms: 1500,
            generation_ms: 1500,
            chat_ms: 1000,
        }
    }
}

impl LatencyConfig {
    /// No delays at all
    pub fn zero() -> Self {
        Self {
            login_ms: 0,
            signup_ms: 0,
            trial_ms: 0,
            password_reset_ms: 0,
            payment_ms: 0,
            upload_ms: 0,
            generation_ms: 0,
            chat_ms: 0,
        }
    }

    /// Same delay for every operation
    pub fn uniform(ms: u64) -> Self {
        Self {
            login_ms: ms,
            signup_ms: ms,
            trial_ms: ms,
            password_reset_ms: ms,
            payment_ms: ms,
            upload_ms: ms,
            generation_ms: ms,
            chat_ms: ms,
        }
    }
}
