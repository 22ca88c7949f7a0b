//! Billing configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Billing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingConfig {
    /// Reject purchases whose card fails validation
    #[serde(default)]
    pub validate_cards: bool,
    /// Currency code shown next to prices
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            validate_cards: false,
            currency: default_currency(),
        }
    }
}
