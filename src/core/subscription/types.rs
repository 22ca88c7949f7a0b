//! Plan, billing cycle, and purchase types

use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Subscription tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    Free,
    Basic,
    Premium,
    Academic,
}

impl PlanTier {
    pub fn is_paid(&self) -> bool {
        !matches!(self, PlanTier::Free)
    }

    /// Capitalized name as shown to users
    pub fn display_name(&self) -> &'static str {
        match self {
            PlanTier::Free => "Free",
            PlanTier::Basic => "Basic",
            PlanTier::Premium => "Premium",
            PlanTier::Academic => "Academic",
        }
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanTier::Free => write!(f, "free"),
            PlanTier::Basic => write!(f, "basic"),
            PlanTier::Premium => write!(f, "premium"),
            PlanTier::Academic => write!(f, "academic"),
        }
    }
}

impl std::str::FromStr for PlanTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "free" => Ok(PlanTier::Free),
            "basic" => Ok(PlanTier::Basic),
            "premium" => Ok(PlanTier::Premium),
            "academic" => Ok(PlanTier::Academic),
            _ => Err(format!("Invalid plan: {}", s)),
        }
    }
}

/// Billing period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    Monthly,
    Annual,
}

impl BillingCycle {
    /// Length of one period in calendar months
    pub fn months(&self) -> u32 {
        match self {
            BillingCycle::Monthly => 1,
            BillingCycle::Annual => 12,
        }
    }

    /// End of a period starting at `start`
    ///
    /// Month arithmetic clamps to the last day of the target month, so a
    /// monthly period starting on January 31st ends on the last day of
    /// February.
    pub fn period_end(&self, start: DateTime<Utc>) -> Option<DateTime<Utc>> {
        start.checked_add_months(Months::new(self.months()))
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BillingCycle::Monthly => write!(f, "monthly"),
            BillingCycle::Annual => write!(f, "annual"),
        }
    }
}

impl std::str::FromStr for BillingCycle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "monthly" | "month" => Ok(BillingCycle::Monthly),
            "annual" | "yearly" | "year" => Ok(BillingCycle::Annual),
            _ => Err(format!("Invalid billing cycle: {}", s)),
        }
    }
}

/// Subscription period produced by a purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    pub name: PlanTier,
    pub billing_cycle: BillingCycle,
    pub price: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// Result of a successful purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseReceipt {
    pub transaction_id: String,
    pub subscription: SubscriptionPlan,
}
