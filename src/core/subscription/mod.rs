//! Plans, prices and subscription purchases

pub mod catalog;
pub mod processor;
pub mod types;

pub use catalog::{PlanCatalog, PlanOffer};
pub use processor::SubscriptionProcessor;
pub use types::{BillingCycle, PlanTier, PurchaseReceipt, SubscriptionPlan};

use crate::core::account::Account;

/// True when a stored account has an active subscription of any tier
pub fn has_active_subscription(account: Option<&Account>) -> bool {
    account.is_some_and(Account::has_active_subscription)
}

/// Display name of the current plan, "Free" without an account
pub fn plan_display_name(account: Option<&Account>) -> &'static str {
    account.map_or(PlanTier::Free.display_name(), Account::plan_display_name)
}
