//! Custom test assertions
//!
//! Domain-specific assertions for ledger and account state.

use studygenius::{Account, PaymentMethodLedger, PlanTier};

/// Assertions for the payment method ledger
pub trait LedgerAssertions {
    /// Assert a non-empty ledger has exactly one default
    fn assert_single_default(&self, account_id: &str);

    /// Assert the default method is the one with `method_id`
    fn assert_default_is(&self, account_id: &str, method_id: &str);
}

impl LedgerAssertions for PaymentMethodLedger {
    fn assert_single_default(&self, account_id: &str) {
        let methods = self.list(account_id);
        if methods.is_empty() {
            return;
        }
        let defaults = methods.iter().filter(|m| m.is_default).count();
        assert_eq!(
            defaults, 1,
            "Expected exactly one default among {} methods, found {}",
            methods.len(),
            defaults
        );
    }

    fn assert_default_is(&self, account_id: &str, method_id: &str) {
        self.assert_single_default(account_id);
        let default = self.default_method(account_id);
        assert_eq!(
            default.as_ref().map(|m| m.id.as_str()),
            Some(method_id),
            "Unexpected default payment method"
        );
    }
}

/// Assert the account is subscribed to `plan` with no active trial
pub fn assert_subscribed(account: &Account, plan: PlanTier) {
    let subscription = account
        .subscription
        .as_ref()
        .expect("account should have a subscription");
    assert_eq!(subscription.plan, plan);
    assert!(subscription.is_active, "subscription should be active");
    assert!(
        !account.trial_status.as_ref().is_some_and(|t| t.is_active),
        "trial should be inactive after subscribing"
    );
}
