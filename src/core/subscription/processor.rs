//! Purchase processing
//!
//! Turns a purchase into a subscription period on the logged-in account.
//! No payment is actually taken.

use super::types::{BillingCycle, PlanTier, PurchaseReceipt, SubscriptionPlan};
use crate::config::BillingConfig;
use crate::core::account::{Subscription, TrialStatus};
use crate::core::payment_methods::{CardDetails, validate_card_details};
use crate::storage::SessionStore;
use crate::utils::error::{ErrorField, Result, StudyGeniusError};
use crate::utils::generate_id;
use crate::utils::latency::{Operation, SimulatedLatency};
use chrono::{DateTime, Utc};
use tracing::{info, warn};

/// Subscription processor
#[derive(Debug, Clone)]
pub struct SubscriptionProcessor {
    session: SessionStore,
    config: BillingConfig,
    latency: SimulatedLatency,
}

impl SubscriptionProcessor {
    pub fn new(session: SessionStore, config: BillingConfig, latency: SimulatedLatency) -> Self {
        Self {
            session,
            config,
            latency,
        }
    }

    /// Subscribe the logged-in account to a paid plan
    pub async fn purchase(
        &self,
        account_id: &str,
        plan: PlanTier,
        billing_cycle: BillingCycle,
        amount: f64,
        card: &CardDetails,
    ) -> Result<PurchaseReceipt> {
        self.purchase_at(account_id, plan, billing_cycle, amount, card, Utc::now())
            .await
    }

    /// Same as [`purchase`](Self::purchase) with an explicit clock
    pub async fn purchase_at(
        &self,
        account_id: &str,
        plan: PlanTier,
        billing_cycle: BillingCycle,
        amount: f64,
        card: &CardDetails,
        now: DateTime<Utc>,
    ) -> Result<PurchaseReceipt> {
        self.latency.wait(Operation::Payment).await;

        let mut account = match self.session.get().await {
            Some(account) if account.id == account_id => account,
            other => {
                if other.is_some() {
                    warn!(
                        account_id = %account_id,
                        "purchase for an account that is not logged in"
                    );
                }
                return Err(StudyGeniusError::no_account(
                    "User not found. Please log in before subscribing.",
                ));
            }
        };

        if !plan.is_paid() {
            return Err(StudyGeniusError::validation(
                ErrorField::Plan,
                "Please choose a paid plan to subscribe",
            ));
        }

        if self.config.validate_cards {
            validate_card_details(card, now)?;
        }

        let end_date = billing_cycle.period_end(now).ok_or_else(|| {
            StudyGeniusError::unexpected("Subscription end date is out of range")
        })?;

        account.subscription = Some(Subscription {
            plan,
            is_active: true,
            start_date: Some(now),
            end_date: Some(end_date),
            billing_cycle: Some(billing_cycle),
        });
        account.trial_status = Some(TrialStatus::inactive());
        self.session.store(&account).await?;

        let receipt = PurchaseReceipt {
            transaction_id: generate_id("txn-", 10),
            subscription: SubscriptionPlan {
                name: plan,
                billing_cycle,
                price: amount,
                start_date: now,
                end_date,
            },
        };

        info!(
            account_id = %account.id,
            transaction_id = %receipt.transaction_id,
            plan = %plan,
            billing_cycle = %billing_cycle,
            amount,
            currency = %self.config.currency,
            "subscription purchased"
        );
        Ok(receipt)
    }
}
