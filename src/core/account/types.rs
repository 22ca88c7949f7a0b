//! Account record and its trial/subscription sub-state
//!
//! The serialized shape (camelCase, no version tag) is exactly what the
//! session slot holds.

use crate::core::subscription::{BillingCycle, PlanTier};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authenticated user record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Opaque identifier, immutable after creation
    pub id: String,
    pub email: String,
    pub name: String,
    pub is_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_status: Option<TrialStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<Subscription>,
}

/// Free-trial window
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialStatus {
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

impl TrialStatus {
    pub fn inactive() -> Self {
        Self::default()
    }

    /// Active window of `days` days starting at `start`
    pub fn starting_at(start: DateTime<Utc>, days: u32) -> Self {
        Self {
            is_active: true,
            start_date: Some(start),
            end_date: Some(start + chrono::Duration::days(i64::from(days))),
        }
    }
}

/// Current plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub plan: PlanTier,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_cycle: Option<BillingCycle>,
}

impl Subscription {
    /// The plan every new account starts on
    pub fn free() -> Self {
        Self {
            plan: PlanTier::Free,
            is_active: true,
            start_date: None,
            end_date: None,
            billing_cycle: None,
        }
    }
}

impl Account {
    /// Fresh account with the default trial and subscription shape
    pub fn new(id: String, email: String, name: String, is_verified: bool) -> Self {
        Self {
            id,
            email,
            name,
            is_verified,
            trial_status: Some(TrialStatus::inactive()),
            subscription: Some(Subscription::free()),
        }
    }

    pub fn has_active_subscription(&self) -> bool {
        self.subscription.as_ref().is_some_and(|s| s.is_active)
    }

    /// True when an active subscription is on a paid tier
    pub fn has_active_paid_plan(&self) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(|s| s.is_active && s.plan.is_paid())
    }

    /// Plan name for display: "Free" unless a subscription is active
    pub fn plan_display_name(&self) -> &'static str {
        match &self.subscription {
            Some(s) if s.is_active => s.plan.display_name(),
            _ => PlanTier::Free.display_name(),
        }
    }

    /// Trial flagged active and, when it has an end date, not yet over
    pub fn has_active_trial(&self, now: DateTime<Utc>) -> bool {
        match &self.trial_status {
            Some(trial) if trial.is_active => trial.end_date.is_none_or(|end| now < end),
            _ => false,
        }
    }

    /// Whole days left in an active trial, rounded up
    pub fn trial_days_remaining(&self, now: DateTime<Utc>) -> Option<i64> {
        if !self.has_active_trial(now) {
            return None;
        }
        let end = self.trial_status.as_ref()?.end_date?;
        let seconds = (end - now).num_seconds();
        Some((seconds + 86_399) / 86_400)
    }
}
