//! Login, signup, trial activation and logout

use super::types::{Account, TrialStatus};
use crate::config::AuthConfig;
use crate::storage::SessionStore;
use crate::utils::error::{ErrorField, Result, StudyGeniusError};
use crate::utils::latency::{Operation, SimulatedLatency};
use crate::utils::{generate_id, mask_email};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Where to send a user after they authenticate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    Dashboard,
    FreeTrial,
}

/// Account lifecycle service
#[derive(Debug, Clone)]
pub struct AccountService {
    session: SessionStore,
    config: AuthConfig,
    latency: SimulatedLatency,
}

impl AccountService {
    pub fn new(session: SessionStore, config: AuthConfig, latency: SimulatedLatency) -> Self {
        Self {
            session,
            config,
            latency,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Authenticate and store a fresh account
    ///
    /// There is no credential check beyond shape: the email needs an `@`
    /// and the password must be non-empty.
    pub async fn login(&self, email: &str, password: &str) -> Result<Account> {
        self.latency.wait(Operation::Login).await;

        if !email.contains('@') || password.is_empty() {
            debug!(email = %mask_email(email), "login rejected");
            return Err(StudyGeniusError::invalid_credentials(
                "Invalid email or password",
            ));
        }

        let name = email.split('@').next().unwrap_or_default().to_string();
        let account = Account::new(new_account_id(), email.to_string(), name, true);
        self.session.store(&account).await?;

        info!(account_id = %account.id, email = %mask_email(email), "user logged in");
        Ok(account)
    }

    /// Create an unverified account and store it
    ///
    /// The email only needs an `@`. The name is checked and stored as given.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<Account> {
        self.latency.wait(Operation::Signup).await;

        if !email.contains('@') {
            return Err(StudyGeniusError::validation(
                ErrorField::Email,
                "Invalid email address",
            ));
        }
        if name.chars().count() < 2 {
            return Err(StudyGeniusError::validation(
                ErrorField::Name,
                "Name is required and must be at least 2 characters",
            ));
        }
        self.config
            .password_policy
            .check(password)
            .map_err(|message| StudyGeniusError::validation(ErrorField::Password, message))?;

        let account = Account::new(
            new_account_id(),
            email.to_string(),
            name.to_string(),
            false,
        );
        self.session.store(&account).await?;

        info!(account_id = %account.id, email = %mask_email(email), "account created");
        Ok(account)
    }

    /// Start the free-trial window on the stored account
    pub async fn activate_free_trial(&self) -> Result<Account> {
        self.activate_free_trial_at(Utc::now()).await
    }

    /// Same as [`activate_free_trial`](Self::activate_free_trial) with an explicit clock
    pub async fn activate_free_trial_at(&self, now: DateTime<Utc>) -> Result<Account> {
        self.latency.wait(Operation::Trial).await;

        let mut account = self.session.get().await.ok_or_else(|| {
            StudyGeniusError::no_active_session("No authenticated user found")
        })?;

        account.trial_status = Some(TrialStatus::starting_at(now, self.config.trial_days));
        self.session.store(&account).await?;

        info!(
            account_id = %account.id,
            trial_days = self.config.trial_days,
            "free trial activated"
        );
        Ok(account)
    }

    /// Clear the stored session
    pub async fn logout(&self) -> Result<()> {
        self.session.clear().await?;
        info!("user logged out");
        Ok(())
    }

    pub async fn current_account(&self) -> Option<Account> {
        self.session.get().await
    }

    /// Accept a reset request for a plausible email; no mail is sent
    pub async fn request_password_reset(&self, email: &str) -> Result<()> {
        self.latency.wait(Operation::PasswordReset).await;

        if !email.contains('@') {
            return Err(StudyGeniusError::validation(
                ErrorField::Email,
                "Please enter a valid email address",
            ));
        }

        info!(email = %mask_email(email), "password reset requested");
        Ok(())
    }

    pub fn trial_days(&self) -> u32 {
        self.config.trial_days
    }
}

/// Route after login or signup
pub fn post_auth_destination(account: &Account, now: DateTime<Utc>) -> Destination {
    if account.has_active_trial(now) || account.has_active_paid_plan() {
        Destination::Dashboard
    } else {
        Destination::FreeTrial
    }
}

fn new_account_id() -> String {
    generate_id("user-", 9)
}
