//! # StudyGenius
//!
//! Account, session and payment state for an AI study-assistant product.
//!
//! ## Features
//!
//! - **Accounts**: login, signup, free-trial activation and logout over a
//!   single-slot session
//! - **Payment methods**: per-account card ledger with exactly one default
//! - **Subscriptions**: plan catalog and purchases that attach a billing
//!   period to the logged-in account
//! - **Study workspace**: document uploads and generated study material
//! - **Pluggable storage**: in-memory or file-backed key-value slots
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use studygenius::{BillingCycle, CardDetails, Config, PlanTier, StudyGenius};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let app = StudyGenius::new(Config::for_testing()).await?;
//!
//!     let account = app.accounts().login("ada@example.com", "secret").await?;
//!     app.accounts().activate_free_trial().await?;
//!
//!     let card = CardDetails {
//!         card_number: "4242 4242 4242 4242".into(),
//!         card_name: "Ada Lovelace".into(),
//!         expiry_month: "12".into(),
//!         expiry_year: "30".into(),
//!         cvv: "123".into(),
//!         save_card: true,
//!     };
//!     let receipt = app.subscribe(PlanTier::Premium, BillingCycle::Monthly, &card).await?;
//!
//!     println!("{} is on {} until {}", account.name, receipt.subscription.name,
//!         receipt.subscription.end_date);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use crate::core::StudyGenius;
pub use utils::error::{ErrorField, OperationOutcome, Result, StudyGeniusError};

pub use crate::core::account::{
    Account, AccountService, Destination, PasswordStrength, StrengthLabel, Subscription,
    TrialStatus,
};
pub use crate::core::payment_methods::{
    CardDetails, CardType, NewPaymentMethod, PaymentMethod, PaymentMethodLedger,
    PaymentMethodPatch, validate_card_details,
};
pub use crate::core::study::{
    ContentGenerator, ContentKind, DocumentLibrary, GeneratedContent, UploadedDocument,
};
pub use crate::core::subscription::{
    BillingCycle, PlanCatalog, PlanOffer, PlanTier, PurchaseReceipt, SubscriptionPlan,
    SubscriptionProcessor,
};
pub use storage::{KeyValueBackend, SessionStore};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Crate description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build metadata stamped by the build script
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    /// Seconds since the Unix epoch
    pub build_time: &'static str,
    /// Short commit hash, "unknown" outside a git checkout
    pub git_hash: &'static str,
}

pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: VERSION,
        build_time: env!("STUDYGENIUS_BUILD_TIME"),
        git_hash: env!("STUDYGENIUS_GIT_HASH"),
    }
}
