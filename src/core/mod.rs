//! Core functionality for StudyGenius
//!
//! This module contains the services and the [`StudyGenius`] facade that
//! wires them to one configuration and one key-value backend.

pub mod account;
pub mod payment_methods;
pub mod study;
pub mod subscription;

use crate::config::Config;
use crate::storage::{KeyValueBackend, SessionStore};
use crate::utils::error::{ErrorField, Result, StudyGeniusError};
use crate::utils::latency::SimulatedLatency;
use account::{Account, AccountService, Destination};
use chrono::Utc;
use payment_methods::{
    CardDetails, LedgerSnapshot, NewPaymentMethod, PaymentMethod, PaymentMethodLedger,
};
use std::sync::Arc;
use study::{ContentGenerator, ContentKind, DocumentLibrary, GeneratedContent, UploadedDocument};
use subscription::{BillingCycle, PlanCatalog, PlanTier, PurchaseReceipt, SubscriptionProcessor};
use tracing::{debug, info, warn};

/// Slot holding the payment method ledger snapshot
pub const PAYMENT_METHODS_KEY: &str = "payment_methods";
/// Slot holding the document library snapshot
pub const DOCUMENTS_KEY: &str = "documents";

/// Main StudyGenius struct that owns one instance of every service
pub struct StudyGenius {
    config: Arc<Config>,
    backend: KeyValueBackend,
    accounts: AccountService,
    payment_methods: Arc<PaymentMethodLedger>,
    subscriptions: SubscriptionProcessor,
    catalog: PlanCatalog,
    documents: Arc<DocumentLibrary>,
    generator: ContentGenerator,
}

impl StudyGenius {
    /// Build every service over the backend selected in `config`
    pub async fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let backend = KeyValueBackend::new(&config.session).await?;
        Ok(Self::with_backend(config, backend))
    }

    /// Build every service over an existing backend
    pub fn with_backend(config: Config, backend: KeyValueBackend) -> Self {
        let latency = SimulatedLatency::new(config.latency.clone());
        let session = SessionStore::new(backend.clone(), config.session.key.clone());
        let documents = Arc::new(DocumentLibrary::new(config.study.clone(), latency.clone()));

        Self {
            accounts: AccountService::new(session.clone(), config.auth.clone(), latency.clone()),
            payment_methods: Arc::new(PaymentMethodLedger::new()),
            subscriptions: SubscriptionProcessor::new(
                session,
                config.billing.clone(),
                latency.clone(),
            ),
            catalog: PlanCatalog::new(),
            generator: ContentGenerator::new(Arc::clone(&documents), latency),
            documents,
            backend,
            config: Arc::new(config),
        }
    }

    /// Isolated in-memory instance with no simulated latency
    pub fn for_testing() -> Self {
        Self::with_backend(Config::for_testing(), KeyValueBackend::memory())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn accounts(&self) -> &AccountService {
        &self.accounts
    }

    pub fn payment_methods(&self) -> &PaymentMethodLedger {
        &self.payment_methods
    }

    pub fn subscriptions(&self) -> &SubscriptionProcessor {
        &self.subscriptions
    }

    pub fn catalog(&self) -> &PlanCatalog {
        &self.catalog
    }

    pub fn documents(&self) -> &DocumentLibrary {
        &self.documents
    }

    pub fn generator(&self) -> &ContentGenerator {
        &self.generator
    }

    /// Logged-in account or a `NoActiveSession` error
    pub async fn require_account(&self) -> Result<Account> {
        self.accounts
            .current_account()
            .await
            .ok_or_else(|| StudyGeniusError::no_active_session("No authenticated user found"))
    }

    pub fn destination_for(&self, account: &Account) -> Destination {
        account::post_auth_destination(account, Utc::now())
    }

    /// Delete a stored method, refusing to remove an account's last one
    pub fn remove_payment_method(
        &self,
        account_id: &str,
        method_id: &str,
    ) -> Result<PaymentMethod> {
        self.payment_methods.delete_unless_last(account_id, method_id)
    }

    /// Subscribe the logged-in account at the catalog price
    ///
    /// When the card is marked to be saved it is added to the ledger after
    /// the purchase succeeds.
    pub async fn subscribe(
        &self,
        plan: PlanTier,
        billing_cycle: BillingCycle,
        card: &CardDetails,
    ) -> Result<PurchaseReceipt> {
        let account = self.accounts.current_account().await.ok_or_else(|| {
            StudyGeniusError::no_account("User not found. Please log in before subscribing.")
        })?;

        let amount = self.catalog.price(plan, billing_cycle).ok_or_else(|| {
            StudyGeniusError::validation(
                ErrorField::Plan,
                format!("The {} plan is not available for purchase", plan.display_name()),
            )
        })?;

        let receipt = self
            .subscriptions
            .purchase(&account.id, plan, billing_cycle, amount, card)
            .await?;

        if card.save_card {
            let method = self
                .payment_methods
                .add(&account.id, NewPaymentMethod::from_card(card, false));
            debug!(method_id = %method.id, "saved checkout card");
        }

        Ok(receipt)
    }

    /// Upload a document for the logged-in account
    pub async fn upload_document(
        &self,
        file_name: &str,
        subject: &str,
        size: u64,
    ) -> Result<UploadedDocument> {
        let account = self.require_account().await?;
        self.documents
            .upload(&account.id, file_name, subject, size)
            .await
    }

    /// Generate study material from one of the logged-in account's documents
    pub async fn generate_content(
        &self,
        document_id: &str,
        kind: ContentKind,
        additional_info: &str,
    ) -> Result<GeneratedContent> {
        let account = self.require_account().await?;
        self.generator
            .generate(&account.id, document_id, kind, additional_info)
            .await
    }

    /// Write the ledger and library snapshots to the backend
    pub async fn save_state(&self) -> Result<()> {
        let ledger = serde_json::to_string(&self.payment_methods.snapshot())?;
        self.backend.set(PAYMENT_METHODS_KEY, &ledger).await?;

        let documents = serde_json::to_string(&self.documents.snapshot())?;
        self.backend.set(DOCUMENTS_KEY, &documents).await?;

        debug!("application state saved");
        Ok(())
    }

    /// Reload the ledger and library snapshots from the backend
    ///
    /// A missing slot leaves that service empty. A corrupt slot is skipped
    /// with a warning.
    pub async fn load_state(&self) -> Result<()> {
        if let Some(raw) = self.backend.get(PAYMENT_METHODS_KEY).await? {
            match serde_json::from_str::<LedgerSnapshot>(&raw) {
                Ok(snapshot) => self.payment_methods.restore(snapshot),
                Err(e) => warn!(error = %e, "ignoring corrupt payment method snapshot"),
            }
        }

        if let Some(raw) = self.backend.get(DOCUMENTS_KEY).await? {
            match serde_json::from_str::<Vec<UploadedDocument>>(&raw) {
                Ok(documents) => self.documents.restore(documents),
                Err(e) => warn!(error = %e, "ignoring corrupt document snapshot"),
            }
        }

        info!("application state loaded");
        Ok(())
    }
}
