//! Single-slot session store
//!
//! Holds at most one logged-in account, serialized under a fixed key. Reads
//! fail open: a missing, unreadable or unparsable slot is "no session".

use crate::core::account::Account;
use crate::storage::kv::KeyValueBackend;
use crate::utils::error::Result;
use tracing::{debug, warn};

/// Session slot over a key-value backend
#[derive(Debug, Clone)]
pub struct SessionStore {
    backend: KeyValueBackend,
    key: String,
}

impl SessionStore {
    pub fn new(backend: KeyValueBackend, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// In-memory store under the default `user` key
    pub fn in_memory() -> Self {
        Self::new(KeyValueBackend::memory(), crate::config::default_session_key())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &KeyValueBackend {
        &self.backend
    }

    /// Write the full account record to the slot
    pub async fn store(&self, account: &Account) -> Result<()> {
        let json = serde_json::to_string(account)?;
        self.backend.set(&self.key, &json).await?;
        debug!(account_id = %account.id, "session stored");
        Ok(())
    }

    /// Stored account, or `None` when absent or corrupt
    pub async fn get(&self) -> Option<Account> {
        let raw = match self.backend.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "session slot unreadable, treating as logged out");
                return None;
            }
        };

        match serde_json::from_str::<Account>(&raw) {
            Ok(account) => Some(account),
            Err(e) => {
                warn!(error = %e, "session slot corrupt, treating as logged out");
                None
            }
        }
    }

    /// Remove the slot
    pub async fn clear(&self) -> Result<()> {
        self.backend.remove(&self.key).await?;
        debug!("session cleared");
        Ok(())
    }
}
