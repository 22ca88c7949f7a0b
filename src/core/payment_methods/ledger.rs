//! Per-account payment method ledger
//!
//! Each account owns an insertion-ordered list of methods. Every mutation
//! runs under the account's map entry lock and leaves a non-empty list
//! with exactly one default.

use super::types::{NewPaymentMethod, PaymentMethod, PaymentMethodPatch};
use crate::utils::error::{Result, StudyGeniusError};
use crate::utils::generate_id;
use dashmap::DashMap;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Serializable copy of every account's methods
pub type LedgerSnapshot = BTreeMap<String, Vec<PaymentMethod>>;

/// Payment method ledger
#[derive(Debug, Default)]
pub struct PaymentMethodLedger {
    /// Map of account id -> methods in insertion order
    methods: DashMap<String, Vec<PaymentMethod>>,
}

impl PaymentMethodLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Methods for an account, empty when it has none
    pub fn list(&self, account_id: &str) -> Vec<PaymentMethod> {
        self.methods
            .get(account_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    pub fn count(&self, account_id: &str) -> usize {
        self.methods
            .get(account_id)
            .map(|entry| entry.len())
            .unwrap_or(0)
    }

    /// Store a new method
    ///
    /// The first method an account adds always becomes its default, as does
    /// any method flagged default on the way in.
    pub fn add(&self, account_id: &str, method: NewPaymentMethod) -> PaymentMethod {
        let mut entry = self.methods.entry(account_id.to_string()).or_default();
        let methods = entry.value_mut();

        let mut method = method.with_id(generate_id("pm_", 9));
        if methods.is_empty() || method.is_default {
            for existing in methods.iter_mut() {
                existing.is_default = false;
            }
            method.is_default = true;
        }
        methods.push(method.clone());

        info!(
            account_id = %account_id,
            method_id = %method.id,
            card_type = ?method.card_type,
            is_default = method.is_default,
            "payment method added"
        );
        method
    }

    /// Apply a patch to one method
    ///
    /// Setting the default flag moves the default here. Clearing it on the
    /// current default is ignored; the default only moves by promoting
    /// another method.
    pub fn update(
        &self,
        account_id: &str,
        method_id: &str,
        patch: PaymentMethodPatch,
    ) -> Result<PaymentMethod> {
        let mut entry = self
            .methods
            .get_mut(account_id)
            .ok_or_else(|| method_not_found(method_id))?;
        let methods = entry.value_mut();
        let index = position(methods, method_id)?;

        patch.apply_fields(&mut methods[index]);

        match patch.is_default {
            Some(true) => make_default(methods, index),
            Some(false) if methods[index].is_default => {
                debug!(method_id = %method_id, "ignoring request to clear the current default");
            }
            _ => {}
        }

        info!(account_id = %account_id, method_id = %method_id, "payment method updated");
        Ok(methods[index].clone())
    }

    /// Remove one method, promoting the first remaining method if the
    /// default was removed
    pub fn delete(&self, account_id: &str, method_id: &str) -> Result<PaymentMethod> {
        let mut entry = self
            .methods
            .get_mut(account_id)
            .ok_or_else(|| method_not_found(method_id))?;
        let methods = entry.value_mut();
        let index = position(methods, method_id)?;

        Ok(remove_at(account_id, methods, index))
    }

    /// Remove one method, refusing when it is the account's only one
    ///
    /// The size check and the removal happen under the same entry lock.
    pub fn delete_unless_last(&self, account_id: &str, method_id: &str) -> Result<PaymentMethod> {
        let mut entry = self
            .methods
            .get_mut(account_id)
            .ok_or_else(|| method_not_found(method_id))?;
        let methods = entry.value_mut();
        let index = position(methods, method_id)?;

        if methods.len() == 1 {
            return Err(StudyGeniusError::last_payment_method(
                "You must have at least one payment method on file.",
            ));
        }

        Ok(remove_at(account_id, methods, index))
    }

    /// Make one method the default
    pub fn set_default(&self, account_id: &str, method_id: &str) -> Result<PaymentMethod> {
        let mut entry = self
            .methods
            .get_mut(account_id)
            .ok_or_else(|| method_not_found(method_id))?;
        let methods = entry.value_mut();
        let index = position(methods, method_id)?;

        make_default(methods, index);

        info!(account_id = %account_id, method_id = %method_id, "default payment method set");
        Ok(methods[index].clone())
    }

    pub fn default_method(&self, account_id: &str) -> Option<PaymentMethod> {
        self.methods
            .get(account_id)
            .and_then(|entry| entry.iter().find(|m| m.is_default).cloned())
    }

    /// Copy of every non-empty account ledger
    pub fn snapshot(&self) -> LedgerSnapshot {
        self.methods
            .iter()
            .filter(|entry| !entry.value().is_empty())
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    /// Replace the ledger contents with a snapshot
    ///
    /// Each restored list keeps its first default and drops any others. A
    /// list without a default gets its first method promoted.
    pub fn restore(&self, snapshot: LedgerSnapshot) {
        self.methods.clear();
        for (account_id, mut methods) in snapshot {
            if methods.is_empty() {
                continue;
            }
            let index = methods.iter().position(|m| m.is_default).unwrap_or(0);
            if methods.iter().filter(|m| m.is_default).count() != 1 {
                warn!(account_id = %account_id, "repairing default flags in restored ledger");
            }
            make_default(&mut methods, index);
            self.methods.insert(account_id, methods);
        }
        debug!(accounts = self.methods.len(), "payment method ledger restored");
    }
}

fn position(methods: &[PaymentMethod], method_id: &str) -> Result<usize> {
    methods
        .iter()
        .position(|m| m.id == method_id)
        .ok_or_else(|| method_not_found(method_id))
}

fn remove_at(account_id: &str, methods: &mut Vec<PaymentMethod>, index: usize) -> PaymentMethod {
    let removed = methods.remove(index);
    if removed.is_default {
        if let Some(first) = methods.first_mut() {
            first.is_default = true;
            debug!(method_id = %first.id, "promoted new default payment method");
        }
    }

    info!(account_id = %account_id, method_id = %removed.id, "payment method deleted");
    removed
}

fn make_default(methods: &mut [PaymentMethod], index: usize) {
    for (i, method) in methods.iter_mut().enumerate() {
        method.is_default = i == index;
    }
}

fn method_not_found(method_id: &str) -> StudyGeniusError {
    StudyGeniusError::not_found(format!("Payment method {} not found", method_id))
}
