//! Stored payment method records and their patches

use super::card::{CardDetails, CardType, last_four_of};
use serde::{Deserialize, Serialize};

/// Stored card reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: String,
    pub card_type: CardType,
    pub last_four: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub cardholder_name: String,
    pub is_default: bool,
}

/// Payment method before the ledger assigns an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPaymentMethod {
    pub card_type: CardType,
    pub last_four: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub cardholder_name: String,
    #[serde(default)]
    pub is_default: bool,
}

impl NewPaymentMethod {
    /// Derive brand and last four digits from checkout details
    pub fn from_card(details: &CardDetails, is_default: bool) -> Self {
        Self {
            card_type: CardType::from_card_number(&details.card_number),
            last_four: details.last_four(),
            expiry_month: details.expiry_month.clone(),
            expiry_year: details.expiry_year.clone(),
            cardholder_name: details.card_name.clone(),
            is_default,
        }
    }

    pub(crate) fn with_id(self, id: String) -> PaymentMethod {
        PaymentMethod {
            id,
            card_type: self.card_type,
            last_four: self.last_four,
            expiry_month: self.expiry_month,
            expiry_year: self.expiry_year,
            cardholder_name: self.cardholder_name,
            is_default: self.is_default,
        }
    }
}

/// Partial update to a stored method
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<CardType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_four: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_month: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cardholder_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

impl PaymentMethodPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn card_type(mut self, card_type: CardType) -> Self {
        self.card_type = Some(card_type);
        self
    }

    pub fn last_four(mut self, last_four: impl Into<String>) -> Self {
        self.last_four = Some(last_four.into());
        self
    }

    pub fn expiry(mut self, month: impl Into<String>, year: impl Into<String>) -> Self {
        self.expiry_month = Some(month.into());
        self.expiry_year = Some(year.into());
        self
    }

    pub fn cardholder_name(mut self, name: impl Into<String>) -> Self {
        self.cardholder_name = Some(name.into());
        self
    }

    pub fn is_default(mut self, is_default: bool) -> Self {
        self.is_default = Some(is_default);
        self
    }

    /// Set brand and last four digits from a full card number
    pub fn with_card_number(mut self, number: &str) -> Self {
        self.card_type = Some(CardType::from_card_number(number));
        self.last_four = Some(last_four_of(number));
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Apply every field except the default flag, which the ledger owns
    pub(crate) fn apply_fields(&self, method: &mut PaymentMethod) {
        if let Some(card_type) = self.card_type {
            method.card_type = card_type;
        }
        if let Some(last_four) = &self.last_four {
            method.last_four = last_four.clone();
        }
        if let Some(month) = &self.expiry_month {
            method.expiry_month = month.clone();
        }
        if let Some(year) = &self.expiry_year {
            method.expiry_year = year.clone();
        }
        if let Some(name) = &self.cardholder_name {
            method.cardholder_name = name.clone();
        }
    }
}
