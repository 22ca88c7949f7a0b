//! Card brand detection and card-detail validation

use crate::utils::error::{ErrorField, Result, StudyGeniusError};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Card brand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Visa,
    Mastercard,
    Amex,
    Discover,
    Generic,
}

impl CardType {
    /// Brand from the leading digit of a card number
    pub fn from_card_number(number: &str) -> Self {
        match number.trim_start().chars().next() {
            Some('4') => CardType::Visa,
            Some('5') => CardType::Mastercard,
            Some('3') => CardType::Amex,
            Some('6') => CardType::Discover,
            _ => CardType::Generic,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CardType::Visa => "Visa",
            CardType::Mastercard => "Mastercard",
            CardType::Amex => "American Express",
            CardType::Discover => "Discover",
            CardType::Generic => "Card",
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Card as entered at checkout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDetails {
    pub card_number: String,
    pub card_name: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub cvv: String,
    #[serde(default)]
    pub save_card: bool,
}

impl CardDetails {
    /// Card number with whitespace removed
    pub fn normalized_number(&self) -> String {
        self.card_number.chars().filter(|c| !c.is_whitespace()).collect()
    }

    /// Last four digits of the normalized number
    pub fn last_four(&self) -> String {
        last_four_of(&self.card_number)
    }
}

pub(crate) fn last_four_of(number: &str) -> String {
    let digits: Vec<char> = number.chars().filter(|c| !c.is_whitespace()).collect();
    let start = digits.len().saturating_sub(4);
    digits[start..].iter().collect()
}

/// Check card details, reporting the first problem found
///
/// A card counts as expired once the first day of its expiry month is in
/// the past.
pub fn validate_card_details(details: &CardDetails, now: DateTime<Utc>) -> Result<()> {
    let number = details.normalized_number();
    if number.len() != 16 || !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(StudyGeniusError::validation(
            ErrorField::CardNumber,
            "Invalid card number",
        ));
    }

    if details.card_name.trim().is_empty() {
        return Err(StudyGeniusError::validation(
            ErrorField::CardName,
            "Cardholder name is required",
        ));
    }

    if details.expiry_month.is_empty() || details.expiry_year.is_empty() {
        return Err(StudyGeniusError::validation(
            ErrorField::Expiry,
            "Expiry date is required",
        ));
    }

    if details.cvv.len() != 3 || !details.cvv.chars().all(|c| c.is_ascii_digit()) {
        return Err(StudyGeniusError::validation(ErrorField::Cvv, "Invalid CVV"));
    }

    let expiry = expiry_month_start(&details.expiry_month, &details.expiry_year).ok_or_else(
        || StudyGeniusError::validation(ErrorField::Expiry, "Expiry date is required"),
    )?;
    if expiry.and_time(NaiveTime::MIN).and_utc() < now {
        return Err(StudyGeniusError::validation(
            ErrorField::Expiry,
            "Card has expired",
        ));
    }

    Ok(())
}

/// First day of the expiry month, reading the year as `20YY`
fn expiry_month_start(month: &str, year: &str) -> Option<NaiveDate> {
    let month: u32 = month.trim().parse().ok()?;
    let year: i32 = format!("20{}", year.trim()).parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}
