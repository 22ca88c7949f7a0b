//! Password strength meter

use serde::{Deserialize, Serialize};
use std::fmt;

/// Strength bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthLabel {
    Weak,
    Good,
    Strong,
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Good => write!(f, "Good"),
            StrengthLabel::Strong => write!(f, "Strong"),
        }
    }
}

/// Scored password strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordStrength {
    /// Number of satisfied criteria, 0 to 5
    pub score: u8,
    pub percent: u8,
    pub label: StrengthLabel,
}

impl PasswordStrength {
    /// Score one point each for length of 8 or more, an uppercase letter,
    /// a lowercase letter, a digit and a symbol
    pub fn evaluate(password: &str) -> Self {
        let criteria = [
            password.chars().count() >= 8,
            password.chars().any(|c| c.is_ascii_uppercase()),
            password.chars().any(|c| c.is_ascii_lowercase()),
            password.chars().any(|c| c.is_ascii_digit()),
            password.chars().any(|c| !c.is_ascii_alphanumeric()),
        ];
        let score = criteria.iter().filter(|met| **met).count() as u8;
        let percent = score * 20;
        let label = if percent < 40 {
            StrengthLabel::Weak
        } else if percent < 70 {
            StrengthLabel::Good
        } else {
            StrengthLabel::Strong
        };

        Self {
            score,
            percent,
            label,
        }
    }
}
