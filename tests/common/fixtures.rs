//! Test fixtures and data factories
//!
//! Factories build real objects with sensible defaults; nothing is mocked.

use studygenius::config::{SessionBackendKind, SessionConfig};
use studygenius::{Account, CardDetails, CardType, Config, NewPaymentMethod, StudyGenius};
use tempfile::TempDir;

/// Factory for checkout card details
pub struct CardFactory;

impl CardFactory {
    /// A valid Visa card expiring in December 2030
    pub fn visa() -> CardDetails {
        CardDetails {
            card_number: "4242 4242 4242 4242".to_string(),
            card_name: "Ada Lovelace".to_string(),
            expiry_month: "12".to_string(),
            expiry_year: "30".to_string(),
            cvv: "123".to_string(),
            save_card: false,
        }
    }

    pub fn mastercard() -> CardDetails {
        CardDetails {
            card_number: "5555 5555 5555 4444".to_string(),
            ..Self::visa()
        }
    }

    /// Visa card flagged to be saved after checkout
    pub fn saved_visa() -> CardDetails {
        CardDetails {
            save_card: true,
            ..Self::visa()
        }
    }

    /// Ledger entry with the given last four digits
    pub fn stored(last_four: &str, is_default: bool) -> NewPaymentMethod {
        NewPaymentMethod {
            card_type: CardType::Visa,
            last_four: last_four.to_string(),
            expiry_month: "12".to_string(),
            expiry_year: "30".to_string(),
            cardholder_name: "Ada Lovelace".to_string(),
            is_default,
        }
    }
}

/// In-memory app with no simulated latency
pub fn app() -> StudyGenius {
    StudyGenius::for_testing()
}

/// Config using a file backend rooted in `dir`
pub fn file_config(dir: &TempDir) -> Config {
    Config {
        session: SessionConfig {
            backend: SessionBackendKind::File,
            data_dir: dir.path().to_string_lossy().to_string(),
            ..SessionConfig::default()
        },
        ..Config::for_testing()
    }
}

/// Log in a fresh account
pub async fn logged_in(app: &StudyGenius) -> Account {
    app.accounts()
        .login("ada@example.com", "correct horse")
        .await
        .expect("login should succeed")
}
