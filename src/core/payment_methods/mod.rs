//! Stored payment methods
//!
//! - **card**: brand detection and checkout card validation
//! - **ledger**: per-account method list with a single default
//! - **types**: stored records, new-method input and patches

pub mod card;
pub mod ledger;
pub mod types;

pub use card::{CardDetails, CardType, validate_card_details};
pub use ledger::{LedgerSnapshot, PaymentMethodLedger};
pub use types::{NewPaymentMethod, PaymentMethod, PaymentMethodPatch};
