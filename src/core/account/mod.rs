//! Accounts: the stored user record and its lifecycle

pub mod lifecycle;
pub mod password;
pub mod types;

pub use lifecycle::{AccountService, Destination, post_auth_destination};
pub use password::{PasswordStrength, StrengthLabel};
pub use types::{Account, Subscription, TrialStatus};
