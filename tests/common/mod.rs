//! Common test utilities for studygenius
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::fixtures;
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let app = fixtures::app();
//!     let account = fixtures::logged_in(&app).await;
//!     // ...
//! }
//! ```

pub mod assertions;
pub mod fixtures;

pub use assertions::LedgerAssertions;
pub use fixtures::CardFactory;
