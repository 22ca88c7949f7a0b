//! Integration tests for studygenius
//!
//! These tests drive several services together and check real behavior
//! without mocking.

pub mod account_flow_tests;
pub mod config_tests;
pub mod payment_method_tests;
pub mod persistence_tests;
pub mod study_tests;
pub mod subscription_tests;
