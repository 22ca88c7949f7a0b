//! Configuration loading and its effect on the services

use std::io::Write;
use std::path::PathBuf;
use studygenius::config::{LatencyConfig, PasswordPolicy, SessionBackendKind};
use studygenius::{BillingCycle, Config, PlanTier, StudyGenius, StudyGeniusError};
use tempfile::NamedTempFile;

use crate::common::fixtures::{self, CardFactory};

fn example_config_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/studygenius.yaml.example")
}

#[tokio::test]
async fn test_example_config_loads() {
    let config = Config::from_file(example_config_path()).await.unwrap();

    assert_eq!(config.session.backend, SessionBackendKind::File);
    assert_eq!(config.auth.password_policy, PasswordPolicy::strict());
    assert!(config.billing.validate_cards);
    assert_eq!(config.latency, LatencyConfig::default());
    assert_eq!(config.study.accepted_extensions.len(), 4);
}

#[tokio::test]
async fn test_yaml_round_trip() {
    let config = Config::for_testing();
    let yaml = config.to_yaml().unwrap();

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let loaded = Config::from_file(file.path()).await.unwrap();
    assert_eq!(loaded.latency, LatencyConfig::zero());
    assert_eq!(loaded.session.key, config.session.key);
}

#[tokio::test]
async fn test_invalid_config_rejected_by_app() {
    let mut config = Config::for_testing();
    config.auth.trial_days = 0;

    let err = StudyGenius::new(config).await.err().unwrap();
    assert!(matches!(err, StudyGeniusError::Config(_)));
}

#[tokio::test]
async fn test_strict_policy_applies_to_signup() {
    let mut config = Config::for_testing();
    config.auth.password_policy = PasswordPolicy::strict();
    let app = StudyGenius::new(config).await.unwrap();

    let err = app
        .accounts()
        .signup("Ada", "ada@example.com", "alllowercase1")
        .await
        .unwrap_err();
    assert_eq!(
        err.user_message(),
        "Password must contain at least one uppercase letter"
    );
}

#[tokio::test]
async fn test_card_validation_switch() {
    let mut config = Config::for_testing();
    config.billing.validate_cards = true;
    let app = StudyGenius::new(config).await.unwrap();
    fixtures::logged_in(&app).await;

    let mut card = CardFactory::visa();
    card.card_number = "4242".to_string();
    let err = app
        .subscribe(PlanTier::Premium, BillingCycle::Monthly, &card)
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Invalid card number");
}

#[tokio::test]
async fn test_custom_session_key() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut config = fixtures::file_config(&dir);
    config.session.key = "current_user".to_string();

    let app = StudyGenius::new(config).await.unwrap();
    fixtures::logged_in(&app).await;
    assert!(dir.path().join("current_user.json").exists());
    assert!(!dir.path().join("user.json").exists());
}
