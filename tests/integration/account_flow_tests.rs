//! End-to-end account lifecycle through the facade

use crate::common::assertions::assert_subscribed;
use crate::common::fixtures::{self, CardFactory};
use chrono::{Duration, Utc};
use studygenius::{
    BillingCycle, Destination, ErrorField, OperationOutcome, PlanTier, StudyGeniusError,
};

#[tokio::test]
async fn test_login_trial_subscribe_logout() {
    let app = fixtures::app();

    let account = fixtures::logged_in(&app).await;
    assert_eq!(account.plan_display_name(), "Free");
    assert_eq!(app.destination_for(&account), Destination::FreeTrial);

    let trial_account = app.accounts().activate_free_trial().await.unwrap();
    let trial = trial_account.trial_status.clone().unwrap();
    assert_eq!(
        trial.end_date.unwrap() - trial.start_date.unwrap(),
        Duration::days(14)
    );
    assert_eq!(app.destination_for(&trial_account), Destination::Dashboard);
    assert_eq!(trial_account.trial_days_remaining(Utc::now()), Some(14));

    let receipt = app
        .subscribe(PlanTier::Premium, BillingCycle::Monthly, &CardFactory::visa())
        .await
        .unwrap();
    assert_eq!(receipt.subscription.price, 9.99);

    let current = app.require_account().await.unwrap();
    assert_eq!(current.id, account.id);
    assert_subscribed(&current, PlanTier::Premium);
    assert_eq!(app.destination_for(&current), Destination::Dashboard);

    app.accounts().logout().await.unwrap();
    assert!(app.accounts().current_account().await.is_none());
    assert!(matches!(
        app.require_account().await,
        Err(StudyGeniusError::NoActiveSession(_))
    ));
}

#[tokio::test]
async fn test_signup_replaces_session() {
    let app = fixtures::app();
    let first = fixtures::logged_in(&app).await;

    let second = app
        .accounts()
        .signup("Grace Hopper", "grace@example.com", "cobol1959")
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert!(!second.is_verified);
    assert_eq!(app.require_account().await.unwrap(), second);
}

#[tokio::test]
async fn test_trial_without_session() {
    let app = fixtures::app();
    let result = app.accounts().activate_free_trial().await;

    let outcome = OperationOutcome::from(&result);
    assert!(!outcome.success);
    assert_eq!(outcome.error.as_deref(), Some("No authenticated user found"));
}

#[tokio::test]
async fn test_failed_signup_outcome_names_field() {
    let app = fixtures::app();
    let result = app.accounts().signup("Al", "al@example.com", "123").await;

    let outcome = OperationOutcome::from(&result);
    assert!(!outcome.success);
    assert_eq!(outcome.field, Some(ErrorField::Password));

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["field"], "password");
    assert_eq!(json["error"], "Password must be at least 6 characters");
}

#[tokio::test]
async fn test_purchase_after_logout_fails() {
    let app = fixtures::app();
    let account = fixtures::logged_in(&app).await;
    app.accounts().logout().await.unwrap();

    let err = app
        .subscriptions()
        .purchase(
            &account.id,
            PlanTier::Academic,
            BillingCycle::Annual,
            199.99,
            &CardFactory::visa(),
        )
        .await
        .unwrap_err();
    assert_eq!(
        err.user_message(),
        "User not found. Please log in before subscribing."
    );
}
