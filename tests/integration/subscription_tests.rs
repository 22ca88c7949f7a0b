//! Subscribing through the facade

use crate::common::LedgerAssertions;
use crate::common::assertions::assert_subscribed;
use crate::common::fixtures::{self, CardFactory};
use studygenius::{BillingCycle, CardType, ErrorField, PlanTier, StudyGeniusError};

#[tokio::test]
async fn test_subscribe_uses_catalog_price() {
    let app = fixtures::app();
    fixtures::logged_in(&app).await;

    let receipt = app
        .subscribe(PlanTier::Academic, BillingCycle::Annual, &CardFactory::visa())
        .await
        .unwrap();

    assert_eq!(receipt.subscription.price, 199.99);
    assert_eq!(receipt.subscription.billing_cycle, BillingCycle::Annual);
    assert_eq!(
        BillingCycle::Annual.period_end(receipt.subscription.start_date),
        Some(receipt.subscription.end_date)
    );
    assert_subscribed(&app.require_account().await.unwrap(), PlanTier::Academic);
}

#[tokio::test]
async fn test_subscribe_saves_card_when_asked() {
    let app = fixtures::app();
    let account = fixtures::logged_in(&app).await;

    app.subscribe(PlanTier::Premium, BillingCycle::Monthly, &CardFactory::visa())
        .await
        .unwrap();
    assert_eq!(app.payment_methods().count(&account.id), 0);

    app.subscribe(PlanTier::Premium, BillingCycle::Monthly, &CardFactory::saved_visa())
        .await
        .unwrap();
    let methods = app.payment_methods().list(&account.id);
    assert_eq!(methods.len(), 1);
    assert_eq!(methods[0].card_type, CardType::Visa);
    assert_eq!(methods[0].last_four, "4242");
    app.payment_methods()
        .assert_default_is(&account.id, &methods[0].id);
}

#[tokio::test]
async fn test_subscribe_requires_login() {
    let app = fixtures::app();
    let err = app
        .subscribe(PlanTier::Premium, BillingCycle::Monthly, &CardFactory::visa())
        .await
        .unwrap_err();
    assert!(matches!(err, StudyGeniusError::NoAccount(_)));
}

#[tokio::test]
async fn test_basic_plan_not_for_sale() {
    let app = fixtures::app();
    fixtures::logged_in(&app).await;

    let err = app
        .subscribe(PlanTier::Basic, BillingCycle::Monthly, &CardFactory::visa())
        .await
        .unwrap_err();
    assert_eq!(err.field(), Some(ErrorField::Plan));
}

#[tokio::test]
async fn test_free_plan_rejected_and_state_untouched() {
    let app = fixtures::app();
    let account = fixtures::logged_in(&app).await;

    let err = app
        .subscribe(PlanTier::Free, BillingCycle::Monthly, &CardFactory::mastercard())
        .await
        .unwrap_err();
    assert_eq!(err.field(), Some(ErrorField::Plan));
    assert_eq!(app.require_account().await.unwrap(), account);
}
