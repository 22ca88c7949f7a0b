//! Payment method ledger behavior through the facade

use crate::common::LedgerAssertions;
use crate::common::fixtures::{self, CardFactory};
use studygenius::{CardType, PaymentMethodPatch, StudyGeniusError};

#[tokio::test]
async fn test_remove_last_method_is_rejected() {
    let app = fixtures::app();
    let account = fixtures::logged_in(&app).await;
    let only = app
        .payment_methods()
        .add(&account.id, CardFactory::stored("4242", false));

    let err = app
        .remove_payment_method(&account.id, &only.id)
        .unwrap_err();
    assert!(matches!(err, StudyGeniusError::LastPaymentMethod(_)));
    assert_eq!(
        err.user_message(),
        "You must have at least one payment method on file."
    );
    assert_eq!(app.payment_methods().count(&account.id), 1);

    // The ledger primitive itself still allows it
    app.payment_methods().delete(&account.id, &only.id).unwrap();
    assert_eq!(app.payment_methods().count(&account.id), 0);
}

#[tokio::test]
async fn test_remove_missing_method() {
    let app = fixtures::app();
    let account = fixtures::logged_in(&app).await;

    assert!(matches!(
        app.remove_payment_method(&account.id, "pm_nothere"),
        Err(StudyGeniusError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_remove_default_promotes_next() {
    let app = fixtures::app();
    let account = fixtures::logged_in(&app).await;
    let ledger = app.payment_methods();

    let first = ledger.add(&account.id, CardFactory::stored("1111", false));
    let second = ledger.add(&account.id, CardFactory::stored("2222", false));
    ledger.assert_default_is(&account.id, &first.id);

    app.remove_payment_method(&account.id, &first.id).unwrap();
    ledger.assert_default_is(&account.id, &second.id);
}

#[tokio::test]
async fn test_default_invariant_over_mixed_operations() {
    let app = fixtures::app();
    let account = fixtures::logged_in(&app).await;
    let ledger = app.payment_methods();
    let id = account.id.as_str();

    let a = ledger.add(id, CardFactory::stored("1111", false));
    ledger.assert_single_default(id);
    let b = ledger.add(id, CardFactory::stored("2222", true));
    ledger.assert_default_is(id, &b.id);
    let c = ledger.add(id, CardFactory::stored("3333", false));
    ledger.assert_default_is(id, &b.id);

    ledger
        .update(id, &c.id, PaymentMethodPatch::new().is_default(true))
        .unwrap();
    ledger.assert_default_is(id, &c.id);

    ledger
        .update(id, &c.id, PaymentMethodPatch::new().is_default(false))
        .unwrap();
    ledger.assert_default_is(id, &c.id);

    ledger.set_default(id, &a.id).unwrap();
    ledger.assert_default_is(id, &a.id);

    app.remove_payment_method(id, &a.id).unwrap();
    ledger.assert_default_is(id, &b.id);

    app.remove_payment_method(id, &c.id).unwrap();
    ledger.assert_default_is(id, &b.id);
    assert!(app.remove_payment_method(id, &b.id).is_err());
}

#[tokio::test]
async fn test_update_card_number_changes_brand() {
    let app = fixtures::app();
    let account = fixtures::logged_in(&app).await;
    let method = app
        .payment_methods()
        .add(&account.id, CardFactory::stored("4242", false));

    let updated = app
        .payment_methods()
        .update(
            &account.id,
            &method.id,
            PaymentMethodPatch::new().with_card_number("6011 0000 0000 0004"),
        )
        .unwrap();
    assert_eq!(updated.card_type, CardType::Discover);
    assert_eq!(updated.last_four, "0004");
}

#[tokio::test]
async fn test_parallel_removals_keep_one_method() {
    let app = fixtures::app();
    let account = fixtures::logged_in(&app).await;
    let id = account.id.as_str();

    for _ in 0..200 {
        let first = app.payment_methods().add(id, CardFactory::stored("1111", false));
        let second = app.payment_methods().add(id, CardFactory::stored("2222", false));
        let barrier = std::sync::Barrier::new(2);

        let results: Vec<_> = std::thread::scope(|scope| {
            [&first.id, &second.id]
                .map(|method_id| {
                    let app = &app;
                    let barrier = &barrier;
                    scope.spawn(move || {
                        barrier.wait();
                        app.remove_payment_method(id, method_id)
                    })
                })
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect()
        });

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results
            .iter()
            .any(|r| matches!(r, Err(StudyGeniusError::LastPaymentMethod(_)))));
        app.payment_methods().assert_single_default(id);
        assert_eq!(app.payment_methods().count(id), 1);

        // Clear the survivor through the primitive for the next round
        let survivor = app.payment_methods().list(id).remove(0);
        app.payment_methods().delete(id, &survivor.id).unwrap();
    }
}
