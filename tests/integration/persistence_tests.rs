//! State surviving across app instances on the file backend

use crate::common::LedgerAssertions;
use crate::common::fixtures::{self, CardFactory};
use studygenius::core::{DOCUMENTS_KEY, PAYMENT_METHODS_KEY};
use studygenius::{KeyValueBackend, StudyGenius};
use tempfile::TempDir;

#[tokio::test]
async fn test_session_survives_restart() {
    let dir = TempDir::new().unwrap();

    let account = {
        let app = StudyGenius::new(fixtures::file_config(&dir)).await.unwrap();
        fixtures::logged_in(&app).await;
        app.accounts().activate_free_trial().await.unwrap()
    };
    assert!(dir.path().join("user.json").exists());

    let app = StudyGenius::new(fixtures::file_config(&dir)).await.unwrap();
    let restored = app.require_account().await.unwrap();
    assert_eq!(restored.id, account.id);
    assert!(restored.trial_status.unwrap().is_active);
}

#[tokio::test]
async fn test_ledger_and_documents_survive_restart() {
    let dir = TempDir::new().unwrap();

    let (account_id, default_id, doc_id) = {
        let app = StudyGenius::new(fixtures::file_config(&dir)).await.unwrap();
        let account = fixtures::logged_in(&app).await;
        app.payment_methods()
            .add(&account.id, CardFactory::stored("1111", false));
        let second = app
            .payment_methods()
            .add(&account.id, CardFactory::stored("2222", true));
        let doc = app
            .upload_document("notes.txt", "biology", 42)
            .await
            .unwrap();
        app.save_state().await.unwrap();
        (account.id, second.id, doc.id)
    };

    let app = StudyGenius::new(fixtures::file_config(&dir)).await.unwrap();
    assert_eq!(app.payment_methods().count(&account_id), 0);

    app.load_state().await.unwrap();
    assert_eq!(app.payment_methods().count(&account_id), 2);
    app.payment_methods().assert_default_is(&account_id, &default_id);
    assert_eq!(app.documents().get(&doc_id).map(|d| d.size), Some(42));
}

#[tokio::test]
async fn test_load_state_skips_corrupt_snapshots() {
    let backend = KeyValueBackend::memory();
    backend.set(PAYMENT_METHODS_KEY, "not json").await.unwrap();
    backend.set(DOCUMENTS_KEY, "[]").await.unwrap();

    let app = StudyGenius::with_backend(studygenius::Config::for_testing(), backend);
    app.load_state().await.unwrap();
    assert!(app.payment_methods().snapshot().is_empty());
    assert!(app.documents().snapshot().is_empty());
}

#[tokio::test]
async fn test_corrupt_session_file_reads_as_logged_out() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("user.json"), "{broken").unwrap();

    let app = StudyGenius::new(fixtures::file_config(&dir)).await.unwrap();
    assert!(app.accounts().current_account().await.is_none());

    // A new login overwrites the corrupt slot
    fixtures::logged_in(&app).await;
    assert!(app.accounts().current_account().await.is_some());
}

#[tokio::test]
async fn test_load_state_repairs_tampered_defaults() {
    let source = fixtures::app();
    let account = fixtures::logged_in(&source).await;
    let first = source
        .payment_methods()
        .add(&account.id, CardFactory::stored("1111", false));
    source
        .payment_methods()
        .add(&account.id, CardFactory::stored("2222", false));

    let mut snapshot = source.payment_methods().snapshot();
    for method in snapshot.values_mut().flatten() {
        method.is_default = true;
    }
    let backend = KeyValueBackend::memory();
    backend
        .set(PAYMENT_METHODS_KEY, &serde_json::to_string(&snapshot).unwrap())
        .await
        .unwrap();

    let app = StudyGenius::with_backend(studygenius::Config::for_testing(), backend);
    app.load_state().await.unwrap();
    app.payment_methods().assert_default_is(&account.id, &first.id);

    app.payment_methods()
        .add(&account.id, CardFactory::stored("3333", false));
    app.payment_methods().assert_single_default(&account.id);
}
