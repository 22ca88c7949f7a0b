//! Uploading documents and generating material through the facade

use crate::common::fixtures;
use studygenius::{ContentKind, StudyGeniusError};

#[tokio::test]
async fn test_upload_requires_login() {
    let app = fixtures::app();
    let err = app
        .upload_document("week1.pdf", "physics", 1024)
        .await
        .unwrap_err();
    assert!(matches!(err, StudyGeniusError::NoActiveSession(_)));
}

#[tokio::test]
async fn test_upload_and_generate() {
    let app = fixtures::app();
    let account = fixtures::logged_in(&app).await;

    let doc = app
        .upload_document("week1.pdf", "physics", 1024)
        .await
        .unwrap();
    assert_eq!(doc.owner_id, account.id);
    assert_eq!(app.documents().list(&account.id), vec![doc.clone()]);

    let summary = app
        .generate_content(&doc.id, ContentKind::Summary, "")
        .await
        .unwrap();
    assert!(summary.content.starts_with("This is a comprehensive summary"));

    let questions = app
        .generate_content(&doc.id, ContentKind::Questions, "chapter 4")
        .await
        .unwrap();
    assert_eq!(questions.content.lines().count(), 5);
}

#[tokio::test]
async fn test_rejected_upload_is_not_stored() {
    let app = fixtures::app();
    let account = fixtures::logged_in(&app).await;

    let err = app
        .upload_document("slides.pptx", "history", 10)
        .await
        .unwrap_err();
    assert!(err.user_message().starts_with("Invalid file type."));
    assert!(app.documents().list(&account.id).is_empty());
}

#[tokio::test]
async fn test_generate_only_from_own_documents() {
    let app = fixtures::app();
    fixtures::logged_in(&app).await;
    let doc = app
        .upload_document("week1.pdf", "physics", 1024)
        .await
        .unwrap();

    app.accounts()
        .login("someone.else@example.com", "hunter2")
        .await
        .unwrap();
    let err = app
        .generate_content(&doc.id, ContentKind::Summary, "")
        .await
        .unwrap_err();
    assert!(matches!(err, StudyGeniusError::NotFound(_)));

    app.accounts().logout().await.unwrap();
    let err = app
        .generate_content(&doc.id, ContentKind::Summary, "")
        .await
        .unwrap_err();
    assert!(matches!(err, StudyGeniusError::NoActiveSession(_)));
}
