//! Integration tests for creating, editing, and deleting documents.

use axum::http::StatusCode;

use super::test_utils::{assert_redirects_home, body_string, TestApp};

// =============================================================================
// Editing
// =============================================================================

#[tokio::test]
async fn test_editing_document() {
    let app = TestApp::new();
    app.create_document("changes.txt", "original content");
    let cookie = app.admin_cookie().await;

    let response = app.get("/changes.txt/edit", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("<textarea"));
    assert!(body.contains(r#"<button type="submit""#));
    assert!(body.contains("original content"));
}

#[tokio::test]
async fn test_edit_form_escapes_document_content() {
    let app = TestApp::new();
    app.create_document("notes.txt", "<script>alert(1)</script>");
    let cookie = app.admin_cookie().await;

    let body = body_string(app.get("/notes.txt/edit", Some(&cookie)).await).await;

    assert!(body.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!body.contains("<script>alert(1)</script>"));
}

#[tokio::test]
async fn test_editing_missing_document_redirects() {
    let app = TestApp::new();
    let cookie = app.admin_cookie().await;

    let response = app.get("/ghost.txt/edit", Some(&cookie)).await;
    assert_redirects_home(&response);

    let body = app.home_body(&cookie).await;
    assert!(body.contains("ghost.txt does not exist."));
}

#[tokio::test]
async fn test_updating_document() {
    let app = TestApp::new();
    let cookie = app.admin_cookie().await;

    let response = app
        .post("/changes.txt", &[("content", "new content")], Some(&cookie))
        .await;
    assert_redirects_home(&response);

    let body = app.home_body(&cookie).await;
    assert!(body.contains("changes.txt has been updated."));

    let response = app.get("/changes.txt", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("new content"));
}

#[tokio::test]
async fn test_update_round_trips_bytes() {
    let app = TestApp::new();
    let cookie = app.admin_cookie().await;

    let content = "line one\nline two\n\ttabbed";
    app.post("/raw.txt", &[("content", content)], Some(&cookie))
        .await;

    assert_eq!(app.document_content("raw.txt"), content);
}

// =============================================================================
// Creating
// =============================================================================

#[tokio::test]
async fn test_view_create_document_form() {
    let app = TestApp::new();
    let cookie = app.admin_cookie().await;

    let response = app.get("/new/document", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("<textarea"));
    assert!(body.contains(r#"<button type="submit""#));
}

#[tokio::test]
async fn test_create_new_document() {
    let app = TestApp::new();
    let cookie = app.admin_cookie().await;

    let response = app
        .post("/new/document", &[("filename", "test.txt")], Some(&cookie))
        .await;
    assert_redirects_home(&response);

    let body = app.home_body(&cookie).await;
    assert!(body.contains("test.txt was created."));
    assert!(body.contains(r#"href="/test.txt""#));
    assert!(app.document_exists("test.txt"));
}

#[tokio::test]
async fn test_create_document_with_content() {
    let app = TestApp::new();
    let cookie = app.admin_cookie().await;

    app.post(
        "/new/document",
        &[("filename", "draft.md"), ("content", "# Draft")],
        Some(&cookie),
    )
    .await;

    assert_eq!(app.document_content("draft.md"), "# Draft");
}

#[tokio::test]
async fn test_create_new_document_without_filename() {
    let app = TestApp::new();
    let cookie = app.admin_cookie().await;

    let response = app
        .post("/new/document", &[("filename", "")], Some(&cookie))
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_string(response).await;
    assert!(body.contains("A name is required"));
}

#[tokio::test]
async fn test_create_whitespace_filename_rejected() {
    let app = TestApp::new();
    let cookie = app.admin_cookie().await;

    let response = app
        .post("/new/document", &[("filename", "   ")], Some(&cookie))
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_string(response).await;
    assert!(body.contains("A name is required"));
}

#[tokio::test]
async fn test_create_traversal_filename_rejected() {
    let app = TestApp::new();
    let cookie = app.admin_cookie().await;

    let response = app
        .post(
            "/new/document",
            &[("filename", "../escape.txt")],
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(!app.document_exists("../escape.txt"));
}

// =============================================================================
// Deleting
// =============================================================================

#[tokio::test]
async fn test_deleting_document() {
    let app = TestApp::new();
    app.create_document("test.txt", "some content");
    let cookie = app.admin_cookie().await;

    let response = app.post("/test.txt/delete", &[], Some(&cookie)).await;
    assert_redirects_home(&response);

    let body = app.home_body(&cookie).await;
    assert!(body.contains("test.txt has been deleted."));
    assert!(!body.contains(r#"href="/test.txt""#));
    assert!(!app.document_exists("test.txt"));
}

#[tokio::test]
async fn test_deleted_document_no_longer_readable() {
    let app = TestApp::new();
    app.create_document("test.txt", "some content");
    let cookie = app.admin_cookie().await;

    app.post("/test.txt/delete", &[], Some(&cookie)).await;

    let response = app.get("/test.txt", Some(&cookie)).await;
    assert_redirects_home(&response);
}

#[tokio::test]
async fn test_deleting_missing_document_is_idempotent() {
    let app = TestApp::new();
    let cookie = app.admin_cookie().await;

    let response = app.post("/ghost.txt/delete", &[], Some(&cookie)).await;
    assert_redirects_home(&response);

    let body = app.home_body(&cookie).await;
    assert!(body.contains("ghost.txt has been deleted."));
}
