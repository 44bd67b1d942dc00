//! Integration tests for listing, viewing, and rendering documents.

use axum::http::StatusCode;

use super::test_utils::{
    assert_redirects_home, body_string, continue_cookie, session_cookie, TestApp,
};

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn test_home_lists_documents() {
    let app = TestApp::new();
    app.create_document("about.md", "");
    app.create_document("changes.txt", "");

    let response = app.get("/", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = body_string(response).await;
    assert!(body.contains("about.md"));
    assert!(body.contains("changes.txt"));
}

#[tokio::test]
async fn test_home_issues_session_cookie() {
    let app = TestApp::new();

    let response = app.get("/", None).await;
    assert!(session_cookie(&response).is_some());
}

#[tokio::test]
async fn test_home_shows_sign_in_link_when_anonymous() {
    let app = TestApp::new();
    app.create_document("about.md", "");

    let body = body_string(app.get("/", None).await).await;

    assert!(body.contains("Sign In"));
    assert!(!body.contains("Signed in as"));
    assert!(!body.contains("/about.md/edit"));
    assert!(!body.contains("New Document"));
}

#[tokio::test]
async fn test_home_shows_controls_when_signed_in() {
    let app = TestApp::new();
    app.create_document("about.md", "");
    let cookie = app.admin_cookie().await;

    let body = app.home_body(&cookie).await;

    assert!(body.contains("Signed in as admin"));
    assert!(body.contains("/about.md/edit"));
    assert!(body.contains("/about.md/delete"));
    assert!(body.contains("New Document"));
}

// =============================================================================
// Viewing
// =============================================================================

#[tokio::test]
async fn test_viewing_text_document() {
    let app = TestApp::new();
    app.create_document("history.txt", "1993 - Yukihiro Matsumoto dreams up Ruby.");

    let response = app.get("/history.txt", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/plain"));

    let body = body_string(response).await;
    assert!(body.contains("1993 - Yukihiro Matsumoto dreams up Ruby."));
}

#[tokio::test]
async fn test_text_document_markup_not_interpreted() {
    let app = TestApp::new();
    app.create_document("notes.txt", "<b>not bold</b> and `not code`");

    let response = app.get("/notes.txt", None).await;

    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/plain"));

    // Byte-for-byte: the tags survive untouched in a plain-text body
    let body = body_string(response).await;
    assert_eq!(body, "<b>not bold</b> and `not code`");
}

#[tokio::test]
async fn test_markdown_rendering() {
    let app = TestApp::new();
    app.create_document("about.md", "`Ruby is...`");

    let response = app.get("/about.md", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = body_string(response).await;
    assert!(body.contains("<code>Ruby is...</code>"));
}

#[tokio::test]
async fn test_markdown_headers_and_emphasis() {
    let app = TestApp::new();
    app.create_document("guide.md", "# Guide\n\nread *carefully*\n");

    let body = body_string(app.get("/guide.md", None).await).await;

    assert!(body.contains("<h1>Guide</h1>"));
    assert!(body.contains("<em>carefully</em>"));
}

#[tokio::test]
async fn test_viewing_non_existent_document() {
    let app = TestApp::new();

    let response = app.get("/notafile.ext", None).await;
    assert_redirects_home(&response);
    let cookie = continue_cookie(&response, None);

    // The flash shows once on the next page...
    let body = app.home_body(&cookie).await;
    assert!(body.contains("notafile.ext does not exist."));

    // ...and is gone after that
    let body = app.home_body(&cookie).await;
    assert!(!body.contains("notafile.ext does not exist."));
}

#[tokio::test]
async fn test_viewing_traversal_name_is_not_found() {
    let app = TestApp::new();

    let response = app.get("/..%2Fescape.txt", None).await;
    assert_redirects_home(&response);
    let cookie = continue_cookie(&response, None);

    let body = app.home_body(&cookie).await;
    assert!(body.contains("does not exist."));
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = TestApp::new();

    let response = app.get("/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
}
