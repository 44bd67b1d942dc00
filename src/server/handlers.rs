//! HTTP request handlers for docshelf.
//!
//! One handler per route. Every handler attaches the request's session
//! (issuing a cookie when the client has none), consults the auth gate for
//! protected routes, performs its store and render work, and responds.
//!
//! Error recovery is local: a missing document redirects home with an
//! explanatory flash, validation failures redisplay the originating form
//! with a 422 status, and an unauthenticated hit on a protected route
//! redirects home with a fixed flash. No failure surfaces a raw error page
//! apart from a 500 on an unexpected filesystem error.

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use axum_extra::extract::CookieJar;
use http::{header, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::error::StoreError;
use crate::render::{render, Rendered};
use crate::server::auth::{Credentials, SIGNIN_REQUIRED_MESSAGE};
use crate::server::session::{Session, SessionStore};
use crate::server::views;
use crate::store::{is_valid_name, FileStore};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state passed to all handlers via Axum's State extractor.
#[derive(Clone)]
pub struct AppState {
    /// The document store
    pub store: FileStore,

    /// Live sessions, keyed by cookie token
    pub sessions: SessionStore,

    /// The admin credential pair
    pub credentials: Credentials,
}

impl AppState {
    /// Create application state over a store and credential pair.
    pub fn new(store: FileStore, credentials: Credentials) -> Self {
        Self {
            store,
            sessions: SessionStore::new(),
            credentials,
        }
    }
}

// =============================================================================
// Form Payloads
// =============================================================================

/// Body of `POST /users/signin`.
#[derive(Debug, Deserialize)]
pub struct SigninForm {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,
}

/// Body of `POST /{filename}` (edit submission).
#[derive(Debug, Deserialize)]
pub struct DocumentForm {
    #[serde(default)]
    pub content: String,
}

/// Body of `POST /new/document`.
#[derive(Debug, Deserialize)]
pub struct NewDocumentForm {
    #[serde(default)]
    pub filename: String,

    #[serde(default)]
    pub content: String,
}

// =============================================================================
// Response Types
// =============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

// =============================================================================
// Response Helpers
// =============================================================================

/// A 302 redirect to the given path.
fn found(to: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, to.to_string())], ()).into_response()
}

/// Set the deny flash and redirect home. Used by every protected route when
/// the session is not signed in.
async fn deny_signed_out(session: &Session, jar: CookieJar) -> Response {
    session.set_flash(SIGNIN_REQUIRED_MESSAGE).await;
    (jar, found("/")).into_response()
}

/// Set a flash message and redirect home.
async fn redirect_with_flash(session: &Session, jar: CookieJar, message: String) -> Response {
    session.set_flash(message).await;
    (jar, found("/")).into_response()
}

/// A 500 response for unexpected store failures.
fn internal_error(err: StoreError, jar: CookieJar) -> Response {
    error!(error = %err, "store operation failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        jar,
        Html(views::layout(
            "Error",
            None,
            None,
            "<h1>Something went wrong</h1><p><a href=\"/\">Back to documents</a></p>",
        )),
    )
        .into_response()
}

// =============================================================================
// Handlers
// =============================================================================

/// Handle the document listing.
///
/// # Endpoint
///
/// `GET /`
///
/// # Response
///
/// `200 OK` with an HTML listing of all document names. Edit/delete
/// controls and the new-document link appear only for a signed-in session;
/// the status bar shows either "Signed in as {user}" or a sign-in link.
pub async fn index(State(state): State<AppState>, jar: CookieJar) -> Response {
    let (session, jar) = state.sessions.attach(jar).await;

    let documents = match state.store.list().await {
        Ok(documents) => documents,
        Err(err) => return internal_error(err, jar),
    };

    let flash = session.take_flash().await;
    let username = session.username().await;
    let html = views::index_page(&documents, flash.as_deref(), username.as_deref());

    (jar, Html(html)).into_response()
}

/// Handle health check requests.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// `200 OK` with JSON body:
/// ```json
/// {
///   "status": "ok",
///   "version": "0.1.0"
/// }
/// ```
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Handle viewing a document.
///
/// # Endpoint
///
/// `GET /{filename}`
///
/// # Response
///
/// - Markdown document: `200 OK`, HTML page with the converted content
/// - Any other document: `200 OK`, raw bytes as `text/plain`
/// - Absent document: `302` to `/` with flash "{name} does not exist."
pub async fn view_document(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(name): Path<String>,
) -> Response {
    let (session, jar) = state.sessions.attach(jar).await;

    let content = match state.store.read(&name).await {
        Ok(content) => content,
        Err(err) if err.is_not_found() => {
            return redirect_with_flash(&session, jar, format!("{name} does not exist.")).await;
        }
        Err(err) => return internal_error(err, jar),
    };

    match render(&name, &content) {
        Rendered::Html(rendered) => {
            let flash = session.take_flash().await;
            let username = session.username().await;
            let html =
                views::document_page(&name, &rendered, flash.as_deref(), username.as_deref());
            (jar, Html(html)).into_response()
        }
        Rendered::Text(text) => (
            jar,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            text,
        )
            .into_response(),
    }
}

/// Handle the edit form.
///
/// # Endpoint
///
/// `GET /{filename}/edit`
///
/// # Response
///
/// - Signed in: `200 OK`, HTML form pre-filled with the current content
/// - Signed out: `302` to `/` with the deny flash
/// - Absent document: `302` to `/` with flash "{name} does not exist."
pub async fn edit_form(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(name): Path<String>,
) -> Response {
    let (session, jar) = state.sessions.attach(jar).await;

    if !session.is_authenticated().await {
        return deny_signed_out(&session, jar).await;
    }

    let content = match state.store.read(&name).await {
        Ok(content) => content,
        Err(err) if err.is_not_found() => {
            return redirect_with_flash(&session, jar, format!("{name} does not exist.")).await;
        }
        Err(err) => return internal_error(err, jar),
    };

    let flash = session.take_flash().await;
    let username = session.username().await;
    let html = views::edit_page(
        &name,
        &String::from_utf8_lossy(&content),
        flash.as_deref(),
        username.as_deref(),
    );

    (jar, Html(html)).into_response()
}

/// Handle an edit submission.
///
/// # Endpoint
///
/// `POST /{filename}` with form field `content`
///
/// # Response
///
/// - Signed in: content overwritten, `302` to `/` with flash
///   "{name} has been updated."
/// - Signed out: `302` to `/` with the deny flash; the store is untouched
pub async fn update_document(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(name): Path<String>,
    Form(form): Form<DocumentForm>,
) -> Response {
    let (session, jar) = state.sessions.attach(jar).await;

    if !session.is_authenticated().await {
        return deny_signed_out(&session, jar).await;
    }

    match state.store.write(&name, form.content.as_bytes()).await {
        Ok(()) => {
            info!(name = %name, "document updated");
            redirect_with_flash(&session, jar, format!("{name} has been updated.")).await
        }
        Err(err) if err.is_not_found() => {
            redirect_with_flash(&session, jar, format!("{name} does not exist.")).await
        }
        Err(err) => internal_error(err, jar),
    }
}

/// Handle the new-document form.
///
/// # Endpoint
///
/// `GET /new/document`
///
/// # Response
///
/// - Signed in: `200 OK`, HTML form for a filename and initial content
/// - Signed out: `302` to `/` with the deny flash
pub async fn new_document_form(State(state): State<AppState>, jar: CookieJar) -> Response {
    let (session, jar) = state.sessions.attach(jar).await;

    if !session.is_authenticated().await {
        return deny_signed_out(&session, jar).await;
    }

    let flash = session.take_flash().await;
    let username = session.username().await;
    let html = views::new_document_page(None, "", "", flash.as_deref(), username.as_deref());

    (jar, Html(html)).into_response()
}

/// Handle creating a document.
///
/// # Endpoint
///
/// `POST /new/document` with form fields `filename` and `content`
///
/// # Response
///
/// - Signed in, valid name: created, `302` to `/` with flash
///   "{name} was created."
/// - Empty name: `422`, form redisplayed with "A name is required."
/// - Name with path separators: `422`, form redisplayed with an error
/// - Signed out: `302` to `/` with the deny flash; the store is untouched
pub async fn create_document(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<NewDocumentForm>,
) -> Response {
    let (session, jar) = state.sessions.attach(jar).await;

    if !session.is_authenticated().await {
        return deny_signed_out(&session, jar).await;
    }

    let name = form.filename.trim();

    let error = if name.is_empty() {
        Some("A name is required.")
    } else if !is_valid_name(name) {
        Some("Name cannot contain path separators.")
    } else {
        None
    };

    if let Some(message) = error {
        let username = session.username().await;
        let html = views::new_document_page(
            Some(message),
            name,
            &form.content,
            None,
            username.as_deref(),
        );
        return (StatusCode::UNPROCESSABLE_ENTITY, jar, Html(html)).into_response();
    }

    match state.store.write(name, form.content.as_bytes()).await {
        Ok(()) => {
            info!(name = %name, "document created");
            redirect_with_flash(&session, jar, format!("{name} was created.")).await
        }
        Err(err) => internal_error(err, jar),
    }
}

/// Handle deleting a document.
///
/// # Endpoint
///
/// `POST /{filename}/delete`
///
/// # Response
///
/// - Signed in: file removed, `302` to `/` with flash
///   "{name} has been deleted." Deleting an absent document behaves the
///   same (delete is idempotent).
/// - Signed out: `302` to `/` with the deny flash; the store is untouched
pub async fn delete_document(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(name): Path<String>,
) -> Response {
    let (session, jar) = state.sessions.attach(jar).await;

    if !session.is_authenticated().await {
        return deny_signed_out(&session, jar).await;
    }

    match state.store.delete(&name).await {
        Ok(()) => {
            info!(name = %name, "document deleted");
            redirect_with_flash(&session, jar, format!("{name} has been deleted.")).await
        }
        Err(err) if err.is_not_found() => {
            redirect_with_flash(&session, jar, format!("{name} has been deleted.")).await
        }
        Err(err) => internal_error(err, jar),
    }
}

/// Handle the sign-in form.
///
/// # Endpoint
///
/// `GET /users/signin_page`
///
/// # Response
///
/// `200 OK` with the username/password form.
pub async fn signin_form(State(state): State<AppState>, jar: CookieJar) -> Response {
    let (session, jar) = state.sessions.attach(jar).await;

    let flash = session.take_flash().await;
    let html = views::signin_page(None, "", flash.as_deref());

    (jar, Html(html)).into_response()
}

/// Handle a sign-in submission.
///
/// # Endpoint
///
/// `POST /users/signin` with form fields `username` and `password`
///
/// # Response
///
/// - Valid credentials: signed in, `302` to `/` with flash
///   "Welcome! Log in successful."
/// - Invalid credentials: `422`, form redisplayed with
///   "Invalid username or password." and the submitted username echoed back
pub async fn signin(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<SigninForm>,
) -> Response {
    let (session, jar) = state.sessions.attach(jar).await;

    if state.credentials.verify(&form.username, &form.password) {
        session.sign_in(&form.username).await;
        info!(username = %form.username, "sign-in successful");
        return redirect_with_flash(&session, jar, "Welcome! Log in successful.".to_string())
            .await;
    }

    warn!(username = %form.username, "sign-in failed");
    let html = views::signin_page(Some("Invalid username or password."), &form.username, None);
    (StatusCode::UNPROCESSABLE_ENTITY, jar, Html(html)).into_response()
}

/// Handle sign-out.
///
/// # Endpoint
///
/// `POST /users/signout`
///
/// # Response
///
/// `302` to `/` with flash "You have been signed out." The session itself
/// survives; only the username is cleared.
pub async fn signout(State(state): State<AppState>, jar: CookieJar) -> Response {
    let (session, jar) = state.sessions.attach(jar).await;

    session.sign_out().await;
    redirect_with_flash(&session, jar, "You have been signed out.".to_string()).await
}

// =============================================================================
// Tests
// =============================================================================
