//! Router configuration for docshelf.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Document listing (public)
//! GET  /health                 - Health check (public)
//! GET  /users/signin_page      - Sign-in form (public)
//! POST /users/signin           - Authenticate (public)
//! POST /users/signout          - Sign out
//! GET  /new/document           - New-document form (signed in)
//! POST /new/document           - Create a document (signed in)
//! GET  /{filename}             - View a document (public)
//! POST /{filename}             - Update a document (signed in)
//! GET  /{filename}/edit        - Edit form (signed in)
//! POST /{filename}/delete      - Delete a document (signed in)
//! ```
//!
//! Static segments win over the `{filename}` capture, so `/health`,
//! `/users/...`, and `/new/document` are never shadowed by document names.
//! The signed-in checks live in the handlers themselves: a protected route
//! hit by an anonymous session redirects home with a flash rather than
//! failing at the middleware layer.
//!
//! # Example
//!
//! ```ignore
//! use docshelf::server::routes::{create_router, RouterConfig};
//! use docshelf::server::{AppState, Credentials};
//! use docshelf::store::FileStore;
//!
//! let store = FileStore::new("./data");
//! let state = AppState::new(store, Credentials::new("admin", "secret"));
//! let router = create_router(state, RouterConfig::new());
//!
//! // Run the server
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, router).await?;
//! ```

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_document, delete_document, edit_form, health, index, new_document_form, signin,
    signin_form, signout, update_document, view_document, AppState,
};

// =============================================================================
// Router Configuration
// =============================================================================

/// Configuration for the HTTP router.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Whether to enable request tracing
    pub enable_tracing: bool,
}

impl RouterConfig {
    /// Create the default router configuration (tracing enabled).
    pub fn new() -> Self {
        Self {
            enable_tracing: true,
        }
    }

    /// Enable or disable request tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Router Builder
// =============================================================================

/// Create the application router.
pub fn create_router(state: AppState, config: RouterConfig) -> Router {
    let router = Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/users/signin_page", get(signin_form))
        .route("/users/signin", post(signin))
        .route("/users/signout", post(signout))
        .route("/new/document", get(new_document_form).post(create_document))
        .route("/{filename}", get(view_document).post(update_document))
        .route("/{filename}/edit", get(edit_form))
        .route("/{filename}/delete", post(delete_document))
        .with_state(state);

    if config.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

// =============================================================================
// Tests
// =============================================================================
