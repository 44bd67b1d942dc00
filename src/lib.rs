//! # docshelf
//!
//! A flat-file document server.
//!
//! This library provides the core functionality for a minimal
//! content-management web application: documents are plain files in one
//! directory, anyone can browse and read them, and a single admin
//! credential held in a cookie-backed session gates creating, editing,
//! and deleting.
//!
//! ## Features
//!
//! - **Flat-file storage**: one file per document, filename as identity
//! - **Markdown rendering**: `.md`/`.markdown` documents are converted to
//!   HTML; everything else is served verbatim as plain text
//! - **Session auth**: a configured admin credential, checked in constant
//!   time, tracked server-side behind a cookie token
//! - **One-shot flash messages**: status text shown exactly once after a
//!   redirect
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`store`] - Flat-directory document store
//! - [`render`] - Extension-based markdown/plain-text rendering
//! - [`server`] - Axum-based HTTP server, sessions, and views
//! - [`config`] - CLI and configuration types
//!
//! ## Example
//!
//! ```rust,no_run
//! use docshelf::{create_router, AppState, Credentials, FileStore, RouterConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = FileStore::new("./data");
//!     let state = AppState::new(store, Credentials::new("admin", "secret"));
//!     let router = create_router(state, RouterConfig::new());
//!
//!     // Start the server...
//! }
//! ```

pub mod config;
pub mod error;
pub mod render;
pub mod server;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use error::StoreError;
pub use render::{render, DocumentKind, Rendered};
pub use server::{
    create_router, AppState, Credentials, RouterConfig, Session, SessionStore,
    SESSION_COOKIE, SIGNIN_REQUIRED_MESSAGE,
};
pub use store::{is_valid_name, FileStore};
