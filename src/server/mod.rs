//! HTTP server layer for docshelf.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         HTTP Layer                              │
//! │     GET /{filename}   POST /{filename}   POST /users/signin     │
//! │                                                                 │
//! │  ┌───────────┐ ┌──────────┐ ┌──────────┐ ┌───────┐ ┌─────────┐  │
//! │  │ handlers  │ │ session  │ │   auth   │ │ views │ │ routes  │  │
//! │  │ (requests)│ │ (cookies)│ │ (creds)  │ │ (HTML)│ │ (router)│  │
//! │  └───────────┘ └──────────┘ └──────────┘ └───────┘ └─────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod auth;
pub mod handlers;
pub mod routes;
pub mod session;
pub mod views;

pub use auth::{Credentials, SIGNIN_REQUIRED_MESSAGE};
pub use handlers::{
    AppState, DocumentForm, HealthResponse, NewDocumentForm, SigninForm,
};
pub use routes::{create_router, RouterConfig};
pub use session::{Session, SessionStore, SESSION_COOKIE};
