//! Cookie-backed sessions.
//!
//! Session state lives server-side in a map keyed by a random token; the
//! cookie carries only the token. Each session tracks the signed-in
//! username and an optional one-shot flash message.
//!
//! Flash messages are consumed with [`Session::take_flash`], a read-and-clear
//! operation: the next rendered page displays the message once and it is
//! gone for every request after that.

use std::collections::HashMap;
use std::sync::Arc;

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "docshelf_session";

// =============================================================================
// Session Store
// =============================================================================

/// Per-session state held server-side.
#[derive(Debug, Default, Clone)]
struct SessionData {
    username: Option<String>,
    flash: Option<String>,
}

/// Shared store of all live sessions.
///
/// Cheap to clone; clones share the same session map. Sessions have no
/// expiry: the map lives for the lifetime of the process.
#[derive(Debug, Default, Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, SessionData>>>,
}

impl SessionStore {
    /// Create an empty session store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the session named by the request's cookie, creating a fresh one
    /// (and adding its cookie to the jar) when the request carried none.
    ///
    /// The returned jar must be included in the response so a fresh cookie
    /// reaches the client.
    pub async fn attach(&self, jar: CookieJar) -> (Session, CookieJar) {
        if let Some(cookie) = jar.get(SESSION_COOKIE) {
            let token = cookie.value().to_string();
            if self.sessions.read().await.contains_key(&token) {
                return (self.session(&token), jar);
            }
        }

        let token = self.create().await;
        let cookie = Cookie::build((SESSION_COOKIE, token.clone()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build();

        (self.session(&token), jar.add(cookie))
    }

    /// Create a new anonymous session and return its token.
    pub async fn create(&self) -> String {
        let token = Uuid::new_v4().to_string();
        self.sessions
            .write()
            .await
            .insert(token.clone(), SessionData::default());
        token
    }

    /// Handle to the session with the given token.
    pub fn session(&self, token: &str) -> Session {
        Session {
            token: token.to_string(),
            store: self.clone(),
        }
    }
}

// =============================================================================
// Session Handle
// =============================================================================

/// Handle to one client's session.
///
/// All reads and writes go through the shared store, so every handler
/// touching the same token observes the same state.
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
    store: SessionStore,
}

impl Session {
    /// Token identifying this session (the cookie value).
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The signed-in username, if any.
    pub async fn username(&self) -> Option<String> {
        let sessions = self.store.sessions.read().await;
        sessions.get(&self.token).and_then(|s| s.username.clone())
    }

    /// Whether this session is signed in.
    pub async fn is_authenticated(&self) -> bool {
        self.username().await.is_some()
    }

    /// Record a successful sign-in.
    pub async fn sign_in(&self, username: &str) {
        let mut sessions = self.store.sessions.write().await;
        sessions.entry(self.token.clone()).or_default().username = Some(username.to_string());
    }

    /// Clear the signed-in username, returning the session to anonymous.
    pub async fn sign_out(&self) {
        let mut sessions = self.store.sessions.write().await;
        if let Some(data) = sessions.get_mut(&self.token) {
            data.username = None;
        }
    }

    /// Set the flash message shown by the next rendered page.
    pub async fn set_flash(&self, message: impl Into<String>) {
        let mut sessions = self.store.sessions.write().await;
        sessions.entry(self.token.clone()).or_default().flash = Some(message.into());
    }

    /// Take the pending flash message, clearing it.
    pub async fn take_flash(&self) -> Option<String> {
        let mut sessions = self.store.sessions.write().await;
        sessions.get_mut(&self.token).and_then(|s| s.flash.take())
    }
}

// =============================================================================
// Tests
// =============================================================================
