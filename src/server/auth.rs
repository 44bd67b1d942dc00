//! Credential checking for docshelf.
//!
//! One admin credential pair, injected from configuration, guards every
//! mutating route. Comparison is constant-time so a response cannot leak
//! how much of a guess matched.
//!
//! The decision itself is two steps kept deliberately separate: a
//! [`Credentials::verify`] check at sign-in time, and a per-request
//! signed-in check against the session (see
//! [`Session::is_authenticated`](super::session::Session::is_authenticated)).
//! A handler that sees an unauthenticated session on a protected route
//! redirects home with [`SIGNIN_REQUIRED_MESSAGE`] as the flash.

use subtle::ConstantTimeEq;

/// Flash message shown when a protected route is hit while signed out.
pub const SIGNIN_REQUIRED_MESSAGE: &str = "You must be signed in to do that.";

/// The admin credential pair recognized as valid.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Create a credential pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The configured admin username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Check a submitted username/password pair.
    ///
    /// Both fields are compared in constant time and both comparisons always
    /// run, so timing does not reveal which field was wrong.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let username_ok = username.as_bytes().ct_eq(self.username.as_bytes());
        let password_ok = password.as_bytes().ct_eq(self.password.as_bytes());
        bool::from(username_ok & password_ok)
    }
}

// =============================================================================
// Tests
// =============================================================================
