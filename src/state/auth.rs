//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided at the app root as `RwSignal<AuthState>`. Read by the route
//! guard, the header, and every identity-aware page; written only with
//! results from `SessionStore`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::net::types::{Role, User};

/// A signed-in identity. User and token travel together, so neither can be
/// present without the other.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    /// Opaque bearer credential.
    pub token: String,
}

/// Authentication state tracking the current session and readiness.
///
/// `loading` stays `true` until durable storage has been read once in the
/// browser; SSR always renders the loading branch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: None, loading: true }
    }
}

impl AuthState {
    /// Ready and signed out.
    pub fn signed_out() -> Self {
        Self { session: None, loading: false }
    }

    pub fn signed_in(session: Session) -> Self {
        Self { session: Some(session), loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }
}
