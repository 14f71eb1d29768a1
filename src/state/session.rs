//! Session store: sign-in, sign-up, sign-out, and restore from storage.
//!
//! ARCHITECTURE
//! ============
//! `SessionStore` is a cloneable handle provided as context next to the
//! `RwSignal<AuthState>` it feeds. It owns no reactive state itself: every
//! operation returns the new `Session`/`AuthState` and the caller publishes
//! it, which keeps the store usable from plain tests.
//!
//! TRADE-OFFS
//! ==========
//! In `ApiMode::Demo` no request is made at all. Users are fabricated from
//! the submitted form. In `ApiMode::Remote` a failed call is an error for
//! the form to show; it never falls through to a fabricated user.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use super::auth::{AuthState, Session};
use crate::config::{ApiMode, PortalConfig};
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{LoginRequest, RegisterRequest, Role, User};
use crate::util::storage::SharedStorage;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const DEMO_TOKEN: &str = "mock-jwt-token";
pub const DEMO_ADMIN_EMAIL: &str = "admin@zidio.com";
pub const DEMO_RECRUITER_EMAIL: &str = "recruiter@zidio.com";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Rejected before any request was made.
    #[error("{0}")]
    Validation(&'static str),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl AuthError {
    /// Message shown above the login/register form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) => (*msg).to_owned(),
            Self::Api(e) if e.is_unauthorized() => "Invalid email or password.".to_owned(),
            Self::Api(e) => format!("Could not reach the server: {e}"),
        }
    }
}

#[derive(Clone)]
pub struct SessionStore {
    storage: SharedStorage,
    config: PortalConfig,
}

impl SessionStore {
    pub fn new(storage: SharedStorage, config: PortalConfig) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    /// Read the persisted session. A half-written or unparseable record is
    /// wiped so storage never holds a token without a user.
    pub fn restore(&self) -> AuthState {
        let token = self.storage.get(TOKEN_KEY);
        let user = self.storage.get(USER_KEY);
        match (token, user) {
            (Some(token), Some(raw)) if !token.is_empty() => match serde_json::from_str::<User>(&raw) {
                Ok(user) => AuthState::signed_in(Session { user, token }),
                Err(_) => {
                    self.clear();
                    AuthState::signed_out()
                }
            },
            (None, None) => AuthState::signed_out(),
            _ => {
                self.clear();
                AuthState::signed_out()
            }
        }
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// `AuthError::Validation` for blank fields; `AuthError::Api` when the
    /// remote call fails.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::Validation("Email and password are required."));
        }
        let session = match self.config.api_mode {
            ApiMode::Demo => Session { user: demo_user_for_email(email), token: DEMO_TOKEN.to_owned() },
            ApiMode::Remote => {
                let req = LoginRequest { email: email.to_owned(), password: password.to_owned() };
                let resp = api::login(&self.config, &req).await?;
                Session { user: resp.user, token: resp.token }
            }
        };
        self.persist(&session);
        Ok(session)
    }

    /// Create an account and sign in as it.
    ///
    /// # Errors
    ///
    /// `AuthError::Validation` for blank fields or a role that cannot sign
    /// up; `AuthError::Api` when the remote call fails.
    pub async fn register(&self, mut req: RegisterRequest) -> Result<Session, AuthError> {
        req.name = req.name.trim().to_owned();
        req.email = req.email.trim().to_owned();
        if req.name.is_empty() {
            return Err(AuthError::Validation("Name is required."));
        }
        if req.email.is_empty() || req.password.is_empty() {
            return Err(AuthError::Validation("Email and password are required."));
        }
        if !req.role.is_self_registrable() {
            return Err(AuthError::Validation("Admin accounts cannot be created from sign-up."));
        }
        let session = match self.config.api_mode {
            ApiMode::Demo => Session {
                user: User {
                    id: uuid::Uuid::new_v4().to_string(),
                    name: req.name,
                    email: req.email,
                    role: req.role,
                    profile_picture: None,
                    created_at: now_rfc3339(),
                },
                token: DEMO_TOKEN.to_owned(),
            },
            ApiMode::Remote => {
                let resp = api::register(&self.config, &req).await?;
                Session { user: resp.user, token: resp.token }
            }
        };
        self.persist(&session);
        Ok(session)
    }

    /// Forget the session in storage and return the signed-out state.
    pub fn logout(&self) -> AuthState {
        self.clear();
        AuthState::signed_out()
    }

    fn persist(&self, session: &Session) {
        let Ok(raw) = serde_json::to_string(&session.user) else {
            return;
        };
        self.storage.set(TOKEN_KEY, &session.token);
        self.storage.set(USER_KEY, &raw);
    }

    fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}

/// Deterministic demo identity for an email address.
pub fn demo_user_for_email(email: &str) -> User {
    let (name, role) = if email == DEMO_ADMIN_EMAIL {
        ("Admin User", Role::Admin)
    } else if email == DEMO_RECRUITER_EMAIL {
        ("Recruiter User", Role::Recruiter)
    } else {
        ("Job Seeker", Role::JobSeeker)
    };
    User {
        id: "1".to_owned(),
        name: name.to_owned(),
        email: email.to_owned(),
        role,
        profile_picture: None,
        created_at: now_rfc3339(),
    }
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default()
}
