//! Route-guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same ordered checks: wait for the
//! session to load, send anonymous visitors to `/login`, and send users of
//! the wrong role to `/dashboard`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Navigation options for redirects that must not leave the bounced URL in
/// history (guards and the unknown-route fallback).
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// What a guarded route should show for the current auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session not restored yet.
    Loading,
    /// Replace the current history entry with this path.
    Redirect(&'static str),
    Render,
}

/// Decide a guarded route's outcome. `allowed = None` admits any signed-in
/// user.
pub fn guard_outcome(state: &AuthState, allowed: Option<&[Role]>) -> GuardOutcome {
    if state.loading {
        return GuardOutcome::Loading;
    }
    let Some(role) = state.role() else {
        return GuardOutcome::Redirect(LOGIN_PATH);
    };
    match allowed {
        Some(roles) if !roles.contains(&role) => GuardOutcome::Redirect(DASHBOARD_PATH),
        _ => GuardOutcome::Render,
    }
}
