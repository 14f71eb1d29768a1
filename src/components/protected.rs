//! Route guard wrapper for signed-in areas.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::util::auth::{GuardOutcome, guard_outcome, redirect_options};

/// Renders `children` only for a signed-in user whose role is in `roles`
/// (any role when omitted). Shows a spinner until the session is restored
/// and otherwise replaces the history entry with `/login` or `/dashboard`.
#[component]
pub fn Protected(#[prop(optional)] roles: Option<&'static [Role]>, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    move || {
        let state = auth.get();
        match guard_outcome(&state, roles) {
            GuardOutcome::Loading => view! {
                <div class="page-loading">
                    <div class="spinner" aria-label="Loading"></div>
                </div>
            }
            .into_any(),
            GuardOutcome::Redirect(path) => view! {
                <Redirect path=path options=redirect_options()/>
            }
            .into_any(),
            GuardOutcome::Render => children().into_any(),
        }
    }
}
