//! `/dashboard`: picks the dashboard for the signed-in user's role.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::net::types::Role;
use crate::pages::admin_dashboard::AdminDashboard;
use crate::pages::recruiter_dashboard::RecruiterDashboard;
use crate::pages::seeker_dashboard::SeekerDashboard;
use crate::state::auth::AuthState;

/// Rendered inside `Protected`, so a user is present. A missing role falls
/// back to the job seeker view.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    move || match auth.with(AuthState::role) {
        Some(Role::Admin) => view! { <AdminDashboard/> }.into_any(),
        Some(Role::Recruiter) => view! { <RecruiterDashboard/> }.into_any(),
        Some(Role::JobSeeker) | None => view! { <SeekerDashboard/> }.into_any(),
    }
}

/// Title block shared by the dashboards.
#[component]
pub fn DashboardHeading(title: &'static str, #[prop(into)] subtitle: Signal<String>, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <Title text=format!("{title} - Zidio Jobs")/>
        <header class="dashboard__heading">
            <div>
                <h1>{title}</h1>
                <p class="dashboard__subtitle">{move || subtitle.get()}</p>
            </div>
            {children.map(|c| view! { <div class="dashboard__actions">{c()}</div> })}
        </header>
    }
}
