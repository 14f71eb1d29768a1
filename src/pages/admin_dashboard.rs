//! Admin dashboard: users, job approvals, and content moderation.

#[cfg(test)]
#[path = "admin_dashboard_test.rs"]
mod admin_dashboard_test;

use leptos::prelude::*;

use crate::components::stat_card::StatGrid;
use crate::components::tab_bar::TabBar;
use crate::net::sample;
use crate::net::types::{Job, User};
use crate::pages::dashboard::DashboardHeading;
use crate::state::ui::AdminTab;
use crate::util::dashboard_actions::{DashboardAction, dispatch_demo};
use crate::util::format::{display_date, role_badge};

/// Users whose name or email contains `term`, ignoring case.
pub fn filter_users(users: &[User], term: &str) -> Vec<User> {
    let needle = term.trim().to_lowercase();
    users
        .iter()
        .filter(|u| needle.is_empty() || u.name.to_lowercase().contains(&needle) || u.email.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let tab = RwSignal::new(AdminTab::default());

    view! {
        <div class="dashboard">
            <DashboardHeading title="Admin Dashboard" subtitle="Platform overview and moderation".to_owned()/>
            <TabBar active=tab/>
            {move || match tab.get() {
                AdminTab::Overview => view! { <Overview/> }.into_any(),
                AdminTab::Users => view! { <UserManagement/> }.into_any(),
                AdminTab::Jobs => view! { <JobApprovals/> }.into_any(),
                AdminTab::Moderation => view! { <Moderation/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn Overview() -> impl IntoView {
    view! {
        <StatGrid stats=sample::admin_stats().to_vec()/>
        <div class="dashboard__columns">
            <section class="panel">
                <h2>"Recent Users"</h2>
                <UserTable users=Signal::derive(sample::recent_users)/>
            </section>
            <section class="panel">
                <h2>"Pending Job Approvals"</h2>
                <JobApprovals/>
            </section>
        </div>
    }
}

#[component]
fn UserManagement() -> impl IntoView {
    let term = RwSignal::new(String::new());
    let all = sample::recent_users();
    let users = Signal::derive(move || term.with(|t| filter_users(&all, t)));

    view! {
        <section class="panel">
            <input
                class="input"
                type="search"
                placeholder="Search users by name or email"
                prop:value=move || term.get()
                on:input=move |ev| term.set(event_target_value(&ev))
            />
            <UserTable users=users/>
        </section>
    }
}

#[component]
fn UserTable(users: Signal<Vec<User>>) -> impl IntoView {
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Role"</th>
                    <th>"Joined"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    users
                        .get()
                        .into_iter()
                        .map(|user| {
                            let delete = DashboardAction::DeleteUser(user.id.clone());
                            view! {
                                <tr>
                                    <td>{user.name}</td>
                                    <td>{user.email}</td>
                                    <td><span class=role_badge(user.role)>{user.role.label()}</span></td>
                                    <td>{display_date(&user.created_at)}</td>
                                    <td>
                                        <button class="btn btn--danger btn--small" on:click=move |_| {
                                            dispatch_demo(&delete);
                                        }>"Delete"</button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
    }
}

#[component]
fn JobApprovals() -> impl IntoView {
    let pending = sample::pending_jobs();
    if pending.is_empty() {
        return view! { <p class="empty-state">"Nothing awaiting approval."</p> }.into_any();
    }
    view! { <ul class="list">{pending.into_iter().map(|job| view! { <ApprovalRow job=job/> }).collect::<Vec<_>>()}</ul> }
        .into_any()
}

#[component]
fn ApprovalRow(job: Job, #[prop(optional)] flag_reason: Option<&'static str>) -> impl IntoView {
    let approve = DashboardAction::ApproveJob(job.id.clone());
    let reject = DashboardAction::RejectJob(job.id.clone());

    view! {
        <li class="list__row" class:list__row--flagged=flag_reason.is_some()>
            <div>
                {flag_reason.map(|reason| view! { <strong class="list__flag">{reason}</strong> })}
                <a href=format!("/jobs/{}", job.id)>{job.title}</a>
                <p class="list__muted">{job.company} " \u{00b7} " {format!("Posted {}", display_date(&job.posted_date))}</p>
            </div>
            <div class="list__actions">
                <button class="btn btn--success btn--small" on:click=move |_| {
                    dispatch_demo(&approve);
                }>"Approve"</button>
                <button class="btn btn--danger btn--small" on:click=move |_| {
                    dispatch_demo(&reject);
                }>"Reject"</button>
            </div>
        </li>
    }
}

#[component]
fn Moderation() -> impl IntoView {
    view! {
        <section class="panel">
            <h2>"Flagged Content"</h2>
            <p class="list__muted">"Postings reported by users, awaiting a decision."</p>
            <ul class="list">
                {sample::pending_jobs()
                    .into_iter()
                    .map(|job| view! { <ApprovalRow job=job flag_reason="Inappropriate job description"/> })
                    .collect::<Vec<_>>()}
            </ul>
        </section>
    }
}
