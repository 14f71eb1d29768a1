//! Job seeker dashboard: applications, saved jobs, and profile.

use leptos::prelude::*;

use crate::components::stat_card::StatGrid;
use crate::components::tab_bar::TabBar;
use crate::net::sample;
use crate::net::types::Application;
use crate::pages::dashboard::DashboardHeading;
use crate::state::auth::AuthState;
use crate::state::ui::SeekerTab;
use crate::util::format::{application_status_badge, display_date, job_type_badge, role_badge};

#[component]
pub fn SeekerDashboard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let tab = RwSignal::new(SeekerTab::default());

    let greeting = Signal::derive(move || {
        auth.with(|a| a.user().map(|u| format!("Welcome back, {}!", u.name)).unwrap_or_default())
    });

    view! {
        <div class="dashboard">
            <DashboardHeading title="Dashboard" subtitle=greeting>
                <a class="btn btn--primary" href="/jobs">"Browse Jobs"</a>
            </DashboardHeading>
            <TabBar active=tab/>
            {move || match tab.get() {
                SeekerTab::Overview => view! { <Overview/> }.into_any(),
                SeekerTab::Applications => view! { <ApplicationList applications=sample::seeker_applications()/> }.into_any(),
                SeekerTab::Saved => view! { <SavedJobs/> }.into_any(),
                SeekerTab::Profile => view! { <Profile/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn Overview() -> impl IntoView {
    view! {
        <StatGrid stats=sample::seeker_stats().to_vec()/>
        <section class="panel">
            <h2>"Recent Applications"</h2>
            <ApplicationList applications=sample::seeker_applications()/>
        </section>
        <section class="panel">
            <h2>"Recommended for You"</h2>
            <ul class="list">
                {sample::featured_jobs()
                    .into_iter()
                    .map(|job| {
                        view! {
                            <li class="list__row">
                                <a href=format!("/jobs/{}", job.id)>{job.title}</a>
                                <span class="list__muted">{job.company}</span>
                                <span class=job_type_badge(job.job_type)>{job.job_type.label()}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </section>
    }
}

#[component]
fn ApplicationList(applications: Vec<Application>) -> impl IntoView {
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Position"</th>
                    <th>"Company"</th>
                    <th>"Applied"</th>
                    <th>"Status"</th>
                </tr>
            </thead>
            <tbody>
                {applications
                    .into_iter()
                    .map(|app| {
                        let (title, company) = app.job.map(|j| (j.title, j.company)).unwrap_or_default();
                        view! {
                            <tr>
                                <td><a href=format!("/jobs/{}", app.job_id)>{title}</a></td>
                                <td>{company}</td>
                                <td>{display_date(&app.applied_date)}</td>
                                <td><span class=application_status_badge(app.status)>{app.status.seeker_label()}</span></td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

#[component]
fn SavedJobs() -> impl IntoView {
    let jobs = sample::saved_jobs();
    if jobs.is_empty() {
        return view! { <p class="empty-state">"No saved jobs yet."</p> }.into_any();
    }
    view! {
        <ul class="list">
            {jobs
                .into_iter()
                .map(|job| {
                    view! {
                        <li class="list__row">
                            <div>
                                <a href=format!("/jobs/{}", job.id)>{job.title}</a>
                                <p class="list__muted">{job.company} " \u{00b7} " {job.location}</p>
                            </div>
                            <span>{job.salary}</span>
                            <a class="btn btn--primary btn--small" href=format!("/jobs/{}", job.id)>"Apply"</a>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}

#[component]
fn Profile() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    move || {
        auth.with(|a| a.user().cloned()).map(|user| {
            let initial = user.name.chars().next().map(String::from).unwrap_or_default();
            let since = display_date(user.created_at.get(..10).unwrap_or(&user.created_at));
            view! {
                <section class="panel profile">
                    <div class="profile__avatar">{initial}</div>
                    <dl class="profile__facts">
                        <dt>"Name"</dt>
                        <dd>{user.name}</dd>
                        <dt>"Email"</dt>
                        <dd>{user.email}</dd>
                        <dt>"Role"</dt>
                        <dd><span class=role_badge(user.role)>{user.role.label()}</span></dd>
                        <dt>"Member since"</dt>
                        <dd>{since}</dd>
                    </dl>
                </section>
            }
        })
    }
}
