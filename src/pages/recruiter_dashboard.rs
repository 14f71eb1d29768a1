//! Recruiter dashboard: postings, incoming applications, and pipeline.

#[cfg(test)]
#[path = "recruiter_dashboard_test.rs"]
mod recruiter_dashboard_test;

use leptos::prelude::*;

use crate::components::stat_card::StatGrid;
use crate::components::tab_bar::TabBar;
use crate::net::sample;
use crate::net::types::{Application, ApplicationStatus};
use crate::pages::dashboard::DashboardHeading;
use crate::state::ui::RecruiterTab;
use crate::util::dashboard_actions::{DashboardAction, dispatch_demo};
use crate::util::format::{application_status_badge, display_date, job_status_badge};

const PIPELINE: [ApplicationStatus; 4] =
    [ApplicationStatus::Pending, ApplicationStatus::Reviewed, ApplicationStatus::Accepted, ApplicationStatus::Rejected];

/// Applications per status, in pipeline order.
pub fn status_counts(applications: &[Application]) -> [(ApplicationStatus, usize); 4] {
    PIPELINE.map(|status| (status, applications.iter().filter(|a| a.status == status).count()))
}

/// Number of applications received for `job_id`.
pub fn applicant_count(applications: &[Application], job_id: &str) -> usize {
    applications.iter().filter(|a| a.job_id == job_id).count()
}

#[component]
pub fn RecruiterDashboard() -> impl IntoView {
    let tab = RwSignal::new(RecruiterTab::default());

    view! {
        <div class="dashboard">
            <DashboardHeading title="Recruiter Dashboard" subtitle="Manage your postings and applicants".to_owned()>
                <a class="btn btn--primary" href="/recruiter/post-job">"Post New Job"</a>
            </DashboardHeading>
            <TabBar active=tab/>
            {move || match tab.get() {
                RecruiterTab::Overview => view! { <Overview/> }.into_any(),
                RecruiterTab::Jobs => view! { <JobTable/> }.into_any(),
                RecruiterTab::Applications => view! { <ApplicationReview/> }.into_any(),
                RecruiterTab::Candidates => view! { <Pipeline/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn Overview() -> impl IntoView {
    view! {
        <StatGrid stats=sample::recruiter_stats().to_vec()/>
        <section class="panel">
            <h2>"Recent Applications"</h2>
            <ApplicationReview/>
        </section>
    }
}

#[component]
fn JobTable() -> impl IntoView {
    let applications = sample::recruiter_applications();

    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Title"</th>
                    <th>"Posted"</th>
                    <th>"Deadline"</th>
                    <th>"Applicants"</th>
                    <th>"Status"</th>
                </tr>
            </thead>
            <tbody>
                {sample::recruiter_jobs()
                    .into_iter()
                    .map(|job| {
                        let applicants = applicant_count(&applications, &job.id);
                        view! {
                            <tr>
                                <td><a href=format!("/jobs/{}", job.id)>{job.title}</a></td>
                                <td>{display_date(&job.posted_date)}</td>
                                <td>{display_date(&job.deadline)}</td>
                                <td>{applicants}</td>
                                <td><span class=job_status_badge(job.status)>{job.status.label()}</span></td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

#[component]
fn ApplicationReview() -> impl IntoView {
    view! {
        <ul class="list">
            {sample::recruiter_applications()
                .into_iter()
                .map(|app| {
                    let (name, email) = app.user.map(|u| (u.name, u.email)).unwrap_or_default();
                    let position = app.job.map(|j| j.title).unwrap_or_default();
                    let accept = DashboardAction::AcceptApplication(app.id.clone());
                    let reject = DashboardAction::RejectApplication(app.id);
                    view! {
                        <li class="list__row">
                            <div>
                                <strong>{name}</strong>
                                <p class="list__muted">{email}</p>
                            </div>
                            <div>
                                <span>{position}</span>
                                <p class="list__muted">{format!("Applied {}", display_date(&app.applied_date))}</p>
                            </div>
                            <span class=application_status_badge(app.status)>{app.status.label()}</span>
                            <div class="list__actions">
                                <a class="btn btn--ghost btn--small" href=app.resume_url target="_blank">"Resume"</a>
                                <button class="btn btn--success btn--small" on:click=move |_| {
                                    dispatch_demo(&accept);
                                }>"Accept"</button>
                                <button class="btn btn--danger btn--small" on:click=move |_| {
                                    dispatch_demo(&reject);
                                }>"Reject"</button>
                            </div>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}

#[component]
fn Pipeline() -> impl IntoView {
    let counts = status_counts(&sample::recruiter_applications());

    view! {
        <div class="pipeline">
            {counts
                .into_iter()
                .map(|(status, count)| {
                    view! {
                        <div class="pipeline__stage">
                            <span class=application_status_badge(status)>{status.label()}</span>
                            <span class="pipeline__count">{count}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
