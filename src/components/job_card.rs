//! Listing card for a single job on the browse page.

use leptos::prelude::*;

use crate::net::types::Job;
use crate::util::format::{CARD_SKILL_LIMIT, display_date, job_type_badge, skill_preview};

/// Summary card linking to `/jobs/{id}`, with a save toggle.
#[component]
pub fn JobCard(job: Job, #[prop(into)] saved: Signal<bool>, on_toggle_save: Callback<String>) -> impl IntoView {
    let href = format!("/jobs/{}", job.id);
    let id = job.id.clone();
    let (shown, rest) = skill_preview(&job.skills, CARD_SKILL_LIMIT);
    let skills = shown.to_vec();

    view! {
        <article class="job-card">
            <header class="job-card__header">
                <div>
                    <a class="job-card__title" href=href.clone()>{job.title.clone()}</a>
                    <p class="job-card__company">{job.company.clone()}</p>
                </div>
                <button
                    class="job-card__save"
                    class:job-card__save--active=move || saved.get()
                    title=move || if saved.get() { "Remove from saved" } else { "Save job" }
                    on:click=move |_| on_toggle_save.run(id.clone())
                >
                    {move || if saved.get() { "\u{2665}" } else { "\u{2661}" }}
                </button>
            </header>

            <div class="job-card__meta">
                <span>{job.location.clone()}</span>
                <span>{job.salary.clone()}</span>
                <span>{job.experience.clone()}</span>
                <span class=job_type_badge(job.job_type)>{job.job_type.label()}</span>
            </div>

            <p class="job-card__description">{job.description.clone()}</p>

            <div class="job-card__skills">
                {skills.into_iter().map(|skill| view! { <span class="chip">{skill}</span> }).collect::<Vec<_>>()}
                {(rest > 0).then(|| view! { <span class="chip chip--muted">{format!("+{rest} more")}</span> })}
            </div>

            <footer class="job-card__footer">
                <span class="job-card__posted">{format!("Posted {}", display_date(&job.posted_date))}</span>
                <a class="btn btn--primary btn--small" href=href>"View Details"</a>
            </footer>
        </article>
    }
}
