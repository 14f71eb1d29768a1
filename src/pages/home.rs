//! Landing page: hero search, platform stats, and featured jobs.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::stat_card::StatGrid;
use crate::net::sample;
use crate::util::format::job_type_badge;
use crate::util::job_filter::JobFilters;

#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = use_navigate();
    let search = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());

    // Hand the hero fields to the browse page through its query string.
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let filters = JobFilters {
            search: search.get_untracked().trim().to_owned(),
            location: location.get_untracked().trim().to_owned(),
            ..JobFilters::default()
        };
        navigate(&filters.jobs_href(), NavigateOptions::default());
    };

    let featured = sample::featured_jobs();

    view! {
        <Title text="Zidio Jobs - Find your next role"/>
        <section class="hero">
            <h1 class="hero__title">"Find Your Dream Job Today"</h1>
            <p class="hero__subtitle">
                "Thousands of openings from companies that are hiring now. Search by role, skill, or city."
            </p>
            <form class="hero__search" on:submit=on_submit>
                <input
                    class="input"
                    type="text"
                    placeholder="Job title, keywords, or company"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <input
                    class="input"
                    type="text"
                    placeholder="City or remote"
                    prop:value=move || location.get()
                    on:input=move |ev| location.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">"Search Jobs"</button>
            </form>
        </section>

        <section class="section">
            <StatGrid stats=sample::platform_stats().to_vec()/>
        </section>

        <section class="section">
            <header class="section__header">
                <h2>"Featured Jobs"</h2>
                <a class="section__link" href="/jobs">"View all jobs"</a>
            </header>
            <div class="featured-grid">
                {featured
                    .into_iter()
                    .map(|job| {
                        let href = format!("/jobs/{}", job.id);
                        view! {
                            <a class="featured-card" href=href>
                                <span class=job_type_badge(job.job_type)>{job.job_type.label()}</span>
                                <h3 class="featured-card__title">{job.title}</h3>
                                <p class="featured-card__company">{job.company}</p>
                                <p class="featured-card__meta">{job.location} " \u{00b7} " {job.salary}</p>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>

        <section class="section cta">
            <h2>"Hiring?"</h2>
            <p>"Post openings and review applicants from one dashboard."</p>
            <a class="btn btn--primary" href="/register">"Create a recruiter account"</a>
        </section>
    }
}
