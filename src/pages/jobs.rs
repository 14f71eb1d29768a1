//! Browse page: URL-driven filters over the job catalogue.
//!
//! The query string is the source of truth. Every filter edit rewrites
//! the URL (replacing the history entry), which re-derives `filters` and
//! refetches the listing.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use std::collections::HashSet;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::job_card::JobCard;
use crate::config::PortalConfig;
use crate::net::api;
use crate::net::types::JobType;
use crate::util::job_filter::{EXPERIENCE_OPTIONS, FilterField, JobFilters, SALARY_OPTIONS};

/// Flip membership of `id`. Returns whether it is now saved.
pub fn toggle_saved(saved: &mut HashSet<String>, id: String) -> bool {
    if saved.remove(&id) {
        false
    } else {
        saved.insert(id);
        true
    }
}

/// `(value, label)` pairs for the job type select, "all" first.
pub fn job_type_options() -> Vec<(&'static str, &'static str)> {
    std::iter::once(("", "All Types")).chain(JobType::ALL.into_iter().map(|t| (t.as_str(), t.label()))).collect()
}

pub fn results_label(count: usize) -> String {
    match count {
        1 => "1 job found".to_owned(),
        n => format!("{n} jobs found"),
    }
}

#[component]
pub fn JobListPage() -> impl IntoView {
    let config = expect_context::<PortalConfig>();
    let location = use_location();
    let navigate = use_navigate();

    let filters = Memo::new(move |_| JobFilters::from_query(&location.search.get()));
    let show_filters = RwSignal::new(false);
    let saved = RwSignal::new(HashSet::<String>::new());

    let jobs = LocalResource::new(move || {
        let filters = filters.get();
        let config = config.clone();
        async move { api::fetch_jobs(&config, &filters).await }
    });

    let replace_query = Callback::new(move |next: JobFilters| {
        navigate(&next.jobs_href(), NavigateOptions { replace: true, ..NavigateOptions::default() });
    });
    let set_filter = Callback::new(move |(field, value): (FilterField, String)| {
        replace_query.run(filters.get_untracked().with(field, value));
    });

    let on_toggle_save = Callback::new(move |id: String| {
        saved.update(|set| {
            toggle_saved(set, id);
        });
    });

    view! {
        <Title text="Browse Jobs - Zidio Jobs"/>
        <div class="jobs-page">
            <header class="jobs-page__header">
                <h1>"Find Jobs"</h1>
                <div class="jobs-page__search">
                    <input
                        class="input"
                        type="search"
                        placeholder="Search by title, company, or skill"
                        prop:value=move || filters.with(|f| f.search.clone())
                        on:input=move |ev| set_filter.run((FilterField::Search, event_target_value(&ev)))
                    />
                    <input
                        class="input"
                        type="text"
                        placeholder="Location"
                        prop:value=move || filters.with(|f| f.location.clone())
                        on:input=move |ev| set_filter.run((FilterField::Location, event_target_value(&ev)))
                    />
                    <button class="btn btn--ghost" on:click=move |_| show_filters.update(|open| *open = !*open)>
                        "Filters"
                    </button>
                </div>
            </header>

            <Show when=move || show_filters.get()>
                <div class="jobs-page__filters">
                    <FilterSelect label="Job Type" field=FilterField::Type options=job_type_options() filters=filters on_change=set_filter/>
                    <FilterSelect
                        label="Experience"
                        field=FilterField::Experience
                        options=EXPERIENCE_OPTIONS.to_vec()
                        filters=filters
                        on_change=set_filter
                    />
                    <FilterSelect label="Salary" field=FilterField::Salary options=SALARY_OPTIONS.to_vec() filters=filters on_change=set_filter/>
                </div>
            </Show>

            <div class="jobs-page__summary">
                <span>{move || jobs.get().map_or_else(|| "Searching...".to_owned(), |list| results_label(list.len()))}</span>
                <Show when=move || filters.with(|f| !f.is_empty())>
                    <button class="btn btn--link" on:click=move |_| replace_query.run(JobFilters::default())>"Clear all filters"</button>
                </Show>
            </div>

            <Suspense fallback=move || view! { <JobListSkeleton/> }>
                {move || {
                    jobs.get()
                        .map(|list| {
                            if list.is_empty() {
                                view! {
                                    <div class="empty-state">
                                        <h2>"No jobs found"</h2>
                                        <p>"Try adjusting your search or filters."</p>
                                    </div>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="jobs-page__list">
                                        {list
                                            .into_iter()
                                            .map(|job| {
                                                let id = job.id.clone();
                                                let is_saved = Signal::derive(move || saved.with(|s| s.contains(&id)));
                                                view! { <JobCard job=job saved=is_saved on_toggle_save=on_toggle_save/> }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// Select bound to one filter field.
#[component]
fn FilterSelect(
    label: &'static str,
    field: FilterField,
    options: Vec<(&'static str, &'static str)>,
    filters: Memo<JobFilters>,
    on_change: Callback<(FilterField, String)>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <select class="input" on:change=move |ev| on_change.run((field, event_target_value(&ev)))>
                {options
                    .into_iter()
                    .map(|(value, text)| {
                        view! {
                            <option value=value selected=move || filters.with(|f| f.get(field) == value)>
                                {text}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}

#[component]
fn JobListSkeleton() -> impl IntoView {
    view! {
        <div class="jobs-page__list">
            {(0..3).map(|_| view! { <div class="job-card job-card--skeleton"></div> }).collect::<Vec<_>>()}
        </div>
    }
}
