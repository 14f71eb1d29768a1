//! Recruiter post-job form with skill tags, preview, and draft save.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validation and payload building live in `util::job_form`. This page
//! binds inputs to a `JobDraft` signal and picks the create path: the API in
//! remote mode, a simulated record in demo mode. On success it sets a flash
//! message and returns to `/recruiter`.

use leptos::prelude::*;
use leptos_meta::Title;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::config::PortalConfig;
#[cfg(feature = "hydrate")]
use crate::config::ApiMode;
#[cfg(feature = "hydrate")]
use crate::net::api;
#[cfg(feature = "hydrate")]
use crate::net::error::ApiError;
use crate::net::types::JobType;
#[cfg(feature = "hydrate")]
use crate::net::types::{Job, NewJob};
use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::state::ui::Flash;
#[cfg(feature = "hydrate")]
use crate::util::job_form::{SubmitError, simulate_created_job, submit_job};
use crate::util::format::job_type_badge;
use crate::util::job_form::{EXPERIENCE_LEVELS, FieldErrors, FormField, JobDraft, SubmitMode, format_date, lines, today};

#[cfg(feature = "hydrate")]
async fn create_posting(config: PortalConfig, token: String, poster: String, job: NewJob, today: time::Date) -> Result<Job, ApiError> {
    match config.api_mode {
        ApiMode::Demo => Ok(simulate_created_job(job, &poster, today)),
        ApiMode::Remote => api::create_job(&config, &token, &job).await,
    }
}

#[component]
pub fn PostJobPage() -> impl IntoView {
    let config = expect_context::<PortalConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    let flash = expect_context::<RwSignal<Flash>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let draft = RwSignal::new(JobDraft::default());
    let errors = RwSignal::new(FieldErrors::new());
    let skill_input = RwSignal::new(String::new());
    let preview = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let failure = RwSignal::new(None::<String>);

    let submit = Callback::new(move |mode: SubmitMode| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        failure.set(None);
        let snapshot = draft.get_untracked();
        let today = today();

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let navigate = navigate.clone();
            let (token, poster) = auth.with_untracked(|a| {
                (a.token().unwrap_or_default().to_owned(), a.user().map(|u| u.id.clone()).unwrap_or_default())
            });
            leptos::task::spawn_local(async move {
                let result = submit_job(&snapshot, mode, today, |job| create_posting(config, token, poster, job, today)).await;
                match result {
                    Ok(job) => {
                        log::info!("job {} saved with status {}", job.id, job.status.label());
                        flash.set(Flash::show(mode.success_message(), "/recruiter"));
                        navigate("/recruiter", NavigateOptions::default());
                    }
                    Err(SubmitError::Invalid(found)) => {
                        errors.set(found);
                        preview.set(false);
                    }
                    Err(SubmitError::Api(e)) => failure.set(Some(format!("Failed to save job: {e}"))),
                }
                busy.set(false);
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, auth, snapshot, today, mode);
            busy.set(false);
        }
    });

    let add_skill = move || {
        let raw = skill_input.get_untracked();
        let mut added = false;
        draft.update(|d| added = d.add_skill(&raw));
        if added {
            skill_input.set(String::new());
            errors.update(|e| {
                e.remove(&FormField::Skills);
            });
        }
    };

    let on_publish = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit.run(SubmitMode::Publish);
    };

    let tomorrow = today().next_day().map(format_date).unwrap_or_default();

    view! {
        <Title text="Post a Job - Zidio Jobs"/>
        <div class="post-job">
            <header class="dashboard__heading">
                <div>
                    <a class="job-detail__back" href="/recruiter">"\u{2190} Back to dashboard"</a>
                    <h1>"Post a New Job"</h1>
                </div>
                <button class="btn btn--ghost" type="button" on:click=move |_| preview.update(|p| *p = !*p)>
                    {move || if preview.get() { "Edit" } else { "Preview" }}
                </button>
            </header>

            <Show when=move || failure.with(Option::is_some)>
                <p class="auth-card__error" role="alert">{move || failure.get().unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || preview.get()
                fallback=move || {
                    view! {
                        <form class="panel post-job__form" on:submit=on_publish>
                            <h2>"Basic Information"</h2>
                            <DraftInput label="Job Title" field=FormField::Title draft=draft errors=errors placeholder="e.g. Senior Software Engineer"/>
                            <div class="post-job__row">
                                <DraftInput label="Company" field=FormField::Company draft=draft errors=errors/>
                                <DraftInput label="Location" field=FormField::Location draft=draft errors=errors placeholder="e.g. Remote, New York, NY"/>
                            </div>
                            <div class="post-job__row">
                                <DraftInput label="Salary Range" field=FormField::Salary draft=draft errors=errors placeholder="e.g. $80,000 - $120,000"/>
                                <label class="form-field">
                                    <span class="form-field__label">"Job Type"</span>
                                    <select
                                        class="input"
                                        on:change=move |ev| {
                                            if let Some(t) = JobType::parse(&event_target_value(&ev)) {
                                                draft.update(|d| d.job_type = t);
                                            }
                                        }
                                    >
                                        {JobType::ALL
                                            .into_iter()
                                            .map(|t| {
                                                view! {
                                                    <option value=t.as_str() selected=move || draft.with(|d| d.job_type == t)>
                                                        {t.label()}
                                                    </option>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </select>
                                </label>
                            </div>
                            <label class="form-field">
                                <span class="form-field__label">"Experience Level"</span>
                                <select
                                    class="input"
                                    class:input--invalid=move || errors.with(|e| e.contains_key(&FormField::Experience))
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        draft.update(|d| d.experience = value);
                                        errors.update(|e| {
                                            e.remove(&FormField::Experience);
                                        });
                                    }
                                >
                                    <option value="" selected=move || draft.with(|d| d.experience.is_empty())>"Select level"</option>
                                    {EXPERIENCE_LEVELS
                                        .into_iter()
                                        .map(|level| {
                                            view! {
                                                <option value=level selected=move || draft.with(|d| d.experience == level)>
                                                    {level}
                                                </option>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </select>
                                <FieldError field=FormField::Experience errors=errors/>
                            </label>

                            <h2>"Details"</h2>
                            <DraftInput label="Job Description" field=FormField::Description draft=draft errors=errors multiline=true/>
                            <DraftInput
                                label="Requirements (one per line)"
                                field=FormField::Requirements
                                draft=draft
                                errors=errors
                                multiline=true
                            />
                            <label class="form-field">
                                <span class="form-field__label">"Benefits (one per line, optional)"</span>
                                <textarea
                                    class="input"
                                    rows="4"
                                    prop:value=move || draft.with(|d| d.benefits.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        draft.update(|d| d.benefits = value);
                                    }
                                ></textarea>
                            </label>

                            <h2>"Skills"</h2>
                            <div class="post-job__skill-entry">
                                <input
                                    class="input"
                                    type="text"
                                    placeholder="Add a skill and press Enter"
                                    prop:value=move || skill_input.get()
                                    on:input=move |ev| skill_input.set(event_target_value(&ev))
                                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                        if ev.key() == "Enter" {
                                            ev.prevent_default();
                                            add_skill();
                                        }
                                    }
                                />
                                <button class="btn btn--ghost" type="button" on:click=move |_| add_skill()>"Add"</button>
                            </div>
                            <div class="job-card__skills">
                                {move || {
                                    draft
                                        .with(|d| d.skills.clone())
                                        .into_iter()
                                        .map(|skill| {
                                            let target = skill.clone();
                                            view! {
                                                <span class="chip">
                                                    {skill}
                                                    <button
                                                        class="chip__remove"
                                                        type="button"
                                                        aria-label="Remove skill"
                                                        on:click=move |_| draft.update(|d| d.remove_skill(&target))
                                                    >
                                                        "\u{00d7}"
                                                    </button>
                                                </span>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </div>
                            <FieldError field=FormField::Skills errors=errors/>

                            <h2>"Deadline"</h2>
                            <DraftInput
                                label="Application Deadline"
                                field=FormField::Deadline
                                draft=draft
                                errors=errors
                                input_type="date"
                                min=tomorrow.clone()
                            />

                            <div class="post-job__actions">
                                <button
                                    class="btn btn--ghost"
                                    type="button"
                                    disabled=move || busy.get()
                                    on:click=move |_| submit.run(SubmitMode::Draft)
                                >
                                    "Save as Draft"
                                </button>
                                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                    {move || if busy.get() { "Posting..." } else { "Post Job" }}
                                </button>
                            </div>
                        </form>
                    }
                }
            >
                <DraftPreview draft=draft/>
                <div class="post-job__actions">
                    <button class="btn btn--ghost" type="button" on:click=move |_| preview.set(false)>"Edit"</button>
                    <button
                        class="btn btn--primary"
                        type="button"
                        disabled=move || busy.get()
                        on:click=move |_| submit.run(SubmitMode::Publish)
                    >
                        "Post Job"
                    </button>
                </div>
            </Show>
        </div>
    }
}

/// Text input or textarea bound to one `JobDraft` field. Editing clears
/// that field's error.
#[component]
fn DraftInput(
    label: &'static str,
    field: FormField,
    draft: RwSignal<JobDraft>,
    errors: RwSignal<FieldErrors>,
    #[prop(optional)] multiline: bool,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional, into)] min: String,
) -> impl IntoView {
    let value = move || draft.with(|d| d.text(field).unwrap_or_default().to_owned());
    let invalid = move || errors.with(|e| e.contains_key(&field));
    let on_input = move |ev: leptos::ev::Event| {
        let next = event_target_value(&ev);
        draft.update(|d| {
            if let Some(slot) = d.text_mut(field) {
                *slot = next;
            }
        });
        errors.update(|e| {
            e.remove(&field);
        });
    };

    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            {if multiline {
                view! {
                    <textarea
                        class="input"
                        class:input--invalid=invalid
                        rows="6"
                        placeholder=placeholder
                        prop:value=value
                        on:input=on_input
                    ></textarea>
                }
                    .into_any()
            } else {
                view! {
                    <input
                        class="input"
                        class:input--invalid=invalid
                        type=input_type
                        placeholder=placeholder
                        min=(!min.is_empty()).then_some(min)
                        prop:value=value
                        on:input=on_input
                    />
                }
                    .into_any()
            }}
            <FieldError field=field errors=errors/>
        </label>
    }
}

#[component]
fn FieldError(field: FormField, errors: RwSignal<FieldErrors>) -> impl IntoView {
    move || {
        errors
            .with(|e| e.get(&field).copied())
            .map(|message| view! { <p class="form-field__error">{message}</p> })
    }
}

/// The draft rendered the way a seeker will see it.
#[component]
fn DraftPreview(draft: RwSignal<JobDraft>) -> impl IntoView {
    move || {
        let d = draft.get();
        let bullets = |text: &str| lines(text).into_iter().map(|l| view! { <li>{l}</li> }).collect::<Vec<_>>();
        let requirements = bullets(&d.requirements);
        let benefits = bullets(&d.benefits);
        view! {
            <article class="panel job-detail__main">
                <header class="job-detail__header">
                    <h1>{d.title}</h1>
                    <p class="job-detail__company">{d.company}</p>
                    <div class="job-detail__meta">
                        <span>{d.location}</span>
                        <span>{d.salary}</span>
                        <span>{d.experience}</span>
                        <span class=job_type_badge(d.job_type)>{d.job_type.label()}</span>
                    </div>
                </header>
                <section class="job-detail__section">
                    <h2>"Description"</h2>
                    <p>{d.description}</p>
                </section>
                <section class="job-detail__section">
                    <h2>"Requirements"</h2>
                    <ul>{requirements}</ul>
                </section>
                {(!benefits.is_empty()).then(|| view! {
                    <section class="job-detail__section">
                        <h2>"Benefits"</h2>
                        <ul>{benefits}</ul>
                    </section>
                })}
                <section class="job-detail__section">
                    <h2>"Skills"</h2>
                    <div class="job-card__skills">
                        {d.skills.into_iter().map(|s| view! { <span class="chip">{s}</span> }).collect::<Vec<_>>()}
                    </div>
                </section>
                <p class="list__muted">{format!("Apply by {}", d.deadline)}</p>
            </article>
        }
    }
}
