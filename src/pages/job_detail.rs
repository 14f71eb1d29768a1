//! Job detail page with save and apply.

#[cfg(test)]
#[path = "job_detail_test.rs"]
mod job_detail_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::config::PortalConfig;
use crate::net::api;
use crate::net::types::{Application, ApplicationStatus, Job};
use crate::state::auth::AuthState;
use crate::state::ui::Flash;
use crate::util::auth::LOGIN_PATH;
use crate::util::format::{display_date, job_type_badge};
use crate::util::job_form::{format_date, today};

/// Blank-line separated paragraphs of a description.
pub fn paragraphs(text: &str) -> Vec<String> {
    text.split("\n\n").map(str::trim).filter(|p| !p.is_empty()).map(str::to_owned).collect()
}

/// Application record for the apply dialog. A resume reference is required.
pub fn build_application(job: &Job, user_id: &str, cover_letter: &str, resume: &str, applied: &str) -> Result<Application, &'static str> {
    let resume = resume.trim();
    if resume.is_empty() {
        return Err("Please attach your resume.");
    }
    Ok(Application {
        id: uuid::Uuid::new_v4().to_string(),
        job_id: job.id.clone(),
        user_id: user_id.to_owned(),
        resume_url: resume.to_owned(),
        cover_letter: cover_letter.trim().to_owned(),
        status: ApplicationStatus::Pending,
        applied_date: applied.to_owned(),
        job: Some(job.clone()),
        user: None,
    })
}

#[component]
pub fn JobDetailPage() -> impl IntoView {
    let config = expect_context::<PortalConfig>();
    let params = use_params_map();

    let job = LocalResource::new(move || {
        let id = params.with(|p| p.get("id")).unwrap_or_default();
        let config = config.clone();
        async move { api::fetch_job(&config, &id).await }
    });

    view! {
        <Suspense fallback=move || view! { <div class="page-loading"><div class="spinner"></div></div> }>
            {move || {
                job.get()
                    .map(|found| match found {
                        Some(job) => view! { <JobDetail job=job/> }.into_any(),
                        None => view! { <JobNotFound/> }.into_any(),
                    })
            }}
        </Suspense>
    }
}

#[component]
fn JobNotFound() -> impl IntoView {
    view! {
        <Title text="Job not found - Zidio Jobs"/>
        <div class="empty-state">
            <h1>"Job not found"</h1>
            <p>"This posting may have been removed or the link is wrong."</p>
            <a class="btn btn--primary" href="/jobs">"Back to jobs"</a>
        </div>
    }
}

#[component]
fn JobDetail(job: Job) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let flash = expect_context::<RwSignal<Flash>>();
    let navigate = use_navigate();

    let saved = RwSignal::new(false);
    let applied = RwSignal::new(false);
    let dialog_open = RwSignal::new(false);
    let detail_path = StoredValue::new(format!("/jobs/{}", job.id));

    let on_apply = Callback::new(move |()| {
        if auth.with(AuthState::is_authenticated) {
            dialog_open.set(true);
        } else {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });

    let on_submitted = Callback::new(move |()| {
        dialog_open.set(false);
        applied.set(true);
        flash.set(Flash::show("Application submitted successfully!", detail_path.get_value()));
    });

    let title = format!("{} at {} - Zidio Jobs", job.title, job.company);
    let body = paragraphs(&job.description);
    let dialog_job = StoredValue::new(job.clone());

    view! {
        <Title text=title/>
        <div class="job-detail">
            <a class="job-detail__back" href="/jobs">"\u{2190} Back to jobs"</a>

            <div class="job-detail__grid">
                <article class="job-detail__main">
                    <header class="job-detail__header">
                        <h1>{job.title.clone()}</h1>
                        <p class="job-detail__company">{job.company.clone()}</p>
                        <div class="job-detail__meta">
                            <span>{job.location.clone()}</span>
                            <span>{job.salary.clone()}</span>
                            <span>{job.experience.clone()}</span>
                            <span class=job_type_badge(job.job_type)>{job.job_type.label()}</span>
                        </div>
                    </header>

                    <section class="job-detail__section">
                        <h2>"About the role"</h2>
                        {body.into_iter().map(|p| view! { <p>{p}</p> }).collect::<Vec<_>>()}
                    </section>

                    <section class="job-detail__section">
                        <h2>"Skills"</h2>
                        <div class="job-card__skills">
                            {job.skills.iter().cloned().map(|s| view! { <span class="chip">{s}</span> }).collect::<Vec<_>>()}
                        </div>
                    </section>
                </article>

                <aside class="job-detail__side">
                    <div class="panel">
                        <button
                            class="btn btn--primary btn--block"
                            disabled=move || applied.get()
                            on:click=move |_| on_apply.run(())
                        >
                            {move || if applied.get() { "Applied" } else { "Apply Now" }}
                        </button>
                        <button class="btn btn--ghost btn--block" on:click=move |_| saved.update(|s| *s = !*s)>
                            {move || if saved.get() { "Saved" } else { "Save Job" }}
                        </button>
                    </div>
                    <div class="panel">
                        <dl class="job-detail__facts">
                            <dt>"Posted"</dt>
                            <dd>{display_date(&job.posted_date)}</dd>
                            <dt>"Apply by"</dt>
                            <dd>{display_date(&job.deadline)}</dd>
                            <dt>"Status"</dt>
                            <dd>{job.status.label()}</dd>
                        </dl>
                    </div>
                </aside>
            </div>

            <Show when=move || dialog_open.get()>
                <ApplyDialog job=dialog_job on_cancel=Callback::new(move |()| dialog_open.set(false)) on_submitted=on_submitted/>
            </Show>
        </div>
    }
}

/// Cover letter and resume reference, submitted as a demo application.
#[component]
fn ApplyDialog(job: StoredValue<Job>, on_cancel: Callback<()>, on_submitted: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let cover_letter = RwSignal::new(String::new());
    let resume = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let user_id = auth.with(|a| a.user().map(|u| u.id.clone()).unwrap_or_default());
        let applied = format_date(today());
        let result = job.with_value(|job| build_application(job, &user_id, &cover_letter.get(), &resume.get(), &applied));
        match result {
            Ok(application) => {
                #[cfg(feature = "hydrate")]
                log::info!("demo application {} submitted for job {}", application.id, application.job_id);
                #[cfg(not(feature = "hydrate"))]
                let _ = application;
                on_submitted.run(());
            }
            Err(msg) => error.set(Some(msg)),
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <form class="dialog" on:click=|ev| ev.stop_propagation() on:submit=on_submit>
                <h2>{move || job.with_value(|j| format!("Apply for {}", j.title))}</h2>
                <Show when=move || error.get().is_some()>
                    <p class="auth-card__error" role="alert">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <label class="form-field">
                    <span class="form-field__label">"Resume"</span>
                    <input
                        class="input"
                        type="text"
                        placeholder="Link or file name of your resume"
                        prop:value=move || resume.get()
                        on:input=move |ev| {
                            resume.set(event_target_value(&ev));
                            error.set(None);
                        }
                    />
                </label>
                <label class="form-field">
                    <span class="form-field__label">"Cover letter"</span>
                    <textarea
                        class="input"
                        rows="6"
                        placeholder="Tell the recruiter why you're a good fit"
                        prop:value=move || cover_letter.get()
                        on:input=move |ev| cover_letter.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button class="btn btn--ghost" type="button" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                    <button class="btn btn--primary" type="submit">"Submit Application"</button>
                </div>
            </form>
        </div>
    }
}
