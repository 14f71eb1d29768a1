//! Sign-in page. Demo mode lists the addresses that map to each role.

use leptos::prelude::*;
use leptos_meta::Title;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::state::auth::AuthState;
use crate::state::session::{DEMO_ADMIN_EMAIL, DEMO_RECRUITER_EMAIL, SessionStore};
#[cfg(feature = "hydrate")]
use crate::util::auth::DASHBOARD_PATH;

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let demo = store.config().is_demo();
    #[cfg(feature = "hydrate")]
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            let navigate = navigate.clone();
            let email_value = email.get();
            let password_value = password.get();
            leptos::task::spawn_local(async move {
                match store.login(&email_value, &password_value).await {
                    Ok(session) => {
                        log::info!("signed in as {}", session.user.email);
                        auth.set(AuthState::signed_in(session));
                        navigate(DASHBOARD_PATH, NavigateOptions::default());
                    }
                    Err(e) => error.set(Some(e.user_message())),
                }
                busy.set(false);
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &store;
            busy.set(false);
        }
    };

    view! {
        <Title text="Sign In - Zidio Jobs"/>
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1 class="auth-card__title">"Welcome back"</h1>
                <p class="auth-card__subtitle">"Sign in to continue your job search."</p>

                <Show when=move || error.with(Option::is_some)>
                    <p class="auth-card__error" role="alert">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <label class="form-field">
                    <span class="form-field__label">"Email"</span>
                    <input
                        class="input"
                        type="email"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span class="form-field__label">"Password"</span>
                    <input
                        class="input"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                </button>

                {demo.then(|| view! {
                    <div class="auth-card__hint">
                        <strong>"Demo accounts"</strong>
                        <p>{format!("{DEMO_ADMIN_EMAIL} signs in as an admin, {DEMO_RECRUITER_EMAIL} as a recruiter.")}</p>
                        <p>"Any other address signs in as a job seeker. Any password works."</p>
                    </div>
                })}

                <p class="auth-card__switch">
                    "New here? " <a href="/register">"Create an account"</a>
                </p>
            </form>
        </div>
    }
}
