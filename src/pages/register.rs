//! Sign-up page for job seekers and recruiters.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_meta::Title;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::types::{RegisterRequest, Role};
#[cfg(feature = "hydrate")]
use crate::state::auth::AuthState;
use crate::state::session::SessionStore;
#[cfg(feature = "hydrate")]
use crate::util::auth::DASHBOARD_PATH;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Checks the form can make before handing off to the session store.
pub fn validate_passwords(password: &str, confirm: &str) -> Result<(), &'static str> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(())
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    #[cfg(feature = "hydrate")]
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let role = RwSignal::new(Role::JobSeeker);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if let Err(msg) = validate_passwords(&password.get(), &confirm.get()) {
            error.set(Some(msg.to_owned()));
            return;
        }
        let req = RegisterRequest { name: name.get(), email: email.get(), password: password.get(), role: role.get() };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match store.register(req).await {
                    Ok(session) => {
                        log::info!("registered {} as {}", session.user.email, session.user.role.as_str());
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
            let _ = (&store, req);
            busy.set(false);
        }
    };

    let text_input = move |label: &'static str, kind: &'static str, autocomplete: &'static str, value: RwSignal<String>| {
        view! {
            <label class="form-field">
                <span class="form-field__label">{label}</span>
                <input
                    class="input"
                    type=kind
                    autocomplete=autocomplete
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <Title text="Create Account - Zidio Jobs"/>
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1 class="auth-card__title">"Create your account"</h1>
                <p class="auth-card__subtitle">"Find work or hire, it takes a minute."</p>

                <Show when=move || error.with(Option::is_some)>
                    <p class="auth-card__error" role="alert">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <div class="role-picker" role="radiogroup">
                    {Role::ALL
                        .into_iter()
                        .filter(|r| r.is_self_registrable())
                        .map(|r| {
                            view! {
                                <button
                                    type="button"
                                    class="role-picker__option"
                                    class:role-picker__option--active=move || role.get() == r
                                    on:click=move |_| role.set(r)
                                >
                                    {match r {
                                        Role::Recruiter => "I'm hiring",
                                        _ => "I'm looking for a job",
                                    }}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                {text_input("Full name", "text", "name", name)}
                {text_input("Email", "email", "email", email)}
                {text_input("Password", "password", "new-password", password)}
                {text_input("Confirm password", "password", "new-password", confirm)}

                <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                </button>

                <p class="auth-card__switch">
                    "Already have an account? " <a href="/login">"Sign in"</a>
                </p>
            </form>
        </div>
    }
}
