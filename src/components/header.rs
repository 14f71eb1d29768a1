//! Top navigation bar with role-aware links and the account menu.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::state::session::SessionStore;
use crate::state::ui::Flash;

/// Site header.
///
/// Recruiters get a "Post Job" link. Signed-in users get a menu with their
/// dashboard link and sign-out; everyone else gets sign-in and sign-up.
#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<SessionStore>();
    let flash = expect_context::<RwSignal<Flash>>();
    let navigate = use_navigate();

    let menu_open = RwSignal::new(false);
    let account_open = RwSignal::new(false);

    let on_logout = Callback::new(move |()| {
        auth.set(store.logout());
        account_open.set(false);
        menu_open.set(false);
        flash.set(Flash::show("You have been signed out.", "/"));
        navigate("/", NavigateOptions::default());
    });

    let is_recruiter = move || auth.with(|a| a.role() == Some(Role::Recruiter));
    let user_name = move || auth.with(|a| a.user().map(|u| u.name.clone()).unwrap_or_default());
    let dashboard_href = move || auth.with(|a| a.role().map_or("/dashboard", Role::dashboard_path));

    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <a class="site-header__brand" href="/">
                    "Zidio Jobs"
                </a>

                <button
                    class="site-header__menu-toggle"
                    aria-label="Toggle navigation"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    "\u{2630}"
                </button>

                <nav class="site-header__nav" class:site-header__nav--open=move || menu_open.get()>
                    <a class="site-header__link" href="/jobs" on:click=move |_| menu_open.set(false)>
                        "Find Jobs"
                    </a>
                    <Show when=is_recruiter>
                        <a class="site-header__link" href="/recruiter/post-job" on:click=move |_| menu_open.set(false)>
                            "Post Job"
                        </a>
                    </Show>

                    <Show
                        when=move || auth.with(AuthState::is_authenticated)
                        fallback=move || {
                            view! {
                                <div class="site-header__auth">
                                    <a class="btn btn--ghost" href="/login">"Sign In"</a>
                                    <a class="btn btn--primary" href="/register">"Get Started"</a>
                                </div>
                            }
                        }
                    >
                        <div class="site-header__account">
                            <button
                                class="site-header__account-toggle"
                                on:click=move |_| account_open.update(|open| *open = !*open)
                            >
                                <span class="site-header__avatar">
                                    {move || user_name().chars().next().map(String::from).unwrap_or_default()}
                                </span>
                                {user_name}
                            </button>
                            <Show when=move || account_open.get()>
                                <div class="site-header__dropdown">
                                    <a
                                        class="site-header__dropdown-item"
                                        href=dashboard_href
                                        on:click=move |_| account_open.set(false)
                                    >
                                        "Dashboard"
                                    </a>
                                    <button class="site-header__dropdown-item" on:click=move |_| on_logout.run(())>
                                        "Sign Out"
                                    </button>
                                </div>
                            </Show>
                        </div>
                    </Show>
                </nav>
            </div>
        </header>
    }
}
