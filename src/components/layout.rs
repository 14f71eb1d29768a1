//! Page chrome: header, flash banner, content, and optional footer.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::header::Header;
use crate::state::ui::Flash;

#[component]
pub fn Layout(#[prop(default = true)] show_footer: bool, children: Children) -> impl IntoView {
    let flash = expect_context::<RwSignal<Flash>>();
    let pathname = use_location().pathname;

    Effect::new(move || {
        let path = pathname.get();
        let current = flash.get();
        let next = current.clone().visit(&path);
        if next != current {
            flash.set(next);
        }
    });

    view! {
        <div class="layout">
            <Header/>
            <Show when=move || flash.with(|f| f.message.is_some())>
                <div class="flash" role="status">
                    <span>{move || flash.with(|f| f.message.clone().unwrap_or_default())}</span>
                    <button class="flash__close" aria-label="Dismiss" on:click=move |_| flash.set(Flash::default())>
                        "\u{00d7}"
                    </button>
                </div>
            </Show>
            <main class="layout__main">{children()}</main>
            {show_footer.then(|| view! { <Footer/> })}
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__inner">
                <div>
                    <span class="site-footer__brand">"Zidio Jobs"</span>
                    <p>"Connecting talent with opportunity."</p>
                </div>
                <nav class="site-footer__links">
                    <a href="/jobs">"Browse Jobs"</a>
                    <a href="/register">"Create Account"</a>
                    <a href="/login">"Sign In"</a>
                </nav>
            </div>
        </footer>
    }
}
