//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::components::protected::Protected;
use crate::config::PortalConfig;
use crate::net::types::Role;
use crate::pages::{
    admin_dashboard::AdminDashboard, dashboard::DashboardPage, home::HomePage, job_detail::JobDetailPage,
    jobs::JobListPage, login::LoginPage, post_job::PostJobPage, recruiter_dashboard::RecruiterDashboard,
    register::RegisterPage,
};
use crate::state::auth::AuthState;
use crate::state::session::SessionStore;
use crate::state::ui::Flash;
use crate::util::auth::redirect_options;
use crate::util::storage::default_storage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the portal config, session store, auth state, and flash banner
/// as contexts, restores any stored session once in the browser, and sets
/// up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = PortalConfig::from_build_env();
    let store = SessionStore::new(default_storage(), config.clone());
    let auth = RwSignal::new(AuthState::default());
    let flash = RwSignal::new(Flash::default());

    // Effects only run after hydration: the server renders the loading
    // state and storage is read once.
    let restore = store.clone();
    Effect::new(move || auth.set(restore.restore()));

    provide_context(config);
    provide_context(store);
    provide_context(auth);
    provide_context(flash);

    view! {
        <Stylesheet id="leptos" href="/pkg/jobportal.css"/>
        <Title text="Zidio Jobs"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/" options=redirect_options()/> }>
                <Route path=StaticSegment("") view=|| view! { <Layout><HomePage/></Layout> }/>
                <Route path=StaticSegment("login") view=|| view! { <Layout><LoginPage/></Layout> }/>
                <Route path=StaticSegment("register") view=|| view! { <Layout><RegisterPage/></Layout> }/>
                <Route path=StaticSegment("jobs") view=|| view! { <Layout><JobListPage/></Layout> }/>
                <Route path=(StaticSegment("jobs"), ParamSegment("id")) view=|| view! { <Layout><JobDetailPage/></Layout> }/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| {
                        view! {
                            <Layout show_footer=false>
                                <Protected>
                                    <DashboardPage/>
                                </Protected>
                            </Layout>
                        }
                    }
                />
                <Route
                    path=StaticSegment("recruiter")
                    view=|| {
                        view! {
                            <Layout show_footer=false>
                                <Protected roles=&[Role::Recruiter]>
                                    <RecruiterDashboard/>
                                </Protected>
                            </Layout>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("recruiter"), StaticSegment("post-job"))
                    view=|| {
                        view! {
                            <Layout show_footer=false>
                                <Protected roles=&[Role::Recruiter]>
                                    <PostJobPage/>
                                </Protected>
                            </Layout>
                        }
                    }
                />
                <Route
                    path=StaticSegment("admin")
                    view=|| {
                        view! {
                            <Layout show_footer=false>
                                <Protected roles=&[Role::Admin]>
                                    <AdminDashboard/>
                                </Protected>
                            </Layout>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
