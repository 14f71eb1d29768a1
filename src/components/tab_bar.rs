//! Tab strip shared by the three dashboards.

use leptos::prelude::*;

use crate::state::ui::DashboardTab;

/// Renders every `T::ALL` entry and writes the clicked one to `active`.
#[component]
pub fn TabBar<T>(active: RwSignal<T>) -> impl IntoView
where
    T: DashboardTab,
{
    view! {
        <nav class="tab-bar" role="tablist">
            {T::ALL
                .iter()
                .copied()
                .map(|tab| {
                    view! {
                        <button
                            class="tab-bar__tab"
                            class:tab-bar__tab--active=move || active.get() == tab
                            role="tab"
                            on:click=move |_| active.set(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
