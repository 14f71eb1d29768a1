//! Headline number card used on the home page and dashboards.

use leptos::prelude::*;

use crate::net::sample::Stat;

#[component]
pub fn StatCard(stat: Stat) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{stat.value}</span>
            <span class="stat-card__label">{stat.label}</span>
        </div>
    }
}

/// A row of stat cards.
#[component]
pub fn StatGrid(stats: Vec<Stat>) -> impl IntoView {
    view! {
        <div class="stat-grid">
            {stats.into_iter().map(|stat| view! { <StatCard stat=stat/> }).collect::<Vec<_>>()}
        </div>
    }
}
