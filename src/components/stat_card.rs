//! Stat Card Component

use leptos::prelude::*;

/// Headline number with a caption, used across the dashboard
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-label">{label}</span>
            <strong class="stat-value">{move || value.get()}</strong>
        </div>
    }
}
