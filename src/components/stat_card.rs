//! Stat Card Component
//!
//! Big number with a caption, used on dashboards and the home hero.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    label: &'static str,
    value: Signal<String>,
    #[prop(optional)] accent: Option<&'static str>,
) -> impl IntoView {
    let class = match accent {
        Some(accent) => format!("stat-card {}", accent),
        None => "stat-card".to_string(),
    };

    view! {
        <div class=class>
            <div class="stat-value">{move || value.get()}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}
