use leptos::prelude::*;

use crate::status::Status;

#[component]
pub fn StatusBadge(status: Status) -> impl IntoView {
    view! { <span class=status.badge_class()>{status.label()}</span> }
}
