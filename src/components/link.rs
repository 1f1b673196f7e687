//! In-app Link Component
//!
//! Anchor that switches pages without a full reload.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::routes::Route;

#[component]
pub fn Link(
    to: Route,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <a
            href=to.path()
            class=class
            on:click=move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                ctx.navigate(to);
            }
        >
            {children()}
        </a>
    }
}
