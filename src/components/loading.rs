use leptos::prelude::*;

/// Spinner with a caption
#[component]
pub fn Loading(#[prop(optional)] message: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner"></div>
            <p>{message.unwrap_or("Carregando...")}</p>
        </div>
    }
}
