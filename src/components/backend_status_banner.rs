//! Backend Status Banner
//!
//! Polls the backend and warns while it is unreachable. Dismissable.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config::AppConfig;
use crate::store::{store_set_backend_online, use_app_store, AppStateStoreFields};

#[component]
pub fn BackendStatusBanner() -> impl IntoView {
    let store = use_app_store();
    let (dismissed, set_dismissed) = signal(false);

    // Polling stops once the banner is unmounted; on_cleanup needs Send + Sync
    let alive = Arc::new(AtomicBool::new(true));
    let poll_alive = alive.clone();
    spawn_local(async move {
        let interval = AppConfig::get().backend_poll_ms;
        while poll_alive.load(Ordering::Relaxed) {
            let online = api::ping().await;
            if !poll_alive.load(Ordering::Relaxed) {
                break;
            }
            store_set_backend_online(&store, online);
            TimeoutFuture::new(interval).await;
        }
    });
    on_cleanup(move || alive.store(false, Ordering::Relaxed));

    let visible = move || !dismissed.get() && store.backend_online().get() == Some(false);

    view! {
        <Show when=visible>
            <div class="backend-banner" role="alert">
                <span>
                    "Não foi possível conectar ao servidor em "
                    <code>{AppConfig::get().api_base_url.clone()}</code>
                    ". Verifique se o backend está rodando."
                </span>
                <button class="banner-close" title="Fechar" on:click=move |_| set_dismissed.set(true)>
                    "✕"
                </button>
            </div>
        </Show>
    }
}
