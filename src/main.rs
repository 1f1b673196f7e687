//! CidadãoAtivo Frontend Entry Point

mod api;
mod app;
mod browser;
mod components;
mod config;
mod context;
mod error;
mod map;
mod mock;
mod models;
mod pages;
mod routes;
mod session;
mod stats;
mod status;
mod store;
mod validation;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::get();
    if let Err(e) = console_log::init_with_level(config.log_level) {
        web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
    }
    log::info!("CidadãoAtivo starting, API at {}", config.api_base_url);

    mount_to_body(App);
}
