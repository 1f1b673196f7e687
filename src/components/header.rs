//! Site Header Component
//!
//! Brand, navigation and the session menu.

use leptos::prelude::*;

use crate::components::Link;
use crate::context::{use_app_context, AppContext};
use crate::routes::Route;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();

    let session_menu = move || match ctx.user.get() {
        Some(user) => {
            let dashboard = AppContext::dashboard_for(&user);
            let initial = user.initial().to_string();
            let role = user.role().label();
            view! {
                <div class="user-menu">
                    <Link to=Route::NovaSolicitacao class="btn btn-primary btn-sm">
                        "+ Nova Solicitação"
                    </Link>
                    <Link to=dashboard class="user-chip">
                        <span class="avatar">{initial}</span>
                        <span class="user-meta">
                            <strong>{user.name.clone()}</strong>
                            <small>{role}</small>
                        </span>
                    </Link>
                    <button class="btn btn-ghost btn-sm" title="Sair" on:click=move |_| ctx.logout()>
                        "Sair"
                    </button>
                </div>
            }
            .into_any()
        }
        None => view! {
            <div class="user-menu">
                <Link to=Route::NovaSolicitacao class="btn btn-primary btn-sm">
                    "+ Nova Solicitação"
                </Link>
                <Link to=Route::Entrar class="btn btn-ghost btn-sm">"Entrar"</Link>
            </div>
        }
        .into_any(),
    };

    view! {
        <header class="site-header">
            <div class="container header-row">
                <Link to=Route::Home class="brand">"CidadãoAtivo"</Link>
                <nav class="main-nav">
                    <Link to=Route::Home>"Início"</Link>
                    <Link to=Route::Transparencia>"Transparência"</Link>
                    <Link to=Route::Sobre>"Sobre"</Link>
                </nav>
                {session_menu}
            </div>
        </header>
    }
}
