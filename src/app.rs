//! CidadãoAtivo App
//!
//! Root component: provides context and store, and swaps pages on route change.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::browser;
use crate::components::{BackendStatusBanner, Header};
use crate::context::AppContext;
use crate::pages::{
    DashboardPage, HomePage, LoginPage, NotFoundPage, NovaSolicitacaoPage, SignupPage, SobrePage,
    TransparenciaPage, VereadorDashboardPage, VereadorPerfilPage,
};
use crate::routes::Route;
use crate::session::browser_session;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let route = signal(Route::from_path(&browser::current_path()));
    let user = signal(browser_session().current_user());

    // Provide context to all children
    let ctx = AppContext::new(route, user);
    provide_context(ctx);
    provide_context(Store::new(AppState::default()));

    // Back/forward buttons
    let _ = window_event_listener(leptos::ev::popstate, move |_| ctx.sync_with_location());

    let page = move || match ctx.route.get() {
        Route::Home => view! { <HomePage /> }.into_any(),
        Route::Entrar => view! { <LoginPage /> }.into_any(),
        Route::Cadastro => view! { <SignupPage /> }.into_any(),
        Route::NovaSolicitacao => view! { <NovaSolicitacaoPage /> }.into_any(),
        Route::Dashboard => view! { <DashboardPage /> }.into_any(),
        Route::VereadorDashboard => view! { <VereadorDashboardPage /> }.into_any(),
        Route::Transparencia => view! { <TransparenciaPage /> }.into_any(),
        Route::VereadorPerfil(id) => view! { <VereadorPerfilPage id=id /> }.into_any(),
        Route::Sobre => view! { <SobrePage /> }.into_any(),
        Route::NotFound => view! { <NotFoundPage /> }.into_any(),
    };

    view! {
        <div class="app-layout">
            <BackendStatusBanner />
            <Header />
            <main class="container main-content">{page}</main>
            <footer class="site-footer">
                <div class="container">"CidadãoAtivo · Participação cidadã e transparência"</div>
            </footer>
        </div>
    }
}
