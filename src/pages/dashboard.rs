//! Citizen Dashboard

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, SolicitacaoFilters};
use crate::components::{Link, Loading, SolicitacaoCard, StatCard};
use crate::context::use_app_context;
use crate::models::{Solicitacao, StatusCounts};
use crate::routes::Route;
use crate::session::browser_session;
use crate::stats;

const SHOWN: usize = 5;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();

    let (items, set_items) = signal(Vec::<Solicitacao>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let Some(user) = browser_session().current_user() else {
            ctx.navigate(Route::Entrar);
            return;
        };
        if user.is_vereador() {
            ctx.navigate(Route::VereadorDashboard);
            return;
        }
        spawn_local(async move {
            match api::get_solicitacoes(&browser_session(), &SolicitacaoFilters::default()).await {
                Ok(page) => set_items.set(page.solicitacoes),
                Err(e) => {
                    log::error!("Failed to load solicitações: {}", e);
                    set_error.set(Some(ctx.handle_error(&e)));
                }
            }
            set_loading.set(false);
        });
    });

    let counts = Memo::new(move |_| items.with(|list| stats::count_by_status(list)));
    let count = move |f: fn(&StatusCounts) -> u32| {
        Signal::derive(move || counts.with(f).to_string())
    };

    let greeting = move || {
        ctx.user
            .get()
            .map(|u| format!("Olá, {}!", u.name))
            .unwrap_or_default()
    };

    view! {
        <div class="page">
            <div class="section-head">
                <div>
                    <h1>{greeting}</h1>
                    <p class="muted">"Acompanhe suas solicitações"</p>
                </div>
                <Link to=Route::NovaSolicitacao class="btn btn-primary">"+ Nova Solicitação"</Link>
            </div>

            <div class="stat-grid">
                <StatCard label="Total" value=Signal::derive(move || items.with(|l| l.len().to_string())) />
                <StatCard label="Abertas" value=count(|c| c.aberta) accent="stat-open" />
                <StatCard label="Em Andamento" value=count(|c| c.em_andamento) accent="stat-progress" />
                <StatCard label="Resolvidas" value=count(|c| c.resolvida) accent="stat-success" />
            </div>

            {move || error.get().map(|msg| view! { <div class="notice notice-error">{msg}</div> })}

            <section class="card">
                <h2>"Minhas Solicitações"</h2>
                <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                    <Show
                        when=move || !items.with(|l| l.is_empty())
                        fallback=|| view! { <p class="empty">"Você ainda não criou nenhuma solicitação."</p> }
                    >
                        <div class="request-list">
                            <For
                                each=move || items.with(|l| l.iter().take(SHOWN).cloned().collect::<Vec<_>>())
                                key=|s| (s.id, s.status)
                                children=move |s: Solicitacao| view! { <SolicitacaoCard solicitacao=s /> }
                            />
                        </div>
                    </Show>
                </Show>
            </section>
        </div>
    }
}
