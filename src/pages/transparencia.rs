//! Transparency Page
//!
//! City-wide numbers and the councilmember ranking.

use std::cmp::Ordering;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{Link, Loading, StatCard};
use crate::context::use_app_context;
use crate::error::ApiResult;
use crate::models::{Vereador, VereadoresStats};
use crate::routes::Route;
use crate::session::browser_session;
use crate::stats::{bar_width, relative_share};

/// Best resolution rate first; ties go to whoever resolved more
pub fn ranking(mut vereadores: Vec<Vereador>) -> Vec<Vereador> {
    vereadores.sort_by(|a, b| {
        b.resolution_rate
            .partial_cmp(&a.resolution_rate)
            .unwrap_or(Ordering::Equal)
            .then(b.resolved.cmp(&a.resolved))
    });
    vereadores
}

async fn load() -> ApiResult<(Vec<Vereador>, VereadoresStats)> {
    let session = browser_session();
    let vereadores = api::get_vereadores(&session).await?;
    let stats = api::get_vereadores_stats(&session).await?;
    Ok((ranking(vereadores), stats))
}

#[component]
fn RankingRow(position: usize, vereador: Vereador, max_resolved: u32) -> impl IntoView {
    let resolved_width = format!("{}%", relative_share(vereador.resolved, max_resolved));
    let rate_width = bar_width(vereador.resolution_rate);

    view! {
        <div class="ranking-row">
            <span class="ranking-position">{format!("{}º", position)}</span>
            <span class="avatar">{vereador.initial().to_string()}</span>
            <div class="ranking-body">
                <Link to=Route::VereadorPerfil(vereador.id) class="ranking-name">
                    {vereador.name.clone()}
                </Link>
                <small class="muted">{vereador.party.clone()}</small>
                <div class="bar-line">
                    <span class="bar-caption">
                        {format!("Taxa de resolução: {:.0}%", vereador.resolution_rate)}
                    </span>
                    <div class="bar"><div class="bar-fill bar-success" style:width=rate_width></div></div>
                </div>
                <div class="bar-line">
                    <span class="bar-caption">
                        {format!("{} resolvidas de {} assumidas", vereador.resolved, vereador.claimed)}
                    </span>
                    <div class="bar"><div class="bar-fill bar-primary" style:width=resolved_width></div></div>
                </div>
            </div>
            <span class="ranking-time">{format!("{:.1} dias", vereador.avg_resolution_days)}</span>
        </div>
    }
}

#[component]
pub fn TransparenciaPage() -> impl IntoView {
    let ctx = use_app_context();

    let (vereadores, set_vereadores) = signal(Vec::<Vereador>::new());
    let (stats, set_stats) = signal(VereadoresStats::default());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            match load().await {
                Ok((list, totals)) => {
                    set_vereadores.set(list);
                    set_stats.set(totals);
                }
                Err(e) => {
                    log::error!("Failed to load transparency data: {}", e);
                    set_error.set(Some(ctx.handle_error(&e)));
                }
            }
            set_loading.set(false);
        });
    });

    let max_resolved = Memo::new(move |_| vereadores.with(|l| l.iter().map(|v| v.resolved).max().unwrap_or(0)));
    let stat = move |f: fn(&VereadoresStats) -> String| Signal::derive(move || stats.with(f));

    view! {
        <div class="page">
            <h1>"Transparência"</h1>
            <p class="muted">"Acompanhe o desempenho dos vereadores na resolução das demandas da cidade"</p>

            {move || error.get().map(|msg| view! { <div class="notice notice-error">{msg}</div> })}

            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <div class="stat-grid">
                    <StatCard label="Solicitações" value=stat(|s| s.total_solicitacoes.to_string()) />
                    <StatCard
                        label="Resolvidas"
                        value=stat(|s| s.solicitacoes_resolvidas.to_string())
                        accent="stat-success"
                    />
                    <StatCard
                        label="Tempo médio"
                        value=stat(|s| format!("{:.1} dias", s.tempo_medio_resolucao))
                    />
                    <StatCard
                        label="Taxa de resolução"
                        value=stat(|s| format!("{:.0}%", s.taxa_resolucao))
                    />
                </div>

                <section class="card">
                    <h2>"Ranking de Vereadores"</h2>
                    <Show
                        when=move || !vereadores.with(|l| l.is_empty())
                        fallback=|| view! { <p class="empty">"Nenhum vereador cadastrado."</p> }
                    >
                        {move || {
                            let max = max_resolved.get();
                            vereadores
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(i, v)| view! { <RankingRow position={i + 1} vereador=v max_resolved=max /> })
                                .collect_view()
                        }}
                    </Show>
                </section>
            </Show>
        </div>
    }
}
