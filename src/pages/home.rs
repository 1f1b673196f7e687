//! Home Page
//!
//! City-wide numbers, search, the requests map and the latest requests.
//! Falls back to a fixed dataset when the backend is unreachable.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, SolicitacaoFilters};
use crate::components::{Link, Loading, SolicitacaoCard, SolicitacoesMap, StatCard};
use crate::error::ApiResult;
use crate::mock::{self, HomeData};
use crate::models::Solicitacao;
use crate::routes::Route;
use crate::session::browser_session;
use crate::store::{store_set_backend_online, store_set_reference, use_app_store, AppStateStoreFields};

const RECENT_LIMIT: u32 = 5;

async fn load_home() -> ApiResult<HomeData> {
    let session = browser_session();
    let (categorias, bairros) = api::get_reference_lists(&session).await?;
    let recent = api::get_recent_solicitacoes(&session, RECENT_LIMIT).await?;
    let stats = api::get_vereadores_stats(&session).await?;
    let all = api::get_solicitacoes(&session, &SolicitacaoFilters::default()).await?.solicitacoes;
    log::info!("Home loaded: {} solicitações, {} recent", all.len(), recent.len());
    Ok(HomeData { categorias, bairros, recent, all, stats, connected: true })
}

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_app_store();

    let (data, set_data) = signal(HomeData::default());
    let (loading, set_loading) = signal(true);
    let (map_items, set_map_items) = signal(Vec::<Solicitacao>::new());

    let (search, set_search) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (neighborhood, set_neighborhood) = signal(String::new());
    let (search_message, set_search_message) = signal::<Option<String>>(None);

    // Load everything on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let loaded = mock::home_or_fallback(load_home().await);
            store_set_reference(&store, loaded.categorias.clone(), loaded.bairros.clone());
            store_set_backend_online(&store, loaded.connected);
            set_map_items.set(loaded.all.clone());
            set_data.set(loaded);
            set_loading.set(false);
        });
    });

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let filters = SolicitacaoFilters::from_search(&search.get(), &category.get(), &neighborhood.get());
        spawn_local(async move {
            match api::get_solicitacoes(&browser_session(), &filters).await {
                Ok(page) => {
                    let found = page.total.max(page.solicitacoes.len() as u32);
                    set_search_message.set(Some(format!("Encontradas {} solicitações", found)));
                    set_map_items.set(page.solicitacoes);
                }
                Err(e) => {
                    log::error!("Search failed: {}", e);
                    set_search_message.set(Some(
                        "Erro ao buscar solicitações. Verifique se o backend está rodando.".to_string(),
                    ));
                }
            }
        });
    };

    let stat = move |f: fn(&HomeData) -> String| Signal::derive(move || data.with(f));

    view! {
        <div class="page home-page">
            <Show when=move || !loading.get() && !data.with(|d| d.connected)>
                <div class="notice notice-warning">
                    <strong>"Backend desconectado."</strong>
                    " Mostrando dados de exemplo. Para usar dados reais, inicie o servidor."
                </div>
            </Show>

            <section class="hero">
                <h1>"Sua voz transforma a cidade"</h1>
                <p>"Reporte problemas, acompanhe soluções e promova a transparência na sua cidade"</p>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <Loading /> }
                >
                    <div class="stat-grid">
                        <StatCard
                            label="Solicitações"
                            value=stat(|d| d.stats.total_solicitacoes.to_string())
                        />
                        <StatCard
                            label="Cidadãos engajados"
                            value=stat(|d| d.stats.cidadaos_atendidos.to_string())
                        />
                        <StatCard
                            label="Tempo médio de resolução"
                            value=stat(|d| format!("{:.0} dias", d.stats.tempo_medio_resolucao))
                        />
                        <StatCard
                            label="Taxa de resolução"
                            value=stat(|d| format!("{:.0}%", d.stats.taxa_resolucao))
                            accent="stat-success"
                        />
                    </div>
                </Show>
            </section>

            <section class="card">
                <form class="search-form" on:submit=on_search>
                    <input
                        type="text"
                        placeholder="Buscar solicitações..."
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                    <select on:change=move |ev| set_category.set(event_target_value(&ev))>
                        <option value="">"Todas"</option>
                        {move || store.categorias().get().into_iter().map(|c| {
                            let name = c.name.clone();
                            view! { <option value=name.clone()>{name.clone()}</option> }
                        }).collect_view()}
                    </select>
                    <select on:change=move |ev| set_neighborhood.set(event_target_value(&ev))>
                        <option value="">"Todos"</option>
                        {move || store.bairros().get().into_iter().map(|b| {
                            let name = b.name.clone();
                            view! { <option value=name.clone()>{name.clone()}</option> }
                        }).collect_view()}
                    </select>
                    <button type="submit" class="btn btn-primary">"Buscar"</button>
                </form>
                {move || search_message.get().map(|msg| view! { <p class="search-result">{msg}</p> })}
            </section>

            <section class="card">
                <h2>"Mapa de Solicitações"</h2>
                <SolicitacoesMap solicitacoes=map_items />
                <div class="map-legend">
                    <span class="legend-item legend-open">"Aberta"</span>
                    <span class="legend-item legend-progress">"Em Andamento"</span>
                    <span class="legend-item legend-resolved">"Resolvida"</span>
                </div>
            </section>

            <section class="card">
                <div class="section-head">
                    <h2>"Solicitações Recentes"</h2>
                    <Link to=Route::NovaSolicitacao class="btn btn-primary btn-sm">"+ Nova Solicitação"</Link>
                </div>
                <div class="request-list">
                    <For
                        each=move || data.with(|d| d.recent.clone())
                        key=|s| s.id
                        children=move |s: Solicitacao| view! { <SolicitacaoCard solicitacao=s /> }
                    />
                </div>
            </section>
        </div>
    }
}
