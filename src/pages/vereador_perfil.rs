//! Councilmember Profile Page
//!
//! Public profile of one vereador with their requests, filterable by status.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{Link, Loading, SolicitacaoCard, StatCard};
use crate::context::use_app_context;
use crate::error::ApiResult;
use crate::models::{Solicitacao, Vereador};
use crate::routes::Route;
use crate::session::browser_session;
use crate::stats::{self, relative_share};
use crate::status::Status;

pub fn filter_by_status(list: &[Solicitacao], status: Option<Status>) -> Vec<Solicitacao> {
    list.iter()
        .filter(|s| status.map_or(true, |wanted| s.status == wanted))
        .cloned()
        .collect()
}

async fn load(id: u32) -> ApiResult<(Vereador, Vec<Solicitacao>)> {
    let session = browser_session();
    let vereador = api::get_vereador(&session, id).await?;
    let page = api::get_vereador_solicitacoes(&session, id, None).await?;
    Ok((vereador, page.solicitacoes))
}

#[component]
pub fn VereadorPerfilPage(id: u32) -> impl IntoView {
    let ctx = use_app_context();

    let (vereador, set_vereador) = signal::<Option<Vereador>>(None);
    let (items, set_items) = signal(Vec::<Solicitacao>::new());
    let (filter, set_filter) = signal::<Option<Status>>(None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            match load(id).await {
                Ok((profile, list)) => {
                    log::info!("Loaded vereador {} with {} solicitações", id, list.len());
                    set_vereador.set(Some(profile));
                    set_items.set(list);
                }
                Err(e) => {
                    log::error!("Failed to load vereador {}: {}", id, e);
                    set_error.set(Some(ctx.handle_error(&e)));
                }
            }
            set_loading.set(false);
        });
    });

    let counts = Memo::new(move |_| items.with(|l| stats::count_by_status(l)));
    let filtered = Memo::new(move |_| items.with(|l| filter_by_status(l, filter.get())));

    let profile = move || {
        vereador.get().map(|v| {
            let max_area = v.top_areas.iter().map(|a| a.count).max().unwrap_or(0);
            let areas = v
                .top_areas
                .iter()
                .map(|a| {
                    let width = format!("{}%", relative_share(a.count, max_area));
                    view! {
                        <div class="bar-line">
                            <span class="bar-caption">{format!("{} ({})", a.area, a.count)}</span>
                            <div class="bar"><div class="bar-fill bar-primary" style:width=width></div></div>
                        </div>
                    }
                })
                .collect_view();
            let claimed = v.claimed.to_string();
            let resolved = v.resolved.to_string();
            let rate = format!("{:.0}%", v.resolution_rate);
            let days = format!("{:.1} dias", v.avg_resolution_days);
            view! {
                <section class="card profile-head">
                    <span class="avatar avatar-lg">{v.initial().to_string()}</span>
                    <div>
                        <h1>{v.name.clone()}</h1>
                        <p class="muted">{v.party.clone()}</p>
                    </div>
                </section>
                <div class="stat-grid">
                    <StatCard label="Assumidas" value=Signal::stored(claimed) />
                    <StatCard label="Resolvidas" value=Signal::stored(resolved) accent="stat-success" />
                    <StatCard label="Taxa de resolução" value=Signal::stored(rate) />
                    <StatCard label="Tempo médio" value=Signal::stored(days) />
                </div>
                <section class="card">
                    <h2>"Principais Áreas"</h2>
                    {areas}
                </section>
            }
        })
    };

    view! {
        <div class="page">
            <Link to=Route::Transparencia class="back-link">"← Voltar para Transparência"</Link>

            {move || error.get().map(|msg| view! { <div class="notice notice-error">{msg}</div> })}

            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                {profile}

                <section class="card">
                    <div class="section-head">
                        <h2>"Solicitações"</h2>
                        <select on:change=move |ev| set_filter.set(Status::from_wire(&event_target_value(&ev)))>
                            <option value="">
                                {move || format!("Todas ({})", items.with(|l| l.len()))}
                            </option>
                            {Status::ALL
                                .into_iter()
                                .map(|status| view! {
                                    <option value=status.as_str()>
                                        {move || format!("{} ({})", status.plural_label(), counts.get().get(status))}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <Show
                        when=move || !filtered.with(|l| l.is_empty())
                        fallback=|| view! { <p class="empty">"Nenhuma solicitação encontrada."</p> }
                    >
                        <div class="request-list">
                            <For
                                each=move || filtered.get()
                                key=|s| (s.id, s.status)
                                children=move |s: Solicitacao| view! { <SolicitacaoCard solicitacao=s /> }
                            />
                        </div>
                    </Show>
                </section>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn test_filter_all_keeps_everything() {
        let list = mock::fallback_solicitacoes();
        assert_eq!(filter_by_status(&list, None).len(), 2);
    }

    #[test]
    fn test_filter_by_single_status() {
        let list = mock::fallback_solicitacoes();
        let in_progress = filter_by_status(&list, Some(Status::EmAndamento));
        assert_eq!(in_progress.len(), 1);
        assert_eq!(in_progress[0].id, 2);
        assert!(filter_by_status(&list, Some(Status::Resolvida)).is_empty());
    }
}
