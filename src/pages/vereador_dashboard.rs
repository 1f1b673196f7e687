//! Councilmember Dashboard
//!
//! Unclaimed open requests the vereador can take, and the ones they already own.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, SolicitacaoFilters};
use crate::components::{Loading, SolicitacaoCard, StatCard};
use crate::context::use_app_context;
use crate::error::ApiResult;
use crate::models::{Solicitacao, SolicitacaoUpdate};
use crate::routes::Route;
use crate::session::browser_session;
use crate::stats;
use crate::status::Status;

const SHOWN_OPEN: usize = 5;

/// Open requests nobody has claimed yet, capped for display
pub fn unclaimed(open: Vec<Solicitacao>) -> Vec<Solicitacao> {
    open.into_iter().filter(|s| !s.is_assigned()).take(SHOWN_OPEN).collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Board {
    open: Vec<Solicitacao>,
    mine: Vec<Solicitacao>,
}

async fn load_board(vereador_id: Option<u32>) -> ApiResult<Board> {
    let session = browser_session();
    let open = api::get_solicitacoes(&session, &SolicitacaoFilters::by_status(Status::Aberta))
        .await?
        .solicitacoes;
    let mine = match vereador_id {
        Some(id) => api::get_solicitacoes(&session, &SolicitacaoFilters::by_vereador(id)).await?.solicitacoes,
        None => {
            log::warn!("Vereador account without vereador_id, nothing assigned");
            Vec::new()
        }
    };
    Ok(Board { open: unclaimed(open), mine })
}

#[component]
pub fn VereadorDashboardPage() -> impl IntoView {
    let ctx = use_app_context();

    let (board, set_board) = signal(Board::default());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (reload, set_reload) = signal(0u32);

    let vereador_id = move || ctx.user.with_untracked(|u| u.as_ref().and_then(|u| u.vereador_id));

    // Reload whenever an action bumps the trigger
    Effect::new(move |_| {
        reload.track();
        let Some(user) = browser_session().current_user() else {
            ctx.navigate(Route::Entrar);
            return;
        };
        if !user.is_vereador() {
            ctx.navigate(Route::Dashboard);
            return;
        }
        spawn_local(async move {
            match load_board(user.vereador_id).await {
                Ok(loaded) => set_board.set(loaded),
                Err(e) => {
                    log::error!("Failed to load vereador dashboard: {}", e);
                    set_error.set(Some(ctx.handle_error(&e)));
                }
            }
            set_loading.set(false);
        });
    });

    let apply = move |id: u32, update: SolicitacaoUpdate| {
        set_error.set(None);
        spawn_local(async move {
            match api::update_solicitacao(&browser_session(), id, &update).await {
                Ok(_) => {
                    log::info!("Updated solicitação {}", id);
                    set_reload.update(|n| *n += 1);
                }
                Err(e) => {
                    log::error!("Failed to update solicitação {}: {}", id, e);
                    set_error.set(Some(ctx.handle_error(&e)));
                }
            }
        });
    };

    let claim = move |id: u32| match vereador_id() {
        Some(vid) => apply(id, SolicitacaoUpdate::claim(vid)),
        None => set_error.set(Some("Perfil de vereador não encontrado.".to_string())),
    };
    let resolve = move |id: u32| apply(id, SolicitacaoUpdate::resolve());

    let mine_counts = Memo::new(move |_| board.with(|b| stats::count_by_status(&b.mine)));
    let rate = Memo::new(move |_| board.with(|b| stats::resolution_rate(&b.mine)));

    let greeting = move || {
        ctx.user
            .get()
            .map(|u| format!("Painel do Vereador: {}", u.name))
            .unwrap_or_default()
    };

    view! {
        <div class="page">
            <h1>{greeting}</h1>

            <div class="stat-grid">
                <StatCard label="Assumidas" value=Signal::derive(move || board.with(|b| b.mine.len().to_string())) />
                <StatCard
                    label="Em Andamento"
                    value=Signal::derive(move || mine_counts.get().em_andamento.to_string())
                    accent="stat-progress"
                />
                <StatCard
                    label="Resolvidas"
                    value=Signal::derive(move || mine_counts.get().resolvida.to_string())
                    accent="stat-success"
                />
                <StatCard
                    label="Taxa de resolução"
                    value=Signal::derive(move || format!("{}%", rate.get()))
                />
            </div>

            {move || error.get().map(|msg| view! { <div class="notice notice-error">{msg}</div> })}

            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <section class="card">
                    <h2>"Novas Solicitações"</h2>
                    <Show
                        when=move || !board.with(|b| b.open.is_empty())
                        fallback=|| view! { <p class="empty">"Nenhuma solicitação aberta no momento."</p> }
                    >
                        <div class="request-list">
                            <For
                                each=move || board.with(|b| b.open.clone())
                                key=|s| (s.id, s.status)
                                children=move |s: Solicitacao| {
                                    let id = s.id;
                                    view! {
                                        <SolicitacaoCard solicitacao=s>
                                            <button class="btn btn-primary btn-sm" on:click=move |_| claim(id)>
                                                "Assumir"
                                            </button>
                                        </SolicitacaoCard>
                                    }
                                }
                            />
                        </div>
                    </Show>
                </section>

                <section class="card">
                    <h2>"Minhas Solicitações"</h2>
                    <Show
                        when=move || !board.with(|b| b.mine.is_empty())
                        fallback=|| view! { <p class="empty">"Você ainda não assumiu nenhuma solicitação."</p> }
                    >
                        <div class="request-list">
                            <For
                                each=move || board.with(|b| b.mine.clone())
                                key=|s| (s.id, s.status)
                                children=move |s: Solicitacao| {
                                    let id = s.id;
                                    let in_progress = s.status == Status::EmAndamento;
                                    view! {
                                        <SolicitacaoCard solicitacao=s>
                                            {in_progress.then(|| view! {
                                                <button class="btn btn-success btn-sm" on:click=move |_| resolve(id)>
                                                    "Marcar como resolvida"
                                                </button>
                                            })}
                                        </SolicitacaoCard>
                                    }
                                }
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

    fn open(id: u32, assigned: Option<u32>) -> Solicitacao {
        let mut s = mock::fallback_solicitacoes().remove(0);
        s.id = id;
        s.status = Status::Aberta;
        s.vereador_id = assigned;
        s
    }

    #[test]
    fn test_assigned_requests_are_hidden() {
        let list = vec![open(1, None), open(2, Some(7)), open(3, None)];
        let ids: Vec<u32> = unclaimed(list).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_open_list_is_capped() {
        let list: Vec<Solicitacao> = (1..=8).map(|id| open(id, None)).collect();
        assert_eq!(unclaimed(list).len(), SHOWN_OPEN);
    }
}
