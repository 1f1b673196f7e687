//! Solicitações Map Component
//!
//! OpenStreetMap tiles with one status-coloured marker per request.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::StatusBadge;
use crate::config::AppConfig;
use crate::map::{popup_details, PlacedMarker, Viewport};
use crate::models::Solicitacao;
use crate::session::browser_session;

const MAP_WIDTH: f64 = 800.0;
const MAP_HEIGHT: f64 = 400.0;

#[component]
pub fn SolicitacoesMap(#[prop(into)] solicitacoes: Signal<Vec<Solicitacao>>) -> impl IntoView {
    let config = AppConfig::get().map;
    let viewport = Viewport {
        center: config.center.into(),
        zoom: config.zoom,
        width: MAP_WIDTH,
        height: MAP_HEIGHT,
    };

    let (selected, set_selected) = signal::<Option<u32>>(None);
    let (fresh, set_fresh) = signal::<Option<Solicitacao>>(None);
    let markers = Memo::new(move |_| viewport.place(&solicitacoes.get()));
    let selected_request = move || {
        let id = selected.get()?;
        fresh.with(|f| solicitacoes.with(|list| popup_details(id, f.as_ref(), list)))
    };

    // Show the listed copy at once, then swap in the backend's current one
    let open_popup = move |id: u32| {
        set_selected.set(Some(id));
        set_fresh.set(None);
        spawn_local(async move {
            match api::get_solicitacao(&browser_session(), id).await {
                Ok(s) => set_fresh.set(Some(s)),
                Err(e) => log::debug!("Keeping listed copy of solicitação {}: {}", id, e),
            }
        });
    };

    let tiles = viewport
        .tiles()
        .into_iter()
        .map(|tile| {
            view! {
                <img
                    class="map-tile"
                    src=tile.url()
                    alt=""
                    style=format!("left: {}px; top: {}px;", tile.left, tile.top)
                />
            }
        })
        .collect_view();

    view! {
        <div class="map" style=format!("width: {}px; height: {}px;", MAP_WIDTH, MAP_HEIGHT)>
            {tiles}
            <For
                each=move || markers.get()
                key=|marker| (marker.id, marker.status)
                children=move |marker: PlacedMarker| {
                    let id = marker.id;
                    view! {
                        <button
                            class="map-marker"
                            title=marker.status.label()
                            style=format!(
                                "left: {}px; top: {}px; background-color: {};",
                                marker.x,
                                marker.y,
                                marker.status.marker_color(),
                            )
                            on:click=move |_| open_popup(id)
                        ></button>
                    }
                }
            />
            {move || selected_request().map(|s| {
                let category = s.category.clone().unwrap_or_default();
                let neighborhood = s.neighborhood.clone().unwrap_or_default();
                view! {
                    <div class="map-popup">
                        <div class="map-popup-head">
                            <h3>{s.title.clone()}</h3>
                            <StatusBadge status=s.status />
                            <button class="popup-close" title="Fechar" on:click=move |_| set_selected.set(None)>
                                "✕"
                            </button>
                        </div>
                        <p class="request-desc">{s.description.clone()}</p>
                        <div><strong>"Categoria: "</strong>{category}</div>
                        <div><strong>"Bairro: "</strong>{neighborhood}</div>
                        {s.vereador_nome.clone().map(|name| view! {
                            <div><strong>"Assumida por: "</strong>{name}</div>
                        })}
                    </div>
                }
            })}
            <div class="map-attribution">
                "© "
                <a href="https://www.openstreetmap.org/copyright" target="_blank" rel="noreferrer">
                    "OpenStreetMap"
                </a>
            </div>
        </div>
    }
}
