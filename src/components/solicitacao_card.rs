//! Solicitação Card Component
//!
//! One request in a list, with optional action buttons.

use leptos::prelude::*;

use crate::components::StatusBadge;
use crate::models::Solicitacao;

#[component]
pub fn SolicitacaoCard(
    solicitacao: Solicitacao,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let created = solicitacao.created_date();
    let category = solicitacao.category.clone().unwrap_or_default();
    let neighborhood = solicitacao.neighborhood.clone().unwrap_or_default();
    let assignee = solicitacao.vereador_nome.clone();

    view! {
        <article class="request-card">
            <div class="request-card-head">
                <h3>{solicitacao.title.clone()}</h3>
                <StatusBadge status=solicitacao.status />
            </div>
            <p class="request-desc">{solicitacao.description.clone()}</p>
            <div class="request-meta">
                <span>{category}</span>
                <span>{neighborhood}</span>
                {(!created.is_empty()).then(|| view! { <span>{created}</span> })}
                {assignee.map(|name| view! { <span>"Assumida por " {name}</span> })}
            </div>
            {children.map(|actions| view! { <div class="request-actions">{actions()}</div> })}
        </article>
    }
}
