//! New Request Page
//!
//! Form for citizens to file a solicitação. Requires a stored, well-formed token
//! before anything is loaded from the backend.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::browser;
use crate::components::Loading;
use crate::context::use_app_context;
use crate::models::NewSolicitacao;
use crate::routes::Route;
use crate::session::{browser_session, KeyValueStore, Session, TokenCheck};
use crate::store::{store_has_reference, store_set_reference, use_app_store, AppStateStoreFields};
use crate::validation::{validate_request, RequestForm, ValidationError};

const LOGIN_REQUIRED: &str = "Você precisa estar logado para criar uma solicitação";
const SESSION_EXPIRED: &str = "Sua sessão expirou. Por favor, faça login novamente.";
const CREATED: &str = "Solicitação enviada com sucesso!";

/// Alert to show before bouncing to login, or None when the page may load
pub fn entry_check<S: KeyValueStore>(session: &Session<S>) -> Option<&'static str> {
    match session.check_token() {
        TokenCheck::Missing => Some(LOGIN_REQUIRED),
        TokenCheck::Malformed => Some(SESSION_EXPIRED),
        TokenCheck::Valid(_) => None,
    }
}

/// Backend payload for a validated form
pub fn build_payload(form: &RequestForm) -> Option<NewSolicitacao> {
    let non_empty = |value: &str| {
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    };
    Some(NewSolicitacao {
        titulo: form.title.trim().to_string(),
        categoria_id: form.category_id()?,
        descricao: form.description.trim().to_string(),
        endereco: non_empty(&form.address),
        bairro: non_empty(&form.neighborhood),
        cep: non_empty(&form.cep),
        anonimo: form.anonymous,
        ..Default::default()
    })
}

#[component]
pub fn NovaSolicitacaoPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let form = RwSignal::new(RequestForm::default());
    let (allowed, set_allowed) = signal(false);
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    // Guard, then load reference lists unless another page already did
    Effect::new(move |_| {
        if let Some(message) = entry_check(&browser_session()) {
            ctx.refresh_user();
            browser::alert(message);
            ctx.navigate(Route::Entrar);
            return;
        }
        set_allowed.set(true);
        if store_has_reference(&store) {
            return;
        }
        spawn_local(async move {
            match api::get_reference_lists(&browser_session()).await {
                Ok((categorias, bairros)) => store_set_reference(&store, categorias, bairros),
                Err(e) => {
                    log::error!("Failed to load categorias/bairros: {}", e);
                    set_error.set(Some(ctx.handle_error(&e)));
                }
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        if !browser_session().is_authenticated() {
            browser::alert(LOGIN_REQUIRED);
            ctx.navigate(Route::Entrar);
            return;
        }

        let current = form.get();
        if let Err(e) = validate_request(&current) {
            if e == ValidationError::MissingCategory {
                browser::alert(&e.to_string());
            }
            set_error.set(Some(e.to_string()));
            return;
        }
        let Some(payload) = build_payload(&current) else {
            return;
        };

        set_submitting.set(true);
        spawn_local(async move {
            match api::create_solicitacao(&browser_session(), &payload).await {
                Ok(_) => {
                    browser::alert(CREATED);
                    ctx.navigate(Route::Dashboard);
                }
                Err(e) if e.is_token_rejection() => {
                    log::warn!("Session rejected while creating solicitação: {}", e);
                    browser::alert(SESSION_EXPIRED);
                    ctx.end_session();
                }
                Err(e) => {
                    log::error!("Failed to create solicitação: {}", e);
                    browser::alert(&format!("Erro ao criar solicitação: {}", e));
                    set_submitting.set(false);
                }
            }
        });
    };

    let text_input = move |label: &'static str,
                           placeholder: &'static str,
                           get: fn(&RequestForm) -> String,
                           set: fn(&mut RequestForm, String)| {
        view! {
            <label>
                {label}
                <input
                    type="text"
                    placeholder=placeholder
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <div class="page">
            <Show when=move || allowed.get() fallback=|| view! { <Loading /> }>
                <div class="card form-card">
                    <h1>"Nova Solicitação"</h1>
                    <p class="muted">"Descreva o problema para que um vereador possa assumi-lo"</p>

                    {move || error.get().map(|msg| view! { <div class="notice notice-error">{msg}</div> })}

                    <form on:submit=on_submit>
                        {text_input("Título", "Ex.: Buraco na rua", |f| f.title.clone(), |f, v| f.title = v)}
                        <label>
                            "Categoria"
                            <select on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))>
                                <option value="">"Selecione uma categoria"</option>
                                {move || store.categorias().get().into_iter().map(|c| {
                                    let label = match c.icone.as_deref() {
                                        Some(icon) => format!("{} {}", icon, c.name),
                                        None => c.name.clone(),
                                    };
                                    view! { <option value=c.id.to_string()>{label}</option> }
                                }).collect_view()}
                            </select>
                        </label>
                        <label>
                            "Descrição"
                            <textarea
                                rows="5"
                                placeholder="Detalhe o problema"
                                prop:value=move || form.with(|f| f.description.clone())
                                on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                            ></textarea>
                        </label>
                        <label>
                            "Bairro"
                            <select on:change=move |ev| form.update(|f| f.neighborhood = event_target_value(&ev))>
                                <option value="">"Selecione um bairro"</option>
                                {move || store.bairros().get().into_iter().map(|b| {
                                    let name = b.name.clone();
                                    view! { <option value=name.clone()>{name.clone()}</option> }
                                }).collect_view()}
                            </select>
                        </label>
                        {text_input("Endereço", "Rua, número", |f| f.address.clone(), |f, v| f.address = v)}
                        {text_input("CEP (opcional)", "00000-000", |f| f.cep.clone(), |f, v| f.cep = v)}
                        <label class="checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.anonymous)
                                on:change=move |ev| form.update(|f| f.anonymous = event_target_checked(&ev))
                            />
                            "Enviar anonimamente"
                        </label>
                        <label class="checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.accepted_terms)
                                on:change=move |ev| form.update(|f| f.accepted_terms = event_target_checked(&ev))
                            />
                            "Declaro que as informações são verdadeiras"
                        </label>
                        <button type="submit" class="btn btn-primary btn-block" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Enviando..." } else { "Enviar Solicitação" }}
                        </button>
                    </form>
                </div>
            </Show>
        </div>
    }
}
