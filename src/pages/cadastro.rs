//! Signup Page
//!
//! Creates a citizen account and logs it in.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::Link;
use crate::context::use_app_context;
use crate::models::{RegisterRequest, Role};
use crate::routes::Route;
use crate::session::browser_session;
use crate::validation::{validate_signup, SignupForm};

/// Backend payload for a validated form; accounts created here are always citizens
pub fn register_request(form: &SignupForm) -> RegisterRequest {
    let phone = form.phone.trim();
    RegisterRequest {
        nome: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        password: form.password.clone(),
        telefone: (!phone.is_empty()).then(|| phone.to_string()),
        tipo_usuario: Some(Role::Cidadao.wire().to_string()),
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let ctx = use_app_context();

    let form = RwSignal::new(SignupForm::default());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let current = form.get();
        if let Err(e) = validate_signup(&current) {
            set_error.set(Some(e.to_string()));
            return;
        }

        let request = register_request(&current);
        set_loading.set(true);
        spawn_local(async move {
            match api::register(&browser_session(), &request).await {
                Ok(user) => {
                    log::info!("Registered {}", user.email);
                    ctx.refresh_user();
                    ctx.navigate(Route::Home);
                }
                Err(e) => {
                    log::warn!("Signup failed: {}", e);
                    set_error.set(Some(e.to_string()));
                    set_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="page auth-page">
            <div class="card auth-card">
                <h1>"Criar conta"</h1>
                <p class="muted">"Participe e ajude a melhorar sua cidade"</p>

                {move || error.get().map(|msg| view! { <div class="notice notice-error">{msg}</div> })}

                <form on:submit=on_submit>
                    <label>
                        "Nome completo"
                        <input
                            type="text"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "E-mail"
                        <input
                            type="email"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Telefone (opcional)"
                        <input
                            type="tel"
                            placeholder="(11) 99999-9999"
                            prop:value=move || form.with(|f| f.phone.clone())
                            on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Senha"
                        <input
                            type="password"
                            placeholder="Mínimo de 8 caracteres"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Confirmar senha"
                        <input
                            type="password"
                            prop:value=move || form.with(|f| f.confirm_password.clone())
                            on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                        />
                    </label>
                    <button type="submit" class="btn btn-primary btn-block" disabled=move || loading.get()>
                        {move || if loading.get() { "Criando conta..." } else { "Criar conta" }}
                    </button>
                </form>

                <p class="auth-switch">
                    "Já tem conta? "
                    <Link to=Route::Entrar>"Entrar"</Link>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> SignupForm {
        SignupForm {
            name: " Maria Souza ".into(),
            email: "maria@cidade.gov.br ".into(),
            phone: "".into(),
            password: "segredo123".into(),
            confirm_password: "segredo123".into(),
        }
    }

    #[test]
    fn test_request_is_trimmed_and_citizen() {
        let req = register_request(&form());
        assert_eq!(req.nome, "Maria Souza");
        assert_eq!(req.email, "maria@cidade.gov.br");
        assert_eq!(req.telefone, None);
        assert_eq!(req.tipo_usuario.as_deref(), Some("cidadao"));
    }

    #[test]
    fn test_phone_is_sent_when_given() {
        let mut f = form();
        f.phone = "11 99999-0000".into();
        assert_eq!(register_request(&f).telefone.as_deref(), Some("11 99999-0000"));
    }
}
