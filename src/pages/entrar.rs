//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::Link;
use crate::context::{use_app_context, AppContext};
use crate::routes::Route;
use crate::session::browser_session;
use crate::validation::validate_login;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let email = email.get().trim().to_string();
        let password = password.get();
        if let Err(e) = validate_login(&email, &password) {
            set_error.set(Some(e.to_string()));
            return;
        }

        set_loading.set(true);
        spawn_local(async move {
            match api::login(&browser_session(), &email, &password).await {
                Ok(user) => {
                    log::info!("Logged in as {}", user.email);
                    ctx.refresh_user();
                    ctx.navigate(AppContext::dashboard_for(&user));
                }
                Err(e) => {
                    log::warn!("Login failed: {}", e);
                    set_error.set(Some(e.to_string()));
                    set_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="page auth-page">
            <div class="card auth-card">
                <h1>"Entrar"</h1>
                <p class="muted">"Acesse sua conta para acompanhar suas solicitações"</p>

                {move || error.get().map(|msg| view! { <div class="notice notice-error">{msg}</div> })}

                <form on:submit=on_submit>
                    <label>
                        "E-mail"
                        <input
                            type="email"
                            placeholder="seu@email.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Senha"
                        <div class="password-field">
                            <input
                                type=move || if show_password.get() { "text" } else { "password" }
                                placeholder="Sua senha"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="btn btn-ghost btn-sm"
                                on:click=move |_| set_show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "Ocultar" } else { "Mostrar" }}
                            </button>
                        </div>
                    </label>
                    <button type="submit" class="btn btn-primary btn-block" disabled=move || loading.get()>
                        {move || if loading.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>

                <p class="auth-switch">
                    "Não tem conta? "
                    <Link to=Route::Cadastro>"Cadastre-se"</Link>
                </p>
            </div>
        </div>
    }
}
