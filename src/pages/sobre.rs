//! About Page

use leptos::prelude::*;

use crate::components::Link;
use crate::routes::Route;

#[component]
pub fn SobrePage() -> impl IntoView {
    view! {
        <div class="page">
            <section class="card prose">
                <h1>"Sobre o CidadãoAtivo"</h1>
                <p>
                    "O CidadãoAtivo aproxima moradores e vereadores. Qualquer cidadão pode registrar "
                    "problemas do seu bairro, como buracos, iluminação ou saneamento, e acompanhar "
                    "cada solicitação até a resolução."
                </p>
                <h2>"Como funciona"</h2>
                <ol>
                    <li>"Você cria uma solicitação descrevendo o problema e onde ele acontece."</li>
                    <li>"Um vereador assume a solicitação e ela passa a ficar em andamento."</li>
                    <li>"Quando o problema é resolvido, a solicitação é marcada como resolvida."</li>
                </ol>
                <h2>"Transparência"</h2>
                <p>
                    "Os números de cada vereador são públicos: quantas solicitações assumiu, quantas "
                    "resolveu e em quanto tempo."
                </p>
                <div class="cta-row">
                    <Link to=Route::NovaSolicitacao class="btn btn-primary">"Criar solicitação"</Link>
                    <Link to=Route::Transparencia class="btn btn-ghost">"Ver transparência"</Link>
                </div>
            </section>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page">
            <section class="card empty-state">
                <h1>"Página não encontrada"</h1>
                <p class="muted">"O endereço acessado não existe."</p>
                <Link to=Route::Home class="btn btn-primary">"Voltar ao início"</Link>
            </section>
        </div>
    }
}
