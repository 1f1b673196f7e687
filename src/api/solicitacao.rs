//! Solicitação Endpoints
//!
//! Listing, lookup, creation and status updates of service requests.

use super::http::{endpoint, get_json, send_json, with_query, Method};
use crate::error::{ApiError, ApiResult};
use crate::models::{NewSolicitacao, Solicitacao, SolicitacaoEnvelope, SolicitacaoUpdate, SolicitacoesPage};
use crate::session::{KeyValueStore, Session};
use crate::status::Status;

const BASE_PATH: &str = "/api/solicitacoes";

/// Query filters for `GET /api/solicitacoes`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolicitacaoFilters {
    pub categoria: Option<String>,
    pub bairro: Option<String>,
    pub status: Option<Status>,
    pub search: Option<String>,
    pub vereador_id: Option<u32>,
}

fn non_empty(value: &str, any: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty() && value != any).then(|| value.to_string())
}

impl SolicitacaoFilters {
    pub fn by_status(status: Status) -> Self {
        Self { status: Some(status), ..Default::default() }
    }

    pub fn by_vereador(vereador_id: u32) -> Self {
        Self { vereador_id: Some(vereador_id), ..Default::default() }
    }

    /// Home-page search box; "Todas"/"Todos" mean no filter
    pub fn from_search(term: &str, categoria: &str, bairro: &str) -> Self {
        Self {
            search: non_empty(term, ""),
            categoria: non_empty(categoria, "Todas"),
            bairro: non_empty(bairro, "Todos"),
            ..Default::default()
        }
    }

    pub fn path(&self) -> String {
        with_query(
            BASE_PATH,
            &[
                ("categoria", self.categoria.clone().unwrap_or_default()),
                ("bairro", self.bairro.clone().unwrap_or_default()),
                ("status", self.status.map(|s| s.as_str().to_string()).unwrap_or_default()),
                ("search", self.search.clone().unwrap_or_default()),
                ("vereador_id", self.vereador_id.map(|id| id.to_string()).unwrap_or_default()),
            ],
        )
    }
}

pub async fn get_solicitacoes<S: KeyValueStore>(
    session: &Session<S>,
    filters: &SolicitacaoFilters,
) -> ApiResult<SolicitacoesPage> {
    get_json(session, &endpoint(&filters.path()), "Falha ao buscar solicitações").await
}

pub async fn get_recent_solicitacoes<S: KeyValueStore>(session: &Session<S>, limit: u32) -> ApiResult<Vec<Solicitacao>> {
    let path = with_query(&format!("{}/recent", BASE_PATH), &[("limit", limit.to_string())]);
    let page: SolicitacoesPage = get_json(session, &endpoint(&path), "Falha ao buscar solicitações recentes").await?;
    Ok(page.solicitacoes)
}

pub async fn get_solicitacao<S: KeyValueStore>(session: &Session<S>, id: u32) -> ApiResult<Solicitacao> {
    let url = endpoint(&format!("{}/{}", BASE_PATH, id));
    let envelope: SolicitacaoEnvelope = get_json(session, &url, "Falha ao buscar solicitação").await?;
    Ok(envelope.solicitacao)
}

pub async fn create_solicitacao<S: KeyValueStore>(session: &Session<S>, data: &NewSolicitacao) -> ApiResult<Solicitacao> {
    if !session.is_authenticated() {
        return Err(ApiError::AuthRequired);
    }
    let envelope: SolicitacaoEnvelope =
        send_json(session, Method::Post, &endpoint(BASE_PATH), data, "Falha ao criar solicitação").await?;
    log::info!("Created solicitação {}", envelope.solicitacao.id);
    Ok(envelope.solicitacao)
}

pub async fn update_solicitacao<S: KeyValueStore>(
    session: &Session<S>,
    id: u32,
    update: &SolicitacaoUpdate,
) -> ApiResult<Solicitacao> {
    if !session.is_authenticated() {
        return Err(ApiError::AuthRequired);
    }
    let url = endpoint(&format!("{}/{}", BASE_PATH, id));
    let envelope: SolicitacaoEnvelope =
        send_json(session, Method::Put, &url, update, "Falha ao atualizar solicitação").await?;
    Ok(envelope.solicitacao)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filters_have_no_query() {
        assert_eq!(SolicitacaoFilters::default().path(), "/api/solicitacoes");
    }

    #[test]
    fn test_filter_path() {
        let filters = SolicitacaoFilters {
            categoria: Some("Iluminação".into()),
            status: Some(Status::Aberta),
            vereador_id: Some(3),
            ..Default::default()
        };
        assert_eq!(
            filters.path(),
            "/api/solicitacoes?categoria=Ilumina%C3%A7%C3%A3o&status=aberta&vereador_id=3"
        );
    }

    #[test]
    fn test_search_placeholders_mean_no_filter() {
        let filters = SolicitacaoFilters::from_search("  ", "Todas", "Todos");
        assert_eq!(filters, SolicitacaoFilters::default());

        let filters = SolicitacaoFilters::from_search("buraco", "Pavimentação", "Centro");
        assert_eq!(filters.search.as_deref(), Some("buraco"));
        assert_eq!(filters.categoria.as_deref(), Some("Pavimentação"));
        assert_eq!(filters.bairro.as_deref(), Some("Centro"));
    }

    #[test]
    fn test_shortcut_constructors() {
        assert_eq!(SolicitacaoFilters::by_status(Status::Aberta).path(), "/api/solicitacoes?status=aberta");
        assert_eq!(SolicitacaoFilters::by_vereador(4).path(), "/api/solicitacoes?vereador_id=4");
    }
}
