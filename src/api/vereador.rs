//! Vereador Endpoints
//!
//! Councilmember profiles, their requests and city-wide stats.

use super::http::{endpoint, get_json, send, with_query, Method};
use crate::error::ApiResult;
use crate::models::{SolicitacoesPage, Vereador, VereadorEnvelope, VereadoresPage, VereadoresStats};
use crate::session::{KeyValueStore, Session};
use crate::status::Status;

const STATS_PATH: &str = "/api/vereadores/stats";

pub async fn get_vereadores<S: KeyValueStore>(session: &Session<S>) -> ApiResult<Vec<Vereador>> {
    let page: VereadoresPage = get_json(session, &endpoint("/api/vereadores"), "Falha ao buscar vereadores").await?;
    Ok(page.vereadores)
}

pub async fn get_vereador<S: KeyValueStore>(session: &Session<S>, id: u32) -> ApiResult<Vereador> {
    let url = endpoint(&format!("/api/vereadores/{}", id));
    let envelope: VereadorEnvelope = get_json(session, &url, "Falha ao buscar vereador").await?;
    Ok(envelope.vereador)
}

pub fn vereador_solicitacoes_path(id: u32, status: Option<Status>) -> String {
    with_query(
        &format!("/api/vereadores/{}/solicitacoes", id),
        &[("status", status.map(|s| s.as_str().to_string()).unwrap_or_default())],
    )
}

pub async fn get_vereador_solicitacoes<S: KeyValueStore>(
    session: &Session<S>,
    id: u32,
    status: Option<Status>,
) -> ApiResult<SolicitacoesPage> {
    let url = endpoint(&vereador_solicitacoes_path(id, status));
    get_json(session, &url, "Falha ao buscar solicitações do vereador").await
}

pub async fn get_vereadores_stats<S: KeyValueStore>(session: &Session<S>) -> ApiResult<VereadoresStats> {
    get_json(session, &endpoint(STATS_PATH), "Falha ao buscar estatísticas").await
}

/// Whether the backend answers at all; used by the status banner
pub async fn ping() -> bool {
    match send(Method::Get, &endpoint(STATS_PATH), None, None).await {
        Ok(resp) => resp.is_success(),
        Err(e) => {
            log::debug!("Backend unreachable: {:?}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vereador_solicitacoes_path() {
        assert_eq!(vereador_solicitacoes_path(3, None), "/api/vereadores/3/solicitacoes");
        assert_eq!(
            vereador_solicitacoes_path(3, Some(Status::Resolvida)),
            "/api/vereadores/3/solicitacoes?status=resolvida"
        );
    }
}
