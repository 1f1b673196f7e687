//! Reference Lists
//!
//! Categories and neighborhoods used by filters and forms.

use super::http::{endpoint, get_json};
use crate::error::ApiResult;
use crate::models::{Bairro, BairrosEnvelope, Categoria, CategoriasEnvelope};
use crate::session::{KeyValueStore, Session};

pub async fn get_categorias<S: KeyValueStore>(session: &Session<S>) -> ApiResult<Vec<Categoria>> {
    let envelope: CategoriasEnvelope =
        get_json(session, &endpoint("/api/categorias"), "Falha ao buscar categorias").await?;
    Ok(envelope.categorias)
}

pub async fn get_bairros<S: KeyValueStore>(session: &Session<S>) -> ApiResult<Vec<Bairro>> {
    let envelope: BairrosEnvelope = get_json(session, &endpoint("/api/bairros"), "Falha ao buscar bairros").await?;
    Ok(envelope.bairros)
}

/// Both lists, failing as a pair
pub async fn get_reference_lists<S: KeyValueStore>(session: &Session<S>) -> ApiResult<(Vec<Categoria>, Vec<Bairro>)> {
    let categorias = get_categorias(session).await?;
    let bairros = get_bairros(session).await?;
    Ok((categorias, bairros))
}
