//! Offline Fallback Data
//!
//! What the home page shows when the backend cannot be reached.

use crate::error::ApiResult;
use crate::models::{Bairro, Categoria, Solicitacao, VereadoresStats};
use crate::status::Status;

/// Everything the home page loads on mount
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeData {
    pub categorias: Vec<Categoria>,
    pub bairros: Vec<Bairro>,
    pub recent: Vec<Solicitacao>,
    pub all: Vec<Solicitacao>,
    pub stats: VereadoresStats,
    /// False when this is the fallback dataset
    pub connected: bool,
}

pub fn fallback_categorias() -> Vec<Categoria> {
    ["Pavimentação", "Iluminação", "Saúde", "Educação", "Saneamento", "Segurança"]
        .iter()
        .zip(1..)
        .map(|(name, id)| Categoria { id, name: name.to_string(), icone: None })
        .collect()
}

pub fn fallback_bairros() -> Vec<Bairro> {
    ["Centro", "Jardim América", "Vila Nova", "Bela Vista"]
        .iter()
        .zip(1..)
        .map(|(name, id)| Bairro { id, name: name.to_string() })
        .collect()
}

fn sample(id: u32, title: &str, category: &str, categoria_id: u32, description: &str, address: &str, status: Status) -> Solicitacao {
    Solicitacao {
        id,
        title: title.to_string(),
        category: Some(category.to_string()),
        categoria_id: Some(categoria_id),
        description: description.to_string(),
        address: Some(address.to_string()),
        neighborhood: Some("Centro".to_string()),
        bairro_id: Some(1),
        cep: None,
        latitude: None,
        longitude: None,
        photos: Vec::new(),
        status,
        anonymous: false,
        vereador_id: None,
        vereador_nome: Some("Carlos Lima".to_string()),
        created_at: String::new(),
        updated_at: String::new(),
        resolution_days: None,
    }
}

pub fn fallback_solicitacoes() -> Vec<Solicitacao> {
    vec![
        sample(
            1,
            "Buraco na Rua das Flores",
            "Pavimentação",
            1,
            "Grande buraco na via principal causando acidentes",
            "Rua das Flores, 123",
            Status::Aberta,
        ),
        sample(
            2,
            "Iluminação deficiente na Praça Central",
            "Iluminação",
            2,
            "Várias lâmpadas queimadas comprometem a segurança",
            "Praça Central",
            Status::EmAndamento,
        ),
    ]
}

pub fn fallback_home() -> HomeData {
    let solicitacoes = fallback_solicitacoes();
    HomeData {
        categorias: fallback_categorias(),
        bairros: fallback_bairros(),
        stats: VereadoresStats {
            total_solicitacoes: solicitacoes.len() as u32,
            cidadaos_atendidos: 0,
            ..Default::default()
        },
        recent: solicitacoes.clone(),
        all: solicitacoes,
        connected: false,
    }
}

/// The loaded data, or the fallback dataset when any call failed
pub fn home_or_fallback(result: ApiResult<HomeData>) -> HomeData {
    match result {
        Ok(data) => data,
        Err(e) => {
            log::warn!("Backend not available, using mock data: {}", e);
            fallback_home()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[test]
    fn test_unreachable_backend_falls_back() {
        let data = home_or_fallback(Err(ApiError::Network("Failed to fetch".into())));
        assert!(!data.connected);
        assert_eq!(data.all.len(), 2);
        assert_eq!(data.recent.len(), 2);
        assert_eq!(data.stats.total_solicitacoes, 2);
        assert_eq!(data.stats.cidadaos_atendidos, 0);
        assert_eq!(data.categorias.len(), 6);
        assert_eq!(data.bairros.len(), 4);
    }

    #[test]
    fn test_loaded_data_is_kept() {
        let loaded = HomeData { connected: true, ..Default::default() };
        assert_eq!(home_or_fallback(Ok(loaded.clone())), loaded);
    }

    #[test]
    fn test_fallback_ids_are_sequential() {
        let ids: Vec<u32> = fallback_categorias().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(fallback_bairros()[1].name, "Jardim América");
    }
}
