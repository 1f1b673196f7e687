//! Frontend Models
//!
//! Data structures matching backend entities. Field names on the wire are the
//! backend's; Rust names are renamed where they differ.

use serde::{Deserialize, Serialize};

use crate::status::Status;

/// Citizen-filed service request (matches backend `Solicitacao.to_dict`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solicitacao {
    pub id: u32,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "categoria", default)]
    pub category: Option<String>,
    #[serde(default)]
    pub categoria_id: Option<u32>,
    #[serde(rename = "descricao", default)]
    pub description: String,
    #[serde(rename = "endereco", default)]
    pub address: Option<String>,
    #[serde(rename = "bairro", default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub bairro_id: Option<u32>,
    #[serde(default)]
    pub cep: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(rename = "fotos", default)]
    pub photos: Vec<String>,
    pub status: Status,
    #[serde(rename = "anonimo", default)]
    pub anonymous: bool,
    #[serde(default)]
    pub vereador_id: Option<u32>,
    #[serde(default)]
    pub vereador_nome: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    /// Days between creation and resolution
    #[serde(rename = "tempo_resolucao", default)]
    pub resolution_days: Option<u32>,
}

impl Solicitacao {
    pub fn is_assigned(&self) -> bool {
        self.vereador_id.is_some()
    }

    pub fn created_date(&self) -> String {
        display_date(&self.created_at)
    }
}

/// Category breakdown entry of a councilmember
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaCount {
    pub area: String,
    pub count: u32,
}

/// Elected councilmember with server-side aggregates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vereador {
    pub id: u32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "partido", default)]
    pub party: String,
    #[serde(default)]
    pub foto_url: Option<String>,
    #[serde(rename = "solicitacoes_assumidas", default)]
    pub claimed: u32,
    #[serde(rename = "solicitacoes_resolvidas", default)]
    pub resolved: u32,
    #[serde(rename = "tempo_medio_resolucao", default)]
    pub avg_resolution_days: f64,
    #[serde(rename = "taxa_resolucao", default)]
    pub resolution_rate: f64,
    #[serde(rename = "principais_areas", default)]
    pub top_areas: Vec<AreaCount>,
}

impl Vereador {
    pub fn initial(&self) -> char {
        initial_of(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Categoria {
    pub id: u32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bairro {
    pub id: u32,
    #[serde(rename = "nome")]
    pub name: String,
}

/// Account type as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Cidadao,
    Vereador,
}

impl Role {
    /// Value of `tipo_usuario` on the wire
    pub fn wire(self) -> &'static str {
        match self {
            Role::Cidadao => "cidadao",
            Role::Vereador => "vereador",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Cidadao => "Cidadão",
            Role::Vereador => "Vereador",
        }
    }
}

/// Logged-in user, cached in browser storage under `user`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefone", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "tipo_usuario", default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Present only for councilmember accounts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vereador_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl User {
    /// Missing or unrecognised account types are treated as citizens
    pub fn role(&self) -> Role {
        match self.role.as_deref() {
            Some(role) if role == Role::Vereador.wire() => Role::Vereador,
            _ => Role::Cidadao,
        }
    }

    pub fn is_vereador(&self) -> bool {
        self.role() == Role::Vereador
    }

    pub fn initial(&self) -> char {
        initial_of(&self.name)
    }
}

/// Per-status request counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusCounts {
    #[serde(default)]
    pub aberta: u32,
    #[serde(default)]
    pub em_andamento: u32,
    #[serde(default)]
    pub resolvida: u32,
}

/// City-wide aggregates from `/api/vereadores/stats`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VereadoresStats {
    pub total_solicitacoes: u32,
    pub solicitacoes_resolvidas: u32,
    pub tempo_medio_resolucao: f64,
    pub taxa_resolucao: f64,
    pub cidadaos_atendidos: u32,
    pub status_breakdown: StatusCounts,
}

// ========================
// Response Envelopes
// ========================

#[derive(Debug, Clone, Deserialize)]
pub struct SolicitacoesPage {
    pub solicitacoes: Vec<Solicitacao>,
    #[serde(default)]
    pub total: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SolicitacaoEnvelope {
    #[serde(default)]
    pub message: Option<String>,
    pub solicitacao: Solicitacao,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VereadoresPage {
    pub vereadores: Vec<Vereador>,
    #[serde(default)]
    pub total: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VereadorEnvelope {
    pub vereador: Vereador,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoriasEnvelope {
    pub categorias: Vec<Categoria>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BairrosEnvelope {
    pub bairros: Vec<Bairro>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
    #[serde(default)]
    pub message: Option<String>,
}

// ========================
// Request Bodies
// ========================

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub nome: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_usuario: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NewSolicitacao {
    pub titulo: String,
    pub categoria_id: u32,
    pub descricao: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endereco: Option<String>,
    /// Neighborhood name; the backend resolves it to an id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bairro: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cep: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    pub fotos: Vec<String>,
    pub anonimo: bool,
}

/// Partial update; the backend decides whether the transition is allowed
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SolicitacaoUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vereador_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
}

impl SolicitacaoUpdate {
    /// Councilmember takes ownership of an open request
    pub fn claim(vereador_id: u32) -> Self {
        Self {
            status: Some(Status::EmAndamento),
            vereador_id: Some(vereador_id),
            descricao: None,
        }
    }

    pub fn resolve() -> Self {
        Self {
            status: Some(Status::Resolvida),
            ..Default::default()
        }
    }
}

// ========================
// Display Helpers
// ========================

fn initial_of(name: &str) -> char {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().next().unwrap_or(c))
        .unwrap_or('U')
}

/// `2024-03-05T10:00:00` -> `05/03/2024`; anything else is shown as-is
pub fn display_date(iso: &str) -> String {
    let date = iso.get(..10).unwrap_or(iso);
    let parts: Vec<&str> = date.split('-').collect();
    match parts.as_slice() {
        [year, month, day]
            if year.len() == 4 && month.len() == 2 && day.len() == 2 =>
        {
            format!("{}/{}/{}", day, month, year)
        }
        _ => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solicitacao_from_backend_json() {
        let json = r#"{
            "id": 7,
            "titulo": "Buraco na Rua das Flores",
            "categoria": "Pavimentação",
            "categoria_id": 1,
            "descricao": "Grande buraco",
            "endereco": null,
            "bairro": "Centro",
            "bairro_id": 1,
            "cep": null,
            "latitude": null,
            "longitude": null,
            "fotos": [],
            "status": "em_andamento",
            "anonimo": false,
            "vereador_id": 3,
            "vereador_nome": "Carlos Lima",
            "created_at": "2024-03-05T10:00:00",
            "updated_at": "2024-03-06T10:00:00",
            "tempo_resolucao": null
        }"#;

        let s: Solicitacao = serde_json::from_str(json).unwrap();
        assert_eq!(s.id, 7);
        assert_eq!(s.title, "Buraco na Rua das Flores");
        assert_eq!(s.status, Status::EmAndamento);
        assert!(s.is_assigned());
        assert_eq!(s.address, None);
        assert_eq!(s.created_date(), "05/03/2024");
    }

    #[test]
    fn test_user_role() {
        let json = r#"{"id": 1, "nome": "ana", "email": "ana@x.com", "tipo_usuario": "vereador", "vereador_id": 4}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.is_vereador());
        assert_eq!(user.vereador_id, Some(4));
        assert_eq!(user.initial(), 'A');

        let citizen: User = serde_json::from_str(r#"{"id": 2, "nome": "Bia", "email": "b@x.com"}"#).unwrap();
        assert_eq!(citizen.role(), Role::Cidadao);
    }

    #[test]
    fn test_user_storage_shape_uses_backend_names() {
        let user = User {
            id: 1,
            name: "Ana".into(),
            email: "ana@x.com".into(),
            phone: Some("1199999".into()),
            role: Some("cidadao".into()),
            vereador_id: None,
            created_at: None,
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["nome"], "Ana");
        assert_eq!(value["telefone"], "1199999");
        assert!(value.get("vereador_id").is_none());
    }

    #[test]
    fn test_stats_default_missing_fields() {
        let stats: VereadoresStats = serde_json::from_str(r#"{"total_solicitacoes": 12}"#).unwrap();
        assert_eq!(stats.total_solicitacoes, 12);
        assert_eq!(stats.cidadaos_atendidos, 0);
        assert_eq!(stats.status_breakdown, StatusCounts::default());
    }

    #[test]
    fn test_claim_update_body() {
        let body = serde_json::to_value(SolicitacaoUpdate::claim(9)).unwrap();
        assert_eq!(body, serde_json::json!({"status": "em_andamento", "vereador_id": 9}));
        let body = serde_json::to_value(SolicitacaoUpdate::resolve()).unwrap();
        assert_eq!(body, serde_json::json!({"status": "resolvida"}));
    }

    #[test]
    fn test_display_date_passthrough() {
        assert_eq!(display_date("ontem"), "ontem");
        assert_eq!(display_date(""), "");
    }
}
