//! UI Components
//!
//! Reusable Leptos components shared by the pages.

mod backend_status_banner;
mod header;
mod link;
mod loading;
mod solicitacao_card;
mod solicitacoes_map;
mod stat_card;
mod status_badge;

pub use backend_status_banner::BackendStatusBanner;
pub use header::Header;
pub use link::Link;
pub use loading::Loading;
pub use solicitacao_card::SolicitacaoCard;
pub use solicitacoes_map::SolicitacoesMap;
pub use stat_card::StatCard;
pub use status_badge::StatusBadge;
