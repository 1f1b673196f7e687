//! Backend API Client
//!
//! Typed wrappers over the REST backend, organized by domain.

mod auth;
mod http;
mod reference;
mod solicitacao;
mod vereador;

// Re-export all public items
pub use auth::*;
pub use reference::*;
pub use solicitacao::*;
pub use vereador::*;
