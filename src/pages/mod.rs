//! Pages
//!
//! One component per route.

mod cadastro;
mod dashboard;
mod entrar;
mod home;
mod nova_solicitacao;
mod sobre;
mod transparencia;
mod vereador_dashboard;
mod vereador_perfil;

pub use cadastro::SignupPage;
pub use dashboard::DashboardPage;
pub use entrar::LoginPage;
pub use home::HomePage;
pub use nova_solicitacao::NovaSolicitacaoPage;
pub use sobre::{NotFoundPage, SobrePage};
pub use transparencia::TransparenciaPage;
pub use vereador_dashboard::VereadorDashboardPage;
pub use vereador_perfil::VereadorPerfilPage;
