//! Client-side Routes
//!
//! Mapping between URL paths and the pages of the app.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Entrar,
    Cadastro,
    NovaSolicitacao,
    Dashboard,
    VereadorDashboard,
    Transparencia,
    VereadorPerfil(u32),
    Sobre,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Route {
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["entrar"] => Route::Entrar,
            ["cadastro"] => Route::Cadastro,
            ["nova-solicitacao"] => Route::NovaSolicitacao,
            ["dashboard"] => Route::Dashboard,
            ["vereador", "dashboard"] => Route::VereadorDashboard,
            ["transparencia"] => Route::Transparencia,
            ["transparencia", "vereador", id] => id.parse().map(Route::VereadorPerfil).unwrap_or(Route::NotFound),
            ["sobre"] => Route::Sobre,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".into(),
            Route::Entrar => "/entrar".into(),
            Route::Cadastro => "/cadastro".into(),
            Route::NovaSolicitacao => "/nova-solicitacao".into(),
            Route::Dashboard => "/dashboard".into(),
            Route::VereadorDashboard => "/vereador/dashboard".into(),
            Route::Transparencia => "/transparencia".into(),
            Route::VereadorPerfil(id) => format!("/transparencia/vereador/{}", id),
            Route::Sobre => "/sobre".into(),
            Route::NotFound => "/404".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let routes = [
            Route::Home,
            Route::Entrar,
            Route::Cadastro,
            Route::NovaSolicitacao,
            Route::Dashboard,
            Route::VereadorDashboard,
            Route::Transparencia,
            Route::VereadorPerfil(12),
            Route::Sobre,
        ];
        for route in routes {
            assert_eq!(Route::from_path(&route.path()), route);
        }
    }

    #[test]
    fn test_trailing_slash_and_unknown() {
        assert_eq!(Route::from_path("/entrar/"), Route::Entrar);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/transparencia/vereador/abc"), Route::NotFound);
        assert_eq!(Route::from_path("/admin"), Route::NotFound);
    }
}
