//! Application Configuration
//!
//! Values resolved once at startup from compile-time environment variables.

use std::str::FromStr;
use std::sync::OnceLock;

const DEFAULT_API_URL: &str = "http://localhost:5000";
const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// Map viewport defaults (São Paulo city centre)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapConfig {
    pub center: (f64, f64),
    pub zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: (-23.5505, -46.6333),
            zoom: 13,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend base URL, without trailing slash
    pub api_base_url: String,
    pub log_level: log::Level,
    pub map: MapConfig,
    /// Interval between backend reachability checks
    pub backend_poll_ms: u32,
}

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// Build from `CIDADAO_API_URL` / `CIDADAO_LOG_LEVEL` captured at build time
    pub fn from_env() -> Self {
        Self::from_values(option_env!("CIDADAO_API_URL"), option_env!("CIDADAO_LOG_LEVEL"))
    }

    pub fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        let log_level = log_level
            .and_then(|level| log::Level::from_str(level.trim()).ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            api_base_url,
            log_level,
            map: MapConfig::default(),
            backend_poll_ms: 10_000,
        }
    }

    /// Global configuration, initialised on first access
    pub fn get() -> &'static AppConfig {
        CONFIG.get_or_init(Self::from_env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert_eq!(config.log_level, log::Level::Info);
        assert_eq!(config.map.zoom, 13);
        assert_eq!(config.backend_poll_ms, 10_000);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = AppConfig::from_values(Some("https://api.cidade.gov.br/"), Some("debug"));
        assert_eq!(config.api_base_url, "https://api.cidade.gov.br");
        assert_eq!(config.log_level, log::Level::Debug);
    }

    #[test]
    fn test_blank_url_and_bad_level_fall_back() {
        let config = AppConfig::from_values(Some("   "), Some("loud"));
        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert_eq!(config.log_level, log::Level::Info);
    }
}
