//! Client Errors
//!
//! Failures surfaced by the API client. Every variant renders as a message a
//! citizen can read; nothing here is fatal.

use crate::config::AppConfig;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (backend down, CORS, offline)
    Network(String),
    /// Non-2xx response; `message` is the backend's when it sent one
    Http { status: u16, message: String },
    /// HTTP 401 on an authenticated call; the session has been cleared
    SessionExpired,
    /// A token is required and none is stored
    AuthRequired,
    /// A 2xx body that did not match the expected shape
    Decode(String),
}

impl ApiError {
    /// Errors after which the stored session must not be reused
    pub fn is_session_error(&self) -> bool {
        matches!(self, ApiError::SessionExpired | ApiError::AuthRequired)
    }

    /// Session errors, plus backend messages that read like a rejected JWT.
    /// Only meaningful right after sending the token on a write.
    pub fn is_token_rejection(&self) -> bool {
        match self {
            ApiError::Http { message, .. } => {
                message.contains("token") || message.contains("expired") || message.contains("Invalid")
            }
            other => other.is_session_error(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(_) => write!(
                f,
                "Servidor não disponível. Certifique-se de que o backend está rodando em {}",
                AppConfig::get().api_base_url
            ),
            ApiError::Http { message, .. } => write!(f, "{}", message),
            ApiError::SessionExpired => write!(f, "Sessão expirada. Por favor, faça login novamente."),
            ApiError::AuthRequired => write!(f, "Você precisa estar logado para continuar."),
            ApiError::Decode(msg) => write!(f, "Resposta inesperada do servidor: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_error_detection() {
        assert!(ApiError::SessionExpired.is_session_error());
        assert!(ApiError::AuthRequired.is_session_error());
        assert!(!ApiError::Network("TypeError".into()).is_session_error());
    }

    #[test]
    fn test_backend_message_alone_keeps_session() {
        let err = ApiError::Http { status: 500, message: "Invalid input for query parameter".into() };
        assert!(!err.is_session_error());
        let err = ApiError::Http { status: 422, message: "Not enough segments in token".into() };
        assert!(!err.is_session_error());
    }

    #[test]
    fn test_token_rejection_detection() {
        assert!(ApiError::SessionExpired.is_token_rejection());
        assert!(ApiError::Http {
            status: 401,
            message: "Invalid or expired token. Please login again.".into()
        }
        .is_token_rejection());
        assert!(ApiError::Http { status: 422, message: "Not enough segments in token".into() }.is_token_rejection());
        assert!(!ApiError::Http { status: 400, message: "titulo is required".into() }.is_token_rejection());
        assert!(!ApiError::Network("TypeError".into()).is_token_rejection());
    }

    #[test]
    fn test_http_error_shows_backend_message() {
        let err = ApiError::Http { status: 400, message: "Email already registered".into() };
        assert_eq!(err.to_string(), "Email already registered");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_network_error_mentions_backend_url() {
        let err = ApiError::Network("Failed to fetch".into());
        assert!(err.to_string().contains(&AppConfig::get().api_base_url));
    }
}
