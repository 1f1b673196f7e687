//! HTTP Transport
//!
//! One `fetch` per call, no retries and no timeouts. Response handling is kept
//! in plain functions so it can be exercised without a browser.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::browser::js_error_message;
use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};
use crate::session::{KeyValueStore, Session};

/// `application/x-www-form-urlencoded` keeps `*-._` and turns spaces into `+`
const FORM_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b' ');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// ========================
// URL Building
// ========================

/// Absolute URL for an API path such as `/api/bairros`
pub fn endpoint(path: &str) -> String {
    format!("{}{}", AppConfig::get().api_base_url, path)
}

/// Encode non-empty parameters; empty values are omitted entirely
pub fn query_string(params: &[(&str, String)]) -> String {
    params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| {
            let encoded = utf8_percent_encode(value, FORM_VALUE).to_string().replace(' ', "+");
            format!("{}={}", key, encoded)
        })
        .collect::<Vec<_>>()
        .join("&")
}

pub fn with_query(path: &str, params: &[(&str, String)]) -> String {
    let query = query_string(params);
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

// ========================
// Response Handling
// ========================

/// The backend reports failures as `{"error": ...}`; JWT failures use `msg`
pub fn backend_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error", "msg", "message"]
        .iter()
        .find_map(|key| value.get(*key)?.as_str().map(str::to_string))
        .filter(|msg| !msg.is_empty())
}

/// Body of a 2xx response, otherwise an `ApiError::Http`
pub fn expect_success(resp: HttpResponse, fallback: &str) -> ApiResult<String> {
    if resp.is_success() {
        return Ok(resp.body);
    }
    let message = backend_message(&resp.body)
        .unwrap_or_else(|| format!("{} (HTTP {})", fallback, resp.status));
    log::error!("Backend returned {}: {}", resp.status, message);
    Err(ApiError::Http { status: resp.status, message })
}

pub fn decode<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    Ok(serde_json::from_str(body)?)
}

/// HTTP 401 on an authenticated call ends the session
pub fn guard_unauthorized<S: KeyValueStore>(session: &Session<S>, resp: HttpResponse) -> ApiResult<HttpResponse> {
    if resp.status == 401 {
        log::warn!("Received 401, clearing session");
        session.clear();
        return Err(ApiError::SessionExpired);
    }
    Ok(resp)
}

// ========================
// Transport
// ========================

fn network_error(err: JsValue) -> ApiError {
    ApiError::Network(js_error_message(&err))
}

/// Issue a single request with JSON headers and optional bearer token
pub async fn send(method: Method, url: &str, body: Option<String>, token: Option<&str>) -> ApiResult<HttpResponse> {
    log::debug!("{} {}", method.as_str(), url);

    let headers = web_sys::Headers::new().map_err(network_error)?;
    headers.set("Content-Type", "application/json").map_err(network_error)?;
    if let Some(token) = token {
        headers
            .set("Authorization", &format!("Bearer {}", token))
            .map_err(network_error)?;
    }

    let opts = web_sys::RequestInit::new();
    opts.set_method(method.as_str());
    opts.set_mode(web_sys::RequestMode::Cors);
    opts.set_headers(&headers);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = web_sys::Request::new_with_str_and_init(url, &opts).map_err(network_error)?;
    let window = web_sys::window().ok_or_else(|| ApiError::Network("window not available".into()))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network_error)?;
    let response: web_sys::Response = resp_value.dyn_into().map_err(network_error)?;

    let text: js_sys::Promise = response.text().map_err(network_error)?;
    let body = JsFuture::from(text)
        .await
        .map_err(network_error)?
        .as_string()
        .unwrap_or_default();

    Ok(HttpResponse { status: response.status(), body })
}

/// `send` with the stored token attached and 401 handling
pub async fn fetch_with_auth<S: KeyValueStore>(
    session: &Session<S>,
    method: Method,
    url: &str,
    body: Option<String>,
) -> ApiResult<HttpResponse> {
    let token = session.token();
    let resp = send(method, url, body, token.as_deref()).await?;
    guard_unauthorized(session, resp)
}

/// GET + decode through the authenticated path
pub async fn get_json<S: KeyValueStore, T: DeserializeOwned>(
    session: &Session<S>,
    url: &str,
    fallback: &str,
) -> ApiResult<T> {
    let resp = fetch_with_auth(session, Method::Get, url, None).await?;
    decode(&expect_success(resp, fallback)?)
}

/// POST/PUT a JSON body + decode through the authenticated path
pub async fn send_json<S: KeyValueStore, B: Serialize, T: DeserializeOwned>(
    session: &Session<S>,
    method: Method,
    url: &str,
    body: &B,
    fallback: &str,
) -> ApiResult<T> {
    let body = serde_json::to_string(body)?;
    let resp = fetch_with_auth(session, method, url, Some(body)).await?;
    decode(&expect_success(resp, fallback)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::memory::MemoryStore;
    use crate::session::{TOKEN_KEY, USER_KEY};

    fn resp(status: u16, body: &str) -> HttpResponse {
        HttpResponse { status, body: body.to_string() }
    }

    #[test]
    fn test_query_skips_empty_values() {
        let q = query_string(&[("categoria", String::new()), ("status", "aberta".into())]);
        assert_eq!(q, "status=aberta");
        assert_eq!(with_query("/api/solicitacoes", &[("search", String::new())]), "/api/solicitacoes");
    }

    #[test]
    fn test_query_form_encoding() {
        let q = query_string(&[("bairro", "Jardim América".into()), ("search", "a+b&c".into())]);
        assert_eq!(q, "bairro=Jardim+Am%C3%A9rica&search=a%2Bb%26c");
    }

    #[test]
    fn test_backend_message_keys() {
        assert_eq!(backend_message(r#"{"error": "Vereador not found"}"#).as_deref(), Some("Vereador not found"));
        assert_eq!(backend_message(r#"{"msg": "Token has expired"}"#).as_deref(), Some("Token has expired"));
        assert_eq!(backend_message(r#"{"message": "Erro"}"#).as_deref(), Some("Erro"));
        assert_eq!(backend_message("<html>502</html>"), None);
        assert_eq!(backend_message(r#"{"error": ""}"#), None);
    }

    #[test]
    fn test_expect_success() {
        assert_eq!(expect_success(resp(201, "{}"), "x").unwrap(), "{}");

        let err = expect_success(resp(404, r#"{"error": "Solicitação not found"}"#), "Falha").unwrap_err();
        assert_eq!(err, ApiError::Http { status: 404, message: "Solicitação not found".into() });

        let err = expect_success(resp(502, "Bad Gateway"), "Falha ao buscar").unwrap_err();
        assert_eq!(err.to_string(), "Falha ao buscar (HTTP 502)");
    }

    #[test]
    fn test_unauthorized_clears_session() {
        let store = MemoryStore::default();
        store.set(TOKEN_KEY, "a.b.c");
        store.set(USER_KEY, r#"{"id":1,"nome":"Maria","email":"m@x.com"}"#);
        let session = Session::new(store.clone());

        let result = guard_unauthorized(&session, resp(401, r#"{"error": "Unauthorized"}"#));
        assert_eq!(result, Err(ApiError::SessionExpired));
        assert_eq!(store.len(), 0);
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_other_statuses_pass_through() {
        let store = MemoryStore::default();
        store.set(TOKEN_KEY, "a.b.c");
        let session = Session::new(store.clone());

        let passed = guard_unauthorized(&session, resp(403, "{}")).unwrap();
        assert_eq!(passed.status, 403);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_decode_error() {
        let result: ApiResult<crate::models::BairrosEnvelope> = decode("{\"bairros\": 3}");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
