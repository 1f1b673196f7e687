//! Auth Endpoints
//!
//! Login and registration. Both cache the returned token and user.

use super::http::{decode, endpoint, expect_success, send, HttpResponse, Method};
use crate::error::ApiResult;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, User};
use crate::session::{KeyValueStore, Session};

/// Decode an auth response and cache it. A 401 here is bad credentials, not
/// an expired session, so nothing stored is touched on failure.
pub fn complete_auth<S: KeyValueStore>(session: &Session<S>, resp: HttpResponse, fallback: &str) -> ApiResult<User> {
    let auth: AuthResponse = decode(&expect_success(resp, fallback)?)?;
    session.store(&auth);
    log::info!("Authenticated user {}", auth.user.id);
    Ok(auth.user)
}

pub async fn login<S: KeyValueStore>(session: &Session<S>, email: &str, password: &str) -> ApiResult<User> {
    let body = serde_json::to_string(&LoginRequest { email, password })?;
    let resp = send(Method::Post, &endpoint("/api/auth/login"), Some(body), None).await?;
    complete_auth(session, resp, "Falha ao fazer login")
}

pub async fn register<S: KeyValueStore>(session: &Session<S>, data: &RegisterRequest) -> ApiResult<User> {
    let body = serde_json::to_string(data)?;
    let resp = send(Method::Post, &endpoint("/api/auth/register"), Some(body), None).await?;
    complete_auth(session, resp, "Falha ao criar conta")
}
