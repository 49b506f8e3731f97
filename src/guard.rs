//! Access Guard
//!
//! Two extractors over the same session lookup. API routes take `ApiUser`
//! and fail with a 401 JSON body; page routes take `PageUser` and bounce to
//! the login page instead.

use axum::extract::FromRequestParts;
use axum::http::header::{InvalidHeaderValue, COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderName, HeaderValue};
use axum::response::Redirect;

use crate::auth::UserIdentity;
use crate::error::GameError;
use crate::server::AppState;
use crate::session::SessionId;

pub const SESSION_COOKIE: &str = "swara_session";
pub const LOGIN_PATH: &str = "/login";

/// Pull our session id out of the request's Cookie headers
pub fn session_id(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

/// Resolve the live identity behind the request, if any
pub async fn current_user(state: &AppState, headers: &HeaderMap) -> Option<(SessionId, UserIdentity)> {
    let id = session_id(headers)?;
    let user = state.sessions.identity(&id).await?;
    Some((id, user))
}

/// `Set-Cookie` for a new session. Fails if the id holds bytes a header
/// value cannot carry.
pub fn session_cookie(id: &str) -> Result<(HeaderName, HeaderValue), InvalidHeaderValue> {
    let value = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, id);
    Ok((SET_COOKIE, HeaderValue::try_from(value)?))
}

pub fn clear_session_cookie() -> (HeaderName, HeaderValue) {
    (
        SET_COOKIE,
        HeaderValue::from_static("swara_session=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0"),
    )
}

/// Identity for data routes
#[derive(Debug, Clone)]
pub struct ApiUser {
    pub session_id: SessionId,
    pub user: UserIdentity,
}

impl FromRequestParts<AppState> for ApiUser {
    type Rejection = GameError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let (session_id, user) = current_user(state, &parts.headers)
            .await
            .ok_or(GameError::Unauthorized)?;
        Ok(Self { session_id, user })
    }
}

/// Identity for navigation routes
#[derive(Debug, Clone)]
pub struct PageUser {
    pub session_id: SessionId,
    pub user: UserIdentity,
}

impl FromRequestParts<AppState> for PageUser {
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let (session_id, user) = current_user(state, &parts.headers)
            .await
            .ok_or_else(|| Redirect::to(LOGIN_PATH))?;
        Ok(Self { session_id, user })
    }
}
