//! Error taxonomy for the game service
//!
//! Every failure a client can observe maps to exactly one variant here.
//! Process-level failures (bind, serve, config) stay in `anyhow`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// No established identity in the session
    #[error("Unauthorized")]
    Unauthorized,
    /// Level key outside the configured level table
    #[error("Invalid level: {0}")]
    InvalidLevel(i64),
    /// Login mismatch; deliberately says nothing about which field was wrong
    #[error("Invalid username or password.")]
    InvalidCredentials,
}

impl GameError {
    pub fn status(&self) -> StatusCode {
        match self {
            GameError::Unauthorized | GameError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            GameError::InvalidLevel(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        (self.status(), Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

pub type GameResult<T> = std::result::Result<T, GameError>;
