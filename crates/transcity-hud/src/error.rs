//! HTTP error mapping for the HUD API.
//!
//! Every failure leaves the server as a JSON body of the form
//! `{"error": "<message>", "status": <code>}`. Store failures are logged
//! in full here and reach the client only as a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use transcity_core::SnapshotError;

/// Errors returned by HUD handlers.
#[derive(Debug, thiserror::Error)]
pub enum HudError {
    /// The player does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The snapshot could not be built.
    #[error("{0}")]
    Internal(String),
}

impl HudError {
    /// HTTP status for this error.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SnapshotError> for HudError {
    fn from(err: SnapshotError) -> Self {
        match err {
            SnapshotError::NotFound(id) => {
                tracing::warn!(player_id = %id, "Player not found");
                Self::NotFound(format!("player {id} not found"))
            }
            SnapshotError::Store(e) => {
                tracing::error!(error = %e, "State store read failed");
                Self::Internal(String::from("state store unavailable"))
            }
        }
    }
}

impl IntoResponse for HudError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });
        (status, axum::Json(body)).into_response()
    }
}
