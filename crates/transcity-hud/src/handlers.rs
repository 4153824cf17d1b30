//! REST API endpoint handlers for the HUD server.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/state/{user_id}` | Economy snapshot of one player |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use transcity_types::{PlayerId, Snapshot};

use crate::error::HudError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /api/state/{user_id} -- player snapshot
// ---------------------------------------------------------------------------

/// Return the full snapshot for a player.
///
/// Responds 404 when the player does not exist. A non-numeric `user_id`
/// is rejected by the path extractor before reaching this handler.
pub async fn get_state(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<Json<Snapshot>, HudError> {
    let player_id = PlayerId(user_id);
    tracing::debug!(player_id = %player_id, store = state.store.name(), "Snapshot requested");

    let snapshot = state.builder().build(player_id).await?;
    Ok(Json(snapshot))
}
