//! Route table for the HUD API.
//!
//! The dashboard is a static page served from another origin, so CORS is
//! wide open. The API is read-only and carries no credentials.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the HUD router:
///
/// - `GET /api/state/{user_id}` -- player economy snapshot
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/state/{user_id}", get(handlers::get_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
