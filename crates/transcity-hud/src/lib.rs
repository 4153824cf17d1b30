//! HUD API server for TransCity.
//!
//! This crate provides an Axum HTTP server that exposes a single read-only
//! endpoint, `GET /api/state/{user_id}`, returning the player's economy
//! snapshot for the web dashboard.
//!
//! # Architecture
//!
//! Handlers hold no logic of their own. Each request borrows the shared
//! [`AppState`] (store, catalog, economy rules, clock), hands it to a
//! [`SnapshotBuilder`](transcity_core::SnapshotBuilder) and serializes the
//! result. Errors map to JSON bodies through [`HudError`].
//!
//! [`HudError`]: error::HudError

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
