//! Economic state store for the TransCity HUD.
//!
//! The game bot owns and mutates player and city state. The HUD only needs
//! a consistent point-in-time copy of both, so this crate exposes a small
//! read-only surface over two backends:
//!
//! ```text
//! StateStore
//!     |
//!     +-- Postgres --> PostgresPool
//!     |                 |-- PlayerStore  (players table)
//!     |                 +-- CityStore    (city_state table)
//!     |
//!     +-- Memory ----> MemoryStore (fixtures, demo seed)
//! ```
//!
//! # Modules
//!
//! - [`store`] -- [`StateStore`] enum dispatching to a backend
//! - [`postgres`] -- `PostgreSQL` connection pool and configuration
//! - [`player_store`] -- Player row queries
//! - [`city_store`] -- City state queries
//! - [`legacy`] -- Decoding of the bot's JSON blobs and epoch timestamps
//! - [`memory`] -- In-memory backend
//! - [`error`] -- Shared error types

pub mod city_store;
pub mod error;
pub mod legacy;
pub mod memory;
pub mod player_store;
pub mod postgres;
pub mod store;

// Re-export primary types for convenience.
pub use city_store::{CityStateRow, CityStore};
pub use error::DbError;
pub use memory::{MemorySeed, MemoryStore};
pub use player_store::{PlayerRow, PlayerStore};
pub use postgres::{PostgresConfig, PostgresPool};
pub use store::StateStore;
