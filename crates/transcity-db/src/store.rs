//! Backend-agnostic access to economic state.
//!
//! Uses enum dispatch instead of trait objects because async methods
//! are not dyn-compatible.

use transcity_types::{CityState, Player, PlayerId};

use crate::city_store::CityStore;
use crate::error::DbError;
use crate::memory::MemoryStore;
use crate::player_store::PlayerStore;
use crate::postgres::PostgresPool;

/// A read-only source of player and city state.
#[derive(Clone)]
pub enum StateStore {
    /// `PostgreSQL` tables written by the bot.
    Postgres(PostgresPool),
    /// Process-local maps.
    Memory(MemoryStore),
}

impl StateStore {
    /// Fetch a player by id. `Ok(None)` means no such player.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the backend read fails.
    pub async fn fetch_player(&self, id: PlayerId) -> Result<Option<Player>, DbError> {
        match self {
            Self::Postgres(pool) => PlayerStore::new(pool.pool()).get_player(id).await,
            Self::Memory(store) => Ok(store.get_player(id).await),
        }
    }

    /// Fetch the city state.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the backend read fails.
    pub async fn fetch_city_state(&self) -> Result<CityState, DbError> {
        match self {
            Self::Postgres(pool) => CityStore::new(pool.pool()).get_city_state().await,
            Self::Memory(store) => Ok(store.get_city_state().await),
        }
    }

    /// Human-readable backend name for logging.
    pub const fn name(&self) -> &str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }
}

impl From<MemoryStore> for StateStore {
    fn from(store: MemoryStore) -> Self {
        Self::Memory(store)
    }
}

impl From<PostgresPool> for StateStore {
    fn from(pool: PostgresPool) -> Self {
        Self::Postgres(pool)
    }
}
