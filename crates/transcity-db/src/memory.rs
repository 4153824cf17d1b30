//! In-memory state backend.
//!
//! Holds players and the city state in process memory. Used for tests,
//! fixtures and running the HUD against a demo seed without a database.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tokio::sync::RwLock;
use transcity_types::{CityState, Player, PlayerId};

use crate::error::DbError;

/// Seed file contents for a [`MemoryStore`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemorySeed {
    /// Players to preload.
    #[serde(default)]
    pub players: Vec<Player>,
    /// City state to preload.
    #[serde(default)]
    pub city: CityState,
}

/// In-memory store of players and city state.
///
/// Cloning shares the underlying maps.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    players: Arc<RwLock<BTreeMap<PlayerId, Player>>>,
    city: Arc<RwLock<CityState>>,
}

impl MemoryStore {
    /// Create an empty store with the default city state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded from a seed.
    pub fn from_seed(seed: MemorySeed) -> Self {
        let players = seed.players.into_iter().map(|p| (p.id, p)).collect();
        Self {
            players: Arc::new(RwLock::new(players)),
            city: Arc::new(RwLock::new(seed.city)),
        }
    }

    /// Load a JSON seed file.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Config`] if the file cannot be read, or
    /// [`DbError::Serialization`] if it is not a valid seed.
    pub fn from_seed_file(path: &Path) -> Result<Self, DbError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            DbError::Config(format!("cannot read seed file {}: {e}", path.display()))
        })?;
        let seed: MemorySeed = serde_json::from_str(&contents)?;
        tracing::info!(path = %path.display(), "Loaded in-memory seed");
        Ok(Self::from_seed(seed))
    }

    /// Insert or replace a player.
    pub async fn insert_player(&self, player: Player) {
        self.players.write().await.insert(player.id, player);
    }

    /// Replace the city state.
    pub async fn set_city_state(&self, city: CityState) {
        *self.city.write().await = city;
    }

    /// Return a copy of the player with the given id.
    pub async fn get_player(&self, id: PlayerId) -> Option<Player> {
        self.players.read().await.get(&id).cloned()
    }

    /// Return a copy of the city state.
    pub async fn get_city_state(&self) -> CityState {
        self.city.read().await.clone()
    }

    /// Number of stored players.
    pub async fn player_count(&self) -> usize {
        self.players.read().await.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_copies_of_inserted_players() {
        let store = MemoryStore::new();
        let mut player = Player::new(PlayerId(1));
        player.wallet = 10;
        store.insert_player(player).await;

        let fetched = store.get_player(PlayerId(1)).await.unwrap();
        assert_eq!(fetched.wallet, 10);
        assert!(store.get_player(PlayerId(2)).await.is_none());
    }

    #[tokio::test]
    async fn seed_parses_players_and_city() {
        let seed: MemorySeed = serde_json::from_str(
            r#"{
                "players": [{"id": 5, "username": "Ada", "wallet": 200, "bank": 500}],
                "city": {"tax_modifier": 1.5, "auction": {"active": true, "item_id": "kiosk"}}
            }"#,
        )
        .unwrap();
        let store = MemoryStore::from_seed(seed);

        assert_eq!(store.player_count().await, 1);
        let city = store.get_city_state().await;
        assert!(city.auction.active);
        assert!((city.tax_modifier - 1.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        other.insert_player(Player::new(PlayerId(9))).await;
        assert_eq!(store.player_count().await, 1);
    }
}
