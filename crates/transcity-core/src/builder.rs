//! Snapshot builder.
//!
//! The single entry point of the HUD: fetch the player and the city,
//! sample the clock once, and compose every part of the [`Snapshot`] from
//! that one instant. Composition itself is pure and cannot fail.

use chrono::{DateTime, Utc};
use transcity_db::{DbError, StateStore};
use transcity_types::{CityState, Player, PlayerId, PlayerSummary, Snapshot};

use crate::catalog::Catalog;
use crate::clock::Clock;
use crate::economy::EconomyRules;
use crate::events::list_events;
use crate::income::{business_entries, estate_entries};
use crate::mood::{MoodInputs, classify};
use crate::status::build_status;
use crate::timeline::{TimelineContext, build_timeline};

/// Errors that can occur while building a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// No player record exists for the id.
    #[error("player {0} not found")]
    NotFound(PlayerId),

    /// The state store could not be read.
    #[error("state store error: {0}")]
    Store(#[from] DbError),
}

/// Builds snapshots from injected collaborators.
#[derive(Clone, Copy)]
pub struct SnapshotBuilder<'a> {
    store: &'a StateStore,
    catalog: &'a Catalog,
    rules: &'a dyn EconomyRules,
    clock: Clock,
}

impl<'a> SnapshotBuilder<'a> {
    /// Create a builder over the given store, catalog, rules and clock.
    pub const fn new(
        store: &'a StateStore,
        catalog: &'a Catalog,
        rules: &'a dyn EconomyRules,
        clock: Clock,
    ) -> Self {
        Self {
            store,
            catalog,
            rules,
            clock,
        }
    }

    /// Build the snapshot for `player_id`.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::NotFound`] if the player does not exist, or
    /// [`SnapshotError::Store`] if the store read fails. No partial
    /// snapshot is ever returned.
    pub async fn build(&self, player_id: PlayerId) -> Result<Snapshot, SnapshotError> {
        let player = self
            .store
            .fetch_player(player_id)
            .await?
            .ok_or(SnapshotError::NotFound(player_id))?;
        let city = self.store.fetch_city_state().await?;
        let now = self.clock.now();

        Ok(self.compose(&player, &city, now))
    }

    /// Compose a snapshot from already-fetched state at instant `now`.
    pub fn compose(&self, player: &Player, city: &CityState, now: DateTime<Utc>) -> Snapshot {
        let tax_balance = self.rules.tax_balance(player);
        let mood = classify(&MoodInputs::from_player(player, tax_balance));
        let active_events = self.rules.active_event_ids(city, now);

        let snapshot = Snapshot {
            player: PlayerSummary {
                name: player.display_name(),
                job: player.job.clone(),
                level: player.level,
                wallet: player.wallet,
                bank: player.bank,
                debt: player.debt,
                mood: mood.headline().to_owned(),
                motto: mood.motto().to_owned(),
            },
            status: build_status(player, city, tax_balance),
            businesses: business_entries(player, self.catalog, self.rules, now),
            estates: estate_entries(player, self.catalog, now),
            events: list_events(&active_events, self.catalog),
            timeline: build_timeline(&TimelineContext {
                player,
                city,
                tax_balance,
                catalog: self.catalog,
            }),
        };

        tracing::debug!(
            player_id = %player.id,
            businesses = snapshot.businesses.len(),
            estates = snapshot.estates.len(),
            events = snapshot.events.len(),
            mood = ?mood,
            "Snapshot composed"
        );

        snapshot
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::sync::Arc;

    use chrono::TimeDelta;
    use rust_decimal::Decimal;
    use transcity_db::MemoryStore;
    use transcity_types::{
        Auction, BusinessHolding, BusinessId, CityEventId, EstateHolding, EstateId,
    };

    use super::*;
    use crate::economy::StandardEconomy;
    use crate::mood::Mood;
    use crate::timeline::SECRET_LOT;

    const CATALOG: &str = r#"
cooldowns:
  business_secs: 1800
  estate_rent_secs: 3600
businesses:
  reactor:
    name: "Neon Reactor"
    category: hi_tech
    base_income: 820
    income_step: 210
estates:
  cabin:
    name: "Warm Cabin"
    rent_income: 420
events:
  winter_fair:
    name: "Frozen Park"
    description: "Citizens stock up for the fair."
"#;

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_734_000_000, 0).unwrap()
    }

    struct Fixture {
        store: StateStore,
        memory: MemoryStore,
        catalog: Arc<Catalog>,
        rules: StandardEconomy,
    }

    impl Fixture {
        fn new() -> Self {
            let catalog = Arc::new(Catalog::from_yaml(CATALOG).unwrap());
            let memory = MemoryStore::new();
            Self {
                store: StateStore::from(memory.clone()),
                memory,
                rules: StandardEconomy::new(Arc::clone(&catalog)),
                catalog,
            }
        }

        fn builder(&self) -> SnapshotBuilder<'_> {
            SnapshotBuilder::new(&self.store, &self.catalog, &self.rules, Clock::Fixed(now()))
        }
    }

    #[tokio::test]
    async fn unknown_player_is_not_found() {
        let fixture = Fixture::new();
        let result = fixture.builder().build(PlayerId(404)).await;
        assert!(matches!(result, Err(SnapshotError::NotFound(PlayerId(404)))));
    }

    #[tokio::test]
    async fn debtor_gets_debt_mood_and_four_cards() {
        let fixture = Fixture::new();
        let mut player = Player::new(PlayerId(1));
        player.debt = 150;
        player.wallet = 100;
        player.bank = 50;
        fixture.memory.insert_player(player).await;

        let snapshot = fixture.builder().build(PlayerId(1)).await.unwrap();

        assert_eq!(snapshot.player.mood, Mood::TaxAuthorityWatching.headline());
        assert_eq!(snapshot.player.motto, Mood::TaxAuthorityWatching.motto());
        assert_eq!(snapshot.timeline.len(), 4);
        assert_eq!(snapshot.timeline[3].title, "Debt status");
        assert_eq!(snapshot.player.name, "Player 1");
    }

    #[tokio::test]
    async fn saver_gets_deposit_mood_and_three_cards() {
        let fixture = Fixture::new();
        let mut player = Player::new(PlayerId(2));
        player.wallet = 200;
        player.bank = 500;
        fixture.memory.insert_player(player).await;

        let snapshot = fixture.builder().build(PlayerId(2)).await.unwrap();

        assert_eq!(snapshot.player.mood, Mood::DepositGrowing.headline());
        assert_eq!(snapshot.timeline.len(), 3);
        assert_eq!(snapshot.status.tax_balance, Decimal::ZERO);
    }

    #[tokio::test]
    async fn tax_owed_drives_mood_and_status() {
        let fixture = Fixture::new();
        let mut player = Player::new(PlayerId(3));
        player.tax_accrued = Decimal::new(500, 0);
        player.tax_paid = Decimal::new(40, 0);
        player.bank = 1_000;
        fixture.memory.insert_player(player).await;

        let snapshot = fixture.builder().build(PlayerId(3)).await.unwrap();

        assert_eq!(snapshot.player.mood, Mood::TaxTimerTicking.headline());
        assert_eq!(snapshot.status.tax_balance, Decimal::new(460, 0));
        assert!(snapshot.timeline[0].text.contains("460$"));
    }

    #[tokio::test]
    async fn holdings_use_one_instant() {
        let fixture = Fixture::new();
        let mut player = Player::new(PlayerId(4));
        player.businesses.insert(
            BusinessId::from("reactor"),
            BusinessHolding {
                level: 3,
                last_collect: Some(now() - TimeDelta::seconds(100)),
                tag: None,
            },
        );
        player.businesses.insert(
            BusinessId::from("mystery_shop"),
            BusinessHolding {
                level: 3,
                last_collect: Some(now() - TimeDelta::seconds(100)),
                tag: None,
            },
        );
        player.estates.insert(
            EstateId::from("cabin"),
            EstateHolding {
                last_rent: Some(now() - TimeDelta::seconds(100)),
            },
        );
        fixture.memory.insert_player(player).await;

        let snapshot = fixture.builder().build(PlayerId(4)).await.unwrap();

        let reactor = &snapshot.businesses[0];
        assert_eq!(reactor.name, "Neon Reactor");
        assert_eq!(reactor.ready_in, 1700);
        assert_eq!(reactor.income, 1240);

        let mystery = &snapshot.businesses[1];
        assert_eq!(mystery.name, "mystery_shop");
        assert_eq!(mystery.ready_in, 1700);

        assert_eq!(snapshot.estates[0].ready_in, 3500);
        assert_eq!(snapshot.estates[0].rent, 420);
    }

    #[tokio::test]
    async fn city_state_flows_into_events_and_auction() {
        let fixture = Fixture::new();
        fixture.memory.insert_player(Player::new(PlayerId(5))).await;
        fixture
            .memory
            .set_city_state(CityState {
                auction: Auction {
                    active: true,
                    item_id: Some(BusinessId::from("X")),
                },
                events: vec![CityEventId::from("winter_fair"), CityEventId::from("ghost")],
                ..CityState::default()
            })
            .await;

        let snapshot = fixture.builder().build(PlayerId(5)).await.unwrap();

        assert_eq!(snapshot.events.len(), 1);
        assert_eq!(snapshot.events[0].title, "Frozen Park");
        assert!(snapshot.timeline[1].text.ends_with(SECRET_LOT));
        assert_eq!(snapshot.status.city_note, "An auction is running right now.");
    }

    #[test]
    fn compose_is_deterministic() {
        let fixture = Fixture::new();
        let mut player = Player::new(PlayerId(6));
        player.username = Some(String::from("Mira"));
        player.job = Some(String::from("Courier"));
        let city = CityState::default();

        let builder = fixture.builder();
        let first = builder.compose(&player, &city, now());
        let second = builder.compose(&player, &city, now());
        assert_eq!(first, second);
        assert_eq!(first.player.name, "Mira");
        assert_eq!(first.player.job.as_deref(), Some("Courier"));
        assert_eq!(first.player.mood, Mood::BalanceUnderControl.headline());
    }
}
