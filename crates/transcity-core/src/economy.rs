//! Queries owned by the game-economy engine.
//!
//! Income per level, the outstanding tax balance and the resolution of
//! active city events are economy rules, not HUD logic. The HUD consumes
//! them through [`EconomyRules`] so a different engine (or a test double)
//! can be injected. [`StandardEconomy`] implements the rules the bot uses,
//! driven by the reference catalog.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use transcity_types::{BusinessId, CityEventId, CityState, Player};

use crate::catalog::Catalog;

/// Pure economy queries consumed by the snapshot builder.
pub trait EconomyRules: Send + Sync {
    /// Income per collection of business `id` at `level`.
    ///
    /// Unknown businesses earn nothing.
    fn business_income(&self, id: &BusinessId, level: u32) -> i64;

    /// Tax currently owed by `player`.
    fn tax_balance(&self, player: &Player) -> Decimal;

    /// Events in effect at `now`, in display order.
    fn active_event_ids(&self, city: &CityState, now: DateTime<Utc>) -> Vec<CityEventId>;
}

/// The bot's economy rules.
#[derive(Debug, Clone)]
pub struct StandardEconomy {
    catalog: Arc<Catalog>,
}

impl StandardEconomy {
    /// Create rules backed by `catalog`.
    pub const fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl EconomyRules for StandardEconomy {
    fn business_income(&self, id: &BusinessId, level: u32) -> i64 {
        self.catalog
            .business(id)
            .map_or(0, |def| def.income_at(level))
    }

    fn tax_balance(&self, player: &Player) -> Decimal {
        player
            .tax_accrued
            .checked_sub(player.tax_paid)
            .unwrap_or(Decimal::ZERO)
            .max(Decimal::ZERO)
    }

    /// Keeps activation order, drops repeats and events past their deadline.
    fn active_event_ids(&self, city: &CityState, now: DateTime<Utc>) -> Vec<CityEventId> {
        let mut seen = BTreeSet::new();
        city.events
            .iter()
            .filter(|id| {
                city.event_deadlines
                    .get(*id)
                    .is_none_or(|deadline| *deadline > now)
            })
            .filter(|id| seen.insert((*id).clone()))
            .cloned()
            .collect()
    }
}
