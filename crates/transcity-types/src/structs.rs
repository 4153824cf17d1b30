//! Persisted economic records.
//!
//! These are the point-in-time copies of player and city state that the
//! HUD reads from the store. The economy engine owns and mutates them; the
//! HUD never writes them back.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::{BusinessId, CityEventId, EstateId, PlayerId};

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// A player's economic state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Messenger user id.
    pub id: PlayerId,
    /// Display name, if the player has one.
    #[serde(default)]
    pub username: Option<String>,
    /// Current job title.
    #[serde(default)]
    pub job: Option<String>,
    /// Player level.
    #[serde(default)]
    pub level: u32,
    /// Cash on hand, in whole currency units.
    #[serde(default)]
    pub wallet: i64,
    /// Bank deposit, in whole currency units.
    #[serde(default)]
    pub bank: i64,
    /// Outstanding debt. Zero means no delinquency.
    #[serde(default)]
    pub debt: i64,
    /// Total tax charged to the player so far.
    #[serde(default)]
    pub tax_accrued: Decimal,
    /// Total tax the player has paid so far.
    #[serde(default)]
    pub tax_paid: Decimal,
    /// Owned businesses keyed by catalog id.
    #[serde(default)]
    pub businesses: BTreeMap<BusinessId, BusinessHolding>,
    /// Owned estates keyed by catalog id.
    #[serde(default)]
    pub estates: BTreeMap<EstateId, EstateHolding>,
}

impl Player {
    /// Create a player with no money, holdings or tax history.
    pub const fn new(id: PlayerId) -> Self {
        Self {
            id,
            username: None,
            job: None,
            level: 0,
            wallet: 0,
            bank: 0,
            debt: 0,
            tax_accrued: Decimal::ZERO,
            tax_paid: Decimal::ZERO,
            businesses: BTreeMap::new(),
            estates: BTreeMap::new(),
        }
    }

    /// Name shown on the dashboard.
    ///
    /// Falls back to `Player {id}` when the username is absent or blank.
    pub fn display_name(&self) -> String {
        match self.username.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => format!("Player {}", self.id),
        }
    }

    /// Whether the player currently owes overdue debt.
    pub const fn in_debt(&self) -> bool {
        self.debt > 0
    }
}

/// State of a single owned business.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHolding {
    /// Upgrade level. Income scales with it.
    #[serde(default)]
    pub level: u32,
    /// When income was last collected. `None` means never.
    #[serde(default)]
    pub last_collect: Option<DateTime<Utc>>,
    /// Free-form label set by the economy engine (e.g. a promo badge).
    #[serde(default)]
    pub tag: Option<String>,
}

/// State of a single owned estate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstateHolding {
    /// When rent was last taken. `None` means never.
    #[serde(default)]
    pub last_rent: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// City
// ---------------------------------------------------------------------------

/// City-wide state shared by all players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityState {
    /// Multiplier applied to taxes by the mayor.
    #[serde(default = "default_tax_modifier")]
    pub tax_modifier: f64,
    /// The current auction.
    #[serde(default)]
    pub auction: Auction,
    /// Active event ids in activation order.
    #[serde(default)]
    pub events: Vec<CityEventId>,
    /// Game-time expiry per event. Events without a deadline run until removed.
    #[serde(default)]
    pub event_deadlines: BTreeMap<CityEventId, DateTime<Utc>>,
    /// Note published by the mayor alongside the events.
    #[serde(default)]
    pub event_note: Option<String>,
}

const fn default_tax_modifier() -> f64 {
    1.0
}

impl Default for CityState {
    fn default() -> Self {
        Self {
            tax_modifier: default_tax_modifier(),
            auction: Auction::default(),
            events: Vec::new(),
            event_deadlines: BTreeMap::new(),
            event_note: None,
        }
    }
}

/// The city auction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auction {
    /// Whether bidding is open.
    #[serde(default)]
    pub active: bool,
    /// The business being auctioned, if announced.
    #[serde(default)]
    pub item_id: Option<BusinessId>,
}
