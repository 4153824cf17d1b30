//! The display-ready snapshot returned to the dashboard.
//!
//! Field order in each struct is the order of keys in the JSON response.
//! A snapshot is derived fresh on every request and never persisted.
//!
//! `serde_json` writes every integer here as a plain JSON number, so the
//! `TypeScript` bindings declare them as `number` rather than `bigint`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::{BusinessId, EstateId};

/// Full derived view of one player's economy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Snapshot {
    /// Player summary with mood/motto.
    pub player: PlayerSummary,
    /// Tax, bank, debt and city status cards.
    pub status: StatusBlock,
    /// Owned businesses sorted by name.
    pub businesses: Vec<BusinessEntry>,
    /// Owned estates sorted by name.
    pub estates: Vec<EstateEntry>,
    /// Currently active city events.
    pub events: Vec<EventEntry>,
    /// Narrative timeline in display order.
    pub timeline: Vec<TimelineEntry>,
}

/// Hero block of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PlayerSummary {
    /// Display name.
    pub name: String,
    /// Job title, `null` when the player has none.
    pub job: Option<String>,
    /// Player level.
    pub level: u32,
    /// Cash on hand.
    #[ts(type = "number")]
    pub wallet: i64,
    /// Bank deposit.
    #[ts(type = "number")]
    pub bank: i64,
    /// Outstanding debt.
    #[ts(type = "number")]
    pub debt: i64,
    /// One-line mood classification.
    pub mood: String,
    /// Advice paired with the mood.
    pub motto: String,
}

/// Status cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct StatusBlock {
    /// Tax currently owed.
    #[serde(with = "rust_decimal::serde::float")]
    #[ts(type = "number")]
    pub tax_balance: Decimal,
    /// Tax reminder or the mayor's note.
    pub tax_note: String,
    /// Deposit rate note.
    pub bank_note: String,
    /// Overdue debt note.
    pub debt_note: String,
    /// Headline for the city card.
    pub city_mood: String,
    /// Auction status line for the city card.
    pub city_note: String,
}

/// One owned business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BusinessEntry {
    /// Catalog id.
    pub id: BusinessId,
    /// Catalog name, or the id when the catalog has none.
    pub name: String,
    /// Catalog category, `null` when unknown.
    pub category: Option<String>,
    /// Income per collection at the current level.
    #[ts(type = "number")]
    pub income: i64,
    /// Upgrade level.
    pub level: u32,
    /// Seconds until income can be collected again.
    #[ts(type = "number")]
    pub ready_in: u64,
    /// Label set by the economy engine.
    pub tag: Option<String>,
}

/// One owned estate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EstateEntry {
    /// Catalog id.
    pub id: EstateId,
    /// Catalog name, or the id when the catalog has none.
    pub name: String,
    /// Rent per collection.
    #[ts(type = "number")]
    pub rent: i64,
    /// Seconds until rent can be taken again.
    #[ts(type = "number")]
    pub ready_in: u64,
    /// Catalog description.
    pub note: String,
}

/// One active city event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EventEntry {
    /// Event name.
    pub title: String,
    /// Event description.
    pub note: String,
    /// Countdown label. Always empty for now.
    pub timer: String,
}

/// One timeline card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TimelineEntry {
    /// Card title.
    pub title: String,
    /// Card body.
    pub text: String,
}

impl TimelineEntry {
    /// Build an entry from any string-like title and text.
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}
