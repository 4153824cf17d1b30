//! Shared type definitions for the TransCity HUD.
//!
//! This crate holds the records read from the economic state store and the
//! display model returned to the dashboard. Snapshot types flow downstream
//! to `TypeScript` via `ts-rs` so the web HUD can type its fetch payload.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe wrappers for player, business, estate and event identifiers
//! - [`structs`] -- Persisted economic records (`Player`, `CityState`)
//! - [`snapshot`] -- The derived, display-ready `Snapshot` and its parts

pub mod ids;
pub mod snapshot;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use ids::{BusinessId, CityEventId, EstateId, PlayerId};
pub use snapshot::{
    BusinessEntry, EstateEntry, EventEntry, PlayerSummary, Snapshot, StatusBlock, TimelineEntry,
};
pub use structs::{Auction, BusinessHolding, CityState, EstateHolding, Player};
