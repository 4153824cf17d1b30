//! Snapshot derivation for the TransCity HUD.
//!
//! Turns a player's persisted economic state, the city state and the
//! static reference catalog into the display model served to the web
//! dashboard. Nothing in this crate writes state.
//!
//! # Modules
//!
//! - [`catalog`] -- Business, estate and event definitions plus cooldowns
//! - [`config`] -- YAML configuration for the HUD process
//! - [`clock`] -- Wall clock or fixed clock for "now" sampling
//! - [`economy`] -- [`EconomyRules`] seam for income, tax and event queries
//! - [`income`] -- Business income and estate rent readiness
//! - [`status`] -- Status cards
//! - [`timeline`] -- Ordered narrative timeline
//! - [`events`] -- Active city event listing
//! - [`mood`] -- Priority-ordered mood/motto classification
//! - [`builder`] -- [`SnapshotBuilder`], the single entry point
//!
//! [`EconomyRules`]: economy::EconomyRules
//! [`SnapshotBuilder`]: builder::SnapshotBuilder

pub mod builder;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod economy;
pub mod events;
pub mod income;
pub mod mood;
pub mod status;
pub mod timeline;

pub use builder::{SnapshotBuilder, SnapshotError};
pub use catalog::{BusinessDef, Catalog, CatalogError, Cooldowns, EstateDef, EventDef};
pub use clock::Clock;
pub use config::{ConfigError, HudConfig};
pub use economy::{EconomyRules, StandardEconomy};
pub use mood::Mood;
