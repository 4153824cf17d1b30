//! Shared application state for the HUD API server.
//!
//! Everything in [`AppState`] is immutable after startup: the catalog is
//! loaded once, the economy rules are pure, and the store only reads.
//! Concurrent requests therefore share it without locking.

use std::sync::Arc;

use transcity_core::{Catalog, Clock, EconomyRules, SnapshotBuilder, StandardEconomy};
use transcity_db::StateStore;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// Source of player and city state.
    pub store: StateStore,
    /// Reference catalog.
    pub catalog: Arc<Catalog>,
    /// Economy queries.
    pub rules: Arc<dyn EconomyRules>,
    /// Source of "now".
    pub clock: Clock,
}

impl AppState {
    /// Create state with the standard economy rules and the system clock.
    pub fn new(store: StateStore, catalog: Arc<Catalog>) -> Self {
        let rules: Arc<dyn EconomyRules> = Arc::new(StandardEconomy::new(Arc::clone(&catalog)));
        Self {
            store,
            catalog,
            rules,
            clock: Clock::System,
        }
    }

    /// Replace the clock.
    #[must_use]
    pub const fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the economy rules.
    #[must_use]
    pub fn with_rules(mut self, rules: Arc<dyn EconomyRules>) -> Self {
        self.rules = rules;
        self
    }

    /// A snapshot builder borrowing this state.
    pub fn builder(&self) -> SnapshotBuilder<'_> {
        SnapshotBuilder::new(&self.store, &self.catalog, self.rules.as_ref(), self.clock)
    }
}
