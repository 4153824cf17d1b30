//! Active city event listing.

use transcity_types::{CityEventId, EventEntry};

use crate::catalog::Catalog;

/// Title used when an event definition has no name.
pub const DEFAULT_EVENT_TITLE: &str = "Event";

/// Describe the given active events.
///
/// Ids missing from the catalog are skipped. The timer is reserved for a
/// countdown and left empty.
pub fn list_events(active: &[CityEventId], catalog: &Catalog) -> Vec<EventEntry> {
    active
        .iter()
        .filter_map(|id| {
            let Some(def) = catalog.event(id) else {
                tracing::debug!(event_id = %id, "Skipping event missing from catalog");
                return None;
            };
            Some(EventEntry {
                title: def
                    .name
                    .clone()
                    .unwrap_or_else(|| String::from(DEFAULT_EVENT_TITLE)),
                note: def.description.clone().unwrap_or_default(),
                timer: String::new(),
            })
        })
        .collect()
}
