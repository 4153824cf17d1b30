//! Narrative timeline.
//!
//! The timeline is a fixed sequence of cards. [`TIMELINE_ORDER`] is the
//! display contract; each section decides only whether it appears and
//! what it says.

use rust_decimal::Decimal;
use transcity_types::{CityState, Player, TimelineEntry};

use crate::catalog::Catalog;

/// Lot name used when the auctioned business is unknown or unnamed.
pub const SECRET_LOT: &str = "secret lot";

/// One card of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineSection {
    /// Tax modifier and balance due.
    TaxActivity,
    /// Auction status.
    Auction,
    /// Advisory on city events.
    CityEffects,
    /// Overdue debt warning. Only shown while in debt.
    DebtStatus,
}

/// Sections in display order.
pub const TIMELINE_ORDER: [TimelineSection; 4] = [
    TimelineSection::TaxActivity,
    TimelineSection::Auction,
    TimelineSection::CityEffects,
    TimelineSection::DebtStatus,
];

/// Everything the timeline cards are rendered from.
#[derive(Debug, Clone, Copy)]
pub struct TimelineContext<'a> {
    /// The player.
    pub player: &'a Player,
    /// The city.
    pub city: &'a CityState,
    /// Tax currently owed by the player.
    pub tax_balance: Decimal,
    /// Reference catalog, for the auction lot name.
    pub catalog: &'a Catalog,
}

impl TimelineSection {
    /// Card title.
    pub const fn title(self) -> &'static str {
        match self {
            Self::TaxActivity => "Tax activity",
            Self::Auction => "Auction",
            Self::CityEffects => "City effects",
            Self::DebtStatus => "Debt status",
        }
    }

    /// Render this card, or `None` when it does not apply.
    pub fn render(self, ctx: &TimelineContext<'_>) -> Option<TimelineEntry> {
        let text = match self {
            Self::TaxActivity => format!(
                "City modifier x{:.2}. {}$ due now, otherwise penalties and a business lockout kick in.",
                ctx.city.tax_modifier,
                ctx.tax_balance.trunc().normalize(),
            ),
            Self::Auction => auction_text(ctx.city, ctx.catalog),
            Self::CityEffects => String::from(
                "Active events affect income, taxes and the bank. Check the mayor's menu before collecting profits.",
            ),
            Self::DebtStatus => {
                if !ctx.player.in_debt() {
                    return None;
                }
                String::from(
                    "Overdue debt detected. The bot will seize your deposit, cash and assets when the timer runs out.",
                )
            }
        };
        Some(TimelineEntry::new(self.title(), text))
    }
}

fn auction_text(city: &CityState, catalog: &Catalog) -> String {
    if !city.auction.active {
        return String::from(
            "The auction is preparing a new lot. The mayor is assembling the holiday prize pool.",
        );
    }
    let lot = city
        .auction
        .item_id
        .as_ref()
        .and_then(|id| catalog.business(id))
        .and_then(|def| def.name.as_deref())
        .unwrap_or(SECRET_LOT);
    format!("Auction in progress: bidding on {lot}")
}

/// Render the timeline in display order.
pub fn build_timeline(ctx: &TimelineContext<'_>) -> Vec<TimelineEntry> {
    TIMELINE_ORDER
        .iter()
        .filter_map(|section| section.render(ctx))
        .collect()
}
