//! Status cards: tax, bank, debt and city.

use rust_decimal::Decimal;
use transcity_types::{CityState, Player, StatusBlock};

const DEFAULT_TAX_NOTE: &str = "Pay the tax within 30 minutes of it being charged.";
const BANK_NOTE: &str = "Deposits earn +5% for every day of active play.";
const DEBT_NOTE_OVERDUE: &str = "Overdue debt detected: deposit and assets may be frozen.";
const DEBT_NOTE_CLEAR: &str = "No overdue loans.";
const CITY_MOOD_EVENTS: &str = "The city is getting ready for the holidays";
const CITY_MOOD_CALM: &str = "The city is calm";
const CITY_NOTE_AUCTION: &str = "An auction is running right now.";
const CITY_NOTE_NO_AUCTION: &str = "The auction is preparing a new lot.";

/// Build the status cards.
///
/// The mayor's event note replaces the default tax reminder when set. The
/// city mood looks at the raw event list, before catalog filtering.
pub fn build_status(player: &Player, city: &CityState, tax_balance: Decimal) -> StatusBlock {
    let tax_note = city
        .event_note
        .as_deref()
        .filter(|note| !note.trim().is_empty())
        .unwrap_or(DEFAULT_TAX_NOTE);

    StatusBlock {
        tax_balance,
        tax_note: tax_note.to_owned(),
        bank_note: BANK_NOTE.to_owned(),
        debt_note: if player.in_debt() {
            DEBT_NOTE_OVERDUE
        } else {
            DEBT_NOTE_CLEAR
        }
        .to_owned(),
        city_mood: if city.events.is_empty() {
            CITY_MOOD_CALM
        } else {
            CITY_MOOD_EVENTS
        }
        .to_owned(),
        city_note: if city.auction.active {
            CITY_NOTE_AUCTION
        } else {
            CITY_NOTE_NO_AUCTION
        }
        .to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use transcity_types::{Auction, CityEventId, PlayerId};

    use super::*;

    #[test]
    fn quiet_city_and_clean_player() {
        let player = Player::new(PlayerId(1));
        let status = build_status(&player, &CityState::default(), Decimal::ZERO);
        assert_eq!(status.tax_note, DEFAULT_TAX_NOTE);
        assert_eq!(status.debt_note, DEBT_NOTE_CLEAR);
        assert_eq!(status.city_mood, CITY_MOOD_CALM);
        assert_eq!(status.city_note, CITY_NOTE_NO_AUCTION);
        assert_eq!(status.bank_note, BANK_NOTE);
    }

    #[test]
    fn busy_city_and_indebted_player() {
        let mut player = Player::new(PlayerId(1));
        player.debt = 10;
        let city = CityState {
            auction: Auction {
                active: true,
                item_id: None,
            },
            events: vec![CityEventId::from("unknown_to_catalog")],
            event_note: Some(String::from("Fireworks at midnight")),
            ..CityState::default()
        };
        let status = build_status(&player, &city, Decimal::new(460, 0));
        assert_eq!(status.tax_balance, Decimal::new(460, 0));
        assert_eq!(status.tax_note, "Fireworks at midnight");
        assert_eq!(status.debt_note, DEBT_NOTE_OVERDUE);
        assert_eq!(status.city_mood, CITY_MOOD_EVENTS);
        assert_eq!(status.city_note, CITY_NOTE_AUCTION);
    }
}
