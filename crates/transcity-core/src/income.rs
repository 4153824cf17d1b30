//! Business income and estate rent readiness.
//!
//! Both lists share the same shape: look each holding up in the catalog
//! (falling back to an empty definition), work out how long until it can
//! be collected again, and stably sort by display name.

use chrono::{DateTime, Utc};
use transcity_types::{BusinessEntry, EstateEntry, Player};

use crate::catalog::{BusinessDef, Catalog, EstateDef};
use crate::economy::EconomyRules;

const MILLIS_PER_SECOND: i64 = 1000;

/// Whole seconds until a collectible with the given cooldown is ready.
///
/// Never collected means ready now. The result is truncated toward zero
/// and always within `0..=cooldown_secs`, including when `last` lies in
/// the future.
pub fn ready_in(last: Option<DateTime<Utc>>, cooldown_secs: u64, now: DateTime<Utc>) -> u64 {
    let Some(last) = last else {
        return 0;
    };
    let cooldown_ms = i64::try_from(cooldown_secs)
        .unwrap_or(i64::MAX)
        .saturating_mul(MILLIS_PER_SECOND);
    let elapsed_ms = now.signed_duration_since(last).num_milliseconds();
    let remaining_ms = cooldown_ms
        .saturating_sub(elapsed_ms)
        .clamp(0, cooldown_ms);
    let remaining_secs = remaining_ms.checked_div(MILLIS_PER_SECOND).unwrap_or(0);
    u64::try_from(remaining_secs).unwrap_or(0).min(cooldown_secs)
}

/// List the player's businesses, sorted by name.
pub fn business_entries(
    player: &Player,
    catalog: &Catalog,
    rules: &dyn EconomyRules,
    now: DateTime<Utc>,
) -> Vec<BusinessEntry> {
    let cooldown = catalog.cooldowns().business_secs;
    let empty = BusinessDef::default();

    let mut entries: Vec<BusinessEntry> = player
        .businesses
        .iter()
        .map(|(id, holding)| {
            let def = catalog.business(id).unwrap_or(&empty);
            BusinessEntry {
                id: id.clone(),
                name: def.name.clone().unwrap_or_else(|| id.to_string()),
                category: def.category.clone(),
                income: rules.business_income(id, holding.level),
                level: holding.level,
                ready_in: ready_in(holding.last_collect, cooldown, now),
                tag: holding.tag.clone(),
            }
        })
        .collect();

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}

/// List the player's estates, sorted by name.
pub fn estate_entries(player: &Player, catalog: &Catalog, now: DateTime<Utc>) -> Vec<EstateEntry> {
    let cooldown = catalog.cooldowns().estate_rent_secs;
    let empty = EstateDef::default();

    let mut entries: Vec<EstateEntry> = player
        .estates
        .iter()
        .map(|(id, holding)| {
            let def = catalog.estate(id).unwrap_or(&empty);
            EstateEntry {
                id: id.clone(),
                name: def.name.clone().unwrap_or_else(|| id.to_string()),
                rent: def.rent_income,
                ready_in: ready_in(holding.last_rent, cooldown, now),
                note: def.description.clone().unwrap_or_default(),
            }
        })
        .collect();

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::sync::Arc;

    use chrono::TimeDelta;
    use transcity_types::{BusinessHolding, BusinessId, EstateHolding, EstateId, PlayerId};

    use super::*;
    use crate::economy::StandardEconomy;

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_734_000_000, 0).unwrap()
    }

    fn catalog() -> Catalog {
        Catalog::from_yaml(
            r#"
cooldowns:
  business_secs: 1800
  estate_rent_secs: 3600
businesses:
  reactor:
    name: "Neon Reactor"
    category: hi_tech
    base_income: 820
    income_step: 210
  satellite:
    name: "Aurora Satellite"
    category: shadow
    base_income: 760
estates:
  cabin:
    name: "Warm Cabin"
    rent_income: 420
    description: "Shielded until dawn"
  penthouse:
    name: "Aurora Penthouse"
    rent_income: 600
"#,
        )
        .unwrap()
    }

    #[test]
    fn never_collected_is_ready() {
        assert_eq!(ready_in(None, 1800, now()), 0);
    }

    #[test]
    fn ready_in_counts_down_from_cooldown() {
        let last = now() - TimeDelta::seconds(100);
        assert_eq!(ready_in(Some(last), 1800, now()), 1700);
    }

    #[test]
    fn ready_in_truncates_partial_seconds() {
        let last = now() - TimeDelta::milliseconds(100_400);
        assert_eq!(ready_in(Some(last), 1800, now()), 1699);
    }

    #[test]
    fn ready_in_is_zero_after_cooldown() {
        let last = now() - TimeDelta::seconds(5000);
        assert_eq!(ready_in(Some(last), 1800, now()), 0);
    }

    #[test]
    fn ready_in_never_exceeds_cooldown() {
        let future = now() + TimeDelta::seconds(600);
        assert_eq!(ready_in(Some(future), 1800, now()), 1800);
    }

    #[test]
    fn ready_in_stays_in_bounds_for_any_offset() {
        for offset in [-100_000_i64, -1801, -1800, -1, 0, 1, 1799, 1800, 1801, 100_000] {
            let last = now() + TimeDelta::seconds(offset);
            let value = ready_in(Some(last), 1800, now());
            assert!(value <= 1800, "offset {offset} gave {value}");
        }
    }

    #[test]
    fn businesses_sorted_by_name_with_fallbacks() {
        let catalog = Arc::new(catalog());
        let rules = StandardEconomy::new(Arc::clone(&catalog));
        let mut player = Player::new(PlayerId(1));
        player.businesses.insert(
            BusinessId::from("reactor"),
            BusinessHolding {
                level: 3,
                last_collect: Some(now() - TimeDelta::seconds(100)),
                tag: None,
            },
        );
        player.businesses.insert(
            BusinessId::from("satellite"),
            BusinessHolding {
                level: 1,
                last_collect: None,
                tag: Some(String::from("Promo")),
            },
        );
        player.businesses.insert(
            BusinessId::from("Zeta_unknown"),
            BusinessHolding {
                level: 2,
                ..BusinessHolding::default()
            },
        );

        let entries = business_entries(&player, &catalog, &rules, now());
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Aurora Satellite", "Neon Reactor", "Zeta_unknown"]);

        let reactor = &entries[1];
        assert_eq!(reactor.income, 1240);
        assert_eq!(reactor.ready_in, 1700);
        assert_eq!(reactor.category.as_deref(), Some("hi_tech"));

        let unknown = &entries[2];
        assert_eq!(unknown.income, 0);
        assert!(unknown.category.is_none());
        assert_eq!(unknown.ready_in, 0);

        assert_eq!(entries[0].tag.as_deref(), Some("Promo"));
    }

    #[test]
    fn equal_names_keep_iteration_order() {
        let mut catalog = catalog();
        for id in ["b_kiosk", "a_kiosk"] {
            catalog.businesses.insert(
                BusinessId::from(id),
                BusinessDef {
                    name: Some(String::from("Kiosk")),
                    ..BusinessDef::default()
                },
            );
        }
        let catalog = Arc::new(catalog);
        let rules = StandardEconomy::new(Arc::clone(&catalog));
        let mut player = Player::new(PlayerId(1));
        player
            .businesses
            .insert(BusinessId::from("b_kiosk"), BusinessHolding::default());
        player
            .businesses
            .insert(BusinessId::from("a_kiosk"), BusinessHolding::default());

        let entries = business_entries(&player, &catalog, &rules, now());
        assert_eq!(entries[0].id, BusinessId::from("a_kiosk"));
        assert_eq!(entries[1].id, BusinessId::from("b_kiosk"));
    }

    #[test]
    fn estates_sorted_with_rent_and_notes() {
        let catalog = catalog();
        let mut player = Player::new(PlayerId(1));
        player.estates.insert(
            EstateId::from("cabin"),
            EstateHolding {
                last_rent: Some(now() - TimeDelta::seconds(2700)),
            },
        );
        player
            .estates
            .insert(EstateId::from("penthouse"), EstateHolding::default());
        player
            .estates
            .insert(EstateId::from("bunker"), EstateHolding::default());

        let entries = estate_entries(&player, &catalog, now());
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Aurora Penthouse", "Warm Cabin", "bunker"]);

        assert_eq!(entries[0].rent, 600);
        assert_eq!(entries[0].note, "");
        assert_eq!(entries[1].ready_in, 900);
        assert_eq!(entries[1].note, "Shielded until dawn");
        assert_eq!(entries[2].rent, 0);
    }
}
