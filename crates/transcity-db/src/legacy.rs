//! Decoding of the bot's stored representation.
//!
//! The bot writes holdings and city state as loosely-typed JSON blobs with
//! timestamps in float epoch seconds, using `0` for "never". Everything in
//! here converts those blobs into the typed records of `transcity-types`,
//! where "never" is `None` and a real timestamp is always `Some`.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use transcity_types::{
    Auction, BusinessHolding, BusinessId, CityEventId, CityState, EstateHolding, EstateId,
};

use crate::error::DbError;

const MILLIS_PER_SECOND: f64 = 1000.0;

/// Convert a stored epoch-seconds value into a timestamp.
///
/// Absent, zero, negative and non-finite values all mean "never" and map
/// to `None`. A genuine epoch-zero timestamp is indistinguishable from the
/// sentinel in the stored format.
pub fn epoch_seconds_to_datetime(secs: Option<f64>) -> Option<DateTime<Utc>> {
    let secs = secs.filter(|s| s.is_finite() && *s > 0.0)?;
    let millis = (secs * MILLIS_PER_SECOND).round();
    // Beyond i64 millis chrono cannot represent the value anyway.
    if millis >= 9.0e18 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    let millis = millis as i64;
    DateTime::from_timestamp_millis(millis)
}

#[derive(Debug, Default, Deserialize)]
struct RawBusiness {
    #[serde(default)]
    level: Option<i64>,
    #[serde(default)]
    last_collect: Option<f64>,
    #[serde(default)]
    tag: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawEstate {
    #[serde(default)]
    last_rent: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct RawAuction {
    #[serde(default)]
    active: Option<bool>,
    #[serde(default)]
    item_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawCityState {
    #[serde(default)]
    tax_modifier: Option<f64>,
    #[serde(default)]
    auction: Option<RawAuction>,
    #[serde(default)]
    events: Option<Vec<String>>,
    #[serde(default)]
    event_ends: Option<BTreeMap<String, f64>>,
    #[serde(default)]
    event_note: Option<String>,
}

/// Decode the `businesses` blob of a player row.
///
/// A `null` blob is treated as no businesses. Negative levels clamp to 0.
///
/// # Errors
///
/// Returns [`DbError::Serialization`] if the blob is not an object of
/// business entries.
pub fn decode_businesses(
    value: serde_json::Value,
) -> Result<BTreeMap<BusinessId, BusinessHolding>, DbError> {
    let raw: Option<BTreeMap<String, RawBusiness>> = serde_json::from_value(value)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(id, b)| {
            let level = b.level.unwrap_or(0).max(0);
            let level = u32::try_from(level).unwrap_or(u32::MAX);
            let holding = BusinessHolding {
                level,
                last_collect: epoch_seconds_to_datetime(b.last_collect),
                tag: b.tag.filter(|t| !t.is_empty()),
            };
            (BusinessId::from(id), holding)
        })
        .collect())
}

/// Decode the `estates` blob of a player row.
///
/// # Errors
///
/// Returns [`DbError::Serialization`] if the blob is not an object of
/// estate entries.
pub fn decode_estates(
    value: serde_json::Value,
) -> Result<BTreeMap<EstateId, EstateHolding>, DbError> {
    let raw: Option<BTreeMap<String, RawEstate>> = serde_json::from_value(value)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(id, e)| {
            let holding = EstateHolding {
                last_rent: epoch_seconds_to_datetime(e.last_rent),
            };
            (EstateId::from(id), holding)
        })
        .collect())
}

/// Decode the city state blob.
///
/// Missing keys take their defaults (tax modifier 1.0, no auction, no
/// events). Blank auction item ids and event notes are treated as absent.
///
/// # Errors
///
/// Returns [`DbError::Serialization`] if the blob has the wrong shape.
pub fn decode_city_state(value: serde_json::Value) -> Result<CityState, DbError> {
    let raw: Option<RawCityState> = serde_json::from_value(value)?;
    let raw = raw.unwrap_or_default();
    let defaults = CityState::default();

    let auction = raw.auction.unwrap_or_default();
    let event_deadlines = raw
        .event_ends
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(id, secs)| {
            epoch_seconds_to_datetime(Some(secs)).map(|at| (CityEventId::from(id), at))
        })
        .collect();

    Ok(CityState {
        tax_modifier: raw
            .tax_modifier
            .filter(|m| m.is_finite())
            .unwrap_or(defaults.tax_modifier),
        auction: Auction {
            active: auction.active.unwrap_or(false),
            item_id: auction
                .item_id
                .filter(|id| !id.is_empty())
                .map(BusinessId::from),
        },
        events: raw
            .events
            .unwrap_or_default()
            .into_iter()
            .map(CityEventId::from)
            .collect(),
        event_deadlines,
        event_note: raw.event_note.filter(|n| !n.trim().is_empty()),
    })
}
