//! WASM bindings for seating-engine.
//!
//! Exposes availability computation and pre-submit slot validation to the
//! public booking widget via `wasm-bindgen`. All complex types cross the
//! boundary as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p seating-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/booking-widget/wasm/ \
//!   target/wasm32-unknown-unknown/release/seating_engine_wasm.wasm
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use seating_engine::{AvailabilityResult, TimeSlot, VenueSnapshot};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// One slot as the widget renders it: ISO datetimes plus the preformatted
/// `"HH:MM"` label the booking form submits back.
#[derive(Serialize)]
struct TimeSlotDto {
    start: String,
    end: String,
    label: String,
    bookable: bool,
    max_party_size: u32,
}

impl From<&TimeSlot> for TimeSlotDto {
    fn from(s: &TimeSlot) -> Self {
        Self {
            start: s.start.format("%Y-%m-%dT%H:%M:%S").to_string(),
            end: s.end.format("%Y-%m-%dT%H:%M:%S").to_string(),
            label: s.start_label(),
            bookable: s.bookable,
            max_party_size: s.max_party_size,
        }
    }
}

#[derive(Serialize)]
struct AvailabilityDto {
    date: String,
    party_size: u32,
    slots: Vec<TimeSlotDto>,
    has_bookable_slots: bool,
}

impl From<&AvailabilityResult> for AvailabilityDto {
    fn from(r: &AvailabilityResult) -> Self {
        Self {
            date: r.date.to_string(),
            party_size: r.party_size,
            slots: r.slots.iter().map(TimeSlotDto::from).collect(),
            has_bookable_slots: r.has_bookable_slots(),
        }
    }
}

/// Verdict for a single submitted slot.
#[derive(Serialize)]
struct SlotCheckDto {
    /// Whether any slot starts at the submitted time at all.
    offered: bool,
    /// Whether that slot can take the party.
    bookable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    slot: Option<TimeSlotDto>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_snapshot(json: &str) -> Result<VenueSnapshot, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid venue snapshot JSON: {}", e)))
}

fn parse_date(s: &str) -> Result<NaiveDate, JsValue> {
    s.parse()
        .map_err(|e| JsValue::from_str(&format!("Invalid date '{}': {}", s, e)))
}

/// Parse an optional clock override; `None` falls back to the real time.
///
/// Accepts RFC 3339 (with offset) and naive datetime interpreted as UTC.
fn parse_now(now: Option<String>) -> Result<DateTime<Utc>, JsValue> {
    let Some(s) = now else {
        return Ok(Utc::now());
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .map_err(|e| JsValue::from_str(&format!("Invalid datetime '{}': {}", s, e)))
}

fn compute(
    snapshot_json: &str,
    date: &str,
    party_size: u32,
    now: Option<String>,
) -> Result<AvailabilityResult, JsValue> {
    let snapshot = parse_snapshot(snapshot_json)?;
    let date = parse_date(date)?;
    let now = parse_now(now)?;
    snapshot
        .availability(date, party_size, now)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Compute the bookable slots for a date and party size.
///
/// `snapshot_json` is the venue snapshot the booking backend serves (config,
/// tables, shifts, blocked periods, reservations). Returns a JSON string
/// with `{date, party_size, slots, has_bookable_slots}`; each slot carries a
/// preformatted `label` for rendering and resubmission.
///
/// # Arguments
/// - `snapshot_json` -- venue snapshot JSON
/// - `date` -- date to query, "YYYY-MM-DD"
/// - `party_size` -- number of guests
/// - `now` -- optional clock override (ISO 8601); defaults to the real time
#[wasm_bindgen(js_name = "computeAvailability")]
pub fn compute_availability(
    snapshot_json: &str,
    date: &str,
    party_size: u32,
    now: Option<String>,
) -> Result<String, JsValue> {
    let result = compute(snapshot_json, date, party_size, now)?;
    let dto = AvailabilityDto::from(&result);

    serde_json::to_string(&dto)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Validate one submitted `"HH:MM"` slot right before the widget posts the
/// reservation.
///
/// Returns `{offered, bookable, slot?}` as a JSON string: `offered` is false
/// when no slot starts at that time at all, and `bookable` is false when the
/// slot exists but cannot take the party. Note this is the widget-side
/// convenience check only; the backend must re-check inside its own
/// transaction when persisting.
#[wasm_bindgen(js_name = "checkSlot")]
pub fn check_slot(
    snapshot_json: &str,
    date: &str,
    party_size: u32,
    time: &str,
    now: Option<String>,
) -> Result<String, JsValue> {
    let result = compute(snapshot_json, date, party_size, now)?;
    let dto = match result.find_slot_by_time(time) {
        Some(slot) => SlotCheckDto {
            offered: true,
            bookable: slot.bookable,
            slot: Some(TimeSlotDto::from(slot)),
        },
        None => SlotCheckDto {
            offered: false,
            bookable: false,
            slot: None,
        },
    };

    serde_json::to_string(&dto)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
