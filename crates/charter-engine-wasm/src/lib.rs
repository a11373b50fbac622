//! WASM bindings for charter-engine.
//!
//! Exposes availability computation, next-slot search, and booking-conflict
//! checks to JavaScript via `wasm-bindgen`. Complex values cross the
//! boundary as JSON strings; dates render as ISO 8601. The bindings parse,
//! call the engine over the default slot catalog, and serialize — no
//! decision logic lives here.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p charter-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/charter-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/charter_engine_wasm.wasm
//! ```

use charter_engine::{AvailabilityEngine, Booking, SlotCatalog, TimeBlock};
use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde::Deserialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Input parsing helpers
// ---------------------------------------------------------------------------

/// Input format for a conflict check: the booking being placed plus the
/// already-stored bookings fetched for its resource and day.
#[derive(Deserialize)]
struct ConflictQuery {
    prospective: Booking,
    existing: Vec<Booking>,
}

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts both RFC 3339 (with offset, e.g., "2025-04-01T14:00:00+02:00")
/// and naive local time (e.g., "2025-04-01T14:00:00"), which is interpreted
/// as UTC.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>, JsValue> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .map_err(|e| JsValue::from_str(&format!("Invalid datetime '{}': {}", s, e)))
}

fn parse_bookings(json: &str) -> Result<Vec<Booking>, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid bookings JSON: {}", e)))
}

fn parse_blocks(json: &str) -> Result<Vec<TimeBlock>, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid blocks JSON: {}", e)))
}

/// Engine over the default catalog in the given IANA zone (UTC when absent).
fn engine_for(timezone: Option<&str>) -> Result<AvailabilityEngine, JsValue> {
    let tz = match timezone {
        Some(name) => name
            .parse::<Tz>()
            .map_err(|_| JsValue::from_str(&format!("Invalid timezone '{}'", name)))?,
        None => Tz::UTC,
    };
    Ok(AvailabilityEngine::with_timezone(SlotCatalog::default(), tz))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Compute per-slot availability for one day.
///
/// `bookings_json` and `blocks_json` are JSON arrays of booking and block
/// records as stored. Returns a JSON object with `date`, `slots` (catalog
/// order), and `is_fully_booked`.
#[wasm_bindgen(js_name = "availabilityForDay")]
#[allow(clippy::too_many_arguments)]
pub fn availability_for_day(
    date: &str,
    package_id: &str,
    yacht_id: Option<String>,
    bookings_json: &str,
    blocks_json: &str,
    capacity: u32,
    timezone: Option<String>,
) -> Result<String, JsValue> {
    let engine = engine_for(timezone.as_deref())?;
    let result = engine.availability_for_day(
        parse_datetime(date)?,
        package_id,
        yacht_id.as_deref(),
        &parse_bookings(bookings_json)?,
        &parse_blocks(blocks_json)?,
        capacity,
    );
    to_json(&result)
}

/// Compute availability for every day from `start` through `end` inclusive.
///
/// Returns a JSON array with one result object per day; an inverted range
/// yields `[]`.
#[wasm_bindgen(js_name = "availabilityForRange")]
#[allow(clippy::too_many_arguments)]
pub fn availability_for_range(
    start: &str,
    end: &str,
    package_id: &str,
    yacht_id: Option<String>,
    bookings_json: &str,
    blocks_json: &str,
    capacity: u32,
    timezone: Option<String>,
) -> Result<String, JsValue> {
    let engine = engine_for(timezone.as_deref())?;
    let results = engine.availability_for_range(
        parse_datetime(start)?,
        parse_datetime(end)?,
        package_id,
        yacht_id.as_deref(),
        &parse_bookings(bookings_json)?,
        &parse_blocks(blocks_json)?,
        capacity,
    );
    to_json(&results)
}

/// Find the next bookable day/slot combination within a lookahead window.
///
/// Returns a JSON object with `date` and `slot`, or the JSON literal `null`
/// when the whole window is booked out.
#[wasm_bindgen(js_name = "findNextAvailable")]
#[allow(clippy::too_many_arguments)]
pub fn find_next_available(
    start: &str,
    lookahead_days: u32,
    package_id: &str,
    yacht_id: Option<String>,
    bookings_json: &str,
    blocks_json: &str,
    capacity: u32,
    preferred_slot_type: Option<String>,
    timezone: Option<String>,
) -> Result<String, JsValue> {
    let engine = engine_for(timezone.as_deref())?;
    let hit = engine.find_next_available(
        parse_datetime(start)?,
        lookahead_days,
        package_id,
        yacht_id.as_deref(),
        &parse_bookings(bookings_json)?,
        &parse_blocks(blocks_json)?,
        capacity,
        preferred_slot_type.as_deref(),
    );
    to_json(&hit)
}

/// Check a prospective booking against existing ones.
///
/// `query_json` is a JSON object `{prospective, existing}`. Returns a JSON
/// object with `has_conflict` and `conflicting_ids`.
#[wasm_bindgen(js_name = "checkConflicts")]
pub fn check_conflicts(query_json: &str, timezone: Option<String>) -> Result<String, JsValue> {
    let query: ConflictQuery = serde_json::from_str(query_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid conflict query JSON: {}", e)))?;
    let engine = engine_for(timezone.as_deref())?;
    let report = engine.check_conflicts(&query.prospective, &query.existing);
    to_json(&report)
}
