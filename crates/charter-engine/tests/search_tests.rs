//! Tests for the next-available-slot search.

use chrono::{DateTime, NaiveDate, Utc};
use charter_engine::{
    AvailabilityEngine, BlockReason, Booking, BookingStatus, SlotCatalog, TimeBlock, TimeSlot,
};

const PACKAGE: &str = "sunset-cruise";
const YACHT: &str = "Y1";

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn slot(key: &str) -> TimeSlot {
    SlotCatalog::default().get(key).cloned().unwrap()
}

fn booking(id: &str, date: &str, slot_key: &str) -> Booking {
    Booking {
        id: id.to_string(),
        package_id: PACKAGE.to_string(),
        yacht_id: Some(YACHT.to_string()),
        booking_date: ts(date),
        time_slot: Some(slot(slot_key)),
        status: BookingStatus::Confirmed,
    }
}

fn yacht_block(start: &str, end: &str) -> TimeBlock {
    TimeBlock::new(
        "blk",
        ts(start),
        ts(end),
        BlockReason::Maintenance,
        "harbormaster",
        None,
        Some(YACHT.to_string()),
        None,
    )
    .unwrap()
}

#[test]
fn open_calendar_returns_day_zero_first_slot() {
    let engine = AvailabilityEngine::default();

    let hit = engine
        .find_next_available(
            ts("2025-04-01T15:00:00Z"),
            7,
            PACKAGE,
            Some(YACHT),
            &[],
            &[],
            1,
            None,
        )
        .unwrap();

    assert_eq!(hit.date, date("2025-04-01"));
    assert_eq!(hit.slot.time_slot.slot_type, "morning");
}

#[test]
fn search_skips_blocked_days() {
    // Days 0-3 blocked, day 4 free: a 5-day window lands on day 4.
    let blocks = vec![yacht_block("2025-04-01T00:00:00Z", "2025-04-04T00:00:00Z")];
    let engine = AvailabilityEngine::default();

    let hit = engine
        .find_next_available(
            ts("2025-04-01T00:00:00Z"),
            5,
            PACKAGE,
            Some(YACHT),
            &[],
            &blocks,
            1,
            None,
        )
        .unwrap();

    assert_eq!(hit.date, date("2025-04-05"));
    assert_eq!(hit.slot.time_slot.slot_type, "morning");
}

#[test]
fn window_too_short_returns_not_found() {
    // Same calendar, but the window ends before the first free day.
    let blocks = vec![yacht_block("2025-04-01T00:00:00Z", "2025-04-04T00:00:00Z")];
    let engine = AvailabilityEngine::default();

    let hit = engine.find_next_available(
        ts("2025-04-01T00:00:00Z"),
        4,
        PACKAGE,
        Some(YACHT),
        &[],
        &blocks,
        1,
        None,
    );

    assert!(hit.is_none());
}

#[test]
fn zero_lookahead_returns_not_found() {
    let engine = AvailabilityEngine::default();

    let hit = engine.find_next_available(
        ts("2025-04-01T00:00:00Z"),
        0,
        PACKAGE,
        Some(YACHT),
        &[],
        &[],
        1,
        None,
    );

    assert!(hit.is_none());
}

#[test]
fn fallback_follows_catalog_order() {
    // Morning full on day 0: the fallback is day 0's afternoon, not day 1.
    let bookings = vec![booking("b1", "2025-04-01T09:00:00Z", "morning")];
    let engine = AvailabilityEngine::default();

    let hit = engine
        .find_next_available(
            ts("2025-04-01T00:00:00Z"),
            7,
            PACKAGE,
            Some(YACHT),
            &bookings,
            &[],
            1,
            None,
        )
        .unwrap();

    assert_eq!(hit.date, date("2025-04-01"));
    assert_eq!(hit.slot.time_slot.slot_type, "afternoon");
}

#[test]
fn preferred_slot_wins_over_catalog_order() {
    // Nothing is booked; preferring the evening skips morning and afternoon.
    let engine = AvailabilityEngine::default();

    let hit = engine
        .find_next_available(
            ts("2025-04-01T00:00:00Z"),
            7,
            PACKAGE,
            Some(YACHT),
            &[],
            &[],
            1,
            Some("evening"),
        )
        .unwrap();

    assert_eq!(hit.date, date("2025-04-01"));
    assert_eq!(hit.slot.time_slot.slot_type, "evening");
}

#[test]
fn preferred_slot_found_on_a_later_day() {
    // Morning booked out on days 0 and 1; preferring morning lands on day 2
    // even though other slots are free earlier.
    let bookings = vec![
        booking("b1", "2025-04-01T09:00:00Z", "morning"),
        booking("b2", "2025-04-02T09:00:00Z", "morning"),
    ];
    let engine = AvailabilityEngine::default();

    let hit = engine
        .find_next_available(
            ts("2025-04-01T00:00:00Z"),
            7,
            PACKAGE,
            Some(YACHT),
            &bookings,
            &[],
            1,
            Some("morning"),
        )
        .unwrap();

    assert_eq!(hit.date, date("2025-04-03"));
    assert_eq!(hit.slot.time_slot.slot_type, "morning");
}

#[test]
fn unsatisfiable_preference_falls_back_to_first_open_slot() {
    // Morning booked out across the whole window: preference exhausts, the
    // fallback returns day 0's first open slot in catalog order.
    let bookings: Vec<Booking> = (0..7)
        .map(|i| {
            booking(
                &format!("b{}", i),
                &format!("2025-04-{:02}T09:00:00Z", i + 1),
                "morning",
            )
        })
        .collect();
    let engine = AvailabilityEngine::default();

    let hit = engine
        .find_next_available(
            ts("2025-04-01T00:00:00Z"),
            7,
            PACKAGE,
            Some(YACHT),
            &bookings,
            &[],
            1,
            Some("morning"),
        )
        .unwrap();

    assert_eq!(hit.date, date("2025-04-01"));
    assert_eq!(hit.slot.time_slot.slot_type, "afternoon");
}

#[test]
fn unknown_preference_behaves_like_no_preference() {
    let engine = AvailabilityEngine::default();

    let hit = engine
        .find_next_available(
            ts("2025-04-01T00:00:00Z"),
            3,
            PACKAGE,
            Some(YACHT),
            &[],
            &[],
            1,
            Some("regatta"),
        )
        .unwrap();

    assert_eq!(hit.date, date("2025-04-01"));
    assert_eq!(hit.slot.time_slot.slot_type, "morning");
}

#[test]
fn fully_booked_window_returns_not_found() {
    let blocks = vec![yacht_block("2025-04-01T00:00:00Z", "2025-04-30T00:00:00Z")];
    let engine = AvailabilityEngine::default();

    let hit = engine.find_next_available(
        ts("2025-04-01T00:00:00Z"),
        14,
        PACKAGE,
        Some(YACHT),
        &[],
        &blocks,
        1,
        Some("morning"),
    );

    assert!(hit.is_none());
}

#[test]
fn result_never_leaves_the_window() {
    let blocks = vec![yacht_block("2025-04-01T00:00:00Z", "2025-04-02T00:00:00Z")];
    let engine = AvailabilityEngine::default();

    let hit = engine
        .find_next_available(
            ts("2025-04-01T00:00:00Z"),
            5,
            PACKAGE,
            Some(YACHT),
            &[],
            &blocks,
            1,
            None,
        )
        .unwrap();

    assert!(hit.date >= date("2025-04-01"));
    assert!(hit.date <= date("2025-04-05"));
    assert_eq!(hit.date, date("2025-04-03"));
}
