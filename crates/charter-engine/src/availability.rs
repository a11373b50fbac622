//! Per-day and multi-day slot availability.
//!
//! [`AvailabilityEngine`] is the decision core: given the bookings and
//! blocks a caller fetched for a resource, it computes per-slot availability
//! for a day or an inclusive date range. It accepts the full candidate sets
//! and narrows them itself, so callers may pass unfiltered query results.
//!
//! Everything here is a pure function of its arguments. Computing
//! "available" and persisting a booking are separate steps; making that
//! sequence race-free is the storage layer's job.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::block::TimeBlock;
use crate::booking::Booking;
use crate::day::{day_of, days_inclusive};
use crate::slot::{SlotCatalog, TimeSlot};

/// Availability of one catalog slot on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableTimeSlot {
    pub time_slot: TimeSlot,
    pub is_available: bool,
    /// How many more concurrent bookings the slot accepts. Never exceeds the
    /// resource capacity.
    pub remaining_capacity: u32,
}

/// One day's availability across the whole catalog, slots in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResult {
    /// The normalized charter day.
    pub date: NaiveDate,
    pub slots: Vec<AvailableTimeSlot>,
    /// True iff every slot is unavailable.
    pub is_fully_booked: bool,
}

/// The availability and booking-conflict decision engine.
///
/// Owns the immutable [`SlotCatalog`] and the charter operation's timezone.
/// There is no way to mutate either after construction; a deployment that
/// changes its slot definitions builds a new engine.
#[derive(Debug, Clone)]
pub struct AvailabilityEngine {
    catalog: SlotCatalog,
    timezone: Tz,
}

impl Default for AvailabilityEngine {
    fn default() -> Self {
        Self::new(SlotCatalog::default())
    }
}

impl AvailabilityEngine {
    /// Engine over `catalog` with days reckoned in UTC.
    pub fn new(catalog: SlotCatalog) -> Self {
        Self::with_timezone(catalog, Tz::UTC)
    }

    /// Engine over `catalog` with days reckoned in the given IANA zone.
    pub fn with_timezone(catalog: SlotCatalog, timezone: Tz) -> Self {
        Self { catalog, timezone }
    }

    pub fn catalog(&self) -> &SlotCatalog {
        &self.catalog
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Compute per-slot availability for the day `date` falls on.
    ///
    /// `bookings` and `blocks` are full candidate sets; the engine filters
    /// them down to the resource and day itself. `capacity` is the maximum
    /// number of concurrent bookings the resource holds per slot; zero
    /// means no slot can ever be available.
    #[allow(clippy::too_many_arguments)]
    pub fn availability_for_day(
        &self,
        date: DateTime<Utc>,
        package_id: &str,
        yacht_id: Option<&str>,
        bookings: &[Booking],
        blocks: &[TimeBlock],
        capacity: u32,
    ) -> AvailabilityResult {
        let day = day_of(date, self.timezone);
        self.availability_for_normalized_day(day, package_id, yacht_id, bookings, blocks, capacity)
    }

    /// One [`AvailabilityResult`] per calendar day from `start_date` through
    /// `end_date`, inclusive. An inverted range yields an empty vector.
    ///
    /// Days are independent: a booking counted on one day never affects the
    /// next.
    #[allow(clippy::too_many_arguments)]
    pub fn availability_for_range(
        &self,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        package_id: &str,
        yacht_id: Option<&str>,
        bookings: &[Booking],
        blocks: &[TimeBlock],
        capacity: u32,
    ) -> Vec<AvailabilityResult> {
        let first = day_of(start_date, self.timezone);
        let last = day_of(end_date, self.timezone);
        days_inclusive(first, last)
            .map(|day| {
                self.availability_for_normalized_day(
                    day, package_id, yacht_id, bookings, blocks, capacity,
                )
            })
            .collect()
    }

    pub(crate) fn availability_for_normalized_day(
        &self,
        day: NaiveDate,
        package_id: &str,
        yacht_id: Option<&str>,
        bookings: &[Booking],
        blocks: &[TimeBlock],
        capacity: u32,
    ) -> AvailabilityResult {
        // Bookings that occupy this resource on this day. Cancelled and
        // draft records drop out here.
        let occupied: Vec<TimeSlot> = bookings
            .iter()
            .filter(|b| b.status.counts_toward_capacity())
            .filter(|b| b.matches_resource(package_id, yacht_id))
            .filter(|b| day_of(b.booking_date, self.timezone) == day)
            .map(Booking::effective_slot)
            .collect();

        // Blocks whose scope and day span touch this query.
        let relevant_blocks: Vec<&TimeBlock> = blocks
            .iter()
            .filter(|bl| bl.applies_to(package_id, yacht_id))
            .filter(|bl| bl.covers_day(day, self.timezone))
            .collect();

        let slots: Vec<AvailableTimeSlot> = self
            .catalog
            .slots()
            .iter()
            .map(|slot| {
                let blocked = relevant_blocks
                    .iter()
                    .any(|bl| bl.covers_slot(day, slot, self.timezone));
                if blocked {
                    return AvailableTimeSlot {
                        time_slot: slot.clone(),
                        is_available: false,
                        remaining_capacity: 0,
                    };
                }
                let taken = occupied.iter().filter(|s| s.overlaps(slot)).count() as u32;
                let remaining_capacity = capacity.saturating_sub(taken);
                AvailableTimeSlot {
                    time_slot: slot.clone(),
                    is_available: remaining_capacity > 0,
                    remaining_capacity,
                }
            })
            .collect();

        let is_fully_booked = slots.iter().all(|s| !s.is_available);
        AvailabilityResult {
            date: day,
            slots,
            is_fully_booked,
        }
    }
}
