//! Booking records as the engine reads them.
//!
//! The booking subsystem owns these; the engine only consumes a read-only
//! subset to count capacity and detect collisions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::slot::TimeSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Draft,
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Cancelled and draft bookings consume no capacity and raise no
    /// conflicts.
    pub fn counts_toward_capacity(self) -> bool {
        !matches!(self, BookingStatus::Cancelled | BookingStatus::Draft)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub package_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yacht_id: Option<String>,
    /// Any timestamp on the booked day; normalized before date matching.
    pub booking_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_slot: Option<TimeSlot>,
    pub status: BookingStatus,
}

impl Booking {
    /// The slot this booking contends in: its assigned slot, or the
    /// synthetic whole-day slot when none was assigned. Every booking
    /// therefore occupies some window; there is no "no slot, no contention"
    /// path.
    pub fn effective_slot(&self) -> TimeSlot {
        self.time_slot.clone().unwrap_or_else(TimeSlot::whole_day)
    }

    /// Resource match: same package, or same yacht when the query names one.
    pub(crate) fn matches_resource(&self, package_id: &str, yacht_id: Option<&str>) -> bool {
        self.package_id == package_id
            || yacht_id.is_some_and(|y| self.yacht_id.as_deref() == Some(y))
    }
}
