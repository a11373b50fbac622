//! Prospective-vs-existing booking collision checks.
//!
//! Shares the slot-overlap rule with availability counting. The report is a
//! decision value only: downstream code must pair it with a conditional
//! write at the storage layer, since another writer may land between the
//! check and the commit.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::availability::AvailabilityEngine;
use crate::booking::Booking;
use crate::day::day_of;

/// Outcome of a conflict check. Carries every colliding booking id, not
/// just the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictReport {
    pub has_conflict: bool,
    pub conflicting_ids: Vec<String>,
}

impl ConflictReport {
    pub fn is_clear(&self) -> bool {
        !self.has_conflict
    }
}

/// Check whether `prospective` collides with any of `existing`.
///
/// Candidates are bookings that are not the prospective booking itself, are
/// neither cancelled nor draft, share the package (or the yacht, when the
/// prospective booking names one), fall on the same charter day in `timezone`,
/// and whose slot overlaps the prospective slot. A booking without an
/// assigned slot contends as a whole-day booking and collides with every
/// timed slot on its day.
pub fn check_conflicts(
    prospective: &Booking,
    existing: &[Booking],
    timezone: Tz,
) -> ConflictReport {
    let day = day_of(prospective.booking_date, timezone);
    let slot = prospective.effective_slot();

    let conflicting_ids: Vec<String> = existing
        .iter()
        .filter(|b| b.id != prospective.id)
        .filter(|b| b.status.counts_toward_capacity())
        .filter(|b| b.matches_resource(&prospective.package_id, prospective.yacht_id.as_deref()))
        .filter(|b| day_of(b.booking_date, timezone) == day)
        .filter(|b| b.effective_slot().overlaps(&slot))
        .map(|b| b.id.clone())
        .collect();

    ConflictReport {
        has_conflict: !conflicting_ids.is_empty(),
        conflicting_ids,
    }
}

impl AvailabilityEngine {
    /// [`check_conflicts`] in the engine's timezone.
    pub fn check_conflicts(&self, prospective: &Booking, existing: &[Booking]) -> ConflictReport {
        check_conflicts(prospective, existing, self.timezone())
    }
}
