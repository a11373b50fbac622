//! Bounded lookahead for the next bookable slot.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::availability::{AvailabilityEngine, AvailabilityResult, AvailableTimeSlot};
use crate::block::TimeBlock;
use crate::booking::Booking;
use crate::day::day_of;

/// The first bookable day/slot combination found by
/// [`AvailabilityEngine::find_next_available`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextAvailable {
    pub date: NaiveDate,
    pub slot: AvailableTimeSlot,
}

impl AvailabilityEngine {
    /// Scan exactly `lookahead_days` days starting at `start_date` (day 0)
    /// and return the first bookable day/slot combination, or `None` when
    /// the whole window is booked out (an expected outcome, not an error).
    ///
    /// When `preferred_slot_type` is given the window is first scanned for
    /// that slot; only when no day in the window satisfies the preference
    /// does the search fall back to the first available slot in catalog
    /// order on the earliest day with any availability. Day order dominates
    /// slot order throughout.
    #[allow(clippy::too_many_arguments)]
    pub fn find_next_available(
        &self,
        start_date: DateTime<Utc>,
        lookahead_days: u32,
        package_id: &str,
        yacht_id: Option<&str>,
        bookings: &[Booking],
        blocks: &[TimeBlock],
        capacity: u32,
        preferred_slot_type: Option<&str>,
    ) -> Option<NextAvailable> {
        let first = day_of(start_date, self.timezone());

        // Each day is computed once and shared by both passes.
        let window: Vec<AvailabilityResult> = first
            .iter_days()
            .take(lookahead_days as usize)
            .map(|day| {
                self.availability_for_normalized_day(
                    day, package_id, yacht_id, bookings, blocks, capacity,
                )
            })
            .collect();

        if let Some(preferred) = preferred_slot_type {
            let hit = window.iter().find_map(|result| {
                result
                    .slots
                    .iter()
                    .find(|s| s.is_available && s.time_slot.slot_type == preferred)
                    .map(|slot| NextAvailable {
                        date: result.date,
                        slot: slot.clone(),
                    })
            });
            if hit.is_some() {
                return hit;
            }
        }

        window.iter().find_map(|result| {
            result
                .slots
                .iter()
                .find(|s| s.is_available)
                .map(|slot| NextAvailable {
                    date: result.date,
                    slot: slot.clone(),
                })
        })
    }
}
