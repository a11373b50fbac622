//! Time-slot catalog and the shared slot-overlap rule.
//!
//! A [`TimeSlot`] is a named portion of the charter day, either timed
//! (morning, afternoon, ...) or untimed/all-day. The [`SlotCatalog`] is the
//! ordered set of slots a deployment sells; it is immutable, so changing
//! slot definitions means building a new catalog and a new engine around it.

use std::collections::HashSet;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{CharterError, Result};

/// Half-open daily time window. A slot occupies `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// A bookable portion of the charter day.
///
/// A slot is either fully timed (`window` present) or untimed/all-day
/// (`window` absent); the `Option` encoding leaves no partially-timed state
/// to validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Short machine key, e.g. `"morning"`.
    #[serde(rename = "type")]
    pub slot_type: String,
    /// Display label, e.g. `"Morning Cruise"`.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<SlotWindow>,
}

const fn hm(hour: u32, min: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, min, 0) {
        Some(t) => t,
        None => panic!("invalid slot boundary"),
    }
}

impl TimeSlot {
    /// Build a timed slot. Fails when `start` is not before `end`.
    pub fn timed(
        slot_type: impl Into<String>,
        name: impl Into<String>,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<Self> {
        let slot_type = slot_type.into();
        if start >= end {
            return Err(CharterError::InvalidSlotWindow { slot_type });
        }
        Ok(Self {
            slot_type,
            name: name.into(),
            window: Some(SlotWindow { start, end }),
        })
    }

    /// Build an untimed slot covering the whole day nominally.
    pub fn all_day(slot_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slot_type: slot_type.into(),
            name: name.into(),
            window: None,
        }
    }

    /// Synthetic slot substituted for bookings that carry no slot
    /// assignment. Timed over the full day so it contends with every timed
    /// slot in the catalog.
    pub(crate) fn whole_day() -> Self {
        Self {
            slot_type: "whole_day".to_string(),
            name: "Whole Day".to_string(),
            window: Some(SlotWindow {
                start: NaiveTime::MIN,
                end: crate::day::DAY_END,
            }),
        }
    }

    /// Shared overlap rule for availability counting and conflict checks.
    ///
    /// Two timed slots overlap iff either slot's start falls within the
    /// other's `[start, end)` window. If either slot is untimed the
    /// comparison is nominal: equal `slot_type` keys.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        match (self.window, other.window) {
            (Some(a), Some(b)) => a.contains(b.start) || b.contains(a.start),
            _ => self.slot_type == other.slot_type,
        }
    }
}

impl SlotWindow {
    fn contains(&self, t: NaiveTime) -> bool {
        self.start <= t && t < self.end
    }
}

/// Ordered, immutable set of slots a deployment sells.
///
/// Order is preserved as given; availability results list slots in catalog
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotCatalog {
    slots: Vec<TimeSlot>,
}

impl SlotCatalog {
    /// Build a catalog from an ordered slot list. Fails on duplicate
    /// `slot_type` keys.
    pub fn new(slots: Vec<TimeSlot>) -> Result<Self> {
        let mut seen = HashSet::new();
        for slot in &slots {
            if !seen.insert(slot.slot_type.as_str()) {
                return Err(CharterError::DuplicateSlotType(slot.slot_type.clone()));
            }
        }
        Ok(Self { slots })
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn get(&self, slot_type: &str) -> Option<&TimeSlot> {
        self.slots.iter().find(|s| s.slot_type == slot_type)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for SlotCatalog {
    /// The standard charter day: three timed cruise slots plus an untimed
    /// full-day charter. The full-day slot carries no window and is matched
    /// nominally, as its own booking category rather than a wall-clock
    /// interval competing with the cruise slots.
    fn default() -> Self {
        let slot = |slot_type: &str, name: &str, start: NaiveTime, end: NaiveTime| TimeSlot {
            slot_type: slot_type.to_string(),
            name: name.to_string(),
            window: Some(SlotWindow { start, end }),
        };
        Self {
            slots: vec![
                slot("morning", "Morning Cruise", hm(9, 0), hm(13, 0)),
                slot("afternoon", "Afternoon Cruise", hm(13, 0), hm(17, 0)),
                slot("evening", "Evening Cruise", hm(17, 0), hm(21, 0)),
                TimeSlot::all_day("full_day", "Full Day Charter"),
            ],
        }
    }
}
