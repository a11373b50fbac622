//! Administrative exclusion windows.
//!
//! A [`TimeBlock`] takes a resource (or the whole fleet) out of service for
//! an inclusive date range: maintenance, weather, holidays, private
//! reservations. Blocks are created by administrator action and consumed
//! read-only here.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::day::{day_of, DAY_END};
use crate::error::{CharterError, Result};
use crate::slot::TimeSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockReason {
    Maintenance,
    Weather,
    Holiday,
    Reserved,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBlock {
    pub id: String,
    /// First day of the exclusion.
    pub start_date: DateTime<Utc>,
    /// Last day of the exclusion, inclusive; extended to end-of-day when
    /// matched against a target day.
    pub end_date: DateTime<Utc>,
    pub reason: BlockReason,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yacht_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl TimeBlock {
    /// Construct a validated block.
    ///
    /// Fails with [`CharterError::InvalidBlockRange`] when `start_date`
    /// falls after `end_date`. `created_at` is stamped here rather than
    /// caller-supplied, so a block cannot be backdated.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        reason: BlockReason,
        created_by: impl Into<String>,
        package_id: Option<String>,
        yacht_id: Option<String>,
        notes: Option<String>,
    ) -> Result<Self> {
        if start_date > end_date {
            return Err(CharterError::InvalidBlockRange {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            id: id.into(),
            start_date,
            end_date,
            reason,
            yacht_id,
            package_id,
            notes,
            created_by: created_by.into(),
            created_at: Utc::now(),
        })
    }

    /// A block with neither a yacht nor a package scope applies to every
    /// resource.
    pub fn is_global(&self) -> bool {
        self.yacht_id.is_none() && self.package_id.is_none()
    }

    /// Scope match: global, or an explicit hit on either scope field.
    pub(crate) fn applies_to(&self, package_id: &str, yacht_id: Option<&str>) -> bool {
        self.is_global()
            || self.package_id.as_deref() == Some(package_id)
            || (yacht_id.is_some() && self.yacht_id.as_deref() == yacht_id)
    }

    /// The block's day span contains `day` (end extended to end-of-day).
    pub(crate) fn covers_day(&self, day: NaiveDate, tz: Tz) -> bool {
        let first = day_of(self.start_date, tz);
        let last = day_of(self.end_date, tz);
        first <= day && day <= last
    }

    /// Whether the block shuts `slot` on `day`.
    ///
    /// Boundary times are substituted with start-of-day / end-of-day and the
    /// widened range must encompass the slot's window on the target day. An
    /// untimed slot is covered by any block that touches the day.
    pub(crate) fn covers_slot(&self, day: NaiveDate, slot: &TimeSlot, tz: Tz) -> bool {
        if !self.covers_day(day, tz) {
            return false;
        }
        let Some(window) = slot.window else {
            return true;
        };
        let block_start = day_of(self.start_date, tz).and_time(NaiveTime::MIN);
        let block_end = day_of(self.end_date, tz).and_time(DAY_END);
        block_start <= day.and_time(window.start) && day.and_time(window.end) <= block_end
    }
}
