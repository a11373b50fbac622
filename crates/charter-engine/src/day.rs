//! Calendar-day reckoning in the charter operation's timezone.
//!
//! Every timestamp entering the engine is reduced to a `NaiveDate` in the
//! configured zone before any comparison, so a booking stored as
//! `2025-04-02T03:00:00Z` lands on the correct local charter day. All
//! interval math after that point happens in naive local space.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;

/// Last representable second of a charter day; block end dates are widened
/// to this before coverage checks.
pub(crate) const DAY_END: NaiveTime = match NaiveTime::from_hms_opt(23, 59, 59) {
    Some(t) => t,
    None => panic!("23:59:59 is a valid time"),
};

/// Normalize a timestamp to the calendar day it falls on in `tz`.
pub fn day_of(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Iterate calendar days from `start` through `end`, inclusive.
///
/// An inverted range (`end < start`) yields nothing.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |day| *day <= end)
}
