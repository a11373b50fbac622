//! Error types for charter-engine operations.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CharterError {
    /// A time block was constructed with an inverted date range.
    #[error("invalid block range: start {start} is after end {end}")]
    InvalidBlockRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// A timed slot was given a window whose start is not before its end.
    #[error("invalid window for slot '{slot_type}': start must be before end")]
    InvalidSlotWindow { slot_type: String },

    /// Two slots in the same catalog share a machine key.
    #[error("duplicate slot type in catalog: {0}")]
    DuplicateSlotType(String),
}

pub type Result<T> = std::result::Result<T, CharterError>;
