//! # charter-engine
//!
//! Availability and booking-conflict decisions for yacht charters.
//!
//! For a bookable resource — a yacht or an experience package — and a
//! calendar day, the engine answers: which time slots are free, how many
//! concurrent bookings each slot still accepts, whether a prospective
//! booking collides with existing ones, and which future day/slot
//! combination is the next one actually bookable.
//!
//! The engine is pure, synchronous computation. Callers fetch bookings,
//! blocks, and resource capacity from their store, call in with those
//! values, and get a typed decision back; there is no I/O and no shared
//! mutable state, so calls are safe from any number of threads.
//!
//! Deciding "this slot is free" and writing a booking are two separate
//! steps. Two callers can both observe the same free slot; the storage
//! layer must make the decide-then-commit sequence race-free (a conditional
//! write keyed on resource+day+slot, or a single-writer queue per
//! resource).
//!
//! ## Modules
//!
//! - [`availability`] — per-day and multi-day slot availability
//! - [`search`] — bounded lookahead for the next bookable slot
//! - [`conflict`] — prospective-vs-existing booking collision checks
//! - [`slot`] — the time-slot catalog and the shared overlap rule
//! - [`block`] — administrative exclusion windows
//! - [`booking`] — booking records as the engine reads them
//! - [`day`] — charter-local calendar-day reckoning
//! - [`error`] — error types

pub mod availability;
pub mod block;
pub mod booking;
pub mod conflict;
pub mod day;
pub mod error;
pub mod search;
pub mod slot;

pub use availability::{AvailabilityEngine, AvailabilityResult, AvailableTimeSlot};
pub use block::{BlockReason, TimeBlock};
pub use booking::{Booking, BookingStatus};
pub use conflict::{check_conflicts, ConflictReport};
pub use error::CharterError;
pub use search::NextAvailable;
pub use slot::{SlotCatalog, SlotWindow, TimeSlot};
