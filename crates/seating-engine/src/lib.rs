//! # seating-engine
//!
//! Real-time table availability for a single dining venue: given a date and
//! a party size, which time slots are still open for booking, accounting
//! for operating hours, explicit closures, and already-committed capacity.
//!
//! The engine is a stateless, synchronous, CPU-bound pure computation. It
//! consumes a [`VenueSnapshot`] loaded fresh per query and an injected
//! clock, and produces an immutable [`AvailabilityResult`]. The public
//! booking widget (`seating-engine-wasm`) and the staff CLI (`covers-cli`)
//! are thin adapters over [`compute_availability`].
//!
//! ## Modules
//!
//! - [`slots`] — the slot generator, snapshot in, availability out
//! - [`tables`] — table model, capacity sums, greedy fitting feasibility
//! - [`schedule`] — weekly opening shifts anchored onto concrete dates
//! - [`closures`] — blocked periods, whole-day or time-ranged
//! - [`occupancy`] — existing reservations and the capacity they hold
//! - [`config`] — named venue-level knobs (interval, durations, lead times)
//! - [`result`] — the immutable query response and its accessors
//! - [`error`] — error types

pub mod closures;
pub mod config;
pub mod error;
pub mod occupancy;
pub mod result;
pub mod schedule;
pub mod slots;
pub mod tables;

pub use closures::BlockedPeriod;
pub use config::VenueConfig;
pub use error::SeatingError;
pub use occupancy::{Reservation, ReservationStatus};
pub use result::{AvailabilityResult, SlotDebug, TimeSlot};
pub use schedule::OpeningShift;
pub use slots::{compute_availability, VenueSnapshot};
pub use tables::{can_fit, Table};
