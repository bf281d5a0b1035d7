//! Existing reservations and the capacity they hold at a candidate start.
//!
//! Two distinct effects per reservation: every occupying reservation
//! reduces aggregate capacity by its guest count, and a reservation pinned
//! to a table additionally takes that table out of the feasibility check
//! for as long as its occupancy interval covers the candidate start.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Completed,
    CancelledByGuest,
    CancelledByVenue,
    NoShow,
}

impl ReservationStatus {
    /// The named occupying-status set: everything still expected to arrive
    /// (or already seated) holds its seats; cancellations and no-shows
    /// release them.
    pub fn occupies_capacity(self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed | Self::Completed)
    }
}

/// An existing booking, reduced to what occupancy accounting needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub date: NaiveDate,
    pub starts_at: NaiveTime,
    pub guests: u32,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub table_id: Option<String>,
    pub status: ReservationStatus,
}

impl Reservation {
    /// The half-open interval `[start, start + duration)` this reservation
    /// occupies, with its clock time projected onto `date`.
    pub fn occupancy_interval(
        &self,
        date: NaiveDate,
        default_duration_minutes: u32,
    ) -> (NaiveDateTime, NaiveDateTime) {
        let start = date.and_time(self.starts_at);
        let minutes = self.duration_minutes.unwrap_or(default_duration_minutes);
        (start, start + Duration::minutes(i64::from(minutes)))
    }

    /// True when this reservation holds capacity at `slot_start`.
    ///
    /// The stored clock time is projected onto the slot's own date, so a
    /// late-night booking recorded under the business date lines up with
    /// the post-midnight slots of a shift that spans midnight.
    pub fn occupies_at(&self, slot_start: NaiveDateTime, default_duration_minutes: u32) -> bool {
        if !self.status.occupies_capacity() {
            return false;
        }
        let (start, end) = self.occupancy_interval(slot_start.date(), default_duration_minutes);
        start <= slot_start && slot_start < end
    }
}

/// Sum of guests across reservations for `date` occupying `slot_start`.
///
/// `date` is the queried business date; reservations recorded under other
/// dates never count, even if their clock times would line up.
pub fn occupied_guests(
    reservations: &[Reservation],
    date: NaiveDate,
    slot_start: NaiveDateTime,
    default_duration_minutes: u32,
) -> u32 {
    reservations
        .iter()
        .filter(|r| r.date == date && r.occupies_at(slot_start, default_duration_minutes))
        .map(|r| r.guests)
        .sum()
}

/// IDs of tables held by reservations for `date` occupying `slot_start`.
///
/// Only table-pinned reservations contribute; an unpinned reservation
/// reduces aggregate capacity without taking any specific table out of the
/// feasibility check.
pub fn occupied_table_ids<'a>(
    reservations: &'a [Reservation],
    date: NaiveDate,
    slot_start: NaiveDateTime,
    default_duration_minutes: u32,
) -> HashSet<&'a str> {
    reservations
        .iter()
        .filter(|r| r.date == date && r.occupies_at(slot_start, default_duration_minutes))
        .filter_map(|r| r.table_id.as_deref())
        .collect()
}
