//! The immutable answer to an availability query.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Capacity breakdown for one slot, carried in-band for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotDebug {
    pub total_capacity: u32,
    pub occupied_guests: u32,
    pub available_capacity: u32,
}

/// One fixed-width candidate for a reservation start.
///
/// `end` marks the next bookable start, not when the party would leave;
/// occupancy length is the reservation's own concern. `max_party_size` is
/// the aggregate capacity left at this start, before table fitting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub bookable: bool,
    pub max_party_size: u32,
    pub debug: SlotDebug,
}

impl TimeSlot {
    /// The slot's start formatted as the wire label the booking page shows
    /// and submits back, `"HH:MM"`.
    pub fn start_label(&self) -> String {
        self.start.format("%H:%M").to_string()
    }
}

/// Availability for one venue, date, and party size.
///
/// Constructed by the slot generator and read-only from then on. Slots are
/// sorted ascending by start; overlapping shifts that generate the same
/// start time each contribute their own entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResult {
    pub date: NaiveDate,
    pub party_size: u32,
    pub slots: Vec<TimeSlot>,
}

impl AvailabilityResult {
    /// An empty result: the venue cannot take this query at all.
    pub(crate) fn empty(date: NaiveDate, party_size: u32) -> Self {
        Self {
            date,
            party_size,
            slots: Vec::new(),
        }
    }

    pub fn has_slots(&self) -> bool {
        !self.slots.is_empty()
    }

    /// The slots this party can actually book.
    pub fn bookable_slots(&self) -> impl Iterator<Item = &TimeSlot> {
        self.slots.iter().filter(|s| s.bookable)
    }

    pub fn has_bookable_slots(&self) -> bool {
        self.slots.iter().any(|s| s.bookable)
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn bookable_count(&self) -> usize {
        self.bookable_slots().count()
    }

    /// First slot whose start formats to exactly `time` (`"HH:MM"`).
    ///
    /// This is the re-validation hook: a submitted slot string is looked up
    /// here immediately before the reservation is persisted.
    pub fn find_slot_by_time(&self, time: &str) -> Option<&TimeSlot> {
        self.slots.iter().find(|s| s.start_label() == time)
    }
}
