//! The slot generator: everything the rest of the crate models, combined
//! into one availability answer.
//!
//! The computation is a pure function of the snapshot, the queried date and
//! party size, and an injected `now`. It performs no I/O and holds no state
//! across calls; callers re-load the snapshot fresh for every query. The
//! check-then-act race between "this slot is bookable" and "persist the
//! reservation" is real and belongs to the persistence boundary, which must
//! re-check inside a transaction or hold a venue+date+slot lock.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::closures::{self, BlockedPeriod};
use crate::config::VenueConfig;
use crate::error::{Result, SeatingError};
use crate::occupancy::{self, Reservation};
use crate::result::{AvailabilityResult, SlotDebug, TimeSlot};
use crate::schedule::{self, OpeningShift};
use crate::tables::{self, Table};

/// Everything one availability query reads, loaded fresh from the data
/// layer. The data layer pre-filters to the venue, the booking profile,
/// and the target date/weekday; the generator re-applies the cheap parts
/// of those filters so an unfiltered load computes the same answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueSnapshot {
    pub config: VenueConfig,
    pub tables: Vec<Table>,
    pub shifts: Vec<OpeningShift>,
    #[serde(default)]
    pub blocked_periods: Vec<BlockedPeriod>,
    #[serde(default)]
    pub reservations: Vec<Reservation>,
}

impl VenueSnapshot {
    /// Compute availability for `date` and `party_size` as of `now`.
    pub fn availability(
        &self,
        date: NaiveDate,
        party_size: u32,
        now: DateTime<Utc>,
    ) -> Result<AvailabilityResult> {
        compute_availability(self, date, party_size, now)
    }
}

/// Compute which slots on `date` a party of `party_size` can book.
///
/// `now` is the caller's clock; the engine never reads the ambient one.
/// It is converted into the venue's timezone exactly once, to decide what
/// "today" is and where the same-day lead-time cutoff falls. All other
/// arithmetic is venue wall-clock time.
///
/// Every domain-level "cannot book" — closed weekday, all-day closure,
/// party too large for the floor, horizon exceeded — is `Ok` with an empty
/// slot list. `Err` is reserved for input-contract violations: a timezone
/// the venue misconfigured, or a zero slot interval that would never step.
pub fn compute_availability(
    snapshot: &VenueSnapshot,
    date: NaiveDate,
    party_size: u32,
    now: DateTime<Utc>,
) -> Result<AvailabilityResult> {
    let config = &snapshot.config;
    let tz = config.resolve_timezone()?;
    if config.slot_interval_minutes == 0 {
        return Err(SeatingError::InvalidSlotInterval(0));
    }
    let interval = Duration::minutes(i64::from(config.slot_interval_minutes));

    let local_now = now.with_timezone(&tz).naive_local();
    let today = local_now.date();

    let empty = || Ok(AvailabilityResult::empty(date, party_size));

    if !config.accepts_party_size(party_size) {
        return empty();
    }
    if date > today + Duration::days(config.max_lead_time_days) {
        return empty();
    }
    if closures::blocks_entire_day(&snapshot.blocked_periods, date) {
        return empty();
    }

    let open_shifts = schedule::shifts_for_date(&snapshot.shifts, date);
    if open_shifts.is_empty() {
        return empty();
    }

    let total_capacity = tables::total_capacity(&snapshot.tables);
    if party_size > total_capacity {
        return empty();
    }

    // Same-day queries lose slots inside the notice window; any other date
    // keeps them all.
    let cutoff = if date == today {
        Some(local_now + Duration::minutes(config.min_lead_time_minutes))
    } else {
        None
    };

    let active_tables: Vec<&Table> = snapshot.tables.iter().filter(|t| t.active).collect();

    let mut slots: Vec<TimeSlot> = Vec::new();
    for shift in open_shifts {
        let window = shift.anchor(date);
        let mut start = window.opens;
        while start < window.limit {
            let candidate = start;
            start += interval;

            if closures::blocks_slot_start(&snapshot.blocked_periods, date, candidate) {
                continue;
            }
            if let Some(cutoff) = cutoff {
                if candidate < cutoff {
                    continue;
                }
            }

            let occupied = occupancy::occupied_guests(
                &snapshot.reservations,
                date,
                candidate,
                config.default_duration_minutes,
            );
            let available = total_capacity.saturating_sub(occupied);

            let held_tables = occupancy::occupied_table_ids(
                &snapshot.reservations,
                date,
                candidate,
                config.default_duration_minutes,
            );
            let unoccupied: Vec<&Table> = active_tables
                .iter()
                .copied()
                .filter(|t| !held_tables.contains(t.id.as_str()))
                .collect();

            let bookable = party_size <= available && tables::can_fit(party_size, &unoccupied);

            slots.push(TimeSlot {
                start: candidate,
                end: candidate + interval,
                bookable,
                max_party_size: available,
                debug: SlotDebug {
                    total_capacity,
                    occupied_guests: occupied,
                    available_capacity: available,
                },
            });
        }
    }

    // Overlapping shifts may produce the same start twice; both entries
    // stay, in shift order. Stable sort keeps that order within a start.
    slots.sort_by_key(|s| s.start);

    Ok(AvailabilityResult {
        date,
        party_size,
        slots,
    })
}
