//! Explicit closures: whole days or time ranges taken off the books.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A closure entered against a single date.
///
/// A ranged closure missing either bound is treated as covering the whole
/// day; a half-specified range means "closed", never "open".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedPeriod {
    pub date: NaiveDate,
    pub all_day: bool,
    #[serde(default)]
    pub from: Option<NaiveTime>,
    #[serde(default)]
    pub to: Option<NaiveTime>,
}

impl BlockedPeriod {
    /// True when this closure suppresses the entire date, either explicitly
    /// or because a ranged closure is missing a bound.
    pub fn is_effectively_all_day(&self) -> bool {
        self.all_day || self.from.is_none() || self.to.is_none()
    }

    /// True when `start` falls inside this closure's `[from, to)` range,
    /// anchored on the closure's own date.
    ///
    /// Always false for (effectively) all-day closures; those suppress the
    /// whole date before any slot is generated.
    pub fn blocks_start(&self, start: NaiveDateTime) -> bool {
        if self.is_effectively_all_day() {
            return false;
        }
        match (self.from, self.to) {
            (Some(from), Some(to)) => {
                let from_dt = self.date.and_time(from);
                let to_dt = self.date.and_time(to);
                from_dt <= start && start < to_dt
            }
            _ => false,
        }
    }
}

/// True when any closure for `date` covers the whole day.
pub fn blocks_entire_day(periods: &[BlockedPeriod], date: NaiveDate) -> bool {
    periods
        .iter()
        .any(|p| p.date == date && p.is_effectively_all_day())
}

/// True when any ranged closure for `date` contains `start`.
pub fn blocks_slot_start(periods: &[BlockedPeriod], date: NaiveDate, start: NaiveDateTime) -> bool {
    periods
        .iter()
        .any(|p| p.date == date && p.blocks_start(start))
}
