//! Weekly opening shifts and their projection onto concrete dates.
//!
//! The schedule is stored as clock times against weekdays; nothing here is
//! tied to a calendar date until a query anchors a shift onto one. All
//! anchored values are venue wall-clock (`NaiveDateTime`); the timezone
//! only matters when the generator derives "now" and "today".

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// One shift in a venue's weekly booking schedule.
///
/// `weekday` follows the storage convention 0 = Monday .. 6 = Sunday. A
/// shift whose `closes_at` is not after `opens_at` spans midnight; once
/// anchored, its close and last seating belong to the following calendar
/// day. `last_seating` is the latest reservation start the venue accepts;
/// when absent, the close time takes that role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningShift {
    pub weekday: u8,
    pub open: bool,
    pub opens_at: NaiveTime,
    pub closes_at: NaiveTime,
    #[serde(default)]
    pub last_seating: Option<NaiveTime>,
}

/// A shift anchored onto a concrete date, in venue wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftWindow {
    pub opens: NaiveDateTime,
    pub closes: NaiveDateTime,
    /// Latest candidate start; slot stepping stops strictly before this.
    pub limit: NaiveDateTime,
}

impl OpeningShift {
    /// True when this shift takes bookings on `date`'s weekday.
    pub fn applies_to(&self, date: NaiveDate) -> bool {
        self.open && u32::from(self.weekday) == date.weekday().num_days_from_monday()
    }

    /// Anchor the shift's clock times onto `date`.
    ///
    /// When the shift spans midnight (`closes_at <= opens_at`), the close
    /// and the last seating land on the day after `date`.
    pub fn anchor(&self, date: NaiveDate) -> ShiftWindow {
        let spans_midnight = self.closes_at <= self.opens_at;
        let close_date = if spans_midnight {
            date + Duration::days(1)
        } else {
            date
        };

        let opens = date.and_time(self.opens_at);
        let closes = close_date.and_time(self.closes_at);
        let limit = match self.last_seating {
            Some(t) => close_date.and_time(t),
            None => closes,
        };
        ShiftWindow {
            opens,
            closes,
            limit,
        }
    }
}

/// The shifts open for booking on `date`, in input order.
pub fn shifts_for_date(shifts: &[OpeningShift], date: NaiveDate) -> Vec<&OpeningShift> {
    shifts.iter().filter(|s| s.applies_to(date)).collect()
}
