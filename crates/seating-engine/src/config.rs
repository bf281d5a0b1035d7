//! Venue-level booking configuration.
//!
//! Every knob the slot generator consults lives here as a named value; the
//! engine has no module-level tuning constants. The data layer hydrates one
//! of these per venue and hands it in with each query.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SeatingError};

/// Booking configuration for a single venue.
///
/// `timezone` is an IANA identifier (e.g., "Europe/Madrid") resolved once
/// per query. `min_lead_time_minutes` is the notice required for same-day
/// bookings; `max_lead_time_days` closes the booking horizon that far past
/// today. `slot_interval_minutes` is the step between candidate starts, and
/// `default_duration_minutes` the assumed length of a reservation that does
/// not carry its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VenueConfig {
    pub timezone: String,
    pub min_party_size: u32,
    pub max_party_size: u32,
    pub min_lead_time_minutes: i64,
    pub max_lead_time_days: i64,
    pub slot_interval_minutes: u32,
    pub default_duration_minutes: u32,
}

impl Default for VenueConfig {
    fn default() -> Self {
        Self {
            timezone: "UTC".to_string(),
            min_party_size: 1,
            max_party_size: 12,
            min_lead_time_minutes: 60,
            max_lead_time_days: 90,
            slot_interval_minutes: 30,
            default_duration_minutes: 120,
        }
    }
}

impl VenueConfig {
    /// Resolve the configured IANA timezone.
    ///
    /// # Errors
    /// Returns `SeatingError::InvalidTimezone` if the identifier is not a
    /// known IANA timezone.
    pub fn resolve_timezone(&self) -> Result<Tz> {
        self.timezone
            .parse()
            .map_err(|_| SeatingError::InvalidTimezone(self.timezone.clone()))
    }

    /// True when `party_size` lies inside the venue's accepted range.
    pub fn accepts_party_size(&self, party_size: u32) -> bool {
        party_size >= self.min_party_size && party_size <= self.max_party_size
    }
}
