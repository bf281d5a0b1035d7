//! Physical tables and the seating feasibility check.
//!
//! Capacity accounting (how many seats remain) and feasibility (can these
//! tables physically take the party) are separate questions; this module
//! answers the second. A slot can show plenty of aggregate capacity and
//! still be unbookable because no table arrangement seats the party.

use serde::{Deserialize, Serialize};

/// A physical table on the venue floor.
///
/// `max_guests` caps the party this table takes on its own; when absent the
/// cap is the seat count. `combinable` marks tables that may be joined with
/// others for larger parties. The data layer guarantees
/// `min_guests <= seat_count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub id: String,
    pub seat_count: u32,
    pub min_guests: u32,
    #[serde(default)]
    pub max_guests: Option<u32>,
    pub combinable: bool,
    pub active: bool,
}

impl Table {
    /// The largest party this table seats on its own.
    pub fn single_table_cap(&self) -> u32 {
        self.max_guests.unwrap_or(self.seat_count)
    }

    /// True when this table alone seats a party of `party_size`.
    pub fn seats_alone(&self, party_size: u32) -> bool {
        self.min_guests <= party_size && party_size <= self.single_table_cap()
    }
}

/// Total bookable capacity: the summed seat counts of active tables.
pub fn total_capacity(tables: &[Table]) -> u32 {
    tables
        .iter()
        .filter(|t| t.active)
        .map(|t| t.seat_count)
        .sum()
}

/// Decide whether a party of `party_size` can be physically seated on
/// `unoccupied_tables`.
///
/// Intentionally greedy, not optimal:
/// 1. The first table (in input order) that seats the party alone wins; no
///    best-fit search.
/// 2. Failing that, combinable tables are taken smallest seat count first
///    and their seats summed until the party fits. Aggregate seats only;
///    there is no adjacency model, and the combination path ignores
///    per-table minimums.
///
/// The single-table-first preference and the smallest-first combination
/// order are behavior contracts for the booking flow. A combinatorial
/// table-assignment solver would replace this function, not tweak it.
pub fn can_fit(party_size: u32, unoccupied_tables: &[&Table]) -> bool {
    if unoccupied_tables.iter().any(|t| t.seats_alone(party_size)) {
        return true;
    }

    let mut combinable: Vec<&Table> = unoccupied_tables
        .iter()
        .copied()
        .filter(|t| t.combinable)
        .collect();
    combinable.sort_by_key(|t| t.seat_count);

    let mut seated = 0u32;
    for table in combinable {
        seated += table.seat_count;
        if seated >= party_size {
            return true;
        }
    }
    false
}
