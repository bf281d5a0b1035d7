//! `covers` CLI — availability queries and pre-booking slot checks for
//! staff tooling, against a JSON venue snapshot.
//!
//! ## Usage
//!
//! ```sh
//! # List slots for a date and party size (snapshot via stdin)
//! cat venue.json | covers slots --date 2026-06-05 --party 4
//!
//! # Same, from a file, as JSON
//! covers slots -i venue.json --date 2026-06-05 --party 4 --json
//!
//! # Pin the clock for reproducible same-day output
//! covers slots -i venue.json --date 2026-06-05 --party 4 \
//!   --now 2026-06-05T17:00:00Z
//!
//! # Re-validate a submitted slot right before persisting the booking;
//! # exit code 0 means bookable
//! covers check -i venue.json --date 2026-06-05 --party 4 --time 19:30
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use seating_engine::{AvailabilityResult, VenueSnapshot};
use std::io::{self, Read};
use std::process;

#[derive(Parser)]
#[command(name = "covers", version, about = "Table availability for venue staff")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List time slots for a date and party size
    Slots {
        /// Venue snapshot JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Date to query, YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
        /// Party size
        #[arg(long)]
        party: u32,
        /// Clock override, RFC 3339 (defaults to the current time)
        #[arg(long)]
        now: Option<DateTime<Utc>>,
        /// Emit the full result as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Re-validate one HH:MM slot before persisting a reservation
    Check {
        /// Venue snapshot JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Date to query, YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
        /// Party size
        #[arg(long)]
        party: u32,
        /// Slot start to check, HH:MM
        #[arg(long)]
        time: String,
        /// Clock override, RFC 3339 (defaults to the current time)
        #[arg(long)]
        now: Option<DateTime<Utc>>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Slots {
            input,
            output,
            date,
            party,
            now,
            json,
        } => {
            let result = run_query(input.as_deref(), date, party, now)?;
            let rendered = if json {
                serde_json::to_string_pretty(&result)?
            } else {
                render_table(&result)
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Check {
            input,
            date,
            party,
            time,
            now,
        } => {
            let result = run_query(input.as_deref(), date, party, now)?;
            match result.find_slot_by_time(&time) {
                Some(slot) if slot.bookable => {
                    println!(
                        "OK: {} is bookable for {} (capacity left: {})",
                        time, party, slot.max_party_size
                    );
                }
                Some(slot) => {
                    println!(
                        "NOT BOOKABLE: {} cannot take a party of {} (capacity left: {})",
                        time, party, slot.max_party_size
                    );
                    process::exit(1);
                }
                None => {
                    println!("NOT OFFERED: no slot starts at {} on {}", time, date);
                    process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn run_query(
    input: Option<&str>,
    date: NaiveDate,
    party: u32,
    now: Option<DateTime<Utc>>,
) -> Result<AvailabilityResult> {
    let raw = read_input(input)?;
    let snapshot: VenueSnapshot =
        serde_json::from_str(&raw).context("Failed to parse venue snapshot JSON")?;
    snapshot
        .availability(date, party, now.unwrap_or_else(Utc::now))
        .context("Failed to compute availability")
}

/// Human-readable slot table: one line per slot plus a summary.
fn render_table(result: &AvailabilityResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Availability for {} (party of {})\n",
        result.date, result.party_size
    ));

    if !result.has_slots() {
        out.push_str("No slots: the venue is closed or cannot take this party.\n");
        return out;
    }

    for slot in &result.slots {
        let marker = if slot.bookable { "open" } else { "full" };
        out.push_str(&format!(
            "  {}  [{}]  {:2} of {:2} seats free\n",
            slot.start_label(),
            marker,
            slot.debug.available_capacity,
            slot.debug.total_capacity,
        ));
    }
    out.push_str(&format!(
        "{} slots, {} bookable\n",
        result.slot_count(),
        result.bookable_count()
    ));
    out
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
