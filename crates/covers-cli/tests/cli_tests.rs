//! Integration tests for the `covers` CLI binary.
//!
//! These use `assert_cmd` and `predicates` to exercise the slots and check
//! subcommands through the actual binary, including stdin piping, file
//! output, `--now`-pinned lead-time behavior, and exit codes.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Path to the venue.json fixture: Friday dinner 18:00-22:00, four 4-seat
/// tables, one confirmed 10-guest reservation 18:30-20:00.
fn venue_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/venue.json")
}

fn venue_json() -> String {
    std::fs::read_to_string(venue_json_path()).expect("venue.json fixture must exist")
}

/// A clock days before the fixture's Friday, so lead time never interferes.
const NOW: &str = "2026-06-01T12:00:00Z";

// ─────────────────────────────────────────────────────────────────────────────
// Slots subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn slots_from_stdin_prints_a_table() {
    Command::cargo_bin("covers")
        .unwrap()
        .args(["slots", "--date", "2026-06-05", "--party", "2", "--now", NOW])
        .write_stdin(venue_json())
        .assert()
        .success()
        .stdout(predicate::str::contains("Availability for 2026-06-05"))
        .stdout(predicate::str::contains("18:00  [open]"))
        .stdout(predicate::str::contains("8 slots, 8 bookable"));
}

#[test]
fn slots_marks_capacity_squeezed_starts_full() {
    // Party of 8 against the 10-guest reservation: 18:30-19:30 starts show 6
    // seats free and cannot take the party.
    Command::cargo_bin("covers")
        .unwrap()
        .args(["slots", "--date", "2026-06-05", "--party", "8", "--now", NOW])
        .write_stdin(venue_json())
        .assert()
        .success()
        .stdout(predicate::str::contains("18:30  [full]"))
        .stdout(predicate::str::contains("20:00  [open]"))
        .stdout(predicate::str::contains("8 slots, 5 bookable"));
}

#[test]
fn slots_from_file_with_json_output() {
    let output = Command::cargo_bin("covers")
        .unwrap()
        .args([
            "slots",
            "-i",
            venue_json_path(),
            "--date",
            "2026-06-05",
            "--party",
            "2",
            "--now",
            NOW,
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(parsed["date"], "2026-06-05");
    assert_eq!(parsed["party_size"], 2);
    assert_eq!(parsed["slots"].as_array().unwrap().len(), 8);
}

#[test]
fn slots_to_output_file() {
    let output_path = "/tmp/covers-test-slots-output.txt";
    let _ = std::fs::remove_file(output_path);

    Command::cargo_bin("covers")
        .unwrap()
        .args([
            "slots",
            "-i",
            venue_json_path(),
            "-o",
            output_path,
            "--date",
            "2026-06-05",
            "--party",
            "2",
            "--now",
            NOW,
        ])
        .assert()
        .success();

    let content = std::fs::read_to_string(output_path).expect("output file must exist");
    assert!(content.contains("8 slots, 8 bookable"));
}

#[test]
fn slots_on_a_closed_weekday_reports_no_slots() {
    Command::cargo_bin("covers")
        .unwrap()
        .args(["slots", "--date", "2026-06-06", "--party", "2", "--now", NOW])
        .write_stdin(venue_json())
        .assert()
        .success()
        .stdout(predicate::str::contains("No slots"));
}

#[test]
fn now_pin_applies_the_same_day_lead_time() {
    // 19:05 on the Friday itself with 60-minute notice: nothing before
    // 20:05 is offered.
    Command::cargo_bin("covers")
        .unwrap()
        .args([
            "slots",
            "--date",
            "2026-06-05",
            "--party",
            "2",
            "--now",
            "2026-06-05T19:05:00Z",
        ])
        .write_stdin(venue_json())
        .assert()
        .success()
        .stdout(predicate::str::contains("20:30").and(predicate::str::contains("18:00").not()))
        .stdout(predicate::str::contains("3 slots, 3 bookable"));
}

#[test]
fn malformed_snapshot_is_a_fatal_error() {
    Command::cargo_bin("covers")
        .unwrap()
        .args(["slots", "--date", "2026-06-05", "--party", "2"])
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse venue snapshot"));
}

#[test]
fn missing_input_file_is_a_fatal_error() {
    Command::cargo_bin("covers")
        .unwrap()
        .args([
            "slots",
            "-i",
            "/nonexistent/venue.json",
            "--date",
            "2026-06-05",
            "--party",
            "2",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Check subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_bookable_slot_exits_zero() {
    Command::cargo_bin("covers")
        .unwrap()
        .args([
            "check",
            "-i",
            venue_json_path(),
            "--date",
            "2026-06-05",
            "--party",
            "2",
            "--time",
            "19:30",
            "--now",
            NOW,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: 19:30 is bookable"));
}

#[test]
fn check_capacity_squeezed_slot_exits_nonzero() {
    Command::cargo_bin("covers")
        .unwrap()
        .args([
            "check",
            "-i",
            venue_json_path(),
            "--date",
            "2026-06-05",
            "--party",
            "8",
            "--time",
            "19:00",
            "--now",
            NOW,
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("NOT BOOKABLE"));
}

#[test]
fn check_unoffered_time_exits_nonzero() {
    Command::cargo_bin("covers")
        .unwrap()
        .args([
            "check",
            "-i",
            venue_json_path(),
            "--date",
            "2026-06-05",
            "--party",
            "2",
            "--time",
            "17:00",
            "--now",
            NOW,
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("NOT OFFERED"));
}
