//! Tests for anchoring weekly shifts onto concrete dates, including the
//! midnight-span rule and the stepping limit.

use chrono::{NaiveDate, NaiveTime};
use seating_engine::OpeningShift;

fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

fn d(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn shift(weekday: u8, opens: &str, closes: &str, last: Option<&str>) -> OpeningShift {
    OpeningShift {
        weekday,
        open: true,
        opens_at: t(opens),
        closes_at: t(closes),
        last_seating: last.map(t),
    }
}

// ── Weekday matching ────────────────────────────────────────────────────────

#[test]
fn weekday_zero_is_monday() {
    let s = shift(0, "12:00", "14:00", None);
    assert!(s.applies_to(d("2026-06-01"))); // a Monday
    assert!(!s.applies_to(d("2026-06-02")));
}

#[test]
fn weekday_six_is_sunday() {
    let s = shift(6, "12:00", "14:00", None);
    assert!(s.applies_to(d("2026-06-07"))); // a Sunday
    assert!(!s.applies_to(d("2026-06-06")));
}

#[test]
fn closed_shift_applies_to_nothing() {
    let mut s = shift(0, "12:00", "14:00", None);
    s.open = false;
    assert!(!s.applies_to(d("2026-06-01")));
}

// ── Anchoring ───────────────────────────────────────────────────────────────

#[test]
fn same_day_shift_anchors_everything_on_the_date() {
    let s = shift(4, "18:00", "22:00", Some("21:00"));
    let w = s.anchor(d("2026-06-05"));

    assert_eq!(w.opens, d("2026-06-05").and_time(t("18:00")));
    assert_eq!(w.closes, d("2026-06-05").and_time(t("22:00")));
    assert_eq!(w.limit, d("2026-06-05").and_time(t("21:00")));
}

#[test]
fn missing_last_seating_defaults_the_limit_to_close() {
    let s = shift(4, "18:00", "22:00", None);
    let w = s.anchor(d("2026-06-05"));
    assert_eq!(w.limit, w.closes);
}

#[test]
fn spanning_shift_pushes_close_and_last_seating_to_the_next_day() {
    let s = shift(4, "22:00", "02:00", Some("01:00"));
    let w = s.anchor(d("2026-06-05"));

    assert_eq!(w.opens, d("2026-06-05").and_time(t("22:00")));
    assert_eq!(w.closes, d("2026-06-06").and_time(t("02:00")));
    assert_eq!(w.limit, d("2026-06-06").and_time(t("01:00")));
}

#[test]
fn close_equal_to_open_counts_as_spanning() {
    // A 24-hour bar: closes_at == opens_at spans to the next day rather
    // than collapsing to an empty window.
    let s = shift(4, "18:00", "18:00", None);
    let w = s.anchor(d("2026-06-05"));
    assert_eq!(w.closes, d("2026-06-06").and_time(t("18:00")));
}
