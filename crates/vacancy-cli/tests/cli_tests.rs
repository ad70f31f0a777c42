//! Integration tests for the `vacancy` CLI binary.
//!
//! These use `assert_cmd` and `predicates` to exercise the `free` and `now`
//! subcommands through the actual binary, including the table and JSON
//! output modes and schedule-file error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the schedules.json fixture.
fn fixture_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/schedules.json")
}

fn vacancy() -> Command {
    let mut cmd = Command::cargo_bin("vacancy").unwrap();
    cmd.args(["--schedule", fixture_path()]);
    cmd
}

// ─────────────────────────────────────────────────────────────────────────────
// free subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn free_on_monday_lists_rooms_as_a_table() {
    // 401 is free 11:30-19:30, 501 is fully booked, the rest are free all day.
    vacancy()
        .args(["free", "--day", "Mon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Room"))
        .stdout(predicate::str::contains("401"))
        .stdout(predicate::str::contains("11:30"))
        .stdout(predicate::str::is_match(r"402\s+Mon\s+09:00\s+19:30\s+630").unwrap());
}

#[test]
fn fully_booked_room_is_absent() {
    // 501 has a 09:00-19:30 seminar on Mon — no free slot to report.
    vacancy()
        .args(["free", "--day", "Mon"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?m)^501\b").unwrap().not());
}

#[test]
fn non_roster_room_from_the_schedule_is_ignored() {
    // The fixture carries occupancy for room 999, which is not on the roster.
    vacancy()
        .args(["free", "--day", "Mon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("999").not());
}

#[test]
fn target_time_filters_to_containing_slots() {
    // On Tue, room 402 is free 09:30-14:30 and 15:30-19:30; only the first
    // slot contains 10:00.
    vacancy()
        .args(["--rooms", "402", "free", "--day", "Tue", "--at", "10:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("09:30"))
        .stdout(predicate::str::contains("14:30"))
        .stdout(predicate::str::contains("15:30").not());
}

#[test]
fn min_duration_drops_short_slots() {
    // 402's Tue slots are 300 and 240 minutes; 250 keeps only the first.
    vacancy()
        .args(["--rooms", "402", "free", "--day", "Tue", "--min-duration", "250"])
        .assert()
        .success()
        .stdout(predicate::str::contains("300"))
        .stdout(predicate::str::contains("240").not());
}

#[test]
fn no_matching_rooms_prints_a_message_not_an_error() {
    vacancy()
        .args(["--rooms", "501", "free", "--day", "Mon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No free rooms match."));
}

#[test]
fn json_output_is_a_parseable_array_with_camel_case_fields() {
    let output = vacancy()
        .args(["--json", "--rooms", "401", "free", "--day", "Mon"])
        .output()
        .expect("binary should run");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("output should be UTF-8");
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("stdout must be JSON");

    let results = value.as_array().expect("top level must be an array");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["room"], "401");
    assert_eq!(results[0]["freeFrom"], "11:30");
    assert_eq!(results[0]["freeTill"], "19:30");
    assert_eq!(results[0]["durationMinutes"], 480);
}

#[test]
fn custom_window_changes_the_computation() {
    // With an 08:00-12:00 window, 401's Mon free time is only 11:30-12:00.
    vacancy()
        .args(["--window", "08:00-12:00", "--rooms", "401", "free", "--day", "Mon"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"401\s+Mon\s+11:30\s+12:00\s+30").unwrap());
}

#[test]
fn results_sorted_by_duration_then_room() {
    let output = vacancy()
        .args(["--json", "free", "--day", "Mon"])
        .output()
        .expect("binary should run");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let results: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let results = results.as_array().unwrap();

    // Free-all-day rooms (630 min) come first in numeric room order, then
    // 401's 480-minute slot.
    let durations: Vec<i64> = results
        .iter()
        .map(|r| r["durationMinutes"].as_i64().unwrap())
        .collect();
    let mut sorted = durations.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(durations, sorted, "durations must be non-increasing");

    let first: Vec<&str> = results
        .iter()
        .take(2)
        .map(|r| r["room"].as_str().unwrap())
        .collect();
    assert_eq!(first, vec!["402", "403"]);
    assert_eq!(results.last().unwrap()["room"], "401");
}

// ─────────────────────────────────────────────────────────────────────────────
// now subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn now_runs_against_the_campus_clock() {
    // The answer depends on the wall clock (and is empty on weekends), so
    // only the exit status and output shape are asserted.
    vacancy()
        .arg("now")
        .assert()
        .success()
        .stdout(predicate::str::contains("Room").or(predicate::str::contains("No free rooms")));
}

#[test]
fn now_rejects_an_invalid_timezone() {
    vacancy()
        .args(["--timezone", "Campus/Nowhere", "now"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid IANA time zone"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Error handling
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn missing_schedule_file_fails() {
    Command::cargo_bin("vacancy")
        .unwrap()
        .args(["--schedule", "/nonexistent/schedules.json", "free", "--day", "Mon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read schedule file"));
}

#[test]
fn malformed_clock_time_in_schedule_fails_fast() {
    let path = "/tmp/vacancy-test-bad-schedule.json";
    std::fs::write(
        path,
        r#"{"schedules":[{"room":"401","day":"Mon","occupied":[{"start":"9am","end":"11:00"}]}]}"#,
    )
    .unwrap();

    Command::cargo_bin("vacancy")
        .unwrap()
        .args(["--schedule", path, "free", "--day", "Mon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse schedule file"));

    let _ = std::fs::remove_file(path);
}

#[test]
fn invalid_day_is_rejected_by_the_parser() {
    // "Fri" is outside the 4-day roster; "Thu" is the wrong Thursday spelling.
    for bad in ["Fri", "Thu"] {
        vacancy()
            .args(["free", "--day", bad])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid day of week"));
    }
}

#[test]
fn invalid_window_is_rejected() {
    vacancy()
        .args(["--window", "19:00-09:00", "free", "--day", "Mon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Window start must be before end"));
}

#[test]
fn help_shows_both_subcommands() {
    Command::cargo_bin("vacancy")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("free"))
        .stdout(predicate::str::contains("now"));
}
