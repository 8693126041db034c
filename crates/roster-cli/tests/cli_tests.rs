//! Integration tests for the `roster` CLI binary.
//!
//! These use `assert_cmd` and `predicates` to exercise the check-overlap,
//! today, and print-window subcommands through the actual binary, including
//! stdin piping, file input, exit-status behavior, and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the overlap-request.json fixture.
fn overlap_request_path() -> &'static str {
    concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/overlap-request.json"
    )
}

/// Helper: path to the roster.json fixture.
fn roster_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/roster.json")
}

// ─────────────────────────────────────────────────────────────────────────────
// check-overlap subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_overlap_reports_conflict_from_file() {
    Command::cargo_bin("roster")
        .unwrap()
        .args(["check-overlap", "-i", overlap_request_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"hasOverlap\": true"))
        .stdout(predicate::str::contains("\"existingId\": \"old\""))
        .stdout(predicate::str::contains("\"overlapMinutes\": 30"));
}

#[test]
fn check_overlap_no_conflict_via_stdin() {
    let input = r#"{
        "candidate": {
            "id": "new",
            "physicianId": "dr-1",
            "days": ["tuesday"],
            "startDate": "2026-01-05",
            "startTime": "09:00",
            "endTime": "10:00"
        },
        "existing": []
    }"#;

    Command::cargo_bin("roster")
        .unwrap()
        .arg("check-overlap")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"hasOverlap\": false"));
}

#[test]
fn check_overlap_rejects_empty_day_set() {
    let input = r#"{
        "candidate": {
            "id": "new",
            "physicianId": "dr-1",
            "days": [],
            "startDate": "2026-01-05",
            "startTime": "09:00",
            "endTime": "10:00"
        },
        "existing": []
    }"#;

    Command::cargo_bin("roster")
        .unwrap()
        .arg("check-overlap")
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not well-formed"));
}

#[test]
fn check_overlap_invalid_json_fails() {
    Command::cargo_bin("roster")
        .unwrap()
        .arg("check-overlap")
        .write_stdin("this is not valid json {{{")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}

// ─────────────────────────────────────────────────────────────────────────────
// today subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn today_resolves_matching_weekday() {
    // 2026-01-07 is a Wednesday — only dr-1's schedule applies.
    Command::cargo_bin("roster")
        .unwrap()
        .args(["today", "-i", roster_path(), "--date", "2026-01-07"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sourceScheduleId\": \"s1\""))
        .stdout(predicate::str::contains("Dr. Amari Okafor"))
        .stdout(predicate::str::contains("\"day\": \"wednesday\""))
        .stdout(predicate::str::contains("\"sourceScheduleId\": \"s2\"").not());
}

#[test]
fn today_with_no_matching_weekday_prints_empty_list() {
    // 2026-01-05 is a Monday — neither fixture schedule lists monday.
    Command::cargo_bin("roster")
        .unwrap()
        .args(["today", "-i", roster_path(), "--date", "2026-01-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn today_missing_physician_gets_placeholders() {
    // 2026-01-08 is a Thursday — dr-2's schedule applies, and dr-2 has no
    // physician record in the fixture.
    Command::cargo_bin("roster")
        .unwrap()
        .args(["today", "-i", roster_path(), "--date", "2026-01-08"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown Physician"))
        .stdout(predicate::str::contains("\"speciality\": \"N/A\""));
}

// ─────────────────────────────────────────────────────────────────────────────
// print-window subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn print_window_within_grace_is_printable() {
    Command::cargo_bin("roster")
        .unwrap()
        .args(["print-window", "--end-time", "17:00", "--now", "17:10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("printable"));
}

#[test]
fn print_window_past_grace_exits_nonzero() {
    Command::cargo_bin("roster")
        .unwrap()
        .args(["print-window", "--end-time", "17:00", "--now", "17:11"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("print window closed"));
}

#[test]
fn print_window_custom_grace_respected() {
    Command::cargo_bin("roster")
        .unwrap()
        .args([
            "print-window",
            "--end-time",
            "17:00",
            "--now",
            "17:25",
            "--grace",
            "30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("printable"));
}

#[test]
fn print_window_without_end_time_is_printable() {
    Command::cargo_bin("roster")
        .unwrap()
        .args(["print-window", "--now", "23:59"])
        .assert()
        .success()
        .stdout(predicate::str::contains("printable"));
}

#[test]
fn print_window_invalid_now_fails() {
    Command::cargo_bin("roster")
        .unwrap()
        .args(["print-window", "--end-time", "17:00", "--now", "late"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --now time"));
}
