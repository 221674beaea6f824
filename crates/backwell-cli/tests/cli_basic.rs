//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against an isolated HOME so
//! each test gets its own database and config.

use std::path::Path;
use std::process::Command;

/// Run a CLI command with the given HOME and return output.
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "backwell-cli", "--quiet", "--"])
        .args(args)
        .env("HOME", home)
        .env("BACKWELL_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_ok(home: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(home, args);
    assert_eq!(code, 0, "command failed: {args:?}\nstderr: {stderr}");
    stdout
}

#[test]
fn test_program_list() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_ok(home.path(), &["program", "list"]);
    assert_eq!(stdout.lines().count(), 28);
    assert!(stdout.contains("Welcome to Relief"));
}

#[test]
fn test_program_show_json() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_ok(home.path(), &["program", "show", "--day", "1", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["day"], 1);
    assert_eq!(parsed["title"], "Welcome to Relief");
    assert_eq!(parsed["exercises"].as_array().unwrap().len(), 5);
}

#[test]
fn test_program_show_invalid_day() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["program", "show", "--day", "99"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("out of range"));
}

#[test]
fn test_play_start_and_status() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_ok(home.path(), &["play", "start", "--day", "1"]);
    assert!(stdout.contains("session_started"));
    assert!(stdout.contains("segment_started"));

    let status = run_ok(home.path(), &["play", "status"]);
    let parsed: serde_json::Value = serde_json::from_str(&status).unwrap();
    assert_eq!(parsed["type"], "state_snapshot");
    assert_eq!(parsed["phase"], "exercise");
    assert_eq!(parsed["running"], false);
}

#[test]
fn test_skip_through_full_day_records_progress() {
    let home = tempfile::tempdir().unwrap();
    run_ok(home.path(), &["play", "start", "--day", "1"]);

    // 5 exercises + 3 mental segments.
    let mut completed = false;
    for _ in 0..8 {
        let stdout = run_ok(home.path(), &["play", "skip"]);
        if stdout.contains("day_completed") {
            completed = true;
            break;
        }
    }
    assert!(completed, "day never completed");

    let progress = run_ok(home.path(), &["progress", "show", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&progress).unwrap();
    assert_eq!(parsed["completed_days"], 1);
    assert_eq!(parsed["current_day"], 2);

    // Session is cleared once complete.
    let (_, stderr, code) = run_cli(home.path(), &["play", "status"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("no active session"));
}

#[test]
fn test_tick_counts_down() {
    let home = tempfile::tempdir().unwrap();
    run_ok(home.path(), &["play", "start", "--day", "1"]);
    run_ok(home.path(), &["play", "go"]);
    run_ok(home.path(), &["play", "tick", "--seconds", "10"]);

    let status = run_ok(home.path(), &["play", "status"]);
    let parsed: serde_json::Value = serde_json::from_str(&status).unwrap();
    // Day 1 opens with a 60s exercise.
    assert_eq!(parsed["remaining_secs"], 50);
}

#[test]
fn test_pause_stops_ticks() {
    let home = tempfile::tempdir().unwrap();
    run_ok(home.path(), &["play", "start", "--day", "1"]);
    run_ok(home.path(), &["play", "go"]);
    run_ok(home.path(), &["play", "tick", "--seconds", "5"]);
    run_ok(home.path(), &["play", "pause"]);
    run_ok(home.path(), &["play", "tick", "--seconds", "5"]);

    let status = run_ok(home.path(), &["play", "status"]);
    let parsed: serde_json::Value = serde_json::from_str(&status).unwrap();
    assert_eq!(parsed["remaining_secs"], 55);
}

#[test]
fn test_locked_day_requires_subscription() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["play", "start", "--day", "4"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("locked"));

    run_ok(home.path(), &["store", "subscribe"]);
    let stdout = run_ok(home.path(), &["play", "start", "--day", "4"]);
    assert!(stdout.contains("session_started"));
}

#[test]
fn test_store_status_round_trip() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_ok(home.path(), &["store", "status"]);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["subscribed"], false);
    assert_eq!(parsed["state"], "trial");

    let stdout = run_ok(home.path(), &["store", "subscribe"]);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["subscribed"], true);
    assert_eq!(parsed["state"], "active");

    let stdout = run_ok(home.path(), &["store", "cancel"]);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["subscribed"], false);
}

#[test]
fn test_config_get_set() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_ok(home.path(), &["config", "get", "notifications.reminder_hour"]);
    assert_eq!(stdout.trim(), "9");

    run_ok(home.path(), &["config", "set", "notifications.reminder_hour", "7"]);
    let stdout = run_ok(home.path(), &["config", "get", "notifications.reminder_hour"]);
    assert_eq!(stdout.trim(), "7");

    let (_, stderr, code) = run_cli(home.path(), &["config", "get", "bogus.key"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown key"));
}

#[test]
fn test_progress_reset_needs_confirmation() {
    let home = tempfile::tempdir().unwrap();
    run_ok(home.path(), &["play", "start", "--day", "1"]);
    for _ in 0..8 {
        let stdout = run_ok(home.path(), &["play", "skip"]);
        if stdout.contains("day_completed") {
            break;
        }
    }

    let (_, _, code) = run_cli(home.path(), &["progress", "reset"]);
    assert_ne!(code, 0);

    run_ok(home.path(), &["progress", "reset", "--yes"]);
    let progress = run_ok(home.path(), &["progress", "show", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&progress).unwrap();
    assert_eq!(parsed["completed_days"], 0);
}
