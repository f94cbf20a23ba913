//! Integration tests for the `frota` CLI binary.
//!
//! These tests validate argument parsing, help output, shell completions,
//! and error handling — all without requiring a live backend.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `frota` binary with env isolation.
///
/// Clears all `FROTA_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn frota_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("frota");
    cmd.env("HOME", "/tmp/frota-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/frota-cli-test-nonexistent")
        .env_remove("FROTA_PROFILE")
        .env_remove("FROTA_SERVER")
        .env_remove("FROTA_OUTPUT")
        .env_remove("FROTA_INSECURE")
        .env_remove("FROTA_TIMEOUT")
        .env_remove("FROTA_EMAIL")
        .env_remove("FROTA_PASSWORD");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = frota_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    frota_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("fleet")
            .and(predicate::str::contains("vehicles"))
            .and(predicate::str::contains("drivers"))
            .and(predicate::str::contains("maintenance"))
            .and(predicate::str::contains("notifications")),
    );
}

#[test]
fn test_version_flag() {
    frota_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("frota"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    frota_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    frota_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_completions_fish() {
    frota_cmd()
        .args(["completions", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = frota_cmd().arg("foobar").output().unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid subcommand"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_vehicles_list_no_server() {
    frota_cmd()
        .args(["vehicles", "list"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("server")
                .or(predicate::str::contains("config"))
                .or(predicate::str::contains("profile")),
        );
}

#[test]
fn test_unknown_profile_is_rejected() {
    frota_cmd()
        .args(["--profile", "nonexistent", "vehicles", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nonexistent"));
}

#[test]
fn test_config_show_no_config() {
    // `config show` uses load_config_or_default() so it succeeds even
    // when no config file exists — it just renders the default config.
    frota_cmd().args(["config", "show"]).assert().success();
}

#[test]
fn test_invalid_output_format() {
    let output = frota_cmd()
        .args(["--output", "invalid", "vehicles", "list"])
        .output()
        .unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid output format"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid")
            || text.contains("possible values")
            || text.contains("valid value"),
        "Expected error about valid output formats:\n{text}"
    );
}

#[test]
fn test_global_flags_parsing() {
    // All flags should parse correctly — the failure should be about
    // missing server config, not about argument parsing.
    frota_cmd()
        .args([
            "--output",
            "json",
            "--verbose",
            "--insecure",
            "--timeout",
            "60",
            "vehicles",
            "list",
        ])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("server")
                .or(predicate::str::contains("config"))
                .or(predicate::str::contains("profile")),
        );
}

#[test]
fn test_invalid_server_url_is_a_usage_error() {
    let output = frota_cmd()
        .args(["--server", "not a url", "vehicles", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected usage exit code");
    let text = combined_output(&output);
    assert!(text.contains("invalid URL"), "output:\n{text}");
}

// ── Subcommand help discovery ───────────────────────────────────────

#[test]
fn test_vehicles_subcommands_exist() {
    frota_cmd()
        .args(["vehicles", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("get"))
                .and(predicate::str::contains("create"))
                .and(predicate::str::contains("assign"))
                .and(predicate::str::contains("unassign")),
        );
}

#[test]
fn test_maintenance_subcommands_exist() {
    frota_cmd()
        .args(["maintenance", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("start"))
                .and(predicate::str::contains("complete"))
                .and(predicate::str::contains("cancel")),
        );
}

#[test]
fn test_notifications_subcommands_exist() {
    frota_cmd()
        .args(["notifications", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("unread")
                .and(predicate::str::contains("read-all"))
                .and(predicate::str::contains("watch"))
                .and(predicate::str::contains("stats")),
        );
}

#[test]
fn test_dashboard_subcommands_exist() {
    frota_cmd()
        .args(["dashboard", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("metrics")
                .and(predicate::str::contains("alerts"))
                .and(predicate::str::contains("top-drivers")),
        );
}

#[test]
fn test_config_subcommands_exist() {
    frota_cmd()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("init")
                .and(predicate::str::contains("show"))
                .and(predicate::str::contains("profiles"))
                .and(predicate::str::contains("set-password"))
                .and(predicate::str::contains("export")),
        );
}

#[test]
fn test_config_export_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    frota_cmd()
        .args(["config", "export", "--out"])
        .arg(&path)
        .assert()
        .success();
    let body = std::fs::read_to_string(&path).unwrap();
    assert!(body.contains("defaults"), "exported config:\n{body}");
}

// ── Condition-query flags ───────────────────────────────────────────

#[test]
fn test_condition_filter_flags_parse() {
    // Each flag must get past argument parsing; the failure should be
    // about missing server config, not about the flag itself.
    let cases: &[&[&str]] = &[
        &["vehicles", "list", "--needs-maintenance"],
        &["vehicles", "list", "--low-fuel"],
        &["drivers", "list", "--expiring-license"],
        &["maintenance", "list", "--from", "2026-09-01", "--to", "2026-09-30"],
        &["notifications", "unread", "--high"],
        &["notifications", "unread", "--page", "0", "--size", "5"],
    ];
    for args in cases {
        frota_cmd().args(*args).assert().failure().stderr(
            predicate::str::contains("server")
                .or(predicate::str::contains("config"))
                .or(predicate::str::contains("profile")),
        );
    }
}

#[test]
fn test_conflicting_vehicle_filters_are_a_usage_error() {
    let output = frota_cmd()
        .args(["vehicles", "list", "--available", "--low-fuel"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected usage exit code");
    let text = combined_output(&output);
    assert!(
        text.contains("cannot be used with"),
        "Expected conflict error:\n{text}"
    );
}

#[test]
fn test_maintenance_date_window_requires_both_ends() {
    let output = frota_cmd()
        .args(["maintenance", "list", "--from", "2026-09-01"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected usage exit code");
    let text = combined_output(&output);
    assert!(text.contains("--to"), "Expected missing --to error:\n{text}");
}

#[test]
fn test_delete_requires_confirmation_when_piped() {
    // Piped stdin + no --yes must fail fast instead of hanging. This
    // needs a server flag so config resolution succeeds first.
    frota_cmd()
        .args(["--server", "http://127.0.0.1:9", "vehicles", "delete", "1"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("confirmation").or(predicate::str::contains("--yes")));
}
