//! Integration tests for the clipoffset CLI

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::fixture_path;

/// Command with an isolated, empty config location.
fn clipoffset(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("clipoffset").expect("binary should build");
    cmd.env("NO_COLOR", "1")
        .env("XDG_CONFIG_HOME", dir.path())
        .env_remove("CLIPOFFSET_LOG")
        .env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    clipoffset(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("simulate"))
        .stdout(predicate::str::contains("map"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn no_subcommand_is_usage_error() {
    let dir = TempDir::new().unwrap();
    clipoffset(&dir).assert().code(2);
}

// ============================================================================
// simulate
// ============================================================================

#[test]
fn simulate_bounded_clip_pauses_at_end() {
    let dir = TempDir::new().unwrap();
    clipoffset(&dir)
        .args(["simulate", "--start", "5", "--end", "6", "--duration", "60"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "   5  00:01.000  00:06.000  paused  events=ended,pause actions=pause-at-end",
        ));
}

#[test]
fn simulate_restart_emits_loadstart() {
    let dir = TempDir::new().unwrap();
    clipoffset(&dir)
        .args(["simulate", "--start", "5", "--end", "6", "--restart", "--ticks", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("events=ended,loadstart actions=restart"))
        .stdout(predicate::str::contains("paused").not());
}

#[test]
fn simulate_json_output() {
    let dir = TempDir::new().unwrap();
    let output = clipoffset(&dir)
        .args(["simulate", "--start", "5", "--end", "6", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line is JSON"))
        .collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[4]["paused"], true);
    assert_eq!(lines[4]["events"][0], "ended");
}

#[test]
fn simulate_uses_config_file() {
    let dir = TempDir::new().unwrap();
    clipoffset(&dir)
        .args(["simulate", "--config"])
        .arg(fixture_path("faulty_player.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("reload"))
        .stdout(predicate::str::contains("player reloaded 1 time(s)"));
}

#[test]
fn simulate_fault_without_reload_fails() {
    let dir = TempDir::new().unwrap();
    clipoffset(&dir)
        .args(["simulate", "--start", "5", "--end", "10", "--fault-at", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Player handle is unavailable"));
}

#[test]
fn simulate_rejects_non_positive_tick() {
    let dir = TempDir::new().unwrap();
    clipoffset(&dir)
        .args(["simulate", "--tick", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid simulation.tick"));
}

#[test]
fn simulate_rejects_nan_tick_from_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nan_tick.toml");
    std::fs::write(&path, "[simulation]\ntick = nan\n").unwrap();

    clipoffset(&dir)
        .arg("--config")
        .arg(&path)
        .arg("simulate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid simulation.tick"));
}

// ============================================================================
// map
// ============================================================================

#[test]
fn map_converts_outer_times() {
    let dir = TempDir::new().unwrap();
    clipoffset(&dir)
        .args(["map", "--start", "10", "--end", "40", "--", "0", "12.5", "-5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clip duration: 00:30.000"))
        .stdout(predicate::str::contains("clip end:      00:40.000"))
        .stdout(predicate::str::contains("00:12.500 -> 00:22.500"))
        .stdout(predicate::str::contains("-00:05.000 -> 00:05.000"));
}

#[test]
fn map_treats_garbage_offsets_as_zero() {
    let dir = TempDir::new().unwrap();
    clipoffset(&dir)
        .args(["map", "--start", "soon", "--duration", "90", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clip start:    00:00.000"))
        .stdout(predicate::str::contains("clip duration: 01:30.000"))
        .stdout(predicate::str::contains("00:03.000 -> 00:03.000"));
}

// ============================================================================
// config
// ============================================================================

#[test]
fn config_show_prints_defaults() {
    let dir = TempDir::new().unwrap();
    clipoffset(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[offset]"))
        .stdout(predicate::str::contains("[simulation]"))
        .stdout(predicate::str::contains("on_fault = \"abort\""));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    clipoffset(&dir)
        .args(["config", "init", "--config"])
        .arg(&path)
        .assert()
        .success();
    assert!(path.exists());

    clipoffset(&dir)
        .args(["config", "init", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    clipoffset(&dir)
        .args(["config", "init", "--force", "--config"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();
    clipoffset(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clipoffset"));
}
