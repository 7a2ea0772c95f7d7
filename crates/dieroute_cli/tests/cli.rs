//! End-to-end tests for the `dieroute` binary on temporary project directories.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn dieroute(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dieroute"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn dieroute")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

/// Writes a project with the given input file contents.
fn project(position: &str, network: &str, net: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("dieroute.toml"),
        r#"
[project]
name = "e2e"

[inputs]
position = "e2e.die.position"
network = "e2e.die.network"
net = "e2e.net"
"#,
    )
    .unwrap();
    fs::write(tmp.path().join("e2e.die.position"), position).unwrap();
    fs::write(tmp.path().join("e2e.die.network"), network).unwrap();
    fs::write(tmp.path().join("e2e.net"), net).unwrap();
    tmp
}

/// Three dies in a line; routes to die 2 need a repeater on die 1.
fn line_project() -> TempDir {
    project(
        "Die0: g1 g2\nDie1: g10\nDie2: g20\n",
        "0 4 0\n0 0 4\n0 0 0\n",
        "g1 s\ng2 s\ng10 l\ng20 l\n",
    )
}

// ===========================================================================
// init
// ===========================================================================

#[test]
fn init_then_run() {
    let tmp = TempDir::new().unwrap();
    let out = dieroute(tmp.path(), &["init", "fresh"]);
    assert!(out.status.success(), "{}", stderr(&out));

    let project_dir = tmp.path().join("fresh");
    let out = dieroute(&project_dir, &["run"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert!(project_dir.join("path_allocation_results.txt").exists());
    assert!(stderr(&out).contains("successful allocation:"));
}

// ===========================================================================
// check
// ===========================================================================

#[test]
fn check_summarizes_design() {
    let tmp = line_project();
    let out = dieroute(tmp.path(), &["check"]);
    assert!(out.status.success(), "{}", stderr(&out));
    let text = stdout(&out);
    assert!(text.contains("D0 Die0: 2 source(s), 0 relay(s)"));
    assert!(text.contains("capacity matrix: 3x3, 2 link(s)"));
    assert!(text.contains("cross-die pairs: 4"));
}

#[test]
fn check_reports_mismatch() {
    let tmp = project("Die0: g1\nDie1: g2\n", "0 1 1\n1 0 1\n1 1 0\n", "g1 s\ng2 l\n");
    let out = dieroute(tmp.path(), &["check"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("error[E202]"));
}

#[test]
fn check_renders_input_warnings() {
    let tmp = project("junk\nDie0: g1\nDie1: g2\n", "0 1\n1 0\n", "g1 s\ng2 l\ng3 q\n");
    let out = dieroute(tmp.path(), &["check"]);
    assert!(out.status.success());
    let err = stderr(&out);
    assert!(err.contains("warning[W101]"));
    assert!(err.contains("warning[W103]"));
}

#[test]
fn missing_config_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let out = dieroute(tmp.path(), &["check"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("error: could not find dieroute.toml"));
}

// ===========================================================================
// paths
// ===========================================================================

#[test]
fn paths_lists_candidates() {
    let tmp = line_project();
    let out = dieroute(tmp.path(), &["paths", "0", "2"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert!(stdout(&out).contains("1. D0 -> D1 -> D2"));
}

#[test]
fn paths_marks_dead_ends() {
    let tmp = line_project();
    let out = dieroute(tmp.path(), &["paths", "0", "2", "--hop-limit", "2"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert!(stdout(&out).contains("D0 -> D1  (dead end)"));
}

#[test]
fn paths_rejects_unknown_die() {
    let tmp = line_project();
    let out = dieroute(tmp.path(), &["paths", "0", "7"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("die D7 does not exist"));
}

// ===========================================================================
// run
// ===========================================================================

#[test]
fn run_writes_text_report() {
    let tmp = line_project();
    let out = dieroute(tmp.path(), &["run"]);
    assert!(out.status.success(), "{}", stderr(&out));

    let report = fs::read_to_string(tmp.path().join("path_allocation_results.txt")).unwrap();
    assert!(report.contains("Total routes: 4"));
    assert!(report.contains("s1 -> l20: D0 -> D1(l10) -> D2"));
    assert!(report.contains("D0 -> D1: 4"));
    assert!(stderr(&out).contains("successful allocation: 4/4 (100.00%)"));
}

#[test]
fn run_writes_json_report_with_overrides() {
    let tmp = line_project();
    let out = dieroute(
        tmp.path(),
        &[
            "run",
            "--format",
            "json",
            "--output",
            "result.json",
            "--relay-reuse",
            "exclusive",
        ],
    );
    assert!(out.status.success(), "{}", stderr(&out));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(tmp.path().join("result.json")).unwrap()).unwrap();
    assert_eq!(json["options"]["relay_reuse"], "exclusive");
    // g10 serves as repeater for the first route to die 2 only.
    assert_eq!(json["statistics"]["routed"], 3);
    assert_eq!(json["statistics"]["unroutable"], 1);
}

#[test]
fn run_quiet_prints_nothing_on_success() {
    let tmp = line_project();
    let out = dieroute(tmp.path(), &["--quiet", "run"]);
    assert!(out.status.success());
    assert!(stderr(&out).is_empty(), "{}", stderr(&out));
    assert!(stdout(&out).is_empty());
}

#[test]
fn run_rejects_invalid_hop_limit() {
    let tmp = line_project();
    let out = dieroute(tmp.path(), &["run", "--hop-limit", "1"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("hop_limit must be at least 2"));
}

#[test]
fn run_with_explicit_config_file() {
    let tmp = line_project();
    let elsewhere = TempDir::new().unwrap();
    let config = tmp.path().join("dieroute.toml");
    let out = dieroute(
        elsewhere.path(),
        &["--config", config.to_str().unwrap(), "run"],
    );
    assert!(out.status.success(), "{}", stderr(&out));
    assert!(tmp.path().join("path_allocation_results.txt").exists());
}
