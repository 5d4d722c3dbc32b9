//! Integration tests for the `unifw` CLI binary.
//!
//! Argument parsing, conversions, drift checks, config display, and error
//! exit codes. Nothing here talks to a controller.
#![allow(clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a command for the `unifw` binary with env isolation.
fn unifw_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("unifw");
    cmd.env("HOME", "/tmp/unifw-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/unifw-cli-test-nonexistent")
        .env("NO_COLOR", "1")
        .env_remove("UNIFW_PROFILE")
        .env_remove("UNIFW_SITE")
        .env_remove("UNIFW_OUTPUT")
        .env_remove("UNIFW_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn stdout_json(cmd: &mut assert_cmd::Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));
    serde_json::from_slice(&output.stdout).unwrap()
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

const LOCAL_FILTER_YAML: &str = "\
type: CUSTOM
port_filter:
  type: PORTS
  match_opposite: false
  items:
    - type: PORT_NUMBER
      value: 53
    - type: PORT_NUMBER
      value: 443
ip_address_filter:
  type: IP_ADDRESSES
  match_opposite: false
  items: [10.0.0.0/24, 1.2.3.4]
";

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = unifw_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    assert!(combined_output(&output).contains("Usage"));
}

#[test]
fn test_help_lists_commands() {
    unifw_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("filter")
            .and(predicate::str::contains("protocol"))
            .and(predicate::str::contains("dns")),
    );
}

#[test]
fn test_completions_bash() {
    unifw_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_invalid_output_format() {
    let output = unifw_cmd()
        .args(["-o", "table", "protocol", "render", "tcp"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

// ── Protocol ────────────────────────────────────────────────────────

#[test]
fn test_protocol_render_named() {
    let json = stdout_json(unifw_cmd().args(["protocol", "render", "--type", "PROTOCOL", "tcp"]));
    assert_eq!(json, serde_json::json!({"name": "TCP"}));
}

#[test]
fn test_protocol_render_empty_is_null() {
    unifw_cmd()
        .args(["protocol", "render", "--type", "PRESET", ""])
        .assert()
        .success()
        .stdout("null\n");
}

#[test]
fn test_protocol_read_numeric() {
    let json = stdout_json(unifw_cmd().args(["protocol", "read", r#"{"number": 80.0}"#]));
    assert_eq!(
        json,
        serde_json::json!({"protocol": "80", "protocol_filter_type": "PROTOCOL_NUMBER"})
    );
}

#[test]
fn test_protocol_read_rejects_bad_json() {
    let output = unifw_cmd()
        .args(["protocol", "read", "{not json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(combined_output(&output).contains("Invalid JSON"));
}

// ── Filter ──────────────────────────────────────────────────────────

#[test]
fn test_filter_render_from_yaml() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "filter.yaml", LOCAL_FILTER_YAML);

    let json = stdout_json(unifw_cmd().args(["filter", "render", arg(&file)]));
    assert_eq!(json["type"], "CUSTOM");
    assert_eq!(json["portFilter"]["items"][1]["value"], 443);
    assert_eq!(json["ipAddressFilter"]["items"][0]["type"], "IP_ADDRESS");
    assert_eq!(json["ipAddressFilter"]["items"][1]["type"], "SUBNET");
    assert!(json.get("macAddressFilter").is_none());
}

#[test]
fn test_filter_read_sorts_ports() {
    let dir = TempDir::new().unwrap();
    let file = write(
        &dir,
        "wire.json",
        r#"{
            "type": "CUSTOM",
            "portFilter": {"type": "PORTS", "matchOpposite": false, "items": [
                {"type": "PORT_NUMBER", "value": 443},
                {"type": "PORT_NUMBER", "value": 22}
            ]},
            "macAddressFilter": "aa:bb:cc:dd:ee:ff"
        }"#,
    );

    let json = stdout_json(unifw_cmd().args(["filter", "read", arg(&file)]));
    assert_eq!(json["port_filter"]["items"][0]["value"], 22);
    assert_eq!(json["mac_address"], "aa:bb:cc:dd:ee:ff");
}

#[test]
fn test_filter_check_no_drift() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "filter.yaml", LOCAL_FILTER_YAML);

    unifw_cmd()
        .args(["filter", "check", arg(&file)])
        .assert()
        .success()
        .stderr(predicate::str::contains("no drift"));
}

#[test]
fn test_filter_check_accepts_unordered_ports() {
    let dir = TempDir::new().unwrap();
    let file = write(
        &dir,
        "filter.json",
        r#"{
            "type": "CUSTOM",
            "port_filter": {"type": "PORTS", "match_opposite": false, "items": [
                {"type": "PORT_NUMBER", "value": 443},
                {"type": "PORT_NUMBER", "value": 22}
            ]}
        }"#,
    );

    unifw_cmd()
        .args(["filter", "check", arg(&file)])
        .assert()
        .success()
        .stderr(predicate::str::contains("no drift"));

    let json = stdout_json(unifw_cmd().args(["filter", "render", arg(&file)]));
    assert_eq!(json["portFilter"]["items"][0]["value"], 22);
    assert_eq!(json["portFilter"]["items"][1]["value"], 443);
}

#[test]
fn test_filter_missing_file() {
    let output = unifw_cmd()
        .args(["filter", "render", "/tmp/unifw-cli-test-nonexistent/nope.json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(combined_output(&output).contains("Could not read"));
}

// ── Policies ────────────────────────────────────────────────────────

#[test]
fn test_policy_render() {
    let dir = TempDir::new().unwrap();
    let file = write(
        &dir,
        "policy.yaml",
        "name: allow-dns\naction: ALLOW\nprotocol_filter_type: PRESET\nprotocol: dns\n",
    );

    let json = stdout_json(unifw_cmd().args(["policy", "render", arg(&file)]));
    assert_eq!(json["protocol"], serde_json::json!({"preset": "DNS"}));
    assert_eq!(json["enabled"], true);
}

#[test]
fn test_dns_render_routes_priority() {
    let dir = TempDir::new().unwrap();
    let file = write(
        &dir,
        "mx.yaml",
        "type: MX_RECORD\ndomain: lan\ntarget: mail.lan\npriority: 10\n",
    );

    let json = stdout_json(unifw_cmd().args(["dns", "render", arg(&file)]));
    assert_eq!(
        json,
        serde_json::json!({
            "type": "MX_RECORD",
            "domain": "lan",
            "enabled": true,
            "target": "mail.lan",
            "mxPriority": 10
        })
    );
}

#[test]
fn test_dns_read_into_yaml() {
    let dir = TempDir::new().unwrap();
    let file = write(
        &dir,
        "wire.json",
        r#"{"id": "66f1", "type": "A_RECORD", "domain": "nas.lan", "enabled": true, "ipv4Address": "10.0.0.5"}"#,
    );

    unifw_cmd()
        .args(["-o", "yaml", "dns", "read", arg(&file)])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("id: 66f1").and(predicate::str::contains("ip_address: 10.0.0.5")),
        );
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_show_redacts_key() {
    let dir = TempDir::new().unwrap();
    let config = write(
        &dir,
        "config.toml",
        "default_profile = \"home\"\n\n[profiles.home]\ncontroller = \"https://192.168.1.1\"\napi_key = \"super-secret\"\n",
    );

    let output = unifw_cmd()
        .args(["--config", arg(&config), "--site", "branch", "config", "show"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["profile"], "home");
    assert_eq!(json["site"], "branch");
    assert_eq!(json["api_key"], "<redacted>");
    assert!(!combined_output(&output).contains("super-secret"));
}

#[test]
fn test_config_show_unknown_profile() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "config.toml", "");

    let output = unifw_cmd()
        .args(["--config", arg(&config), "-p", "nope", "config", "show"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert!(combined_output(&output).contains("Profile 'nope' not found"));
}
