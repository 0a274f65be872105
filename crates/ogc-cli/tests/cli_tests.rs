// SPDX-License-Identifier: MIT OR Apache-2.0
//! Integration tests for the `ogc-exception` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn ogc() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("ogc-exception").expect("binary `ogc-exception` should be built");
    cmd.env_remove("OGC_REPORT_FORMAT")
        .env_remove("OGC_REPORT_INDENT")
        .env_remove("OGC_LOG_LEVEL");
    cmd
}

// ── Help & version ──────────────────────────────────────────────────

#[test]
fn help_flag_prints_usage() {
    ogc()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("service exception reports"))
        .stdout(contains("codes"))
        .stdout(contains("render"));
}

#[test]
fn version_flag_prints_version() {
    ogc()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

// ── codes ───────────────────────────────────────────────────────────

#[test]
fn codes_lists_every_code() {
    let mut assert = ogc().arg("codes").assert().success();
    for code in [
        "InvalidFormat",
        "InvalidCRS",
        "LayerNotDefined",
        "StyleNotDefined",
        "LayerNotQueryable",
        "InvalidPoint",
        "CurrentUpdateSequence",
        "InvalidUpdateSequence",
        "MissingDimensionValue",
        "InvalidDimensionValue",
        "OperationNotSupported",
    ] {
        assert = assert.stdout(contains(code));
    }
}

#[test]
fn codes_json_is_parseable() {
    let output = ogc().args(["codes", "--json"]).output().unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let codes = v.as_array().unwrap();
    assert_eq!(codes.len(), 11);
    assert_eq!(codes[1]["code"], "InvalidCRS");
    assert_eq!(codes[1]["arities"], serde_json::json!([0, 1, 2]));
}

// ── render ──────────────────────────────────────────────────────────

#[test]
fn render_xml_to_stdout() {
    ogc()
        .args([
            "render",
            "-e",
            "InvalidCRS=EPSG:9999,roads",
            "-e",
            "LayerNotQueryable=roads",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"))
        .stdout(contains(r#"version="1.3.0""#))
        .stdout(contains("The CRS: EPSG:9999 is not known by the layer: roads"))
        .stdout(contains(r#"locator="roads""#));
}

#[test]
fn render_without_exceptions_gives_empty_report() {
    ogc()
        .arg("render")
        .assert()
        .success()
        .stdout(contains("<ServiceExceptionReport"))
        .stdout(contains("<ServiceException ").not());
}

#[test]
fn render_yaml_roundtrips() {
    let output = ogc()
        .args([
            "render",
            "--format",
            "yaml",
            "-e",
            "InvalidPoint=x,7",
            "-e",
            "CurrentUpdateSequence",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let v: serde_yaml::Value = serde_yaml::from_slice(&output.stdout).unwrap();
    assert_eq!(v["version"].as_str(), Some("1.3.0"));
    assert_eq!(v["exceptions"][0]["code"].as_str(), Some("InvalidPoint"));
    assert_eq!(
        v["exceptions"][0]["text"].as_str(),
        Some("The parameters I and J are invalid, given: x for I and 7 for J")
    );
    assert_eq!(
        v["exceptions"][1]["code"].as_str(),
        Some("CurrentUpdateSequence")
    );
}

#[test]
fn render_json_format() {
    let output = ogc()
        .args(["render", "--format", "json", "-e", "LayerNotDefined=roads"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["exceptions"][0]["text"], "The layer: roads is not known by the server");
}

#[test]
fn unsupported_arity_renders_fallback_and_warns() {
    ogc()
        .args(["render", "-e", "InvalidCRS=a,b,c"])
        .assert()
        .success()
        .stdout(contains(r#"code="InvalidCRS""#))
        .stdout(contains("is not known").not())
        .stderr(contains("InvalidCRS=a,b,c"))
        .stderr(contains("fallback"));
}

#[test]
fn unknown_code_is_rejected() {
    ogc()
        .args(["render", "-e", "NoSuchCode"])
        .assert()
        .failure()
        .stderr(contains("NoSuchCode"));
}

#[test]
fn unknown_format_is_rejected() {
    ogc()
        .args(["render", "--format", "html"])
        .assert()
        .failure()
        .stderr(contains("html"));
}

#[test]
fn indent_out_of_range_is_rejected() {
    ogc()
        .args(["render", "--indent", "99"])
        .assert()
        .failure()
        .stderr(contains("out of range"));
}

#[test]
fn render_writes_out_file() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("report.xml");
    ogc()
        .args(["render", "-e", "MissingDimensionValue", "--out"])
        .arg(&out)
        .assert()
        .success();
    let body = std::fs::read_to_string(&out).unwrap();
    assert!(body.contains(r#"code="MissingDimensionValue""#));
}

// ── config ──────────────────────────────────────────────────────────

#[test]
fn config_file_selects_format() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = tmp.path().join("ogc.toml");
    std::fs::write(&cfg, "format = \"json\"\n").unwrap();
    let output = ogc()
        .arg("--config")
        .arg(&cfg)
        .args(["render", "-e", "InvalidUpdateSequence"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["exceptions"][0]["code"], "InvalidUpdateSequence");
}

#[test]
fn env_override_selects_format() {
    let output = ogc()
        .env("OGC_REPORT_FORMAT", "json")
        .args(["render", "-e", "InvalidDimensionValue"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["service"], "WMS");
}

#[test]
fn missing_config_file_fails() {
    ogc()
        .args(["--config", "/nonexistent/ogc.toml", "codes"])
        .assert()
        .failure()
        .stderr(contains("config"));
}

#[test]
fn invalid_config_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = tmp.path().join("ogc.toml");
    std::fs::write(&cfg, "log_level = \"loud\"\n").unwrap();
    ogc()
        .arg("--config")
        .arg(&cfg)
        .arg("codes")
        .assert()
        .failure()
        .stderr(contains("invalid config"));
}
