use std::fs;

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

#[test]
fn run_writes_json_report() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("kira-dxcalc").unwrap();
    cmd.args(["run", "--json", "--out"]).arg(tmp.path());
    cmd.assert().success();

    let content = fs::read_to_string(tmp.path().join("dxcalc.json")).unwrap();
    let json: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["tool"], "kira-dxcalc");
    assert_eq!(json["schema_version"], "v1");
    assert_eq!(json["variant"], "log_prevalence");
    assert_eq!(json["x_values"].as_array().unwrap().len(), 100);
    let labels: Vec<&str> = json["series"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["Positive Test Result", "Negative Test Result"]);
}

#[test]
fn run_lr_axis_requires_likelihood_variant() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("kira-dxcalc").unwrap();
    cmd.args(["run", "--axis", "lr-pos", "--out"]).arg(tmp.path());
    cmd.assert().failure();
}

#[test]
fn run_outcome_requires_selector_variant() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("kira-dxcalc").unwrap();
    cmd.args(["run", "--outcome", "negative", "--out"]).arg(tmp.path());
    cmd.assert().failure();
}

#[test]
fn run_predictive_outcome_selection() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("kira-dxcalc").unwrap();
    cmd.args([
        "run",
        "--variant",
        "predictive",
        "--outcome",
        "positive",
        "--json",
        "--out",
    ])
    .arg(tmp.path());
    cmd.assert().success();

    let content = fs::read_to_string(tmp.path().join("dxcalc.json")).unwrap();
    let json: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["outcome"], "positive");
    let labels: Vec<&str> = json["series"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["Positive Test Result", "PPV", "NPV"]);
}

#[test]
fn run_dynamic_lr_axis_full_series() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("kira-dxcalc").unwrap();
    cmd.args([
        "run",
        "--variant",
        "likelihood-dynamic",
        "--axis",
        "lr-pos",
        "--json",
        "--out",
    ])
    .arg(tmp.path());
    cmd.assert().success();

    let content = fs::read_to_string(tmp.path().join("dxcalc.json")).unwrap();
    let json: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["axis"]["log_scale"], true);
    for series in json["series"].as_array().unwrap() {
        assert_eq!(series["points"].as_array().unwrap().len(), 100);
    }
    assert!(json["warnings"].as_array().unwrap().is_empty());
}
