//! CLI interface tests
//!
//! Runs the qdoc binary end to end: help output, each subcommand's happy
//! path, and the exit codes scripts rely on

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{fixtures, qdoc};

#[test]
fn test_cli_help_flag_displays_usage_information() {
    qdoc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Documentation site toolkit"))
        .stdout(predicate::str::contains("results"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn test_cli_without_subcommand_lists_every_command() {
    let assert = qdoc().assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    for command in [
        "results",
        "cost",
        "kubectl",
        "links",
        "theme",
        "validate",
        "completions",
    ] {
        assert!(
            stdout.contains(&format!("  {} ", command)),
            "usage is missing {}:\n{}",
            command,
            stdout
        );
    }
}

#[test]
fn test_cli_version_flag_displays_version_number() {
    qdoc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_results_inline_json_is_ranked_and_parseable() {
    let output = qdoc()
        .args(["results", "--json", "--inline", r#"{"00": 250, "01": 250, "11": 500}"#])
        .output()
        .expect("Command execution failed");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    let outcomes: serde_json::Value =
        serde_json::from_str(&stdout).expect("JSON output should be valid JSON");
    let outcomes = outcomes.as_array().expect("array of outcomes");

    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0]["label"], "11");
    assert_eq!(outcomes[0]["probability"], "50.00");
    // Equal counts keep input order
    assert_eq!(outcomes[1]["label"], "00");
    assert_eq!(outcomes[2]["label"], "01");
    assert_eq!(outcomes[2]["count"], 250);
}

#[test]
fn test_results_table_from_stdin() {
    qdoc()
        .arg("results")
        .write_stdin(r#"{"00": 512, "11": 512}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("00"))
        .stdout(predicate::str::contains("50.00"));
}

#[test]
fn test_results_from_file() {
    let temp = TempDir::new().unwrap();
    let counts = temp.path().join("counts.json");
    fs::write(&counts, r#"{"0": 3, "1": 1}"#).unwrap();

    qdoc()
        .arg("results")
        .arg(&counts)
        .assert()
        .success()
        .stdout(predicate::str::contains("75.00"))
        .stdout(predicate::str::contains("25.00"));
}

#[test]
fn test_results_empty_counts_print_nothing_ranked() {
    qdoc()
        .args(["results", "--json", "--inline", "{}"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn test_results_malformed_input_exits_with_data_error() {
    qdoc()
        .args(["results", "--inline", "{not json"])
        .assert()
        .code(65)
        .stderr(predicate::str::contains("malformed outcome counts"))
        .stderr(predicate::str::contains("help:"));
}

#[test]
fn test_results_missing_file_exits_with_no_input() {
    qdoc()
        .args(["results", "/no/such/counts.json"])
        .assert()
        .code(66)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_cost_hardware_and_simulator() {
    let temp = TempDir::new().unwrap();

    qdoc()
        .current_dir(temp.path())
        .args(["cost", "--shots", "1000", "--qubits", "5", "--backend", "ibm_hardware"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.13"));

    qdoc()
        .current_dir(temp.path())
        .args(["cost", "--shots", "1000", "--qubits", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.00"));
}

#[test]
fn test_cost_json_output() {
    let temp = TempDir::new().unwrap();
    let output = qdoc()
        .current_dir(temp.path())
        .args(["cost", "-s", "100000", "-q", "1", "-b", "ionq", "--json"])
        .output()
        .expect("Command execution failed");
    assert!(output.status.success());

    let estimate: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("JSON output should be valid JSON");
    assert_eq!(estimate["cost"], "2.67");
    assert_eq!(estimate["backend"], "ionq");
}

#[test]
fn test_cost_uses_rate_from_config() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".qdoc.toml"),
        "[cost]\nhardware-rate-per-minute = 3.2\n",
    )
    .unwrap();

    qdoc()
        .current_dir(temp.path())
        .args(["cost", "--shots", "1000", "--qubits", "5", "--backend", "ibm_hardware"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.27"));
}

#[test]
fn test_cost_negative_shots_is_usage_error() {
    let temp = TempDir::new().unwrap();
    qdoc()
        .current_dir(temp.path())
        .args(["cost", "--shots", "-10", "--qubits", "5", "--backend", "ibm"])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("shots"));
}

#[test]
fn test_kubectl_with_and_without_namespace() {
    qdoc()
        .args(["kubectl", "get", "qiskitjob", "bell-state", "-n", "quantum"])
        .assert()
        .success()
        .stdout("kubectl get qiskitjob bell-state -n quantum\n");

    qdoc()
        .args(["kubectl", "delete", "qiskitjob", "bell-state"])
        .assert()
        .success()
        .stdout("kubectl delete qiskitjob bell-state\n");
}

#[test]
fn test_theme_set_then_get() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().to_str().unwrap();

    qdoc()
        .args(["theme", "--dir", dir, "set", "slate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("slate"));

    qdoc()
        .args(["theme", "--dir", dir, "get"])
        .assert()
        .success()
        .stdout("slate\n");

    let prefs = fs::read_to_string(temp.path().join(".qdoc-prefs.json")).unwrap();
    let prefs: serde_json::Value = serde_json::from_str(&prefs).unwrap();
    assert_eq!(prefs["preferredTheme"], "slate");
}

#[test]
fn test_theme_get_without_preference() {
    let temp = TempDir::new().unwrap();
    qdoc()
        .args(["theme", "--dir", temp.path().to_str().unwrap(), "get"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No preferred theme"));
}

#[test]
fn test_links_rewrites_external_links_only() {
    let site = fixtures::create_built_site("docs.example.org").unwrap();

    qdoc()
        .arg("links")
        .arg(site.path())
        .args(["--site-host", "docs.example.org"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 link(s) in 2 of 2 file(s) updated"));

    let index = fs::read_to_string(site.path().join("index.html")).unwrap();
    assert!(index.contains(
        r#"<a href="https://github.com/qiskit-community/qiskit-operator" target="_blank" rel="noopener noreferrer">"#
    ));
    assert!(index.contains(r#"<a href="https://docs.example.org/guide/">"#));
    assert!(index.contains(r##"<a href="#install">"##));

    // Second run finds nothing left to do
    qdoc()
        .arg("links")
        .arg(site.path())
        .args(["--site-host", "docs.example.org"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 link(s)"));
}

#[test]
fn test_links_dry_run_leaves_files_untouched() {
    let site = fixtures::create_built_site("docs.example.org").unwrap();
    let before = fs::read_to_string(site.path().join("index.html")).unwrap();

    qdoc()
        .arg("links")
        .arg(site.path())
        .args(["--site-host", "docs.example.org", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("would be updated"));

    let after = fs::read_to_string(site.path().join("index.html")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_links_site_host_from_config() {
    let site = fixtures::create_built_site("docs.example.org").unwrap();
    fs::write(
        site.path().join(".qdoc.toml"),
        "site-host = \"docs.example.org\"\n",
    )
    .unwrap();

    qdoc()
        .current_dir(site.path())
        .args(["links", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 link(s)"));
}

#[test]
fn test_links_without_site_host_is_usage_error() {
    let site = fixtures::create_built_site("docs.example.org").unwrap();
    qdoc()
        .current_dir(site.path())
        .args(["links", "."])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("site-host"));
}

#[test]
fn test_validate_clean_docs_passes() {
    let docs = fixtures::create_docs_tree().unwrap();
    qdoc()
        .arg("validate")
        .arg(docs.path())
        .arg("--strict")
        .assert()
        .success()
        .stdout(predicate::str::contains("All documentation files are valid"));
}

#[test]
fn test_validate_broken_docs_fails() {
    let docs = fixtures::create_broken_docs_tree().unwrap();
    qdoc()
        .arg("validate")
        .arg(docs.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Broken link"))
        .stderr(predicate::str::contains("1 error(s), 1 warning(s)"));
}

#[test]
fn test_validate_warnings_fail_only_in_strict_mode() {
    let docs = fixtures::create_warning_only_docs_tree().unwrap();

    qdoc().arg("validate").arg(docs.path()).assert().success();

    qdoc()
        .arg("validate")
        .arg(docs.path())
        .arg("--strict")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--strict"));
}

#[test]
fn test_validate_json_output_lists_issues() {
    let docs = fixtures::create_broken_docs_tree().unwrap();
    let output = qdoc()
        .args(["validate", "--json"])
        .arg(docs.path())
        .output()
        .expect("Command execution failed");
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("JSON output should be valid JSON");
    assert_eq!(report["files_checked"], 3);
    let checks: Vec<&str> = report["issues"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["check"].as_str().unwrap())
        .collect();
    assert!(checks.contains(&"link"));
    assert!(checks.contains(&"heading"));
}

#[test]
fn test_validate_uses_docs_dir_from_config() {
    let docs = fixtures::create_docs_tree().unwrap();
    let project = TempDir::new().unwrap();
    fs::write(
        project.path().join(".qdoc.toml"),
        format!("docs-dir = {:?}\n", docs.path().to_str().unwrap()),
    )
    .unwrap();

    qdoc()
        .current_dir(project.path())
        .arg("validate")
        .assert()
        .success();
}

#[test]
fn test_validate_missing_docs_dir() {
    let temp = TempDir::new().unwrap();
    qdoc()
        .current_dir(temp.path())
        .arg("validate")
        .assert()
        .code(66)
        .stderr(predicate::str::contains("docs directory not found"));
}

#[test]
fn test_completions_generate_script() {
    qdoc()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("qdoc"));
}
