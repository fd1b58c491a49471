use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(deprecated)]
fn get_perfreport_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("perfreport")
}

fn fixture_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests")
        .join("fixtures")
        .join(filename)
}

fn install_fixture(root: &Path, fixture: &str, relative: &str) {
    let target = root.join(relative);
    fs::create_dir_all(target.parent().unwrap()).unwrap();
    fs::copy(fixture_path(fixture), target).unwrap();
}

fn perfreport(root: &Path) -> Command {
    let mut cmd = Command::new(get_perfreport_bin());
    cmd.current_dir(root)
        .env_remove("PERFREPORT_ROOT")
        .env_remove("PERFREPORT_OUTPUT_DIR");
    cmd
}

/// Test that running with no arguments generates from the working directory
#[test]
fn test_no_arguments_generates_reports() {
    let temp_dir = TempDir::new().unwrap();

    perfreport(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Reports written to"));

    let reports = temp_dir.path().join("storage/app/reports");
    for file in [
        "executive-summary.md",
        "technical-report.md",
        "performance-dashboard.html",
        "performance-export.json",
    ] {
        assert!(reports.join(file).is_file(), "missing {}", file);
    }

    let executive = fs::read_to_string(reports.join("executive-summary.md")).unwrap();
    assert!(executive.contains("Baseline data not available"));
    assert!(executive.contains("🔴 Poor"));
}

/// Test that a malformed artifact exits non-zero with the failure prefix
#[test]
fn test_malformed_input_fails() {
    let temp_dir = TempDir::new().unwrap();
    install_fixture(
        temp_dir.path(),
        "malformed.json",
        "storage/app/performance/comparison.json",
    );

    perfreport(temp_dir.path())
        .arg("generate")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("❌ Report generation failed:"))
        .stderr(predicate::str::contains("comparison.json"));
}

/// Test that --root and --output-dir override the working directory layout
#[test]
fn test_root_and_output_dir_flags() {
    let project = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    let output = elsewhere.path().join("reports");
    install_fixture(
        project.path(),
        "baseline.json",
        "storage/app/performance/baseline.json",
    );

    perfreport(elsewhere.path())
        .arg("--root")
        .arg(project.path())
        .arg("--output-dir")
        .arg(&output)
        .assert()
        .success();

    let technical = fs::read_to_string(output.join("technical-report.md")).unwrap();
    assert!(technical.contains("- **Performance Score:** 60/100"));
    assert!(!project.path().join("storage/app/reports").exists());
}

/// Test that the root can come from the environment
#[test]
fn test_root_from_environment() {
    let project = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();

    perfreport(elsewhere.path())
        .env("PERFREPORT_ROOT", project.path())
        .assert()
        .success();

    assert!(
        project
            .path()
            .join("storage/app/reports/performance-export.json")
            .is_file()
    );
}

/// Test the summary command prints KPIs as JSON without writing reports
#[test]
fn test_summary_json_output() {
    let temp_dir = TempDir::new().unwrap();
    install_fixture(
        temp_dir.path(),
        "baseline.json",
        "storage/app/performance/baseline.json",
    );
    install_fixture(
        temp_dir.path(),
        "regression-comparison.json",
        "storage/app/performance/comparison.json",
    );

    let output = perfreport(temp_dir.path())
        .args(["summary", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let view: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(view["overallScore"], 71.0);
    assert_eq!(view["scoreBand"], "Good");
    assert_eq!(view["criticalIssues"], 3);
    assert_eq!(view["regressions"], 2);
    assert_eq!(view["trend"], "declining");
    assert_eq!(view["bundleAnalysisAvailable"], false);

    assert!(!temp_dir.path().join("storage/app/reports").exists());
}

/// Test the summary command table output
#[test]
fn test_summary_table_output() {
    let temp_dir = TempDir::new().unwrap();

    perfreport(temp_dir.path())
        .args(["summary", "--format", "table"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Metric,Value"))
        .stdout(predicate::str::contains("Overall Score,0"))
        .stdout(predicate::str::contains("Score Band,Poor"));
}
