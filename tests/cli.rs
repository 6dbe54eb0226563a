//! Integration tests for the drift-report binary.

mod common;
use common::*;

#[test]
fn missing_argument_prints_usage_and_exits_one() {
    let output = drift_report().output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "Usage: drift-report <drift-log-file>");
}

#[test]
fn valid_file_prints_report_and_exits_zero() {
    let file = write_log(SAMPLE_LOG);

    let output = drift_report().arg(file.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, format!("{}\n", format(&sample_lines())));
}

#[test]
fn no_drift_log_exits_zero() {
    let file = write_log("INFO: all good\nCritical differences found: 0\n");

    let output = drift_report().arg(file.path()).output().unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("✅"));
}

#[test]
fn unreadable_file_fails_without_stdout() {
    let output = drift_report()
        .arg("/nonexistent/path/drift.log")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("/nonexistent/path/drift.log"));
}

#[test]
fn invalid_utf8_fails_without_stdout() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"Critical differences found: 1\n\xff\xfe\n").unwrap();

    let output = drift_report().arg(file.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn json_format_from_environment() {
    let file = write_log("Critical differences found: 1\n");

    let output = drift_report()
        .env("DRIFT_REPORT_FORMAT", "json")
        .arg(file.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["error_count"], "1");
}

#[test]
fn max_listed_flag_limits_names() {
    let mut log = String::from("Critical differences found: 3\n");
    for name in ["idx_a", "idx_b", "idx_c"] {
        log.push_str(&format!("INFO: Index '{name}' has differences:\n"));
    }
    let file = write_log(&log);

    let output = drift_report()
        .args(["--max-listed", "2"])
        .arg(file.path())
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("### Index Differences (3)"));
    assert!(stdout.contains("idx_b\n```"));
    assert!(!stdout.contains("idx_c"));
}

#[test]
fn debug_logging_stays_off_stdout() {
    let file = write_log(SAMPLE_LOG);

    let output = drift_report()
        .env("RUST_LOG", "debug")
        .arg(file.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("## 🔍 Schema Drift Detection"));
    assert!(!String::from_utf8_lossy(&output.stderr).is_empty());
}
