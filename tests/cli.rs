#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const HEADER: &str = "name,monday,tuesday,wednesday,thursday,friday,saturday,sunday\n";

fn full_coverage_csv() -> String {
    let names = ["ana", "ben", "chloe", "dan", "eve", "farid", "gina", "hugo", "ines"];
    let shifts = ["morning", "afternoon", "evening"];
    let mut rows = vec![vec![""; 7]; names.len()];
    for day in 0..7 {
        for k in 0..6 {
            rows[(6 * day + k) % names.len()][day] = shifts[k / 2];
        }
    }
    let mut out = String::from(HEADER);
    for (name, row) in names.iter().zip(rows) {
        out.push_str(&format!("{name},{}\n", row.join(",")));
    }
    out
}

fn cli() -> Command {
    Command::cargo_bin("roulement-cli").unwrap()
}

#[test]
fn generate_fully_staffed_exits_zero_and_exports() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("workers.csv");
    let json = dir.path().join("report.json");
    let grid = dir.path().join("schedule.csv");
    fs::write(&csv, full_coverage_csv()).unwrap();

    cli()
        .args(["--seed", "3", "generate", "--csv"])
        .arg(&csv)
        .arg("--out-json")
        .arg(&json)
        .arg("--out-csv")
        .arg(&grid)
        .assert()
        .success()
        .stdout(predicate::str::contains("WEEKLY EMPLOYEE SCHEDULE"))
        .stdout(predicate::str::contains("Schedule generated successfully!"))
        .stdout(predicate::str::contains("Warning:").not());

    let report: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(report["cells"].as_array().unwrap().len(), 21);
    assert_eq!(report["workers"][0]["name"], "ana");
    assert_eq!(report["workers"][0]["utilization"], "nominal");
    assert!(report["warnings"].as_array().unwrap().is_empty());

    let exported = fs::read_to_string(&grid).unwrap();
    let mut lines = exported.lines();
    assert_eq!(lines.next(), Some("day,shift,workers,understaffed"));
    assert_eq!(lines.next(), Some("Monday,Morning,ana;ben,false"));
    assert_eq!(exported.lines().count(), 22);
}

#[test]
fn check_reports_understaffing_with_code_2() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("workers.csv");
    fs::write(&csv, format!("{HEADER}solo,,,,,,,\n")).unwrap();

    cli()
        .args(["check", "--csv"])
        .arg(&csv)
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "Warning: Cannot meet minimum staffing for SUNDAY Evening shift",
        ))
        .stderr(predicate::str::contains("Found 21 understaffed shift(s)"));
}

#[test]
fn check_ok_when_preferences_cover_the_week() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("workers.csv");
    fs::write(&csv, full_coverage_csv()).unwrap();

    cli()
        .args(["check", "--csv"])
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: every shift is staffed"));
}

#[test]
fn interactive_intake_without_employees_exits_cleanly() {
    cli()
        .arg("generate")
        .write_stdin("done\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No employees entered. Exiting..."));
}

#[test]
fn interactive_intake_generates_schedule() {
    let script = "solo\nmorning\nskip\nskip\nskip\nskip\nskip\nskip\nn\n";
    cli()
        .args(["--seed", "1", "generate"])
        .write_stdin(script)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Employee solo added successfully!"))
        .stdout(predicate::str::contains("solo           : 5 days worked"));
}

#[test]
fn invalid_shift_token_fails() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("workers.csv");
    fs::write(&csv, format!("{HEADER}dave,night,,,,,,\n")).unwrap();

    cli()
        .args(["generate", "--csv"])
        .arg(&csv)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid shift: night"));
}

#[test]
fn duplicate_names_in_csv_fail() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("workers.csv");
    fs::write(&csv, format!("{HEADER}Eve,,,,,,,\neve,,,,,,,\n")).unwrap();

    cli()
        .args(["generate", "--csv"])
        .arg(&csv)
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate worker name: eve"));
}
