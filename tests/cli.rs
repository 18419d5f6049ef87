#![allow(deprecated)]

use std::path::PathBuf;

use assert_cmd::Command;

fn fixture_roster() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/roster.json")
}

fn coursecraft() -> Command {
    let mut cmd = Command::cargo_bin("coursecraft").expect("binary exists");
    cmd.env_remove("COURSECRAFT_ROSTER")
        .env_remove("COURSECRAFT_MAX_GRADE_POINT")
        .env_remove("COURSECRAFT_GRADE_STEP")
        .env_remove("COURSECRAFT_PRECISION")
        .env("COURSECRAFT_LOG", "error");
    cmd
}

fn run(args: &[&str]) -> (String, String) {
    let assert = coursecraft().args(args).assert().success();
    let output = assert.get_output().clone();
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr)
}

#[test]
fn future_prints_required_average() {
    let (stdout, _) = run(&[
        "future",
        "--gpa",
        "4.0",
        "--credits",
        "15",
        "--additional",
        "15",
        "--desired",
        "3.5",
    ]);
    assert_eq!(stdout, "3.00\n");
}

#[test]
fn future_flags_unreachable_targets() {
    let (stdout, _) = run(&[
        "future",
        "--gpa",
        "4.0",
        "--credits",
        "15",
        "--additional",
        "15",
        "--desired",
        "4.5",
    ]);
    assert_eq!(stdout, "not possible with that amount of credits\n");
}

#[test]
fn future_asks_for_missing_fields() {
    let (stdout, _) = run(&["future", "--gpa", "3.0", "--credits", "12"]);
    assert_eq!(stdout, "Please enter credits and desired gpa\n");
}

#[test]
fn future_reads_snapshot_from_roster() {
    let roster = fixture_roster();
    let (stdout, _) = run(&[
        "future",
        "--student",
        "7",
        "--roster",
        roster.to_str().expect("utf-8 path"),
        "--additional",
        "12",
        "--desired",
        "3.5",
    ]);
    assert_eq!(stdout, "4.00\n");
}

#[test]
fn semester_prints_table_and_projection() {
    let (stdout, stderr) = run(&[
        "semester",
        "--gpa",
        "3",
        "--credits",
        "12",
        "--course",
        "CS101=4:4",
        "--course",
        "MATH201=4:4",
        "--course",
        "PHYS110=4:4",
    ]);
    assert_eq!(stdout, "3.50\n");
    assert!(stderr.contains("CS101"), "{stderr}");
    assert!(stderr.contains("Projected GPA: 3.50"), "{stderr}");
}

#[test]
fn semester_with_roster_requires_every_enrolled_course() {
    let roster = fixture_roster();
    let (stdout, _) = run(&[
        "semester",
        "--student",
        "7",
        "--roster",
        roster.to_str().expect("utf-8 path"),
        "--course",
        "CS101=4:4",
    ]);
    assert_eq!(stdout, "one of your grades or credits is null\n");
}

#[test]
fn unknown_student_fails() {
    let roster = fixture_roster();
    coursecraft()
        .args([
            "future",
            "--student",
            "99",
            "--roster",
            roster.to_str().expect("utf-8 path"),
            "--additional",
            "12",
            "--desired",
            "3",
        ])
        .assert()
        .failure();
}

#[test]
fn student_without_roster_fails() {
    coursecraft()
        .args(["future", "--student", "7", "--additional", "12", "--desired", "3"])
        .assert()
        .failure();
}

#[test]
fn negative_credits_are_refused_before_planning() {
    let assert = coursecraft()
        .args([
            "future",
            "--gpa",
            "4",
            "--credits=-15",
            "--additional",
            "15",
            "--desired",
            "3",
        ])
        .assert()
        .failure();
    let output = assert.get_output();
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("credits cannot be negative"), "{stderr}");
}

#[test]
fn gpa_above_the_scale_is_refused_before_planning() {
    let assert = coursecraft()
        .args(["semester", "--gpa", "9", "--credits", "12", "--course", "A=4:4"])
        .assert()
        .failure();
    let output = assert.get_output();
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Current GPA must be between 0 and 4"), "{stderr}");
    assert!(!stderr.contains("Projected GPA"), "{stderr}");
}

#[test]
fn non_finite_gpa_is_refused() {
    coursecraft()
        .args([
            "future",
            "--gpa",
            "NaN",
            "--credits",
            "12",
            "--additional",
            "12",
            "--desired",
            "3",
        ])
        .assert()
        .failure();
}

#[test]
fn student_without_enrollments_has_no_courses() {
    let roster = fixture_roster();
    let (stdout, _) = run(&[
        "semester",
        "--student",
        "9",
        "--roster",
        roster.to_str().expect("utf-8 path"),
    ]);
    assert_eq!(stdout, "No available courses at this time\n");
}

#[test]
fn repeated_course_keeps_last_entry_and_warns() {
    let roster = fixture_roster();
    let assert = coursecraft()
        .env("COURSECRAFT_LOG", "warn")
        .args([
            "semester",
            "--student",
            "7",
            "--roster",
            roster.to_str().expect("utf-8 path"),
            "--course",
            "CS101=4:2",
            "--course",
            "CS101=4:4",
            "--course",
            "MATH201=4:4",
            "--course",
            "PHYS110=4:4",
        ])
        .assert()
        .success();
    let output = assert.get_output();
    assert_eq!(String::from_utf8_lossy(&output.stdout), "3.50\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("more than once"), "{stderr}");
    assert!(stderr.contains("CS101"), "{stderr}");
}

#[test]
fn oversized_precision_uses_the_default() {
    let assert = coursecraft()
        .env("COURSECRAFT_PRECISION", "70000")
        .args([
            "future",
            "--gpa",
            "4.0",
            "--credits",
            "15",
            "--additional",
            "15",
            "--desired",
            "3.5",
        ])
        .assert()
        .success();
    assert_eq!(String::from_utf8_lossy(&assert.get_output().stdout), "3.00\n");
}

#[test]
fn unusable_settings_fall_back_to_the_default_scale() {
    let assert = coursecraft()
        .env("COURSECRAFT_GRADE_STEP", "abc")
        .env("COURSECRAFT_MAX_GRADE_POINT", "-1")
        .env("COURSECRAFT_LOG", "bogus")
        .args([
            "semester",
            "--gpa",
            "3",
            "--credits",
            "12",
            "--course",
            "CS101=4:4",
            "--course",
            "MATH201=4:3.5",
        ])
        .assert()
        .success();
    assert_eq!(String::from_utf8_lossy(&assert.get_output().stdout), "3.30\n");
}
