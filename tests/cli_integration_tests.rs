//! Integration tests for the CLI surface: formats, flags, help.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn help_lists_max_lines_flag() {
    line_guard!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--max-lines"));
}

#[test]
fn version_flag_works() {
    line_guard!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("line-guard"));
}

#[test]
fn unknown_format_is_rejected_by_clap() {
    line_guard!()
        .args(["--format", "xml", "a.py"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("xml"));
}

#[test]
fn json_format_emits_parseable_output() {
    let fixture = TestFixture::new();
    fixture.create_file_with_lines("a.py", 10);

    let output = line_guard!()
        .current_dir(fixture.path())
        .args(["--max-lines", "5", "--format", "json", "a.py"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value =
        serde_json::from_slice(&output).expect("stdout should be valid JSON");
    assert_eq!(json["summary"]["failed"], 1);
    assert_eq!(json["summary"]["max_lines"], 5);
    assert_eq!(json["violations"][0]["path"], "a.py");
    assert_eq!(json["violations"][0]["category"], "application");
}

#[test]
fn json_format_with_no_files_still_reports_the_limit() {
    let fixture = TestFixture::new();

    let output = line_guard!()
        .current_dir(fixture.path())
        .args(["--max-lines", "800", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value =
        serde_json::from_slice(&output).expect("stdout should be valid JSON");
    assert_eq!(json["summary"]["total_files"], 0);
    assert_eq!(json["summary"]["max_lines"], 800);
}

#[test]
fn quiet_suppresses_report_but_keeps_exit_code() {
    let fixture = TestFixture::new();
    fixture.create_file_with_lines("a.py", 10);

    line_guard!()
        .current_dir(fixture.path())
        .args(["--max-lines", "5", "--quiet", "a.py"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn verbose_lists_passing_files() {
    let fixture = TestFixture::new();
    fixture.create_file_with_lines("small.py", 3);

    line_guard!()
        .current_dir(fixture.path())
        .args(["--max-lines", "5", "--verbose", "small.py"])
        .assert()
        .success()
        .stdout(predicate::str::contains("small.py (3 lines)"));
}

#[test]
fn color_never_emits_no_ansi_codes() {
    let fixture = TestFixture::new();
    fixture.create_file_with_lines("a.py", 10);

    line_guard!()
        .current_dir(fixture.path())
        .args(["--max-lines", "5", "--color", "never", "a.py"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn color_always_emits_ansi_codes() {
    let fixture = TestFixture::new();
    fixture.create_file_with_lines("a.py", 10);

    line_guard!()
        .current_dir(fixture.path())
        .args(["--max-lines", "5", "--color", "always", "a.py"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\x1b[31m"));
}
