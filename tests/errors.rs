use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::time::Duration;

fn cargo_bin() -> Command {
    Command::cargo_bin("bfvm").unwrap()
}

fn program_file(source: &str) -> tempfile::NamedTempFile {
    let mut tf = tempfile::NamedTempFile::new().expect("tempfile");
    write!(tf, "{}", source).unwrap();
    tf
}

#[test]
fn unmatched_open_bracket_fails_validation() {
    let tf = program_file("[");
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg(tf.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unmatched '['"))
        .stderr(predicate::str::contains(":1:1:"));
}

#[test]
fn unmatched_close_bracket_fails_validation() {
    let tf = program_file("+]");
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg(tf.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unmatched ']'"))
        .stderr(predicate::str::contains(":1:2:"));
}

#[test]
fn runtime_error_reports_line_and_column() {
    let tf = program_file("+\n<");
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg(tf.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of bounds"))
        .stderr(predicate::str::contains(":2:1:"));
}

#[test]
fn missing_program_file_is_reported() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("does-not-exist.bf")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn output_before_a_failure_is_still_flushed_with_a_newline() {
    // One byte of output, then an out-of-bounds move. The guard should
    // terminate the partial output before the error lands on stderr.
    let tf = program_file("+.<");
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg(tf.path())
        .assert()
        .failure()
        .stdout(predicate::eq(b"\x01\n" as &[u8]))
        .stderr(predicate::str::contains("out of bounds"));
}
