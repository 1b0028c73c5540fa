use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn cargo_bin() -> Command {
    Command::cargo_bin("bfvm").unwrap()
}

fn program_file(source: &str) -> tempfile::NamedTempFile {
    let mut tf = tempfile::NamedTempFile::new().expect("tempfile");
    write!(tf, "{}", source).unwrap();
    tf
}

#[test]
fn runs_a_program_file_and_appends_trailing_newline() {
    let tf = program_file("+++.");
    cargo_bin()
        .arg(tf.path())
        .assert()
        .success()
        .stdout(predicate::eq(b"\x03\n" as &[u8]))
        .stderr(predicate::str::is_empty());
}

#[test]
fn hello_world_ends_in_exactly_one_newline() {
    // This program emits its own final newline; the guard must not add
    // a second one.
    let tf = program_file(
        "++++++++++[>+++++++>++++++++++>+++>+<<<<-]>++.>+.+++++++..+++.>++.\
         <<+++++++++++++++.>.+++.------.--------.>+.>.",
    );
    cargo_bin()
        .arg(tf.path())
        .assert()
        .success()
        .stdout(predicate::eq(b"Hello World!\n" as &[u8]));
}

#[test]
fn newline_free_output_gets_one_appended() {
    let tf = program_file(
        "++++++++++[>+++++++>++++++++++>+++>+<<<<-]>++.>+.+++++++..+++.>++.\
         <<+++++++++++++++.>.+++.------.--------.>+.",
    );
    cargo_bin()
        .arg(tf.path())
        .assert()
        .success()
        .stdout(predicate::eq(b"Hello World!\n" as &[u8]));
}

#[test]
fn silent_program_prints_nothing() {
    let tf = program_file("+++[-]");
    cargo_bin()
        .arg(tf.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn cells_flag_bounds_the_tape() {
    let tf = program_file(">>>");
    cargo_bin()
        .arg(tf.path())
        .arg("--cells")
        .arg("2")
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of bounds"));
}

#[test]
fn extensible_flag_lets_the_tape_grow() {
    let tf = program_file(">>>");
    cargo_bin()
        .arg(tf.path())
        .arg("--cells")
        .arg("2")
        .arg("--extensible")
        .assert()
        .success();
}
