// Exercises the ',' (input) instruction end to end: bytes supplied on
// stdin flow through the VM and back out through the newline guard.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn program_file(source: &str) -> tempfile::NamedTempFile {
    let mut tf = tempfile::NamedTempFile::new().expect("tempfile");
    write!(tf, "{}", source).unwrap();
    tf
}

#[test]
fn reads_from_stdin_and_echoes_byte() {
    let tf = program_file(",.");
    Command::cargo_bin("bfvm")
        .expect("failed to locate bfvm binary")
        .arg(tf.path())
        .write_stdin("Z")
        .assert()
        .success()
        .stdout("Z\n");
}

#[test]
fn echo_loop_copies_stdin_until_eof() {
    // ,[.,] — the classic cat program; EOF reads as 0 and ends the loop.
    let tf = program_file(",[.,]");
    Command::cargo_bin("bfvm")
        .expect("failed to locate bfvm binary")
        .arg(tf.path())
        .write_stdin("abc\n")
        .assert()
        .success()
        .stdout(predicate::eq(b"abc\n" as &[u8]));
}
