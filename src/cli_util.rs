//! Human-readable error reporting for the CLI layer.
//!
//! The core returns location-tagged [`VmError`] values and leaves all
//! formatting to the caller; this module turns them into
//! `bfvm: file:line:col: error: ...` messages with the offending source
//! line and a caret under the column.

use std::io::{self, Write};
use std::path::Path;

use nu_ansi_term::Color;

use crate::VmError;

/// Print a structured [`VmError`] to stderr, prefixed with the program
/// name and the source file's path.
pub fn print_vm_error(program: &str, file: &Path, source: &str, err: &VmError) {
    let position = err.position();
    eprintln!(
        "{program}: {}:{}:{}: {} {err}",
        file.display(),
        position.line,
        position.column,
        Color::Red.paint("error:"),
    );
    print_source_context(source, position.line, position.column);
    let _ = io::stderr().flush();
}

/// Print the offending source line with a caret under the column.
/// Positions are 1-indexed; anything out of range prints nothing.
fn print_source_context(source: &str, line: usize, column: usize) {
    let Some(text) = source.lines().nth(line.saturating_sub(1)) else {
        return;
    };
    if column == 0 || column > text.chars().count() {
        return;
    }

    eprintln!("  {}", text);

    let mut underline = String::new();
    for _ in 0..column - 1 {
        underline.push(' ');
    }
    underline.push('^');
    eprintln!("  {}", underline);
}
