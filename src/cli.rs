//! Command-line arguments.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;

/// Run a Brainfuck program on a configurable virtual machine.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Path to the file containing the Brainfuck program.
    pub program: PathBuf,

    /// Initial size of the VM's tape, in cells.
    /// Defaults to the `[tape] cells` config value, or 30000.
    #[arg(short, long)]
    pub cells: Option<NonZeroUsize>,

    /// Let the tape grow to the right instead of erroring at its end.
    /// Defaults to the `[tape] extensible` config value, or off.
    #[arg(short, long)]
    pub extensible: bool,
}
