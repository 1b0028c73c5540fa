//! The `bfvm` binary: loads a Brainfuck program from a file, validates
//! it, and runs it on a [`VirtualMachine`] wired to stdin and stdout.
//!
//! The tape size may be set with `--cells N` (default 30,000 or the
//! config file value), and `--extensible` lets the tape grow to the
//! right on demand. Output is wrapped in a [`TrailingNewlineWriter`] so
//! programs that don't end their output with a newline still leave the
//! terminal in a sane state. Ctrl-C is surfaced to a blocked `,` as an
//! interrupted read rather than killing the process outright.

mod cli;

use std::io::{self, Read, stdin, stdout};
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::{env, fs};

use bfvm::{Program, TrailingNewlineWriter, VirtualMachine, cli_util, config};
use clap::Parser;

use cli::Args;

/// Input capability that fails with `ErrorKind::Interrupted` once the
/// cancel flag is set, so a Ctrl-C during a blocking `,` ends the run
/// with an ordinary i/o error instead of a hard exit.
struct InterruptibleInput<R: Read> {
    inner: R,
    cancel: Arc<AtomicBool>,
}

impl<R: Read> Read for InterruptibleInput<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.cancel.load(Ordering::Relaxed) {
            return Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted"));
        }
        self.inner.read(buf)
    }
}

fn run(program_name: &str, args: &Args) -> Result<(), ExitCode> {
    let source = fs::read_to_string(&args.program).map_err(|e| {
        eprintln!(
            "{program_name}: failed to read {}: {e}",
            args.program.display()
        );
        ExitCode::FAILURE
    })?;

    let program = Program::from_source(&source).map_err(|e| {
        cli_util::print_vm_error(program_name, &args.program, &source, &e);
        ExitCode::FAILURE
    })?;

    let defaults = config::tape_defaults();
    let cells = args.cells.unwrap_or(defaults.cells);
    let extensible = args.extensible || defaults.extensible;

    let cancel = Arc::new(AtomicBool::new(false));
    {
        let cancel = cancel.clone();
        // Failure to install the handler just means Ctrl-C keeps its
        // default behavior.
        let _ = ctrlc::set_handler(move || {
            cancel.store(true, Ordering::Relaxed);
        });
    }

    let mut vm: VirtualMachine<u8> = VirtualMachine::new(&program, cells, extensible);
    let mut input = InterruptibleInput {
        inner: stdin(),
        cancel,
    };
    let mut output = stdout();
    let mut guarded_output = TrailingNewlineWriter::new(&mut output);

    let result = vm.interpret(&mut input, &mut guarded_output);
    // Fire the newline guard before anything lands on stderr.
    drop(guarded_output);

    result.map_err(|e| {
        cli_util::print_vm_error(program_name, &args.program, &source, &e);
        ExitCode::FAILURE
    })
}

fn main() -> ExitCode {
    let program_name = env::args()
        .next()
        .unwrap_or_else(|| env!("CARGO_BIN_NAME").to_string());
    let args = Args::parse();

    match run(&program_name, &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => code,
    }
}
