//! A Brainfuck virtual machine library.
//!
//! This crate provides a deterministic execution engine over a linear
//! memory tape, driven by the eight canonical Brainfuck instructions.
//!
//! Features and behaviors:
//! - Generic cell width via the [`Cell`] trait (provided for `u8`, `u16`,
//!   and `u32`); arithmetic wraps at the type's bounds.
//! - Fixed or extensible tape, chosen at construction. Moving left of
//!   cell 0 is always an error; a fixed tape also errors past its end,
//!   an extensible one grows on demand.
//! - Programs are validated up front: a single pass matches every
//!   bracket pair (or reports the unmatched one with its line and
//!   column), so loop jumps during execution are O(1) table lookups.
//! - `,` and `.` run against caller-supplied `Read`/`Write`
//!   capabilities; EOF on `,` stores zero in the cell.
//! - Every failure carries the source position of the instruction that
//!   caused it.
//!
//! Quick start:
//!
//! ```
//! use std::num::NonZeroUsize;
//! use bfvm::{Program, VirtualMachine};
//!
//! let program = Program::from_source("+++.").expect("balanced brackets");
//! let mut vm: VirtualMachine<u8> =
//!     VirtualMachine::new(&program, NonZeroUsize::new(1).unwrap(), false);
//!
//! let mut output = Vec::new();
//! vm.interpret(&mut std::io::empty(), &mut output).expect("program should run");
//! assert_eq!(output, [3]);
//! ```

pub mod cell;
pub mod cli_util;
pub mod config;
pub mod error;
pub mod program;
pub mod tape;
pub mod vm;
pub mod writer;

pub use cell::Cell;
pub use error::VmError;
pub use program::{Instruction, Position, Program, tokenize};
pub use tape::Tape;
pub use vm::VirtualMachine;
pub use writer::TrailingNewlineWriter;
