//! The virtual machine: a tape, a program counter, and the
//! fetch-dispatch-execute loop.

use std::io::{Read, Write};
use std::num::NonZeroUsize;

use crate::cell::Cell;
use crate::error::VmError;
use crate::program::{Instruction, Position, Program};
use crate::tape::Tape;

/// A Brainfuck virtual machine.
///
/// Owns a [`Tape`] and a program counter, and borrows a validated
/// [`Program`] for its whole run. The program is never mutated, so the
/// same `Program` can back any number of VMs at once.
///
/// ```no_run
/// use std::io::{stdin, stdout};
/// use std::num::NonZeroUsize;
/// use bfvm::{Program, VirtualMachine};
///
/// let program = Program::from_source("+++.").expect("balanced brackets");
/// let mut vm: VirtualMachine<u8> =
///     VirtualMachine::new(&program, NonZeroUsize::new(30_000).unwrap(), false);
/// vm.interpret(&mut stdin(), &mut stdout()).expect("program should run");
/// ```
#[derive(Debug)]
pub struct VirtualMachine<'a, C: Cell> {
    program: &'a Program,
    tape: Tape<C>,
    pc: usize,
}

impl<'a, C: Cell> VirtualMachine<'a, C> {
    /// Create a VM over `program` with a fresh zeroed tape of `cells`
    /// cells in the given bounds mode.
    pub fn new(program: &'a Program, cells: NonZeroUsize, extensible: bool) -> Self {
        Self {
            program,
            tape: Tape::new(cells, extensible),
            pc: 0,
        }
    }

    /// The tape, for inspection after (or between) runs.
    pub fn tape(&self) -> &Tape<C> {
        &self.tape
    }

    /// The current program counter.
    pub fn program_counter(&self) -> usize {
        self.pc
    }

    /// Run the program to completion against the supplied input and
    /// output capabilities.
    ///
    /// Starting from program counter 0, each instruction's handler
    /// produces the next counter value; the run succeeds the moment the
    /// counter passes the end of the program. Any failure is fatal and
    /// returned as-is; tape and counter are left exactly as they were
    /// when it occurred. There is no step limit — a caller that needs to
    /// bound execution time should wrap `input`/`output` in capabilities
    /// that fail on cancellation.
    pub fn interpret<R: Read, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<(), VmError> {
        self.pc = 0;
        while let Some((instruction, position)) = self.program.get(self.pc) {
            self.pc = match instruction {
                Instruction::MoveLeft => self.move_left(position)?,
                Instruction::MoveRight => self.move_right(position)?,
                Instruction::Increment => self.increment()?,
                Instruction::Decrement => self.decrement()?,
                Instruction::Input => self.input(input, position)?,
                Instruction::Output => self.output(output, position)?,
                Instruction::LoopStart => self.loop_start()?,
                Instruction::LoopEnd => self.loop_end()?,
            };
        }
        Ok(())
    }

    fn move_left(&mut self, position: Position) -> Result<usize, VmError> {
        self.tape
            .move_left()
            .map_err(|_| VmError::MoveOutOfBounds { position })?;
        Ok(self.pc + 1)
    }

    fn move_right(&mut self, position: Position) -> Result<usize, VmError> {
        self.tape
            .move_right()
            .map_err(|_| VmError::MoveOutOfBounds { position })?;
        Ok(self.pc + 1)
    }

    fn increment(&mut self) -> Result<usize, VmError> {
        self.tape.cell_mut().increment();
        Ok(self.pc + 1)
    }

    fn decrement(&mut self) -> Result<usize, VmError> {
        self.tape.cell_mut().decrement();
        Ok(self.pc + 1)
    }

    /// Read exactly one byte into the cell under the head. A zero-length
    /// read means EOF, which stores zero in the cell.
    fn input<R: Read>(&mut self, input: &mut R, position: Position) -> Result<usize, VmError> {
        let mut buf = [0u8; 1];
        match input.read(&mut buf) {
            Ok(0) => self.tape.cell_mut().set_byte(0),
            Ok(_) => self.tape.cell_mut().set_byte(buf[0]),
            Err(source) => return Err(VmError::Io { position, source }),
        }
        Ok(self.pc + 1)
    }

    fn output<W: Write>(&mut self, output: &mut W, position: Position) -> Result<usize, VmError> {
        output
            .write_all(&[self.tape.cell().to_byte()])
            .map_err(|source| VmError::Io { position, source })?;
        Ok(self.pc + 1)
    }

    /// `[` carries the loop test: skip past the matching `]` when the
    /// cell is zero, otherwise fall into the body.
    fn loop_start(&mut self) -> Result<usize, VmError> {
        if *self.tape.cell() == C::default() {
            let partner = self
                .program
                .matching_bracket(self.pc)
                .expect("validated bracket");
            Ok(partner + 1)
        } else {
            Ok(self.pc + 1)
        }
    }

    /// `]` is the trivial jump: back to the matching `[`, which re-tests
    /// the cell, so the condition is checked at the end of every
    /// iteration.
    fn loop_end(&mut self) -> Result<usize, VmError> {
        let partner = self
            .program
            .matching_bracket(self.pc)
            .expect("validated bracket");
        Ok(partner)
    }
}
