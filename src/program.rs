//! Brainfuck programs: instructions, source positions, and the bracket
//! matching pass that turns a raw instruction sequence into something a
//! VM can execute with O(1) loop jumps.

use std::fmt;

use crate::error::VmError;

/// The eight canonical Brainfuck instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// `<` — move the tape head one cell to the left.
    MoveLeft,
    /// `>` — move the tape head one cell to the right.
    MoveRight,
    /// `+` — increment the cell under the head, wrapping on overflow.
    Increment,
    /// `-` — decrement the cell under the head, wrapping on underflow.
    Decrement,
    /// `,` — read one byte of input into the cell under the head.
    Input,
    /// `.` — write the cell under the head as one byte of output.
    Output,
    /// `[` — if the cell under the head is zero, jump past the matching `]`.
    LoopStart,
    /// `]` — jump back to the matching `[`, which re-tests the cell.
    LoopEnd,
}

impl Instruction {
    /// Parse a single character. Returns `None` for anything outside the
    /// instruction set; such characters are comments in Brainfuck.
    pub fn from_char(c: char) -> Option<Instruction> {
        match c {
            '<' => Some(Instruction::MoveLeft),
            '>' => Some(Instruction::MoveRight),
            '+' => Some(Instruction::Increment),
            '-' => Some(Instruction::Decrement),
            ',' => Some(Instruction::Input),
            '.' => Some(Instruction::Output),
            '[' => Some(Instruction::LoopStart),
            ']' => Some(Instruction::LoopEnd),
            _ => None,
        }
    }

    /// The source character this instruction was parsed from.
    pub fn to_char(self) -> char {
        match self {
            Instruction::MoveLeft => '<',
            Instruction::MoveRight => '>',
            Instruction::Increment => '+',
            Instruction::Decrement => '-',
            Instruction::Input => ',',
            Instruction::Output => '.',
            Instruction::LoopStart => '[',
            Instruction::LoopEnd => ']',
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.to_char())
    }
}

/// A 1-indexed line/column location in the original source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Scan raw source text into an instruction sequence, recording where in
/// the source each instruction appeared. Non-instruction characters are
/// skipped.
pub fn tokenize(source: &str) -> Vec<(Instruction, Position)> {
    let mut instructions = Vec::new();
    for (line_index, line) in source.lines().enumerate() {
        for (column_index, c) in line.chars().enumerate() {
            if let Some(instruction) = Instruction::from_char(c) {
                instructions.push((
                    instruction,
                    Position::new(line_index + 1, column_index + 1),
                ));
            }
        }
    }
    instructions
}

/// A validated Brainfuck program.
///
/// Holds the instruction sequence with source positions plus a jump table
/// mapping each bracket's index to its partner's index. The table is built
/// once by [`Program::validate`]; afterwards the program is immutable and
/// can be shared by any number of VMs.
#[derive(Debug)]
pub struct Program {
    instructions: Vec<(Instruction, Position)>,
    /// `jump_table[i]` holds the matching index for a `[` or `]` at
    /// instruction index `i`, and `None` for every other index.
    jump_table: Vec<Option<usize>>,
}

impl Program {
    /// Validate an instruction sequence, building the bracket jump table.
    ///
    /// A single left-to-right pass keeps a stack of unmatched `[` indices:
    /// each `]` pops its partner, and both directions of the match are
    /// recorded. A `]` with an empty stack fails at its own position; a
    /// leftover `[` fails at the position of the earliest one.
    pub fn validate(instructions: Vec<(Instruction, Position)>) -> Result<Program, VmError> {
        let mut jump_table: Vec<Option<usize>> = vec![None; instructions.len()];
        let mut stack: Vec<usize> = Vec::new();

        for (index, &(instruction, position)) in instructions.iter().enumerate() {
            match instruction {
                Instruction::LoopStart => stack.push(index),
                Instruction::LoopEnd => {
                    let Some(open_index) = stack.pop() else {
                        return Err(VmError::UnmatchedCloseBracket { position });
                    };
                    jump_table[open_index] = Some(index);
                    jump_table[index] = Some(open_index);
                }
                _ => {}
            }
        }

        if let Some(&unmatched) = stack.first() {
            return Err(VmError::UnmatchedOpenBracket {
                position: instructions[unmatched].1,
            });
        }

        Ok(Program {
            instructions,
            jump_table,
        })
    }

    /// Tokenize and validate source text in one step.
    pub fn from_source(source: &str) -> Result<Program, VmError> {
        Self::validate(tokenize(source))
    }

    /// The instruction and source position at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<(Instruction, Position)> {
        self.instructions.get(index).copied()
    }

    /// The full instruction sequence.
    pub fn instructions(&self) -> &[(Instruction, Position)] {
        &self.instructions
    }

    /// Number of instructions in the program.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// The partner index for the bracket at `index`. `None` for
    /// non-bracket instructions; every bracket in a validated program has
    /// a partner.
    pub fn matching_bracket(&self, index: usize) -> Option<usize> {
        self.jump_table.get(index).copied().flatten()
    }
}
