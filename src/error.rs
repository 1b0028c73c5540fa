//! The error type shared by validation and execution.

use crate::program::Position;

/// Errors raised while validating or executing a Brainfuck program.
///
/// Every variant carries the source position of the offending
/// instruction. All failures are fatal to the current run: the VM never
/// retries, and tape/program-counter state is left exactly as it was at
/// the point of failure.
#[derive(Debug, thiserror::Error)]
pub enum VmError {
    /// The head would have moved left of cell 0, or right past the end of
    /// a fixed-size tape.
    #[error("head moved out of bounds at {position}")]
    MoveOutOfBounds { position: Position },

    /// A `[` with no matching `]`. Reported at the earliest unmatched `[`.
    #[error("unmatched '[' at {position}")]
    UnmatchedOpenBracket { position: Position },

    /// A `]` with no matching `[`.
    #[error("unmatched ']' at {position}")]
    UnmatchedCloseBracket { position: Position },

    /// An input or output capability failed while handling `,` or `.`.
    #[error("i/o error at {position}: {source}")]
    Io {
        position: Position,
        #[source]
        source: std::io::Error,
    },
}

impl VmError {
    /// The source position of the instruction that caused the failure.
    pub fn position(&self) -> Position {
        match self {
            VmError::MoveOutOfBounds { position }
            | VmError::UnmatchedOpenBracket { position }
            | VmError::UnmatchedCloseBracket { position }
            | VmError::Io { position, .. } => *position,
        }
    }
}
