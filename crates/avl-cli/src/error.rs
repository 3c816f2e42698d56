use std::num::ParseIntError;

use thiserror::Error;

/// A token in the command stream could not be understood.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty token")]
    EmptyToken,
    #[error("unknown opcode in token {token:?}: expected A<int>, D<int>, PRE, IN or POST")]
    UnknownOpcode { token: String },
    #[error("invalid key in token {token:?}")]
    InvalidKey {
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("input ended without a PRE, IN or POST keyword")]
    MissingTraversal,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("tree invariant violated after {command}: {reason}")]
    Invariant { command: String, reason: String },
}
