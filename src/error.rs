//! Error types for engine operations.

use std::fmt;

use crate::rules::GameOutcome;

/// Errors surfaced by the engine facade and the request layers above it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Position notation could not be decoded into a legal position
    InvalidPosition { notation: String, reason: String },
    /// A move in a protocol command is not legal in the current position
    IllegalMove { notation: String },
    /// Requested search depth is not positive or does not fit the search
    InvalidDepth { depth: i64 },
    /// The position has no legal moves; the game is over
    NoLegalMove { outcome: GameOutcome },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidPosition { notation, reason } => {
                write!(f, "Invalid position '{notation}': {reason}")
            }
            EngineError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
            EngineError::InvalidDepth { depth } if *depth <= 0 => {
                write!(f, "Search depth must be positive, found {depth}")
            }
            EngineError::InvalidDepth { depth } => {
                write!(f, "Search depth {depth} is out of range")
            }
            EngineError::NoLegalMove { outcome } => {
                write!(f, "No legal move available ({outcome})")
            }
        }
    }
}

impl std::error::Error for EngineError {}

impl EngineError {
    /// Whether the error was caused by caller input rather than game state.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        !matches!(self, EngineError::NoLegalMove { .. })
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
