//! Adapter over the `shakmaty` rules engine.
//!
//! The search core only talks to the rules through these functions and the
//! `Position` trait methods for legal moves and move application.

use std::fmt;

use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, Move, Outcome, Position};

use crate::error::{EngineError, EngineResult};

/// FEN of the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Game status as reported by the rules engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Ongoing,
    Win(Color),
    Draw,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Ongoing => write!(f, "ongoing"),
            GameOutcome::Win(Color::White) => write!(f, "white wins"),
            GameOutcome::Win(Color::Black) => write!(f, "black wins"),
            GameOutcome::Draw => write!(f, "draw"),
        }
    }
}

/// Decode a FEN string into a position.
pub fn decode_position(notation: &str) -> EngineResult<Chess> {
    let invalid = |reason: String| EngineError::InvalidPosition {
        notation: notation.to_string(),
        reason,
    };
    let fen: Fen = notation.trim().parse().map_err(|e| invalid(format!("{e}")))?;
    fen.into_position(CastlingMode::Standard)
        .map_err(|e| invalid(format!("{e}")))
}

/// Encode a position as FEN.
#[must_use]
pub fn encode_position(position: &Chess) -> String {
    Fen::from_position(position.clone(), EnPassantMode::Legal).to_string()
}

/// Current outcome of the position.
#[must_use]
pub fn outcome(position: &Chess) -> GameOutcome {
    match position.outcome() {
        None => GameOutcome::Ongoing,
        Some(Outcome::Decisive { winner }) => GameOutcome::Win(winner),
        Some(Outcome::Draw) => GameOutcome::Draw,
    }
}

/// UCI text of a move (`e2e4`, `e7e8q`, castling as `e1g1`).
#[must_use]
pub fn move_notation(mv: &Move) -> String {
    mv.to_uci(CastlingMode::Standard).to_string()
}

/// Find the legal move whose UCI text is `notation`.
pub fn parse_move(position: &Chess, notation: &str) -> EngineResult<Move> {
    let wanted = notation.trim();
    position
        .legal_moves()
        .into_iter()
        .find(|mv| move_notation(mv) == wanted)
        .ok_or_else(|| EngineError::IllegalMove {
            notation: wanted.to_string(),
        })
}

/// Apply a move, returning the resulting position.
#[must_use]
pub fn apply_move(position: &Chess, mv: &Move) -> Chess {
    let mut next = position.clone();
    next.play_unchecked(mv);
    next
}
