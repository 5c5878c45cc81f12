//! Static position evaluation.
//!
//! Scores are white-positive centipawns and never reach the search's
//! forced-result sentinel. Terms:
//! - Material and piece placement
//! - Mobility
//! - King safety (hostile material near the king)
//! - Pawn structure (doubled, isolated)

mod king_safety;
mod material;
mod mobility;
mod pawn_structure;
pub mod tables;

use std::fmt;

use shakmaty::{Chess, Position};

use crate::search::Score;

pub use king_safety::king_safety;
pub use material::material_and_placement;
pub use mobility::mobility;
pub use pawn_structure::pawn_structure;

/// Per-term evaluation, useful for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalBreakdown {
    pub material: Score,
    pub mobility: Score,
    pub king_safety: Score,
    pub pawn_structure: Score,
}

impl EvalBreakdown {
    #[must_use]
    pub fn of(position: &Chess) -> Self {
        let board = position.board();
        EvalBreakdown {
            material: material_and_placement(board),
            mobility: mobility(position),
            king_safety: king_safety(board),
            pawn_structure: pawn_structure(board),
        }
    }

    #[must_use]
    pub fn total(&self) -> Score {
        self.material + self.mobility + self.king_safety + self.pawn_structure
    }
}

impl fmt::Display for EvalBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "material {} mobility {} king_safety {} pawns {} total {}",
            self.material,
            self.mobility,
            self.king_safety,
            self.pawn_structure,
            self.total()
        )
    }
}

/// Evaluate a position from White's perspective.
#[must_use]
pub fn evaluate(position: &Chess) -> Score {
    EvalBreakdown::of(position).total()
}
