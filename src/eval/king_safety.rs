//! King safety evaluation.
//!
//! Penalizes hostile material standing close to a king.

use shakmaty::{Board, Color, Square};

use super::tables::{material, KING_PROXIMITY_RADIUS, KING_PROXIMITY_WEIGHT};

fn manhattan(a: Square, b: Square) -> u32 {
    let (a, b) = (a as u32, b as u32);
    (a % 8).abs_diff(b % 8) + (a / 8).abs_diff(b / 8)
}

/// Pressure on `color`'s king, as a non-negative penalty.
fn king_pressure(board: &Board, color: Color) -> i32 {
    let Some(king) = board.king_of(color) else {
        return 0;
    };
    Square::ALL
        .into_iter()
        .filter(|&sq| manhattan(sq, king) <= KING_PROXIMITY_RADIUS)
        .filter_map(|sq| board.piece_at(sq))
        .filter(|piece| piece.color != color)
        .map(|piece| KING_PROXIMITY_WEIGHT * material(piece.role) / 100)
        .sum()
}

/// King safety from White's perspective.
#[must_use]
pub fn king_safety(board: &Board) -> i32 {
    king_pressure(board, Color::Black) - king_pressure(board, Color::White)
}
