//! Material and piece placement.

use shakmaty::{Board, Square};

use super::tables::{color_index, material, role_index, sign, PLACEMENT};

/// Material plus placement bonus for every piece, from White's perspective.
#[must_use]
pub fn material_and_placement(board: &Board) -> i32 {
    let mut score = 0;
    for sq in Square::ALL {
        let Some(piece) = board.piece_at(sq) else {
            continue;
        };
        let placement = PLACEMENT[color_index(piece.color)][role_index(piece.role)][sq as usize];
        score += sign(piece.color) * (material(piece.role) + placement);
    }
    score
}
