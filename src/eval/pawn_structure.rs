//! Pawn structure evaluation.
//!
//! Doubled and isolated pawns, counted per file for each color.

use shakmaty::{Board, Color, Role, Square};

use super::tables::{color_index, sign, DOUBLED_PAWN_PENALTY, ISOLATED_PAWN_PENALTY};

fn pawns_by_file(board: &Board) -> [[i32; 8]; 2] {
    let mut files = [[0; 8]; 2];
    for sq in Square::ALL {
        if let Some(piece) = board.piece_at(sq) {
            if piece.role == Role::Pawn {
                files[color_index(piece.color)][sq as usize % 8] += 1;
            }
        }
    }
    files
}

fn structure_penalty(files: &[i32; 8]) -> i32 {
    let mut penalty = 0;
    for (file, &count) in files.iter().enumerate() {
        if count == 0 {
            continue;
        }
        penalty += DOUBLED_PAWN_PENALTY * (count - 1);

        let left = file.checked_sub(1).map_or(0, |f| files[f]);
        let right = files.get(file + 1).copied().unwrap_or(0);
        if left == 0 && right == 0 {
            penalty += ISOLATED_PAWN_PENALTY * count;
        }
    }
    penalty
}

/// Pawn structure from White's perspective.
#[must_use]
pub fn pawn_structure(board: &Board) -> i32 {
    let files = pawns_by_file(board);
    [Color::White, Color::Black]
        .into_iter()
        .map(|color| -sign(color) * structure_penalty(&files[color_index(color)]))
        .sum()
}
