//! Move ordering heuristics.
//!
//! Priorities only decide the order in which a node's moves are searched.
//! Because ties keep the earlier move, the order also decides which of
//! several equally scored moves is reported.

use std::cmp::Reverse;

use shakmaty::{Chess, Color, Move, MoveList, Position, Square};

use super::constants::{
    CAPTURE_MULTIPLIER, CENTER_BONUS, DEVELOPMENT_BONUS, KING_PAWN_BONUS,
};
use crate::eval::tables::material;

const CENTER: [Square; 4] = [Square::D4, Square::E4, Square::D5, Square::E5];

const WHITE_DEVELOPMENT: [(Square, Square, i32); 4] = [
    (Square::E2, Square::E4, KING_PAWN_BONUS),
    (Square::G1, Square::F3, DEVELOPMENT_BONUS),
    (Square::F1, Square::C4, DEVELOPMENT_BONUS),
    (Square::F1, Square::B5, DEVELOPMENT_BONUS),
];

const BLACK_DEVELOPMENT: [(Square, Square, i32); 4] = [
    (Square::E7, Square::E5, KING_PAWN_BONUS),
    (Square::B8, Square::C6, DEVELOPMENT_BONUS),
    (Square::F8, Square::C5, DEVELOPMENT_BONUS),
    (Square::F8, Square::B4, DEVELOPMENT_BONUS),
];

/// Ordering priority of `mv` in `position`. Higher is searched first.
#[must_use]
pub fn priority(mv: &Move, position: &Chess) -> i32 {
    let mut score = 0;

    if let Some(captured) = mv.capture() {
        score += CAPTURE_MULTIPLIER * material(captured);
    }

    let to = mv.to();
    if CENTER.contains(&to) {
        score += CENTER_BONUS;
    }

    let development = match position.turn() {
        Color::White => &WHITE_DEVELOPMENT,
        Color::Black => &BLACK_DEVELOPMENT,
    };
    if let Some(from) = mv.from() {
        score += development
            .iter()
            .filter(|&&(f, t, _)| f == from && t == to)
            .map(|&(_, _, bonus)| bonus)
            .sum::<i32>();
    }

    score
}

/// Sort moves by descending priority, keeping generation order among ties.
pub fn order_moves(moves: &mut MoveList, position: &Chess) {
    moves.sort_by_cached_key(|mv| Reverse(priority(mv, position)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{decode_position, move_notation, parse_move};

    fn priority_of(fen: &str, uci: &str) -> i32 {
        let pos = decode_position(fen).expect("valid fen");
        let mv = parse_move(&pos, uci).expect("legal move");
        priority(&mv, &pos)
    }

    #[test]
    fn king_pawn_opening_ranks_first() {
        let pos = Chess::default();
        let mut moves = pos.legal_moves();
        order_moves(&mut moves, &pos);
        assert_eq!(move_notation(&moves[0]), "e2e4");
        assert_eq!(priority(&moves[0], &pos), KING_PAWN_BONUS + CENTER_BONUS);
    }

    #[test]
    fn development_is_side_specific() {
        let start = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        assert_eq!(priority_of(start, "g1f3"), DEVELOPMENT_BONUS);
        assert_eq!(priority_of(start, "b1c3"), 0);

        let after_e4 = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1";
        assert_eq!(priority_of(after_e4, "b8c6"), DEVELOPMENT_BONUS);
        assert_eq!(priority_of(after_e4, "g8f6"), 0);
        assert_eq!(priority_of(after_e4, "e7e5"), KING_PAWN_BONUS + CENTER_BONUS);
    }

    #[test]
    fn captures_scale_with_victim() {
        // Pawn on e4 can take a queen on d5 or a knight on f5
        let fen = "4k3/8/8/3q1n2/4P3/8/8/4K3 w - - 0 1";
        assert_eq!(priority_of(fen, "e4d5"), 10 * 900 + CENTER_BONUS);
        assert_eq!(priority_of(fen, "e4f5"), 10 * 300);
    }

    #[test]
    fn castling_is_not_a_capture() {
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
        assert_eq!(priority_of(fen, "e1g1"), 0);
    }

    #[test]
    fn ties_keep_generation_order() {
        let pos = Chess::default();
        let generated: Vec<String> = pos
            .legal_moves()
            .iter()
            .filter(|mv| priority(mv, &pos) == 0)
            .map(move_notation)
            .collect();
        let mut moves = pos.legal_moves();
        order_moves(&mut moves, &pos);
        let ordered: Vec<String> = moves
            .iter()
            .filter(|mv| priority(mv, &pos) == 0)
            .map(move_notation)
            .collect();
        assert_eq!(generated, ordered);
    }
}
