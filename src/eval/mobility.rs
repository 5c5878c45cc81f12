//! Mobility evaluation.
//!
//! Compares legal move counts of both sides. The side not to move is
//! counted after a null move, or after the first legal move when the side
//! to move is in check and passing is impossible.

use shakmaty::{Chess, Color, Position};

use super::tables::MOBILITY_WEIGHT;

/// Mobility difference from White's perspective.
#[must_use]
pub fn mobility(position: &Chess) -> i32 {
    let ours = position.legal_moves();
    let Some(first) = ours.first() else {
        return 0;
    };

    let theirs = match position.clone().swap_turn() {
        Ok(passed) => passed.legal_moves().len(),
        Err(_) => {
            let mut probe = position.clone();
            probe.play_unchecked(first);
            probe.legal_moves().len()
        }
    };

    let diff = (ours.len() as i32 - theirs as i32) * MOBILITY_WEIGHT;
    match position.turn() {
        Color::White => diff,
        Color::Black => -diff,
    }
}
