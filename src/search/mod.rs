//! Search module implementing alpha-beta minimax with iterative deepening.
//!
//! Features:
//! - Iterative deepening from depth 1 to the requested depth
//! - Fail-soft alpha-beta minimax with explicit maximizing/minimizing nodes
//! - Move ordering (captures, centre, opening development)
//! - Guarded backtracking: every descent restores the position on drop

mod constants;
mod iterative;
pub mod log;
mod minimax;
pub mod move_order;

use std::ops::{Deref, DerefMut};

use shakmaty::{Chess, Move, Position};

use crate::rules::move_notation;

pub use constants::MAX_VAL;
pub use log::{LogLogger, NullLogger, SearchInfo, SearchLogger};
pub use move_order::{order_moves, priority};

/// Signed evaluation in centipawns, white-positive.
pub type Score = i32;

/// Best continuation found at a node, deepest move first.
///
/// The last element is the move to play at the node the line was returned
/// from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrincipalLine {
    moves: Vec<Move>,
}

impl PrincipalLine {
    fn seeded(last_move: Option<&Move>) -> Self {
        PrincipalLine::default().close(last_move)
    }

    /// Append the move that led into the node returning this line.
    fn close(mut self, entering: Option<&Move>) -> Self {
        if let Some(mv) = entering {
            self.moves.push(mv.clone());
        }
        self
    }

    /// Move to play now, if any was selected.
    #[must_use]
    pub fn best_move(&self) -> Option<&Move> {
        self.moves.last()
    }

    /// Moves in recording order (deepest first).
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Moves in playing order (root move first).
    pub fn from_root(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter().rev()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Space-separated UCI moves in playing order.
    #[must_use]
    pub fn to_uci_string(&self) -> String {
        self.from_root()
            .map(move_notation)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Line and score returned by one minimax node.
#[derive(Debug, Clone)]
pub struct NodeResult {
    pub line: PrincipalLine,
    pub score: Score,
}

/// Result of a complete iterative-deepening search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Move to play
    pub best_move: Move,
    /// Principal line of the deepest iteration
    pub line: PrincipalLine,
    /// Score of the deepest iteration
    pub score: Score,
    /// Deepest completed iteration
    pub depth: u32,
    /// True when no root move was selected and the first legal move was used
    pub fallback: bool,
}

/// Transient state owned by one search call.
///
/// Holds the position being searched, the stack of positions saved on the
/// way down, and the count of explored children.
pub struct SearchState {
    position: Chess,
    stack: Vec<Chess>,
    leaves_explored: u64,
}

impl SearchState {
    #[must_use]
    pub fn new(position: Chess) -> Self {
        SearchState {
            position,
            stack: Vec::with_capacity(16),
            leaves_explored: 0,
        }
    }

    #[must_use]
    pub fn position(&self) -> &Chess {
        &self.position
    }

    /// Number of positions currently saved for backtracking.
    #[must_use]
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    /// Children explored so far.
    #[must_use]
    pub fn leaves_explored(&self) -> u64 {
        self.leaves_explored
    }

    /// Read the leaf counter and reset it to zero.
    pub fn take_leaves(&mut self) -> u64 {
        std::mem::take(&mut self.leaves_explored)
    }

    /// Save the current position and play `mv`. The returned guard restores
    /// the saved position when dropped.
    fn descend(&mut self, mv: &Move) -> Descent<'_> {
        self.stack.push(self.position.clone());
        self.position.play_unchecked(mv);
        Descent {
            restore_to: self.stack.len() - 1,
            state: self,
        }
    }
}

/// Scoped descent into a child position.
struct Descent<'a> {
    state: &'a mut SearchState,
    restore_to: usize,
}

impl Deref for Descent<'_> {
    type Target = SearchState;

    fn deref(&self) -> &SearchState {
        self.state
    }
}

impl DerefMut for Descent<'_> {
    fn deref_mut(&mut self) -> &mut SearchState {
        self.state
    }
}

impl Drop for Descent<'_> {
    fn drop(&mut self) {
        let Some(saved) = self.state.stack.pop() else {
            unreachable!("backtrack stack underflow");
        };
        self.state.position = saved;
        debug_assert_eq!(
            self.state.stack.len(),
            self.restore_to,
            "backtrack stack out of step"
        );
    }
}
