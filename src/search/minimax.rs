//! Alpha-beta minimax over the legal move tree.

use shakmaty::{Color, Move, Position};

use super::{order_moves, NodeResult, PrincipalLine, Score, SearchState, MAX_VAL};
use crate::eval::evaluate;
use crate::rules::{outcome, GameOutcome};

/// Score of a node without legal moves.
fn terminal_score(outcome: GameOutcome) -> Score {
    match outcome {
        GameOutcome::Win(Color::White) => MAX_VAL,
        GameOutcome::Win(Color::Black) => -MAX_VAL,
        GameOutcome::Draw | GameOutcome::Ongoing => 0,
    }
}

impl SearchState {
    /// Search `remaining_ply` plies below the current position.
    ///
    /// White is the maximizing side of the evaluation. The returned line
    /// ends with `last_move`, so at the root its last element is the best
    /// move. The position and backtrack stack are unchanged on return.
    pub fn minimax(
        &mut self,
        remaining_ply: u32,
        last_move: Option<&Move>,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> NodeResult {
        if remaining_ply == 0 {
            return NodeResult {
                line: PrincipalLine::seeded(last_move),
                score: evaluate(&self.position),
            };
        }

        let mut moves = self.position.legal_moves();
        if moves.is_empty() {
            return NodeResult {
                line: PrincipalLine::seeded(last_move),
                score: terminal_score(outcome(&self.position)),
            };
        }
        order_moves(&mut moves, &self.position);

        let mut best_score = if maximizing { -MAX_VAL } else { MAX_VAL };
        let mut line = PrincipalLine::default();

        for mv in &moves {
            self.leaves_explored += 1;

            let child = {
                let mut descent = self.descend(mv);
                descent.minimax(remaining_ply - 1, Some(mv), alpha, beta, !maximizing)
            };

            let improves = if maximizing {
                child.score > best_score
            } else {
                child.score < best_score
            };
            if improves {
                best_score = child.score;
                line = child.line;
            }

            if maximizing {
                if child.score >= beta {
                    return NodeResult {
                        line: line.close(last_move),
                        score: best_score,
                    };
                }
                alpha = alpha.max(child.score);
            } else {
                if child.score <= alpha {
                    return NodeResult {
                        line: line.close(last_move),
                        score: best_score,
                    };
                }
                beta = beta.min(child.score);
            }
        }

        NodeResult {
            line: line.close(last_move),
            score: best_score,
        }
    }
}
