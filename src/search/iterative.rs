use std::time::Instant;

use shakmaty::Position;

use super::{NodeResult, SearchInfo, SearchLogger, SearchResult, SearchState, MAX_VAL};
use crate::error::{EngineError, EngineResult};
use crate::rules::{encode_position, move_notation, outcome};

impl SearchState {
    /// Iterative deepening: full-window searches of depth 1..=`max_depth`,
    /// keeping the deepest result.
    pub fn search(
        &mut self,
        max_depth: u32,
        maximizing: bool,
        logger: &dyn SearchLogger,
    ) -> EngineResult<SearchResult> {
        if max_depth == 0 {
            return Err(EngineError::InvalidDepth { depth: 0 });
        }

        let Some(first_legal) = self.position.legal_moves().first().cloned() else {
            return Err(EngineError::NoLegalMove {
                outcome: outcome(&self.position),
            });
        };

        let start = Instant::now();
        let mut node = self.iterate(1, maximizing, start, logger);
        for depth in 2..=max_depth {
            node = self.iterate(depth, maximizing, start, logger);
        }

        let (best_move, fallback) = match node.line.best_move() {
            Some(mv) => (mv.clone(), false),
            None => {
                log::warn!(
                    "no root move selected for {}, falling back to {}",
                    encode_position(&self.position),
                    move_notation(&first_legal)
                );
                (first_legal, true)
            }
        };

        Ok(SearchResult {
            best_move,
            line: node.line,
            score: node.score,
            depth: max_depth,
            fallback,
        })
    }

    fn iterate(
        &mut self,
        depth: u32,
        maximizing: bool,
        start: Instant,
        logger: &dyn SearchLogger,
    ) -> NodeResult {
        let node = self.minimax(depth, None, -MAX_VAL, MAX_VAL, maximizing);
        logger.info(&SearchInfo {
            depth,
            score: node.score,
            leaves: self.leaves_explored,
            elapsed: start.elapsed(),
            pv: node.line.to_uci_string(),
        });
        node
    }
}
