//! Engine facade: parse a position, drive the search, report the result.

use std::time::{Duration, Instant};

use shakmaty::{Chess, Color, Position};

use super::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::eval::evaluate;
use crate::rules::{decode_position, encode_position, move_notation};
use crate::search::{LogLogger, Score, SearchLogger, SearchState};

/// Outcome of a best-move request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestMove {
    /// Chosen move in UCI notation
    pub notation: String,
    /// Score of the deepest iteration, white-positive
    pub score: Score,
    /// Children explored across all iterations
    pub leaves: u64,
    pub elapsed: Duration,
    /// Principal variation in UCI notation, root move first
    pub principal_variation: Vec<String>,
    /// True when the first legal move was used because no move was selected
    pub fallback: bool,
}

/// Stateless engine facade. Every call builds its own search state, so one
/// `Engine` can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Engine { config }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Best move for the side to move in `notation`, searched to `depth`.
    pub fn best_move(&self, notation: &str, depth: u32) -> EngineResult<BestMove> {
        self.best_move_with_logger(notation, depth, &LogLogger)
    }

    /// Like [`Engine::best_move`], reporting each iteration to `logger`.
    pub fn best_move_with_logger(
        &self,
        notation: &str,
        depth: u32,
        logger: &dyn SearchLogger,
    ) -> EngineResult<BestMove> {
        let position = decode_position(notation)?;
        self.search_position(position, depth, logger)
    }

    /// Search an already decoded position.
    pub fn search_position(
        &self,
        position: Chess,
        depth: u32,
        logger: &dyn SearchLogger,
    ) -> EngineResult<BestMove> {
        if depth == 0 {
            return Err(EngineError::InvalidDepth { depth: 0 });
        }

        let start = Instant::now();
        let static_eval = evaluate(&position);
        let maximizing = position.turn() == Color::White;

        let mut state = SearchState::new(position);
        let result = state.search(depth, maximizing, logger)?;

        let notation = move_notation(&result.best_move);
        let principal_variation = if result.fallback {
            vec![notation.clone()]
        } else {
            result.line.from_root().map(move_notation).collect()
        };

        let best = BestMove {
            notation,
            score: result.score,
            leaves: state.take_leaves(),
            elapsed: start.elapsed(),
            principal_variation,
            fallback: result.fallback,
        };

        if self.config.debug {
            log::info!(
                "depth {} move {} leaves {} score {} eval {} fen {} time {:?}",
                depth,
                best.notation,
                best.leaves,
                best.score,
                static_eval,
                encode_position(state.position()),
                best.elapsed
            );
        } else {
            log::debug!(
                "depth {} move {} leaves {} score {}",
                depth,
                best.notation,
                best.leaves,
                best.score
            );
        }

        Ok(best)
    }

    /// Static evaluation of `notation`, white-positive.
    pub fn evaluate(&self, notation: &str) -> EngineResult<Score> {
        decode_position(notation).map(|position| evaluate(&position))
    }
}
