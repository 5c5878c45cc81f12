pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod uci;

#[cfg(test)]
mod tests;

pub use engine::{BestMove, Engine, EngineConfig, Service};
pub use error::{EngineError, EngineResult};
pub use eval::evaluate;
pub use search::{Score, MAX_VAL};
