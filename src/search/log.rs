//! Per-iteration search reporting.

use std::time::Duration;

/// Summary of one completed iterative-deepening iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchInfo {
    pub depth: u32,
    pub score: i32,
    pub leaves: u64,
    pub elapsed: Duration,
    /// Principal variation in UCI notation, root move first
    pub pv: String,
}

pub trait SearchLogger {
    fn info(&self, info: &SearchInfo);
}

/// Reports iterations through the `log` facade at debug level.
pub struct LogLogger;

impl SearchLogger for LogLogger {
    fn info(&self, info: &SearchInfo) {
        log::debug!(
            "depth {} score {} leaves {} time {}ms pv {}",
            info.depth,
            info.score,
            info.leaves,
            info.elapsed.as_millis(),
            info.pv
        );
    }
}

/// Discards all reports.
pub struct NullLogger;

impl SearchLogger for NullLogger {
    fn info(&self, _info: &SearchInfo) {}
}
