//! Engine configuration.

use std::env;

/// Search depth used when a caller does not ask for one.
pub const DEFAULT_DEPTH: u32 = 5;

/// Explicit engine configuration, passed to [`Engine::new`](super::Engine::new).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Emit a diagnostic report for every search at info level
    pub debug: bool,
    /// Depth for searches that do not specify one
    pub default_depth: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            debug: false,
            default_depth: DEFAULT_DEPTH,
        }
    }
}

impl EngineConfig {
    /// Read `DEBUG` (any non-empty value enables it) and `SEARCH_DEPTH`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("DEBUG").ok().as_deref(),
            env::var("SEARCH_DEPTH").ok().as_deref(),
        )
    }

    /// Build a config from raw variable values. Unparseable or zero depths
    /// fall back to [`DEFAULT_DEPTH`].
    #[must_use]
    pub fn from_vars(debug: Option<&str>, depth: Option<&str>) -> Self {
        let default_depth = depth
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|&d| d > 0)
            .unwrap_or(DEFAULT_DEPTH);
        EngineConfig {
            debug: debug.is_some_and(|v| !v.is_empty()),
            default_depth,
        }
    }

    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[must_use]
    pub fn with_default_depth(mut self, depth: u32) -> Self {
        self.default_depth = depth.max(1);
        self
    }
}
