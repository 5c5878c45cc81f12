//! Route table over an [`Engine`].
//!
//! Requests arrive as method, path and body; responses carry a [`Status`]
//! and a plain-text body. Bodies are JSON and decoded with `serde_json`.

use parking_lot::Mutex;
use serde::Deserialize;

use super::{Engine, Response, Status};
use crate::error::{EngineError, EngineResult};

/// Body of `GET /`.
pub const GREETING: &str = "engine controller says hello!";

/// Body of `POST /info` when the position has no legal move.
pub const NO_MOVE: &str = "(none)";

/// `POST /info` payload.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MoveRequest {
    pub depth: i64,
    #[serde(alias = "positionNotation")]
    pub fen: String,
}

/// `POST /analysis` payload.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub content: Vec<String>,
}

/// Counters kept across requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceStats {
    /// Requests answered with 200
    pub served: u64,
    /// Requests answered with any other status
    pub rejected: u64,
    /// Accepted analysis submissions
    pub analyses: u64,
}

/// Request handler safe to share between threads.
pub struct Service {
    engine: Engine,
    stats: Mutex<ServiceStats>,
}

impl Service {
    #[must_use]
    pub fn new(engine: Engine) -> Self {
        Service {
            engine,
            stats: Mutex::new(ServiceStats::default()),
        }
    }

    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    #[must_use]
    pub fn stats(&self) -> ServiceStats {
        *self.stats.lock()
    }

    /// Route one request.
    pub fn handle(&self, method: &str, path: &str, body: &str) -> Response {
        let method = method.to_ascii_uppercase();
        let response = match (path, method.as_str()) {
            ("/", "GET" | "POST") => Response::ok(GREETING),
            ("/info", "POST") => self.info(body),
            ("/analysis", "POST") => self.analysis(body),
            ("/info" | "/analysis", _) => {
                Response::error(Status::MethodNotAllowed, format!("{method} not allowed on {path}"))
            }
            _ => Response::error(Status::NotFound, format!("no route for {path}")),
        };

        let mut stats = self.stats.lock();
        if response.status.is_success() {
            stats.served += 1;
        } else {
            stats.rejected += 1;
        }
        response
    }

    fn info(&self, body: &str) -> Response {
        let request: MoveRequest = match serde_json::from_str(body) {
            Ok(request) => request,
            Err(e) => return reject(&format!("malformed move request: {e}")),
        };

        match self.best_move(&request) {
            Ok(notation) => Response::ok(notation),
            Err(EngineError::NoLegalMove { outcome }) => {
                log::info!("no move for {} ({outcome})", request.fen);
                Response::ok(NO_MOVE)
            }
            Err(e) => reject(&e.to_string()),
        }
    }

    fn best_move(&self, request: &MoveRequest) -> EngineResult<String> {
        let depth = u32::try_from(request.depth)
            .ok()
            .filter(|&d| d > 0)
            .ok_or(EngineError::InvalidDepth {
                depth: request.depth,
            })?;
        self.engine
            .best_move(&request.fen, depth)
            .map(|best| best.notation)
    }

    fn analysis(&self, body: &str) -> Response {
        let request: AnalysisRequest = match serde_json::from_str(body) {
            Ok(request) => request,
            Err(e) => return reject(&format!("malformed analysis request: {e}")),
        };

        for line in &request.content {
            log::info!("analysis: {line}");
        }
        self.stats.lock().analyses += 1;
        Response::ok("")
    }
}

fn reject(reason: &str) -> Response {
    log::warn!("rejected request: {reason}");
    Response::error(Status::BadRequest, reason)
}
