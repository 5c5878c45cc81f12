//! Engine facade and the request layers built on it.
//!
//! [`Engine`] turns a position notation and a depth into a move. The
//! [`Service`] wraps an engine behind a small route table so a transport
//! only has to forward method, path and body.

mod config;
mod controller;
mod protocol;
mod service;

pub use config::{EngineConfig, DEFAULT_DEPTH};
pub use controller::{BestMove, Engine};
pub use protocol::{Response, Status};
pub use service::{AnalysisRequest, MoveRequest, Service, ServiceStats, GREETING, NO_MOVE};
