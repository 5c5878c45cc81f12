use std::process::ExitCode;

use chess_search::{uci, Engine, EngineConfig};

fn main() -> ExitCode {
    env_logger::init();

    let config = EngineConfig::from_env();
    log::debug!("starting with {config:?}");

    match uci::run_uci_loop(Engine::new(config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("protocol loop failed: {e}");
            ExitCode::FAILURE
        }
    }
}
