//! Line protocol front end.
//!
//! A small UCI dialect: positions are set with `position`, searched with
//! `go depth N`, and statically scored with `eval`.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};

use shakmaty::{Chess, Color, Position};

use crate::engine::Engine;
use crate::error::{EngineError, EngineResult};
use crate::eval::EvalBreakdown;
use crate::rules::{apply_move, decode_position, parse_move};
use crate::search::{SearchInfo, SearchLogger};

pub mod command;

pub use command::{parse_uci_command, UciCommand};

/// Build the position described by the tokens following `position`.
///
/// Accepts `startpos` or `fen <fields…>`, optionally followed by
/// `moves <m1> <m2> …`.
pub fn try_parse_position_command(parts: &[&str]) -> EngineResult<Chess> {
    let moves_at = parts.iter().position(|p| *p == "moves");
    let (setup, moves) = match moves_at {
        Some(i) => (&parts[..i], &parts[i + 1..]),
        None => (parts, &parts[parts.len()..]),
    };

    let mut position = match setup.split_first() {
        Some((&"startpos", [])) => Chess::default(),
        Some((&"fen", fields)) if !fields.is_empty() => decode_position(&fields.join(" "))?,
        _ => {
            return Err(EngineError::InvalidPosition {
                notation: setup.join(" "),
                reason: "expected 'startpos' or 'fen <notation>'".to_string(),
            })
        }
    };

    for notation in moves {
        let mv = parse_move(&position, notation)?;
        position = apply_move(&position, &mv);
    }
    Ok(position)
}

/// Prints each iteration as a protocol `info` line.
///
/// Scores are reported from the point of view of `turn`, the side to move
/// at the root.
pub struct UciLogger<'a> {
    out: RefCell<&'a mut dyn Write>,
    turn: Color,
}

impl<'a> UciLogger<'a> {
    pub fn new(out: &'a mut dyn Write, turn: Color) -> Self {
        UciLogger {
            out: RefCell::new(out),
            turn,
        }
    }
}

impl SearchLogger for UciLogger<'_> {
    fn info(&self, info: &SearchInfo) {
        let score = match self.turn {
            Color::White => info.score,
            Color::Black => -info.score,
        };
        let mut out = self.out.borrow_mut();
        let written = writeln!(
            out,
            "info depth {} score cp {} nodes {} time {} pv {}",
            info.depth,
            score,
            info.leaves,
            info.elapsed.as_millis(),
            info.pv
        );
        if let Err(e) = written {
            log::warn!("failed to write search info: {e}");
        }
    }
}

/// Protocol state: the engine and the current position.
pub struct UciSession {
    engine: Engine,
    position: Chess,
}

impl UciSession {
    #[must_use]
    pub fn new(engine: Engine) -> Self {
        UciSession {
            engine,
            position: Chess::default(),
        }
    }

    #[must_use]
    pub fn position(&self) -> &Chess {
        &self.position
    }

    /// Execute one command, writing replies to `out`. Returns `false` once
    /// the session should end.
    pub fn execute(&mut self, cmd: UciCommand, out: &mut dyn Write) -> io::Result<bool> {
        match cmd {
            UciCommand::Uci => {
                writeln!(out, "id name chess_search {}", env!("CARGO_PKG_VERSION"))?;
                writeln!(out, "id author chess_search developers")?;
                writeln!(out, "uciok")?;
            }
            UciCommand::IsReady => writeln!(out, "readyok")?,
            UciCommand::UciNewGame => self.position = Chess::default(),
            UciCommand::Position(tokens) => {
                let parts: Vec<&str> = tokens.iter().map(String::as_str).collect();
                match try_parse_position_command(&parts) {
                    Ok(position) => self.position = position,
                    Err(e) => {
                        log::warn!("position rejected: {e}");
                        writeln!(out, "info string error {e}")?;
                    }
                }
            }
            UciCommand::Go(depth) => {
                let depth = depth.unwrap_or(self.engine.config().default_depth);
                self.go(depth, out)?;
            }
            UciCommand::Eval => {
                let breakdown = EvalBreakdown::of(&self.position);
                writeln!(out, "info string eval {breakdown}")?;
            }
            UciCommand::Debug(on) => {
                let config = self.engine.config().clone().with_debug(on);
                self.engine = Engine::new(config);
            }
            UciCommand::Quit => return Ok(false),
            UciCommand::Unknown(line) => log::debug!("ignoring unknown command: {line}"),
        }
        Ok(true)
    }

    fn go(&mut self, depth: u32, out: &mut dyn Write) -> io::Result<()> {
        let result = {
            let logger = UciLogger::new(&mut *out, self.position.turn());
            self.engine
                .search_position(self.position.clone(), depth, &logger)
        };
        match result {
            Ok(best) => writeln!(out, "bestmove {}", best.notation),
            Err(EngineError::NoLegalMove { outcome }) => {
                writeln!(out, "info string game over ({outcome})")?;
                writeln!(out, "bestmove (none)")
            }
            Err(e) => {
                log::warn!("search rejected: {e}");
                writeln!(out, "info string error {e}")
            }
        }
    }
}

/// Read commands from stdin until `quit` or end of input.
pub fn run_uci_loop(engine: Engine) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut session = UciSession::new(engine);

    for line in stdin.lock().lines() {
        let line = line?;
        let Some(cmd) = parse_uci_command(&line) else {
            continue;
        };
        let keep_going = session.execute(cmd, &mut stdout)?;
        stdout.flush()?;
        if !keep_going {
            break;
        }
    }
    Ok(())
}
