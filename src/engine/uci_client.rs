//! Client side of the UCI protocol: we are the GUI, the child is the engine.

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use super::{EngineConfig, EngineError, MoveSuggester};
use crate::board::Move;

/// Poll interval while waiting for the engine to exit
const EXIT_POLL_MS: u64 = 10;

/// A running UCI engine process.
///
/// The process is shut down on drop: `quit`, a grace period, then kill.
pub struct UciEngine {
    config: EngineConfig,
    name: String,
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
    closed: bool,
}

impl UciEngine {
    /// Spawn the engine and wait until it reports `readyok`.
    pub fn spawn(config: EngineConfig) -> Result<Self, EngineError> {
        let mut child = Command::new(&config.program)
            .args(&config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        let (Some(stdin), Some(stdout)) = (child.stdin.take(), child.stdout.take()) else {
            let _ = child.kill();
            let _ = child.wait();
            return Err(EngineError::Protocol("engine stdio not captured".to_string()));
        };

        let mut engine = UciEngine {
            name: config.program.display().to_string(),
            config,
            child,
            stdin,
            stdout: BufReader::new(stdout),
            closed: false,
        };
        engine.handshake()?;
        info!("engine '{}' ready", engine.name);
        Ok(engine)
    }

    fn handshake(&mut self) -> Result<(), EngineError> {
        self.send("uci")?;
        self.send("isready")?;
        loop {
            let line = self.read_line()?;
            if let Some(name) = line.strip_prefix("id name ") {
                self.name = name.trim().to_string();
            } else if line.trim() == "readyok" {
                return Ok(());
            }
        }
    }

    fn send(&mut self, command: &str) -> Result<(), EngineError> {
        debug!("> {command}");
        writeln!(self.stdin, "{command}")?;
        self.stdin.flush()?;
        Ok(())
    }

    /// Next line from the engine without its line terminator.
    fn read_line(&mut self) -> Result<String, EngineError> {
        let mut line = String::new();
        if self.stdout.read_line(&mut line)? == 0 {
            return Err(EngineError::Closed);
        }
        let line = line.trim_end_matches(['\r', '\n']).to_string();
        debug!("< {line}");
        Ok(line)
    }

    /// Ask for a move in `fen`, thinking for the configured `movetime_ms`.
    pub fn best_move(&mut self, fen: &str) -> Result<Move, EngineError> {
        if self.closed {
            return Err(EngineError::Closed);
        }
        self.send(&format!("position fen {fen}"))?;
        self.send(&format!("go movetime {}", self.config.movetime_ms))?;
        loop {
            let line = self.read_line()?;
            if line.starts_with("bestmove") {
                return parse_bestmove_line(&line);
            }
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Send `quit`, wait up to the grace period, then kill the process.
    pub fn shutdown(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;

        if let Err(e) = self.send("quit") {
            debug!("quit not delivered: {e}");
        }

        let deadline = Instant::now() + self.config.shutdown_grace();
        loop {
            match self.child.try_wait() {
                Ok(Some(status)) => {
                    info!("engine '{}' exited with {status}", self.name);
                    return;
                }
                Ok(None) if Instant::now() < deadline => {
                    thread::sleep(Duration::from_millis(EXIT_POLL_MS));
                }
                Ok(None) => break,
                Err(e) => {
                    warn!("waiting for engine '{}' failed: {e}", self.name);
                    break;
                }
            }
        }

        warn!("engine '{}' ignored quit, killing it", self.name);
        if let Err(e) = self.child.kill() {
            warn!("kill failed: {e}");
        }
        let _ = self.child.wait();
    }
}

impl MoveSuggester for UciEngine {
    fn suggest(&mut self, fen: &str) -> Result<Move, EngineError> {
        self.best_move(fen)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for UciEngine {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Parse a `bestmove <move> [ponder <move>]` line.
///
/// `(none)` and the null move `0000` mean the engine has nothing to play.
pub fn parse_bestmove_line(line: &str) -> Result<Move, EngineError> {
    let mut tokens = line.split_whitespace();
    if tokens.next() != Some("bestmove") {
        return Err(EngineError::Protocol(line.to_string()));
    }
    match tokens.next() {
        None => Err(EngineError::Protocol(line.to_string())),
        Some("(none)" | "0000") => Err(EngineError::NoMove),
        Some(text) => text.parse().map_err(|error| EngineError::InvalidMove {
            text: text.to_string(),
            error,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{MoveParseError, Piece, Square};

    #[test]
    fn parses_plain_and_ponder_lines() {
        let mv = parse_bestmove_line("bestmove e2e4").unwrap();
        assert_eq!(mv, Move::new(Square(1, 4), Square(3, 4)));

        let mv = parse_bestmove_line("bestmove g1f3 ponder d7d5").unwrap();
        assert_eq!(mv.to_string(), "g1f3");
    }

    #[test]
    fn parses_promotion() {
        let mv = parse_bestmove_line("bestmove a7a8n").unwrap();
        assert_eq!(mv.promotion(), Some(Piece::Knight));
    }

    #[test]
    fn no_move_answers() {
        assert!(matches!(
            parse_bestmove_line("bestmove (none)"),
            Err(EngineError::NoMove)
        ));
        assert!(matches!(
            parse_bestmove_line("bestmove 0000"),
            Err(EngineError::NoMove)
        ));
    }

    #[test]
    fn malformed_lines() {
        assert!(matches!(
            parse_bestmove_line("bestmove"),
            Err(EngineError::Protocol(_))
        ));
        assert!(matches!(
            parse_bestmove_line("info depth 3"),
            Err(EngineError::Protocol(_))
        ));
        assert!(matches!(
            parse_bestmove_line("bestmove e2e9"),
            Err(EngineError::InvalidMove {
                error: MoveParseError::InvalidSquare { .. },
                ..
            })
        ));
    }

    #[test]
    fn missing_program_fails_to_spawn() {
        let config = EngineConfig::new("/nonexistent/engine-binary");
        assert!(matches!(UciEngine::spawn(config), Err(EngineError::Io(_))));
    }
}
