//! Move suggestion from outside the rules core.
//!
//! A suggester receives a position as FEN and answers with one move. The rules
//! core never trusts the answer: callers play it through `Game::play`, which
//! rejects anything illegal.
//!
//! Implementations:
//! - [`UciEngine`] drives an external UCI engine over piped stdio.
//! - [`RandomMover`] picks a uniformly random legal move in process.
//! - [`BackgroundSuggester`] runs either of them on a worker thread.

mod background;
mod config;
mod random;
mod uci_client;

use std::fmt;
use std::io;

use crate::board::{FenError, Move, MoveParseError};

pub use background::{BackgroundSuggester, PendingSuggestion};
pub use config::EngineConfig;
pub use random::RandomMover;
pub use uci_client::{parse_bestmove_line, UciEngine};

/// Anything that can propose a move for a FEN position.
pub trait MoveSuggester {
    /// Suggest a move for the side to move in `fen`.
    fn suggest(&mut self, fen: &str) -> Result<Move, EngineError>;

    /// Human readable name (for logging/debugging)
    fn name(&self) -> &str;
}

impl<T: MoveSuggester + ?Sized> MoveSuggester for Box<T> {
    fn suggest(&mut self, fen: &str) -> Result<Move, EngineError> {
        (**self).suggest(fen)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Error type for move suggestion
#[derive(Debug)]
pub enum EngineError {
    /// Spawning or talking to the engine process failed
    Io(io::Error),
    /// The engine said something we did not expect
    Protocol(String),
    /// The engine closed its output or the worker went away
    Closed,
    /// The position has no move to suggest
    NoMove,
    /// The suggested move text could not be parsed
    InvalidMove { text: String, error: MoveParseError },
    /// The position handed to the suggester was not valid FEN
    InvalidFen(FenError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Io(e) => write!(f, "engine I/O error: {e}"),
            EngineError::Protocol(line) => write!(f, "unexpected engine output: {line}"),
            EngineError::Closed => write!(f, "engine closed"),
            EngineError::NoMove => write!(f, "engine has no move"),
            EngineError::InvalidMove { text, error } => {
                write!(f, "invalid engine move '{text}': {error}")
            }
            EngineError::InvalidFen(e) => write!(f, "invalid FEN: {e}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Io(e) => Some(e),
            EngineError::InvalidMove { error, .. } => Some(error),
            EngineError::InvalidFen(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for EngineError {
    fn from(e: io::Error) -> Self {
        EngineError::Io(e)
    }
}

impl From<FenError> for EngineError {
    fn from(e: FenError) -> Self {
        EngineError::InvalidFen(e)
    }
}
