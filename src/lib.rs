//! Chess rules core with an undo history, FEN export and pluggable move
//! suggestion.
//!
//! - [`board`]: pieces, the 8x8 board, move legality, move generation,
//!   terminal detection and FEN.
//! - [`game`]: a session pairing a position with the side to move.
//! - [`engine`]: collaborators that propose moves (external UCI engine,
//!   random mover, background worker).

pub mod board;
pub mod engine;
pub mod game;

pub use board::{Board, Color, GameStatus, Move, Piece, Square};
pub use game::Game;
