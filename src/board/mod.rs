//! Chess board representation and rules.
//!
//! The board is an 8x8 grid of optional pieces. Each piece remembers whether
//! it has moved, which drives pawn double pushes and castling. Moves are
//! validated by applying them to a copy, so a rejected move never touches the
//! caller's board.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color, GameStatus};
//!
//! let mut board = Board::new();
//! assert_eq!(board.legal_moves(Color::White).len(), 20);
//! assert!(board.apply_move("e2e4".parse().unwrap(), Color::White));
//! assert_eq!(board.game_status(Color::Black), GameStatus::Playing);
//! ```

mod attacks;
mod builder;
mod error;
mod fen;
mod history;
mod make_move;
mod movegen;
mod perft;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{FenError, IllegalMove, MoveParseError, PlayError, SquareError};
pub use history::{Position, Snapshot};
pub use state::Board;
pub use types::{CastlingRights, Color, GameStatus, Move, MoveList, Piece, PlacedPiece, Square};
