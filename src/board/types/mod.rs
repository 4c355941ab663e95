//! Core chess types.
//!
//! This module contains the value types shared by the board and the rules:
//! - `Piece`, `Color` and `PlacedPiece` - piece kinds, colors and occupied squares
//! - `Square` - (rank, file) board coordinate
//! - `Move` and `MoveList` - move requests and generator output
//! - `CastlingRights` - castling flags
//! - `GameStatus` - terminal classification

mod castling;
mod moves;
mod piece;
mod square;
mod status;

pub use castling::CastlingRights;
pub use moves::{Move, MoveList};
pub use piece::{Color, Piece, PlacedPiece};
pub use square::Square;
pub use status::GameStatus;

pub(crate) use castling::corner_right;
