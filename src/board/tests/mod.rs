//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move tree counts against published values
//! - `castling.rs` - Castling preconditions and side effects
//! - `en_passant.rs` - En passant window and capture
//! - `history.rs` - Snapshot undo through `Position`
//! - `edge_cases.rs` - Special positions and terminal states
//! - `proptest.rs` - Property-based tests

mod castling;
mod proptest;
