//! Move generation and terminal classification.
//!
//! Generators are pseudo-legal: they follow piece geometry and occupancy but
//! do not ask whether the mover's king is left in check. The `legal_*`
//! queries and `has_legal_moves` add that filter with a trial application.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attacks::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use super::{Board, Color, GameStatus, MoveList, Piece, Square};

impl Board {
    /// Pseudo-legal moves for the piece on `from`.
    ///
    /// Empty when the square is empty or holds a piece of the other side.
    #[must_use]
    pub fn generate_moves(&self, from: Square, side: Color) -> MoveList {
        let Some(placed) = self.piece_at(from).filter(|p| p.color == side) else {
            return MoveList::new();
        };
        match placed.piece {
            Piece::Pawn => self.generate_pawn_moves(from, placed),
            Piece::Knight => self.generate_knight_moves(from, side),
            Piece::Bishop => self.generate_sliding_moves(from, side, &BISHOP_DIRECTIONS),
            Piece::Rook => self.generate_sliding_moves(from, side, &ROOK_DIRECTIONS),
            Piece::Queen => self.generate_sliding_moves(from, side, &QUEEN_DIRECTIONS),
            Piece::King => self.generate_king_moves(from, side),
        }
    }

    /// Moves from `from` that survive a full trial application. These are the
    /// squares to highlight when a piece is picked up.
    #[must_use]
    pub fn legal_moves_from(&self, from: Square, side: Color) -> MoveList {
        self.generate_moves(from, side)
            .into_iter()
            .filter(|&mv| self.try_apply(mv, side).is_ok())
            .collect()
    }

    /// Every legal move for `side`.
    #[must_use]
    pub fn legal_moves(&self, side: Color) -> MoveList {
        let mut moves = MoveList::new();
        for (from, _) in self.pieces(side) {
            moves.extend(self.legal_moves_from(from, side));
        }
        moves
    }

    /// Stops at the first move that passes a trial application.
    #[must_use]
    pub fn has_legal_moves(&self, side: Color) -> bool {
        self.pieces(side).any(|(from, _)| {
            self.generate_moves(from, side)
                .into_iter()
                .any(|mv| self.try_apply(mv, side).is_ok())
        })
    }

    /// Playing while `side` has a legal move; otherwise checkmate if its king
    /// is attacked, stalemate if not.
    #[must_use]
    pub fn game_status(&self, side: Color) -> GameStatus {
        if self.has_legal_moves(side) {
            GameStatus::Playing
        } else if self.is_king_in_check(side) {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        }
    }
}
