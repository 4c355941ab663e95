//! Fluent builder for constructing board positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings,
//! including pieces that are already flagged as moved.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(0, 4), Color::White, Piece::King)
//!     .piece(Square(7, 4), Color::Black, Piece::King)
//!     .moved_piece(Square(3, 0), Color::White, Piece::Pawn)
//!     .build();
//! assert!(board.piece_at(Square(3, 0)).unwrap().has_moved);
//! ```

use super::{Board, CastlingRights, Color, Piece, PlacedPiece, Square};

/// A fluent builder for constructing `Board` values.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, PlacedPiece)>,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        let mut builder = Self::new();
        for color in Color::BOTH {
            builder.pieces.extend(board.pieces(color));
        }
        builder.castling_rights = board.castling_rights();
        builder
    }

    /// Place an unmoved piece on the board.
    #[must_use]
    pub fn piece(self, square: Square, color: Color, piece: Piece) -> Self {
        self.placed(square, PlacedPiece::new(color, piece))
    }

    /// Place a piece that has already moved (no double push, no castling).
    #[must_use]
    pub fn moved_piece(self, square: Square, color: Color, piece: Piece) -> Self {
        self.placed(square, PlacedPiece::new(color, piece).moved())
    }

    fn placed(mut self, square: Square, placed: PlacedPiece) -> Self {
        // Remove any existing piece on this square
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, placed));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Set castling rights from a `CastlingRights` value.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Enable kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, true);
        self
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, false);
        self
    }

    /// Disable all castling rights.
    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::none();
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, placed) in self.pieces {
            board.set_piece(square, Some(placed));
        }
        board.castling_rights = self.castling_rights;
        board.en_passant_target = self.en_passant_target;
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        let built = BoardBuilder::starting_position().build();
        assert_eq!(built, Board::new());
    }

    #[test]
    fn test_two_kings() {
        let board = BoardBuilder::new()
            .piece(Square(0, 4), Color::White, Piece::King)
            .piece(Square(7, 4), Color::Black, Piece::King)
            .build();

        assert!(board.piece_at(Square(0, 4)).is_some());
        assert!(board.piece_at(Square(7, 4)).is_some());
        assert!(board.piece_at(Square(0, 0)).is_none());
        assert!(board.castling_rights().is_empty());
    }

    #[test]
    fn test_castling_rights() {
        let board = BoardBuilder::starting_position()
            .no_castling_rights()
            .castle_kingside(Color::White)
            .build();

        let rights = board.castling_rights();
        assert!(rights.has(Color::White, true));
        assert!(!rights.has(Color::White, false));
        assert!(!rights.has(Color::Black, true));
        assert!(!rights.has(Color::Black, false));
    }

    #[test]
    fn test_later_piece_replaces_earlier() {
        let board = BoardBuilder::new()
            .piece(Square(3, 3), Color::White, Piece::Knight)
            .moved_piece(Square(3, 3), Color::Black, Piece::Bishop)
            .build();

        let placed = board.piece_at(Square(3, 3)).unwrap();
        assert!(placed.is(Color::Black, Piece::Bishop));
        assert!(placed.has_moved);
    }

    #[test]
    fn test_clear_square() {
        let board = BoardBuilder::starting_position()
            .clear(Square(0, 0))
            .build();

        assert!(board.piece_at(Square(0, 0)).is_none());
        assert!(board.piece_at(Square(0, 1)).is_some());
    }
}
