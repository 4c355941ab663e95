use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use log::warn;

use super::{CastlingRights, Color, Piece, PlacedPiece, Square};

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// The 8x8 grid plus the special-rule flags.
///
/// `Board` is a plain value: copying it is how moves are tried without
/// touching the caller's position. Side to move is not part of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) squares: [[Option<PlacedPiece>; 8]; 8], // [rank][file]
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// The standard starting arrangement with all castling rights.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, &piece) in BACK_RANK.iter().enumerate() {
            board.put(Square(0, file), Color::White, piece);
            board.put(Square(7, file), Color::Black, piece);
            board.put(Square(1, file), Color::White, Piece::Pawn);
            board.put(Square(6, file), Color::Black, Piece::Pawn);
        }
        board.castling_rights = CastlingRights::all();
        board
    }

    /// A board with no pieces, no castling rights and no en passant target.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
        }
    }

    /// The piece on `square`. Off-board squares read as empty.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<PlacedPiece> {
        self.squares
            .get(square.rank())
            .and_then(|rank| rank.get(square.file()))
            .copied()
            .flatten()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Overwrite `square` unconditionally. Writes outside the board are dropped.
    pub fn set_piece(&mut self, square: Square, piece: Option<PlacedPiece>) {
        match self
            .squares
            .get_mut(square.rank())
            .and_then(|rank| rank.get_mut(square.file()))
        {
            Some(cell) => *cell = piece,
            None => warn!("ignoring write to off-board square {square}"),
        }
    }

    /// Place an unmoved piece.
    #[inline]
    pub fn put(&mut self, square: Square, color: Color, piece: Piece) {
        self.set_piece(square, Some(PlacedPiece::new(color, piece)));
    }

    #[inline]
    pub fn clear(&mut self, square: Square) {
        self.set_piece(square, None);
    }

    /// Relocate whatever stands on `from` to `to`, flag it as moved and empty `from`.
    ///
    /// No validation; whatever was on `to` is overwritten.
    pub fn move_raw(&mut self, from: Square, to: Square) {
        let moving = self.piece_at(from).map(PlacedPiece::moved);
        self.clear(from);
        self.set_piece(to, moving);
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.castling_rights = rights;
    }

    /// The square a pawn skipped on the last double push, if any.
    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn set_en_passant_target(&mut self, target: Option<Square>) {
        self.en_passant_target = target;
    }

    /// All pieces of `color`, in a1..h8 order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, PlacedPiece)> + '_ {
        Square::all().filter_map(move |sq| {
            self.piece_at(sq)
                .filter(|p| p.color == color)
                .map(|p| (sq, p))
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = self.piece_at(Square(rank, file)).map_or('.', PlacedPiece::fen_char);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
