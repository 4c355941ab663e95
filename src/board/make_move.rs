//! Move validation and application.
//!
//! `apply_in_place` validates and mutates in one pass, so a rejected move may
//! leave the board half-changed. Every public entry point therefore works on a
//! copy and only hands it back once the whole move has been accepted.

use log::{debug, trace};

use super::{Board, Color, IllegalMove, Move, Piece, PlacedPiece, Square};

impl Board {
    /// The precondition every other check builds on.
    ///
    /// Rejects null moves, off-board squares, an empty source, a source piece of
    /// the wrong color and a destination holding a friendly piece.
    #[must_use]
    pub fn is_move_legal_basic(&self, mv: Move, side: Color) -> bool {
        if mv.from() == mv.to() || !mv.from().is_on_board() || !mv.to().is_on_board() {
            return false;
        }
        let Some(moving) = self.piece_at(mv.from()) else {
            return false;
        };
        if moving.color != side {
            return false;
        }
        !self.piece_at(mv.to()).is_some_and(|target| target.color == side)
    }

    /// Apply `mv` for `side` to a copy of this board.
    ///
    /// On success the copy reflects every side effect of the move: capture,
    /// en passant removal, rook relocation, promotion and flag updates.
    pub fn try_apply(&self, mv: Move, side: Color) -> Result<Board, IllegalMove> {
        let mut next = *self;
        if next.apply_in_place(mv, side) {
            Ok(next)
        } else {
            trace!("rejected {mv} for {side}");
            Err(IllegalMove { mv })
        }
    }

    /// Apply `mv` for `side`. Either the move applies completely and `true` is
    /// returned, or the board is left untouched and `false` is returned.
    pub fn apply_move(&mut self, mv: Move, side: Color) -> bool {
        match self.try_apply(mv, side) {
            Ok(next) => {
                *self = next;
                true
            }
            Err(_) => false,
        }
    }

    fn apply_in_place(&mut self, mv: Move, side: Color) -> bool {
        if !self.is_move_legal_basic(mv, side) {
            return false;
        }
        let Some(moving) = self.piece_at(mv.from()) else {
            return false;
        };
        let (d_rank, d_file) = (mv.rank_delta(), mv.file_delta());
        let (abs_rank, abs_file) = (d_rank.abs(), d_file.abs());

        let geometry_ok = match moving.piece {
            Piece::Pawn => self.prepare_pawn_move(moving, mv),
            Piece::King => self.prepare_king_move(moving, mv),
            Piece::Knight => matches!((abs_rank, abs_file), (1, 2) | (2, 1)),
            Piece::Bishop => abs_rank == abs_file,
            Piece::Rook => d_rank == 0 || d_file == 0,
            Piece::Queen => d_rank == 0 || d_file == 0 || abs_rank == abs_file,
        };
        if !geometry_ok {
            return false;
        }
        if moving.piece.is_slider() && !self.path_is_clear(mv.from(), mv.to()) {
            return false;
        }

        let promotes =
            moving.piece == Piece::Pawn && mv.to().rank() == moving.color.pawn_promotion_rank();
        let promoted_to = match mv.promotion() {
            _ if !promotes => None,
            None => Some(Piece::Queen),
            Some(choice) if choice.is_promotion_choice() => Some(choice),
            Some(_) => return false,
        };

        // The target lives exactly one move; only a fresh double push keeps it.
        if !(moving.piece == Piece::Pawn && abs_rank == 2) {
            self.en_passant_target = None;
        }

        self.move_raw(mv.from(), mv.to());

        if let Some(piece) = promoted_to {
            self.set_piece(
                mv.to(),
                Some(PlacedPiece {
                    piece,
                    ..moving.moved()
                }),
            );
        }

        match moving.piece {
            Piece::King => self.castling_rights.remove_both(moving.color),
            Piece::Rook => self.castling_rights.remove_corner(mv.from()),
            _ => {}
        }
        // A rook captured on its corner takes that right with it.
        self.castling_rights.remove_corner(mv.to());

        !self.is_king_in_check(side)
    }

    /// Pawn geometry. Sets the en passant target on a double push and removes
    /// the bypassed pawn on an en passant capture.
    fn prepare_pawn_move(&mut self, pawn: PlacedPiece, mv: Move) -> bool {
        let dir = pawn.color.pawn_direction();
        let (d_rank, d_file) = (mv.rank_delta(), mv.file_delta());
        let target = self.piece_at(mv.to());

        if d_file == 0 {
            if target.is_some() {
                return false;
            }
            if d_rank == dir {
                return true;
            }
            if d_rank == 2 * dir && !pawn.has_moved {
                let Some(skipped) = mv.from().offset(dir, 0) else {
                    return false;
                };
                if !self.is_empty(skipped) {
                    return false;
                }
                self.en_passant_target = Some(skipped);
                return true;
            }
            return false;
        }

        if d_file.abs() == 1 && d_rank == dir {
            if target.is_some_and(|t| t.color != pawn.color) {
                return true;
            }
            if target.is_none() && self.en_passant_target == Some(mv.to()) {
                // The captured pawn sits beside the source, on the destination's file.
                let bypassed = Square(mv.from().rank(), mv.to().file());
                if !self
                    .piece_at(bypassed)
                    .is_some_and(|p| p.is(pawn.color.opponent(), Piece::Pawn))
                {
                    return false;
                }
                self.clear(bypassed);
                return true;
            }
        }

        false
    }

    fn prepare_king_move(&mut self, king: PlacedPiece, mv: Move) -> bool {
        let (d_rank, d_file) = (mv.rank_delta(), mv.file_delta());
        if d_rank == 0 && d_file.abs() == 2 {
            return self.prepare_castle(king, mv, d_file > 0);
        }
        d_rank.abs() <= 1 && d_file.abs() <= 1
    }

    /// Castling preconditions; relocates the rook when they all hold.
    fn prepare_castle(&mut self, king: PlacedPiece, mv: Move, kingside: bool) -> bool {
        let color = king.color;
        let home = Square(color.back_rank(), 4);
        if king.has_moved || mv.from() != home {
            return false;
        }
        if self.is_king_in_check(color) {
            return false;
        }

        let rank = home.rank();
        let (rook_file, rook_dest_file) = if kingside { (7, 5) } else { (0, 3) };
        let rook_from = Square(rank, rook_file);
        if !self
            .piece_at(rook_from)
            .is_some_and(|r| r.is(color, Piece::Rook) && !r.has_moved)
        {
            return false;
        }

        let (low, high) = if kingside {
            (home.file() + 1, rook_file)
        } else {
            (rook_file + 1, home.file())
        };
        if (low..high).any(|file| !self.is_empty(Square(rank, file))) {
            return false;
        }

        // Every square the king crosses or lands on must be safe.
        let step: isize = if kingside { 1 } else { -1 };
        let transit_attacked = (1..=2).any(|n| {
            home.offset(0, step * n)
                .map_or(true, |sq| self.is_square_attacked(sq, color.opponent()))
        });
        if transit_attacked {
            return false;
        }

        self.move_raw(rook_from, Square(rank, rook_dest_file));
        debug!(
            "{color} castles {}",
            if kingside { "kingside" } else { "queenside" }
        );
        true
    }

    /// True when every square strictly between `from` and `to` is empty.
    ///
    /// Only meaningful for straight or diagonal lines.
    fn path_is_clear(&self, from: Square, to: Square) -> bool {
        let d_rank = (to.rank() as isize - from.rank() as isize).signum();
        let d_file = (to.file() as isize - from.file() as isize).signum();
        let mut current = from.offset(d_rank, d_file);
        while let Some(sq) = current {
            if sq == to {
                return true;
            }
            if !self.is_empty(sq) {
                return false;
            }
            current = sq.offset(d_rank, d_file);
        }
        false
    }
}
