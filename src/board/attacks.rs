//! Attack and check detection.
//!
//! Everything here scans the grid directly from the target square outwards;
//! there are no precomputed tables.

use super::{Board, Color, Piece, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Board {
    /// Does `attacker` attack `square`?
    ///
    /// Always pass the attacking color: a king's safety is asked with the
    /// opponent's color.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        self.attacked_by_pawn(square, attacker)
            || self.attacked_by_leaper(square, attacker, &KNIGHT_OFFSETS, Piece::Knight)
            || self.attacked_by_leaper(square, attacker, &KING_OFFSETS, Piece::King)
            || self.attacked_along(square, attacker, &ROOK_DIRECTIONS, Piece::attacks_straight)
            || self.attacked_along(square, attacker, &BISHOP_DIRECTIONS, Piece::attacks_diagonally)
    }

    fn attacked_by_pawn(&self, square: Square, attacker: Color) -> bool {
        // An attacking pawn stands one step behind the target, seen from its own side.
        let back = -attacker.pawn_direction();
        [-1, 1].into_iter().any(|d_file| {
            square
                .offset(back, d_file)
                .and_then(|from| self.piece_at(from))
                .is_some_and(|p| p.is(attacker, Piece::Pawn))
        })
    }

    fn attacked_by_leaper(
        &self,
        square: Square,
        attacker: Color,
        offsets: &[(isize, isize)],
        piece: Piece,
    ) -> bool {
        offsets.iter().any(|&(d_rank, d_file)| {
            square
                .offset(d_rank, d_file)
                .and_then(|from| self.piece_at(from))
                .is_some_and(|p| p.is(attacker, piece))
        })
    }

    fn attacked_along(
        &self,
        square: Square,
        attacker: Color,
        directions: &[(isize, isize)],
        slides_this_way: fn(Piece) -> bool,
    ) -> bool {
        directions.iter().any(|&(d_rank, d_file)| {
            let mut current = square.offset(d_rank, d_file);
            while let Some(sq) = current {
                if let Some(p) = self.piece_at(sq) {
                    return p.color == attacker && slides_this_way(p.piece);
                }
                current = sq.offset(d_rank, d_file);
            }
            false
        })
    }

    /// Locate the king of `color`. `None` when it is missing.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.piece_at(sq).is_some_and(|p| p.is(color, Piece::King)))
    }

    /// Is the king of `color` attacked by the other side?
    ///
    /// A board without that king is reported as not in check.
    #[must_use]
    pub fn is_king_in_check(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn pawn_attacks_follow_the_attackers_direction() {
        let mut board = Board::empty();
        board.put(sq("e4"), Color::White, Piece::Pawn);
        assert!(board.is_square_attacked(sq("d5"), Color::White));
        assert!(board.is_square_attacked(sq("f5"), Color::White));
        assert!(!board.is_square_attacked(sq("e5"), Color::White));
        assert!(!board.is_square_attacked(sq("d3"), Color::White));
        assert!(!board.is_square_attacked(sq("d5"), Color::Black));

        let mut board = Board::empty();
        board.put(sq("e5"), Color::Black, Piece::Pawn);
        assert!(board.is_square_attacked(sq("d4"), Color::Black));
        assert!(!board.is_square_attacked(sq("d6"), Color::Black));
    }

    #[test]
    fn knight_and_king_attacks() {
        let mut board = Board::empty();
        board.put(sq("g1"), Color::White, Piece::Knight);
        board.put(sq("a8"), Color::Black, Piece::King);
        assert!(board.is_square_attacked(sq("f3"), Color::White));
        assert!(board.is_square_attacked(sq("e2"), Color::White));
        assert!(!board.is_square_attacked(sq("g3"), Color::White));
        assert!(board.is_square_attacked(sq("b7"), Color::Black));
        assert!(!board.is_square_attacked(sq("c6"), Color::Black));
    }

    #[test]
    fn sliders_stop_at_first_blocker() {
        let mut board = Board::empty();
        board.put(sq("a1"), Color::White, Piece::Rook);
        board.put(sq("a4"), Color::Black, Piece::Knight);
        board.put(sq("h8"), Color::Black, Piece::Queen);
        assert!(board.is_square_attacked(sq("a3"), Color::White));
        assert!(board.is_square_attacked(sq("a4"), Color::White));
        assert!(!board.is_square_attacked(sq("a5"), Color::White));
        assert!(board.is_square_attacked(sq("a1"), Color::Black));
        assert!(board.is_square_attacked(sq("h1"), Color::Black));
        // Rooks do not attack diagonally, bishops do not attack straight.
        assert!(!board.is_square_attacked(sq("b2"), Color::White));
    }

    #[test]
    fn check_detection_uses_opponent_color() {
        let mut board = Board::empty();
        board.put(sq("e1"), Color::White, Piece::King);
        board.put(sq("e8"), Color::Black, Piece::Rook);
        assert!(board.is_king_in_check(Color::White));
        board.put(sq("e4"), Color::White, Piece::Bishop);
        assert!(!board.is_king_in_check(Color::White));
    }

    #[test]
    fn missing_king_is_not_in_check() {
        let mut board = Board::empty();
        board.put(sq("e8"), Color::Black, Piece::Queen);
        assert_eq!(board.find_king(Color::White), None);
        assert!(!board.is_king_in_check(Color::White));
    }
}
