use super::super::{Board, Move, MoveList, PlacedPiece, Square};

impl Board {
    /// Pushes, double push from an unmoved pawn, diagonal captures and en passant.
    ///
    /// A pawn reaching the last rank gets one move with no explicit promotion,
    /// which promotes to a queen.
    pub(crate) fn generate_pawn_moves(&self, from: Square, pawn: PlacedPiece) -> MoveList {
        let mut moves = MoveList::new();
        let dir = pawn.color.pawn_direction();

        if let Some(one) = from.offset(dir, 0).filter(|&sq| self.is_empty(sq)) {
            moves.push(Move::new(from, one));
            if !pawn.has_moved {
                if let Some(two) = from.offset(2 * dir, 0).filter(|&sq| self.is_empty(sq)) {
                    moves.push(Move::new(from, two));
                }
            }
        }

        for d_file in [-1, 1] {
            let Some(target) = from.offset(dir, d_file) else {
                continue;
            };
            let captures = match self.piece_at(target) {
                Some(victim) => victim.color != pawn.color,
                None => self.en_passant_target == Some(target),
            };
            if captures {
                moves.push(Move::new(from, target));
            }
        }

        moves
    }
}
