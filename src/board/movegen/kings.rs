use super::super::attacks::KING_OFFSETS;
use super::super::{Board, Color, Move, MoveList, Square};

impl Board {
    /// Adjacent steps through the basic gate, plus castling.
    ///
    /// Castling has too many preconditions to restate here, so each castling
    /// destination is only offered when a full trial application succeeds.
    pub(crate) fn generate_king_moves(&self, from: Square, side: Color) -> MoveList {
        let mut moves: MoveList = KING_OFFSETS
            .iter()
            .filter_map(|&(d_rank, d_file)| from.offset(d_rank, d_file))
            .map(|to| Move::new(from, to))
            .filter(|&mv| self.is_move_legal_basic(mv, side))
            .collect();

        for d_file in [2, -2] {
            if let Some(to) = from.offset(0, d_file) {
                let castle = Move::new(from, to);
                if self.try_apply(castle, side).is_ok() {
                    moves.push(castle);
                }
            }
        }

        moves
    }
}
