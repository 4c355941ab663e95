use super::super::attacks::KNIGHT_OFFSETS;
use super::super::{Board, Color, Move, MoveList, Square};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, side: Color) -> MoveList {
        KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(d_rank, d_file)| from.offset(d_rank, d_file))
            .map(|to| Move::new(from, to))
            .filter(|&mv| self.is_move_legal_basic(mv, side))
            .collect()
    }
}
