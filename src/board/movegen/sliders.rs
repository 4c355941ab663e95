use super::super::{Board, Color, Move, MoveList, Square};

impl Board {
    /// Walk each direction: every empty square, then the first enemy piece, then stop.
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        side: Color,
        directions: &[(isize, isize)],
    ) -> MoveList {
        let mut moves = MoveList::new();
        for &(d_rank, d_file) in directions {
            let mut current = from.offset(d_rank, d_file);
            while let Some(to) = current {
                match self.piece_at(to) {
                    None => moves.push(Move::new(from, to)),
                    Some(blocker) => {
                        if blocker.color != side {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                }
                current = to.offset(d_rank, d_file);
            }
        }
        moves
    }
}
