use super::{Board, Color};

impl Board {
    /// Count leaf nodes of the legal move tree to `depth` plies.
    ///
    /// Pawns reaching the last rank count once (queen), so counts only match
    /// published tables for trees without promotions.
    #[must_use]
    pub fn perft(&self, side: Color, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let mut nodes = 0;
        for (from, _) in self.pieces(side) {
            for mv in self.generate_moves(from, side) {
                let Ok(next) = self.try_apply(mv, side) else {
                    continue;
                };
                nodes += if depth == 1 {
                    1
                } else {
                    next.perft(side.opponent(), depth - 1)
                };
            }
        }
        nodes
    }
}
