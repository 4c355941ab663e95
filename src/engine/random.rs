//! In-process suggester that plays a uniformly random legal move.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{EngineError, MoveSuggester};
use crate::board::{Board, Color, Move};

pub struct RandomMover {
    rng: StdRng,
}

impl Default for RandomMover {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomMover {
    /// Seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        RandomMover {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic sequence for tests and reproducible games.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        RandomMover {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick a legal move for `side` on `board`.
    pub fn choose(&mut self, board: &Board, side: Color) -> Result<Move, EngineError> {
        let moves = board.legal_moves(side);
        if moves.is_empty() {
            return Err(EngineError::NoMove);
        }
        let idx = self.rng.gen_range(0..moves.len());
        moves.get(idx).ok_or(EngineError::NoMove)
    }
}

impl MoveSuggester for RandomMover {
    fn suggest(&mut self, fen: &str) -> Result<Move, EngineError> {
        let (board, side) = Board::try_from_fen(fen)?;
        self.choose(&board, side)
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_legal_moves() {
        let mut mover = RandomMover::with_seed(42);
        let board = Board::new();
        for _ in 0..20 {
            let mv = mover.choose(&board, Color::White).unwrap();
            assert!(board.try_apply(mv, Color::White).is_ok());
        }
    }

    #[test]
    fn same_seed_same_moves() {
        let fen = Board::new().to_fen(Color::White);
        let mut a = RandomMover::with_seed(3);
        let mut b = RandomMover::with_seed(3);
        for _ in 0..5 {
            assert_eq!(a.suggest(&fen).unwrap(), b.suggest(&fen).unwrap());
        }
    }

    #[test]
    fn no_move_in_terminal_position() {
        let mut mover = RandomMover::with_seed(1);
        assert!(matches!(
            mover.suggest("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1"),
            Err(EngineError::NoMove)
        ));
    }

    #[test]
    fn bad_fen_is_reported() {
        let mut mover = RandomMover::new();
        assert!(matches!(
            mover.suggest("not a fen"),
            Err(EngineError::InvalidFen(_))
        ));
    }
}
