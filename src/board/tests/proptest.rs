//! Property-based tests using proptest.

use rand::Rng;
use crate::board::{Board, Color, GameStatus, Move, Position};
use proptest::prelude::*;
use rand::prelude::*;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=30usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random legal moves and return the position and side to move.
fn random_game(seed: u64, num_moves: usize) -> (Position, Color) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut position = Position::new();
    let mut side = Color::White;

    for _ in 0..num_moves {
        let moves = position.board().legal_moves(side);
        if moves.is_empty() {
            break;
        }
        let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
        position.play(mv, side).unwrap();
        side = side.opponent();
    }
    (position, side)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: every generated legal move applies and never leaves the mover in check
    #[test]
    fn prop_legal_moves_apply(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (position, side) = random_game(seed, num_moves);
        let board = position.board();

        for mv in board.legal_moves(side) {
            let next = board.try_apply(mv, side);
            prop_assert!(next.is_ok(), "legal move {} rejected", mv);
            prop_assert!(!next.unwrap().is_king_in_check(side));
        }
    }

    /// Property: a rejected move leaves the board untouched
    #[test]
    fn prop_rejected_move_is_a_no_op(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
        from in 0..64usize,
        to in 0..64usize,
    ) {
        let (position, side) = random_game(seed, num_moves);
        let mut board = *position.board();
        let before = board;
        let mv = Move::new(
            crate::board::Square(from / 8, from % 8),
            crate::board::Square(to / 8, to % 8),
        );

        if !board.apply_move(mv, side) {
            prop_assert_eq!(board, before);
        }
    }

    /// Property: undoing every move returns to the starting position
    #[test]
    fn prop_undo_restores_start(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (mut position, _) = random_game(seed, num_moves);

        while position.pop_state() {}

        prop_assert_eq!(*position.board(), Board::new());
    }

    /// Property: FEN export round-trips the placement, side and en passant target
    #[test]
    fn prop_fen_round_trip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (position, side) = random_game(seed, num_moves);
        let fen = position.board().to_fen(side);

        let (parsed, parsed_side) = Board::try_from_fen(&fen).unwrap();
        prop_assert_eq!(parsed_side, side);
        prop_assert_eq!(parsed.to_fen(parsed_side), fen);
        prop_assert_eq!(
            parsed.game_status(parsed_side) == GameStatus::Playing,
            position.board().game_status(side) == GameStatus::Playing
        );
    }
}
