//! Castling tests.

use crate::board::{Board, BoardBuilder, CastlingRights, Color, Move, Piece, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn mv(s: &str) -> Move {
    s.parse().unwrap()
}

fn castling_board() -> Board {
    Board::try_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
        .unwrap()
        .0
}

#[test]
fn test_kingside_castle_moves_both_pieces() {
    let board = castling_board().try_apply(mv("e1g1"), Color::White).unwrap();

    assert!(board.piece_at(sq("g1")).unwrap().is(Color::White, Piece::King));
    assert!(board.piece_at(sq("f1")).unwrap().is(Color::White, Piece::Rook));
    assert!(board.piece_at(sq("f1")).unwrap().has_moved);
    assert!(board.is_empty(sq("e1")));
    assert!(board.is_empty(sq("h1")));
    assert!(!board.castling_rights().any(Color::White));
    assert!(board.castling_rights().any(Color::Black));
}

#[test]
fn test_queenside_castle_moves_both_pieces() {
    let board = castling_board().try_apply(mv("e8c8"), Color::Black).unwrap();

    assert!(board.piece_at(sq("c8")).unwrap().is(Color::Black, Piece::King));
    assert!(board.piece_at(sq("d8")).unwrap().is(Color::Black, Piece::Rook));
    assert!(board.is_empty(sq("a8")));
    assert!(board.is_empty(sq("e8")));
}

#[test]
fn test_castle_blocked_by_piece_between() {
    let mut board = castling_board();
    board.put(sq("b1"), Color::White, Piece::Knight);
    assert!(board.try_apply(mv("e1c1"), Color::White).is_err());
    assert!(board.try_apply(mv("e1g1"), Color::White).is_ok());
}

#[test]
fn test_castle_out_of_check_is_illegal() {
    let mut board = castling_board();
    board.put(sq("e4"), Color::Black, Piece::Rook);
    assert!(board.is_king_in_check(Color::White));
    assert!(board.try_apply(mv("e1g1"), Color::White).is_err());
    assert!(board.try_apply(mv("e1c1"), Color::White).is_err());
}

#[test]
fn test_castle_through_attacked_square_is_illegal() {
    let mut board = castling_board();
    board.put(sq("f4"), Color::Black, Piece::Rook);
    assert!(board.try_apply(mv("e1g1"), Color::White).is_err());
    assert!(board.try_apply(mv("e1c1"), Color::White).is_ok());
}

#[test]
fn test_castle_into_attacked_square_is_illegal() {
    let mut board = castling_board();
    board.put(sq("c4"), Color::Black, Piece::Rook);
    assert!(board.try_apply(mv("e1c1"), Color::White).is_err());
    assert!(board.try_apply(mv("e1g1"), Color::White).is_ok());
}

#[test]
fn test_attacked_b_file_does_not_stop_queenside() {
    let mut board = castling_board();
    board.put(sq("b4"), Color::Black, Piece::Rook);
    assert!(board.try_apply(mv("e1c1"), Color::White).is_ok());
}

#[test]
fn test_moved_king_cannot_castle() {
    let mut board = castling_board();
    assert!(board.apply_move(mv("e1f1"), Color::White));
    assert!(board.apply_move(mv("a8b8"), Color::Black));
    assert!(board.apply_move(mv("f1e1"), Color::White));
    assert!(board.apply_move(mv("b8a8"), Color::Black));

    // Back on e1 but flagged as moved.
    assert!(board.piece_at(sq("e1")).unwrap().has_moved);
    assert!(board.try_apply(mv("e1g1"), Color::White).is_err());
    assert!(board.try_apply(mv("e8g8"), Color::Black).is_ok());
    assert!(board.try_apply(mv("e8c8"), Color::Black).is_err());
}

#[test]
fn test_moved_rook_cannot_castle() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, Piece::King)
        .moved_piece(sq("h1"), Color::White, Piece::Rook)
        .piece(sq("a1"), Color::White, Piece::Rook)
        .piece(sq("e8"), Color::Black, Piece::King)
        .castling(CastlingRights::all())
        .build();
    assert!(board.try_apply(mv("e1g1"), Color::White).is_err());
    assert!(board.try_apply(mv("e1c1"), Color::White).is_ok());
}

#[test]
fn test_only_a_rook_can_be_a_castling_partner() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("h1"), Color::White, Piece::Bishop)
        .piece(sq("a8"), Color::Black, Piece::King)
        .build();
    assert!(board.try_apply(mv("e1g1"), Color::White).is_err());
}

#[test]
fn test_king_off_home_square_cannot_castle() {
    let board = BoardBuilder::new()
        .piece(sq("d1"), Color::White, Piece::King)
        .piece(sq("h1"), Color::White, Piece::Rook)
        .piece(sq("a1"), Color::White, Piece::Rook)
        .piece(sq("e8"), Color::Black, Piece::King)
        .build();
    assert!(board.try_apply(mv("d1f1"), Color::White).is_err());
    assert!(board.try_apply(mv("d1b1"), Color::White).is_err());
}

#[test]
fn test_generator_offers_castling_only_when_legal() {
    let board = castling_board();
    let king_moves = board.generate_moves(sq("e1"), Color::White);
    assert!(king_moves.contains_destination(sq("g1")));
    assert!(king_moves.contains_destination(sq("c1")));

    let board = Board::new();
    let king_moves = board.generate_moves(sq("e1"), Color::White);
    assert!(king_moves.is_empty());
}

#[test]
fn test_fen_after_castling() {
    let board = castling_board().try_apply(mv("e1g1"), Color::White).unwrap();
    assert_eq!(
        board.to_fen(Color::Black),
        "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 0 1"
    );
}
