use log::trace;

use super::{Board, Color, IllegalMove, Move, PlacedPiece, Square};

/// One undo step: the whole board plus the side that was to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub side_to_move: Color,
}

/// The authoritative position: a live `Board` and its undo stack.
///
/// Undo restores full snapshots rather than replaying inverse moves. The
/// stack grows for the life of the game.
#[derive(Clone, Debug, Default)]
pub struct Position {
    board: Board,
    history: Vec<Snapshot>,
}

impl Position {
    /// Standard starting position with empty history.
    #[must_use]
    pub fn new() -> Self {
        Position::from_board(Board::new())
    }

    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Position {
            board,
            history: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct access to the live board; no legality checks apply.
    #[inline]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<PlacedPiece> {
        self.board.piece_at(square)
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<PlacedPiece>) {
        self.board.set_piece(square, piece);
    }

    #[inline]
    pub fn move_raw(&mut self, from: Square, to: Square) {
        self.board.move_raw(from, to);
    }

    /// Save the current board together with `side_to_move`.
    pub fn push_state(&mut self, side_to_move: Color) {
        self.history.push(Snapshot {
            board: self.board,
            side_to_move,
        });
        trace!("pushed snapshot, depth {}", self.history.len());
    }

    /// Restore the most recent snapshot and return the side it recorded.
    ///
    /// Returns `None` and leaves the board alone when the history is empty.
    pub fn restore_previous(&mut self) -> Option<Color> {
        let snapshot = self.history.pop()?;
        self.board = snapshot.board;
        trace!("restored snapshot, depth {}", self.history.len());
        Some(snapshot.side_to_move)
    }

    /// Restore the most recent snapshot; `false` when there is nothing to undo.
    pub fn pop_state(&mut self) -> bool {
        self.restore_previous().is_some()
    }

    /// Validate `mv` on a copy and, only if it is legal, snapshot and commit it.
    pub fn play(&mut self, mv: Move, side: Color) -> Result<(), IllegalMove> {
        let next = self.board.try_apply(mv, side)?;
        self.push_state(side);
        self.board = next;
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Replace the live board and forget all snapshots.
    pub fn reset(&mut self, board: Board) {
        self.board = board;
        self.history.clear();
    }
}
