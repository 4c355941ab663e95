//! A game session: one `Position` plus the side to move.
//!
//! `Game` is the owned replacement for a process-wide game object. Callers
//! that share it between threads wrap it themselves; engine requests only need
//! the FEN string from [`Game::fen`].

use std::str::FromStr;

use log::{debug, info};

use crate::board::{
    Board, Color, FenError, GameStatus, IllegalMove, Move, MoveList, PlayError, Position, Square,
};

#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    side_to_move: Color,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard start position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Game {
            position: Position::new(),
            side_to_move: Color::White,
        }
    }

    /// Start a session from a FEN string. The history starts empty.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let (board, side_to_move) = Board::try_from_fen(fen)?;
        Ok(Game {
            position: Position::from_board(board),
            side_to_move,
        })
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        self.position.board()
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Number of moves that can still be undone.
    #[inline]
    #[must_use]
    pub fn ply(&self) -> usize {
        self.position.history_len()
    }

    /// Play `mv` for the side to move. Nothing changes when it is illegal.
    pub fn play(&mut self, mv: Move) -> Result<(), IllegalMove> {
        self.position.play(mv, self.side_to_move)?;
        debug!("{} played {mv}", self.side_to_move);
        self.side_to_move = self.side_to_move.opponent();

        let status = self.status();
        if status.is_over() {
            info!("{status}: {} to move", self.side_to_move);
        }
        Ok(())
    }

    /// Parse coordinate text such as `e2e4` or `e7e8n` and play it.
    pub fn play_uci(&mut self, text: &str) -> Result<Move, PlayError> {
        let mv: Move = text.trim().parse()?;
        self.play(mv)?;
        Ok(mv)
    }

    /// Take back the last ply. `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.position.restore_previous() {
            Some(side) => {
                self.side_to_move = side;
                debug!("undo, {side} to move");
                true
            }
            None => false,
        }
    }

    /// Take back up to `plies` plies and return how many were undone.
    ///
    /// Against an engine a full turn is two plies: the engine's reply and the
    /// player's move before it.
    pub fn undo_turn(&mut self, plies: usize) -> usize {
        (0..plies).take_while(|_| self.undo()).count()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.board().game_status(self.side_to_move)
    }

    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.board().is_king_in_check(self.side_to_move)
    }

    /// Legal moves for the side to move starting on `from`.
    #[must_use]
    pub fn legal_moves_from(&self, from: Square) -> MoveList {
        self.board().legal_moves_from(from, self.side_to_move)
    }

    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        self.board().legal_moves(self.side_to_move)
    }

    #[must_use]
    pub fn fen(&self) -> String {
        self.board().to_fen(self.side_to_move)
    }

    /// Back to the start position with an empty history.
    pub fn reset(&mut self) {
        self.position.reset(Board::new());
        self.side_to_move = Color::White;
        info!("new game");
    }
}

impl FromStr for Game {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Game::from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::MoveParseError;

    #[test]
    fn play_flips_side_and_undo_restores_it() {
        let mut game = Game::new();
        game.play_uci("e2e4").unwrap();
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.ply(), 1);

        assert!(game.undo());
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(*game.board(), Board::new());
        assert!(!game.undo());
    }

    #[test]
    fn illegal_move_keeps_turn() {
        let mut game = Game::new();
        let err = game.play_uci("e7e5").unwrap_err();
        assert!(matches!(err, PlayError::Illegal(_)));
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.ply(), 0);
    }

    #[test]
    fn bad_text_is_a_parse_error() {
        let mut game = Game::new();
        assert_eq!(
            game.play_uci("e2"),
            Err(PlayError::Parse(MoveParseError::InvalidLength { len: 2 }))
        );
    }

    #[test]
    fn undo_turn_stops_at_start() {
        let mut game = Game::new();
        game.play_uci("d2d4").unwrap();
        game.play_uci("d7d5").unwrap();
        game.play_uci("c2c4").unwrap();
        assert_eq!(game.undo_turn(2), 2);
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.undo_turn(5), 1);
        assert_eq!(game.fen(), Game::new().fen());
    }

    #[test]
    fn from_fen_keeps_side() {
        let game: Game = "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1".parse().unwrap();
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.status(), GameStatus::Stalemate);
        assert!(!game.is_in_check());
        assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn reset_clears_history() {
        let mut game = Game::new();
        game.play_uci("g1f3").unwrap();
        game.reset();
        assert_eq!(game.ply(), 0);
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.legal_moves_from(Square(0, 6)).len(), 2);
    }
}
