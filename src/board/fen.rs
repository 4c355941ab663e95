//! FEN export and import.

use super::error::FenError;
use super::types::corner_right;
use super::{Board, CastlingRights, Color, Piece, PlacedPiece, Square};

impl Board {
    /// Serialize the board and `side_to_move` to FEN.
    ///
    /// Halfmove and fullmove counters are not tracked and are always written as `0 1`.
    #[must_use]
    pub fn to_fen(&self, side_to_move: Color) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match self.piece_at(Square(rank, file)) {
                    Some(placed) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(placed.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} 0 1",
            rows.join("/"),
            side_to_move.fen_char(),
            self.castling_rights.to_fen(),
            ep
        )
    }

    /// Parse a FEN string into a board and the side to move.
    ///
    /// FEN has no notion of "has moved", so it is inferred: pawns off their
    /// starting rank, kings off their home square or without rights, and
    /// corner rooks without their right count as moved.
    pub fn try_from_fen(fen: &str) -> Result<(Board, Color), FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut board = Board::empty();

        // Parse castling rights first; piece flags depend on them.
        for c in parts[2].chars() {
            match c {
                'K' => board.castling_rights.set(Color::White, true),
                'Q' => board.castling_rights.set(Color::White, false),
                'k' => board.castling_rights.set(Color::Black, true),
                'q' => board.castling_rights.set(Color::Black, false),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if file >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank_idx,
                            files: file + 1,
                        });
                    }
                    let square = Square(rank, file);
                    let placed = PlacedPiece {
                        color,
                        piece,
                        has_moved: inferred_has_moved(square, color, piece, board.castling_rights),
                    };
                    board.set_piece(square, Some(placed));
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::TooManyFiles {
                        rank: rank_idx,
                        files: file,
                    });
                }
            }
            if file < 8 {
                return Err(FenError::TooFewFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        let side = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        board.en_passant_target = if parts[3] == "-" {
            None
        } else {
            Some(
                parts[3]
                    .parse::<Square>()
                    .map_err(|_| FenError::InvalidEnPassant {
                        found: parts[3].to_string(),
                    })?,
            )
        };

        Ok((board, side))
    }
}

fn inferred_has_moved(square: Square, color: Color, piece: Piece, rights: CastlingRights) -> bool {
    match piece {
        Piece::Pawn => square.rank() != color.pawn_start_rank(),
        Piece::King => square != Square(color.back_rank(), 4) || !rights.any(color),
        Piece::Rook => match corner_right(square) {
            Some((corner_color, kingside)) if corner_color == color => {
                !rights.has(color, kingside)
            }
            _ => true,
        },
        Piece::Knight | Piece::Bishop | Piece::Queen => false,
    }
}
