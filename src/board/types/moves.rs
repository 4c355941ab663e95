//! Move type, coordinate notation and move list.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;
use crate::board::error::MoveParseError;

/// A move request: source, destination and an optional promotion choice.
///
/// A `Move` carries no capture or history information. The promotion choice
/// only matters when a pawn reaches the far rank; `None` there means a queen.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<Piece>,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Create a move with an explicit promotion choice
    #[inline]
    #[must_use]
    pub const fn with_promotion(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            promotion: Some(piece),
        }
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        self.promotion
    }

    /// File distance, signed (positive towards the h-file)
    #[inline]
    pub(crate) fn file_delta(self) -> isize {
        self.to.file() as isize - self.from.file() as isize
    }

    /// Rank distance, signed (positive towards rank 8)
    #[inline]
    pub(crate) fn rank_delta(self) -> isize {
        self.to.rank() as isize - self.from.rank() as isize
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

/// Parses coordinate notation such as `e2e4` or `e7e8q`.
///
/// Only the text is checked here; whether the move is playable is up to the rules.
impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        let len = chars.len();
        if !(4..=5).contains(&len) {
            return Err(MoveParseError::InvalidLength { len });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        let square = |pair: &[char]| -> Result<Square, MoveParseError> {
            pair.iter()
                .collect::<String>()
                .parse()
                .map_err(|_| invalid_square())
        };
        let from = square(&chars[0..2])?;
        let to = square(&chars[2..4])?;

        match chars.get(4).copied() {
            None => Ok(Move::new(from, to)),
            Some(c) => match Piece::from_char(c) {
                Some(piece) if c.is_ascii_lowercase() && piece.is_promotion_choice() => {
                    Ok(Move::with_promotion(from, to, piece))
                }
                _ => Err(MoveParseError::InvalidPromotion { char: c }),
            },
        }
    }
}

/// Moves produced for one query. Restartable: every generator call builds a fresh list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(32),
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub(crate) fn extend(&mut self, other: MoveList) {
        self.moves.extend(other.moves);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.moves.get(idx).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }

    /// True when some move in the list goes to `to`
    #[must_use]
    pub fn contains_destination(&self, to: Square) -> bool {
        self.moves.iter().any(|mv| mv.to() == to)
    }

    /// Destination squares in generation order
    pub fn destinations(&self) -> impl Iterator<Item = Square> + '_ {
        self.moves.iter().map(|mv| mv.to())
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveList {
            moves: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.moves[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_move() {
        let mv: Move = "e2e4".parse().unwrap();
        assert_eq!(mv.from(), Square(1, 4));
        assert_eq!(mv.to(), Square(3, 4));
        assert_eq!(mv.promotion(), None);
        assert_eq!(mv.to_string(), "e2e4");
    }

    #[test]
    fn parse_promotion() {
        let mv: Move = "e7e8n".parse().unwrap();
        assert_eq!(mv.promotion(), Some(Piece::Knight));
        assert_eq!(mv.to_string(), "e7e8n");
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "e2e".parse::<Move>(),
            Err(MoveParseError::InvalidLength { len: 3 })
        );
        assert_eq!(
            "e2e4qq".parse::<Move>(),
            Err(MoveParseError::InvalidLength { len: 6 })
        );
        assert_eq!(
            "z2e4".parse::<Move>(),
            Err(MoveParseError::InvalidSquare {
                notation: "z2e4".to_string()
            })
        );
        assert_eq!(
            "e7e8k".parse::<Move>(),
            Err(MoveParseError::InvalidPromotion { char: 'k' })
        );
        assert_eq!(
            "e7e8Q".parse::<Move>(),
            Err(MoveParseError::InvalidPromotion { char: 'Q' })
        );
    }

    #[test]
    fn non_ascii_text_is_a_bad_square() {
        assert_eq!(
            "\u{e9}2e4".parse::<Move>(),
            Err(MoveParseError::InvalidSquare {
                notation: "\u{e9}2e4".to_string()
            })
        );
        assert_eq!(
            "e2e\u{2463}".parse::<Move>(),
            Err(MoveParseError::InvalidSquare {
                notation: "e2e\u{2463}".to_string()
            })
        );
        assert_eq!(
            "e7e8\u{e9}".parse::<Move>(),
            Err(MoveParseError::InvalidPromotion { char: '\u{e9}' })
        );
    }

    #[test]
    fn move_list_queries() {
        let list: MoveList = ["e2e3", "e2e4"]
            .iter()
            .map(|s| s.parse::<Move>().unwrap())
            .collect();
        assert_eq!(list.len(), 2);
        assert!(list.contains_destination(Square(3, 4)));
        assert!(!list.contains_destination(Square(4, 4)));
        assert_eq!(list[1].to_string(), "e2e4");
        assert_eq!(list.destinations().count(), 2);
    }
}
