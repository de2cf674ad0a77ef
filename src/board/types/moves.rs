//! Move type.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::board::error::MoveParseError;

/// An ordered (from, to) pair of squares.
///
/// Carries no capture or promotion metadata; two moves are equal iff both
/// squares match.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Rank distance travelled, ignoring direction
    #[inline]
    #[must_use]
    pub fn rank_distance(self) -> usize {
        self.from.0.abs_diff(self.to.0)
    }

    /// File distance travelled, ignoring direction
    #[inline]
    #[must_use]
    pub fn file_distance(self) -> usize {
        self.from.1.abs_diff(self.to.1)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{})", self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Parses a four-character coordinate move such as "e2e4".
impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 4 || !s.is_ascii() {
            return Err(MoveParseError::InvalidLength {
                len: s.chars().count(),
            });
        }
        let invalid = || MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        let from = s[..2].parse::<Square>().map_err(|_| invalid())?;
        let to = s[2..].parse::<Square>().map_err(|_| invalid())?;
        Ok(Move::new(from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        let a = Move::new(Square(1, 4), Square(3, 4));
        let b: Move = "e2e4".parse().unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Move::new(Square(1, 4), Square(2, 4)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "e2e".parse::<Move>(),
            Err(MoveParseError::InvalidLength { len: 3 })
        );
        assert!(matches!(
            "e2z9".parse::<Move>(),
            Err(MoveParseError::InvalidSquare { .. })
        ));
    }

    #[test]
    fn test_distances() {
        let mv: Move = "b1c3".parse().unwrap();
        assert_eq!(mv.rank_distance(), 2);
        assert_eq!(mv.file_distance(), 1);
        assert_eq!(mv.to_string(), "b1c3");
    }
}
