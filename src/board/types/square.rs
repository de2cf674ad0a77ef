//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, represented as (rank, file).
///
/// Rank 0 is White's back rank ("1"), file 0 is the a-file. The tuple fields
/// are public, so a square outside the board can be built directly; use
/// [`Square::new`] or [`Square::is_valid`] when that matters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (rank, file)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square(rank, file))
        } else {
            None
        }
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }

    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 < 8 && self.1 < 8
    }

    /// The square `(dr, df)` away, if it is on the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dr: isize, df: isize) -> Option<Square> {
        let r = self.0 as isize + dr;
        let f = self.1 as isize + df;
        if (0..8).contains(&r) && (0..8).contains(&f) {
            Some(Square(r as usize, f as usize))
        } else {
            None
        }
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * 8 + self.1
    }

    /// Create a square from an index (0-63)
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx / 8, idx % 8)
    }

    /// Iterate over all 64 squares, a1 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", b'a'.wrapping_add(self.1 as u8) as char, self.0 + 1)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.0, self.1).cmp(&(other.0, other.1))
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square(rank, file))
    }
}

/// Parses two-character square names. The file letter may be upper or lower
/// case ("E2" and "e2" are the same square).
impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.trim().chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(invalid());
        };

        let file = match file_char.to_ascii_lowercase() {
            c @ 'a'..='h' => c as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let rank = match rank_char {
            c @ '1'..='8' => c as usize - '1' as usize,
            _ => return Err(invalid()),
        };

        Ok(Square(rank, file))
    }
}
