//! Castling sides and the "has moved" flags that gate castling.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

/// File the king starts on.
const KING_FILE: usize = 4;

const WHITE_KING_MOVED: u8 = 1 << 0;
const WHITE_KINGSIDE_ROOK_MOVED: u8 = 1 << 1;
const WHITE_QUEENSIDE_ROOK_MOVED: u8 = 1 << 2;
const BLACK_KING_MOVED: u8 = 1 << 3;
const BLACK_KINGSIDE_ROOK_MOVED: u8 = 1 << 4;
const BLACK_QUEENSIDE_ROOK_MOVED: u8 = 1 << 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// File the rook starts on
    #[inline]
    #[must_use]
    pub const fn rook_file(self) -> usize {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// File the king lands on
    #[inline]
    #[must_use]
    pub const fn king_target_file(self) -> usize {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    /// File the rook lands on; also the square the king passes over
    #[inline]
    #[must_use]
    pub const fn rook_target_file(self) -> usize {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    /// Files strictly between king and rook
    #[inline]
    #[must_use]
    pub const fn between_files(self) -> &'static [usize] {
        match self {
            CastleSide::Kingside => &[5, 6],
            CastleSide::Queenside => &[1, 2, 3],
        }
    }

    #[inline]
    #[must_use]
    pub const fn king_home(color: Color) -> Square {
        Square(color.back_rank(), KING_FILE)
    }

    #[inline]
    #[must_use]
    pub const fn rook_home(self, color: Color) -> Square {
        Square(color.back_rank(), self.rook_file())
    }

    #[inline]
    #[must_use]
    pub const fn king_target(self, color: Color) -> Square {
        Square(color.back_rank(), self.king_target_file())
    }

    #[inline]
    #[must_use]
    pub const fn rook_target(self, color: Color) -> Square {
        Square(color.back_rank(), self.rook_target_file())
    }
}

/// Which kings and rooks have left their home squares.
///
/// A right is available while neither the king nor the relevant rook has
/// moved. Flags are sticky: once set they are never cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// Nothing has moved: every castle is still available
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(0)
    }

    /// Every king and rook counts as moved
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(
            WHITE_KING_MOVED
                | WHITE_KINGSIDE_ROOK_MOVED
                | WHITE_QUEENSIDE_ROOK_MOVED
                | BLACK_KING_MOVED
                | BLACK_KINGSIDE_ROOK_MOVED
                | BLACK_QUEENSIDE_ROOK_MOVED,
        )
    }

    /// Check if castling on `side` is still available to `color`
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        !self.king_moved(color) && !self.rook_moved(color, side)
    }

    #[inline]
    #[must_use]
    pub const fn king_moved(self, color: Color) -> bool {
        self.0 & Self::king_bit(color) != 0
    }

    #[inline]
    #[must_use]
    pub const fn rook_moved(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::rook_bit(color, side) != 0
    }

    #[inline]
    pub fn mark_king_moved(&mut self, color: Color) {
        self.0 |= Self::king_bit(color);
    }

    #[inline]
    pub fn mark_rook_moved(&mut self, color: Color, side: CastleSide) {
        self.0 |= Self::rook_bit(color, side);
    }

    /// Mark whatever starts on `from` as moved. Called for every committed
    /// move, whichever path produced it.
    pub fn record_departure(&mut self, from: Square) {
        for color in Color::BOTH {
            if from == CastleSide::king_home(color) {
                self.mark_king_moved(color);
            }
            for side in CastleSide::BOTH {
                if from == side.rook_home(color) {
                    self.mark_rook_moved(color, side);
                }
            }
        }
    }

    const fn king_bit(color: Color) -> u8 {
        match color {
            Color::White => WHITE_KING_MOVED,
            Color::Black => BLACK_KING_MOVED,
        }
    }

    const fn rook_bit(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => WHITE_KINGSIDE_ROOK_MOVED,
            (Color::White, CastleSide::Queenside) => WHITE_QUEENSIDE_ROOK_MOVED,
            (Color::Black, CastleSide::Kingside) => BLACK_KINGSIDE_ROOK_MOVED,
            (Color::Black, CastleSide::Queenside) => BLACK_QUEENSIDE_ROOK_MOVED,
        }
    }
}
