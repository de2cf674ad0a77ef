//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(0, 4), Color::White, Piece::King)
//!     .piece(Square(7, 4), Color::Black, Piece::King)
//!     .piece(Square(1, 0), Color::White, Piece::Pawn)
//!     .build();
//! assert_eq!(board.find_king(Color::Black), Some(Square(7, 4)));
//! ```

use super::{Board, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        let mut builder = Self::new();
        for color in Color::BOTH {
            for (sq, piece) in board.pieces_of(color) {
                builder.pieces.push((sq, color, piece));
            }
        }
        builder
    }

    /// Place a piece on the board.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        // Remove any existing piece on this square
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Build the board. Off-board squares are dropped.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (sq, color, piece) in self.pieces {
            board.set_piece(sq, color, piece);
        }
        board
    }
}
