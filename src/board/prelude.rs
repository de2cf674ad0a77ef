//! Prelude module for convenient imports.
//!
//! Re-exports the board types and the game entry points most callers need.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let mut game = Game::new();
//! assert_eq!(game.play(Move::new(Square(1, 4), Square(3, 4))), Outcome::Moved);
//! ```

pub use super::{
    Board, BoardBuilder, CastleSide, CastlingRights, Color, FenError, Move, MoveParseError, Piece,
    Square, SquareError,
};
pub use crate::game::{CastlingPolicy, Game, GameConfig, Outcome};
