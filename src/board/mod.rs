//! Chess board representation.
//!
//! An 8×8 grid of optional pieces with a stack of undo records, the
//! pseudo-legal move generator, and position helpers (FEN placement, builder).
//! Game rules that need history (turn order, check, castling rights, en
//! passant) live in [`crate::game`].
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Move, Square};
//!
//! let mut board = Board::new();
//! let before = board.clone();
//! board.apply_move(Move::new(Square(1, 4), Square(3, 4))).unwrap();
//! board.undo_last_move().unwrap();
//! assert!(board.same_position(&before));
//! ```

pub(crate) mod attack_tables;
mod builder;
mod error;
mod fen;
mod make_unmake;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{BoardError, FenError, MoveParseError, SquareError};
pub use fen::parse_side_to_move;
pub use state::{Board, ColoredPiece, UndoRecord};
pub use types::{CastleSide, CastlingRights, Color, Move, Piece, Square};
