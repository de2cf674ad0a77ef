//! Core chess types.
//!
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - (rank, file) board coordinate
//! - `Move` - ordered (from, to) pair
//! - `CastleSide` and `CastlingRights` - castling geometry and state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastleSide, CastlingRights};
pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::Square;
