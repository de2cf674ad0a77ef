//! Game module tests.
//!
//! - `scenarios.rs` - Turn flow, rejections, check, checkmate, stalemate
//! - `special_moves.rs` - Castling, en passant, promotion
//! - `proptest.rs` - Random playouts through the orchestrator


use crate::board::{Board, Color};
use crate::game::{Game, GameConfig};

/// Game from a FEN placement with `side` to move and default options.
pub(super) fn game_from(fen: &str, side: Color) -> Game {
    Game::from_board(Board::from_fen(fen), side, GameConfig::default()).unwrap()
}
