pub mod board;
pub mod game;
pub mod service;

pub use board::{Board, Color, Move, Piece, Square};
pub use game::{Game, GameConfig, Outcome};
pub use service::{BoardView, GameService};
