//! Request/response surface for a front end.
//!
//! [`GameService`] is what a shell talks to: read the board, submit a move,
//! restart. It owns no rules; every request is forwarded to the shared
//! [`Game`] under a lock and runs to completion before the next one.

use std::sync::Arc;

use log::info;
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, Piece};
use crate::game::{Game, GameConfig, Outcome};

/// Message returned by [`GameService::restart`].
pub const RESTART_MESSAGE: &str = "Game restarted.";

/// Snapshot of the board for display.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardView {
    /// `squares[rank][file]`, rank 0 is rank "1". Codes look like `"W|K"`.
    pub squares: [[Option<String>; 8]; 8],
    pub side_to_move: Color,
    pub in_check: bool,
    pub game_over: bool,
}

/// Thread-safe handle to one game. Clones share the same game.
#[derive(Clone, Debug)]
pub struct GameService {
    game: Arc<Mutex<Game>>,
}

impl Default for GameService {
    fn default() -> Self {
        Self::new()
    }
}

impl GameService {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        GameService {
            game: Arc::new(Mutex::new(Game::with_config(config))),
        }
    }

    /// Serve an existing game, e.g. one set up from a position.
    #[must_use]
    pub fn from_game(game: Game) -> Self {
        GameService {
            game: Arc::new(Mutex::new(game)),
        }
    }

    #[must_use]
    pub fn board(&self) -> BoardView {
        let game = self.game.lock();
        BoardView {
            squares: game.board().to_codes(),
            side_to_move: game.side_to_move(),
            in_check: game.in_check(),
            game_over: game.is_over(),
        }
    }

    /// Submit a move as two square names such as `"E2"`, `"E4"`.
    pub fn make_move(&self, from: &str, to: &str) -> Outcome {
        let outcome = self.game.lock().make_move(from, to);
        info!("{from}-{to}: {outcome}");
        outcome
    }

    /// Like [`GameService::make_move`] with an explicit promotion piece.
    pub fn make_move_with_promotion(&self, from: &str, to: &str, piece: Piece) -> Outcome {
        let outcome = self.game.lock().make_move_with_promotion(from, to, piece);
        info!("{from}-{to}={}: {outcome}", piece.to_char());
        outcome
    }

    /// Throw the current game away and start a fresh one.
    pub fn restart(&self) -> &'static str {
        self.game.lock().restart();
        RESTART_MESSAGE
    }

    /// Run `f` with the game locked.
    pub fn with_game<R>(&self, f: impl FnOnce(&Game) -> R) -> R {
        f(&self.game.lock())
    }
}
