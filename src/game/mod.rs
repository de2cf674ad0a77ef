//! Game rules on top of the board.
//!
//! [`Game`] owns a [`Board`], a [`GameState`] and a [`GameConfig`]. A move is
//! tried as promotion, en passant, the constrained in-check path, castling
//! and finally an ordinary move. Each attempt mutates the board, asks the
//! check detector about the mover's king, and either keeps the mutation or
//! rolls it back. A kept move is then scored against the opponent (check,
//! checkmate, stalemate) before it is committed.
//!
//! # Example
//! ```
//! use chess_rules::game::{Game, Outcome};
//! use chess_rules::board::Color;
//!
//! let mut game = Game::new();
//! assert_eq!(game.make_move("E2", "E4"), Outcome::Moved);
//! assert_eq!(game.side_to_move(), Color::Black);
//! assert_eq!(game.make_move("E7", "E9"), Outcome::MalformedInput { input: "E9".into() });
//! ```

mod check;
mod config;
mod error;
mod legal;
mod outcome;
mod state;

#[cfg(test)]
mod tests;

use log::{debug, trace, warn};

use crate::board::{Board, BoardError, CastleSide, Color, Move, Piece, Square};

pub use check::{inspect, is_king_attacked, Attacker, CheckContext, CheckReport};
pub use config::{CastlingPolicy, GameConfig};
pub use error::{ConfigError, GameError};
pub use legal::{
    castle_verdict, derive_legal_moves, en_passant_capture, is_safe_after, CastleVerdict,
    MoveContext,
};
pub use outcome::Outcome;
pub use state::GameState;

/// Promotion piece selected by the destination rank of a pawn on its
/// seventh rank. The rank nearest the pawn picks the bishop, the farthest
/// the queen.
#[must_use]
pub const fn promotion_by_rank(color: Color, rank: usize) -> Option<Piece> {
    match (color, rank) {
        (Color::White, 6) | (Color::Black, 2) => Some(Piece::Bishop),
        (Color::White, 5) | (Color::Black, 3) => Some(Piece::Knight),
        (Color::White, 4) | (Color::Black, 4) => Some(Piece::Rook),
        (Color::White, 3) | (Color::Black, 5) => Some(Piece::Queen),
        _ => None,
    }
}

/// A move that is on the board, undo record still pending.
#[derive(Clone, Copy, Debug)]
struct Played {
    mv: Move,
    castled: Option<CastleSide>,
}

enum Attempt {
    /// This kind of move does not apply; try the next one
    Pass,
    Rejected(Outcome),
    Played(Played),
}

/// One match: board, state and options.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    state: GameState,
    config: GameConfig,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard start position, default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Game {
            board: Board::new(),
            state: GameState::new(),
            config,
        }
    }

    /// Start from an arbitrary position.
    ///
    /// Castling is available for every king and rook found on its home
    /// square. The side to move is checked for check, checkmate and
    /// stalemate straight away. Both kings must be present, and the side not
    /// to move must not be in check.
    pub fn from_board(
        board: Board,
        side_to_move: Color,
        config: GameConfig,
    ) -> Result<Self, GameError> {
        let state = GameState::for_position(&board, side_to_move);
        let mut game = Game {
            board,
            state,
            config,
        };

        let waiting = side_to_move.opponent();
        if check::is_king_attacked(&game.board, waiting)? {
            return Err(GameError::OpponentInCheck { color: waiting });
        }
        let report = check::inspect(&game.board, side_to_move)?;
        let last_move = game.state.last_move();
        if report.is_check() {
            let legal_moves = legal::derive_legal_moves(
                &mut game.board,
                side_to_move,
                &report,
                last_move,
                game.config.default_promotion,
            )?;
            game.state = if legal_moves.is_empty() {
                game.state.clone().finished()
            } else {
                game.state.clone().with_check(CheckContext {
                    report,
                    legal_moves,
                })
            };
        } else if !game.move_context(&game.state).any_legal_move(&mut game.board)? {
            game.state = game.state.clone().finished();
        }
        Ok(game)
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move()
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    #[inline]
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.state.in_check()
    }

    #[inline]
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.state.last_move()
    }

    #[must_use]
    pub fn check_context(&self) -> Option<&CheckContext> {
        self.state.check_context()
    }

    /// Every legal move for the side to move; empty once the game is over.
    pub fn legal_moves(&self) -> Result<Vec<Move>, GameError> {
        if self.state.is_over() {
            return Ok(Vec::new());
        }
        if let Some(context) = self.state.check_context() {
            return Ok(context.legal_moves.clone());
        }
        let mut board = self.board.clone();
        self.move_context(&self.state).legal_moves(&mut board)
    }

    /// Start over from the standard position, keeping the options.
    pub fn restart(&mut self) {
        *self = Self::with_config(self.config.clone());
        debug!("game restarted");
    }

    /// Submit a move as two square names, e.g. `("E2", "E4")`.
    pub fn make_move(&mut self, from: &str, to: &str) -> Outcome {
        if self.state.is_over() {
            return Outcome::GameOver;
        }
        match parse_squares(from, to) {
            Ok(mv) => self.submit(mv, None),
            Err(outcome) => outcome,
        }
    }

    /// Submit a pawn move to the last rank with an explicit promotion piece.
    pub fn make_move_with_promotion(&mut self, from: &str, to: &str, piece: Piece) -> Outcome {
        if self.state.is_over() {
            return Outcome::GameOver;
        }
        match parse_squares(from, to) {
            Ok(mv) => self.submit(mv, Some(piece)),
            Err(outcome) => outcome,
        }
    }

    pub fn play(&mut self, mv: Move) -> Outcome {
        self.submit(mv, None)
    }

    pub fn play_with_promotion(&mut self, mv: Move, piece: Piece) -> Outcome {
        self.submit(mv, Some(piece))
    }

    fn move_context(&self, state: &GameState) -> MoveContext {
        MoveContext {
            color: state.side_to_move(),
            last_move: state.last_move(),
            rights: state.rights(),
            policy: self.config.castling,
            promotion: self.config.default_promotion,
        }
    }

    fn submit(&mut self, mv: Move, promotion: Option<Piece>) -> Outcome {
        if self.state.is_over() {
            return Outcome::GameOver;
        }
        let mover = self.state.side_to_move();
        match self.board.piece_at(mv.from) {
            None => return Outcome::NoPiece,
            Some((owner, _)) if owner != mover => return Outcome::NotYourPiece,
            Some(_) => {}
        }
        if !mv.to.is_valid() {
            return Outcome::IllegalMove;
        }

        let depth = self.board.undo_depth();
        match self.attempt(mv, promotion) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!("internal error while playing {mv}: {err}");
                if let Err(unwind) = self.board.unwind_to(depth) {
                    warn!("could not restore board after {mv}: {unwind}");
                }
                Outcome::InternalError {
                    message: err.to_string(),
                }
            }
        }
    }

    fn attempt(&mut self, mv: Move, promotion: Option<Piece>) -> Result<Outcome, GameError> {
        let mut attempt = self.try_promotion(mv, promotion)?;
        if matches!(attempt, Attempt::Pass) {
            attempt = self.try_en_passant(mv)?;
        }
        if matches!(attempt, Attempt::Pass) && self.state.in_check() {
            attempt = self.try_in_check(mv)?;
        }
        if matches!(attempt, Attempt::Pass) {
            attempt = self.try_castle(mv)?;
        }
        if matches!(attempt, Attempt::Pass) {
            attempt = self.try_ordinary(mv)?;
        }

        match attempt {
            Attempt::Pass => Ok(Outcome::IllegalMove),
            Attempt::Rejected(outcome) => {
                trace!("{mv} rejected: {outcome:?}");
                Ok(outcome)
            }
            Attempt::Played(played) => self.conclude(played),
        }
    }

    fn try_promotion(&mut self, mv: Move, requested: Option<Piece>) -> Result<Attempt, GameError> {
        let color = self.state.side_to_move();
        let is_pawn = self.board.piece_at(mv.from) == Some((color, Piece::Pawn));
        let back_rank = color.pawn_promotion_rank();

        let (target, piece) = match requested {
            Some(piece) => {
                if !is_pawn
                    || !piece.is_promotion_piece()
                    || mv.to.rank() != back_rank
                    || !self.board.possible_moves(mv.from).contains(&mv)
                {
                    return Ok(Attempt::Rejected(Outcome::IllegalMove));
                }
                (mv, piece)
            }
            None => {
                if !self.config.rank_band_promotion || !is_pawn {
                    return Ok(Attempt::Pass);
                }
                let Some(piece) = promotion_by_rank(color, mv.to.rank()) else {
                    return Ok(Attempt::Pass);
                };
                let target = Move::new(mv.from, Square(back_rank, mv.to.file()));
                if !self.board.possible_moves(mv.from).contains(&target) {
                    return Ok(Attempt::Pass);
                }
                (target, piece)
            }
        };

        self.board.promote(target, piece)?;
        self.keep_if_safe(Played {
            mv: target,
            castled: None,
        })
    }

    fn try_en_passant(&mut self, mv: Move) -> Result<Attempt, GameError> {
        let Some(captured) = legal::en_passant_capture(&self.board, mv, self.state.last_move())
        else {
            return Ok(Attempt::Pass);
        };
        self.board.perform_en_passant(mv.from, captured)?;
        self.keep_if_safe(Played { mv, castled: None })
    }

    fn try_in_check(&mut self, mv: Move) -> Result<Attempt, GameError> {
        let allowed = self
            .state
            .check_context()
            .is_some_and(|context| context.allows(mv));
        if !allowed {
            return Ok(Attempt::Rejected(Outcome::StillInCheck {
                color: self.state.side_to_move(),
            }));
        }
        legal::apply_candidate(&mut self.board, mv, self.config.default_promotion)?;
        self.keep_if_safe(Played { mv, castled: None })
    }

    fn try_castle(&mut self, mv: Move) -> Result<Attempt, GameError> {
        let color = self.state.side_to_move();
        let king_home = CastleSide::king_home(color);
        if mv.from != king_home || self.board.piece_on(king_home) != Some(Piece::King) {
            return Ok(Attempt::Pass);
        }
        let Some(side) = CastleSide::BOTH
            .into_iter()
            .find(|side| mv.to == side.king_target(color) || mv.to == side.rook_home(color))
        else {
            return Ok(Attempt::Pass);
        };

        let verdict = legal::castle_verdict(
            &mut self.board,
            color,
            side,
            self.state.rights(),
            self.config.castling,
        )?;
        match verdict {
            CastleVerdict::Unavailable | CastleVerdict::Blocked => Ok(Attempt::Pass),
            CastleVerdict::FromCheck | CastleVerdict::ThroughCheck => {
                Ok(Attempt::Rejected(Outcome::IllegalMove))
            }
            CastleVerdict::IntoCheck => Ok(Attempt::Rejected(self.self_check_outcome())),
            CastleVerdict::Legal => {
                if !self.board.castle(color, side) {
                    return Err(BoardError::UnexpectedPiece { square: king_home }.into());
                }
                Ok(Attempt::Played(Played {
                    mv: Move::new(king_home, side.king_target(color)),
                    castled: Some(side),
                }))
            }
        }
    }

    fn try_ordinary(&mut self, mv: Move) -> Result<Attempt, GameError> {
        if !self.board.possible_moves(mv.from).contains(&mv) {
            return Ok(Attempt::Rejected(Outcome::IllegalMove));
        }
        legal::apply_candidate(&mut self.board, mv, self.config.default_promotion)?;
        self.keep_if_safe(Played { mv, castled: None })
    }

    /// Keep the pending mutation unless it leaves the mover's king attacked.
    fn keep_if_safe(&mut self, played: Played) -> Result<Attempt, GameError> {
        let mover = self.state.side_to_move();
        if check::is_king_attacked(&self.board, mover)? {
            self.board.undo_last_move()?;
            trace!("{} leaves the {mover} king attacked, rolled back", played.mv);
            return Ok(Attempt::Rejected(self.self_check_outcome()));
        }
        Ok(Attempt::Played(played))
    }

    fn self_check_outcome(&self) -> Outcome {
        if self.state.in_check() {
            Outcome::StillInCheck {
                color: self.state.side_to_move(),
            }
        } else {
            Outcome::SelfCheck
        }
    }

    /// Score a kept move against the opponent, then commit it.
    fn conclude(&mut self, played: Played) -> Result<Outcome, GameError> {
        let mover = self.state.side_to_move();
        let opponent = mover.opponent();
        let next = self.state.after_move(played.mv, played.castled);

        let report = check::inspect(&self.board, opponent)?;
        let (next, outcome) = if report.is_check() {
            let legal_moves = legal::derive_legal_moves(
                &mut self.board,
                opponent,
                &report,
                Some(played.mv),
                self.config.default_promotion,
            )?;
            if legal_moves.is_empty() {
                (next.finished(), Outcome::Checkmate { winner: mover })
            } else {
                debug!(
                    "{opponent} in check from {:?}, {} replies",
                    report.attacker_squares(),
                    legal_moves.len()
                );
                (
                    next.with_check(CheckContext {
                        report,
                        legal_moves,
                    }),
                    Outcome::Check { checked: opponent },
                )
            }
        } else if !self.move_context(&next).any_legal_move(&mut self.board)? {
            (next.finished(), Outcome::Stalemate)
        } else if played.castled.is_some() {
            (next, Outcome::Castled { color: mover })
        } else {
            (next, Outcome::Moved)
        };

        self.board.commit();
        self.state = next;
        debug!("{mover} played {}: {outcome:?}", played.mv);
        if outcome.ends_game() {
            debug!("game over: {outcome}");
        }
        Ok(outcome)
    }
}

fn parse_squares(from: &str, to: &str) -> Result<Move, Outcome> {
    let parse = |token: &str| {
        token.parse::<Square>().map_err(|_| Outcome::MalformedInput {
            input: token.to_string(),
        })
    };
    Ok(Move::new(parse(from)?, parse(to)?))
}
