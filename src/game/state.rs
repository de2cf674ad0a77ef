use crate::board::{Board, CastleSide, CastlingRights, Color, Move, Piece};

use super::check::CheckContext;

/// Everything about a game that is not on the grid.
///
/// Transitions are pure: they return a new state and leave `self` alone, so
/// the orchestrator can build the next state while a move is still pending on
/// the board and drop it if analysis fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    side_to_move: Color,
    over: bool,
    rights: CastlingRights,
    last_move: Option<Move>,
    check: Option<CheckContext>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// White to move, every castle available.
    #[must_use]
    pub fn new() -> Self {
        GameState {
            side_to_move: Color::White,
            over: false,
            rights: CastlingRights::all(),
            last_move: None,
            check: None,
        }
    }

    /// State for an arbitrary position. A king or rook away from its home
    /// square counts as moved.
    #[must_use]
    pub fn for_position(board: &Board, side_to_move: Color) -> Self {
        let mut rights = CastlingRights::all();
        for color in Color::BOTH {
            if board.piece_at(CastleSide::king_home(color)) != Some((color, Piece::King)) {
                rights.mark_king_moved(color);
            }
            for side in CastleSide::BOTH {
                if board.piece_at(side.rook_home(color)) != Some((color, Piece::Rook)) {
                    rights.mark_rook_moved(color, side);
                }
            }
        }
        GameState {
            side_to_move,
            rights,
            ..Self::new()
        }
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    #[inline]
    #[must_use]
    pub fn rights(&self) -> CastlingRights {
        self.rights
    }

    #[inline]
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    #[must_use]
    pub fn check_context(&self) -> Option<&CheckContext> {
        self.check.as_ref()
    }

    #[must_use]
    pub fn in_check(&self) -> bool {
        self.check.is_some()
    }

    /// Whether the side to move still has the right to castle on `side`.
    #[must_use]
    pub fn castling_allowed(&self, side: CastleSide) -> bool {
        self.rights.has(self.side_to_move, side)
    }

    /// Record a committed move: update castling flags, remember it for en
    /// passant and drop the check context. The turn does not change.
    ///
    /// A piece arriving on a home square also clears that square's flag,
    /// since whatever stood there has gone.
    #[must_use]
    pub fn record_move(&self, mv: Move, castled: Option<CastleSide>) -> Self {
        let mut rights = self.rights;
        rights.record_departure(mv.from);
        rights.record_departure(mv.to);
        if let Some(side) = castled {
            rights.mark_king_moved(self.side_to_move);
            rights.mark_rook_moved(self.side_to_move, side);
        }
        GameState {
            side_to_move: self.side_to_move,
            over: self.over,
            rights,
            last_move: Some(mv),
            check: None,
        }
    }

    /// Hand the move to the other side.
    #[must_use]
    pub fn advance(&self) -> Self {
        GameState {
            side_to_move: self.side_to_move.opponent(),
            ..self.clone()
        }
    }

    /// `record_move` followed by `advance`.
    #[must_use]
    pub fn after_move(&self, mv: Move, castled: Option<CastleSide>) -> Self {
        self.record_move(mv, castled).advance()
    }

    #[must_use]
    pub fn with_check(self, context: CheckContext) -> Self {
        GameState {
            check: Some(context),
            ..self
        }
    }

    #[must_use]
    pub fn finished(self) -> Self {
        GameState { over: true, ..self }
    }
}
