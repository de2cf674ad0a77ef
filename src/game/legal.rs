//! Legal move derivation.
//!
//! Every candidate is verified the same way: mutate the board, ask the check
//! detector about the mover's king, undo. Simulations push and pop their own
//! undo records, so a pending outer mutation is left intact.

use log::trace;

use crate::board::{Board, BoardError, CastleSide, CastlingRights, Color, Move, Piece, Square};

use super::check::{self, CheckReport};
use super::config::CastlingPolicy;
use super::GameError;

/// Result of testing one castle for legality.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CastleVerdict {
    /// King or rook has already moved
    Unavailable,
    /// King or rook not at home, or something stands between them
    Blocked,
    /// King is in check
    FromCheck,
    /// The square the king passes over is attacked
    ThroughCheck,
    /// The king would be in check after castling
    IntoCheck,
    Legal,
}

/// What legality depends on besides the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveContext {
    pub color: Color,
    pub last_move: Option<Move>,
    pub rights: CastlingRights,
    pub policy: CastlingPolicy,
    /// Piece used when a candidate pawn move reaches the last rank
    pub promotion: Piece,
}

impl MoveContext {
    /// Every legal move of `color`, including en passant and castling.
    ///
    /// Castles are listed as the king's move (e1g1, e1c1). Promotions appear
    /// once, as the pawn's move.
    pub fn legal_moves(&self, board: &mut Board) -> Result<Vec<Move>, GameError> {
        let mut moves = Vec::new();
        for mv in board.all_possible_moves(self.color) {
            if is_safe_after(board, self.color, mv, self.promotion)? {
                moves.push(mv);
            }
        }
        for (mv, captured) in en_passant_moves(board, self.color, self.last_move) {
            if en_passant_is_safe(board, self.color, mv.from, captured)? {
                moves.push(mv);
            }
        }
        for side in CastleSide::BOTH {
            if castle_verdict(board, self.color, side, self.rights, self.policy)?
                == CastleVerdict::Legal
            {
                moves.push(Move::new(
                    CastleSide::king_home(self.color),
                    side.king_target(self.color),
                ));
            }
        }
        Ok(moves)
    }

    /// Whether at least one legal move exists. Stops at the first one found.
    pub fn any_legal_move(&self, board: &mut Board) -> Result<bool, GameError> {
        for mv in board.all_possible_moves(self.color) {
            if is_safe_after(board, self.color, mv, self.promotion)? {
                return Ok(true);
            }
        }
        for (mv, captured) in en_passant_moves(board, self.color, self.last_move) {
            if en_passant_is_safe(board, self.color, mv.from, captured)? {
                return Ok(true);
            }
        }
        for side in CastleSide::BOTH {
            if castle_verdict(board, self.color, side, self.rights, self.policy)?
                == CastleVerdict::Legal
            {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// Legal replies for `color` while in check.
///
/// With one attacker: pieces that block or capture, en passant captures that
/// take a checking pawn or land on the checking line, and king moves. With
/// more: king moves only. A king move to an unsafe square is skipped unless
/// it captures an attacker.
pub fn derive_legal_moves(
    board: &mut Board,
    color: Color,
    report: &CheckReport,
    last_move: Option<Move>,
    promotion: Piece,
) -> Result<Vec<Move>, GameError> {
    let king = match report.king {
        Some(sq) => sq,
        None => board
            .find_king(color)
            .ok_or(GameError::Board(BoardError::MissingKing { color }))?,
    };
    let mut candidates = Vec::new();

    if !report.is_double_check() {
        for (from, piece) in board.pieces_of(color) {
            if piece == Piece::King {
                continue;
            }
            candidates.extend(
                board
                    .possible_moves(from)
                    .into_iter()
                    .filter(|mv| report.block_squares.contains(&mv.to)),
            );
        }
    }

    candidates.extend(board.possible_moves(king).into_iter().filter(|mv| {
        !report.unsafe_squares.contains(&mv.to) || report.is_attacker(mv.to)
    }));

    let mut legal = Vec::new();
    for mv in candidates {
        if is_safe_after(board, color, mv, promotion)? {
            legal.push(mv);
        }
    }

    if !report.is_double_check() {
        for (mv, captured) in en_passant_moves(board, color, last_move) {
            let answers = report.is_attacker(captured) || report.block_squares.contains(&mv.to);
            if answers && en_passant_is_safe(board, color, mv.from, captured)? {
                legal.push(mv);
            }
        }
    }

    Ok(legal)
}

/// Play `mv` on the board as a candidate: a pawn reaching the last rank
/// promotes to `promotion`, anything else is a plain relocation.
pub fn apply_candidate(board: &mut Board, mv: Move, promotion: Piece) -> Result<(), BoardError> {
    match board.piece_at(mv.from) {
        Some((color, Piece::Pawn)) if mv.to.rank() == color.pawn_promotion_rank() => {
            board.promote(mv, promotion)
        }
        _ => board.apply_move(mv),
    }
}

/// Whether `color`'s king is safe after `mv`. The board is restored.
pub fn is_safe_after(
    board: &mut Board,
    color: Color,
    mv: Move,
    promotion: Piece,
) -> Result<bool, GameError> {
    simulate(board, color, |b| apply_candidate(b, mv, promotion))
}

fn en_passant_is_safe(
    board: &mut Board,
    color: Color,
    from: Square,
    captured: Square,
) -> Result<bool, GameError> {
    simulate(board, color, |b| b.perform_en_passant(from, captured))
}

/// Run `mutate`, test `color`'s king, undo. `Ok(true)` when the king is safe.
pub(crate) fn simulate<F>(board: &mut Board, color: Color, mutate: F) -> Result<bool, GameError>
where
    F: FnOnce(&mut Board) -> Result<(), BoardError>,
{
    let depth = board.undo_depth();
    mutate(board)?;
    let attacked = check::is_king_attacked(board, color);
    board.undo_last_move()?;

    let found = board.undo_depth();
    if found != depth {
        return Err(GameError::UnbalancedSimulation {
            expected: depth,
            found,
        });
    }
    let attacked = attacked?;
    if attacked {
        trace!("simulation left {color} king attacked, rolled back");
    }
    Ok(!attacked)
}

/// If `mv` is an en passant capture for the pawn on `mv.from`, the square of
/// the pawn it takes.
///
/// The last move must be the opposing pawn's two-square advance from its start
/// rank, ending beside the capturing pawn, and `mv.to` the square it skipped.
#[must_use]
pub fn en_passant_capture(board: &Board, mv: Move, last_move: Option<Move>) -> Option<Square> {
    let last = last_move?;
    let (color, piece) = board.piece_at(mv.from)?;
    if piece != Piece::Pawn {
        return None;
    }
    let opponent = color.opponent();
    if board.piece_at(last.to) != Some((opponent, Piece::Pawn))
        || last.from.rank() != opponent.pawn_start_rank()
        || last.file_distance() != 0
        || last.rank_distance() != 2
    {
        return None;
    }
    if mv.from.rank() != last.to.rank()
        || mv.from.file().abs_diff(last.to.file()) != 1
        || Some(mv.to) != last.to.offset(color.pawn_direction(), 0)
        || !board.is_empty(mv.to)
    {
        return None;
    }
    Some(last.to)
}

/// Pseudo-legal en passant captures for `color`, with the captured square.
#[must_use]
pub fn en_passant_moves(board: &Board, color: Color, last_move: Option<Move>) -> Vec<(Move, Square)> {
    let Some(last) = last_move else {
        return Vec::new();
    };
    let Some(landing) = last.to.offset(color.pawn_direction(), 0) else {
        return Vec::new();
    };
    [-1, 1]
        .into_iter()
        .filter_map(|df| last.to.offset(0, df))
        .filter(|&from| board.piece_at(from) == Some((color, Piece::Pawn)))
        .filter_map(|from| {
            let mv = Move::new(from, landing);
            en_passant_capture(board, mv, last_move).map(|captured| (mv, captured))
        })
        .collect()
}

/// Decide whether `color` may castle on `side`.
///
/// Occupancy and rights are checked first. Under [`CastlingPolicy::Standard`]
/// the king may not be in check nor pass over an attacked square; under
/// [`CastlingPolicy::Legacy`] only the landing square matters.
pub fn castle_verdict(
    board: &mut Board,
    color: Color,
    side: CastleSide,
    rights: CastlingRights,
    policy: CastlingPolicy,
) -> Result<CastleVerdict, GameError> {
    if !rights.has(color, side) {
        return Ok(CastleVerdict::Unavailable);
    }

    let rank = color.back_rank();
    let king_home = CastleSide::king_home(color);
    if board.piece_at(king_home) != Some((color, Piece::King))
        || board.piece_at(side.rook_home(color)) != Some((color, Piece::Rook))
        || side
            .between_files()
            .iter()
            .any(|&file| !board.is_empty(Square(rank, file)))
    {
        return Ok(CastleVerdict::Blocked);
    }

    if policy == CastlingPolicy::Standard {
        if check::is_king_attacked(board, color)? {
            return Ok(CastleVerdict::FromCheck);
        }
        let transit = Move::new(king_home, Square(rank, side.rook_target_file()));
        if !simulate(board, color, |b| b.apply_move(transit))? {
            return Ok(CastleVerdict::ThroughCheck);
        }
    }

    let landed_safe = simulate(board, color, |b| {
        if b.castle(color, side) {
            Ok(())
        } else {
            Err(BoardError::UnexpectedPiece { square: king_home })
        }
    })?;
    Ok(if landed_safe {
        CastleVerdict::Legal
    } else {
        CastleVerdict::IntoCheck
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(color: Color) -> MoveContext {
        MoveContext {
            color,
            last_move: None,
            rights: CastlingRights::all(),
            policy: CastlingPolicy::Standard,
            promotion: Piece::Queen,
        }
    }

    #[test]
    fn test_start_position_has_twenty_moves() {
        let mut board = Board::new();
        let moves = context(Color::White).legal_moves(&mut board).unwrap();
        assert_eq!(moves.len(), 20);
        assert_eq!(board.undo_depth(), 0);
    }

    #[test]
    fn test_pinned_blocker_excluded() {
        // Rook e8 checks along the e-file; the bishop on d2 could block on e3
        // but is pinned by the queen on a5.
        let mut board = Board::from_fen("4r2k/8/8/q7/8/8/3B4/4K3");
        let report = check::inspect(&board, Color::White).unwrap();
        let legal =
            derive_legal_moves(&mut board, Color::White, &report, None, Piece::Queen).unwrap();
        assert!(!legal.iter().any(|mv| mv.from == Square(1, 3)));
        assert!(legal.iter().all(|mv| mv.from == Square(0, 4)));
        assert!(!legal.is_empty());
    }

    #[test]
    fn test_double_check_only_king_moves() {
        // Rook e8 and knight d3 both check; the white rook on a3 could take
        // the knight but that does not answer the rook.
        let mut board = Board::from_fen("4r2k/8/8/8/8/R2n4/8/4K3");
        let report = check::inspect(&board, Color::White).unwrap();
        assert!(report.is_double_check());
        let legal =
            derive_legal_moves(&mut board, Color::White, &report, None, Piece::Queen).unwrap();
        assert!(!legal.is_empty());
        assert!(legal.iter().all(|mv| mv.from == Square(0, 4)));
    }

    #[test]
    fn test_king_may_capture_undefended_adjacent_queen() {
        let mut board = Board::from_fen("7k/8/8/8/8/8/4q3/4K3");
        let report = check::inspect(&board, Color::White).unwrap();
        let legal =
            derive_legal_moves(&mut board, Color::White, &report, None, Piece::Queen).unwrap();
        assert_eq!(legal, vec![Move::new(Square(0, 4), Square(1, 4))]);
    }

    #[test]
    fn test_en_passant_capture_of_checking_pawn() {
        // Black pawn d7-d5 gives check to the king on e4; exd6 removes it.
        let mut board = Board::from_fen("7k/8/8/3pP3/4K3/8/8/8");
        let last = Some(Move::new(Square(6, 3), Square(4, 3)));
        let report = check::inspect(&board, Color::White).unwrap();
        assert!(report.is_check());
        let legal =
            derive_legal_moves(&mut board, Color::White, &report, last, Piece::Queen).unwrap();
        assert!(legal.contains(&Move::new(Square(4, 4), Square(5, 3))));
    }

    #[test]
    fn test_en_passant_requires_double_step_last_move() {
        let board = Board::from_fen("7k/8/8/3pP3/8/8/8/K7");
        let mv = Move::new(Square(4, 4), Square(5, 3));
        assert_eq!(
            en_passant_capture(&board, mv, Some(Move::new(Square(6, 3), Square(4, 3)))),
            Some(Square(4, 3))
        );
        // single step from d6
        assert_eq!(
            en_passant_capture(&board, mv, Some(Move::new(Square(5, 3), Square(4, 3)))),
            None
        );
        assert_eq!(en_passant_capture(&board, mv, None), None);
    }

    #[test]
    fn test_castle_verdicts() {
        let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R");
        let rights = CastlingRights::all();
        for side in CastleSide::BOTH {
            assert_eq!(
                castle_verdict(&mut board, Color::White, side, rights, CastlingPolicy::Standard)
                    .unwrap(),
                CastleVerdict::Legal
            );
        }

        let mut moved = rights;
        moved.mark_rook_moved(Color::White, CastleSide::Kingside);
        assert_eq!(
            castle_verdict(
                &mut board,
                Color::White,
                CastleSide::Kingside,
                moved,
                CastlingPolicy::Standard
            )
            .unwrap(),
            CastleVerdict::Unavailable
        );

        let mut blocked = Board::from_fen("r3k2r/8/8/8/8/8/8/R3KB1R");
        assert_eq!(
            castle_verdict(
                &mut blocked,
                Color::White,
                CastleSide::Kingside,
                rights,
                CastlingPolicy::Standard
            )
            .unwrap(),
            CastleVerdict::Blocked
        );
    }

    #[test]
    fn test_castle_through_check_depends_on_policy() {
        // Black rook on f8 covers f1.
        let mut board = Board::from_fen("k4r2/8/8/8/8/8/8/4K2R");
        let rights = CastlingRights::all();
        assert_eq!(
            castle_verdict(
                &mut board,
                Color::White,
                CastleSide::Kingside,
                rights,
                CastlingPolicy::Standard
            )
            .unwrap(),
            CastleVerdict::ThroughCheck
        );
        assert_eq!(
            castle_verdict(
                &mut board,
                Color::White,
                CastleSide::Kingside,
                rights,
                CastlingPolicy::Legacy
            )
            .unwrap(),
            CastleVerdict::Legal
        );
        assert_eq!(board.undo_depth(), 0);
    }

    #[test]
    fn test_castle_into_check_and_from_check() {
        let mut board = Board::from_fen("k5r1/8/8/8/8/8/8/4K2R");
        assert_eq!(
            castle_verdict(
                &mut board,
                Color::White,
                CastleSide::Kingside,
                CastlingRights::all(),
                CastlingPolicy::Legacy
            )
            .unwrap(),
            CastleVerdict::IntoCheck
        );

        let mut board = Board::from_fen("k3r3/8/8/8/8/8/8/4K2R");
        assert_eq!(
            castle_verdict(
                &mut board,
                Color::White,
                CastleSide::Kingside,
                CastlingRights::all(),
                CastlingPolicy::Standard
            )
            .unwrap(),
            CastleVerdict::FromCheck
        );
    }

    #[test]
    fn test_simulation_preserves_pending_record() {
        let mut board = Board::new();
        let outer = Move::new(Square(1, 4), Square(3, 4));
        board.apply_move(outer).unwrap();
        let pending = board.undo_record().cloned();
        assert!(is_safe_after(
            &mut board,
            Color::Black,
            Move::new(Square(6, 4), Square(4, 4)),
            Piece::Queen
        )
        .unwrap());
        assert_eq!(board.undo_record().cloned(), pending);
        board.undo_last_move().unwrap();
        assert!(board.same_position(&Board::new()));
    }

    #[test]
    fn test_stalemate_position_has_no_moves() {
        // Black king a8, white queen c7, white king c6: black to move.
        let mut board = Board::from_fen("k7/2Q5/2K5/8/8/8/8/8");
        assert!(!check::is_king_attacked(&board, Color::Black).unwrap());
        assert!(!context(Color::Black).any_legal_move(&mut board).unwrap());
    }
}
