//! Check detection.
//!
//! Scans outward from the king along the eight ray directions and the eight
//! knight offsets. Each ray reports at most one attacker, so two rays finding
//! attackers is a double check.

use crate::board::attack_tables::{DIAGONAL, KNIGHT_OFFSETS, ORTHOGONAL};
use crate::board::{Board, BoardError, Color, Move, Piece, Square};

use super::GameError;

/// One piece giving check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attacker {
    pub square: Square,
    pub piece: Piece,
    /// Direction from the king toward a sliding attacker.
    pub direction: Option<(isize, isize)>,
    /// Squares from next to the king up to and including the attacker.
    pub line: Vec<Square>,
}

/// What the check detector learned about one king.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub king: Option<Square>,
    pub attackers: Vec<Attacker>,
    /// Squares where a piece would block or capture the sole attacker.
    /// Empty unless there is exactly one attacker.
    pub block_squares: Vec<Square>,
    /// King destinations known to be attacked.
    pub unsafe_squares: Vec<Square>,
}

impl CheckReport {
    #[must_use]
    pub fn is_check(&self) -> bool {
        !self.attackers.is_empty()
    }

    #[must_use]
    pub fn is_double_check(&self) -> bool {
        self.attackers.len() > 1
    }

    #[must_use]
    pub fn attacker_squares(&self) -> Vec<Square> {
        self.attackers.iter().map(|a| a.square).collect()
    }

    #[must_use]
    pub fn is_attacker(&self, sq: Square) -> bool {
        self.attackers.iter().any(|a| a.square == sq)
    }
}

/// The check context kept while the side to move is in check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckContext {
    pub report: CheckReport,
    /// Every legal reply, computed once when the check was discovered.
    pub legal_moves: Vec<Move>,
}

impl CheckContext {
    #[must_use]
    pub fn allows(&self, mv: Move) -> bool {
        self.legal_moves.contains(&mv)
    }
}

/// Whether `color`'s king is attacked. A board with no such king is an error.
pub fn is_king_attacked(board: &Board, color: Color) -> Result<bool, GameError> {
    let king = locate_king(board, color)?;
    Ok(!find_attackers(board, king, color).is_empty())
}

/// Full check analysis for `color`: attackers, block squares, unsafe squares.
pub fn inspect(board: &Board, color: Color) -> Result<CheckReport, GameError> {
    let king = locate_king(board, color)?;
    let attackers = find_attackers(board, king, color);
    if attackers.is_empty() {
        return Ok(CheckReport {
            king: Some(king),
            ..CheckReport::default()
        });
    }

    let mut unsafe_squares = Vec::new();
    for attacker in &attackers {
        match attacker.direction {
            Some((dr, df)) => {
                // Both neighbours on the attacking line: toward the attacker,
                // and behind the king once it steps out of the way.
                unsafe_squares.extend(king.offset(dr, df));
                unsafe_squares.extend(king.offset(-dr, -df));
                unsafe_squares.extend(attacker.line.iter().copied());
            }
            None => unsafe_squares.push(attacker.square),
        }
    }

    let king_targets: Vec<Square> = board
        .possible_moves(king)
        .into_iter()
        .map(Move::to)
        .collect();
    for (from, _) in board.pieces_of(color.opponent()) {
        unsafe_squares.extend(
            board
                .controlled_squares(from)
                .into_iter()
                .filter(|sq| king_targets.contains(sq)),
        );
    }
    unsafe_squares.sort();
    unsafe_squares.dedup();

    let block_squares = match attackers.as_slice() {
        [only] => only.line.clone(),
        _ => Vec::new(),
    };

    Ok(CheckReport {
        king: Some(king),
        attackers,
        block_squares,
        unsafe_squares,
    })
}

fn locate_king(board: &Board, color: Color) -> Result<Square, GameError> {
    board
        .find_king(color)
        .ok_or(GameError::Board(BoardError::MissingKing { color }))
}

fn find_attackers(board: &Board, king: Square, color: Color) -> Vec<Attacker> {
    let mut attackers = Vec::new();

    for (directions, straight) in [(&ORTHOGONAL, true), (&DIAGONAL, false)] {
        for &(dr, df) in directions.iter() {
            let mut line = Vec::new();
            let mut current = king;
            while let Some(next) = current.offset(dr, df) {
                line.push(next);
                match board.piece_at(next) {
                    None => current = next,
                    Some((owner, _)) if owner == color => break,
                    Some((_, piece)) => {
                        let slides_here = if straight {
                            piece.attacks_straight()
                        } else {
                            piece.attacks_diagonally()
                        };
                        let touches = line.len() == 1
                            && (piece == Piece::King
                                || (!straight
                                    && piece == Piece::Pawn
                                    && dr == color.pawn_direction()));
                        if slides_here || touches {
                            attackers.push(Attacker {
                                square: next,
                                piece,
                                direction: piece.is_slider().then_some((dr, df)),
                                line,
                            });
                        }
                        break;
                    }
                }
            }
        }
    }

    for &(dr, df) in &KNIGHT_OFFSETS {
        if let Some(sq) = king.offset(dr, df) {
            if board.piece_at(sq) == Some((color.opponent(), Piece::Knight)) {
                attackers.push(Attacker {
                    square: sq,
                    piece: Piece::Knight,
                    direction: None,
                    line: vec![sq],
                });
            }
        }
    }

    attackers
}
