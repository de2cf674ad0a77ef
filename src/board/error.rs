//! Error types for chess board operations.

use std::fmt;

use super::{Color, Square};

/// Error type for FEN placement parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string is empty
    Empty,
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Placement does not describe exactly eight ranks
    WrongRankCount { found: usize },
    /// A rank does not describe exactly eight files
    WrongFileCount { rank: usize, files: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::Empty => write!(f, "Empty FEN string"),
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::WrongFileCount { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Structural failures of board mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// `undo_last_move` called with nothing to undo
    NoUndoRecord,
    /// A special mutator found no piece where it needed one
    EmptySquare { square: Square },
    /// A special mutator found the wrong kind of piece
    UnexpectedPiece { square: Square },
    /// Square lies outside the board
    OffBoard { square: Square },
    /// No king of this color on the board
    MissingKing { color: Color },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::NoUndoRecord => write!(f, "No move to undo"),
            BoardError::EmptySquare { square } => write!(f, "No piece on {square}"),
            BoardError::UnexpectedPiece { square } => {
                write!(f, "Unexpected piece on {square}")
            }
            BoardError::OffBoard { square } => {
                write!(f, "Square ({}, {}) is off the board", square.0, square.1)
            }
            BoardError::MissingKing { color } => write!(f, "{color} has no king"),
        }
    }
}

impl std::error::Error for BoardError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_error_invalid_piece() {
        let err = FenError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_fen_error_rank_count() {
        let err = FenError::WrongRankCount { found: 7 };
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn test_move_error_invalid_square() {
        let err = MoveParseError::InvalidSquare {
            notation: "z9z9".to_string(),
        };
        assert!(err.to_string().contains("z9z9"));
    }

    #[test]
    fn test_square_error_rank_bounds() {
        let err = SquareError::RankOutOfBounds { rank: 9 };
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn test_board_error_messages() {
        assert!(BoardError::EmptySquare { square: Square(1, 4) }
            .to_string()
            .contains("e2"));
        assert!(BoardError::MissingKing {
            color: Color::Black
        }
        .to_string()
        .contains("Black"));
        assert!(BoardError::OffBoard { square: Square(9, 0) }
            .to_string()
            .contains('9'));
    }
}
