//! FEN piece-placement parsing and formatting.
//!
//! Only the placement field and, optionally, the side-to-move field are
//! read. Castling availability and the en passant square are not part of this
//! engine's position model: they come from game history.

use super::error::FenError;
use super::{Board, Color, Piece, Square};

impl Board {
    /// Parse the placement field of a FEN string.
    ///
    /// Anything after the first whitespace-separated field is ignored; use
    /// [`parse_side_to_move`] for the second field.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let placement = fen.split_whitespace().next().ok_or(FenError::Empty)?;
        let mut board = Board::empty();

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(FenError::WrongFileCount {
                        rank: rank + 1,
                        files: file + 1,
                    });
                }
                board.set_piece(Square(rank, file), color, piece);
                file += 1;
            }
            if file != 8 {
                return Err(FenError::WrongFileCount {
                    rank: rank + 1,
                    files: file,
                });
            }
        }

        Ok(board)
    }

    /// Like [`Board::try_from_fen`], panicking on malformed input. Meant for
    /// tests and fixed positions.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Placement field of the position in FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }
}

/// Side to move from the second FEN field; `None` when the field is absent.
pub fn parse_side_to_move(fen: &str) -> Result<Option<Color>, FenError> {
    match fen.split_whitespace().nth(1) {
        None => Ok(None),
        Some("w") => Ok(Some(Color::White)),
        Some("b") => Ok(Some(Color::Black)),
        Some(other) => Err(FenError::InvalidSideToMove {
            found: other.to_string(),
        }),
    }
}
