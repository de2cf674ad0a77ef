use super::{BoardError, CastleSide, Color, Move, Piece, Square};

/// A piece together with its owner.
pub type ColoredPiece = (Color, Piece);

/// Everything needed to reverse exactly one board mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UndoRecord {
    /// Plain relocation: the previous occupants of both squares.
    Ordinary {
        mv: Move,
        source: Option<ColoredPiece>,
        destination: Option<ColoredPiece>,
    },
    /// King and rook of `color` castled on `side`.
    Castle { color: Color, side: CastleSide },
    /// Pawn of `color` on `from` captured the pawn on `captured`.
    EnPassant {
        color: Color,
        from: Square,
        captured: Square,
    },
    /// Pawn on `mv.from` promoted on `mv.to`, replacing `captured`.
    Promotion {
        mv: Move,
        pawn: ColoredPiece,
        captured: Option<ColoredPiece>,
    },
}

/// 8×8 grid of optional pieces plus a stack of pending undo records.
///
/// Every mutator pushes one record; `undo_last_move` pops and reverses it,
/// `commit` pops and forgets it. Simulations nest by pushing and popping in
/// strict stack order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) grid: [[Option<ColoredPiece>; 8]; 8],
    pub(crate) undo_stack: Vec<UndoRecord>,
}

impl Board {
    /// Standard starting position.
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (i, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square(0, i), Color::White, *piece);
            board.set_piece(Square(7, i), Color::Black, *piece);
            board.set_piece(Square(1, i), Color::White, Piece::Pawn);
            board.set_piece(Square(6, i), Color::Black, Piece::Pawn);
        }
        board
    }

    #[must_use]
    pub fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
            undo_stack: Vec::new(),
        }
    }

    /// Place a piece, replacing whatever was there. Off-board squares are ignored.
    pub fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        if let Some(cell) = self.cell_mut(sq) {
            *cell = Some((color, piece));
        }
    }

    /// Empty a square, returning its previous occupant.
    pub fn remove_piece(&mut self, sq: Square) -> Option<ColoredPiece> {
        self.cell_mut(sq).and_then(Option::take)
    }

    /// The occupant of `sq`, or `None` when empty or off the board.
    ///
    /// `None` alone does not mean the square is a legal target; check
    /// [`Board::is_on_board`] separately.
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<ColoredPiece> {
        if self.is_on_board(sq) {
            self.grid[sq.0][sq.1]
        } else {
            None
        }
    }

    /// Get just the piece type on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    #[must_use]
    pub fn is_on_board(&self, sq: Square) -> bool {
        sq.is_valid()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.piece_at(sq) == Some((color, Piece::King)))
    }

    /// Squares and piece types of every piece belonging to `color`, a1 first.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some((c, piece)) if c == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// Grid of display codes such as `"W|K"` or `"B|P"`; row 0 is rank 1.
    #[must_use]
    pub fn to_codes(&self) -> [[Option<String>; 8]; 8] {
        let mut codes: [[Option<String>; 8]; 8] = Default::default();
        for sq in Square::all() {
            codes[sq.0][sq.1] = self.piece_at(sq).map(|(color, piece)| {
                format!("{}|{}", color.code(), piece.to_char().to_ascii_uppercase())
            });
        }
        codes
    }

    /// Whether the grids match, ignoring pending undo records.
    #[must_use]
    pub fn same_position(&self, other: &Board) -> bool {
        self.grid == other.grid
    }

    pub(crate) fn require_on_board(&self, sq: Square) -> Result<(), BoardError> {
        if self.is_on_board(sq) {
            Ok(())
        } else {
            Err(BoardError::OffBoard { square: sq })
        }
    }

    fn cell_mut(&mut self, sq: Square) -> Option<&mut Option<ColoredPiece>> {
        if sq.is_valid() {
            Some(&mut self.grid[sq.0][sq.1])
        } else {
            None
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
