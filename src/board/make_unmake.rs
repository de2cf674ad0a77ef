use super::{Board, BoardError, CastleSide, Color, Move, Piece, Square, UndoRecord};

impl Board {
    /// Relocate the piece on `mv.from` to `mv.to`, overwriting any occupant.
    ///
    /// Performs no legality check. Pushes an ordinary undo record holding the
    /// previous occupants of both squares.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), BoardError> {
        self.require_on_board(mv.from)?;
        self.require_on_board(mv.to)?;

        let destination = self.piece_at(mv.to);
        let source = self.remove_piece(mv.from);
        self.grid[mv.to.0][mv.to.1] = source;

        self.undo_stack.push(UndoRecord::Ordinary {
            mv,
            source,
            destination,
        });
        Ok(())
    }

    /// Reverse the most recent mutation.
    ///
    /// Fails with [`BoardError::NoUndoRecord`] and leaves the grid untouched
    /// when nothing is pending.
    pub fn undo_last_move(&mut self) -> Result<(), BoardError> {
        let record = self.undo_stack.pop().ok_or(BoardError::NoUndoRecord)?;
        match record {
            UndoRecord::Ordinary {
                mv,
                source,
                destination,
            } => {
                self.grid[mv.from.0][mv.from.1] = source;
                self.grid[mv.to.0][mv.to.1] = destination;
            }
            UndoRecord::Castle { color, side } => {
                let king = self.remove_piece(side.king_target(color));
                let rook = self.remove_piece(side.rook_target(color));
                let king_home = CastleSide::king_home(color);
                let rook_home = side.rook_home(color);
                self.grid[king_home.0][king_home.1] = king;
                self.grid[rook_home.0][rook_home.1] = rook;
            }
            UndoRecord::EnPassant {
                color,
                from,
                captured,
            } => {
                if let Some(landing) = captured.offset(color.pawn_direction(), 0) {
                    let pawn = self.remove_piece(landing);
                    self.grid[from.0][from.1] = pawn;
                }
                self.set_piece(captured, color.opponent(), Piece::Pawn);
            }
            UndoRecord::Promotion { mv, pawn, captured } => {
                self.grid[mv.from.0][mv.from.1] = Some(pawn);
                self.grid[mv.to.0][mv.to.1] = captured;
            }
        }
        Ok(())
    }

    /// Castle kingside for `color`.
    ///
    /// Only checks occupancy: king and rook on their home squares and nothing
    /// between them. Whether the king is safe is the caller's concern.
    /// Returns `false` (no mutation, no record) when the check fails.
    pub fn castle_kingside(&mut self, color: Color) -> bool {
        self.castle(color, CastleSide::Kingside)
    }

    /// Castle queenside for `color`. Same contract as [`Board::castle_kingside`].
    pub fn castle_queenside(&mut self, color: Color) -> bool {
        self.castle(color, CastleSide::Queenside)
    }

    pub fn castle(&mut self, color: Color, side: CastleSide) -> bool {
        let rank = color.back_rank();
        let king_home = CastleSide::king_home(color);
        let rook_home = side.rook_home(color);

        if self.piece_at(king_home) != Some((color, Piece::King))
            || self.piece_at(rook_home) != Some((color, Piece::Rook))
            || side
                .between_files()
                .iter()
                .any(|&file| !self.is_empty(Square(rank, file)))
        {
            return false;
        }

        self.remove_piece(king_home);
        self.remove_piece(rook_home);
        self.set_piece(side.king_target(color), color, Piece::King);
        self.set_piece(side.rook_target(color), color, Piece::Rook);
        self.undo_stack.push(UndoRecord::Castle { color, side });
        true
    }

    /// Capture the pawn on `captured` en passant with the pawn on `from`.
    ///
    /// The capturing pawn lands on the square directly behind `captured`
    /// (one step in the capturing pawn's direction), not on `captured` itself.
    pub fn perform_en_passant(&mut self, from: Square, captured: Square) -> Result<(), BoardError> {
        let (color, piece) = self
            .piece_at(from)
            .ok_or(BoardError::EmptySquare { square: from })?;
        if piece != Piece::Pawn {
            return Err(BoardError::UnexpectedPiece { square: from });
        }
        if self.piece_at(captured) != Some((color.opponent(), Piece::Pawn)) {
            return Err(BoardError::UnexpectedPiece { square: captured });
        }
        let landing = captured
            .offset(color.pawn_direction(), 0)
            .ok_or(BoardError::OffBoard { square: captured })?;
        if !self.is_empty(landing) {
            return Err(BoardError::UnexpectedPiece { square: landing });
        }

        self.remove_piece(from);
        self.remove_piece(captured);
        self.set_piece(landing, color, Piece::Pawn);
        self.undo_stack.push(UndoRecord::EnPassant {
            color,
            from,
            captured,
        });
        Ok(())
    }

    /// Replace the pawn on `mv.from` with a new `piece` of the same color on
    /// `mv.to`, capturing whatever stood there.
    pub fn promote(&mut self, mv: Move, piece: Piece) -> Result<(), BoardError> {
        self.require_on_board(mv.to)?;
        let pawn = self
            .piece_at(mv.from)
            .ok_or(BoardError::EmptySquare { square: mv.from })?;
        if pawn.1 != Piece::Pawn {
            return Err(BoardError::UnexpectedPiece { square: mv.from });
        }

        let captured = self.piece_at(mv.to);
        self.remove_piece(mv.from);
        self.set_piece(mv.to, pawn.0, piece);
        self.undo_stack.push(UndoRecord::Promotion { mv, pawn, captured });
        Ok(())
    }

    /// Keep the most recent mutation: drop its undo record, leave the grid.
    pub fn commit(&mut self) -> Option<UndoRecord> {
        self.undo_stack.pop()
    }

    /// The record `undo_last_move` would consume next.
    #[must_use]
    pub fn undo_record(&self) -> Option<&UndoRecord> {
        self.undo_stack.last()
    }

    /// Overwrite the pending undo record, returning the one it replaced.
    ///
    /// Pushes when nothing is pending. Nested simulations in this crate never
    /// need this; it exists for callers that mutate the grid by other means
    /// and want `undo_last_move` to reverse a different move.
    pub fn replace_undo_record(&mut self, record: UndoRecord) -> Option<UndoRecord> {
        match self.undo_stack.last_mut() {
            Some(top) => Some(std::mem::replace(top, record)),
            None => {
                self.undo_stack.push(record);
                None
            }
        }
    }

    /// Number of mutations that can still be undone.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Undo until only `depth` records remain.
    pub fn unwind_to(&mut self, depth: usize) -> Result<(), BoardError> {
        while self.undo_stack.len() > depth {
            self.undo_last_move()?;
        }
        Ok(())
    }
}
