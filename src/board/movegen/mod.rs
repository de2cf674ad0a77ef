//! Pseudo-legal move generation.
//!
//! Destinations follow each piece's movement pattern and board occupancy
//! only. Nothing here knows about check, castling or en passant; those are
//! layered on by the game rules.

mod kings;
mod knights;
mod pawns;
mod sliders;

use sliders::SliderType;

use super::{Board, Color, Move, Piece, Square};

impl Board {
    /// Pseudo-legal moves of the piece on `from`; empty if the square is empty.
    #[must_use]
    pub fn possible_moves(&self, from: Square) -> Vec<Move> {
        match self.piece_at(from) {
            Some((color, piece)) => self.generate_piece_moves(from, color, piece),
            None => Vec::new(),
        }
    }

    /// Pseudo-legal moves of every piece of `color`.
    #[must_use]
    pub fn all_possible_moves(&self, color: Color) -> Vec<Move> {
        self.pieces_of(color)
            .flat_map(|(from, piece)| self.generate_piece_moves(from, color, piece))
            .collect()
    }

    /// Squares the piece on `from` could move to or capture on.
    ///
    /// Same as the destinations of [`Board::possible_moves`] except pawns,
    /// which contribute their two diagonal capture squares whatever stands
    /// there, and never their forward pushes.
    #[must_use]
    pub fn controlled_squares(&self, from: Square) -> Vec<Square> {
        match self.piece_at(from) {
            Some((color, Piece::Pawn)) => pawns::pawn_capture_squares(from, color).collect(),
            Some((color, piece)) => self
                .generate_piece_moves(from, color, piece)
                .into_iter()
                .map(Move::to)
                .collect(),
            None => Vec::new(),
        }
    }

    pub(crate) fn generate_piece_moves(&self, from: Square, color: Color, piece: Piece) -> Vec<Move> {
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, color),
            Piece::Knight => self.generate_knight_moves(from, color),
            Piece::Bishop => self.generate_slider_moves(from, color, SliderType::Bishop),
            Piece::Rook => self.generate_slider_moves(from, color, SliderType::Rook),
            Piece::Queen => self.generate_slider_moves(from, color, SliderType::Queen),
            Piece::King => self.generate_king_moves(from, color),
        }
    }

    /// True if `to` is empty or holds a piece of the other color.
    #[inline]
    fn is_enterable(&self, to: Square, color: Color) -> bool {
        self.color_on(to) != Some(color)
    }
}
