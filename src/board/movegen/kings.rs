use super::super::attack_tables::KING_TARGETS;
use super::super::{Board, Color, Move, Square};

impl Board {
    /// One-step king moves. Castling is a separate rule, not generated here.
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color) -> Vec<Move> {
        KING_TARGETS[from.as_index()]
            .iter()
            .filter(|&&to| self.is_enterable(to, color))
            .map(|&to| Move::new(from, to))
            .collect()
    }
}
