use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Board, Color, Move, Square};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color) -> Vec<Move> {
        KNIGHT_TARGETS[from.as_index()]
            .iter()
            .filter(|&&to| self.is_enterable(to, color))
            .map(|&to| Move::new(from, to))
            .collect()
    }
}
