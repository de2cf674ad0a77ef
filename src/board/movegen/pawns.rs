use super::super::{Board, Color, Move, Square};

/// The two diagonal squares a pawn of `color` on `from` captures on.
pub(super) fn pawn_capture_squares(from: Square, color: Color) -> impl Iterator<Item = Square> {
    let dir = color.pawn_direction();
    [-1, 1]
        .into_iter()
        .filter_map(move |df| from.offset(dir, df))
}

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        let dir = color.pawn_direction();

        if let Some(forward_sq) = from.offset(dir, 0) {
            if self.is_empty(forward_sq) {
                moves.push(Move::new(from, forward_sq));
                if from.rank() == color.pawn_start_rank() {
                    if let Some(double_sq) = from.offset(2 * dir, 0) {
                        if self.is_empty(double_sq) {
                            moves.push(Move::new(from, double_sq));
                        }
                    }
                }
            }
        }

        for target_sq in pawn_capture_squares(from, color) {
            if matches!(self.color_on(target_sq), Some(target_color) if target_color != color) {
                moves.push(Move::new(from, target_sq));
            }
        }

        moves
    }
}
