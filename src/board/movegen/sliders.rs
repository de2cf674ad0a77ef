use super::super::attack_tables::{DIAGONAL, ORTHOGONAL};
use super::super::{Board, Color, Move, Square};

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    fn directions(self) -> &'static [(isize, isize)] {
        const QUEEN: [(isize, isize); 8] = [
            ORTHOGONAL[0],
            ORTHOGONAL[1],
            ORTHOGONAL[2],
            ORTHOGONAL[3],
            DIAGONAL[0],
            DIAGONAL[1],
            DIAGONAL[2],
            DIAGONAL[3],
        ];
        match self {
            SliderType::Bishop => &DIAGONAL,
            SliderType::Rook => &ORTHOGONAL,
            SliderType::Queen => &QUEEN,
        }
    }
}

impl Board {
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        slider: SliderType,
    ) -> Vec<Move> {
        let mut moves = Vec::new();
        for &(dr, df) in slider.directions() {
            let mut current = from;
            while let Some(next) = current.offset(dr, df) {
                match self.color_on(next) {
                    None => moves.push(Move::new(from, next)),
                    Some(occupant) => {
                        if occupant != color {
                            moves.push(Move::new(from, next));
                        }
                        break;
                    }
                }
                current = next;
            }
        }
        moves
    }
}
