//! Direction constants and precomputed step targets.

use once_cell::sync::Lazy;

use super::Square;

pub(crate) const ORTHOGONAL: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const DIAGONAL: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

fn step_targets(deltas: &[(isize, isize)]) -> Vec<Vec<Square>> {
    Square::all()
        .map(|sq| {
            deltas
                .iter()
                .filter_map(|&(dr, df)| sq.offset(dr, df))
                .collect()
        })
        .collect()
}

/// On-board knight destinations, indexed by `Square::as_index`.
pub(crate) static KNIGHT_TARGETS: Lazy<Vec<Vec<Square>>> =
    Lazy::new(|| step_targets(&KNIGHT_OFFSETS));

/// On-board king destinations, indexed by `Square::as_index`.
pub(crate) static KING_TARGETS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| step_targets(&KING_OFFSETS));
