//! Property-based tests using proptest.

use crate::board::{Board, Color, Move};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Strategy to generate a random move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=30usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

proptest! {
    /// Property: any sequence of pseudo-legal relocations unwinds to the start
    #[test]
    fn prop_apply_undo_restores_board(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let initial = board.clone();
        let mut color = Color::White;

        for _ in 0..num_moves {
            let moves: Vec<Move> = board.all_possible_moves(color);
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            board.apply_move(mv).unwrap();
            color = color.opponent();
        }

        while board.undo_depth() > 0 {
            board.undo_last_move().unwrap();
        }
        prop_assert!(board.same_position(&initial));
        prop_assert_eq!(board.to_fen(), initial.to_fen());
    }

    /// Property: FEN placement survives a format/parse cycle from any reached position
    #[test]
    fn prop_fen_placement_stable(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut color = Color::White;

        for _ in 0..num_moves {
            let moves = board.all_possible_moves(color);
            if moves.is_empty() {
                break;
            }
            board.apply_move(moves[rng.gen_range(0..moves.len())]).unwrap();
            color = color.opponent();
        }

        let reparsed = Board::try_from_fen(&board.to_fen()).unwrap();
        prop_assert!(reparsed.same_position(&board));
    }

    /// Property: pseudo-legal destinations are on the board and never hold own pieces
    #[test]
    fn prop_moves_never_land_on_own_piece(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut color = Color::White;

        for _ in 0..num_moves {
            let moves = board.all_possible_moves(color);
            for mv in &moves {
                prop_assert!(mv.to.is_valid());
                prop_assert_ne!(board.color_on(mv.to), Some(color));
            }
            if moves.is_empty() {
                break;
            }
            board.apply_move(moves[rng.gen_range(0..moves.len())]).unwrap();
            color = color.opponent();
        }
    }
}
