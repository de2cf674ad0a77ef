//! Plays seeded random games through the rules engine and prints each move.
//!
//! usage: random_game [seed] [games]

use std::env;

use rand::prelude::*;

use chess_rules::game::{Game, Outcome};

const MAX_PLIES: usize = 400;

fn main() {
    let args: Vec<String> = env::args().collect();
    let seed = match args.get(1).map(|s| s.parse::<u64>()) {
        None => 0,
        Some(Ok(seed)) => seed,
        Some(Err(_)) => {
            eprintln!("usage: random_game [seed] [games]");
            return;
        }
    };
    let games = args
        .get(2)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1);

    let mut rng = StdRng::seed_from_u64(seed);
    let (mut mates, mut stalemates, mut unfinished) = (0, 0, 0);

    for index in 0..games {
        println!("game {} (seed {seed})", index + 1);
        let mut game = Game::new();
        let mut last = None;

        for ply in 0..MAX_PLIES {
            let moves = match game.legal_moves() {
                Ok(moves) => moves,
                Err(err) => {
                    eprintln!("error: {err}");
                    return;
                }
            };
            let Some(&mv) = moves.choose(&mut rng) else {
                break;
            };
            let side = game.side_to_move();
            let outcome = game.play(mv);
            println!("{:>4}. {:<5} {mv}  {outcome}", ply + 1, side.to_string());
            if !outcome.is_success() {
                eprintln!("legal move {mv} was rejected");
                return;
            }
            last = Some(outcome);
            if game.is_over() {
                break;
            }
        }

        match last {
            Some(Outcome::Checkmate { .. }) => mates += 1,
            Some(Outcome::Stalemate) => stalemates += 1,
            _ => unfinished += 1,
        }
        println!();
    }

    println!("checkmates: {mates}");
    println!("stalemates: {stalemates}");
    println!("unfinished after {MAX_PLIES} plies: {unfinished}");
}
