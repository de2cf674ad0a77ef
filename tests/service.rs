use std::thread;

use chess_rules::board::{Color, Piece};
use chess_rules::game::{CastlingPolicy, GameConfig, Outcome};
use chess_rules::service::{GameService, RESTART_MESSAGE};

#[test]
fn board_view_of_start_position() {
    let service = GameService::new();
    let view = service.board();
    assert_eq!(view.squares[0][4].as_deref(), Some("W|K"));
    assert_eq!(view.squares[7][3].as_deref(), Some("B|Q"));
    assert_eq!(view.squares[1][0].as_deref(), Some("W|P"));
    assert_eq!(view.squares[4][4], None);
    assert_eq!(view.side_to_move, Color::White);
    assert!(!view.in_check);
    assert!(!view.game_over);
}

#[test]
fn moves_and_restart() {
    let service = GameService::new();
    assert_eq!(service.make_move("E2", "E4"), Outcome::Moved);
    assert_eq!(service.board().squares[3][4].as_deref(), Some("W|P"));
    assert_eq!(service.board().side_to_move, Color::Black);

    assert_eq!(service.restart(), RESTART_MESSAGE);
    assert_eq!(service.restart(), "Game restarted.");
    let view = service.board();
    assert_eq!(view.squares[1][4].as_deref(), Some("W|P"));
    assert_eq!(view.side_to_move, Color::White);
}

#[test]
fn restart_after_game_over() {
    let service = GameService::new();
    for (from, to) in [("F2", "F3"), ("E7", "E5"), ("G2", "G4"), ("D8", "H4")] {
        assert!(service.make_move(from, to).is_success());
    }
    assert!(service.board().game_over);
    assert_eq!(service.make_move("A2", "A3"), Outcome::GameOver);
    service.restart();
    assert_eq!(service.make_move("A2", "A3"), Outcome::Moved);
}

#[test]
fn clones_share_one_game_across_threads() {
    let service = GameService::new();
    let handle = {
        let service = service.clone();
        thread::spawn(move || service.make_move("D2", "D4"))
    };
    assert_eq!(handle.join().unwrap(), Outcome::Moved);
    assert_eq!(service.make_move("D7", "D5"), Outcome::Moved);
    assert_eq!(service.with_game(|game| game.side_to_move()), Color::White);
    assert_eq!(
        service.with_game(|game| game.legal_moves().unwrap().len()),
        27
    );
}

#[test]
fn promotion_choice_and_config() {
    let config = GameConfig::new().with_castling(CastlingPolicy::Legacy);
    let service = GameService::with_config(config.clone());
    assert_eq!(service.with_game(|game| game.config().clone()), config);
    assert_eq!(
        service.make_move_with_promotion("E2", "E4", Piece::Queen),
        Outcome::IllegalMove
    );
    assert_eq!(
        service.make_move_with_promotion("E2", "E4", Piece::Queen).to_string(),
        "Invalid move: The selected move is not valid for the chosen piece."
    );
}

#[cfg(feature = "serde")]
#[test]
fn board_view_serializes() {
    let service = GameService::new();
    let json = serde_json::to_value(service.board()).unwrap();
    assert_eq!(json["squares"][0][4], "W|K");
    assert_eq!(json["side_to_move"], "White");
    let outcome = serde_json::to_value(Outcome::Check {
        checked: Color::Black,
    })
    .unwrap();
    assert_eq!(outcome["Check"]["checked"], "Black");
}
