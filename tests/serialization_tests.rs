//! Saved-game round trips.
//!
//! A collaborator that stores games must get back the same board, captures,
//! turn, undo snapshots, history and winner.

use kuba::{Direction, GameState, KubaGame, Marble, MoveError, PlayerId, StateError};

fn midgame() -> KubaGame {
    let mut game = KubaGame::new("Ana", Marble::White, "Ben", Marble::Black).unwrap();
    assert!(game.make_move("Ana", (0, 0), Direction::Backward));
    assert!(game.make_move("Ben", (0, 6), Direction::Backward));
    assert!(game.make_move("Ana", (1, 1), Direction::Forward));
    game
}

#[test]
fn test_bincode_round_trip_midgame() {
    let game = midgame();

    let restored = KubaGame::from_bytes(&game.to_bytes().unwrap()).unwrap();

    assert_eq!(restored, game);
    assert_eq!(restored.current_turn(), Some("Ben"));
    assert_eq!(restored.history().len(), 3);
    for player in PlayerId::all() {
        assert_eq!(
            restored.state().last_board(player),
            game.state().last_board(player)
        );
    }
}

#[test]
fn test_restored_game_keeps_undo_rule() {
    let mut game = KubaGame::builder()
        .player("Ana", Marble::White)
        .player("Ben", Marble::Black)
        .board(
            kuba::Board::from_rows([
                ".......",
                ".......",
                ".......",
                "WB.....",
                ".......",
                ".......",
                "W.....B",
            ])
            .unwrap(),
        )
        .build()
        .unwrap();
    assert!(game.make_move("Ben", (6, 6), Direction::Forward));
    assert!(game.make_move("Ana", (3, 0), Direction::Right));

    let mut restored = KubaGame::from_bytes(&game.to_bytes().unwrap()).unwrap();

    assert_eq!(
        restored.try_move("Ben", (3, 2), Direction::Left),
        Err(MoveError::UndoRejected)
    );
}

#[test]
fn test_json_round_trip_finished_game() {
    let mut game = KubaGame::builder()
        .player("Ana", Marble::Black)
        .player("Ben", Marble::White)
        .board(
            kuba::Board::from_rows([
                ".......",
                ".......",
                ".......",
                ".......",
                ".......",
                ".......",
                "BW.....",
            ])
            .unwrap(),
        )
        .build()
        .unwrap();
    assert!(game.make_move("Ben", (6, 1), Direction::Left));
    assert_eq!(game.winner(), Some("Ben"));

    let json = serde_json::to_string(&game).unwrap();
    let restored: KubaGame = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, game);
    assert_eq!(restored.winner(), Some("Ben"));
}

#[test]
fn test_state_json_round_trip() {
    let game = midgame();
    let json = serde_json::to_string(game.state()).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(&restored, game.state());
}

#[test]
fn test_decode_rejects_inconsistent_players() {
    let game = midgame();
    let json = serde_json::to_string(&game)
        .unwrap()
        .replace("\"Black\"", "\"White\"");
    let tampered: KubaGame = serde_json::from_str(&json).unwrap();

    let err = KubaGame::from_bytes(&tampered.to_bytes().unwrap()).unwrap_err();
    assert!(matches!(err, StateError::Config(_)));
}

#[test]
fn test_json_rejects_out_of_range_active_player() {
    let mut game = KubaGame::new("Ana", Marble::White, "Ben", Marble::Black).unwrap();
    assert!(game.make_move("Ana", (0, 0), Direction::Backward));

    let json = serde_json::to_string(&game).unwrap();
    assert!(json.contains("\"active_player\":1"));
    let tampered = json.replace("\"active_player\":1", "\"active_player\":5");

    assert!(serde_json::from_str::<KubaGame>(&tampered).is_err());
}

#[test]
fn test_from_bytes_rejects_out_of_range_active_player() {
    let mut game = KubaGame::new("Ana", Marble::White, "Ben", Marble::Black).unwrap();
    assert!(game.make_move("Ana", (0, 0), Direction::Backward));
    let mut bytes = game.to_bytes().unwrap();

    // Layout: captures_to_win, board, players, then `Option<PlayerId>`.
    let board = bincode::serialize(game.state().board()).unwrap();
    let players = bincode::serialize(game.state().players()).unwrap();
    let at = 1 + board.len() + players.len();
    assert_eq!(&bytes[at..at + 2], &[1, 1]);

    bytes[at + 1] = 5;

    assert!(matches!(
        KubaGame::from_bytes(&bytes),
        Err(StateError::Decode(_))
    ));
}
