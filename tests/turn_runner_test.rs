//! Tests for one-shot turn handling over an in-memory store.

use issue_arcade::{
    BoardSnapshot, GameStatus, Grammar, MemoryStore, MoveError, Outcome, Player, StateStore, Target, TurnRunner,
    Variant, VariantConfig,
};

fn runner(variant: Variant) -> TurnRunner<MemoryStore> {
    TurnRunner::new(variant, Grammar::for_variant(variant), MemoryStore::new(variant))
}

#[test]
fn test_tictactoe_game_to_win() {
    let mut runner = runner(Variant::TicTacToe);
    let titles = ["move: A1", "move: A2", "move: B1", "move: B2"];
    for title in titles {
        let report = runner.handle(title, Some("alice")).unwrap();
        assert!(report.message().starts_with("Move successful! Next player: "));
    }

    let report = runner.handle("move: C1", Some("bob")).unwrap();
    assert_eq!(report.message(), "X wins! Create an issue with 'reset' to play again.");
    assert_eq!(report.outcome(), &Outcome::Moved(GameStatus::Won(Player::First)));

    let stats = runner.store().load_stats().unwrap();
    assert_eq!(*stats.total_moves(), 5);
    assert_eq!(*stats.completed_games(), 1);
    assert_eq!(stats.player_count(), 2);
}

#[test]
fn test_move_after_game_over() {
    let mut runner = runner(Variant::TicTacToe);
    for title in ["0", "3", "1", "4", "2"] {
        runner.handle(title, None).unwrap();
    }
    let writes = runner.store().writes();

    let report = runner.handle("move: C3", None).unwrap();
    assert_eq!(
        report.message(),
        "Game is over! Create an issue with 'reset' to start a new game."
    );
    assert_eq!(report.outcome(), &Outcome::Rejected(MoveError::GameOver));
    assert!(!report.changed_state());
    assert_eq!(runner.store().writes(), writes);
}

#[test]
fn test_occupied_cell_message() {
    let mut runner = runner(Variant::TicTacToe);
    runner.handle("move: B2", None).unwrap();
    let report = runner.handle("move: b2", None).unwrap();
    assert_eq!(report.message(), "Position B2 is already taken!");
    assert_eq!(runner.store().snapshot().unwrap().move_count(), 1);
}

#[test]
fn test_column_full_message() {
    let mut runner = runner(Variant::ConnectFour);
    for _ in 0..6 {
        runner.handle("c4move: 2", None).unwrap();
    }
    let report = runner.handle("c4move: 2", None).unwrap();
    assert_eq!(report.message(), "Column 2 is full! Choose another column.");
}

#[test]
fn test_unrecognized_writes_nothing() {
    let mut runner = runner(Variant::ConnectFour);
    let report = runner.handle("c4move: 9", None).unwrap();
    assert_eq!(
        report.message(),
        "Invalid move format. Use 'c4move: 4' (column 1-7) or 'c4reset' to restart."
    );
    assert_eq!(report.outcome(), &Outcome::Unrecognized);
    assert_eq!(runner.store().writes(), 0);
    assert!(runner.store().snapshot().is_none());

    let mut ttt = self::runner(Variant::TicTacToe);
    let report = ttt.handle("hello there", None).unwrap();
    assert_eq!(
        report.message(),
        "Invalid move format. Use 'move: A1' format or 'reset' to restart."
    );
}

#[test]
fn test_reset_restores_fresh_board() {
    let mut runner = runner(Variant::ConnectFour);
    runner.handle("c4move: 4", None).unwrap();
    runner.handle("c4move: 5", None).unwrap();

    let report = runner.handle("C4RESET", None).unwrap();
    assert_eq!(report.message(), "Game reset! 🔴 starts.");
    assert_eq!(report.outcome(), &Outcome::Reset);
    assert_eq!(
        runner.store().snapshot(),
        Some(&BoardSnapshot::new(Variant::ConnectFour))
    );

    // Reset does not count as a move.
    let stats = runner.store().load_stats().unwrap();
    assert_eq!(*stats.total_moves(), 2);
}

#[test]
fn test_draw_counts_completion() {
    let mut runner = runner(Variant::TicTacToe);
    let order = ["0", "1", "2", "4", "3", "5", "7", "6"];
    for title in order {
        runner.handle(title, None).unwrap();
    }
    let report = runner.handle("8", None).unwrap();
    assert_eq!(
        report.message(),
        "Game ended in a draw! Create an issue with 'reset' to play again."
    );
    assert_eq!(*runner.store().load_stats().unwrap().completed_games(), 1);
}

#[test]
fn test_blank_author_is_anonymous() {
    let mut runner = runner(Variant::ConnectFour);
    runner.handle("c4move: 1", Some("   ")).unwrap();
    let snapshot = runner.into_store().snapshot().cloned().unwrap();
    assert_eq!(snapshot.history()[0].author, None);
}

#[test]
fn test_configured_reset_phrase_in_hints() {
    let config = VariantConfig::for_variant(Variant::TicTacToe)
        .with_reset_phrases(vec!["new game".to_string(), "reset".to_string()]);
    let mut runner = TurnRunner::new(
        Variant::TicTacToe,
        config.grammar(),
        MemoryStore::with_snapshot(
            BoardSnapshot::new(Variant::TicTacToe)
                .apply_move(Target::Cell(4), None)
                .unwrap(),
        ),
    );

    let report = runner.handle("nonsense", None).unwrap();
    assert!(report.message().contains("'new game'"));
    assert_eq!(runner.handle("New Game", None).unwrap().outcome(), &Outcome::Reset);
}
