//! End-to-end sessions through the terminal console and file records.

use rand::{SeedableRng, rngs::StdRng};
use std::fs;
use std::io::Cursor;
use strictly_inarow::{Position, Preset, RecordStore, Square, TurnEngine};
use strictly_rows::{FileRecordStore, GameSettings, Prompter, TerminalConsole, configure};

type TestPrompter = Prompter<Cursor<Vec<u8>>, Vec<u8>>;

fn prompter(input: &str) -> TestPrompter {
    Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn transcript(console: TerminalConsole<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(console.into_inner().into_inner().1).unwrap()
}

#[test]
fn test_two_local_players_first_row_wins() {
    let dir = tempfile::tempdir().unwrap();
    // Setup, then moves in play order: the starter takes the top row while
    // the second player first tries the starter's cell.
    let input = concat!(
        "2\nAda\nX\nBo\nO\n",
        "1\n1\n",
        "1\n1\n2\n1\n",
        "1\n2\n",
        "2\n2\n",
        "1\n3\n",
        "no\n",
    );
    let mut prompter = prompter(input);
    let config = configure(&mut prompter, Some(Preset::TicTacToe)).unwrap();

    let store = FileRecordStore::new(dir.path());
    let mut engine = TurnEngine::new(config, store, StdRng::seed_from_u64(11));
    let mut console = TerminalConsole::new(prompter);
    engine.run(&mut console).unwrap();

    let [first, second] = engine.players();
    let (winner, loser) = if *first.record().wins() == 1 {
        (first, second)
    } else {
        (second, first)
    };
    assert_eq!(*winner.record().wins(), 1);
    assert_eq!(*loser.record().losses(), 1);
    assert_eq!(engine.rounds_played(), 1);

    let out = transcript(console);
    assert!(out.contains("The cell you selected is occupied."));
    assert!(out.contains(&format!("{} wins!", winner.name())));
    assert!(out.contains(&format!("{}'s statistics", loser.name())));
    assert!(out.contains("Would you like to play again (yes or no)? "));
    assert!(out.trim_end().ends_with("Thanks for playing!"));

    let saved = engine.store();
    assert_eq!(
        fs::read_to_string(saved.path_for(winner.name())).unwrap(),
        "1\n0\n1"
    );
    assert_eq!(saved.load(loser.name()).total_games(), &1);
}

#[test]
fn test_gravity_board_reasks_for_full_column() {
    let dir = tempfile::tempdir().unwrap();
    // 3×4 gravity board, three in a row. The starter and the second player
    // fill column 1, the second player then picks the full column, is
    // re-asked, and goes on to stack column 2 for a vertical win.
    let input = concat!(
        "custom\n3\n4\n3\nyes\n2\nAda\nX\nBo\nO\n",
        "1\n", // starter
        "1\n", // second
        "1\n", // starter, column 1 now full
        "1\n2\n", // second: full column, then column 2
        "3\n", // starter
        "2\n", // second
        "4\n", // starter
        "2\n", // second completes column 2
        "no\n",
    );
    let mut prompter = prompter(input);
    let config = configure(&mut prompter, None).unwrap();

    let mut engine = TurnEngine::new(
        config,
        FileRecordStore::new(dir.path()),
        StdRng::seed_from_u64(4),
    );
    let mut console = TerminalConsole::new(prompter);
    engine.run(&mut console).unwrap();

    let [first, second] = engine.players();
    let (winner, starter) = if *first.record().wins() == 1 {
        (first, second)
    } else {
        (second, first)
    };
    assert_eq!(*starter.record().losses(), 1);

    let board = engine.board();
    let at = |row, col| board.get(Position::new(row, col)).unwrap();
    // Column 1 alternates from the bottom up.
    assert_eq!(at(2, 0), Square::Occupied(*starter.symbol()));
    assert_eq!(at(1, 0), Square::Occupied(*winner.symbol()));
    assert_eq!(at(0, 0), Square::Occupied(*starter.symbol()));
    for row in 0..3 {
        assert_eq!(at(row, 1), Square::Occupied(*winner.symbol()));
    }
    // Single drops sit on the bottom row.
    assert_eq!(at(2, 2), Square::Occupied(*starter.symbol()));
    assert_eq!(at(2, 3), Square::Occupied(*starter.symbol()));
    assert_eq!(at(1, 2), Square::Empty);
    assert_eq!(at(1, 3), Square::Empty);

    let out = transcript(console);
    assert!(out.contains(
        "Input must be 2, 3, or 4.\nEnter the column you would like to select: "
    ));
    assert!(out.contains(&format!("{} wins!", winner.name())));
}

#[test]
fn test_records_carry_over_between_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let settings = GameSettings::from_toml(
        r#"
        preset = "connect-four"

        [[players]]
        computer = "basic"
        symbol = "X"

        [[players]]
        computer = "strategic"
        symbol = "O"
        "#,
    )
    .unwrap();

    for (session, answers) in [(1, "no\n"), (2, "yes\nno\n")] {
        let config = settings.clone().into_config(None).unwrap();
        let store = FileRecordStore::new(dir.path());
        let mut engine = TurnEngine::new(config, store, StdRng::seed_from_u64(session));
        let mut console = TerminalConsole::new(prompter(answers));
        engine.run(&mut console).unwrap();

        let out = transcript(console);
        assert!(out.contains("EasyBot's turn"));
        assert!(out.contains("Thanks for playing!"));
    }

    // One round in the first session, two in the second.
    let store = FileRecordStore::new(dir.path());
    for name in ["EasyBot", "HardBot"] {
        assert_eq!(*store.load(name).total_games(), 3, "{name}");
    }
    let easy = store.load("EasyBot");
    let hard = store.load("HardBot");
    assert_eq!(easy.wins(), hard.losses());
    assert_eq!(easy.losses(), hard.wins());
}

#[test]
fn test_invalid_answer_is_reasked() {
    let dir = tempfile::tempdir().unwrap();
    let settings = GameSettings::from_toml(
        "preset = \"tic-tac-toe\"\n\
         [[players]]\ncomputer = \"basic\"\nsymbol = \"X\"\n\
         [[players]]\ncomputer = \"strategic\"\nsymbol = \"O\"\n",
    )
    .unwrap();
    let config = settings.into_config(None).unwrap();
    let mut engine = TurnEngine::new(
        config,
        FileRecordStore::new(dir.path()),
        StdRng::seed_from_u64(3),
    );
    let mut console = TerminalConsole::new(prompter("maybe\nNO\n"));
    engine.run(&mut console).unwrap();

    assert!(transcript(console).contains("Input must be yes or no."));
}
