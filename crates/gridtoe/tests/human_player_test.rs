//! Tests for the console human player.

use gridtoe::{Board, Choice, HumanPlayer, Mark, Move, Player, PlayerKind};
use std::io::Cursor;

type ScriptedHuman = HumanPlayer<Cursor<Vec<u8>>, Vec<u8>>;

fn human(script: &str) -> ScriptedHuman {
    HumanPlayer::new(
        "You",
        Mark::X,
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
    )
}

fn transcript(player: &ScriptedHuman) -> String {
    String::from_utf8_lossy(player.output()).into_owned()
}

#[test]
fn test_row_out_of_bounds_reprompts() {
    let board = Board::new(3).unwrap();
    let mut player = human("e5\nb2\n");

    assert_eq!(
        player.pick_move(&board).unwrap(),
        Choice::Play(Move::new(1, 1))
    );
    let out = transcript(&player);
    assert!(out.contains("Invalid move: You must select a row between A and C"));
    assert_eq!(out.matches("Your move (quit to exit):").count(), 2);
}

#[test]
fn test_column_out_of_bounds_reprompts() {
    let board = Board::new(3).unwrap();
    let mut player = human("a9\na0\nA3\n");

    assert_eq!(
        player.pick_move(&board).unwrap(),
        Choice::Play(Move::new(0, 2))
    );
    let out = transcript(&player);
    assert_eq!(
        out.matches("Invalid move: You must select a column between 1 and 3")
            .count(),
        2
    );
}

#[test]
fn test_occupied_cell_reprompts() {
    let mut board = Board::new(3).unwrap();
    board.apply(Move::new(2, 0), Mark::O);
    let mut player = human("c1\nc2\n");

    assert_eq!(
        player.pick_move(&board).unwrap(),
        Choice::Play(Move::new(2, 1))
    );
    assert!(transcript(&player).contains("Invalid move: position already taken"));
}

#[test]
fn test_quit_in_any_case() {
    let board = Board::new(3).unwrap();
    for script in ["quit\n", "QUIT\n", "Quit\n"] {
        let mut player = human(script);
        assert_eq!(player.pick_move(&board).unwrap(), Choice::Quit);
    }
}

#[test]
fn test_malformed_token_reprompts() {
    let board = Board::new(3).unwrap();
    let mut player = human("abc\n7\nquit\n");

    assert_eq!(player.pick_move(&board).unwrap(), Choice::Quit);
    let out = transcript(&player);
    assert_eq!(
        out.matches("please specify two characters").count(),
        2
    );
}

#[test]
fn test_identity() {
    let player = human("");
    assert_eq!(player.mark(), Mark::X);
    assert_eq!(player.kind(), PlayerKind::Human);
    assert_eq!(player.name(), "You");
}
