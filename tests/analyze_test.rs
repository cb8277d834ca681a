//! Board parsing and move analysis.

use tictactoe_ai::{analyze, parse_board};
use tictactoe_core::{Mark, Outcome};

#[test]
fn test_analyze_finds_winning_move() {
    let board = parse_board("XX_OO____").unwrap();
    let analysis = analyze(&board);
    assert_eq!(analysis.outcome, Outcome::InProgress);
    assert_eq!(analysis.to_move, Mark::Player);
    assert_eq!(analysis.best, Some(2));
    assert_eq!(analysis.moves.len(), 5);
}

#[test]
fn test_analyze_opponent_to_move() {
    let analysis = analyze(&parse_board("X........").unwrap());
    assert_eq!(analysis.to_move, Mark::Opponent);
    assert_eq!(analysis.best, Some(4));
    assert!(analysis.moves.iter().all(|scored| scored.score <= 0));
}

#[test]
fn test_analyze_finished_board() {
    let analysis = analyze(&parse_board("XXX OO_ ___").unwrap());
    assert_eq!(analysis.outcome, Outcome::PlayerWin);
    assert!(analysis.moves.is_empty());
    assert_eq!(analysis.best, None);
    assert_eq!(analysis.to_string(), "Outcome: Player wins\n");
}

#[test]
fn test_parse_rejects_short_board() {
    assert!(parse_board("XO").is_err());
    assert!(parse_board("XOXOXOXOXO").is_err());
}

#[test]
fn test_analysis_serializes() {
    let analysis = analyze(&parse_board("XX_OO____").unwrap());
    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["best"], 2);
    assert_eq!(json["moves"][0]["index"], 2);
}
