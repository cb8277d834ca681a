//! Position analysis: parse a board and score every legal move.

use derive_more::{Display, Error};
use serde::Serialize;
use tictactoe_core::{Board, CELLS, Cell, Mark, Outcome, ScoredMove, best_move_for, score_moves};
use tracing::{debug, instrument};

/// Board text could not be parsed.
#[derive(Debug, Clone, Display, Error)]
#[display("Board parse error: {} at {}:{}", message, file, line)]
pub struct BoardParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardParseError {
    /// Creates a new parse error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Parses 9 cells written row by row.
///
/// `X` is the player, `O` the computer, `_` or `.` an empty cell. Whitespace,
/// `|` and `/` are ignored so `"XX_/OO_/___"` works too.
#[instrument]
pub fn parse_board(text: &str) -> Result<Board, BoardParseError> {
    let symbols: Vec<char> = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
        .collect();

    if symbols.len() != CELLS {
        return Err(BoardParseError::new(format!(
            "Expected {} cells, found {}",
            CELLS,
            symbols.len()
        )));
    }

    let mut cells = [Cell::Empty; CELLS];
    for (cell, symbol) in cells.iter_mut().zip(symbols) {
        *cell = match symbol.to_ascii_uppercase() {
            'X' => Cell::Occupied(Mark::Player),
            'O' => Cell::Occupied(Mark::Opponent),
            '_' | '.' => Cell::Empty,
            other => {
                return Err(BoardParseError::new(format!("Unexpected symbol '{}'", other)));
            }
        };
    }
    Ok(Board::from_cells(cells))
}

/// Result of analysing one board.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Outcome of the board as given.
    pub outcome: Outcome,
    /// Side whose moves were scored.
    pub to_move: Mark,
    /// Minimax value of every legal move, in index order.
    pub moves: Vec<ScoredMove>,
    /// Move the search would play.
    pub best: Option<usize>,
}

/// Scores the legal moves of `board` for the side to move.
#[instrument(skip(board), fields(board = %board))]
pub fn analyze(board: &Board) -> Analysis {
    let outcome = board.outcome();
    let to_move = board.next_to_move();
    let (moves, best) = if outcome.is_over() {
        (Vec::new(), None)
    } else {
        (score_moves(board, to_move), best_move_for(board, to_move))
    };
    debug!(?outcome, ?to_move, ?best, "Analysis complete");
    Analysis {
        outcome,
        to_move,
        moves,
        best,
    }
}

impl std::fmt::Display for Analysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Outcome: {}", self.outcome)?;
        if self.outcome.is_over() {
            return Ok(());
        }
        writeln!(f, "To move: {}", self.to_move)?;
        for scored in &self.moves {
            let marker = if Some(scored.index) == self.best { " *" } else { "" };
            writeln!(f, "  cell {}: {:+}{}", scored.index + 1, scored.score, marker)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_separators() {
        let board = parse_board("XX_|OO_|___").unwrap();
        assert_eq!(board.mark_count(Mark::Player), 2);
        assert_eq!(board.mark_count(Mark::Opponent), 2);
        assert!(board.is_empty(2));
    }

    #[test]
    fn test_parse_rejects_bad_symbol() {
        let err = parse_board("XX?OO____").unwrap_err();
        assert!(err.message.contains("Unexpected symbol"));
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(parse_board("XO").is_err());
    }

    #[test]
    fn test_analyze_finds_win_for_side_to_move() {
        // Equal counts: the player is to move and wins at index 2.
        let board = parse_board("XX_OO____").unwrap();
        let analysis = analyze(&board);
        assert_eq!(analysis.to_move, Mark::Player);
        assert_eq!(analysis.best, Some(2));
    }

    #[test]
    fn test_analyze_finished_board() {
        let board = parse_board("XOXXOOOXX").unwrap();
        let analysis = analyze(&board);
        assert_eq!(analysis.outcome, Outcome::Draw);
        assert!(analysis.moves.is_empty());
    }
}
