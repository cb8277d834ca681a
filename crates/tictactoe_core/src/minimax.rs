//! Exhaustive minimax search.
//!
//! The board has at most 9! continuations, so the search walks every line to
//! the end without depth limits, pruning or transposition tables. Each level
//! works on a fresh copy of the board, which keeps the caller's board intact.

use super::board::Board;
use super::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a line won by the searching side.
pub const WIN: i32 = 1;
/// Score of a drawn line.
pub const DRAW: i32 = 0;
/// Score of a line lost by the searching side.
pub const LOSS: i32 = -1;

/// A legal move together with its minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Board index of the move.
    pub index: usize,
    /// Value of the move for the side that plays it.
    pub score: i32,
}

/// Value of `board` for `perspective`, with `to_move` about to play.
///
/// Layers where `to_move == perspective` maximize, the others minimize.
pub fn minimax(board: &Board, to_move: Mark, perspective: Mark) -> i32 {
    if let Some(winner) = board.winner() {
        return if winner == perspective { WIN } else { LOSS };
    }
    if board.is_full() {
        return DRAW;
    }

    let scores = board
        .available_moves()
        .into_iter()
        .map(|index| minimax(&board.placed(index, to_move), to_move.other(), perspective));

    let best = if to_move == perspective {
        scores.max()
    } else {
        scores.min()
    };
    best.unwrap_or(DRAW)
}

/// Scores every legal move for `mark`, in ascending index order.
#[instrument(skip(board), fields(board = %board))]
pub fn score_moves(board: &Board, mark: Mark) -> Vec<ScoredMove> {
    board
        .available_moves()
        .into_iter()
        .map(|index| ScoredMove {
            index,
            score: minimax(&board.placed(index, mark), mark.other(), mark),
        })
        .collect()
}

/// Best move for `mark`.
///
/// Ties go to the lowest index, so the result is reproducible. Returns `None`
/// when the board has no empty cell.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move_for(board: &Board, mark: Mark) -> Option<usize> {
    let best = score_moves(board, mark)
        .into_iter()
        .fold(None, |best: Option<ScoredMove>, candidate| match best {
            Some(current) if current.score >= candidate.score => Some(current),
            _ => Some(candidate),
        });

    if let Some(choice) = best {
        debug!(index = choice.index, score = choice.score, %mark, "Search chose move");
    }
    best.map(|choice| choice.index)
}
