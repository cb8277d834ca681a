//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark};

/// The 8 winning triples, checked in this order.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark filling the first complete triple. Both sides holding a
/// triple at once cannot happen under alternating play.
pub fn check_winner(board: &Board) -> Option<Mark> {
    let cells = board.cells();
    LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Cell::Occupied(mark) if cells[b] == cells[a] && cells[c] == cells[a] => Some(mark),
        _ => None,
    })
}
