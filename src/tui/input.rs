//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe_core::Position;

/// Moves the cursor one cell with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    match key {
        KeyCode::Up => Position::at(row.saturating_sub(1), col),
        KeyCode::Down => Position::at(row + 1, col),
        KeyCode::Left => Position::at(row, col.saturating_sub(1)),
        KeyCode::Right => Position::at(row, col + 1),
        _ => cursor,
    }
}
