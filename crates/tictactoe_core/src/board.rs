//! The 3x3 board and the operations that change it.

use super::error::MoveError;
use super::rules;
use super::types::{Cell, Mark, Outcome};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// 3x3 tic-tac-toe board.
///
/// Boards are small `Copy` values. Applying a move returns a new board and
/// leaves the original untouched, so a board handed to the search can never
/// be altered by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELLS],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Builds a board from raw cells.
    pub fn from_cells(cells: [Cell; CELLS]) -> Self {
        Self { cells }
    }

    /// Returns the cell at `index`, or `None` outside 0-8.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Writes `mark` at `index`, returning the new board.
    ///
    /// # Errors
    ///
    /// - [`MoveError::IndexOutOfRange`] when `index` is not in 0-8.
    /// - [`MoveError::CellOccupied`] when the cell already holds a mark.
    #[instrument(skip(self), fields(board = %self))]
    pub fn apply_move(&self, index: usize, mark: Mark) -> Result<Board, MoveError> {
        match self.get(index) {
            None => Err(MoveError::IndexOutOfRange { index }),
            Some(Cell::Occupied(_)) => Err(MoveError::CellOccupied { index }),
            Some(Cell::Empty) => {
                trace!(index, %mark, "Placing mark");
                Ok(self.placed(index, mark))
            }
        }
    }

    /// Copy of this board with `mark` written at `index`.
    ///
    /// Callers guarantee `index` is an empty cell; the search only feeds it
    /// indices taken from [`Board::available_moves`].
    pub(crate) fn placed(&self, index: usize, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[index] = Cell::Occupied(mark);
        next
    }

    /// Indices of empty cells in ascending order.
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Counts the cells holding `mark`.
    pub fn mark_count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(mark))
            .count()
    }

    /// Side to move under strict alternation with the player starting.
    pub fn next_to_move(&self) -> Mark {
        if self.mark_count(Mark::Player) > self.mark_count(Mark::Opponent) {
            Mark::Opponent
        } else {
            Mark::Player
        }
    }

    /// Mark holding a complete triple, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::check_winner(self)
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Full board with no winner.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(self)
    }

    /// Current outcome, recomputed from the cells.
    pub fn outcome(&self) -> Outcome {
        if let Some(mark) = self.winner() {
            Outcome::win_for(mark)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
