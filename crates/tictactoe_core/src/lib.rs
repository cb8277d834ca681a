//! Pure tic-tac-toe game logic with a minimax computer opponent.
//!
//! The crate has no I/O. A front end drives it through a handful of calls:
//!
//! ```
//! use tictactoe_core::{Difficulty, Mark, Outcome, apply_move, new_game, opponent_move};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let board = new_game();
//! let board = apply_move(&board, 4, Mark::Player)?;
//! let reply = opponent_move(&board, Difficulty::Hard, &mut rng).expect("empty cells remain");
//! let board = apply_move(&board, reply, Mark::Opponent)?;
//! assert_eq!(board.outcome(), Outcome::InProgress);
//! # Ok::<(), tictactoe_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod minimax;
mod opponent;
mod position;
mod rules;
mod types;

pub use board::{Board, CELLS};
pub use error::MoveError;
pub use minimax::{DRAW, LOSS, ScoredMove, WIN, best_move_for, minimax, score_moves};
pub use opponent::{MEDIUM_RANDOM_CHANCE, Opponent, opponent_move, random_move};
pub use position::Position;
pub use rules::LINES;
pub use types::{Cell, Difficulty, Mark, Outcome};

/// Empty board for a new game.
pub fn new_game() -> Board {
    Board::new()
}

/// Writes `mark` at `index`, returning the new board.
///
/// See [`Board::apply_move`].
pub fn apply_move(board: &Board, index: usize, mark: Mark) -> Result<Board, MoveError> {
    board.apply_move(index, mark)
}

/// Mark holding a complete triple, if any.
pub fn winner(board: &Board) -> Option<Mark> {
    board.winner()
}

/// Full board with no winner.
pub fn is_draw(board: &Board) -> bool {
    board.is_draw()
}

/// Indices of empty cells in ascending order.
pub fn available_moves(board: &Board) -> Vec<usize> {
    board.available_moves()
}
