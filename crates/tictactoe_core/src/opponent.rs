//! Computer opponent move selection.

use super::board::Board;
use super::minimax::best_move_for;
use super::types::{Difficulty, Mark};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Chance that a Medium opponent plays a random move instead of searching.
pub const MEDIUM_RANDOM_CHANCE: f64 = 0.5;

/// Uniformly random legal move, or `None` on a full board.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    board.available_moves().choose(rng).copied()
}

/// Chooses the computer's move for `board` at the given difficulty.
///
/// Randomness is drawn from `rng` only; Hard never touches it, so the same
/// board always yields the same Hard move. Medium flips a fresh coin on every
/// call. Returns `None` only when no cell is empty.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn opponent_move<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<usize> {
    let choice = match difficulty {
        Difficulty::Easy => random_move(board, rng),
        Difficulty::Medium => {
            if rng.random_bool(MEDIUM_RANDOM_CHANCE) {
                debug!("Medium opponent rolled a random move");
                random_move(board, rng)
            } else {
                debug!("Medium opponent rolled a searched move");
                best_move_for(board, Mark::Opponent)
            }
        }
        Difficulty::Hard => best_move_for(board, Mark::Opponent),
    };
    debug!(?difficulty, index = ?choice, "Opponent chose move");
    choice
}

/// A computer opponent with its own random source.
///
/// The difficulty may change between moves and applies from the next call to
/// [`Opponent::choose`].
#[derive(Debug, Clone)]
pub struct Opponent {
    difficulty: Difficulty,
    rng: StdRng,
}

impl Opponent {
    /// Opponent with a reproducible random stream.
    #[instrument]
    pub fn seeded(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Opponent seeded from the operating system.
    #[instrument]
    pub fn from_os_rng(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Returns the active difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Changes the difficulty for subsequent moves.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        debug!(from = ?self.difficulty, to = ?difficulty, "Difficulty changed");
        self.difficulty = difficulty;
    }

    /// Chooses a move for `board`.
    pub fn choose(&mut self, board: &Board) -> Option<usize> {
        opponent_move(board, self.difficulty, &mut self.rng)
    }
}
