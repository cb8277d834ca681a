//! Core domain types for tic-tac-toe against the computer.

use serde::{Deserialize, Serialize};

/// Which side owns a mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The human player (X, moves first).
    Player,
    /// The computer opponent (O).
    Opponent,
}

impl Mark {
    /// Returns the other side.
    pub fn other(self) -> Self {
        match self {
            Mark::Player => Mark::Opponent,
            Mark::Opponent => Mark::Player,
        }
    }

    /// Symbol drawn on the board for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::Player => 'X',
            Mark::Opponent => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell claimed by one side.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// Game status, always derived from the board contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and nobody has three in a row.
    InProgress,
    /// The human completed a triple.
    PlayerWin,
    /// The computer completed a triple.
    OpponentWin,
    /// Board is full with no triple.
    Draw,
}

impl Outcome {
    /// Returns true for every outcome except `InProgress`.
    pub fn is_over(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Outcome corresponding to a win by `mark`.
    pub fn win_for(mark: Mark) -> Self {
        match mark {
            Mark::Player => Outcome::PlayerWin,
            Mark::Opponent => Outcome::OpponentWin,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::PlayerWin => write!(f, "Player wins"),
            Outcome::OpponentWin => write!(f, "Computer wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Strength of the computer opponent.
///
/// Only move selection depends on the difficulty; board rules never do.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random legal moves.
    Easy,
    /// Coin flip between Easy and Hard on every move.
    #[default]
    Medium,
    /// Exhaustive minimax, never loses.
    Hard,
}
