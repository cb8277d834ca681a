//! Errors reported when a move cannot be applied.

use derive_more::{Display, Error};

/// Reasons a move is rejected.
///
/// Both variants are recoverable: the caller discards the input and asks again.
/// The board is never modified when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", index)]
    CellOccupied {
        /// Index that was requested.
        index: usize,
    },

    /// The index lies outside 0-8.
    #[display("Index {} is out of range (must be 0-8)", index)]
    IndexOutOfRange {
        /// Index that was requested.
        index: usize,
    },
}
