//! Tic-tac-toe against a minimax computer opponent.
//!
//! The game rules and the computer's move selection live in
//! [`tictactoe_core`]. This crate wraps them in a [`GameSession`] that keeps
//! a running tally, and in the front ends that drive a session: a ratatui
//! terminal UI, a line-based console, and two tooling commands for batch
//! simulation and board analysis.
//!
//! # Example
//!
//! ```
//! use tictactoe_ai::GameSession;
//! use tictactoe_core::{Difficulty, Opponent, Outcome};
//!
//! let mut session = GameSession::new(Opponent::seeded(Difficulty::Hard, 7));
//! let report = session.player_move(0)?;
//! assert_eq!(*report.opponent_index(), Some(4));
//! assert_eq!(*report.outcome(), Outcome::InProgress);
//! # Ok::<(), tictactoe_ai::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analyze;
pub mod cli;
pub mod config;
pub mod console;
pub mod logging;
pub mod session;
pub mod simulate;
pub mod tui;

pub use analyze::{Analysis, BoardParseError, analyze, parse_board};
pub use config::{Config, ConfigError};
pub use console::run_console;
pub use session::{
    GameSession, SessionError, SessionTally, TurnReport, move_error_message, off_board_message,
    outcome_message,
};
pub use simulate::{Challenger, SimulationReport, run_simulation};
pub use tui::run_tui;
