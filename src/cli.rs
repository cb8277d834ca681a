//! Command-line interface for tictactoe_ai.

use crate::logging::LogTarget;
use crate::simulate::Challenger;
use clap::{Parser, Subcommand};
use std::path::Path;
use tictactoe_core::Difficulty;

/// Tic-tac-toe against a minimax computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe_ai")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "tictactoe_ai.toml", global = true)]
    pub config: std::path::PathBuf,

    /// Computer difficulty (easy, medium, hard); overrides the config file
    #[arg(short, long, global = true)]
    pub difficulty: Option<Difficulty>,

    /// Seed for the computer's random choices; overrides the config file
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Play against the computer
    Play {
        /// Use the line-based console instead of the terminal UI
        #[arg(long)]
        plain: bool,
    },

    /// Let a scripted challenger play many games and report the tally
    Simulate {
        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Strategy for the human seat
        #[arg(long, value_enum, default_value = "random")]
        challenger: Challenger,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score every legal move of a board
    Analyze {
        /// Nine cells row by row: X, O, and _ or . for empty
        #[arg(short, long)]
        board: String,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play { plain: false }
    }
}

impl Command {
    /// Where this command sends its logs.
    ///
    /// Both play modes share the terminal with the game, so they log to
    /// `log_file`; the tooling commands log to stderr.
    pub fn log_target(&self, log_file: &Path) -> LogTarget {
        match self {
            Command::Play { .. } => LogTarget::File(log_file.to_path_buf()),
            Command::Simulate { .. } | Command::Analyze { .. } => LogTarget::Stderr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::parse_from(["tictactoe_ai"]);
        assert!(cli.command.is_none());
        assert!(matches!(Command::default(), Command::Play { plain: false }));
    }

    #[test]
    fn test_global_overrides_parse() {
        let cli = Cli::parse_from(["tictactoe_ai", "simulate", "--difficulty", "hard", "--seed", "4"]);
        assert_eq!(cli.difficulty, Some(Difficulty::Hard));
        assert_eq!(cli.seed, Some(4));
        assert!(matches!(
            cli.command,
            Some(Command::Simulate { games: 100, challenger: Challenger::Random, json: false })
        ));
    }

    #[test]
    fn test_play_modes_log_to_file() {
        let log_file = Path::new("game.log");
        for plain in [false, true] {
            assert_eq!(
                Command::Play { plain }.log_target(log_file),
                LogTarget::File(log_file.to_path_buf())
            );
        }
        let analyze = Command::Analyze { board: "X________".to_string(), json: false };
        assert_eq!(analyze.log_target(log_file), LogTarget::Stderr);
    }

    #[test]
    fn test_analyze_requires_board() {
        assert!(Cli::try_parse_from(["tictactoe_ai", "analyze"]).is_err());
    }
}
