//! Automated play: a scripted challenger takes the human seat.

use crate::session::{GameSession, SessionError, SessionTally};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tictactoe_core::{Board, Difficulty, Mark, Opponent, best_move_for, random_move};
use tracing::{debug, info, instrument};

/// How the scripted human chooses moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum, strum::Display)]
#[serde(rename_all = "lowercase")]
pub enum Challenger {
    /// Uniformly random legal moves.
    Random,
    /// Exhaustive minimax from the player's side.
    Optimal,
}

impl Challenger {
    /// Picks the human's next move.
    fn choose(self, board: &Board, rng: &mut StdRng) -> Option<usize> {
        match self {
            Challenger::Random => random_move(board, rng),
            Challenger::Optimal => best_move_for(board, Mark::Player),
        }
    }
}

/// Summary of a simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    /// Games played.
    pub games: u32,
    /// Difficulty of the computer.
    pub difficulty: Difficulty,
    /// Strategy used for the human seat.
    pub challenger: Challenger,
    /// Results, counted from the human's side.
    pub tally: SessionTally,
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games, {} challenger vs {} computer: {}",
            self.games, self.challenger, self.difficulty, self.tally
        )
    }
}

/// Plays `games` complete games through a [`GameSession`].
///
/// The computer and the challenger draw from separate streams derived from
/// `seed`, so a run is reproducible.
#[instrument]
pub fn run_simulation(
    games: u32,
    difficulty: Difficulty,
    challenger: Challenger,
    seed: u64,
) -> Result<SimulationReport, SessionError> {
    info!("Starting simulation");
    let mut session = GameSession::new(Opponent::seeded(difficulty, seed));
    let mut challenger_rng = StdRng::seed_from_u64(seed.wrapping_add(1));

    for game in 0..games {
        session.new_game();
        while !session.outcome().is_over() {
            let Some(index) = challenger.choose(session.board(), &mut challenger_rng) else {
                break;
            };
            session.player_move(index)?;
        }
        debug!(game, outcome = %session.outcome(), "Simulated game finished");
    }

    let report = SimulationReport {
        games,
        difficulty,
        challenger,
        tally: *session.tally(),
    };
    info!(%report, "Simulation complete");
    Ok(report)
}
