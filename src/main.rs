//! Tic-tac-toe AI command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_ai::{
    Config, GameSession,
    cli::{Cli, Command},
    logging, parse_board, run_console, run_simulation, run_tui,
};
use tictactoe_core::Opponent;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config)?.with_overrides(cli.difficulty, cli.seed);

    let command = cli.command.unwrap_or_default();
    logging::init(&command.log_target(config.log_file()), config.log_filter())?;

    match command {
        Command::Play { plain } => play(&config, plain),
        Command::Simulate {
            games,
            challenger,
            json,
        } => {
            let seed = config.seed().unwrap_or_else(rand::random);
            let report = run_simulation(games, *config.difficulty(), challenger, seed)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report);
            }
            Ok(())
        }
        Command::Analyze { board, json } => {
            let board = parse_board(&board)?;
            let analysis = tictactoe_ai::analyze(&board);
            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                println!("{}", analysis);
            }
            Ok(())
        }
    }
}

/// Plays interactively in the terminal UI or on the plain console.
fn play(config: &Config, plain: bool) -> Result<()> {
    let opponent = match config.seed() {
        Some(seed) => Opponent::seeded(*config.difficulty(), *seed),
        None => Opponent::from_os_rng(*config.difficulty()),
    };
    let mut session = GameSession::new(opponent);

    if plain {
        info!(difficulty = %config.difficulty(), "Starting console game");
        let stdin = std::io::stdin();
        run_console(&mut session, stdin.lock(), std::io::stdout())
            .context("Console session failed")?;
    } else {
        info!(difficulty = %config.difficulty(), "Starting TUI game");
        let session = run_tui(session)?;
        println!("Final score: {}", session.tally());
    }
    Ok(())
}
