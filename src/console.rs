//! Line-oriented console front end.

use crate::session::{
    GameSession, SessionError, move_error_message, off_board_message, outcome_message,
};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tictactoe_core::Difficulty;
use tracing::{debug, info, instrument};

const HELP: &str = "Commands: 1-9 play a cell | easy, medium, hard | restart | quit";

/// A parsed line of console input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play the cell with this number, 1-9 as printed on the board.
    Play(usize),
    /// Change the computer's difficulty.
    SetDifficulty(Difficulty),
    /// Abandon the current game and start another.
    Restart,
    /// Print the command list.
    Help,
    /// Leave the session.
    Quit,
}

impl Command {
    /// Parses one line; `None` for unrecognised input.
    ///
    /// Cells are entered 1-9 the way they are printed on the board.
    pub fn parse(line: &str) -> Option<Self> {
        let word = line.trim().to_ascii_lowercase();
        match word.as_str() {
            "q" | "quit" | "exit" => Some(Command::Quit),
            "r" | "restart" => Some(Command::Restart),
            "?" | "help" => Some(Command::Help),
            "e" => Some(Command::SetDifficulty(Difficulty::Easy)),
            "m" => Some(Command::SetDifficulty(Difficulty::Medium)),
            "h" => Some(Command::SetDifficulty(Difficulty::Hard)),
            _ => {
                if let Ok(cell) = word.parse::<usize>() {
                    return Some(Command::Play(cell));
                }
                Difficulty::from_str(&word).ok().map(Command::SetDifficulty)
            }
        }
    }
}

/// Runs the console loop until `quit` or end of input.
///
/// A finished game is reported and replaced by a fresh board straight away;
/// the tally carries over.
#[instrument(skip_all)]
pub fn run_console<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: R,
    mut output: W,
) -> std::io::Result<()> {
    info!("Starting console session");
    writeln!(output, "Tic-Tac-Toe with AI. You are X.")?;
    writeln!(output, "{}", HELP)?;
    print_state(session, &mut output)?;

    for line in input.lines() {
        let line = line?;
        let Some(command) = Command::parse(&line) else {
            writeln!(output, "Unrecognised input '{}'. {}", line.trim(), HELP)?;
            continue;
        };
        debug!(?command, "Console command");

        match command {
            Command::Quit => break,
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Restart => {
                session.new_game();
                print_state(session, &mut output)?;
            }
            Command::SetDifficulty(difficulty) => {
                session.set_difficulty(difficulty);
                writeln!(output, "Difficulty set to {}!", difficulty)?;
            }
            Command::Play(0) => writeln!(output, "Illegal move: {}", off_board_message(0))?,
            Command::Play(cell) => match session.player_move(cell - 1) {
                Ok(report) => {
                    if let Some(reply) = report.opponent_index() {
                        writeln!(output, "Computer played {}.", reply + 1)?;
                    }
                    if let Some(message) = outcome_message(*report.outcome()) {
                        writeln!(output, "{}\n{}", session.board(), message)?;
                        session.new_game();
                    }
                    print_state(session, &mut output)?;
                }
                Err(SessionError::Move(err)) => {
                    writeln!(output, "Illegal move: {}", move_error_message(&err))?
                }
                Err(SessionError::GameOver) => {
                    session.new_game();
                    print_state(session, &mut output)?;
                }
            },
        }
    }

    writeln!(output, "Final score: {}", session.tally())?;
    info!(tally = %session.tally(), "Console session ended");
    Ok(())
}

fn print_state<W: Write>(session: &GameSession, output: &mut W) -> std::io::Result<()> {
    writeln!(
        output,
        "\n{} | Difficulty: {}\n{}",
        session.tally(),
        session.difficulty(),
        session.board()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_typed_cell_number() {
        assert_eq!(Command::parse("1"), Some(Command::Play(1)));
        assert_eq!(Command::parse(" 9 "), Some(Command::Play(9)));
        assert_eq!(Command::parse("0"), Some(Command::Play(0)));
        assert_eq!(Command::parse("-1"), None);
    }

    #[test]
    fn test_parse_words() {
        assert_eq!(Command::parse("Hard"), Some(Command::SetDifficulty(Difficulty::Hard)));
        assert_eq!(Command::parse("e"), Some(Command::SetDifficulty(Difficulty::Easy)));
        assert_eq!(Command::parse("QUIT"), Some(Command::Quit));
        assert_eq!(Command::parse("restart"), Some(Command::Restart));
        assert_eq!(Command::parse("banana"), None);
    }
}
