//! Application state and key handling.

use crate::session::{
    GameSession, SessionError, move_error_message, off_board_message, outcome_message,
};
use crossterm::event::KeyCode;
use tictactoe_core::{Difficulty, Position};
use tracing::{debug, info, instrument};

use super::input::move_cursor;

const YOUR_TURN: &str = "Your move (X).";

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    cursor: Position,
    status_message: String,
    quit: bool,
}

impl App {
    /// Creates a new application around a session.
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            cursor: Position::Center,
            status_message: YOUR_TURN.to_string(),
            quit: false,
        }
    }

    /// The game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Consumes the app, handing back the session.
    pub fn into_session(self) -> GameSession {
        self.session
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("User quit");
                self.quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            KeyCode::Char('e') | KeyCode::Char('E') => self.set_difficulty(Difficulty::Easy),
            KeyCode::Char('m') | KeyCode::Char('M') => self.set_difficulty(Difficulty::Medium),
            KeyCode::Char('h') | KeyCode::Char('H') => self.set_difficulty(Difficulty::Hard),
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c) => match c.to_digit(10) {
                Some(0) => {
                    self.status_message = format!("{}. Try another cell.", off_board_message(0));
                }
                Some(digit) => {
                    if let Some(position) = Position::from_index(digit as usize - 1) {
                        self.cursor = position;
                        self.play(position);
                    }
                }
                None => {}
            },
            arrow => self.cursor = move_cursor(self.cursor, arrow),
        }
    }

    /// Restarts the game, keeping the tally.
    fn restart(&mut self) {
        debug!("Restarting game");
        self.session.new_game();
        self.status_message = format!("Game restarted. {}", YOUR_TURN);
    }

    fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.session.set_difficulty(difficulty);
        self.status_message = format!("Difficulty set to {}!", difficulty);
    }

    fn play(&mut self, position: Position) {
        if self.session.outcome().is_over() {
            self.restart();
            return;
        }

        match self.session.player_move(position.index()) {
            Ok(report) => {
                self.status_message = match outcome_message(*report.outcome()) {
                    Some(message) => format!("{} Press any cell or R to play again.", message),
                    None => match report.opponent_index().and_then(Position::from_index) {
                        Some(reply) => format!("Computer played {}. {}", reply, YOUR_TURN),
                        None => YOUR_TURN.to_string(),
                    },
                };
            }
            Err(SessionError::Move(err)) => {
                self.status_message = format!("{}. Try another cell.", move_error_message(&err));
            }
            Err(SessionError::GameOver) => self.restart(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{Cell, Mark, Opponent};

    fn app() -> App {
        App::new(GameSession::new(Opponent::seeded(Difficulty::Hard, 0)))
    }

    #[test]
    fn test_digit_plays_cell() {
        let mut app = app();
        app.handle_key(KeyCode::Char('1'));
        assert_eq!(app.session().board().get(0), Some(Cell::Occupied(Mark::Player)));
        assert_eq!(app.cursor(), Position::TopLeft);
        assert!(app.status_message().starts_with("Computer played"));
    }

    #[test]
    fn test_occupied_cell_reports_error() {
        let mut app = app();
        app.handle_key(KeyCode::Char('1'));
        let before = *app.session().board();
        app.handle_key(KeyCode::Char('1'));
        assert_eq!(*app.session().board(), before);
        assert_eq!(app.status_message(), "Cell 1 is already occupied. Try another cell.");
    }

    #[test]
    fn test_zero_key_reports_off_board() {
        let mut app = app();
        app.handle_key(KeyCode::Char('0'));
        assert_eq!(*app.session().board(), tictactoe_core::Board::new());
        assert!(app.status_message().starts_with("Cell 0 is not on the board"));
    }

    #[test]
    fn test_enter_plays_cursor() {
        let mut app = app();
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);
        assert_eq!(
            app.session().board().get(Position::TopCenter.index()),
            Some(Cell::Occupied(Mark::Player))
        );
    }

    #[test]
    fn test_difficulty_keys() {
        let mut app = app();
        app.handle_key(KeyCode::Char('e'));
        assert_eq!(app.session().difficulty(), Difficulty::Easy);
        assert_eq!(app.status_message(), "Difficulty set to Easy!");
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
