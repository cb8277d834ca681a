//! Session controller: alternates human and computer turns and keeps the tally.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tictactoe_core::{Board, Difficulty, Mark, MoveError, Opponent, Outcome, Position};
use tracing::{debug, info, instrument, warn};

/// Wins, losses and draws from the human's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct SessionTally {
    /// Games the human won.
    wins: u32,
    /// Games the computer won.
    losses: u32,
    /// Drawn games.
    draws: u32,
}

impl SessionTally {
    /// Counts a finished game. `InProgress` is ignored.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWin => self.wins += 1,
            Outcome::OpponentWin => self.losses += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => return,
        }
        info!(wins = self.wins, losses = self.losses, draws = self.draws, "Tally updated");
    }

    /// Number of finished games.
    pub fn total(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

impl std::fmt::Display for SessionTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Wins: {} | Losses: {} | Draws: {}",
            self.wins, self.losses, self.draws
        )
    }
}

/// What happened during one call to [`GameSession::player_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct TurnReport {
    /// Cell the human played.
    player_index: usize,
    /// Cell the computer answered with, if the game was still running.
    opponent_index: Option<usize>,
    /// Outcome after the turn.
    outcome: Outcome,
}

/// Reasons a turn is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// The move itself is illegal.
    #[display("{}", _0)]
    Move(MoveError),
    /// The game has ended; start a new one first.
    #[display("Game is already over")]
    GameOver,
}

impl From<MoveError> for SessionError {
    fn from(err: MoveError) -> Self {
        SessionError::Move(err)
    }
}

/// End-of-game message shown to the human.
pub fn outcome_message(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::PlayerWin => Some("Congratulations! You win!"),
        Outcome::OpponentWin => Some("Oh no! The computer wins!"),
        Outcome::Draw => Some("It's a draw!"),
        Outcome::InProgress => None,
    }
}

/// Describes a rejected move with the 1-9 cell numbers shown to the human.
pub fn move_error_message(err: &MoveError) -> String {
    match *err {
        MoveError::CellOccupied { index } => format!("Cell {} is already occupied", index + 1),
        MoveError::IndexOutOfRange { index } => off_board_message(index.saturating_add(1)),
    }
}

/// Message for a cell number outside 1-9.
pub fn off_board_message(cell: usize) -> String {
    format!("Cell {} is not on the board (choose 1-9)", cell)
}

/// One human against the computer, across any number of games.
///
/// The human always plays X and moves first. The session owns the board and
/// is the only thing that writes to it.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    opponent: Opponent,
    tally: SessionTally,
}

impl GameSession {
    /// Starts a session with an empty board and a zero tally.
    #[instrument(skip(opponent), fields(difficulty = ?opponent.difficulty()))]
    pub fn new(opponent: Opponent) -> Self {
        info!("Creating game session");
        Self {
            board: Board::new(),
            opponent,
            tally: SessionTally::default(),
        }
    }

    /// Continues from `board` with a zero tally.
    #[instrument(skip(opponent), fields(board = %board, difficulty = ?opponent.difficulty()))]
    pub fn resume(board: Board, opponent: Opponent) -> Self {
        info!("Resuming game session");
        Self {
            board,
            opponent,
            tally: SessionTally::default(),
        }
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Outcome of the current board.
    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// Running tally.
    pub fn tally(&self) -> &SessionTally {
        &self.tally
    }

    /// Active difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.opponent.difficulty()
    }

    /// Changes difficulty; takes effect on the computer's next move.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        info!(%difficulty, "Difficulty set");
        self.opponent.set_difficulty(difficulty);
    }

    /// Replaces the board with an empty one. The tally is kept.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        debug!(finished = self.outcome().is_over(), "Starting new game");
        self.board = Board::new();
    }

    /// Plays the human's move and, if the game goes on, the computer's reply.
    ///
    /// # Errors
    ///
    /// - [`SessionError::GameOver`] once the current game has ended.
    /// - [`SessionError::Move`] for an occupied or out-of-range cell; the board
    ///   and tally are left as they were.
    #[instrument(skip(self), fields(difficulty = ?self.opponent.difficulty()))]
    pub fn player_move(&mut self, index: usize) -> Result<TurnReport, SessionError> {
        self.turn_with(index, |opponent, board| opponent.choose(board))
    }

    /// Runs one turn with `reply` standing in for the computer's choice.
    ///
    /// Both moves are applied to a scratch board; the session board and tally
    /// change only once the whole turn has succeeded.
    fn turn_with(
        &mut self,
        index: usize,
        reply: impl FnOnce(&mut Opponent, &Board) -> Option<usize>,
    ) -> Result<TurnReport, SessionError> {
        if self.outcome().is_over() {
            warn!(index, "Move after game over");
            return Err(SessionError::GameOver);
        }

        let mut board = self.board.apply_move(index, Mark::Player).map_err(|err| {
            warn!(index, error = %err, "Rejected player move");
            err
        })?;
        debug!(
            index,
            position = %Position::from_index(index).map(Position::label).unwrap_or("?"),
            "Player moved"
        );

        let mut opponent_index = None;
        if !board.outcome().is_over()
            && let Some(choice) = reply(&mut self.opponent, &board)
        {
            board = board.apply_move(choice, Mark::Opponent).map_err(|err| {
                warn!(index = choice, error = %err, "Rejected computer move");
                err
            })?;
            debug!(index = choice, "Computer moved");
            opponent_index = Some(choice);
        }

        self.board = board;
        let outcome = self.outcome();
        if outcome.is_over() {
            info!(%outcome, "Game finished");
            self.tally.record(outcome);
        }

        Ok(TurnReport::new(index, opponent_index, outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hard_session() -> GameSession {
        GameSession::new(Opponent::seeded(Difficulty::Hard, 0))
    }

    #[test]
    fn test_tally_ignores_in_progress() {
        let mut tally = SessionTally::default();
        tally.record(Outcome::InProgress);
        assert_eq!(tally.total(), 0);
        tally.record(Outcome::Draw);
        tally.record(Outcome::PlayerWin);
        assert_eq!(tally.to_string(), "Wins: 1 | Losses: 0 | Draws: 1");
    }

    #[test]
    fn test_player_move_gets_reply() {
        let mut session = hard_session();
        let report = session.player_move(0).unwrap();
        assert_eq!(*report.player_index(), 0);
        // Center is the only reply to a corner that does not lose.
        assert_eq!(*report.opponent_index(), Some(4));
        assert_eq!(*report.outcome(), Outcome::InProgress);
        assert_eq!(session.board().available_moves().len(), 7);
    }

    #[test]
    fn test_occupied_cell_leaves_session_unchanged() {
        let mut session = hard_session();
        session.player_move(0).unwrap();
        let before = *session.board();
        let err = session.player_move(4).unwrap_err();
        assert_eq!(err, SessionError::Move(MoveError::CellOccupied { index: 4 }));
        assert_eq!(*session.board(), before);
        assert_eq!(session.tally().total(), 0);
    }

    #[test]
    fn test_failed_computer_move_rolls_back_turn() {
        let mut session = hard_session();
        // The reply lands on the cell the human just took.
        let err = session.turn_with(0, |_, _| Some(0)).unwrap_err();
        assert_eq!(err, SessionError::Move(MoveError::CellOccupied { index: 0 }));
        assert_eq!(*session.board(), Board::new());
        assert_eq!(session.tally().total(), 0);
    }

    #[test]
    fn test_move_error_message_is_one_based() {
        assert_eq!(
            move_error_message(&MoveError::CellOccupied { index: 0 }),
            "Cell 1 is already occupied"
        );
        assert_eq!(
            move_error_message(&MoveError::IndexOutOfRange { index: 9 }),
            "Cell 10 is not on the board (choose 1-9)"
        );
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(outcome_message(Outcome::Draw), Some("It's a draw!"));
        assert_eq!(outcome_message(Outcome::InProgress), None);
    }
}
