//! Game state and the turn state machine.

use tracing::{debug, instrument};

use crate::board::{Cell, Gameboard, Position};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::player::Player;
use crate::win;

/// Where the game stands. `Won` and `Tied` are terminal.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tied,
}

/// A piece that was placed on the board.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Move {
    pub position: Position,
    pub player: Player,
}

/// Result of [`Game::drop_piece`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct MoveOutcome {
    pub placed: Move,
    pub status: GameStatus,
}

/// Game with all its state.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Game {
    board: Gameboard,
    current_player: Player,
    status: GameStatus,
    round: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::with_board(Gameboard::default())
    }
}

impl Game {
    /// Starts a game on an empty `width` x `height` board with
    /// [`Player::Player1`] to move.
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        Gameboard::new(width, height).map(Self::with_board)
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        Self::new(config.width, config.height)
    }

    const fn with_board(board: Gameboard) -> Self {
        Self {
            board,
            current_player: Player::Player1,
            status: GameStatus::InProgress,
            round: 0,
        }
    }

    #[must_use]
    pub const fn board(&self) -> &Gameboard {
        &self.board
    }

    /// Occupant of `(row, column)`, `None` outside of the board.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        self.board.get(row, column)
    }

    #[must_use]
    pub const fn current_player(&self) -> Player {
        self.current_player
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self.status, GameStatus::InProgress)
    }

    /// Number of pieces placed so far.
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    /// See [`Gameboard::find_landing_row`].
    pub fn find_landing_row(&self, column: usize) -> Result<Option<usize>, GameError> {
        self.board.find_landing_row(column)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        win::is_full(&self.board)
    }

    /// Drops a piece of the current player into `column` and records whether
    /// it ended the game.
    ///
    /// A win is checked before a full board, so completing a line with the
    /// last free slot is a win. The turn is not passed; that is left to
    /// [`Game::advance_turn`].
    #[instrument(level = "debug", skip(self), fields(player = %self.current_player))]
    pub fn place_piece(&mut self, column: usize) -> Result<Move, GameError> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }

        let player = self.current_player;
        let position = self.board.insert(column, player)?;
        self.round += 1;
        debug!(%position, round = self.round, "piece placed");

        self.status = if win::check_win(&self.board, player, Some(position)) {
            GameStatus::Won(player)
        } else if self.is_full() {
            GameStatus::Tied
        } else {
            GameStatus::InProgress
        };
        if self.is_terminal() {
            debug!(status = ?self.status, round = self.round, "game over");
        }

        Ok(Move { position, player })
    }

    /// Hands the turn to the other player. Refused once the game is over.
    pub fn advance_turn(&mut self) -> Result<(), GameError> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }
        self.current_player = self.current_player.opponent();
        Ok(())
    }

    /// Plays one move for the current player: [`Game::place_piece`], then
    /// [`Game::advance_turn`] while the game goes on. On error nothing changes.
    #[instrument(level = "debug", skip(self), fields(player = %self.current_player))]
    pub fn drop_piece(&mut self, column: usize) -> Result<MoveOutcome, GameError> {
        let placed = self.place_piece(column).inspect_err(|err| {
            debug!(%err, "move rejected");
        })?;

        if !self.is_terminal() {
            self.advance_turn()?;
        }

        Ok(MoveOutcome {
            placed,
            status: self.status,
        })
    }
}
