use serde::{Deserialize, Serialize};

use crate::{Board, InvalidMove, Player, BOARD_SIZE};

/// Where the game stands.
///
/// Every value other than `Ongoing` is terminal: once the status leaves
/// `Ongoing` it never changes again.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Ongoing,
    BlackWins,
    WhiteWins,
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Ongoing
    }
}

/// Summarizes the effect of one applied move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The game goes on; the turn has passed to the other player.
    Continued,
    /// The move completed a run of five or more.
    Won(Player),
    /// The move filled the last empty cell without creating a run.
    Draw,
}

/// The complete game state, and the only entity that is ever persisted.
///
/// One invocation constructs this via [`load_state`](crate::load_state)
/// (or [`GameState::new`] for a reset), mutates it with at most one
/// [`apply_move`](Self::apply_move), hands it to
/// [`save_state`](crate::save_state) and discards it. Nothing is kept
/// in the process across invocations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) status: GameStatus,
    pub(crate) move_count: u32,
    pub(crate) winner: Option<Player>,
    pub(crate) last_move: Option<(usize, usize)>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A fresh game: empty board, Black to move, no moves played.
    pub fn new() -> Self {
        Self {
            board: Board::empty(),
            current_player: Player::Black,
            status: GameStatus::Ongoing,
            move_count: 0,
            winner: None,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// The most recently placed stone, kept for highlighting in rendered
    /// output. Cleared only by a reset.
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        self.validate_move(row, col).is_ok()
    }

    /// Check the move preconditions in order: the game must still be
    /// ongoing, the coordinates must be on the board, and the target cell
    /// must be empty. Reports *which* precondition failed.
    pub fn validate_move(&self, row: usize, col: usize) -> Result<(), InvalidMove> {
        if self.status.is_terminal() {
            return Err(InvalidMove::GameFinished {
                status: self.status,
            });
        }
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(InvalidMove::OutOfBounds { row, col });
        }
        match self.board.get(row, col).player() {
            None => Ok(()),
            Some(by) => Err(InvalidMove::Occupied { row, col, by }),
        }
    }

    /// Place the current player's stone at (row, col).
    ///
    /// On success the state advances by exactly one move: the stone is
    /// placed, `last_move` and `move_count` are updated, and exactly one
    /// of win / draw / continue applies. When the move wins or draws, the
    /// turn is frozen at the player who moved. On error the state is
    /// untouched.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, InvalidMove> {
        self.validate_move(row, col)?;

        let player = self.current_player;
        self.board.set(row, col, player.cell());
        self.last_move = Some((row, col));
        self.move_count += 1;

        if self.board.completes_five(row, col, player) {
            self.winner = Some(player);
            self.status = match player {
                Player::Black => GameStatus::BlackWins,
                Player::White => GameStatus::WhiteWins,
            };
            Ok(MoveOutcome::Won(player))
        } else if self.move_count as usize == BOARD_SIZE * BOARD_SIZE {
            self.status = GameStatus::Draw;
            Ok(MoveOutcome::Draw)
        } else {
            self.current_player = player.opponent();
            Ok(MoveOutcome::Continued)
        }
    }

    /// One-line human-readable summary, e.g. `Current turn: Black (Move #1)`.
    pub fn status_line(&self) -> String {
        match self.status {
            GameStatus::BlackWins => String::from("Black wins!"),
            GameStatus::WhiteWins => String::from("White wins!"),
            GameStatus::Draw => String::from("It's a draw!"),
            GameStatus::Ongoing => format!(
                "Current turn: {} (Move #{})",
                self.current_player,
                self.move_count + 1
            ),
        }
    }
}
