use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Board, Cell, GameState, GameStatus, PersistenceError, Player, BOARD_SIZE};

/// Default location of the persisted game state, relative to the
/// repository the automation runs in.
pub const STATE_FILE: &str = "game_state.json";

/// How [`load_state`] obtained the returned state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No state file existed; a fresh game was created and persisted.
    Fresh,
    /// The state file was read and parsed successfully.
    Existing,
    /// The state file could not be understood as a game; a fresh game
    /// replaced it.
    ///
    /// Recovery keeps automation from wedging on a corrupt file, but it
    /// silently loses the previous game, so the reason is kept for the
    /// caller to log.
    Recovered { reason: String },
}

/// The on-disk representation of a [`GameState`].
///
/// Kept separate from the internal model so that the stored JSON shape
/// stays stable and malformed input is rejected before it reaches the
/// rules engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct StoredState {
    board: Vec<Vec<Cell>>,
    current_player: Player,
    game_status: GameStatus,
    move_count: u32,
    winner: Option<Player>,
    last_move: Option<(usize, usize)>,
}

impl From<&GameState> for StoredState {
    fn from(state: &GameState) -> Self {
        Self {
            board: state.board.rows().iter().map(|row| row.to_vec()).collect(),
            current_player: state.current_player,
            game_status: state.status,
            move_count: state.move_count,
            winner: state.winner,
            last_move: state.last_move,
        }
    }
}

impl StoredState {
    fn into_game_state(self) -> Result<GameState, String> {
        if self.board.len() != BOARD_SIZE
            || self.board.iter().any(|row| row.len() != BOARD_SIZE)
        {
            return Err(format!(
                "stored board is not {}x{}",
                BOARD_SIZE, BOARD_SIZE
            ));
        }
        let mut board = Board::empty();
        for (row_idx, row) in self.board.iter().enumerate() {
            for (col_idx, &cell) in row.iter().enumerate() {
                board.set(row_idx, col_idx, cell);
            }
        }
        Ok(GameState {
            board,
            current_player: self.current_player,
            status: self.game_status,
            move_count: self.move_count,
            winner: self.winner,
            last_move: self.last_move,
        })
    }
}

/// Load the persisted state from `path`.
///
/// A missing file lazily creates a fresh game; a malformed file is
/// replaced by a fresh game. Both cases persist the replacement
/// immediately, so the next invocation finds a well-formed file. Only
/// I/O failures are reported as errors.
pub fn load_state(path: &Path) -> Result<(GameState, LoadOutcome), PersistenceError> {
    if !path.exists() {
        let state = GameState::new();
        save_state(path, &state)?;
        return Ok((state, LoadOutcome::Fresh));
    }

    let contents = fs::read_to_string(path).map_err(|source| PersistenceError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let reason = match serde_json::from_str::<StoredState>(&contents) {
        Ok(stored) => match stored.into_game_state() {
            Ok(state) => return Ok((state, LoadOutcome::Existing)),
            Err(reason) => reason,
        },
        Err(err) => err.to_string(),
    };

    let state = GameState::new();
    save_state(path, &state)?;
    Ok((state, LoadOutcome::Recovered { reason }))
}

/// Write `state` to `path`, replacing any previous contents in full.
pub fn save_state(path: &Path, state: &GameState) -> Result<(), PersistenceError> {
    let stored = StoredState::from(state);
    let json = serde_json::to_string_pretty(&stored)
        .map_err(|source| PersistenceError::Serialize { source })?;
    fs::write(path, json).map_err(|source| PersistenceError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    fn temp_state_path(dir: &tempfile::TempDir) -> std::path::PathBuf {
        dir.path().join(STATE_FILE)
    }

    #[test]
    fn missing_file_creates_a_fresh_game() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_state_path(&dir);

        let (state, outcome) = load_state(&path).unwrap();
        assert_eq!(outcome, LoadOutcome::Fresh);
        assert_eq!(state, GameState::new());
        // The fresh game was persisted, so the next load sees it.
        let (_, outcome) = load_state(&path).unwrap();
        assert_eq!(outcome, LoadOutcome::Existing);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_state_path(&dir);

        let mut state = GameState::new();
        state.apply_move(7, 7).unwrap();
        state.apply_move(7, 8).unwrap();
        state.apply_move(0, 0).unwrap();
        save_state(&path, &state).unwrap();

        let (loaded, outcome) = load_state(&path).unwrap();
        assert_eq!(outcome, LoadOutcome::Existing);
        assert_eq!(loaded, state);
    }

    #[test]
    fn stored_json_has_the_stable_field_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_state_path(&dir);

        let mut state = GameState::new();
        state.apply_move(7, 7).unwrap();
        save_state(&path, &state).unwrap();

        let value: Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["board"][7][7], json!("black"));
        assert_eq!(value["board"][0][0], json!("empty"));
        assert_eq!(value["board"].as_array().unwrap().len(), BOARD_SIZE);
        assert_eq!(value["current_player"], json!("white"));
        assert_eq!(value["game_status"], json!("ongoing"));
        assert_eq!(value["move_count"], json!(1));
        assert_eq!(value["winner"], Value::Null);
        assert_eq!(value["last_move"], json!([7, 7]));
    }

    #[test]
    fn unparseable_file_recovers_with_a_reset() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_state_path(&dir);
        fs::write(&path, "{ this is not json").unwrap();

        let (state, outcome) = load_state(&path).unwrap();
        assert!(matches!(outcome, LoadOutcome::Recovered { .. }));
        assert_eq!(state, GameState::new());

        // The reset was persisted over the corrupt file.
        let (reloaded, outcome) = load_state(&path).unwrap();
        assert_eq!(outcome, LoadOutcome::Existing);
        assert_eq!(reloaded, GameState::new());
    }

    #[test]
    fn wrong_board_shape_recovers_with_a_reset() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_state_path(&dir);

        save_state(&path, &GameState::new()).unwrap();
        let mut value: Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        // Drop a row: a 14x15 board must not be accepted.
        value["board"].as_array_mut().unwrap().pop();
        fs::write(&path, serde_json::to_string(&value).unwrap()).unwrap();

        let (state, outcome) = load_state(&path).unwrap();
        match outcome {
            LoadOutcome::Recovered { reason } => assert!(reason.contains("15x15")),
            other => panic!("expected recovery, got {:?}", other),
        }
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn unknown_status_value_recovers_with_a_reset() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_state_path(&dir);

        save_state(&path, &GameState::new()).unwrap();
        let mut value: Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        value["game_status"] = json!("bogus");
        fs::write(&path, serde_json::to_string(&value).unwrap()).unwrap();

        let (state, outcome) = load_state(&path).unwrap();
        assert!(matches!(outcome, LoadOutcome::Recovered { .. }));
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn missing_field_recovers_with_a_reset() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_state_path(&dir);

        save_state(&path, &GameState::new()).unwrap();
        let mut value: Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        value.as_object_mut().unwrap().remove("current_player");
        fs::write(&path, serde_json::to_string(&value).unwrap()).unwrap();

        let (_, outcome) = load_state(&path).unwrap();
        assert!(matches!(outcome, LoadOutcome::Recovered { .. }));
    }

    #[test]
    fn finished_game_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_state_path(&dir);

        let mut state = GameState::new();
        for col in 0..4 {
            state.apply_move(0, col).unwrap();
            state.apply_move(10, col).unwrap();
        }
        state.apply_move(0, 4).unwrap();
        assert_eq!(state.status(), GameStatus::BlackWins);
        save_state(&path, &state).unwrap();

        let (loaded, _) = load_state(&path).unwrap();
        assert_eq!(loaded.status(), GameStatus::BlackWins);
        assert_eq!(loaded.winner(), Some(Player::Black));
        assert_eq!(loaded, state);
    }
}
