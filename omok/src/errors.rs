use std::path::PathBuf;

use crate::{format_coordinate, GameStatus, Player, BOARD_SIZE};

/// The error type for [`GameState::apply_move`](crate::GameState::apply_move),
/// i.e. for placing a single stone.
///
/// The three variants are operationally different mistakes, so the driver
/// can tell a player exactly what went wrong.
#[derive(Debug, PartialEq, Eq)]
pub enum InvalidMove {
    GameFinished { status: GameStatus },
    OutOfBounds { row: usize, col: usize },
    Occupied { row: usize, col: usize, by: Player },
}

impl std::error::Error for InvalidMove {}

impl std::fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMove::GameFinished { status } => {
                let result = match status {
                    GameStatus::BlackWins => "Black has already won",
                    GameStatus::WhiteWins => "White has already won",
                    GameStatus::Draw => "it ended in a draw",
                    // A move is only refused for this reason when the status
                    // is terminal, so this arm is never produced.
                    GameStatus::Ongoing => "it is still ongoing",
                };
                write!(f, "The game is already finished: {}", result)
            }
            InvalidMove::OutOfBounds { row, col } => write!(
                f,
                "Position (row {}, column {}) is outside the {}x{} board",
                row, col, BOARD_SIZE, BOARD_SIZE
            ),
            InvalidMove::Occupied { row, col, by } => write!(
                f,
                "Position {} is already occupied by a {} stone",
                format_coordinate(*row, *col),
                by
            ),
        }
    }
}

/// The error type for reading or writing the persisted game state.
///
/// A *malformed* state file is not an error: loading recovers from it by
/// resetting the game (see [`LoadOutcome`](crate::LoadOutcome)). Only I/O
/// and serialization failures surface here.
#[derive(Debug)]
pub enum PersistenceError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    Serialize {
        source: serde_json::Error,
    },
}

impl std::error::Error for PersistenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PersistenceError::Read { source, .. } | PersistenceError::Write { source, .. } => {
                Some(source)
            }
            PersistenceError::Serialize { source } => Some(source),
        }
    }
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersistenceError::Read { path, .. } => {
                write!(f, "Could not read game state from '{}'", path.display())
            }
            PersistenceError::Write { path, .. } => {
                write!(f, "Could not write game state to '{}'", path.display())
            }
            PersistenceError::Serialize { .. } => write!(f, "Could not serialize game state"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_distinguish_the_three_mistakes() {
        let finished = InvalidMove::GameFinished {
            status: GameStatus::BlackWins,
        }
        .to_string();
        let out_of_bounds = InvalidMove::OutOfBounds { row: 15, col: 2 }.to_string();
        let occupied = InvalidMove::Occupied {
            row: 7,
            col: 7,
            by: Player::Black,
        }
        .to_string();

        assert!(finished.contains("already finished"));
        assert!(out_of_bounds.contains("outside"));
        assert!(occupied.contains("H,8"));
        assert!(occupied.contains("occupied"));
    }
}
