//! Error types.
//!
//! Rule rejections are ordinary, recoverable outcomes: a rejected move
//! leaves the game state exactly as it was.

use thiserror::Error;

use super::marble::Marble;

/// Why a move request was not applied.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    /// A winner has already been decided.
    #[error("game is already over")]
    GameOver,

    /// The other player is to move.
    #[error("not your turn")]
    NotYourTurn,

    /// The origin cell does not hold one of the mover's marbles.
    #[error("origin does not hold one of your marbles")]
    NotOwnMarble,

    /// The cell behind the origin (opposite the push direction) is occupied.
    #[error("no room to push from: cell behind the marble is occupied")]
    Blocked,

    /// The move would recreate a board a player already left.
    #[error("move would undo the previous position")]
    UndoRejected,

    /// No player with this name is seated.
    #[error("unknown player: {0}")]
    UnknownPlayer(String),

    /// The origin coordinate is outside the 7x7 board.
    #[error("coordinate ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },
}

impl MoveError {
    /// True for rejections by the game rules, false for malformed input.
    #[must_use]
    pub fn is_rule_rejection(&self) -> bool {
        !matches!(self, MoveError::UnknownPlayer(_) | MoveError::OutOfBounds { .. })
    }
}

/// Errors raised while setting up a game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("player name must not be empty")]
    EmptyName,

    #[error("both players are named {0:?}")]
    DuplicateName(String),

    #[error("red marbles are neutral and cannot be assigned to a player")]
    NeutralColor,

    #[error("both players were assigned {0}")]
    DuplicateColor(Marble),

    #[error("exactly two players are required, got {0}")]
    PlayerCount(usize),

    #[error("invalid board diagram: {0}")]
    InvalidBoard(String),

    #[error("player index {0} is out of range")]
    InvalidPlayerId(u8),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors raised while encoding or decoding a saved game.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("failed to encode game state: {0}")]
    Encode(#[source] bincode::Error),

    #[error("failed to decode game state: {0}")]
    Decode(#[source] bincode::Error),

    #[error("decoded game is inconsistent: {0}")]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(MoveError::NotYourTurn.to_string(), "not your turn");
        assert_eq!(
            MoveError::OutOfBounds { row: 7, col: 2 }.to_string(),
            "coordinate (7, 2) is off the board"
        );
        assert_eq!(
            MoveError::UnknownPlayer("Zed".to_string()).to_string(),
            "unknown player: Zed"
        );
    }

    #[test]
    fn test_rule_rejection_classification() {
        assert!(MoveError::GameOver.is_rule_rejection());
        assert!(MoveError::Blocked.is_rule_rejection());
        assert!(MoveError::UndoRejected.is_rule_rejection());
        assert!(!MoveError::UnknownPlayer("x".into()).is_rule_rejection());
        assert!(!MoveError::OutOfBounds { row: 0, col: 9 }.is_rule_rejection());
    }

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            ConfigError::DuplicateColor(Marble::Black).to_string(),
            "both players were assigned Black"
        );
        assert_eq!(
            ConfigError::Validation("captures_to_win must be > 0".into()).to_string(),
            "config validation error: captures_to_win must be > 0"
        );
    }
}
