//! Core engine types: players, marbles, board, moves, configuration, state.
//!
//! This module holds the data model. Rule logic lives in `rules` and the
//! concrete game in `games::kuba`.

pub mod player;
pub mod marble;
pub mod board;
pub mod config;
pub mod action;
pub mod error;
pub mod state;

pub use player::{Player, PlayerId, PlayerMap, PLAYER_COUNT};
pub use marble::{Cell, Marble, MarbleCounts};
pub use board::{Board, Coord, Direction, BOARD_SIZE};
pub use config::{GameConfig, DEFAULT_CAPTURES_TO_WIN, NEUTRAL_MARBLES};
pub use action::{MoveOutcome, MoveRecord, Push};
pub use error::{ConfigError, MoveError, StateError};
pub use state::GameState;
