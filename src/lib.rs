//! # kuba
//!
//! Rules engine for Kuba, a two-player marble-pushing game on a 7x7 board.
//!
//! ## Design Principles
//!
//! 1. **Atomic Moves**: a move either fully applies (board, captures,
//!    undo snapshot, turn, win check) or leaves the state untouched.
//!
//! 2. **Single Writer**: only the rules engine mutates `GameState`; every
//!    other API reads.
//!
//! 3. **Typed Rejections**: illegal moves come back as `MoveError` values,
//!    never panics.
//!
//! ## Architecture
//!
//! - **One Push Routine**: all four directions share one displacement
//!   routine driven by a direction vector.
//!
//! - **Two-Slot Undo Guard**: each player keeps one snapshot of the board
//!   they last left; a move recreating a stored snapshot is refused.
//!
//! - **Persistent History**: accepted moves are kept in an `im` vector, so
//!   probing a move on a cloned state stays cheap.
//!
//! ## Modules
//!
//! - `core`: Players, marbles, board, moves, configuration, state, errors
//! - `rules`: Push resolution, win detection, `RulesEngine` trait
//! - `games`: The Kuba rules and the `KubaGame` facade
//!
//! ## Example
//!
//! ```
//! use kuba::{Direction, KubaGame, Marble};
//!
//! let mut game = KubaGame::new("Ana", Marble::White, "Ben", Marble::Black).unwrap();
//!
//! assert!(game.make_move("Ana", (0, 0), Direction::Right));
//! assert_eq!(game.marble_at((0, 2)), Some(Marble::White));
//! assert_eq!(game.current_turn(), Some("Ben"));
//! assert_eq!(game.winner(), None);
//! ```

pub mod core;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Coord, Direction, Marble, MarbleCounts, BOARD_SIZE,
    Player, PlayerId, PlayerMap,
    GameConfig, GameState,
    Push, MoveRecord, MoveOutcome,
    MoveError, ConfigError, StateError,
};

pub use crate::rules::{GameResult, RulesEngine};

pub use crate::games::kuba::{KubaGame, KubaGameBuilder, KubaRules};
