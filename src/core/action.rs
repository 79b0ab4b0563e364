//! Move representation and history records.
//!
//! A move is always a push: a marble chosen by its coordinate and one of
//! four directions. Accepted moves are recorded as `MoveRecord`s so
//! collaborators can replay or inspect the game.

use serde::{Deserialize, Serialize};

use super::board::{Coord, Direction};
use super::marble::Marble;
use super::player::PlayerId;
use crate::rules::GameResult;

/// A push request: move the marble at `origin` one cell in `direction`,
/// shoving the contiguous run in front of it along.
///
/// ## Example
///
/// ```
/// use kuba::core::{Coord, Direction, Push};
///
/// let origin = Coord::new(0, 0).unwrap();
/// let push = Push::new(origin, Direction::Right);
/// assert_eq!(push.to_string(), "(0, 0) R");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Push {
    /// The pushing marble's cell.
    pub origin: Coord,

    /// Which way the run moves.
    pub direction: Direction,
}

impl Push {
    /// Create a push.
    #[must_use]
    pub const fn new(origin: Coord, direction: Direction) -> Self {
        Self { origin, direction }
    }
}

impl std::fmt::Display for Push {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.origin, self.direction)
    }
}

/// An accepted move, as stored in the game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: PlayerId,

    /// The push that was applied.
    pub push: Push,

    /// Marble that left the board, if any.
    pub pushed_off: Option<Marble>,

    /// Move number within the game (starts at 1).
    pub turn: u32,
}

/// What an accepted move did to the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Number of marbles that moved, including any pushed off the board.
    pub displaced: usize,

    /// Marble pushed off the board, if any.
    pub pushed_off: Option<Marble>,

    /// Did the mover capture a red marble?
    pub captured: bool,

    /// Set when this move ended the game.
    pub result: Option<GameResult>,
}
