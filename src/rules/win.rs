//! Win detection.
//!
//! Two conditions, checked after every accepted move:
//! 1. A player reaches the capture target.
//! 2. A player has no marbles of their color left; the other player wins.
//!
//! The capture target is checked first, so it wins any tie.

use crate::core::player::PlayerId;
use crate::core::state::GameState;

use super::engine::GameResult;

/// Decide whether the game has ended after `mover`'s move.
#[must_use]
pub fn evaluate(state: &GameState, mover: PlayerId, captures_to_win: u8) -> Option<GameResult> {
    let order = [mover, mover.opponent()];

    if let Some(&winner) = order
        .iter()
        .find(|&&p| state.captured(p) >= captures_to_win)
    {
        return Some(GameResult::CaptureTarget(winner));
    }

    // Pushing your own last marble off loses, even on your own move.
    order
        .iter()
        .find(|&&p| state.board().count(state.player(p).color) == 0)
        .map(|&loser| GameResult::Elimination(loser.opponent()))
}
