//! Rules engine trait and game results.
//!
//! A `RulesEngine` decides:
//! - Which pushes a player may attempt
//! - How an accepted push changes the state
//! - When the game is over

use serde::{Deserialize, Serialize};

use crate::core::action::{MoveOutcome, Push};
use crate::core::config::GameConfig;
use crate::core::error::MoveError;
use crate::core::player::PlayerId;
use crate::core::state::GameState;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Winner reached the red capture target.
    CaptureTarget(PlayerId),
    /// Winner's opponent has no marbles left.
    Elimination(PlayerId),
}

impl GameResult {
    /// The winning player.
    #[must_use]
    pub fn winner(&self) -> PlayerId {
        match *self {
            GameResult::CaptureTarget(p) | GameResult::Elimination(p) => p,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner() == player
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `candidate_moves`: a cheap superset of the legal pushes
/// - `apply_move`: atomic; on `Err` the state must be unchanged
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Pushes worth trying for `player`.
    ///
    /// May include moves that `apply_move` would still reject (for example
    /// a push that recreates an earlier position).
    fn candidate_moves(&self, state: &GameState, player: PlayerId) -> Vec<Push>;

    /// Apply a push for `player`.
    fn apply_move(
        &self,
        state: &mut GameState,
        player: PlayerId,
        push: Push,
    ) -> Result<MoveOutcome, MoveError>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Every push `apply_move` would accept for `player` right now.
    ///
    /// Default implementation probes each candidate on a clone of the state.
    fn legal_moves(&self, state: &GameState, player: PlayerId) -> Vec<Push> {
        self.candidate_moves(state, player)
            .into_iter()
            .filter(|&push| {
                let mut probe = state.clone();
                self.apply_move(&mut probe, player, push).is_ok()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let capture = GameResult::CaptureTarget(PlayerId::SECOND);
        assert!(!capture.is_winner(PlayerId::FIRST));
        assert!(capture.is_winner(PlayerId::SECOND));

        let elimination = GameResult::Elimination(PlayerId::FIRST);
        assert_eq!(elimination.winner(), PlayerId::FIRST);
        assert!(!elimination.is_winner(PlayerId::SECOND));
    }
}
