//! Game state: board, players, turn, captures, undo snapshots, history.
//!
//! `GameState` is a plain aggregate. Every write goes through the rules
//! engine (`games::kuba::KubaRules`), which keeps the board, the snapshots
//! and the turn consistent; everything else only reads.
//!
//! ## Undo snapshots
//!
//! Each player has one slot holding the board exactly as it stood after
//! that player's last accepted move. The slot is replaced on every accepted
//! move by that player and never touched otherwise.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::MoveRecord;
use super::board::Board;
use super::error::ConfigError;
use super::marble::Marble;
use super::player::{Player, PlayerId, PlayerMap};
use crate::rules::GameResult;

/// Complete state of one game.
///
/// Uses an `im` persistent vector for history so cloning a state to probe
/// a move is O(1) in the length of the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,

    players: PlayerMap<Player>,

    /// `None` until the first accepted move; either player may open.
    active_player: Option<PlayerId>,

    /// Red marbles each player has pushed off the board.
    captured: PlayerMap<u8>,

    /// Set once, then never changes.
    result: Option<GameResult>,

    last_boards: PlayerMap<Option<Board>>,

    history: Vector<MoveRecord>,
}

impl GameState {
    /// Create a fresh game state on `board`.
    pub(crate) fn new(players: PlayerMap<Player>, board: Board) -> Self {
        Self {
            board,
            players,
            active_player: None,
            captured: PlayerMap::with_value(0),
            result: None,
            last_boards: PlayerMap::with_default(),
            history: Vector::new(),
        }
    }

    // === Board ===

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    // === Players ===

    /// Both seated players.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// A seated player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Look a player up by name.
    #[must_use]
    pub fn player_by_name(&self, name: &str) -> Option<PlayerId> {
        self.players.find(|p| p.name == name)
    }

    /// Look a player up by marble color. Red has no owner.
    #[must_use]
    pub fn player_by_color(&self, color: Marble) -> Option<PlayerId> {
        self.players.find(|p| p.color == color)
    }

    // === Turn ===

    /// Whose turn it is, or `None` before the first move.
    #[must_use]
    pub fn active_player(&self) -> Option<PlayerId> {
        self.active_player
    }

    pub(crate) fn set_active_player(&mut self, player: PlayerId) {
        self.active_player = Some(player);
    }

    // === Captures ===

    /// Red marbles captured by a player.
    #[must_use]
    pub fn captured(&self, player: PlayerId) -> u8 {
        self.captured[player]
    }

    pub(crate) fn add_capture(&mut self, player: PlayerId) {
        self.captured[player] = self.captured[player].saturating_add(1);
    }

    // === Result ===

    /// How the game ended, if it has.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.result.map(|r| r.winner())
    }

    /// Has a winner been decided?
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    pub(crate) fn set_result(&mut self, result: GameResult) {
        debug_assert!(self.result.is_none(), "winner is final");
        self.result = Some(result);
    }

    // === Undo snapshots ===

    /// Board as it stood after this player's last accepted move.
    #[must_use]
    pub fn last_board(&self, player: PlayerId) -> Option<&Board> {
        self.last_boards[player].as_ref()
    }

    /// Does `board` match any player's stored snapshot?
    #[must_use]
    pub fn repeats_snapshot(&self, board: &Board) -> bool {
        self.last_boards.iter().any(|(_, snap)| snap.as_ref() == Some(board))
    }

    pub(crate) fn set_last_board(&mut self, player: PlayerId, board: Board) {
        self.last_boards[player] = Some(board);
    }

    // === History ===

    /// Accepted moves in order.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Number the next accepted move will carry (starts at 1).
    #[must_use]
    pub fn next_turn(&self) -> u32 {
        self.history.len() as u32 + 1
    }

    pub(crate) fn record_move(&mut self, record: MoveRecord) {
        self.history.push_back(record);
    }

    /// Check the seating invariants that construction guarantees.
    ///
    /// Used after decoding a saved game, where the bytes may come from
    /// anywhere.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        validate_players(&self.players)
    }
}

/// Names must be non-empty and distinct; colors must be distinct player
/// colors.
pub(crate) fn validate_players(players: &PlayerMap<Player>) -> Result<(), ConfigError> {
    let first = &players[PlayerId::FIRST];
    let second = &players[PlayerId::SECOND];

    for player in [first, second] {
        if player.name.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if player.color.is_neutral() {
            return Err(ConfigError::NeutralColor);
        }
    }
    if first.name == second.name {
        return Err(ConfigError::DuplicateName(first.name.clone()));
    }
    if first.color == second.color {
        return Err(ConfigError::DuplicateColor(first.color));
    }
    Ok(())
}
