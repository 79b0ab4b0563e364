//! Kuba game implementation.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::state::validate_players;
use crate::core::{
    Board, ConfigError, Coord, Direction, GameConfig, GameState, Marble, MarbleCounts,
    MoveError, MoveOutcome, MoveRecord, Player, PlayerId, PlayerMap, Push, StateError,
};
use crate::rules::push::{displace, has_room_behind};
use crate::rules::{win, GameResult, RulesEngine};

/// The Kuba rules.
///
/// Stateless apart from configuration; all game data lives in `GameState`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KubaRules {
    config: GameConfig,
}

impl KubaRules {
    /// Create rules with the given configuration.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }
}

impl RulesEngine for KubaRules {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn candidate_moves(&self, state: &GameState, player: PlayerId) -> Vec<Push> {
        if state.is_over() || state.active_player().is_some_and(|active| active != player) {
            return vec![];
        }

        let color = state.player(player).color;
        let board = state.board();

        board
            .marbles()
            .filter(|&(_, marble)| marble == color)
            .flat_map(|(origin, _)| {
                Direction::ALL
                    .into_iter()
                    .filter(move |&dir| has_room_behind(board, origin, dir))
                    .map(move |dir| Push::new(origin, dir))
            })
            .collect()
    }

    fn apply_move(
        &self,
        state: &mut GameState,
        player: PlayerId,
        push: Push,
    ) -> Result<MoveOutcome, MoveError> {
        if state.is_over() {
            return Err(MoveError::GameOver);
        }
        if state.active_player().is_some_and(|active| active != player) {
            return Err(MoveError::NotYourTurn);
        }
        if state.board().get(push.origin) != Some(state.player(player).color) {
            return Err(MoveError::NotOwnMarble);
        }

        // Resolve on a scratch board; the live board is only replaced once
        // the undo check has passed.
        let mut board = *state.board();
        let displacement = displace(&mut board, push.origin, push.direction)?;

        if state.repeats_snapshot(&board) {
            return Err(MoveError::UndoRejected);
        }

        *state.board_mut() = board;

        let captured = displacement.pushed_off.is_some_and(Marble::is_neutral);
        if captured {
            state.add_capture(player);
        }

        state.set_last_board(player, board);
        state.set_active_player(player.opponent());

        let turn = state.next_turn();
        state.record_move(MoveRecord {
            player,
            push,
            pushed_off: displacement.pushed_off,
            turn,
        });

        let result = win::evaluate(state, player, self.config.captures_to_win);
        if let Some(result) = result {
            state.set_result(result);
        }

        Ok(MoveOutcome {
            displaced: displacement.moved.len(),
            pushed_off: displacement.pushed_off,
            captured,
            result,
        })
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.result()
    }
}

/// Builder for creating a `KubaGame`.
#[derive(Clone, Debug, Default)]
pub struct KubaGameBuilder {
    players: Vec<Player>,
    config: GameConfig,
    board: Option<Board>,
}

impl KubaGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat a player. Call exactly twice; the first call is `PlayerId::FIRST`.
    pub fn player(mut self, name: impl Into<String>, color: Marble) -> Self {
        self.players.push(Player::new(name, color));
        self
    }

    pub fn captures_to_win(mut self, captures: u8) -> Self {
        self.config.captures_to_win = captures;
        self
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Start from a custom position instead of the standard layout.
    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    /// Build the game.
    pub fn build(self) -> Result<KubaGame, ConfigError> {
        self.config.validate()?;

        let count = self.players.len();
        let mut seats = self.players.into_iter();
        let (first, second) = match (seats.next(), seats.next(), seats.next()) {
            (Some(first), Some(second), None) => (first, second),
            _ => return Err(ConfigError::PlayerCount(count)),
        };

        let board = self
            .board
            .unwrap_or_else(|| Board::standard(first.color, second.color));
        let players = PlayerMap::from_pair(first, second);
        validate_players(&players)?;

        for (_, player) in players.iter() {
            if board.count(player.color) == 0 {
                return Err(ConfigError::InvalidBoard(format!(
                    "no {} marbles for {}",
                    player.color, player.name
                )));
            }
        }

        Ok(KubaGame {
            rules: KubaRules::new(self.config),
            state: GameState::new(players, board),
        })
    }
}

/// A game of Kuba: rules plus state, addressed by player name.
///
/// ## Example
///
/// ```
/// use kuba::{Direction, KubaGame, Marble};
///
/// let mut game = KubaGame::new("Ana", Marble::White, "Ben", Marble::Black).unwrap();
///
/// // Either player may open.
/// assert!(game.make_move("Ben", (6, 0), Direction::Forward));
/// assert_eq!(game.current_turn(), Some("Ana"));
///
/// // Ben cannot move twice in a row.
/// assert!(!game.make_move("Ben", (0, 6), Direction::Left));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KubaGame {
    rules: KubaRules,
    state: GameState,
}

impl KubaGame {
    /// Start a standard game.
    pub fn new(
        first_name: impl Into<String>,
        first_color: Marble,
        second_name: impl Into<String>,
        second_color: Marble,
    ) -> Result<Self, ConfigError> {
        KubaGameBuilder::new()
            .player(first_name, first_color)
            .player(second_name, second_color)
            .build()
    }

    pub fn builder() -> KubaGameBuilder {
        KubaGameBuilder::new()
    }

    /// Get the rules.
    pub fn rules(&self) -> &KubaRules {
        &self.rules
    }

    /// Get the full state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn player_id(&self, name: &str) -> Result<PlayerId, MoveError> {
        self.state
            .player_by_name(name)
            .ok_or_else(|| MoveError::UnknownPlayer(name.to_string()))
    }

    fn player_name(&self, id: PlayerId) -> &str {
        &self.state.player(id).name
    }

    /// Push the marble at `coordinates` toward `direction`.
    ///
    /// On `Err` the game is unchanged.
    pub fn try_move(
        &mut self,
        player_name: &str,
        coordinates: (usize, usize),
        direction: Direction,
    ) -> Result<MoveOutcome, MoveError> {
        if self.state.is_over() {
            return Err(MoveError::GameOver);
        }
        let player = self.player_id(player_name)?;
        let origin = Coord::try_from(coordinates)?;
        self.rules
            .apply_move(&mut self.state, player, Push::new(origin, direction))
    }

    /// Like `try_move`, reporting only whether the move was accepted.
    pub fn make_move(
        &mut self,
        player_name: &str,
        coordinates: (usize, usize),
        direction: Direction,
    ) -> bool {
        self.try_move(player_name, coordinates, direction).is_ok()
    }

    /// Name of the player to move, or `None` before the first move.
    pub fn current_turn(&self) -> Option<&str> {
        self.state.active_player().map(|p| self.player_name(p))
    }

    /// Name of the winner, if decided.
    pub fn winner(&self) -> Option<&str> {
        self.state.winner().map(|p| self.player_name(p))
    }

    /// How the game ended, if it has.
    pub fn result(&self) -> Option<GameResult> {
        self.rules.is_terminal(&self.state)
    }

    /// Red marbles captured by the named player.
    pub fn captured(&self, player_name: &str) -> Option<u8> {
        self.state
            .player_by_name(player_name)
            .map(|p| self.state.captured(p))
    }

    /// Marble at a cell. Empty and off-board cells both read as `None`.
    pub fn marble_at(&self, (row, col): (usize, usize)) -> Option<Marble> {
        Coord::new(row, col).and_then(|c| self.state.board().get(c))
    }

    /// Marbles of each color on the board.
    pub fn marble_counts(&self) -> MarbleCounts {
        self.state.board().counts()
    }

    /// Pushes the named player could make right now.
    pub fn legal_moves(&self, player_name: &str) -> Result<Vec<Push>, MoveError> {
        let player = self.player_id(player_name)?;
        Ok(self.rules.legal_moves(&self.state, player))
    }

    /// Accepted moves in order.
    pub fn history(&self) -> &Vector<MoveRecord> {
        self.state.history()
    }

    /// Board grid followed by captures and turn status.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Encode the whole game (rules, board, captures, turn, snapshots,
    /// history, winner).
    pub fn to_bytes(&self) -> Result<Vec<u8>, StateError> {
        bincode::serialize(self).map_err(StateError::Encode)
    }

    /// Decode a game written by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StateError> {
        let game: KubaGame = bincode::deserialize(bytes).map_err(StateError::Decode)?;
        game.rules.config.validate()?;
        game.state.validate()?;
        Ok(game)
    }
}

impl std::fmt::Display for KubaGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.state.board())?;

        for (id, player) in self.state.players().iter() {
            writeln!(
                f,
                "{} ({}): {} captured",
                player.name,
                player.color,
                self.state.captured(id)
            )?;
        }

        match (self.winner(), self.current_turn()) {
            (Some(winner), _) => writeln!(f, "Winner: {}", winner),
            (None, Some(turn)) => writeln!(f, "Turn: {}", turn),
            (None, None) => writeln!(f, "Turn: either player"),
        }
    }
}
