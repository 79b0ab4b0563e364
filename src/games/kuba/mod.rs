//! Kuba: a two-player marble-pushing game on a 7x7 board.
//!
//! - Each player has 8 marbles of their color; 13 red marbles are neutral
//! - On your turn, push one of your marbles left, right, forward or
//!   backward; it shoves the contiguous run in front of it one cell along
//! - The cell behind the pushed marble must be empty or off the board
//! - A marble shoved past the edge leaves the game; red ones score
//! - You may not recreate the board you left after your previous move
//! - First to 7 red captures wins; a player with no marbles left loses

mod game;

pub use game::{KubaGame, KubaGameBuilder, KubaRules};
