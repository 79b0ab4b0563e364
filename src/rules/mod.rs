//! Game rules.
//!
//! - `push`: resolving a push into marble displacement
//! - `win`: detecting the end of the game
//! - `engine`: the `RulesEngine` trait tying them to a `GameState`

pub mod engine;
pub mod push;
pub mod win;

pub use engine::{GameResult, RulesEngine};
pub use push::{displace, push_run, Displacement};
