//! Marble colors and board cell values.

use serde::{Deserialize, Serialize};

/// A marble on the board.
///
/// White and Black are the two player colors. Red marbles are neutral:
/// nobody owns them, and pushing one off the board scores a capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marble {
    White,
    Black,
    Red,
}

impl Marble {
    /// Is this the shared neutral color?
    #[must_use]
    pub const fn is_neutral(self) -> bool {
        matches!(self, Marble::Red)
    }

    /// Can a player be assigned this color?
    #[must_use]
    pub const fn is_player_color(self) -> bool {
        !self.is_neutral()
    }

    /// Single-character symbol used when rendering the board.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Marble::White => 'W',
            Marble::Black => 'B',
            Marble::Red => 'R',
        }
    }

    /// Parse a rendering symbol back into a marble.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Marble> {
        match symbol.to_ascii_uppercase() {
            'W' => Some(Marble::White),
            'B' => Some(Marble::Black),
            'R' => Some(Marble::Red),
            _ => None,
        }
    }
}

impl std::fmt::Display for Marble {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Marble::White => "White",
            Marble::Black => "Black",
            Marble::Red => "Red",
        };
        f.write_str(name)
    }
}

/// Contents of one board cell. `None` is an empty cell.
pub type Cell = Option<Marble>;

/// Number of marbles of each color on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarbleCounts {
    pub white: usize,
    pub black: usize,
    pub neutral: usize,
}

impl MarbleCounts {
    /// Count for a single color.
    #[must_use]
    pub const fn of(&self, marble: Marble) -> usize {
        match marble {
            Marble::White => self.white,
            Marble::Black => self.black,
            Marble::Red => self.neutral,
        }
    }

    /// Total marbles of all colors.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.white + self.black + self.neutral
    }

    pub(crate) fn add(&mut self, marble: Marble) {
        match marble {
            Marble::White => self.white += 1,
            Marble::Black => self.black += 1,
            Marble::Red => self.neutral += 1,
        }
    }
}
