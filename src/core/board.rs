//! The 7x7 board: coordinates, push directions, and the cell grid.
//!
//! Coordinates are `(row, col)` with row 0 at the top. `Forward` moves
//! toward row 0, `Backward` toward row 6, `Left` toward column 0 and
//! `Right` toward column 6.

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, MoveError};
use super::marble::{Cell, Marble, MarbleCounts};

/// Width and height of the board.
pub const BOARD_SIZE: usize = 7;

/// An on-board coordinate.
///
/// A `Coord` is always inside the board; stepping off an edge yields `None`
/// rather than an out-of-range value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// Create a coordinate, or `None` if it lies off the board.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Coord> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Coord { row, col })
        } else {
            None
        }
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// The neighboring coordinate one step in `direction`, if on the board.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Coord> {
        let (dr, dc) = direction.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Coord::new(row, col)
    }

    /// Iterate over every coordinate in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord { row, col }))
    }
}

impl TryFrom<(usize, usize)> for Coord {
    type Error = MoveError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Coord::new(row, col).ok_or(MoveError::OutOfBounds { row, col })
    }
}

impl From<Coord> for (usize, usize) {
    fn from(coord: Coord) -> Self {
        (coord.row, coord.col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four push directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Forward,
    Backward,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Forward,
        Direction::Backward,
    ];

    /// Unit step as (row delta, column delta).
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Forward => (-1, 0),
            Direction::Backward => (1, 0),
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// Single-letter form: `L`, `R`, `F` or `B`.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
            Direction::Forward => 'F',
            Direction::Backward => 'B',
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = char;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        match letter.to_ascii_uppercase() {
            'L' => Ok(Direction::Left),
            'R' => Ok(Direction::Right),
            'F' => Ok(Direction::Forward),
            'B' => Ok(Direction::Backward),
            _ => Err(letter),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Fixed 7x7 grid of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// A board with no marbles.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Opening layout.
    ///
    /// The first color holds the top-left and bottom-right 2x2 corners, the
    /// second color the top-right and bottom-left corners. Thirteen red
    /// marbles form a diamond in the middle.
    ///
    /// ```
    /// use kuba::core::{Board, Marble};
    ///
    /// let board = Board::standard(Marble::White, Marble::Black);
    /// let counts = board.counts();
    /// assert_eq!((counts.white, counts.black, counts.neutral), (8, 8, 13));
    /// ```
    #[must_use]
    pub fn standard(first: Marble, second: Marble) -> Self {
        let mut board = Self::empty();

        for (r, c) in [(0, 0), (5, 5)] {
            board.fill_block(r, c, first);
        }
        for (r, c) in [(0, 5), (5, 0)] {
            board.fill_block(r, c, second);
        }

        board.cells[1][3] = Some(Marble::Red);
        board.cells[5][3] = Some(Marble::Red);
        for col in 2..=4 {
            board.cells[2][col] = Some(Marble::Red);
            board.cells[4][col] = Some(Marble::Red);
        }
        for col in 1..=5 {
            board.cells[3][col] = Some(Marble::Red);
        }

        board
    }

    fn fill_block(&mut self, top: usize, left: usize, marble: Marble) {
        for row in top..top + 2 {
            for col in left..left + 2 {
                self.cells[row][col] = Some(marble);
            }
        }
    }

    /// Parse a diagram of seven rows of seven symbols (`W`, `B`, `R`, `.`).
    ///
    /// Whitespace inside a row is ignored, so the output of `Display` parses
    /// back into the same board.
    pub fn from_rows(rows: [&str; BOARD_SIZE]) -> Result<Self, ConfigError> {
        let mut board = Self::empty();

        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != BOARD_SIZE {
                return Err(ConfigError::InvalidBoard(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    symbols.len(),
                    BOARD_SIZE
                )));
            }

            for (col, symbol) in symbols.into_iter().enumerate() {
                board.cells[row][col] = match symbol {
                    '.' => None,
                    other => Some(Marble::from_symbol(other).ok_or_else(|| {
                        ConfigError::InvalidBoard(format!(
                            "unknown symbol {:?} at ({}, {})",
                            other, row, col
                        ))
                    })?),
                };
            }
        }

        Ok(board)
    }

    /// Get the cell at a coordinate.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row][coord.col]
    }

    /// Overwrite the cell at a coordinate.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.row][coord.col] = cell;
    }

    /// Is this position empty or off the board?
    ///
    /// Pushing requires a clear cell behind the marble; the board edge counts
    /// as clear.
    #[must_use]
    pub fn is_clear(&self, coord: Option<Coord>) -> bool {
        coord.map_or(true, |c| self.get(c).is_none())
    }

    /// Iterate over occupied cells in row-major order.
    pub fn marbles(&self) -> impl Iterator<Item = (Coord, Marble)> + '_ {
        Coord::all().filter_map(move |c| self.get(c).map(|m| (c, m)))
    }

    /// Count marbles of each color.
    #[must_use]
    pub fn counts(&self) -> MarbleCounts {
        let mut counts = MarbleCounts::default();
        for (_, marble) in self.marbles() {
            counts.add(marble);
        }
        counts
    }

    /// Count marbles of one color.
    #[must_use]
    pub fn count(&self, marble: Marble) -> usize {
        self.marbles().filter(|&(_, m)| m == marble).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row
                .iter()
                .map(|cell| cell.map_or('.', Marble::symbol).to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
