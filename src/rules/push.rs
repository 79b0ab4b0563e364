//! Push resolution.
//!
//! One routine handles all four directions. A push starts at the origin
//! marble and walks in the push direction, collecting the contiguous run of
//! occupied cells. Every marble in the run shifts one cell; the marble at
//! the far end either slides into the empty cell beyond the run or drops
//! off the board.
//!
//! The cell behind the origin (one step opposite the push) must be empty or
//! off the board. That rule guarantees the run can always shift by one.

use smallvec::SmallVec;

use crate::core::board::{Board, Coord, Direction, BOARD_SIZE};
use crate::core::error::MoveError;
use crate::core::marble::Marble;

/// Marbles in a push run with their cells, origin first.
pub type Run = SmallVec<[(Coord, Marble); BOARD_SIZE]>;

/// Effect of a resolved push.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Displacement {
    /// Every marble that moved, by the cell it moved from, origin first.
    pub moved: Run,

    /// The far-end marble, if it left the board.
    pub pushed_off: Option<Marble>,
}

/// Collect the contiguous run of marbles starting at `origin`.
///
/// Empty if the origin itself is empty.
#[must_use]
pub fn push_run(board: &Board, origin: Coord, direction: Direction) -> Run {
    let mut run = Run::new();
    let mut cursor = Some(origin);

    while let Some(coord) = cursor {
        match board.get(coord) {
            Some(marble) => run.push((coord, marble)),
            None => break,
        }
        cursor = coord.step(direction);
    }

    run
}

/// Is there room behind `origin` to push toward `direction`?
#[must_use]
pub fn has_room_behind(board: &Board, origin: Coord, direction: Direction) -> bool {
    board.is_clear(origin.step(direction.opposite()))
}

/// Shift the run at `origin` one cell toward `direction`.
///
/// Fails without touching the board if the origin is empty
/// (`NotOwnMarble`) or the cell behind it is occupied (`Blocked`).
pub fn displace(
    board: &mut Board,
    origin: Coord,
    direction: Direction,
) -> Result<Displacement, MoveError> {
    if board.get(origin).is_none() {
        return Err(MoveError::NotOwnMarble);
    }
    if !has_room_behind(board, origin, direction) {
        return Err(MoveError::Blocked);
    }

    let run = push_run(board, origin, direction);
    board.set(origin, None);

    // Far end first so no marble lands on one that has not moved yet.
    let mut pushed_off = None;
    for &(coord, marble) in run.iter().rev() {
        match coord.step(direction) {
            Some(dest) => board.set(dest, Some(marble)),
            None => pushed_off = Some(marble),
        }
    }

    Ok(Displacement {
        moved: run,
        pushed_off,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    fn board(rows: [&str; 7]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_single_marble_right() {
        let mut b = board([
            "W......",
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
        ]);

        let d = displace(&mut b, at(0, 0), Direction::Right).unwrap();

        assert_eq!(d.moved.len(), 1);
        assert_eq!(d.pushed_off, None);
        assert_eq!(b.get(at(0, 0)), None);
        assert_eq!(b.get(at(0, 1)), Some(Marble::White));
    }

    #[test]
    fn test_chain_left_from_edge() {
        let mut b = board([
            "....RW.",
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
        ]);
        // Marble at (0,5) with (0,6) empty behind it.
        let d = displace(&mut b, at(0, 5), Direction::Left).unwrap();

        assert_eq!(d.moved.as_slice(), &[(at(0, 5), Marble::White), (at(0, 4), Marble::Red)]);
        assert_eq!(b.get(at(0, 3)), Some(Marble::Red));
        assert_eq!(b.get(at(0, 4)), Some(Marble::White));
        assert_eq!(b.get(at(0, 5)), None);
    }

    #[test]
    fn test_forward_and_backward() {
        let empty_rows = [".......", ".......", ".......", ".......", ".......", ".......", "......."];
        let mut b = Board::from_rows(empty_rows).unwrap();
        b.set(at(4, 2), Some(Marble::Black));
        b.set(at(3, 2), Some(Marble::Red));

        displace(&mut b, at(4, 2), Direction::Forward).unwrap();
        assert_eq!(b.get(at(2, 2)), Some(Marble::Red));
        assert_eq!(b.get(at(3, 2)), Some(Marble::Black));
        assert_eq!(b.get(at(4, 2)), None);

        // Red now sits behind the black marble.
        assert_eq!(displace(&mut b, at(3, 2), Direction::Backward), Err(MoveError::Blocked));

        displace(&mut b, at(2, 2), Direction::Backward).unwrap();
        assert_eq!(b.get(at(4, 2)), Some(Marble::Black));
        assert_eq!(b.get(at(3, 2)), Some(Marble::Red));
        assert_eq!(b.get(at(2, 2)), None);
    }

    #[test]
    fn test_push_off_far_edge() {
        let mut b = board([
            ".......",
            ".......",
            ".......",
            "....WRR",
            ".......",
            ".......",
            ".......",
        ]);

        let d = displace(&mut b, at(3, 4), Direction::Right).unwrap();

        assert_eq!(d.moved.len(), 3);
        assert_eq!(d.pushed_off, Some(Marble::Red));
        assert_eq!(b.get(at(3, 4)), None);
        assert_eq!(b.get(at(3, 5)), Some(Marble::White));
        assert_eq!(b.get(at(3, 6)), Some(Marble::Red));
        assert_eq!(b.counts().neutral, 1);
    }

    #[test]
    fn test_push_own_marble_off_edge() {
        let mut b = board([
            "W......",
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
        ]);

        let d = displace(&mut b, at(0, 0), Direction::Forward).unwrap();

        assert_eq!(d.pushed_off, Some(Marble::White));
        assert_eq!(b.counts().total(), 0);
    }

    #[test]
    fn test_full_row() {
        let mut b = board([
            ".......",
            ".......",
            ".......",
            "WRBRRWB",
            ".......",
            ".......",
            ".......",
        ]);

        let d = displace(&mut b, at(3, 0), Direction::Right).unwrap();

        assert_eq!(d.moved.len(), 7);
        assert_eq!(d.pushed_off, Some(Marble::Black));
        assert_eq!(b, board([
            ".......",
            ".......",
            ".......",
            ".WRBRRW",
            ".......",
            ".......",
            ".......",
        ]));
    }

    #[test]
    fn test_blocked_leaves_board_untouched() {
        let mut b = Board::standard(Marble::White, Marble::Black);
        let before = b;

        // (0,1) has (0,0) occupied behind it when pushing right.
        assert_eq!(displace(&mut b, at(0, 1), Direction::Right), Err(MoveError::Blocked));
        // (1,1) has (0,1) occupied behind it when pushing backward.
        assert_eq!(displace(&mut b, at(1, 1), Direction::Backward), Err(MoveError::Blocked));
        assert_eq!(b, before);
    }

    #[test]
    fn test_empty_origin() {
        let mut b = Board::empty();
        assert_eq!(displace(&mut b, at(3, 3), Direction::Left), Err(MoveError::NotOwnMarble));
    }

    #[test]
    fn test_push_run_stops_at_gap() {
        let b = board([
            ".......",
            ".......",
            ".......",
            "WR.RR..",
            ".......",
            ".......",
            ".......",
        ]);

        let run = push_run(&b, at(3, 0), Direction::Right);
        assert_eq!(run.len(), 2);
        assert!(push_run(&b, at(3, 2), Direction::Right).is_empty());
    }

    #[test]
    fn test_every_direction_moves_run_by_one() {
        for dir in Direction::ALL {
            let mut b = Board::empty();
            let origin = at(3, 3);
            let next = origin.step(dir).unwrap();
            b.set(origin, Some(Marble::White));
            b.set(next, Some(Marble::Red));

            let d = displace(&mut b, origin, dir).unwrap();

            assert_eq!(d.pushed_off, None, "direction {}", dir);
            assert_eq!(b.get(origin), None, "direction {}", dir);
            assert_eq!(b.get(next), Some(Marble::White), "direction {}", dir);
            assert_eq!(b.get(next.step(dir).unwrap()), Some(Marble::Red), "direction {}", dir);
        }
    }
}
