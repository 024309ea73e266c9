use crate::game::{Board, Direction};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use test_strategy::Arbitrary;

/// A position on the grid.
///
/// Coordinates outside of the board are representable, they come up when pieces are pushed
/// past an edge, but they never address a [`Cell`][`crate::game::Cell`].
#[derive(
    Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary, Deserialize,
    Serialize,
)]
#[serde(deny_unknown_fields)]
#[display(fmt = "{}{}", row, col)]
pub struct Coordinate {
    #[strategy(0i8..Board::SIZE as i8)]
    row: i8,
    #[strategy(0i8..Board::SIZE as i8)]
    col: i8,
}

impl Coordinate {
    /// The center of the board, a queen that reaches it wins the game.
    pub const CENTER: Coordinate = Coordinate::new(3, 3);

    /// Constructs [`Coordinate`] from a pair of row and column.
    pub const fn new(row: i8, col: i8) -> Self {
        Coordinate { row, col }
    }

    /// This coordinate's row.
    pub const fn row(&self) -> i8 {
        self.row
    }

    /// This coordinate's column.
    pub const fn col(&self) -> i8 {
        self.col
    }

    /// Whether this coordinate lies on the 7×7 board.
    pub fn is_on_board(&self) -> bool {
        let range = 0..Board::SIZE as i8;
        range.contains(&self.row) && range.contains(&self.col)
    }

    /// The coordinate `n` steps away in the given [`Direction`].
    pub fn offset(&self, d: Direction, n: i8) -> Self {
        let (dr, dc) = d.delta();
        Coordinate::new(self.row + dr * n, self.col + dc * n)
    }

    /// An iterator over every coordinate on the board, in row-major order.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        let size = Board::SIZE as i8;
        (0..size * size).map(move |i| Coordinate::new(i / size, i % size))
    }
}

/// The reason why parsing [`Coordinate`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse coordinate, expected a row digit followed by a column digit")]
pub struct ParseCoordinateError;

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut digits = s.chars().map(|c| c.to_digit(10));
        match (digits.next(), digits.next(), digits.next()) {
            (Some(Some(r)), Some(Some(c)), None) => Ok(Coordinate::new(r as i8, c as i8)),
            _ => Err(ParseCoordinateError),
        }
    }
}
