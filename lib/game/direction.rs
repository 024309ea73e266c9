use derive_more::Display;
use test_strategy::Arbitrary;

/// One of the four axis-aligned directions a piece may travel along.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary)]
pub enum Direction {
    #[display(fmt = "north")]
    North,
    #[display(fmt = "south")]
    South,
    #[display(fmt = "east")]
    East,
    #[display(fmt = "west")]
    West,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The unit displacement `(Δrow, Δcol)`.
    ///
    /// Rows grow southwards and columns grow eastwards.
    pub const fn delta(&self) -> (i8, i8) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    /// Whether this direction runs along a row.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::East | Direction::West)
    }
}
