use crate::game::{Cell, Coordinate};
use derive_more::Display;
use test_strategy::Arbitrary;

/// A proposed displacement from one [`Cell`] to another.
///
/// The cells are snapshots taken when the move was proposed,
/// they never reflect the live state of the board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary)]
#[display(fmt = "{}-{}", "_0.coordinate()", "_1.coordinate()")]
pub struct Move(Cell, Cell);

impl Move {
    /// Constructs [`Move`] from a pair of origin and destination [`Cell`]s.
    pub const fn new(origin: Cell, destination: Cell) -> Self {
        Move(origin, destination)
    }

    /// The origin [`Cell`].
    pub fn origin(&self) -> Cell {
        self.0
    }

    /// The destination [`Cell`].
    pub fn destination(&self) -> Cell {
        self.1
    }

    /// The origin [`Coordinate`].
    pub fn whence(&self) -> Coordinate {
        self.0.coordinate()
    }

    /// The destination [`Coordinate`].
    pub fn whither(&self) -> Coordinate {
        self.1.coordinate()
    }

    /// Whether this move goes back exactly where `other` came from.
    pub fn reverses(&self, other: &Move) -> bool {
        self.whence() == other.whither() && self.whither() == other.whence()
    }
}
