use crate::game::{Color, Coordinate, Piece};
use test_strategy::Arbitrary;

/// A slot on the board, possibly holding a [`Piece`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Arbitrary)]
pub struct Cell {
    coordinate: Coordinate,
    piece: Option<Piece>,
}

impl Cell {
    /// An empty cell at the given [`Coordinate`].
    pub const fn new(coordinate: Coordinate) -> Self {
        Cell {
            coordinate,
            piece: None,
        }
    }

    /// A cell at the given [`Coordinate`] holding a [`Piece`].
    pub const fn with(coordinate: Coordinate, piece: Piece) -> Self {
        Cell {
            coordinate,
            piece: Some(piece),
        }
    }

    /// Where this cell is.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// The [`Piece`] on this cell, if any.
    pub fn piece(&self) -> Option<Piece> {
        self.piece
    }

    /// The [`Color`] of the piece on this cell, if any.
    pub fn color(&self) -> Option<Color> {
        self.piece.map(|p| p.color())
    }

    /// Whether no piece sits on this cell.
    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    /// Puts a [`Piece`] on this cell, replacing whatever was there.
    pub fn place(&mut self, p: Piece) {
        self.piece = Some(p);
    }

    /// Takes the [`Piece`] off this cell.
    pub fn remove(&mut self) -> Option<Piece> {
        self.piece.take()
    }
}
