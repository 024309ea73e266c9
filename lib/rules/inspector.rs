use crate::game::{Board, Cell, Color, Coordinate, Direction, Piece, Role};
use derive_more::Constructor;
use std::cmp::Ordering;

/// Read-only queries over a [`Board`].
#[derive(Debug, Copy, Clone, Constructor)]
pub struct Inspector<'a> {
    board: &'a Board,
}

impl<'a> Inspector<'a> {
    /// The number of columns between two [`Coordinate`]s on the same row.
    pub fn distance_horizontal(&self, o: Coordinate, d: Coordinate) -> Option<u8> {
        (o.row() == d.row()).then(|| o.col().abs_diff(d.col()))
    }

    /// The number of rows between two [`Coordinate`]s on the same column.
    pub fn distance_vertical(&self, o: Coordinate, d: Coordinate) -> Option<u8> {
        (o.col() == d.col()).then(|| o.row().abs_diff(d.row()))
    }

    /// The [`Direction`] from `o` towards `d`, if they are aligned and distinct.
    pub fn direction(&self, o: Coordinate, d: Coordinate) -> Option<Direction> {
        use Ordering::*;
        match (d.row().cmp(&o.row()), d.col().cmp(&o.col())) {
            (Less, Equal) => Some(Direction::North),
            (Greater, Equal) => Some(Direction::South),
            (Equal, Greater) => Some(Direction::East),
            (Equal, Less) => Some(Direction::West),
            _ => None,
        }
    }

    /// The number of occupied cells in a row.
    pub fn count_occupied_in_row(&self, row: i8) -> usize {
        (0..Board::SIZE as i8)
            .filter(|&col| self.board.piece(Coordinate::new(row, col)).is_some())
            .count()
    }

    /// The number of occupied cells in a column.
    pub fn count_occupied_in_column(&self, col: i8) -> usize {
        (0..Board::SIZE as i8)
            .filter(|&row| self.board.piece(Coordinate::new(row, col)).is_some())
            .count()
    }

    /// The number of pieces of a [`Role`] and [`Color`] on the board.
    pub fn count_pieces(&self, r: Role, c: Color) -> usize {
        let piece = Piece::new(r, c);
        self.board.iter().filter(|&(p, _)| p == piece).count()
    }

    /// The [`Cell`] holding the queen of a [`Color`], unless it was pushed off the board.
    pub fn find_queen(&self, c: Color) -> Option<Cell> {
        let queen = Piece::new(Role::Queen, c);
        self.board.cells().find(|cell| cell.piece() == Some(queen))
    }

    /// Whether the queen of a [`Color`] is still on the board.
    pub fn has_queen(&self, c: Color) -> bool {
        self.count_pieces(Role::Queen, c) > 0
    }

    /// Whether the queen of a [`Color`] sits on [`Coordinate::CENTER`].
    pub fn is_queen_centered(&self, c: Color) -> bool {
        self.find_queen(c)
            .is_some_and(|cell| cell.coordinate() == Coordinate::CENTER)
    }
}
