use crate::game::{Cell, Coordinate, Piece};
use std::fmt::{self, Display, Write};

/// The 7×7 board.
///
/// Every on-board [`Coordinate`] has exactly one [`Cell`], off-board coordinates are never
/// addressable: placing or removing pieces there is a no-op and querying them yields nothing.
///
/// The board is a plain value, copying it never shares cells with the original.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [[Cell; Board::SIZE]; Board::SIZE],
}

// We provide a custom implementation of Arbitrary rather than deriving,
// so that cells are guaranteed to sit at their own coordinates.
impl proptest::arbitrary::Arbitrary for Board {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Board>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;

        let occupancy = prop_oneof![3 => Just(None), 1 => any::<Piece>().prop_map(Some)];
        proptest::collection::vec(occupancy, Board::SIZE * Board::SIZE)
            .prop_map(|pieces| {
                let mut board = Board::new();
                for (c, p) in Coordinate::iter().zip(pieces) {
                    if let Some(p) = p {
                        board.place(p, c);
                    }
                }

                board
            })
            .boxed()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The number of rows and columns.
    pub const SIZE: usize = 7;

    /// An empty board.
    pub fn new() -> Self {
        let mut cells = [[Cell::new(Coordinate::new(0, 0)); Board::SIZE]; Board::SIZE];
        for c in Coordinate::iter() {
            cells[c.row() as usize][c.col() as usize] = Cell::new(c);
        }

        Board { cells }
    }

    /// Whether the [`Coordinate`] addresses a [`Cell`] of this board.
    pub fn is_on_board(&self, c: Coordinate) -> bool {
        c.is_on_board()
    }

    /// A copy of the [`Cell`] at the given [`Coordinate`], if on the board.
    pub fn cell(&self, c: Coordinate) -> Option<Cell> {
        self.slot(c).copied()
    }

    /// The [`Piece`] at the given [`Coordinate`], if any.
    pub fn piece(&self, c: Coordinate) -> Option<Piece> {
        self.slot(c).and_then(Cell::piece)
    }

    /// Copies of all cells, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// An iterator over all pieces on the board.
    pub fn iter(&self) -> impl Iterator<Item = (Piece, Coordinate)> + '_ {
        self.cells()
            .filter_map(|cell| Some((cell.piece()?, cell.coordinate())))
    }

    /// Puts a [`Piece`] at the given [`Coordinate`], replacing whatever was there.
    pub fn place(&mut self, p: Piece, c: Coordinate) {
        if let Some(cell) = self.slot_mut(c) {
            cell.place(p);
        }
    }

    /// Takes the [`Piece`] off the given [`Coordinate`], if any.
    pub fn remove(&mut self, c: Coordinate) -> Option<Piece> {
        self.slot_mut(c).and_then(Cell::remove)
    }

    fn slot(&self, c: Coordinate) -> Option<&Cell> {
        if c.is_on_board() {
            Some(&self.cells[c.row() as usize][c.col() as usize])
        } else {
            None
        }
    }

    fn slot_mut(&mut self, c: Coordinate) -> Option<&mut Cell> {
        if c.is_on_board() {
            Some(&mut self.cells[c.row() as usize][c.col() as usize])
        } else {
            None
        }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{}", r)?;
            for cell in row {
                f.write_char(' ')?;
                match cell.piece() {
                    Some(p) => write!(f, "{}", p)?,
                    None => f.write_str("--")?,
                }
            }

            writeln!(f)?;
        }

        f.write_str(" ")?;
        for c in 0..Board::SIZE {
            write!(f, " {:<2}", c)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Color, Role};
    use proptest::prelude::*;
    use test_strategy::proptest;

    #[test]
    fn new_board_has_one_empty_cell_per_coordinate() {
        let b = Board::new();
        assert_eq!(b.cells().count(), Board::SIZE * Board::SIZE);
        for (cell, c) in b.cells().zip(Coordinate::iter()) {
            assert_eq!(cell, Cell::new(c));
        }
    }

    #[proptest]
    fn cells_sit_at_their_own_coordinates(b: Board, c: Coordinate) {
        assert_eq!(b.cell(c).map(|cell| cell.coordinate()), Some(c));
    }

    #[proptest]
    fn iter_returns_pieces_and_coordinates(b: Board) {
        for (p, c) in b.iter() {
            assert_eq!(b.piece(c), Some(p));
        }
    }

    #[proptest]
    fn off_board_coordinates_are_not_addressable(
        mut b: Board,
        #[filter(!#c.is_on_board())]
        #[strategy((-3i8..10, -3i8..10).prop_map(|(r, c)| Coordinate::new(r, c)))]
        c: Coordinate,
        p: Piece,
    ) {
        let before = b;
        assert!(!b.is_on_board(c));
        assert_eq!(b.cell(c), None);
        assert_eq!(b.piece(c), None);

        b.place(p, c);
        assert_eq!(b, before);

        assert_eq!(b.remove(c), None);
        assert_eq!(b, before);
    }

    #[proptest]
    fn placing_piece_returns_equal_cell(mut b: Board, c: Coordinate, p: Piece) {
        b.place(p, c);
        assert_eq!(b.cell(c), Some(Cell::with(c, p)));
    }

    #[proptest]
    fn removing_piece_empties_cell(mut b: Board, c: Coordinate) {
        let p = b.piece(c);
        assert_eq!(b.remove(c), p);
        assert_eq!(b.piece(c), None);
    }

    #[proptest]
    fn mutating_a_copy_leaves_the_original_untouched(b: Board, c: Coordinate, p: Piece) {
        let snapshot = b;
        let mut copy = b;
        copy.place(p, c);
        copy.remove(Coordinate::CENTER);
        assert_eq!(b, snapshot);

        let mut cell = b.cell(c).unwrap();
        cell.remove();
        assert_eq!(b, snapshot);
    }

    #[proptest]
    fn board_renders_one_line_per_row_plus_footer(b: Board) {
        assert_eq!(b.to_string().lines().count(), Board::SIZE + 1);
    }

    #[test]
    fn board_renders_pieces_by_code_and_empty_cells_as_dashes() {
        let mut b = Board::new();
        b.place(Piece::new(Role::Queen, Color::White), Coordinate::new(0, 0));
        b.place(Piece::new(Role::Pawn, Color::Black), Coordinate::new(6, 6));

        let rendered = b.to_string();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines[0], "0 QW -- -- -- -- -- --");
        assert_eq!(lines[3], "3 -- -- -- -- -- -- --");
        assert_eq!(lines[6], "6 -- -- -- -- -- -- PB");
        assert_eq!(lines[7].trim_end(), "  0  1  2  3  4  5  6");
    }
}
