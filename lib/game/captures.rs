use crate::game::{Color, Piece, Role};
use arrayvec::ArrayVec;

const CAPACITY: usize = 7;

/// The pieces of one [`Color`] that were pushed off the board.
///
/// Holds at most [`CaptureStore::CAPACITY`] pieces, all of the store's own color.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct CaptureStore {
    color: Color,
    pieces: ArrayVec<Piece, CAPACITY>,
}

impl CaptureStore {
    /// The number of pieces each side starts with.
    pub const CAPACITY: usize = CAPACITY;

    /// An empty store for pieces of the given [`Color`].
    pub fn new(color: Color) -> Self {
        CaptureStore {
            color,
            pieces: ArrayVec::new(),
        }
    }

    /// The [`Color`] of the pieces this store accepts.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Stores a [`Piece`].
    ///
    /// Pieces of the other color and pieces beyond capacity are ignored,
    /// the return value tells whether the piece was stored.
    pub fn add(&mut self, p: Piece) -> bool {
        p.color() == self.color && self.pieces.try_push(p).is_ok()
    }

    /// The stored pieces, in the order they were added.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// The number of stored pieces.
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// The number of stored pieces of a [`Role`].
    pub fn count(&self, r: Role) -> usize {
        self.pieces.iter().filter(|p| p.role() == r).count()
    }

    /// Whether no piece was stored yet.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Whether the store reached [`CaptureStore::CAPACITY`].
    pub fn is_full(&self) -> bool {
        self.pieces.is_full()
    }
}
