use crate::game::{Color, Role};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use test_strategy::Arbitrary;

/// A [`Role`] owned by a [`Color`].
#[derive(
    Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary, Deserialize, Serialize,
)]
#[display(fmt = "{}{}", _0, "_1.code()")]
pub struct Piece(Role, Color);

impl Piece {
    /// Constructs [`Piece`] from a pair of [`Role`] and [`Color`].
    pub const fn new(r: Role, c: Color) -> Self {
        Piece(r, c)
    }

    /// This piece's [`Role`].
    pub const fn role(&self) -> Role {
        self.0
    }

    /// This piece's [`Color`].
    pub const fn color(&self) -> Color {
        self.1
    }

    /// Whether this is a queen.
    pub fn is_queen(&self) -> bool {
        self.0 == Role::Queen
    }
}
