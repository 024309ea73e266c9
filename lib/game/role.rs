use serde::{Deserialize, Serialize};
use std::fmt::{self, Formatter, Write};
use test_strategy::Arbitrary;

/// The type of a [`Piece`][`crate::game::Piece`].
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary, Deserialize, Serialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Role {
    Pawn,
    Queen,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Role::Pawn => f.write_char('P'),
            Role::Queen => f.write_char('Q'),
        }
    }
}
