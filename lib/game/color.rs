use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::ops::Not;
use test_strategy::Arbitrary;

/// The color of a [`Piece`][`crate::game::Piece`], identifying the player who owns it.
#[derive(
    Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary, Deserialize, Serialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    #[display(fmt = "white")]
    White,
    #[display(fmt = "black")]
    Black,
}

impl Color {
    /// Both colors, the first mover first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// The single letter used when rendering pieces of this color.
    pub fn code(&self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }
}

impl Not for Color {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}
