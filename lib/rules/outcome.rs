use crate::game::Color;
use derive_more::Display;
use test_strategy::Arbitrary;

/// One of the possible ways a game ends.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary)]
pub enum Outcome {
    #[display(fmt = "the {} queen was pushed off the board", _0)]
    Ejected(Color),

    #[display(fmt = "the {} queen reached the center", _0)]
    Centered(Color),
}

impl Outcome {
    /// The winning side.
    pub fn winner(&self) -> Color {
        match *self {
            Outcome::Ejected(c) => !c,
            Outcome::Centered(c) => c,
        }
    }
}
