use crate::game::{Coordinate, Move};
use derive_more::{Display, Error};

/// The reason why a [`Move`] is illegal.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum IllegalMove {
    #[display(fmt = "the game is already over")]
    GameOver,

    #[display(fmt = "`{}` is off the board", _0)]
    OffBoard(#[error(not(source))] Coordinate),

    #[display(fmt = "there is no piece of the side to move on `{}`", _0)]
    NotOwned(#[error(not(source))] Coordinate),

    #[display(fmt = "`{}` is neither horizontal nor vertical", _0)]
    NotStraight(#[error(not(source))] Move),

    #[display(fmt = "the piece must travel exactly {} cells, not {}", permitted, distance)]
    WrongDistance { permitted: usize, distance: u8 },

    #[display(fmt = "`{}` reverses the last move", _0)]
    Reversal(#[error(not(source))] Move),
}
