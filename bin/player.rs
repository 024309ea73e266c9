use lib::game::Move;
use lib::rules::Referee;

mod human;

pub use human::*;

/// Trait for types that know how to play the game.
#[cfg_attr(test, mockall::automock(type Error = String;))]
pub trait Player {
    /// The reason why the [`Player`] was unable to continue.
    type Error;

    /// Picks a [`Move`] for the side to move.
    fn play(&mut self, referee: &Referee) -> Result<Move, Self::Error>;
}
