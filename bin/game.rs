use crate::Player;
use derive_more::{Constructor, Display, Error};
use lib::{game::Color, rules::Referee};
use tracing::{field::display, instrument, warn, Span};

/// The reason why the [`Game`] was interrupted.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "the {} player encountered an error")]
pub enum GameInterrupted<W, B> {
    #[display(fmt = "white")]
    White(W),

    #[display(fmt = "black")]
    Black(B),
}

/// Holds the players of a game.
#[derive(Debug, Constructor)]
pub struct Game<W, B> {
    white: W,
    black: B,
}

impl<W: Player, B: Player> Game<W, B> {
    /// Plays the game out, starting from the position the [`Referee`] is set up with.
    #[instrument(level = "debug", skip(self, referee), err, fields(outcome))]
    pub fn play(
        mut self,
        mut referee: Referee,
    ) -> Result<Referee, GameInterrupted<W::Error, B::Error>> {
        use GameInterrupted::*;

        loop {
            if referee.is_game_over() {
                if let Some(o) = referee.outcome() {
                    Span::current().record("outcome", display(o));
                }

                break Ok(referee);
            }

            let m = match referee.turn() {
                Some(Color::White) => self.white.play(&referee).map_err(White)?,
                Some(Color::Black) => self.black.play(&referee).map_err(Black)?,
                None => break Ok(referee),
            };

            if let Err(e) = referee.play(&m) {
                warn!(%m, "{}", e);
            }
        }
    }
}
