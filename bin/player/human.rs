use crate::{Io, Order, Player};
use derive_more::{Constructor, From};
use lib::game::{Color, Move};
use lib::rules::Referee;
use std::{fmt::Debug, io};
use tracing::{instrument, warn};

/// A [`Player`] that takes orders over an [`Io`] interface.
#[derive(Debug, From, Constructor)]
pub struct Human<T: Io + Debug> {
    io: T,
}

impl<T: Io + Debug> Human<T> {
    fn show(&mut self, referee: &Referee) -> io::Result<()> {
        self.io.send(&referee.board().to_string())?;

        for c in Color::ALL {
            let store = referee.captures(c);
            if !store.is_empty() {
                let pieces: Vec<_> = store.pieces().iter().map(ToString::to_string).collect();
                self.io.send(&format!("{} captures: {}", c, pieces.join(" ")))?;
            }
        }

        Ok(())
    }
}

impl<T: Io + Debug> Player for Human<T> {
    type Error = io::Error;

    #[instrument(level = "trace", skip(referee), err)]
    fn play(&mut self, referee: &Referee) -> io::Result<Move> {
        self.show(referee)?;

        loop {
            self.io.flush()?;
            let line = self.io.recv()?;

            let order: Order = match line.parse() {
                Ok(o) => o,
                Err(e) => {
                    self.io.send(&format!("{}", e))?;
                    continue;
                }
            };

            let m = referee.propose(order.whence, order.whither);
            match referee.check(&m) {
                Ok(()) => break Ok(m),
                Err(e) => {
                    warn!(%m, "{}", e);
                    self.io.send(&format!("illegal move {}: {}", m, e))?;
                }
            }
        }
    }
}
