use crate::{game::Game, Human, Terminal};
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::{game::Color, rules::Referee, rules::Setup};
use tracing::{info, instrument};

/// A game between two players sharing the terminal.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// How the board is populated, in RON notation.
    #[clap(short, long, default_value_t)]
    setup: Setup,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut referee = Referee::new();
        referee.setup(&self.setup);

        let white = Human::new(Terminal::new(Color::White));
        let black = Human::new(Terminal::new(Color::Black));
        let referee = Game::new(white, black).play(referee)?;

        info!(plies = referee.plies(), "game over");

        println!("{}", referee.board());
        match referee.outcome() {
            Some(o) => println!("{}, {} wins", o, o.winner()),
            None => println!("the game ended without a winner"),
        }

        Ok(())
    }
}
