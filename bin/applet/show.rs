use anyhow::Error as Anyhow;
use clap::Parser;
use lib::{game::Color, rules::Referee, rules::Setup};
use tracing::instrument;

/// Renders the board of a setup.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Show {
    /// How the board is populated, in RON notation.
    #[clap(short, long, default_value_t)]
    setup: Setup,
}

impl Show {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut referee = Referee::new();
        referee.setup(&self.setup);

        println!("{}", referee.board());

        for c in Color::ALL {
            let store = referee.captures(c);
            let pieces: Vec<_> = store.pieces().iter().map(ToString::to_string).collect();
            println!("{} captures: [{}]", c, pieces.join(" "));
        }

        match (referee.turn(), referee.outcome()) {
            (_, Some(o)) => println!("{}, {} wins", o, o.winner()),
            (Some(c), None) if !referee.is_game_over() => println!("{} to move", c),
            _ => println!("the game is over without a winner"),
        }

        Ok(())
    }
}
