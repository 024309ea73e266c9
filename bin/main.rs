use anyhow::Error as Anyhow;
use clap::Parser;

mod applet;
mod cli;
mod game;
mod io;
mod order;
mod player;

pub use io::*;
pub use order::*;
pub use player::*;

fn main() -> Result<(), Anyhow> {
    cli::Cli::parse().execute()
}
