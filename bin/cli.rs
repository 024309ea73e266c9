use crate::applet::Applet;
use anyhow::Error as Anyhow;
use clap::Parser;
use std::{cmp::min, io::stderr};
use tracing::{instrument, Level};
use tracing_subscriber::fmt::{format::FmtSpan, layer};
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

/// Crates whose events follow `--verbosity`, everything else is capped at warnings.
const TARGETS: [&str; 2] = ["cli", "lib"];

/// Command line interface.
#[derive(Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Verbosity level.
    #[clap(short, long)]
    #[cfg_attr(not(debug_assertions), clap(default_value_t = Level::WARN))]
    #[cfg_attr(debug_assertions, clap(default_value_t = Level::DEBUG))]
    verbosity: Level,

    #[clap(subcommand)]
    applet: Option<Applet>,
}

impl Cli {
    fn filter(&self) -> Targets {
        TARGETS
            .into_iter()
            .fold(Targets::new(), |t, target| t.with_target(target, self.verbosity))
            .with_default(min(Level::WARN, self.verbosity))
    }

    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        // Diagnostics go to stderr, stdout is reserved for the board.
        let writer = layer()
            .pretty()
            .without_time()
            .with_span_events(FmtSpan::NONE)
            .with_writer(stderr);

        registry().with(self.filter()).with(writer).init();

        self.applet.unwrap_or_default().execute()
    }
}
