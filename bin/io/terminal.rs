use crate::Io;
use derive_more::DebugCustom;
use std::fmt::Display;
use std::io::{self, stdin, stdout, BufRead, Stdin, Stdout, Write};
use tracing::instrument;

/// A prompt interface over the standard streams.
///
/// Every [`Terminal`] shares the process wide stdin buffer,
/// so several of them can take turns reading lines.
#[derive(DebugCustom)]
#[debug(fmt = "Terminal({})", prompt)]
pub struct Terminal {
    prompt: String,
    writer: Stdout,
    reader: Stdin,
}

impl Terminal {
    /// Opens a terminal interface with the given prompt.
    #[instrument(level = "trace", skip(prompt), fields(%prompt))]
    pub fn new<P: Display>(prompt: P) -> Self {
        Terminal {
            prompt: prompt.to_string(),
            writer: stdout(),
            reader: stdin(),
        }
    }
}

impl Io for Terminal {
    #[instrument(level = "trace", ret, err)]
    fn recv(&mut self) -> io::Result<String> {
        write!(self.writer, "{} > ", self.prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        match self.reader.lock().read_line(&mut line)? {
            0 => Err(io::ErrorKind::UnexpectedEof.into()),
            _ => Ok(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }

    #[instrument(level = "trace", err)]
    fn send(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", msg)
    }

    #[instrument(level = "trace", err)]
    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
