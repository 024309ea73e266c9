use std::io;

mod terminal;

pub use terminal::*;

/// Trait for types that implement a line oriented interface.
#[cfg_attr(test, mockall::automock)]
pub trait Io {
    /// Receive a message.
    fn recv(&mut self) -> io::Result<String>;

    /// Send a message.
    fn send(&mut self, msg: &str) -> io::Result<()>;

    /// Flush the internal buffers.
    fn flush(&mut self) -> io::Result<()>;
}
