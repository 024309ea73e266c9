mod board;
mod captures;
mod cell;
mod color;
mod coordinate;
mod direction;
mod r#move;
mod piece;
mod role;

pub use board::*;
pub use captures::*;
pub use cell::*;
pub use color::*;
pub use coordinate::*;
pub use direction::*;
pub use piece::*;
pub use r#move::*;
pub use role::*;
