mod illegal;
mod inspector;
mod outcome;
mod referee;
mod setup;

pub use illegal::*;
pub use inspector::*;
pub use outcome::*;
pub use referee::*;
pub use setup::*;
