mod sweep;
mod tally;

pub use sweep::*;
pub use tally::*;
