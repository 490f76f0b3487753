mod illegal;
mod playback;
mod ply;

pub use illegal::*;
pub use playback::*;
pub use ply::*;
