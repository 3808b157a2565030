mod misc;
mod people;

pub use misc::*;
pub use people::*;
