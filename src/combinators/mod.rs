mod filter;
mod map;
mod take;
mod terminal;
mod zip;

pub use filter::*;
pub use map::*;
pub use take::*;
pub use terminal::*;
pub use zip::*;
