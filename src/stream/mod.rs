//! The asynchronous track: the same combinators over [`futures::Stream`].
//!
//! Pulling an element is a suspension point. Adapters never poll two sources
//! at once, and [`zip`] always finishes with its first source before it polls
//! the second.
//!
//! ```rust
//! use func_iter::{range_inc, stream};
//! use futures::executor::block_on;
//!
//! let squares = range_inc(1, 4).into_async().map(|x| async move { x * x });
//! assert_eq!(block_on(stream::join(squares, " ")).as_deref(), Ok("1 4 9 16"));
//! ```

mod combinators;
mod terminal;
mod wrapper;

pub use combinators::*;
pub use terminal::*;
pub use wrapper::*;
