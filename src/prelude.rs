//! Commonly used imports
//!
//! Use `use func_iter::prelude::*;` for quick access to the constructors and wrapper types.

// Wrappers
pub use crate::{FunctionalIterable, RangeIterable};

// Constructors
pub use crate::{iter, range, range_from, range_inc, try_range};

// Errors
pub use crate::IterError;

// Async track
#[cfg(feature = "async")]
pub use crate::stream::{AsyncFunctionalIterable, iter_async, to_async};
