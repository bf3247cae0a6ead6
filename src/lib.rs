//! # func-iter: chainable lazy iteration
//!
//! Wrap an iterator (or, with the `async` feature, a [`futures::Stream`]) and
//! chain combinators over it. Nothing is computed until a terminal operation
//! pulls values through the chain.
//!
//! ## Core Types
//!
//! - **[`FunctionalIterable`]**: owns one iterator; lazy methods return a new wrapper
//! - **[`RangeIterable`]**: a wrapper over an arithmetic sequence with O(1) `includes`
//! - **`stream::AsyncFunctionalIterable`**: the same chain over a stream, with `async` terminals
//!
//! ## Example
//!
//! ```
//! use func_iter::*;
//!
//! let table = range_from(1)
//!     .zip(range_inc(1, 5).map(|x: i64| x * x))
//!     .map(|(i, x)| format!("{i} ^ 2 = {x}"))
//!     .collect();
//!
//! assert_eq!(table[4], "5 ^ 2 = 25");
//! ```
//!
//! ## Common Functions
//!
//! **Lazy:** [`map`], [`zip`], [`filter`], [`take`], [`take_while`]
//!
//! **Terminal:** [`fold`], [`try_fold`], [`reduce`], [`join`], [`some`], [`every`],
//! [`collect`], [`count`], all built on [`drive`]
//!
//! **Constructors:** [`iter`], [`range`], [`range_inc`], [`range_from`], [`try_range`],
//! [`number_generator`]
//!
//! Sequences are single-pass. Every wrapper method takes `self` by value, so a
//! wrapper cannot be drained twice; a [`RangeIterable`] can be cloned to walk
//! the same range again.

mod combinators;
mod error;
mod iter;
pub mod prelude;
mod range;
mod step;
#[cfg(feature = "async")]
pub mod stream;

pub use combinators::*;
pub use error::*;
pub use iter::*;
pub use range::*;
pub use step::*;
