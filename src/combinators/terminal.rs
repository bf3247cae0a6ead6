//! Terminal operations: drain a sequence into a single value.
//!
//! All of them are built on [`drive`], which pulls elements one at a time and
//! feeds them to a step function until the source is exhausted or the step
//! function asks to stop.

use std::fmt::Display;

use crate::{IterError, Step, map};

/// Drain `source`, threading an accumulator through `f`.
///
/// `f` returns [`Step::Yielded`] with the next accumulator to keep going, or
/// [`Step::Complete`] to stop early. The result is `Yielded(acc)` if the
/// source ran dry and `Complete(r)` if `f` stopped the drain.
///
/// ```rust
/// use func_iter::{drive, Step};
///
/// let first_big = drive(1..100, (), |(), x| {
///     if x * x > 50 { Step::Complete(x) } else { Step::Yielded(()) }
/// });
/// assert_eq!(first_big, Step::Complete(8));
/// ```
pub fn drive<I, A, R, F>(source: I, init: A, mut f: F) -> Step<A, R>
where
    I: IntoIterator,
    F: FnMut(A, I::Item) -> Step<A, R>,
{
    let mut acc = init;
    for item in source {
        match f(acc, item) {
            Step::Yielded(next) => acc = next,
            Step::Complete(done) => return Step::Complete(done),
        }
    }
    Step::Yielded(acc)
}

/// Left fold. Returns `init` unchanged for an empty source.
///
/// ```rust
/// use func_iter::fold;
///
/// assert_eq!(fold(1..=4, |acc, x| acc + x, 0), 10);
/// assert_eq!(fold(std::iter::empty::<i32>(), |acc, _| acc + 1, 0), 0);
/// ```
pub fn fold<I, A, F>(source: I, mut f: F, init: A) -> A
where
    I: IntoIterator,
    F: FnMut(A, I::Item) -> A,
{
    drive(source, init, |acc, item| Step::<A, A>::Yielded(f(acc, item))).into_inner()
}

/// Left fold with a fallible accumulator.
///
/// The first error returned by `f` stops the drain and is returned as is.
pub fn try_fold<I, A, E, F>(source: I, mut f: F, init: A) -> Result<A, E>
where
    I: IntoIterator,
    F: FnMut(A, I::Item) -> Result<A, E>,
{
    drive(source, init, |acc, item| match f(acc, item) {
        Ok(next) => Step::Yielded(next),
        Err(e) => Step::Complete(Err(e)),
    })
    .into_result()
}

/// Fold seeded with the first element.
///
/// # Errors
///
/// Returns [`IterError::EmptySequence`] if `source` yields nothing.
///
/// ```rust
/// use func_iter::{reduce, IterError};
///
/// assert_eq!(reduce(vec![3, 1, 4], |a, b| a.max(b)), Ok(4));
/// assert_eq!(reduce(Vec::<i32>::new(), |a, b| a + b), Err(IterError::EmptySequence));
/// ```
pub fn reduce<I, F>(source: I, f: F) -> Result<I::Item, IterError>
where
    I: IntoIterator,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    let mut iter = source.into_iter();
    let first = iter.next().ok_or(IterError::EmptySequence)?;
    Ok(fold(iter, f, first))
}

/// Stringify every element and concatenate them with `sep` in between.
///
/// # Errors
///
/// Like [`reduce`], fails with [`IterError::EmptySequence`] on an empty source.
///
/// ```rust
/// use func_iter::join;
///
/// assert_eq!(join(1..=3, ", ").as_deref(), Ok("1, 2, 3"));
/// ```
pub fn join<I>(source: I, sep: &str) -> Result<String, IterError>
where
    I: IntoIterator,
    I::Item: Display,
{
    reduce(map(source, |item| item.to_string()), |mut acc, next| {
        acc.push_str(sep);
        acc.push_str(&next);
        acc
    })
}

/// `true` as soon as one element satisfies `predicate`.
pub fn some<I, P>(source: I, mut predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    drive(source, false, |_, item| {
        if predicate(&item) {
            Step::Complete(true)
        } else {
            Step::Yielded(false)
        }
    })
    .into_inner()
}

/// `false` as soon as one element fails `predicate`; vacuously `true` when empty.
pub fn every<I, P>(source: I, mut predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    drive(source, true, |_, item| {
        if predicate(&item) {
            Step::Yielded(true)
        } else {
            Step::Complete(false)
        }
    })
    .into_inner()
}

/// Drain into a `Vec`, keeping iteration order.
pub fn collect<I>(source: I) -> Vec<I::Item>
where
    I: IntoIterator,
{
    fold(
        source,
        |mut items, item| {
            items.push(item);
            items
        },
        Vec::new(),
    )
}

/// Number of elements the source produces.
pub fn count<I>(source: I) -> usize
where
    I: IntoIterator,
{
    fold(source, |n, _| n + 1, 0)
}
