//! The synchronous chain builder.
//!
//! [`FunctionalIterable`] owns one iterator and re-exposes the crate's
//! combinators as methods. Lazy methods hand back a new wrapper around the
//! composed iterator; terminal methods drain it and return the result.
//!
//! # Examples
//!
//! ```rust
//! use func_iter::iter;
//!
//! let res = iter(vec![1, 2, 3, 4, 5, 6])
//!     .filter(|x| x % 2 == 0)
//!     .map(|x| x * 10)
//!     .collect();
//! assert_eq!(res, vec![20, 40, 60]);
//! ```
//!
//! Because the wrapper is itself an [`Iterator`], it works anywhere an
//! iterator does:
//!
//! ```rust
//! use func_iter::range;
//!
//! let mut seen = Vec::new();
//! for i in range(0, 3) {
//!     seen.push(i);
//! }
//! assert_eq!(seen, vec![0, 1, 2]);
//! ```

use std::fmt::Display;

use crate::{
    Filter, IterError, Map, Take, TakeWhile, Zip, collect, count, every, filter, fold, join, map,
    reduce, some, take, take_while, try_fold, zip,
};

/// Chainable wrapper around a single iterator.
///
/// Every method takes `self` by value: a wrapper is used once, either to build
/// the next wrapper in a chain or to produce a final value.
#[derive(Debug, Clone)]
pub struct FunctionalIterable<I> {
    pub(crate) iter: I,
}

/// Wrap anything iterable in a [`FunctionalIterable`].
pub fn iter<I>(source: I) -> FunctionalIterable<I::IntoIter>
where
    I: IntoIterator,
{
    FunctionalIterable::new(source.into_iter())
}

impl<I> FunctionalIterable<I>
where
    I: Iterator,
{
    pub fn new(iter: I) -> Self {
        Self { iter }
    }

    /// Give back the wrapped iterator.
    pub fn into_inner(self) -> I {
        self.iter
    }

    /// Apply `f` to the wrapped iterator and return whatever it returns.
    ///
    /// ```rust
    /// use func_iter::iter;
    ///
    /// let max = iter(vec![3, 9, 2]).to(|it| it.max());
    /// assert_eq!(max, Some(9));
    /// ```
    pub fn to<R, F>(self, f: F) -> R
    where
        F: FnOnce(I) -> R,
    {
        f(self.iter)
    }

    /// Apply an iterator-to-iterator transform and keep chaining on the result.
    ///
    /// ```rust
    /// use func_iter::iter;
    ///
    /// let doubled = iter(1..=3)
    ///     .pipe(|it| it.flat_map(|x| [x, x]))
    ///     .collect();
    /// assert_eq!(doubled, vec![1, 1, 2, 2, 3, 3]);
    /// ```
    pub fn pipe<J, F>(self, f: F) -> FunctionalIterable<J::IntoIter>
    where
        J: IntoIterator,
        F: FnOnce(I) -> J,
    {
        FunctionalIterable::new(f(self.iter).into_iter())
    }

    pub fn map<U, F>(self, f: F) -> FunctionalIterable<Map<I, F>>
    where
        F: FnMut(I::Item) -> U,
    {
        FunctionalIterable::new(map(self.iter, f))
    }

    /// Pair elements with those of `other`, ending with the shorter of the two.
    pub fn zip<J>(self, other: J) -> FunctionalIterable<Zip<I, J::IntoIter>>
    where
        J: IntoIterator,
    {
        FunctionalIterable::new(zip(self.iter, other))
    }

    pub fn filter<P>(self, predicate: P) -> FunctionalIterable<Filter<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        FunctionalIterable::new(filter(self.iter, predicate))
    }

    pub fn take(self, n: usize) -> FunctionalIterable<Take<I>> {
        FunctionalIterable::new(take(self.iter, n))
    }

    pub fn take_while<P>(self, predicate: P) -> FunctionalIterable<TakeWhile<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        FunctionalIterable::new(take_while(self.iter, predicate))
    }

    pub fn fold<A, F>(self, f: F, init: A) -> A
    where
        F: FnMut(A, I::Item) -> A,
    {
        fold(self.iter, f, init)
    }

    pub fn try_fold<A, E, F>(self, f: F, init: A) -> Result<A, E>
    where
        F: FnMut(A, I::Item) -> Result<A, E>,
    {
        try_fold(self.iter, f, init)
    }

    /// # Errors
    ///
    /// [`IterError::EmptySequence`] if there is nothing to reduce.
    pub fn reduce<F>(self, f: F) -> Result<I::Item, IterError>
    where
        F: FnMut(I::Item, I::Item) -> I::Item,
    {
        reduce(self.iter, f)
    }

    /// # Errors
    ///
    /// [`IterError::EmptySequence`] if there is nothing to join.
    pub fn join(self, sep: &str) -> Result<String, IterError>
    where
        I::Item: Display,
    {
        join(self.iter, sep)
    }

    pub fn some<P>(self, predicate: P) -> bool
    where
        P: FnMut(&I::Item) -> bool,
    {
        some(self.iter, predicate)
    }

    pub fn every<P>(self, predicate: P) -> bool
    where
        P: FnMut(&I::Item) -> bool,
    {
        every(self.iter, predicate)
    }

    pub fn collect(self) -> Vec<I::Item> {
        collect(self.iter)
    }

    pub fn count(self) -> usize {
        count(self.iter)
    }

    /// Re-emit the wrapped iterator as an async stream.
    ///
    /// ```rust
    /// use func_iter::iter;
    ///
    /// let res = futures::executor::block_on(
    ///     iter(1..=3).into_async().map(|x| async move { x + 100 }).collect(),
    /// );
    /// assert_eq!(res, vec![101, 102, 103]);
    /// ```
    #[cfg(feature = "async")]
    pub fn into_async(self) -> crate::stream::AsyncFunctionalIterable<futures::stream::Iter<I>> {
        crate::stream::AsyncFunctionalIterable::new(crate::stream::to_async(self.iter))
    }
}

impl<I> Iterator for FunctionalIterable<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{range, range_from, range_inc};

    const ONE_TO_SIX: [i32; 6] = [1, 2, 3, 4, 5, 6];

    fn is_even(x: &i32) -> bool {
        x % 2 == 0
    }

    #[test]
    fn test_collect() {
        assert_eq!(iter(ONE_TO_SIX).collect(), ONE_TO_SIX.to_vec());
    }

    #[test]
    fn test_map() {
        let res = iter(ONE_TO_SIX).map(|it| it * 2).collect();
        let expected: Vec<_> = ONE_TO_SIX.iter().map(|it| it * 2).collect();
        assert_eq!(res, expected);
    }

    #[test]
    fn test_zip() {
        let res = iter(ONE_TO_SIX).zip(ONE_TO_SIX).collect();
        assert_eq!(res, vec![(1, 1), (2, 2), (3, 3), (4, 4), (5, 5), (6, 6)]);
    }

    #[test]
    fn test_filter() {
        assert_eq!(iter(ONE_TO_SIX).filter(is_even).collect(), vec![2, 4, 6]);
    }

    #[test]
    fn test_some() {
        assert!(iter(ONE_TO_SIX).some(is_even));
    }

    #[test]
    fn test_every() {
        assert!(!iter(ONE_TO_SIX).every(is_even));
    }

    #[test]
    fn test_count() {
        assert_eq!(iter(ONE_TO_SIX).filter(is_even).count(), 3);
    }

    #[test]
    fn test_reduce_and_join() {
        assert_eq!(iter(ONE_TO_SIX).reduce(|a, b| a * b), Ok(720));
        assert_eq!(iter(ONE_TO_SIX).join(" "), Ok("1 2 3 4 5 6".to_string()));
        assert_eq!(
            iter(ONE_TO_SIX).filter(|x| *x > 6).reduce(|a, b| a + b),
            Err(IterError::EmptySequence)
        );
    }

    #[test]
    fn test_powers_of_two_table() {
        let res = range_from(1)
            .zip(range_inc(1, 5).map(|x: i64| x.pow(2)))
            .map(|(i, x)| format!("{i} ^ 2 = {x}"))
            .collect();

        assert_eq!(
            res,
            vec![
                "1 ^ 2 = 1",
                "2 ^ 2 = 4",
                "3 ^ 2 = 9",
                "4 ^ 2 = 16",
                "5 ^ 2 = 25",
            ]
        );
    }

    #[test]
    fn test_take_while_on_unbounded_range() {
        let res = range_from(1).take_while(|n| *n <= 6).collect();
        assert_eq!(res, ONE_TO_SIX.to_vec());
    }

    #[test]
    fn test_take_zero_on_unbounded_range() {
        assert!(range_from(0_u64).take(0).collect().is_empty());
    }

    #[test]
    fn test_multiplication_table() {
        let one_to_ten = range_inc(1, 10);

        let table = one_to_ten
            .clone()
            .map(|row| one_to_ten.clone().map(move |it| it * row));

        let lines: Vec<String> = table
            .map(|row| row.map(|it| format!("{it:>3}")).join(" "))
            .to(|rows| rows.collect::<Result<_, _>>())
            .expect("rows are never empty");

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  1   2   3   4   5   6   7   8   9  10");
        assert_eq!(lines[9], " 10  20  30  40  50  60  70  80  90 100");
    }

    #[test]
    fn test_pipe_duplicates() {
        let rng = range_inc(1, 10);
        let res1 = iter(rng.clone()).pipe(|items| items.flat_map(|v| [v, v])).collect();
        let res2: Vec<_> = rng.map(|val| [val, val]).collect().concat();
        assert_eq!(res1, res2);
    }

    #[test]
    fn test_to_hands_over_raw_iterator() {
        let total: i32 = range(0, 5).to(|it| it.sum());
        assert_eq!(total, 10);
    }

    #[test]
    fn test_wrapper_is_single_use_but_source_survives_by_ref() {
        let mut source = ONE_TO_SIX.into_iter();
        let head = iter(source.by_ref()).take(2).collect();
        assert_eq!(head, vec![1, 2]);
        assert_eq!(iter(source).collect(), vec![3, 4, 5, 6]);
    }
}
