use std::{
    fmt::Display,
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use futures::Stream;

use super::{Filter, Map, Take, TakeWhile, Zip};
use crate::IterError;

/// Chainable wrapper around a single stream.
///
/// The async mirror of [`FunctionalIterable`](crate::FunctionalIterable):
/// lazy methods return a new wrapper, terminal methods are `async` and resolve
/// once the stream has been drained.
///
/// ```rust
/// use func_iter::stream::iter_async;
/// use futures::{executor::block_on, stream};
///
/// let total = block_on(
///     iter_async(stream::iter(1..=4))
///         .map(|x| async move { x * x })
///         .fold(|acc, x| acc + x, 0),
/// );
/// assert_eq!(total, 30);
/// ```
#[derive(Debug, Clone)]
pub struct AsyncFunctionalIterable<S> {
    stream: S,
}

/// Wrap a stream in an [`AsyncFunctionalIterable`].
pub fn iter_async<S>(stream: S) -> AsyncFunctionalIterable<S>
where
    S: Stream,
{
    AsyncFunctionalIterable::new(stream)
}

impl<S> AsyncFunctionalIterable<S>
where
    S: Stream,
{
    pub fn new(stream: S) -> Self {
        Self { stream }
    }

    /// Give back the wrapped stream.
    pub fn into_inner(self) -> S {
        self.stream
    }

    /// Apply `f` to the wrapped stream and return whatever it returns.
    pub fn to<R, F>(self, f: F) -> R
    where
        F: FnOnce(S) -> R,
    {
        f(self.stream)
    }

    /// Apply a stream-to-stream transform and keep chaining on the result.
    pub fn pipe<S2, F>(self, f: F) -> AsyncFunctionalIterable<S2>
    where
        S2: Stream,
        F: FnOnce(S) -> S2,
    {
        AsyncFunctionalIterable::new(f(self.stream))
    }

    /// Await `transform` on every element.
    pub fn map<F, Fut>(self, transform: F) -> AsyncFunctionalIterable<Map<S, F, Fut>>
    where
        F: FnMut(S::Item) -> Fut,
        Fut: Future,
    {
        AsyncFunctionalIterable::new(super::map(self.stream, transform))
    }

    /// Pair elements with those of `other`, awaiting this stream first for each pair.
    pub fn zip<S2>(self, other: S2) -> AsyncFunctionalIterable<Zip<S, S2>>
    where
        S2: Stream,
    {
        AsyncFunctionalIterable::new(super::zip(self.stream, other))
    }

    pub fn filter<P>(self, predicate: P) -> AsyncFunctionalIterable<Filter<S, P>>
    where
        P: FnMut(&S::Item) -> bool,
    {
        AsyncFunctionalIterable::new(super::filter(self.stream, predicate))
    }

    pub fn take(self, n: usize) -> AsyncFunctionalIterable<Take<S>> {
        AsyncFunctionalIterable::new(super::take(self.stream, n))
    }

    pub fn take_while<P>(self, predicate: P) -> AsyncFunctionalIterable<TakeWhile<S, P>>
    where
        P: FnMut(&S::Item) -> bool,
    {
        AsyncFunctionalIterable::new(super::take_while(self.stream, predicate))
    }

    pub async fn fold<A, F>(self, f: F, init: A) -> A
    where
        F: FnMut(A, S::Item) -> A,
    {
        super::fold(self.stream, f, init).await
    }

    pub async fn try_fold<A, E, F>(self, f: F, init: A) -> Result<A, E>
    where
        F: FnMut(A, S::Item) -> Result<A, E>,
    {
        super::try_fold(self.stream, f, init).await
    }

    /// # Errors
    ///
    /// [`IterError::EmptySequence`] if there is nothing to reduce.
    pub async fn reduce<F>(self, f: F) -> Result<S::Item, IterError>
    where
        F: FnMut(S::Item, S::Item) -> S::Item,
    {
        super::reduce(self.stream, f).await
    }

    /// # Errors
    ///
    /// [`IterError::EmptySequence`] if there is nothing to join.
    pub async fn join(self, sep: &str) -> Result<String, IterError>
    where
        S::Item: Display,
    {
        super::join(self.stream, sep).await
    }

    pub async fn some<P>(self, predicate: P) -> bool
    where
        P: FnMut(&S::Item) -> bool,
    {
        super::some(self.stream, predicate).await
    }

    pub async fn every<P>(self, predicate: P) -> bool
    where
        P: FnMut(&S::Item) -> bool,
    {
        super::every(self.stream, predicate).await
    }

    pub async fn collect(self) -> Vec<S::Item> {
        super::collect(self.stream).await
    }

    pub async fn count(self) -> usize {
        super::count(self.stream).await
    }

    pub async fn for_each<F, Fut>(self, f: F)
    where
        F: FnMut(S::Item) -> Fut,
        Fut: Future<Output = ()>,
    {
        super::for_each(self.stream, f).await
    }
}

/// Only `Unpin` streams can be polled through the wrapper directly; every
/// adapter in this crate is `Unpin`, anything else can be `Box::pin`ned first.
impl<S> Stream for AsyncFunctionalIterable<S>
where
    S: Stream + Unpin,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<S::Item>> {
        Pin::new(&mut self.get_mut().stream).poll_next(cx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.stream.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{iter, range_inc};
    use futures::{StreamExt, executor::block_on, stream};
    use std::{cell::RefCell, rc::Rc};

    const ONE_TO_SIX: [i32; 6] = [1, 2, 3, 4, 5, 6];

    #[test]
    fn test_round_trip_preserves_order() {
        let res = block_on(
            iter(ONE_TO_SIX)
                .into_async()
                .map(|x| async move { x })
                .collect(),
        );
        assert_eq!(res, ONE_TO_SIX.to_vec());
    }

    #[test]
    fn test_to_async_then_map() {
        let data = range_inc(1, 10).into_async().map(|x| async move { x + 100 });
        let mut seen = Vec::new();
        block_on(data.for_each(|val| {
            seen.push(val);
            async {}
        }));
        assert_eq!(seen, (101..=110).collect::<Vec<_>>());
    }

    #[test]
    fn test_chain_of_lazy_ops() {
        let res = block_on(
            iter_async(stream::iter(1..))
                .filter(|x| x % 3 == 0)
                .take_while(|x| *x < 20)
                .zip(stream::iter("abcdefgh".chars()))
                .take(4)
                .collect(),
        );
        assert_eq!(res, vec![(3, 'a'), (6, 'b'), (9, 'c'), (12, 'd')]);
    }

    #[test]
    fn test_terminal_ops() {
        let is_even = |x: &i32| x % 2 == 0;
        assert!(block_on(iter(ONE_TO_SIX).into_async().some(is_even)));
        assert!(!block_on(iter(ONE_TO_SIX).into_async().every(is_even)));
        assert_eq!(block_on(iter(ONE_TO_SIX).into_async().count()), 6);
        assert_eq!(
            block_on(iter(ONE_TO_SIX).into_async().reduce(|a, b| a.max(b))),
            Ok(6)
        );
        assert_eq!(
            block_on(iter(ONE_TO_SIX).into_async().join("+")),
            Ok("1+2+3+4+5+6".to_string())
        );
    }

    #[test]
    fn test_wrapper_is_a_stream() {
        let mut wrapped = iter_async(stream::iter(vec![1, 2])).map(|x| async move { x * 3 });
        assert_eq!(block_on(wrapped.next()), Some(3));
        assert_eq!(block_on(wrapped.next()), Some(6));
        assert_eq!(block_on(wrapped.next()), None);
    }

    #[test]
    fn test_pipe_and_to() {
        let doubled = iter_async(stream::iter(1..=3))
            .pipe(|s| s.flat_map(|x| stream::iter([x, x])));
        assert_eq!(block_on(doubled.collect()), vec![1, 1, 2, 2, 3, 3]);

        let first = block_on(iter_async(stream::iter(5..)).to(|mut s| async move { s.next().await }));
        assert_eq!(first, Some(5));
    }

    #[tokio::test]
    async fn test_zip_awaits_first_then_second() {
        let log = Rc::new(RefCell::new(Vec::new()));

        let left = iter_async(stream::iter(1..=2)).map({
            let log = Rc::clone(&log);
            move |x| {
                let log = Rc::clone(&log);
                async move {
                    tokio::task::yield_now().await;
                    log.borrow_mut().push(format!("a{x}"));
                    x
                }
            }
        });
        let right = iter_async(stream::iter(1..=3)).map({
            let log = Rc::clone(&log);
            move |x| {
                let log = Rc::clone(&log);
                async move {
                    log.borrow_mut().push(format!("b{x}"));
                    x
                }
            }
        });

        let pairs = left.zip(right).collect().await;

        assert_eq!(pairs, vec![(1, 1), (2, 2)]);
        assert_eq!(*log.borrow(), vec!["a1", "b1", "a2", "b2"]);
    }

    #[tokio::test]
    async fn test_map_transform_may_suspend() {
        let res = iter(ONE_TO_SIX)
            .into_async()
            .map(|x| async move {
                tokio::task::yield_now().await;
                x * x
            })
            .filter(|x| x % 2 == 0)
            .collect()
            .await;
        assert_eq!(res, vec![4, 16, 36]);
    }
}
