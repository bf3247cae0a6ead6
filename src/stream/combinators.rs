//! Lazy stream adapters.
//!
//! Sources are boxed and pinned on construction, which keeps every adapter
//! `Unpin` whatever the source is. Each `poll_next` forwards to at most one
//! source at a time; nothing is polled concurrently.

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use futures::{Stream, ready};

/// Awaits an async transform for every element of the source.
pub struct Map<S, F, Fut> {
    source: Pin<Box<S>>,
    transform: F,
    pending: Option<Pin<Box<Fut>>>,
}

// Neither the transform nor its futures are ever pinned in place.
impl<S, F, Fut> Unpin for Map<S, F, Fut> {}

/// Create a stream yielding the awaited `transform(x)` for each `x` of `source`.
///
/// The transform of one element completes before the next element is pulled.
pub fn map<S, F, Fut>(source: S, transform: F) -> Map<S, F, Fut>
where
    S: Stream,
    F: FnMut(S::Item) -> Fut,
    Fut: Future,
{
    Map {
        source: Box::pin(source),
        transform,
        pending: None,
    }
}

impl<S, F, Fut> Stream for Map<S, F, Fut>
where
    S: Stream,
    F: FnMut(S::Item) -> Fut,
    Fut: Future,
{
    type Item = Fut::Output;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        loop {
            if let Some(pending) = this.pending.as_mut() {
                let output = ready!(pending.as_mut().poll(cx));
                this.pending = None;
                return Poll::Ready(Some(output));
            }
            match ready!(this.source.as_mut().poll_next(cx)) {
                Some(item) => this.pending = Some(Box::pin((this.transform)(item))),
                None => return Poll::Ready(None),
            }
        }
    }
}

/// Pairs up elements of two streams.
///
/// For every pair the first stream is awaited to completion before the second
/// one is polled.
pub struct Zip<A, B>
where
    A: Stream,
{
    first: Pin<Box<A>>,
    second: Pin<Box<B>>,
    held: Option<A::Item>,
}

impl<A: Stream, B> Unpin for Zip<A, B> {}

/// Create a stream of pairs that ends as soon as either source ends.
pub fn zip<A, B>(first: A, second: B) -> Zip<A, B>
where
    A: Stream,
    B: Stream,
{
    Zip {
        first: Box::pin(first),
        second: Box::pin(second),
        held: None,
    }
}

impl<A, B> Stream for Zip<A, B>
where
    A: Stream,
    B: Stream,
{
    type Item = (A::Item, B::Item);

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.held.is_none() {
            match ready!(this.first.as_mut().poll_next(cx)) {
                Some(a) => this.held = Some(a),
                None => return Poll::Ready(None),
            }
        }
        let b = ready!(this.second.as_mut().poll_next(cx));
        match (this.held.take(), b) {
            (Some(a), Some(b)) => Poll::Ready(Some((a, b))),
            _ => Poll::Ready(None),
        }
    }
}

/// Keeps only the elements that satisfy a predicate.
pub struct Filter<S, P> {
    source: Pin<Box<S>>,
    predicate: P,
}

impl<S, P> Unpin for Filter<S, P> {}

pub fn filter<S, P>(source: S, predicate: P) -> Filter<S, P>
where
    S: Stream,
    P: FnMut(&S::Item) -> bool,
{
    Filter {
        source: Box::pin(source),
        predicate,
    }
}

impl<S, P> Stream for Filter<S, P>
where
    S: Stream,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<S::Item>> {
        let this = self.get_mut();
        loop {
            match ready!(this.source.as_mut().poll_next(cx)) {
                Some(item) if (this.predicate)(&item) => return Poll::Ready(Some(item)),
                Some(_) => {}
                None => return Poll::Ready(None),
            }
        }
    }
}

/// Yields at most `n` elements; the source is not polled past the `n`-th.
pub struct Take<S> {
    source: Pin<Box<S>>,
    remaining: usize,
}

impl<S> Unpin for Take<S> {}

pub fn take<S>(source: S, n: usize) -> Take<S>
where
    S: Stream,
{
    Take {
        source: Box::pin(source),
        remaining: n,
    }
}

impl<S> Stream for Take<S>
where
    S: Stream,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<S::Item>> {
        let this = self.get_mut();
        if this.remaining == 0 {
            return Poll::Ready(None);
        }
        let item = ready!(this.source.as_mut().poll_next(cx));
        this.remaining -= 1;
        Poll::Ready(item)
    }
}

/// Yields elements while a predicate holds, then stops for good.
pub struct TakeWhile<S, P> {
    source: Pin<Box<S>>,
    predicate: P,
    done: bool,
}

impl<S, P> Unpin for TakeWhile<S, P> {}

pub fn take_while<S, P>(source: S, predicate: P) -> TakeWhile<S, P>
where
    S: Stream,
    P: FnMut(&S::Item) -> bool,
{
    TakeWhile {
        source: Box::pin(source),
        predicate,
        done: false,
    }
}

impl<S, P> Stream for TakeWhile<S, P>
where
    S: Stream,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<S::Item>> {
        let this = self.get_mut();
        if this.done {
            return Poll::Ready(None);
        }
        match ready!(this.source.as_mut().poll_next(cx)) {
            Some(item) if (this.predicate)(&item) => Poll::Ready(Some(item)),
            _ => {
                this.done = true;
                Poll::Ready(None)
            }
        }
    }
}

/// Re-emit a synchronous sequence as a stream; every element is immediately ready.
pub fn to_async<I>(source: I) -> futures::stream::Iter<I::IntoIter>
where
    I: IntoIterator,
{
    futures::stream::iter(source)
}
