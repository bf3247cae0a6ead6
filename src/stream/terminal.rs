//! Async terminal operations.
//!
//! Each one awaits the source element by element; the returned future
//! resolves once the drain is over.

use std::{fmt::Display, future::Future};

use futures::{Stream, StreamExt, pin_mut};

use crate::{IterError, Step};

/// Async counterpart of [`crate::drive`].
pub async fn drive<S, A, R, F>(source: S, init: A, mut f: F) -> Step<A, R>
where
    S: Stream,
    F: FnMut(A, S::Item) -> Step<A, R>,
{
    pin_mut!(source);
    let mut acc = init;
    while let Some(item) = source.next().await {
        match f(acc, item) {
            Step::Yielded(next) => acc = next,
            Step::Complete(done) => return Step::Complete(done),
        }
    }
    Step::Yielded(acc)
}

pub async fn fold<S, A, F>(source: S, mut f: F, init: A) -> A
where
    S: Stream,
    F: FnMut(A, S::Item) -> A,
{
    drive(source, init, |acc, item| Step::<A, A>::Yielded(f(acc, item)))
        .await
        .into_inner()
}

pub async fn try_fold<S, A, E, F>(source: S, mut f: F, init: A) -> Result<A, E>
where
    S: Stream,
    F: FnMut(A, S::Item) -> Result<A, E>,
{
    drive(source, init, |acc, item| match f(acc, item) {
        Ok(next) => Step::Yielded(next),
        Err(e) => Step::Complete(Err(e)),
    })
    .await
    .into_result()
}

/// # Errors
///
/// [`IterError::EmptySequence`] if `source` ends before yielding anything.
pub async fn reduce<S, F>(source: S, f: F) -> Result<S::Item, IterError>
where
    S: Stream,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    pin_mut!(source);
    let first = source.next().await.ok_or(IterError::EmptySequence)?;
    Ok(fold(source, f, first).await)
}

/// # Errors
///
/// [`IterError::EmptySequence`] if `source` ends before yielding anything.
pub async fn join<S>(source: S, sep: &str) -> Result<String, IterError>
where
    S: Stream,
    S::Item: Display,
{
    reduce(source.map(|item| item.to_string()), |mut acc, next| {
        acc.push_str(sep);
        acc.push_str(&next);
        acc
    })
    .await
}

pub async fn some<S, P>(source: S, mut predicate: P) -> bool
where
    S: Stream,
    P: FnMut(&S::Item) -> bool,
{
    drive(source, false, |_, item| {
        if predicate(&item) {
            Step::Complete(true)
        } else {
            Step::Yielded(false)
        }
    })
    .await
    .into_inner()
}

pub async fn every<S, P>(source: S, mut predicate: P) -> bool
where
    S: Stream,
    P: FnMut(&S::Item) -> bool,
{
    drive(source, true, |_, item| {
        if predicate(&item) {
            Step::Yielded(true)
        } else {
            Step::Complete(false)
        }
    })
    .await
    .into_inner()
}

pub async fn collect<S>(source: S) -> Vec<S::Item>
where
    S: Stream,
{
    fold(
        source,
        |mut items, item| {
            items.push(item);
            items
        },
        Vec::new(),
    )
    .await
}

pub async fn count<S>(source: S) -> usize
where
    S: Stream,
{
    fold(source, |n, _| n + 1, 0).await
}

/// Drain `source`, awaiting `f` on every element before pulling the next.
pub async fn for_each<S, F, Fut>(source: S, mut f: F)
where
    S: Stream,
    F: FnMut(S::Item) -> Fut,
    Fut: Future<Output = ()>,
{
    pin_mut!(source);
    while let Some(item) = source.next().await {
        f(item).await;
    }
}
