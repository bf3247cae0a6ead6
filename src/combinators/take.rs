/// Yields at most a fixed number of elements.
///
/// Once the limit is reached the source is never pulled again, so an infinite
/// source is safe to cut short.
#[derive(Clone)]
pub struct Take<I> {
    source: I,
    remaining: usize,
}

/// Create a sequence of the first `n` elements of `source`.
///
/// ```rust
/// use func_iter::take;
///
/// assert_eq!(take(1.., 3).collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(take(1.., 0).next(), None);
/// ```
pub fn take<I>(source: I, n: usize) -> Take<I::IntoIter>
where
    I: IntoIterator,
{
    Take {
        source: source.into_iter(),
        remaining: n,
    }
}

impl<I> Iterator for Take<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.source.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (low, high) = self.source.size_hint();
        let high = match high {
            Some(h) => h.min(self.remaining),
            None => self.remaining,
        };
        (low.min(self.remaining), Some(high))
    }
}

/// Yields elements while a predicate holds, then stops for good.
///
/// Unlike [`Filter`](crate::Filter), the first rejected element ends the
/// sequence: it is dropped along with everything after it.
#[derive(Clone)]
pub struct TakeWhile<I, P> {
    source: I,
    predicate: P,
    done: bool,
}

/// Create a sequence of the leading elements of `source` satisfying `predicate`.
///
/// ```rust
/// use func_iter::take_while;
///
/// let small: Vec<_> = take_while(vec![1, 2, 9, 3], |x| *x < 5).collect();
/// assert_eq!(small, vec![1, 2]);
/// ```
pub fn take_while<I, P>(source: I, predicate: P) -> TakeWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    TakeWhile {
        source: source.into_iter(),
        predicate,
        done: false,
    }
}

impl<I, P> Iterator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.done {
            return None;
        }
        let item = self.source.next()?;
        if (self.predicate)(&item) {
            Some(item)
        } else {
            self.done = true;
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.source.size_hint().1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_zero_never_pulls() {
        let mut source = 0..10;
        assert_eq!(take(source.by_ref(), 0).next(), None);
        assert_eq!(source.next(), Some(0));
    }

    #[test]
    fn test_take_does_not_over_read() {
        let mut source = 0..10;
        let taken: Vec<_> = take(source.by_ref(), 3).collect();
        assert_eq!(taken, vec![0, 1, 2]);
        assert_eq!(source.next(), Some(3));
    }

    #[test]
    fn test_take_more_than_available() {
        assert_eq!(take(vec![1, 2], 5).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_take_while_terminates_on_infinite_source() {
        let res: Vec<_> = take_while(1.., |n| *n <= 6).collect();
        assert_eq!(res, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_take_while_stops_permanently() {
        let mut it = take_while(vec![2, 4, 5, 6, 8], |x| x % 2 == 0);
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next(), Some(4));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }
}
