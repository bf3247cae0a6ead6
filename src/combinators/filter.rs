/// Keeps only the elements that satisfy a predicate.
#[derive(Clone)]
pub struct Filter<I, P> {
    source: I,
    predicate: P,
}

/// Create a sequence of the elements of `source` for which `predicate` holds.
///
/// A single pull may skip any number of rejected elements, up to the whole
/// rest of the source.
///
/// ```rust
/// use func_iter::filter;
///
/// let evens: Vec<_> = filter(1..=6, |x| x % 2 == 0).collect();
/// assert_eq!(evens, vec![2, 4, 6]);
/// ```
pub fn filter<I, P>(source: I, predicate: P) -> Filter<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    Filter {
        source: source.into_iter(),
        predicate,
    }
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let item = self.source.next()?;
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}
