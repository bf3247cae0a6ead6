/// Applies a function to every element pulled from the source.
///
/// The function runs lazily, once per pulled element, in source order.
#[derive(Clone)]
pub struct Map<I, F> {
    source: I,
    f: F,
}

/// Create a sequence yielding `f(x)` for each `x` of `source`.
///
/// ```rust
/// use func_iter::map;
///
/// let doubled: Vec<_> = map(vec![1, 2, 3], |x| x * 2).collect();
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub fn map<I, U, F>(source: I, f: F) -> Map<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    Map {
        source: source.into_iter(),
        f,
    }
}

impl<I, U, F> Iterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        self.source.next().map(&mut self.f)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_map_is_lazy() {
        let calls = Cell::new(0);
        let mut mapped = map(1..=3, |x| {
            calls.set(calls.get() + 1);
            x * 10
        });

        assert_eq!(calls.get(), 0);
        assert_eq!(mapped.next(), Some(10));
        assert_eq!(calls.get(), 1);
        assert_eq!(mapped.collect::<Vec<_>>(), vec![20, 30]);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_map_preserves_length() {
        let source = vec!["a", "bb", "ccc"];
        let lengths: Vec<_> = map(source.iter(), |s| s.len()).collect();
        assert_eq!(lengths, vec![1, 2, 3]);
    }
}
