/// Pairs up elements of two sources, one from each per step.
///
/// The first source is always pulled before the second. When the first source
/// is exhausted the second one is left untouched.
#[derive(Clone)]
pub struct Zip<A, B> {
    first: A,
    second: B,
}

/// Create a sequence of pairs that ends as soon as either source ends.
///
/// ```rust
/// use func_iter::zip;
///
/// let pairs: Vec<_> = zip(vec![1, 2, 3], vec!['a', 'b']).collect();
/// assert_eq!(pairs, vec![(1, 'a'), (2, 'b')]);
/// ```
pub fn zip<A, B>(first: A, second: B) -> Zip<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator,
{
    Zip {
        first: first.into_iter(),
        second: second.into_iter(),
    }
}

impl<A, B> Iterator for Zip<A, B>
where
    A: Iterator,
    B: Iterator,
{
    type Item = (A::Item, B::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let a = self.first.next()?;
        let b = self.second.next()?;
        Some((a, b))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (a_low, a_high) = self.first.size_hint();
        let (b_low, b_high) = self.second.size_hint();
        let high = match (a_high, b_high) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        (a_low.min(b_low), high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_equal_lengths() {
        let one_to_six = [1, 2, 3, 4, 5, 6];
        let pairs: Vec<_> = zip(one_to_six, one_to_six).collect();
        assert_eq!(
            pairs,
            vec![(1, 1), (2, 2), (3, 3), (4, 4), (5, 5), (6, 6)]
        );
    }

    #[test]
    fn test_zip_shorter_second_wins() {
        let pairs: Vec<_> = zip(0.., ["x", "y"]).collect();
        assert_eq!(pairs, vec![(0, "x"), (1, "y")]);
    }

    #[test]
    fn test_zip_does_not_pull_second_after_first_ends() {
        let mut second = 10..20;
        let pairs: Vec<_> = zip(0..2, second.by_ref()).collect();
        assert_eq!(pairs, vec![(0, 10), (1, 11)]);
        assert_eq!(second.next(), Some(12));
    }

    #[test]
    fn test_zip_size_hint_is_minimum() {
        let zipped = zip(0..5, 0..3);
        assert_eq!(zipped.size_hint(), (3, Some(3)));
    }
}
