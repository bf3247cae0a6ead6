//! Arithmetic ranges.
//!
//! [`range`] builds a [`RangeIterable`]: a [`FunctionalIterable`] over a
//! [`NumberGenerator`] that also remembers its bounds, so membership can be
//! answered with [`includes`](FunctionalIterable::includes) without iterating.
//!
//! ```rust
//! use func_iter::{range, range_inc};
//!
//! assert_eq!(range(0, 5).collect(), vec![0, 1, 2, 3, 4]);
//! assert_eq!(range_inc(0, 10).with_step(5).collect(), vec![0, 5, 10]);
//! assert!(range(0.0, 1.0).includes(0.5));
//! ```

use std::fmt::Debug;

use num_traits::{One, Zero};

use crate::{FunctionalIterable, IterError};

/// Element types a [`NumberGenerator`] can count with.
pub trait Numeric: Copy + PartialOrd + Zero + One + Debug {
    /// Upper bound used by [`range_from`].
    const UPPER: Self;

    /// `self + step`, or `None` when the sum is not representable.
    fn advance(self, step: Self) -> Option<Self>;
}

macro_rules! impl_numeric_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                const UPPER: Self = <$t>::MAX;

                #[inline]
                fn advance(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                const UPPER: Self = <$t>::INFINITY;

                #[inline]
                fn advance(self, step: Self) -> Option<Self> {
                    Some(self + step)
                }
            }
        )*
    };
}

impl_numeric_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric_float!(f32, f64);

/// Yields `start, start + step, start + 2 * step, ...` while the value is below `end`.
///
/// Ascending order is assumed. A non-positive `step` is not rejected: with
/// `start < end` the sequence then never reaches `end` (use [`try_range`] to
/// validate). Integer sequences end early instead of overflowing.
///
/// A generator built by [`range_inc`] or [`range_from`] whose bound could not
/// be moved past the type's maximum keeps `end` inclusive instead.
#[derive(Debug, Clone)]
pub struct NumberGenerator<T> {
    start: T,
    end: T,
    step: T,
    inclusive: bool,
    cursor: Option<T>,
}

/// Create the arithmetic sequence over the half-open interval `[start, end)`.
///
/// ```rust
/// use func_iter::number_generator;
///
/// let odds: Vec<_> = number_generator(1, 10, 2).collect();
/// assert_eq!(odds, vec![1, 3, 5, 7, 9]);
/// ```
pub fn number_generator<T: Numeric>(start: T, end: T, step: T) -> NumberGenerator<T> {
    NumberGenerator {
        start,
        end,
        step,
        inclusive: false,
        cursor: Some(start),
    }
}

impl<T: Numeric> NumberGenerator<T> {
    fn below_end(&self, x: T) -> bool {
        if self.inclusive {
            x <= self.end
        } else {
            x < self.end
        }
    }
}

impl<T: Numeric> Iterator for NumberGenerator<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.cursor?;
        if self.below_end(current) {
            self.cursor = current.advance(self.step);
            Some(current)
        } else {
            self.cursor = None;
            None
        }
    }
}

/// A [`FunctionalIterable`] over an arithmetic sequence.
pub type RangeIterable<T> = FunctionalIterable<NumberGenerator<T>>;

/// Range over `[start, end)` with step `1`.
pub fn range<T: Numeric>(start: T, end: T) -> RangeIterable<T> {
    FunctionalIterable::new(number_generator(start, end, T::one()))
}

/// Range over `[start, end]` with step `1`; the same as `range(start, end + 1)`.
///
/// For an integer `end` at its type's maximum the bound cannot move past it;
/// the range then keeps `end` itself as an inclusive bound, so the maximum is
/// still produced and [`includes`](FunctionalIterable::includes) accepts it.
///
/// ```rust
/// use func_iter::range_inc;
///
/// let top = range_inc(253_u8, u8::MAX);
/// assert!(top.includes(u8::MAX));
/// assert_eq!(top.collect(), vec![253, 254, 255]);
/// ```
pub fn range_inc<T: Numeric>(start: T, end: T) -> RangeIterable<T> {
    match end.advance(T::one()) {
        Some(bound) => range(start, bound),
        None => FunctionalIterable::new(NumberGenerator {
            inclusive: true,
            ..number_generator(start, end, T::one())
        }),
    }
}

/// Range from `start` upward without a practical end.
///
/// Floats run to infinity; integers run up to and including their type's
/// maximum.
pub fn range_from<T: Numeric>(start: T) -> RangeIterable<T> {
    range_inc(start, T::UPPER)
}

/// Range over `[start, end)` with an explicit step that must be positive.
///
/// # Errors
///
/// [`IterError::NonPositiveStep`] when `step` is zero, negative or NaN.
///
/// ```rust
/// use func_iter::{try_range, IterError};
///
/// assert_eq!(try_range(0, 10, 3).map(|r| r.collect()), Ok(vec![0, 3, 6, 9]));
/// assert!(matches!(try_range(0, 10, 0), Err(IterError::NonPositiveStep)));
/// ```
pub fn try_range<T: Numeric>(start: T, end: T, step: T) -> Result<RangeIterable<T>, IterError> {
    if step > T::zero() {
        Ok(FunctionalIterable::new(number_generator(start, end, step)))
    } else {
        Err(IterError::NonPositiveStep)
    }
}

impl<T: Numeric> FunctionalIterable<NumberGenerator<T>> {
    /// Same bounds, different step. Iteration restarts from `start`.
    pub fn with_step(self, step: T) -> Self {
        let NumberGenerator {
            start,
            end,
            inclusive,
            ..
        } = self.iter;
        FunctionalIterable::new(NumberGenerator {
            inclusive,
            ..number_generator(start, end, step)
        })
    }

    pub fn start(&self) -> T {
        self.iter.start
    }

    pub fn end(&self) -> T {
        self.iter.end
    }

    pub fn step(&self) -> T {
        self.iter.step
    }

    /// Whether `x` lies in `[start, end)` (or `[start, end]` for an inclusive
    /// range ending at the type's maximum).
    ///
    /// This is interval membership: the step is not taken into account, so
    /// `range(0, 10).with_step(3).includes(4)` is `true`.
    pub fn includes(&self, x: T) -> bool {
        x >= self.iter.start && self.iter.below_end(x)
    }
}
