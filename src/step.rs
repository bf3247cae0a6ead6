/// Outcome of feeding one element to a draining loop: keep going with a new
/// accumulator, or stop early with a final value.
///
/// Every terminal operation in this crate is written as a step function over
/// [`Step`] and handed to [`drive`](crate::drive) (or its async counterpart).
///
/// # Examples
///
/// ```rust
/// use func_iter::Step;
///
/// let continuing: Step<i32, bool> = Step::Yielded(42);
/// let stopped: Step<i32, bool> = Step::Complete(true);
///
/// assert_eq!(continuing.into_inner(), 42);
/// assert_eq!(stopped, Step::Complete(true));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step<Y, D> {
    /// Continue draining with this accumulator
    Yielded(Y),
    /// Stop draining with this final value
    Complete(D),
}

impl<Y, D> Step<Y, D> {
    /// Collapses both variants into one value when they share a type.
    ///
    /// A drain that ran to exhaustion ends as `Yielded(acc)`, one that stopped
    /// early ends as `Complete(r)`; when both mean "the answer" this unwraps it.
    ///
    /// ```rust
    /// use func_iter::Step;
    ///
    /// assert_eq!(Step::<bool, bool>::Yielded(false).into_inner(), false);
    /// assert_eq!(Step::<bool, bool>::Complete(true).into_inner(), true);
    /// ```
    #[inline]
    pub fn into_inner(self) -> Y
    where
        D: Into<Y>,
    {
        match self {
            Step::Yielded(y) => y,
            Step::Complete(d) => d.into(),
        }
    }
}

impl<Y, E> Step<Y, Result<Y, E>> {
    /// Turns a drain that may have stopped on an error into a `Result`.
    ///
    /// `Yielded(acc)` and `Complete(Ok(acc))` both become `Ok(acc)`.
    #[inline]
    pub fn into_result(self) -> Result<Y, E> {
        match self {
            Step::Yielded(y) => Ok(y),
            Step::Complete(r) => r,
        }
    }
}
