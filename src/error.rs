/// Errors returned by the fallible operations of this crate.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterError {
    /// `reduce` (and `join`, which reduces) found nothing to seed from.
    #[error("reducing empty iterator")]
    EmptySequence,
    /// `try_range` was given a step that would never reach the end bound.
    #[error("range step must be positive")]
    NonPositiveStep,
}
