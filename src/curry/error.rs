//! Errors raised by runtime currying.

use thiserror::Error;

/// Represents a rejected application of a [`Curried`](super::Curried) function.
///
/// # Examples
///
/// ```rust
/// use pointfree::curry::{CurryError, curry};
///
/// let add = curry(2, |numbers: Vec<i32>| numbers.iter().sum::<i32>());
/// let error = add.apply([1, 2, 3]).unwrap_err();
///
/// assert_eq!(error, CurryError::TooManyArguments { arity: 2, supplied: 3 });
/// assert_eq!(
///     error.to_string(),
///     "curried function takes 2 arguments but 3 were supplied"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CurryError {
    /// More arguments were supplied, in aggregate, than the declared arity.
    #[error("curried function takes {arity} arguments but {supplied} were supplied")]
    TooManyArguments {
        /// The declared arity of the curried function.
        arity: usize,
        /// The total number of arguments, including those already accumulated.
        supplied: usize,
    },
}
