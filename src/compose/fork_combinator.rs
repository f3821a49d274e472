//! The `fork` combinator.
//!
//! `fork` is a pipeline like [`compose!`](crate::compose) except that it
//! duplicates its input: the same value is sent through two functions and
//! their results are merged by a third.
//!
//! ```text
//! fork(lastly, f, g)(x) = lastly(f(x), g(x))
//! ```

/// Applies `left` and `right` to the same input and combines the results
/// with `lastly`.
///
/// Calling `fork` with its three functions is a partial application: the
/// returned closure awaits the input. [`fork!`](crate::fork!) accepts any
/// prefix of `lastly, f, g, x`, so fewer functions can be supplied too.
///
/// The input is cloned once so that both branches receive their own copy;
/// `left` runs before `right`.
///
/// # Laws
///
/// - **Definition**: `fork(lastly, f, g)(x) == lastly(f(x), g(x))`
/// - **Projection**: `fork(|a, _| a, f, g) == f`
///
/// # Examples
///
/// ```
/// use pointfree::compose::fork;
/// use pointfree::list::{divide, size, sum};
///
/// let average = fork(divide, sum, size);
/// assert_eq!(average(vec![1, 2, 3, 4, 5]), 3);
///
/// // Each fork is fixed to one input type.
/// let float_average = fork(divide, sum, size);
/// assert!((float_average(vec![1.0, 2.0]) - 1.5_f64).abs() < f64::EPSILON);
/// ```
///
/// ```
/// use pointfree::compose::fork;
///
/// let range = fork(
///     |low: i32, high: i32| high - low,
///     |values: Vec<i32>| values.into_iter().min().unwrap_or_default(),
///     |values: Vec<i32>| values.into_iter().max().unwrap_or_default(),
/// );
/// assert_eq!(range(vec![4, 9, 2]), 7);
/// ```
#[inline]
pub fn fork<A, B, C, R, L, F, G>(lastly: L, left: F, right: G) -> impl Fn(A) -> R
where
    A: Clone,
    L: Fn(B, C) -> R,
    F: Fn(A) -> B,
    G: Fn(A) -> C,
{
    move |input: A| lastly(left(input.clone()), right(input))
}

/// Builds a [`fork`](crate::compose::fork) one argument at a time.
///
/// `fork!` is curried over `lastly, f, g, x`: every prefix of the four
/// arguments is accepted, and a shorter prefix yields a closure awaiting the
/// rest.
///
/// - `fork!(lastly)` - `move |f| move |g| fork(lastly, f, g)`
/// - `fork!(lastly, f)` - `move |g| fork(lastly, f, g)`
/// - `fork!(lastly, f, g)` - The reusable unary function
/// - `fork!(lastly, f, g, x)` - `lastly(f(x), g(x))`
///
/// The one- and two-argument forms clone the captured functions on every
/// call, so `lastly` and `f` must implement `Clone` (function items and
/// non-capturing closures do).
///
/// # Examples
///
/// ```
/// use pointfree::fork;
/// use pointfree::list::{divide, size, sum};
///
/// assert_eq!(fork!(divide, sum, size, vec![2, 4, 6]), 4);
///
/// let average = fork!(divide, sum, size);
/// assert_eq!(average(vec![10, 20]), 15);
///
/// let with_lastly = fork!(divide);
/// assert_eq!(with_lastly(sum)(size)(vec![1, 2, 3, 4, 5]), 3);
///
/// let with_sum = fork!(divide, sum);
/// assert_eq!(with_sum(size)(vec![3, 6]), 4);
/// ```
#[macro_export]
macro_rules! fork {
    ($lastly:expr $(,)?) => {{
        let lastly = $lastly;
        move |left| {
            let lastly = ::std::clone::Clone::clone(&lastly);
            $crate::fork!(lastly, left)
        }
    }};

    ($lastly:expr, $left:expr $(,)?) => {{
        let lastly = $lastly;
        let left = $left;
        move |right| {
            $crate::compose::fork(
                ::std::clone::Clone::clone(&lastly),
                ::std::clone::Clone::clone(&left),
                right,
            )
        }
    }};

    ($lastly:expr, $left:expr, $right:expr $(,)?) => {
        $crate::compose::fork($lastly, $left, $right)
    };

    ($lastly:expr, $left:expr, $right:expr, $input:expr $(,)?) => {
        $crate::compose::fork($lastly, $left, $right)($input)
    };
}
