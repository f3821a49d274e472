//! Curried list primitives.
//!
//! Each function takes its configuration first and its data last, so that a
//! partially applied primitive is a unary function ready for
//! [`compose!`](crate::compose!) or [`fork`](crate::compose::fork):
//!
//! ```
//! use pointfree::compose;
//! use pointfree::list::{contains, map};
//!
//! let has_nine = compose!(contains(9), map(|x: i32| x * x));
//! assert!(has_nine(vec![1, 2, 3]));
//! assert!(!has_nine(vec![4, 5]));
//! ```
//!
//! Primitives that consume a collection accept anything iterable, so owned
//! vectors, slices and ranges all work.

use std::ops::{Add, Div};

/// Numeric types usable with [`sum`], [`size`] and [`divide`].
pub trait Numeric: Copy + Add<Output = Self> + Div<Output = Self> {
    /// The additive identity.
    const ZERO: Self;

    /// Converts an element count into this type.
    fn from_count(count: usize) -> Self;
}

macro_rules! impl_numeric {
    ($($numeric:ty => $zero:expr),* $(,)?) => {
        $(
            impl Numeric for $numeric {
                const ZERO: Self = $zero;

                #[inline]
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_possible_wrap,
                    clippy::cast_precision_loss,
                    clippy::unnecessary_cast
                )]
                fn from_count(count: usize) -> Self {
                    count as Self
                }
            }
        )*
    };
}

impl_numeric!(
    i32 => 0,
    i64 => 0,
    u32 => 0,
    u64 => 0,
    usize => 0,
    f32 => 0.0,
    f64 => 0.0,
);

/// Values with a measurable size: element count for collections, character
/// count for strings.
pub trait Size {
    /// Returns the size of the value.
    fn size(&self) -> usize;
}

impl<T> Size for Vec<T> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Size for [T] {
    fn size(&self) -> usize {
        self.len()
    }
}

impl Size for String {
    fn size(&self) -> usize {
        self.chars().count()
    }
}

impl Size for str {
    fn size(&self) -> usize {
        self.chars().count()
    }
}

impl<T: Size + ?Sized> Size for &T {
    fn size(&self) -> usize {
        (**self).size()
    }
}

/// Applies `function` to every element, preserving order.
///
/// # Examples
///
/// ```
/// use pointfree::list::map;
///
/// let doubled = map(|x: i32| x * 2);
/// assert_eq!(doubled(vec![1, 2, 3]), vec![2, 4, 6]);
///
/// // Any iterable input works.
/// assert_eq!(map(|x: u8| x + 1)(1..=2), vec![2, 3]);
/// ```
pub fn map<I, F, U>(function: F) -> impl Fn(I) -> Vec<U>
where
    I: IntoIterator,
    F: Fn(I::Item) -> U,
{
    move |values| values.into_iter().map(&function).collect()
}

/// Splits text on `separator`.
///
/// # Examples
///
/// ```
/// use pointfree::list::split;
///
/// let words = split(" ");
/// assert_eq!(words("once uppon the time"), vec!["once", "uppon", "the", "time"]);
/// assert_eq!(words(""), vec![""]);
/// ```
pub fn split<S>(separator: S) -> impl Fn(&str) -> Vec<String>
where
    S: Into<String>,
{
    let separator = separator.into();
    move |text| text.split(separator.as_str()).map(str::to_owned).collect()
}

/// Returns the size of `value` as any [`Numeric`] type.
///
/// # Examples
///
/// ```
/// use pointfree::list::size;
///
/// assert_eq!(size::<_, usize>(vec![1, 2, 3]), 3);
/// assert_eq!(size::<_, f64>("uppon"), 5.0);
/// ```
#[inline]
pub fn size<S, N>(value: S) -> N
where
    S: Size,
    N: Numeric,
{
    N::from_count(value.size())
}

/// Returns whether any element equals `item`.
///
/// # Examples
///
/// ```
/// use pointfree::list::contains;
///
/// let has_bar = contains("bar");
/// assert!(has_bar(vec!["foo", "bar"]));
/// assert!(!has_bar(Vec::<&str>::new()));
/// ```
pub fn contains<I, T>(item: T) -> impl Fn(I) -> bool
where
    I: IntoIterator,
    I::Item: PartialEq<T>,
{
    move |values| values.into_iter().any(|value| value == item)
}

/// Divides `numerator` by `denominator`.
///
/// Integer division by zero panics; floating-point division follows IEEE 754.
///
/// # Examples
///
/// ```
/// use pointfree::list::divide;
///
/// assert_eq!(divide(15, 5), 3);
/// assert!(divide(1.0_f64, 0.0).is_infinite());
/// ```
#[inline]
pub fn divide<N: Numeric>(numerator: N, denominator: N) -> N {
    numerator / denominator
}

/// Adds up the elements, starting from [`Numeric::ZERO`].
///
/// # Examples
///
/// ```
/// use pointfree::list::sum;
///
/// assert_eq!(sum(vec![1, 2, 3, 4, 5]), 15);
/// assert_eq!(sum(Vec::<f64>::new()), 0.0);
/// ```
pub fn sum<I>(values: I) -> I::Item
where
    I: IntoIterator,
    I::Item: Numeric,
{
    values
        .into_iter()
        .fold(<I::Item as Numeric>::ZERO, |total, value| total + value)
}
