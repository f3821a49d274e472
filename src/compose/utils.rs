//! Helper combinators for composition.

/// Returns the value unchanged.
///
/// The identity function is the unit element of composition:
/// - `compose!(identity, f)` is equivalent to `f`
/// - `compose!(f, identity)` is equivalent to `f`
///
/// # Examples
///
/// ```
/// use pointfree::compose;
/// use pointfree::compose::identity;
///
/// fn double(x: i32) -> i32 { x * 2 }
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(compose!(identity, double)(5), double(5));
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}
