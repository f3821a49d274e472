//! The `compose!` macro for right-to-left function composition.

/// Composes unary functions from right to left.
///
/// `compose!(f, g, h)(x)` is equivalent to `f(g(h(x)))`: the rightmost
/// function receives the input and each result is threaded leftward.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity, f) == f`
/// - **Right Identity**: `compose!(f, identity) == f`
///
/// # Syntax
///
/// - `compose!(f)` - Returns `f` unchanged
/// - `compose!(f, g)` - Returns `move |x| f(g(x))`
/// - `compose!(f, g, h, ...)` - Composes any number of functions
///
/// The output type of each function must match the input type of the
/// function to its left. Panics raised by any stage propagate to the caller.
///
/// # Examples
///
/// ```
/// use pointfree::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn square(x: i32) -> i32 { x * x }
///
/// // add_one(double(square(3))) = add_one(double(9)) = add_one(18) = 19
/// let composed = compose!(add_one, double, square);
/// assert_eq!(composed(3), 19);
/// ```
///
/// Types may change from stage to stage:
///
/// ```
/// use pointfree::compose;
///
/// fn render(x: i32) -> String { x.to_string() }
/// fn width(text: String) -> usize { text.len() }
///
/// assert_eq!(compose!(width, render)(12345), 5);
/// ```
///
/// Composition of curried primitives, in point-free style:
///
/// ```
/// use pointfree::compose;
/// use pointfree::list::{map, size, split};
///
/// let length = compose!(map(size::<String, usize>), split(" "));
/// assert_eq!(length("once uppon the time"), vec![4, 5, 3, 4]);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    // compose!(f, g, ...) = move |x| f(compose!(g, ...)(x))
    ($outermost:expr, $($inner_functions:expr),+ $(,)?) => {{
        let outermost = $outermost;
        let inner = $crate::compose!($($inner_functions),+);
        move |input| outermost(inner(input))
    }};
}
