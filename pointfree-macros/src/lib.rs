//! Procedural macros for pointfree.
//!
//! # Available Function-like Macros
//!
//! - [`curry!`]: Converts a multi-argument closure, or a function with a
//!   declared arity, into curried form
//!
//! # Example
//!
//! ```rust,ignore
//! use pointfree::curry;
//!
//! let get = curry!(|key: &str, record: serde_json::Value| record[key].clone());
//! let name = get("name");
//! assert_eq!(name(serde_json::json!({ "name": "Baz" })), "Baz");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod curry;

use proc_macro::TokenStream;

/// Converts a multi-argument closure or function into curried form.
///
/// The result is a chain of single-argument closures: applying it to the
/// first argument returns a closure awaiting the second, and so on, until
/// the last argument invokes the wrapped function with every argument in
/// the order supplied.
///
/// # Forms
///
/// ```rust,ignore
/// use pointfree::curry;
///
/// // A closure: the arity is its parameter count.
/// let add = curry!(|a: i32, b: i32| a + b);
/// assert_eq!(add(5)(3), 8);
///
/// // A function path with an explicit arity.
/// fn volume(width: i32, height: i32, depth: i32) -> i32 { width * height * depth }
/// let volume = curry!(volume, 3);
/// assert_eq!(volume(2)(3)(4), 24);
/// ```
///
/// # Reuse
///
/// Partial applications can be called any number of times:
///
/// ```rust,ignore
/// use pointfree::curry;
///
/// let multiply = curry!(|first: i32, second: i32| first * second);
/// let double = multiply(2);
/// assert_eq!(double(5), 10);
/// assert_eq!(double(21), 42);
/// ```
///
/// # Requirements
///
/// Every argument except the last must implement `Clone`; captured
/// arguments are shared through `Rc` and cloned out on each final call.
/// The curried closures are therefore not `Send`.
///
/// # Compile Errors
///
/// - Fewer than 2 arguments
/// - A function name without an arity
/// - An arity that is not an integer literal
#[proc_macro]
pub fn curry(input: TokenStream) -> TokenStream {
    curry::expand(input.into()).into()
}
