//! Function composition combinators.
//!
//! This module provides the combinators for writing functions in point-free
//! style, where a function is defined by how other functions are wired
//! together rather than by naming its arguments.
//!
//! # Overview
//!
//! - [`compose!`]: Compose unary functions right-to-left
//! - [`fork`] / [`fork!`]: Send one input through two functions and merge the results
//! - [`identity`]: The unit of composition
//!
//! Currying lives in [`crate::curry`] and the [`curry!`](crate::curry!) macro.
//!
//! # Examples
//!
//! ```
//! use pointfree::{compose, fork};
//! use pointfree::list::{divide, size, sum};
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // compose!(f, g)(x) = f(g(x))
//! assert_eq!(compose!(add_one, double)(5), 11);
//!
//! // fork(lastly, f, g)(x) = lastly(f(x), g(x))
//! let average = compose!(fork!(divide, sum, size));
//! assert_eq!(average(vec![1, 2, 3, 4, 5]), 3);
//! ```
//!
//! # Mathematical Background
//!
//! ```text
//! (f . g)(x)              = f(g(x))
//! fork(lastly, f, g)(x)   = lastly(f(x), g(x))
//! ```
//!
//! `fork` is the S' combinator (sometimes called `converge` or `phi`):
//! `compose!` threads a value down a single path, `fork` splits it into two
//! paths that are joined again.
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(identity, f) == f`
//! - **Right Identity**: `compose!(f, identity) == f`
//! - **Fork Definition**: `fork(lastly, f, g)(x) == lastly(f(x), g(x))`

mod compose_macro;
mod fork_combinator;
mod utils;

pub use fork_combinator::fork;
pub use utils::identity;

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::fork;
