//! # pointfree
//!
//! Point-free combinators for Rust: build functions by composing other
//! functions instead of naming their arguments.
//!
//! ## Overview
//!
//! - **Composition**: [`compose!`] chains unary functions right-to-left,
//!   [`fork`](compose::fork) sends one input through two functions and merges
//!   the results with a third
//! - **Currying**: [`curry!`] turns a closure into nested single-argument
//!   closures at compile time; [`curry`](curry::curry) builds a
//!   [`Curried`](curry::Curried) callable that tracks its arity at runtime and
//!   accepts arguments in batches
//! - **Primitives**: curried list helpers ([`list`]) and record accessors
//!   ([`record`]) that slot into compositions
//!
//! ## Feature Flags
//!
//! - `derive`: Re-export the [`curry!`] procedural macro
//! - `record`: `serde_json`-backed records and the [`get`](record::get) accessor
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use pointfree::prelude::*;
//!
//! let average = compose!(fork(divide, sum, size));
//! assert_eq!(average(vec![1, 2, 3, 4, 5]), 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the combinators, the list primitives and, when enabled, the
/// record accessors.
///
/// # Usage
///
/// ```rust
/// use pointfree::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compose::*;

    pub use crate::curry::*;

    pub use crate::list::*;

    #[cfg(feature = "record")]
    pub use crate::record::*;

    #[cfg(feature = "derive")]
    pub use crate::curry;
}

pub mod compose;

pub mod curry;

pub mod list;

#[cfg(feature = "record")]
pub mod record;

#[cfg(feature = "derive")]
pub use pointfree_macros::curry;
