//! Runtime currying with an explicit arity.
//!
//! [`curry`] wraps a function over an argument list together with the number
//! of arguments it expects. The resulting [`Curried`] value accepts its
//! arguments in batches of any size: each batch that leaves the function
//! unsaturated yields a new [`Curried`] carrying the accumulated arguments,
//! and the batch that reaches the arity invokes the function.
//!
//! ```text
//! curry(3, f).apply([a])?.apply([b, c])?  ==  f([a, b, c])
//! ```
//!
//! Supplying more arguments than the arity is rejected with
//! [`CurryError::TooManyArguments`] instead of silently dropping the extras.
//!
//! For compile-time currying into nested single-argument closures, see the
//! [`curry!`](crate::curry!) macro.

mod error;

pub use error::CurryError;

use std::fmt;
use std::rc::Rc;

/// A function awaiting a fixed number of arguments.
///
/// Cloning a `Curried` shares the wrapped function and copies the arguments
/// accumulated so far. Applying arguments never mutates the receiver, so a
/// partial application can be extended in several different ways.
///
/// # Examples
///
/// ```rust
/// use pointfree::curry::{Application, curry};
///
/// let volume = curry(3, |sides: Vec<u32>| sides.iter().product::<u32>());
///
/// let base = volume.apply([2, 3]).unwrap().into_partial().unwrap();
/// assert_eq!(base.remaining(), 1);
///
/// assert_eq!(base.call(4).unwrap(), Application::Complete(24));
/// assert_eq!(base.call(5).unwrap(), Application::Complete(30));
/// ```
pub struct Curried<A, R> {
    function: Rc<dyn Fn(Vec<A>) -> R>,
    arity: usize,
    arguments: Vec<A>,
}

/// The outcome of applying arguments to a [`Curried`] function.
pub enum Application<A, R> {
    /// The function still awaits arguments.
    Partial(Curried<A, R>),
    /// The function was invoked with all of its arguments.
    Complete(R),
}

/// Wraps `function` so that it can be applied to its `arity` arguments
/// across any number of calls.
///
/// `function` receives every argument in the order supplied.
///
/// # Examples
///
/// ```rust
/// use pointfree::curry::curry;
///
/// let join = curry(3, |words: Vec<&str>| words.join(" "));
///
/// let greeting = join.apply(["hello"]).unwrap().into_partial().unwrap();
/// let sentence = greeting.apply(["curried", "world"]).unwrap().into_complete();
///
/// assert_eq!(sentence.as_deref(), Some("hello curried world"));
/// ```
pub fn curry<A, R, F>(arity: usize, function: F) -> Curried<A, R>
where
    F: Fn(Vec<A>) -> R + 'static,
{
    Curried::new(arity, function)
}

impl<A, R> Curried<A, R> {
    /// Creates a curried function with no arguments accumulated.
    pub fn new<F>(arity: usize, function: F) -> Self
    where
        F: Fn(Vec<A>) -> R + 'static,
    {
        Self {
            function: Rc::new(function),
            arity,
            arguments: Vec::new(),
        }
    }

    /// Returns the number of arguments the wrapped function takes.
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Returns the number of arguments still awaited.
    pub const fn remaining(&self) -> usize {
        self.arity - self.arguments.len()
    }

    /// Returns the arguments accumulated so far, in call order.
    pub fn supplied(&self) -> &[A] {
        &self.arguments
    }
}

impl<A: Clone, R> Curried<A, R> {
    /// Applies a batch of arguments.
    ///
    /// Returns [`Application::Partial`] while the accumulated count is below
    /// the arity, and [`Application::Complete`] with the function's result
    /// once it is reached. An empty batch on an unsaturated function returns
    /// an equivalent partial application; on a zero-arity function it invokes
    /// the function.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::TooManyArguments`] if the accumulated and new
    /// arguments together exceed the arity. The function is not invoked.
    pub fn apply<I>(&self, arguments: I) -> Result<Application<A, R>, CurryError>
    where
        I: IntoIterator<Item = A>,
    {
        let mut accumulated = self.arguments.clone();
        accumulated.extend(arguments);

        let supplied = accumulated.len();
        if supplied > self.arity {
            tracing::trace!(
                arity = self.arity,
                supplied,
                "rejected over-supplied curried application"
            );
            return Err(CurryError::TooManyArguments {
                arity: self.arity,
                supplied,
            });
        }

        if supplied == self.arity {
            tracing::trace!(arity = self.arity, "invoking saturated curried function");
            return Ok(Application::Complete((self.function)(accumulated)));
        }

        Ok(Application::Partial(Self {
            function: Rc::clone(&self.function),
            arity: self.arity,
            arguments: accumulated,
        }))
    }

    /// Applies a single argument.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::TooManyArguments`] if the function is already
    /// saturated, which only happens for a zero-arity function.
    pub fn call(&self, argument: A) -> Result<Application<A, R>, CurryError> {
        self.apply(std::iter::once(argument))
    }
}

impl<A: Clone, R> Clone for Curried<A, R> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
            arity: self.arity,
            arguments: self.arguments.clone(),
        }
    }
}

impl<A: fmt::Debug, R> fmt::Debug for Curried<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("arity", &self.arity)
            .field("arguments", &self.arguments)
            .finish_non_exhaustive()
    }
}

impl<A, R> Application<A, R> {
    /// Returns `true` if the function was invoked.
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// Returns the result, or `None` for a partial application.
    pub fn into_complete(self) -> Option<R> {
        match self {
            Self::Complete(result) => Some(result),
            Self::Partial(_) => None,
        }
    }

    /// Returns the partial application, or `None` if the function was invoked.
    pub fn into_partial(self) -> Option<Curried<A, R>> {
        match self {
            Self::Partial(curried) => Some(curried),
            Self::Complete(_) => None,
        }
    }
}

impl<A: fmt::Debug, R: fmt::Debug> fmt::Debug for Application<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Partial(curried) => formatter.debug_tuple("Partial").field(curried).finish(),
            Self::Complete(result) => formatter.debug_tuple("Complete").field(result).finish(),
        }
    }
}

/// Partial applications compare by their accumulated arguments and arity;
/// the wrapped functions are not compared.
impl<A: PartialEq, R: PartialEq> PartialEq for Application<A, R> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Partial(left), Self::Partial(right)) => {
                left.arity == right.arity && left.arguments == right.arguments
            }
            (Self::Complete(left), Self::Complete(right)) => left == right,
            _ => false,
        }
    }
}
