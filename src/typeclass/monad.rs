//! Monad type class - sequencing dependent computations.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use vessel::option::Optional;
//! use vessel::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Optional<i32> {
//!     Optional::from(text.parse::<i32>().ok()).filter(|n| *n > 0)
//! }
//!
//! let value = <Optional<()>>::pure("12").flat_map(parse_positive);
//! assert_eq!(value, Optional::Present(12));
//!
//! let value = <Optional<()>>::pure("-3").flat_map(parse_positive);
//! assert_eq!(value, Optional::Absent);
//! ```

use super::functor::Functor;
use crate::option::Optional;
use crate::result::Outcome;

/// A type class for containers that can chain computations returning the
/// same container kind, short-circuiting on the empty variant.
pub trait Monad: Functor {
    /// Lifts a plain value into the non-empty variant.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies `function` to the payload and flattens the result.
    ///
    /// On the empty variant `function` is never called.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences two computations, discarding the first payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::result::Outcome;
    /// use vessel::typeclass::Monad;
    ///
    /// let first: Outcome<i32, &str> = Outcome::Failure("first");
    /// assert_eq!(first.then(Outcome::Success("next")), Outcome::Failure("first"));
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Optional<A> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::Present(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        self.and_then(function)
    }
}

impl<T, E> Monad for Outcome<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B, E> {
        Outcome::Success(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> Outcome<B, E>,
    {
        self.and_then(function)
    }
}
