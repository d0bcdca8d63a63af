//! Bifunctor type class - mapping over both sides of a two-sided container.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! ## first/second Consistency Law
//!
//! ```text
//! bf.bimap(f, g) == bf.first(f).second(g) == bf.second(g).first(f)
//! ```
//!
//! # Parameter Order for Outcome
//!
//! `Outcome<T, E>` is implemented as `Bifunctor<E, T>`, so `first` maps the
//! failure side (like `map_err`) and `second` maps the success side (like
//! `map` and [`Functor::fmap`](super::Functor::fmap)).
//!
//! ```rust
//! use vessel::result::Outcome;
//! use vessel::typeclass::{Bifunctor, Functor};
//!
//! let outcome: Outcome<i32, String> = Outcome::Success(42);
//! assert_eq!(outcome.clone().fmap(|x| x * 2), outcome.second(|x| x * 2));
//! ```

use crate::result::Outcome;

/// A type class for types with two type parameters that can have functions
/// mapped over both.
///
/// # Examples
///
/// ```rust
/// use vessel::result::Outcome;
/// use vessel::typeclass::Bifunctor;
///
/// let failure: Outcome<i32, String> = Outcome::Failure("oops".to_string());
/// assert_eq!(failure.bimap(|e| e.len(), |x| x * 2), Outcome::Failure(4));
/// ```
pub trait Bifunctor<A, B> {
    /// The resulting container after both transformations.
    type Target<C, D>;

    /// Applies `first_function` or `second_function` to whichever side is populated.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Applies a function to the first type parameter only.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |second| second)
    }

    /// Applies a function to the second type parameter only.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|first| first, function)
    }
}

impl<T, E> Bifunctor<E, T> for Outcome<T, E> {
    type Target<C, D> = Outcome<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Outcome<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        match self {
            Self::Success(value) => Outcome::Success(second_function(value)),
            Self::Failure(error) => Outcome::Failure(first_function(error)),
        }
    }

    #[inline]
    fn first<C, F>(self, function: F) -> Outcome<T, C>
    where
        F: FnOnce(E) -> C,
    {
        self.map_err(function)
    }

    #[inline]
    fn second<D, G>(self, function: G) -> Outcome<D, E>
    where
        G: FnOnce(T) -> D,
    {
        self.map(function)
    }
}
