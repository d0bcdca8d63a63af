//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use vessel::option::Optional;
//! use vessel::result::Outcome;
//! use vessel::typeclass::Functor;
//!
//! let present = Optional::Present(5);
//! assert_eq!(present.fmap(|n| n.to_string()), Optional::Present("5".to_string()));
//!
//! let failure: Outcome<i32, &str> = Outcome::Failure("e");
//! assert_eq!(failure.fmap(|n| n + 1), Outcome::Failure("e"));
//! ```

use super::higher::TypeConstructor;
use crate::option::Optional;
use crate::result::Outcome;

/// A type class for containers whose payload can be transformed in place
/// without changing the container's variant.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the payload, if there is one.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the payload with `value`, keeping the variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::option::Optional;
    /// use vessel::typeclass::Functor;
    ///
    /// assert_eq!(Optional::Present(5).replace("replaced"), Optional::Present("replaced"));
    /// assert_eq!(Optional::<i32>::Absent.replace("replaced"), Optional::Absent);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the payload, keeping only the variant.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Optional<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<T, E> Functor for Outcome<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }
}
