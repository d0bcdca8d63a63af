//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Optional<_>` directly.
//! [`TypeConstructor`] records the payload type a container is applied to and
//! how to re-apply the same constructor to another payload type, which is all
//! [`Functor`](super::Functor) and [`Monad`](super::Monad) need.
//!
//! # Example
//!
//! ```rust
//! use vessel::option::Optional;
//! use vessel::typeclass::TypeConstructor;
//!
//! fn emptied<T>(_: T) -> T::WithType<String>
//! where
//!     T: TypeConstructor,
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! assert_eq!(emptied(Optional::Present(42)), Optional::<String>::Absent);
//! ```

use crate::option::Optional;
use crate::result::Outcome;

/// A type constructor applied to the payload type [`TypeConstructor::Inner`].
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The payload type, e.g. `i32` for `Optional<i32>`.
    type Inner;

    /// The same constructor applied to `B`, e.g. `Optional<B>`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Optional<A> {
    type Inner = A;
    type WithType<B> = Optional<B>;
}

/// The success side is the payload; the failure type is fixed.
impl<T, E> TypeConstructor for Outcome<T, E> {
    type Inner = T;
    type WithType<B> = Outcome<B, E>;
}
