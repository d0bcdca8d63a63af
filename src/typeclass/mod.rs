//! Type class traits over the two containers.
//!
//! - [`Functor`]: Mapping over the payload
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Bifunctor`]: Mapping over both sides of an [`Outcome`](crate::result::Outcome)
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT). The
//! [`TypeConstructor`] trait uses Generic Associated Types (GAT) to emulate
//! them, so `Functor` and `Monad` can be written once for both containers.
//!
//! # Examples
//!
//! ```rust
//! use vessel::option::Optional;
//! use vessel::result::Outcome;
//! use vessel::typeclass::{Functor, Monad};
//!
//! fn double_all<M>(container: M) -> M::WithType<i64>
//! where
//!     M: Functor<Inner = i64>,
//! {
//!     container.fmap(|x| x * 2)
//! }
//!
//! assert_eq!(double_all(Optional::Present(4)), Optional::Present(8));
//! assert_eq!(double_all(Outcome::<i64, ()>::Success(4)), Outcome::Success(8));
//!
//! let chained = Optional::Present(3).flat_map(|x| Optional::Present(x + 1));
//! assert_eq!(chained, Optional::Present(4));
//! ```

mod bifunctor;
mod functor;
mod higher;
mod monad;

pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
