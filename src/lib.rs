//! # vessel
//!
//! Two generic algebraic containers for modelling absence and failure without
//! sentinel values:
//!
//! - **[`Optional<T>`](option::Optional)**: a value of type `T`, or nothing
//! - **[`Outcome<T, E>`](result::Outcome)**: a success value of type `T`, or a
//!   failure value of type `E`
//!
//! Both are immutable values. Combinators (`map`, `and_then`, `or`, `filter`,
//! ...) never fail and always return a new container, so a chain of them
//! carries the empty variant through without the caller branching at each
//! step. Only explicit extraction (`unwrap`, `unwrap_err`, `expect`) and
//! [`Outcome::from_slots`](result::Outcome::from_slots) can fail, each with
//! a distinct error kind from [`error`].
//!
//! ## Feature Flags
//!
//! - `typeclass` (default): `Functor`, `Monad` and `Bifunctor` instances
//!
//! ## Example
//!
//! ```rust
//! use vessel::prelude::*;
//!
//! fn lookup(key: &str) -> Optional<&'static str> {
//!     match key {
//!         "retries" => Optional::Present("3"),
//!         _ => Optional::Absent,
//!     }
//! }
//!
//! let retries: Outcome<u32, String> =
//!     Outcome::from_optional_else(lookup("retries"), || "missing key".to_string())
//!     .and_then(|text| Outcome::from(text.parse::<u32>().map_err(|error| error.to_string())));
//! assert_eq!(retries, Outcome::Success(3));
//!
//! let timeout = lookup("timeout").map(|text| text.len()).unwrap_or(30);
//! assert_eq!(timeout, 30);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use vessel::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{
        ContainerError, EmptyValueError, ExpectationError, InvalidConstructionError,
    };
    pub use crate::option::Optional;
    pub use crate::result::Outcome;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod error;
pub mod option;
pub mod result;

#[cfg(feature = "typeclass")]
pub mod typeclass;
