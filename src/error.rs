//! Error types raised by container extraction and construction.
//!
//! Combinators on [`Optional`](crate::option::Optional) and
//! [`Outcome`](crate::result::Outcome) never fail. Only the extraction
//! operations (`unwrap`, `unwrap_err`, `expect`) and the two-slot constructor
//! [`Outcome::from_slots`](crate::result::Outcome::from_slots) can, and each
//! failure has its own error kind so callers can tell them apart.
//!
//! Caller-supplied errors passed to `unwrap_or_throw` are returned verbatim
//! and never wrapped in one of these types.

use thiserror::Error;

/// An extraction was requested on the variant that does not hold the payload.
///
/// # Examples
///
/// ```rust
/// use vessel::error::EmptyValueError;
///
/// let error = EmptyValueError {
///     container: "Optional",
///     operation: "unwrap",
///     found: "Absent",
/// };
/// assert_eq!(
///     format!("{error}"),
///     "called `Optional::unwrap()` on an `Absent` value"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("called `{container}::{operation}()` on {} `{found}` value", article(.found))]
pub struct EmptyValueError {
    /// The container type the extraction was called on.
    pub container: &'static str,
    /// The name of the extraction operation.
    pub operation: &'static str,
    /// The variant that was found instead of the requested one.
    pub found: &'static str,
}

impl EmptyValueError {
    pub(crate) fn new(
        container: &'static str,
        operation: &'static str,
        found: &'static str,
    ) -> Self {
        tracing::debug!(container, operation, found, "extraction on empty variant");
        Self {
            container,
            operation,
            found,
        }
    }
}

fn article(word: &str) -> &'static str {
    match word.chars().next() {
        Some('A' | 'E' | 'I' | 'O' | 'U' | 'a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

/// An `expect` call found no payload; carries the caller's message verbatim.
///
/// # Examples
///
/// ```rust
/// use vessel::error::ExpectationError;
///
/// let error = ExpectationError::new("configuration must be loaded");
/// assert_eq!(format!("{error}"), "configuration must be loaded");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ExpectationError {
    /// The message supplied to `expect`.
    pub message: String,
}

impl ExpectationError {
    /// Creates an expectation error from the caller's message.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::debug!(message = %message, "expectation failed");
        Self { message }
    }
}

/// An [`Outcome`](crate::result::Outcome) was built from slots that do not
/// hold exactly one payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum InvalidConstructionError {
    /// Both the success and the failure slot were populated.
    #[error("cannot create an Outcome with both a success value and a failure value")]
    BothPopulated,
    /// Neither slot was populated.
    #[error("cannot create an Outcome with neither a success value nor a failure value")]
    NeitherPopulated,
}

/// Every error kind a container can raise by itself.
///
/// # Examples
///
/// ```rust
/// use vessel::error::{ContainerError, InvalidConstructionError};
/// use vessel::option::Optional;
/// use vessel::result::Outcome;
///
/// fn build() -> Result<i32, ContainerError> {
///     let outcome: Outcome<i32, String> =
///         Outcome::from_slots(Optional::Present(1), Optional::Absent)?;
///     Ok(outcome.try_unwrap()?)
/// }
///
/// assert_eq!(build(), Ok(1));
///
/// let error: ContainerError = InvalidConstructionError::BothPopulated.into();
/// assert!(matches!(error, ContainerError::InvalidConstruction(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// See [`EmptyValueError`].
    #[error(transparent)]
    EmptyValue(#[from] EmptyValueError),
    /// See [`ExpectationError`].
    #[error(transparent)]
    Expectation(#[from] ExpectationError),
    /// See [`InvalidConstructionError`].
    #[error(transparent)]
    InvalidConstruction(#[from] InvalidConstructionError),
}
