//! Result container - the success or failure of an operation.
//!
//! This module provides the [`Outcome<T, E>`] type, which holds either a
//! success payload of type `T` or a failure payload of type `E`, never both
//! and never neither. The combinator surface mirrors
//! [`Optional`](crate::option::Optional), with every success-side transform
//! carrying the failure payload through untouched (and vice versa).
//!
//! # Examples
//!
//! ```rust
//! use vessel::result::Outcome;
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     input.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! let doubled = parse("21").map(|x| x * 2);
//! assert_eq!(doubled, Outcome::Success(42));
//!
//! let failed = parse("twenty-one").map(|x| x * 2);
//! assert!(failed.is_err_and(|message| message.contains("invalid digit")));
//! ```

use std::fmt;

use crate::error::{EmptyValueError, ExpectationError, InvalidConstructionError};
use crate::option::Optional;

const CONTAINER: &str = "Outcome";

/// A success value of type `T`, or a failure value of type `E`.
///
/// # Type Parameters
///
/// * `T` - The type of the success payload
/// * `E` - The type of the failure payload
///
/// # Examples
///
/// ```rust
/// use vessel::result::Outcome;
///
/// let success: Outcome<i32, &str> = Outcome::Success(1);
/// assert_eq!(success.map(|x| x + 1).ok(), Some(&2));
///
/// let failure: Outcome<i32, &str> = Outcome::Failure("e");
/// assert_eq!(failure.map(|x| x + 1).err(), Some(&"e"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome<T, E> {
    /// The operation succeeded with a value of type `T`.
    Success(T),
    /// The operation failed with an error of type `E`.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Construction from Slots
    // =========================================================================

    /// Builds an outcome from a success slot and a failure slot.
    ///
    /// Exactly one slot must be present.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConstructionError::BothPopulated`] if both slots hold a
    /// payload and [`InvalidConstructionError::NeitherPopulated`] if neither
    /// does. One side is never silently preferred over the other.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::error::InvalidConstructionError;
    /// use vessel::option::Optional;
    /// use vessel::result::Outcome;
    ///
    /// let success = Outcome::<i32, &str>::from_slots(Optional::Present(1), Optional::Absent);
    /// assert_eq!(success, Ok(Outcome::Success(1)));
    ///
    /// let both = Outcome::from_slots(Optional::Present(1), Optional::Present("e"));
    /// assert_eq!(both, Err(InvalidConstructionError::BothPopulated));
    /// ```
    pub fn from_slots(
        success: Optional<T>,
        failure: Optional<E>,
    ) -> Result<Self, InvalidConstructionError> {
        match (success, failure) {
            (Optional::Present(value), Optional::Absent) => Ok(Self::Success(value)),
            (Optional::Absent, Optional::Present(error)) => Ok(Self::Failure(error)),
            (Optional::Present(_), Optional::Present(_)) => {
                tracing::debug!(container = CONTAINER, reason = "both", "invalid construction");
                Err(InvalidConstructionError::BothPopulated)
            }
            (Optional::Absent, Optional::Absent) => {
                tracing::debug!(container = CONTAINER, reason = "neither", "invalid construction");
                Err(InvalidConstructionError::NeitherPopulated)
            }
        }
    }

    /// Builds an outcome from an optional, using `error` as the failure
    /// payload when the optional is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::option::Optional;
    /// use vessel::result::Outcome;
    ///
    /// assert_eq!(Outcome::from_optional(Optional::Present(1), "none"), Outcome::Success(1));
    /// assert_eq!(Outcome::from_optional(Optional::<i32>::Absent, "none"), Outcome::Failure("none"));
    /// ```
    #[inline]
    pub fn from_optional(optional: Optional<T>, error: E) -> Self {
        match optional {
            Optional::Present(value) => Self::Success(value),
            Optional::Absent => Self::Failure(error),
        }
    }

    /// Lazy version of [`Outcome::from_optional`]; `error` is only called
    /// when the optional is absent.
    #[inline]
    pub fn from_optional_else<F>(optional: Optional<T>, error: F) -> Self
    where
        F: FnOnce() -> E,
    {
        match optional {
            Optional::Present(value) => Self::Success(value),
            Optional::Absent => Self::Failure(error()),
        }
    }

    /// Splits the outcome into its success slot and failure slot.
    ///
    /// Exactly one of the two returned slots is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::option::Optional;
    /// use vessel::result::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::Failure("e");
    /// assert_eq!(failure.into_slots(), (Optional::Absent, Optional::Present("e")));
    /// ```
    #[inline]
    pub fn into_slots(self) -> (Optional<T>, Optional<E>) {
        match self {
            Self::Success(value) => (Optional::Present(value), Optional::Absent),
            Self::Failure(error) => (Optional::Absent, Optional::Present(error)),
        }
    }

    // =========================================================================
    // Variant Checking
    // =========================================================================

    /// Returns `true` if this is a success.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a failure.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` if this is a success whose value satisfies `predicate`.
    ///
    /// Returns `false` without calling `predicate` on a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::result::Outcome;
    ///
    /// let success: Outcome<i32, &str> = Outcome::Success(1);
    /// assert!(success.is_ok_and(|x| *x == 1));
    /// assert!(!success.is_ok_and(|x| *x == 2));
    ///
    /// let failure: Outcome<i32, &str> = Outcome::Failure("e");
    /// assert!(!failure.is_ok_and(|_| true));
    /// ```
    #[inline]
    pub fn is_ok_and<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => predicate(value),
            Self::Failure(_) => false,
        }
    }

    /// Returns `true` if this is a failure whose error satisfies `predicate`.
    ///
    /// Returns `false` without calling `predicate` on a success.
    #[inline]
    pub fn is_err_and<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&E) -> bool,
    {
        match self {
            Self::Success(_) => false,
            Self::Failure(error) => predicate(error),
        }
    }

    // =========================================================================
    // Non-consuming Access
    // =========================================================================

    /// Returns a reference to the success value, or `None` on failure.
    #[inline]
    pub const fn ok(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the failure value, or `None` on success.
    #[inline]
    pub const fn err(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts `&Outcome<T, E>` into `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Consumes the outcome and returns its success slot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::option::Optional;
    /// use vessel::result::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::Success(1).into_ok(), Optional::Present(1));
    /// assert_eq!(Outcome::<i32, &str>::Failure("e").into_ok(), Optional::Absent);
    /// ```
    #[inline]
    pub fn into_ok(self) -> Optional<T> {
        self.into_slots().0
    }

    /// Consumes the outcome and returns its failure slot.
    #[inline]
    pub fn into_err(self) -> Optional<E> {
        self.into_slots().1
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the success value, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics with the [`EmptyValueError`] message on a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::result::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::Success(1).unwrap(), 1);
    /// ```
    ///
    /// ```rust,should_panic
    /// use vessel::result::Outcome;
    ///
    /// Outcome::<i32, &str>::Failure("e").unwrap();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the success value, or an [`EmptyValueError`] on a failure.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyValueError`] when called on [`Outcome::Failure`]. The
    /// failure payload is dropped.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, EmptyValueError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(EmptyValueError::new(CONTAINER, "unwrap", "Failure")),
        }
    }

    /// Returns the failure value, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics with the [`EmptyValueError`] message on a success.
    ///
    /// # Examples
    ///
    /// ```rust,should_panic
    /// use vessel::result::Outcome;
    ///
    /// Outcome::<i32, &str>::Success(1).unwrap_err();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self.try_unwrap_err() {
            Ok(error) => error,
            Err(empty) => panic!("{empty}"),
        }
    }

    /// Returns the failure value, or an [`EmptyValueError`] on a success.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyValueError`] when called on [`Outcome::Success`].
    #[inline]
    pub fn try_unwrap_err(self) -> Result<E, EmptyValueError> {
        match self {
            Self::Success(_) => Err(EmptyValueError::new(CONTAINER, "unwrap_err", "Success")),
            Self::Failure(error) => Ok(error),
        }
    }

    /// Returns the success value, or panics with the caller-supplied `message`.
    ///
    /// # Panics
    ///
    /// Panics with exactly `message` on a failure.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self.try_expect(message) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the success value, or an [`ExpectationError`] carrying `message`.
    ///
    /// # Errors
    ///
    /// Returns [`ExpectationError`] when called on [`Outcome::Failure`].
    #[inline]
    pub fn try_expect(self, message: &str) -> Result<T, ExpectationError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(ExpectationError::new(message)),
        }
    }

    /// Returns the success value, or `default` on a failure.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value, or computes one from the failure value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::result::Outcome;
    ///
    /// let failure: Outcome<usize, &str> = Outcome::Failure("four");
    /// assert_eq!(failure.unwrap_or_else(str::len), 4);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, default: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => default(error),
        }
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// Transforms the success value, passing a failure through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::result::Outcome;
    ///
    /// let success: Outcome<i32, &str> = Outcome::Success(1);
    /// assert_eq!(success.map(|x| x.to_string()), Outcome::Success("1".to_string()));
    ///
    /// let failure: Outcome<i32, &str> = Outcome::Failure("e");
    /// assert_eq!(failure.map(|x| x.to_string()), Outcome::Failure("e"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the failure value, passing a success through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::result::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::Failure("bad");
    /// assert_eq!(failure.map_err(str::len), Outcome::Failure(3));
    ///
    /// let success: Outcome<i32, &str> = Outcome::Success(1);
    /// assert_eq!(success.map_err(str::len), Outcome::Success(1));
    /// ```
    #[inline]
    pub fn map_err<F, O>(self, function: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    /// Returns `default` on a failure, otherwise applies `function` to the
    /// success value.
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(_) => default,
        }
    }

    /// Applies `default` to the failure value or `function` to the success value.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => default(error),
        }
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Returns `other` on a success, otherwise propagates this failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::result::Outcome;
    ///
    /// let success: Outcome<i32, &str> = Outcome::Success(1);
    /// assert_eq!(success.and(Outcome::<&str, &str>::Success("next")), Outcome::Success("next"));
    ///
    /// let failure: Outcome<i32, &str> = Outcome::Failure("first");
    /// assert_eq!(failure.and(Outcome::<&str, &str>::Failure("second")), Outcome::Failure("first"));
    /// ```
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Success(_) => other,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Calls `function` with the success value and returns its result.
    ///
    /// A failure short-circuits: `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::result::Outcome;
    ///
    /// fn checked_half(x: i32) -> Outcome<i32, String> {
    ///     if x % 2 == 0 {
    ///         Outcome::Success(x / 2)
    ///     } else {
    ///         Outcome::Failure(format!("{x} is odd"))
    ///     }
    /// }
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(12);
    /// assert_eq!(success.and_then(checked_half).and_then(checked_half), Outcome::Success(3));
    ///
    /// let odd: Outcome<i32, String> = Outcome::Success(6);
    /// assert_eq!(
    ///     odd.and_then(checked_half).and_then(checked_half),
    ///     Outcome::Failure("3 is odd".to_string())
    /// );
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns this success, otherwise `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::result::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::Failure("e");
    /// assert_eq!(failure.or(Outcome::<i32, u8>::Success(2)), Outcome::Success(2));
    ///
    /// let success: Outcome<i32, &str> = Outcome::Success(1);
    /// assert_eq!(success.or(Outcome::<i32, u8>::Failure(0)), Outcome::Success(1));
    /// ```
    #[inline]
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(_) => other,
        }
    }

    /// Calls `function` with the failure value and returns its result.
    ///
    /// A success short-circuits: `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::result::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::Failure("7");
    /// let recovered = failure.or_else(|text| -> Outcome<i32, String> {
    ///     Outcome::from(text.parse::<i32>().map_err(|_| format!("unrecoverable: {text}")))
    /// });
    /// assert_eq!(recovered, Outcome::Success(7));
    /// ```
    #[inline]
    pub fn or_else<F, O>(self, function: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => function(error),
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts into the standard library's `Result`.
    ///
    /// # Errors
    ///
    /// Returns the failure payload in `Err` when this is [`Outcome::Failure`].
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of success-side nesting.
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.and_then(|inner| inner)
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(error) => write!(formatter, "Failure({error})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// `Ok(v)` becomes `Success(v)` and `Err(e)` becomes `Failure(e)`.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}
