//! Optional container - a value that is either present or absent.
//!
//! This module provides the [`Optional<T>`] type, which represents a value of
//! type `T` that may or may not be there. Absence is its own variant rather
//! than a sentinel stored in the payload slot, so every `T` (including `()`
//! and nested optionals) is a legitimate payload.
//!
//! Combinators (`map`, `and_then`, `or`, `filter`, ...) never fail. Only the
//! explicit extraction operations can:
//!
//! - [`Optional::unwrap`] and [`Optional::expect`] panic when absent; their
//!   twins [`Optional::try_unwrap`] and [`Optional::try_expect`] return the
//!   error instead.
//! - [`Optional::unwrap_or_throw`] and [`Optional::unwrap_or_throw_with`]
//!   hand the caller's own error back in `Err`.
//!
//! # Examples
//!
//! ```rust
//! use vessel::option::Optional;
//!
//! let port: Optional<&str> = Optional::Present("8080");
//! let parsed = port
//!     .map(str::parse::<u16>)
//!     .and_then(|result| Optional::from(result.ok()))
//!     .filter(|port| *port >= 1024);
//! assert_eq!(parsed, Optional::Present(8080));
//!
//! let missing: Optional<u16> = Optional::Absent;
//! assert_eq!(missing.unwrap_or(80), 80);
//! ```

use std::fmt;

use crate::error::{EmptyValueError, ExpectationError};

const CONTAINER: &str = "Optional";

/// A value of type `T`, or nothing.
///
/// Instances are immutable: every combinator consumes the receiver and
/// returns a new `Optional`.
///
/// # Type Parameters
///
/// * `T` - The type of the payload
///
/// # Examples
///
/// ```rust
/// use vessel::option::Optional;
///
/// let present = Optional::Present(21);
/// assert_eq!(present.map(|x| x * 2), Optional::Present(42));
///
/// let absent: Optional<i32> = Optional::Absent;
/// assert_eq!(absent.map(|x| x * 2), Optional::Absent);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    /// No value.
    Absent,
    /// Exactly one value of type `T`.
    Present(T),
}

impl<T> Optional<T> {
    // =========================================================================
    // Variant Checking
    // =========================================================================

    /// Returns `true` if this holds a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::option::Optional;
    ///
    /// assert!(Optional::Present(1).is_present());
    /// assert!(!Optional::<i32>::Absent.is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if this holds no value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::option::Optional;
    ///
    /// assert!(Optional::<i32>::Absent.is_absent());
    /// assert!(!Optional::Present(1).is_absent());
    /// ```
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if a value is present and it satisfies `predicate`.
    ///
    /// The predicate is not called when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::option::Optional;
    ///
    /// assert!(Optional::Present(2).is_present_and(|x| x % 2 == 0));
    /// assert!(!Optional::Present(3).is_present_and(|x| x % 2 == 0));
    /// assert!(!Optional::<i32>::Absent.is_present_and(|_| true));
    /// ```
    #[inline]
    pub fn is_present_and<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => predicate(value),
            Self::Absent => false,
        }
    }

    /// Returns `true` if absent, or if the value satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::option::Optional;
    ///
    /// assert!(Optional::<i32>::Absent.is_absent_or(|_| false));
    /// assert!(Optional::Present(2).is_absent_or(|x| *x > 1));
    /// assert!(!Optional::Present(0).is_absent_or(|x| *x > 1));
    /// ```
    #[inline]
    pub fn is_absent_or<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => predicate(value),
            Self::Absent => true,
        }
    }

    // =========================================================================
    // Non-consuming Access
    // =========================================================================

    /// Returns a reference to the value, or `None` when absent. Never panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::option::Optional;
    ///
    /// assert_eq!(Optional::Present(5).peek(), Some(&5));
    /// assert_eq!(Optional::<i32>::Absent.peek(), None);
    /// ```
    #[inline]
    pub const fn peek(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Converts `&Optional<T>` into `Optional<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::option::Optional;
    ///
    /// let name = Optional::Present(String::from("vessel"));
    /// let length = name.as_ref().map(|name| name.len());
    /// assert_eq!(length, Optional::Present(6));
    /// assert!(name.is_present());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the value, consuming the optional.
    ///
    /// # Panics
    ///
    /// Panics with the [`EmptyValueError`] message if absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::option::Optional;
    ///
    /// assert_eq!(Optional::Present("air").unwrap(), "air");
    /// ```
    ///
    /// ```rust,should_panic
    /// use vessel::option::Optional;
    ///
    /// Optional::<i32>::Absent.unwrap();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the value, or an [`EmptyValueError`] if absent.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyValueError`] when called on [`Optional::Absent`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::option::Optional;
    ///
    /// assert_eq!(Optional::Present(1).try_unwrap(), Ok(1));
    /// assert!(Optional::<i32>::Absent.try_unwrap().is_err());
    /// ```
    #[inline]
    pub fn try_unwrap(self) -> Result<T, EmptyValueError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(EmptyValueError::new(CONTAINER, "unwrap", "Absent")),
        }
    }

    /// Returns the value, or `default` if absent.
    ///
    /// `default` is evaluated eagerly; use [`Optional::unwrap_or_else`] for a
    /// lazily computed default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::option::Optional;
    ///
    /// assert_eq!(Optional::Present(1).unwrap_or(0), 1);
    /// assert_eq!(Optional::Absent.unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the value, or computes one with `default` if absent.
    ///
    /// `default` is only called when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::option::Optional;
    ///
    /// assert_eq!(Optional::Absent.unwrap_or_else(|| 2 * 21), 42);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => default(),
        }
    }

    /// Returns the value, or panics with the caller-supplied `message`.
    ///
    /// # Panics
    ///
    /// Panics with exactly `message` if absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::option::Optional;
    ///
    /// assert_eq!(Optional::Present(3).expect("three"), 3);
    /// ```
    ///
    /// ```rust,should_panic
    /// use vessel::option::Optional;
    ///
    /// Optional::<i32>::Absent.expect("socket must be bound");
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self.try_expect(message) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the value, or an [`ExpectationError`] carrying `message`.
    ///
    /// # Errors
    ///
    /// Returns [`ExpectationError`] when called on [`Optional::Absent`].
    #[inline]
    pub fn try_expect(self, message: &str) -> Result<T, ExpectationError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(ExpectationError::new(message)),
        }
    }

    /// Returns the value, or hands `error` back to the caller if absent.
    ///
    /// The error is returned verbatim, never wrapped.
    ///
    /// # Errors
    ///
    /// Returns `error` when called on [`Optional::Absent`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::option::Optional;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct MissingKey(&'static str);
    ///
    /// let value: Optional<i32> = Optional::Absent;
    /// assert_eq!(value.unwrap_or_throw(MissingKey("timeout")), Err(MissingKey("timeout")));
    /// ```
    #[inline]
    pub fn unwrap_or_throw<E>(self, error: E) -> Result<T, E> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(error),
        }
    }

    /// Returns the value, or an error built by `error` if absent.
    ///
    /// `error` is only called when absent.
    ///
    /// # Errors
    ///
    /// Returns the result of `error()` when called on [`Optional::Absent`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::option::Optional;
    ///
    /// let value = Optional::Present(7);
    /// assert_eq!(value.unwrap_or_throw_with(|| -> String { unreachable!() }), Ok(7));
    /// ```
    #[inline]
    pub fn unwrap_or_throw_with<E, F>(self, error: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(error()),
        }
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// Applies `function` to the value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::option::Optional;
    ///
    /// let word = Optional::Present("hello");
    /// assert_eq!(word.map(str::len), Optional::Present(5));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Optional::Present(function(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Returns `default` if absent, otherwise applies `function` to the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::option::Optional;
    ///
    /// assert_eq!(Optional::Present(3).map_or(0, |x| x * 3), 9);
    /// assert_eq!(Optional::Absent.map_or(0, |x: i32| x * 3), 0);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => default,
        }
    }

    /// Computes `default()` if absent, otherwise applies `function` to the value.
    ///
    /// Exactly one of the two closures is called.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => default(),
        }
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Returns `Absent` if this is absent, otherwise returns `other` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::option::Optional;
    ///
    /// assert_eq!(Optional::Present(1).and(Optional::Present("b")), Optional::Present("b"));
    /// assert_eq!(Optional::<i32>::Absent.and(Optional::Present("b")), Optional::Absent);
    /// ```
    #[inline]
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        match self {
            Self::Present(_) => other,
            Self::Absent => Optional::Absent,
        }
    }

    /// Calls `function` with the value if present and returns its result.
    ///
    /// `function` is never called on an absent optional.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::option::Optional;
    ///
    /// fn half(x: i32) -> Optional<i32> {
    ///     if x % 2 == 0 { Optional::Present(x / 2) } else { Optional::Absent }
    /// }
    ///
    /// assert_eq!(Optional::Present(8).and_then(half).and_then(half), Optional::Present(2));
    /// assert_eq!(Optional::Present(6).and_then(half).and_then(half), Optional::Absent);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Returns this optional if present, otherwise `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::option::Optional;
    ///
    /// assert_eq!(Optional::Present(1).or(Optional::Present(2)), Optional::Present(1));
    /// assert_eq!(Optional::Absent.or(Optional::Present(2)), Optional::Present(2));
    /// ```
    #[inline]
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Present(_) => self,
            Self::Absent => other,
        }
    }

    /// Returns this optional if present, otherwise the result of `function`.
    ///
    /// `function` is only called when absent.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(_) => self,
            Self::Absent => function(),
        }
    }

    /// Returns whichever of `self` and `other` is present, if exactly one is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::option::Optional;
    ///
    /// assert_eq!(Optional::Present(1).xor(Optional::Absent), Optional::Present(1));
    /// assert_eq!(Optional::Absent.xor(Optional::Present(2)), Optional::Present(2));
    /// assert_eq!(Optional::Present(1).xor(Optional::Present(2)), Optional::Absent);
    /// assert_eq!(Optional::<i32>::Absent.xor(Optional::Absent), Optional::Absent);
    /// ```
    #[inline]
    #[must_use]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Present(value), Self::Absent) | (Self::Absent, Self::Present(value)) => {
                Self::Present(value)
            }
            _ => Self::Absent,
        }
    }

    /// Keeps the value only if it satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::option::Optional;
    ///
    /// assert_eq!(Optional::Present(4).filter(|x| x % 2 == 0), Optional::Present(4));
    /// assert_eq!(Optional::Present(3).filter(|x| x % 2 == 0), Optional::Absent);
    /// ```
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => {
                if predicate(&value) {
                    Self::Present(value)
                } else {
                    Self::Absent
                }
            }
            Self::Absent => Self::Absent,
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T: Default> Optional<T> {
    /// Returns the value, or `T::default()` if absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::option::Optional;
    ///
    /// assert_eq!(Optional::<String>::Absent.unwrap_or_default(), "");
    /// ```
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => T::default(),
        }
    }
}

impl<T> Optional<Optional<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vessel::option::Optional;
    ///
    /// let nested = Optional::Present(Optional::Present(1));
    /// assert_eq!(nested.flatten(), Optional::Present(1));
    /// ```
    #[inline]
    pub fn flatten(self) -> Optional<T> {
        self.and_then(|inner| inner)
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Present({value})"),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    /// `Some(v)` becomes `Present(v)` and `None` becomes `Absent`.
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}
