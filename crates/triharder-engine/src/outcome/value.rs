use core::fmt;

/// Either a success payload or a failure payload.
///
/// Invariants:
/// - exactly one payload exists; it is fixed at construction
/// - reading the wrong payload through [`unwrap`](Self::unwrap) or
///   [`unwrap_error`](Self::unwrap_error) is a contract violation and panics
///
/// The `*_or*` accessors never panic and are the way to opt into a fallback.
#[must_use = "an Outcome may be a failure which should be handled"]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Boolean view of the discriminant: `true` iff success.
    #[inline]
    pub const fn as_bool(&self) -> bool {
        self.is_success()
    }

    /// Returns the success payload.
    ///
    /// # Panics
    /// Panics if `self` is a failure.
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => {
                panic!("attempted to unwrap a failure outcome: {error:?}")
            }
        }
    }

    /// Returns the failure payload.
    ///
    /// # Panics
    /// Panics if `self` is a success.
    #[track_caller]
    pub fn unwrap_error(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Success(value) => {
                panic!("attempted to unwrap_error a success outcome: {value:?}")
            }
            Self::Failure(error) => error,
        }
    }

    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success payload, or calls `f` once to produce a fallback.
    ///
    /// `f` is never called on success.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => f(),
        }
    }

    /// Returns the success payload or `T::default()`.
    ///
    /// Only `T` must be `Default`; the failure payload is simply dropped.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => T::default(),
        }
    }

    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    #[inline]
    pub const fn success_value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    #[inline]
    pub const fn failure_value(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    pub fn map_failure<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Chains another fallible step; short-circuits on failure.
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Converts into a `Result` so `?` can propagate the failure.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
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

impl<T, E> From<&Outcome<T, E>> for bool {
    #[inline]
    fn from(outcome: &Outcome<T, E>) -> Self {
        outcome.is_success()
    }
}
