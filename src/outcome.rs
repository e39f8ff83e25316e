//! A container for a computation that may have failed with a typed error.
//!
//! # Outcome vs `std::result::Result`
//!
//! [`Outcome<T, E>`] carries the same information as the standard `Result`,
//! but it is the typed-failure leaf of this crate's effect algebra: it
//! shares the combinator vocabulary (`map`, `and_then`, `apply`,
//! `from_predicate`) with [`Optional`](crate::Optional) and the deferred
//! containers, the deferred containers resolve to it, and it converts
//! losslessly to and from `Result` at the boundary.
//!
//! # Fail-Fast
//!
//! This algebra is fail-fast, not validation-accumulating: the **first**
//! failure encountered in a left-to-right chain is the one returned, and no
//! later step's function is invoked.
//!
//! ```rust
//! use outflow::Outcome;
//!
//! #[derive(Debug, PartialEq)]
//! struct DivisionByZero;
//!
//! fn safe_divide(a: i32, b: i32) -> Outcome<i32, DivisionByZero> {
//!     Outcome::from_predicate(b, |n| *n != 0, |_| DivisionByZero).map(|n| a / n)
//! }
//!
//! assert_eq!(safe_divide(10, 2), Outcome::success(5));
//! assert_eq!(safe_divide(10, 0), Outcome::failure(DivisionByZero));
//! ```

use crate::context::ContextError;
use crate::optional::Optional;

/// A value that is either `Success(T)` or `Failure(E)`.
///
/// Exactly one variant holds at a time; the success and failure payloads are
/// never both populated. Combinators are success-biased: `map` and
/// `and_then` operate on `Success`, and a `Failure` propagates unchanged
/// through them with its payload intact.
///
/// # Example
///
/// ```rust
/// use outflow::Outcome;
///
/// let ok: Outcome<i32, String> = Outcome::success(41);
/// assert_eq!(ok.map(|n| n + 1), Outcome::success(42));
///
/// let bad: Outcome<i32, String> = Outcome::failure("boom".to_string());
/// assert_eq!(bad.map(|n| n + 1), Outcome::failure("boom".to_string()));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed with a typed error.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    // ========== Constructors ==========

    /// Create a successful outcome.
    #[inline]
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Create a failed outcome.
    #[inline]
    pub fn failure(error: E) -> Self {
        Outcome::Failure(error)
    }

    /// Succeed with the value iff the predicate holds; otherwise fail with
    /// the error built from the rejected value.
    ///
    /// This is the canonical way to express a validation without a branch
    /// statement at the call site.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outflow::Outcome;
    ///
    /// let checked = Outcome::from_predicate(5, |n| *n != 0, |n| format!("{n} is not allowed"));
    /// assert_eq!(checked, Outcome::success(5));
    ///
    /// let checked = Outcome::from_predicate(0, |n| *n != 0, |n| format!("{n} is not allowed"));
    /// assert_eq!(checked, Outcome::failure("0 is not allowed".to_string()));
    /// ```
    #[inline]
    pub fn from_predicate(
        value: T,
        pred: impl FnOnce(&T) -> bool,
        on_false: impl FnOnce(T) -> E,
    ) -> Self {
        if pred(&value) {
            Outcome::Success(value)
        } else {
            Outcome::Failure(on_false(value))
        }
    }

    /// Convert absence into a caller-supplied failure, presence into success.
    ///
    /// This is how "nothing there" becomes a typed failure rather than a
    /// silent absence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outflow::{Optional, Outcome};
    ///
    /// let present = Optional::present(42);
    /// let absent: Optional<i32> = Optional::absent();
    ///
    /// assert_eq!(Outcome::from_optional(present, || "missing"), Outcome::success(42));
    /// assert_eq!(Outcome::from_optional(absent, || "missing"), Outcome::failure("missing"));
    /// ```
    #[inline]
    pub fn from_optional(optional: Optional<T>, on_absent: impl FnOnce() -> E) -> Self {
        match optional {
            Optional::Present(value) => Outcome::Success(value),
            Optional::Absent => Outcome::Failure(on_absent()),
        }
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    // ========== Combinators ==========

    /// Transform the success value. A failure propagates unchanged and the
    /// function is never invoked on it.
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transform the failure value. A success propagates unchanged.
    ///
    /// Useful for converting error types before chaining with `and_then`.
    #[inline]
    pub fn map_failure<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Chain a computation that may itself fail, without nesting.
    ///
    /// The first failure in a chain is the one returned; later steps are
    /// skipped entirely.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outflow::Outcome;
    ///
    /// fn non_zero(n: i32) -> Outcome<i32, String> {
    ///     Outcome::from_predicate(n, |n| *n != 0, |n| format!("{n} is zero"))
    /// }
    ///
    /// fn even(n: i32) -> Outcome<i32, String> {
    ///     Outcome::from_predicate(n, |n| n % 2 == 0, |n| format!("{n} is odd"))
    /// }
    ///
    /// assert_eq!(non_zero(4).and_then(even), Outcome::success(4));
    /// assert_eq!(non_zero(3).and_then(even), Outcome::failure("3 is odd".to_string()));
    /// assert_eq!(non_zero(0).and_then(even), Outcome::failure("0 is zero".to_string()));
    /// ```
    #[inline]
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Recover from a failure with another outcome.
    ///
    /// Recovery is always explicit at the call site; nothing in the algebra
    /// recovers implicitly.
    #[inline]
    pub fn or_else<F>(self, f: impl FnOnce(E) -> Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => f(error),
        }
    }

    /// Map a failure back into a success value.
    #[inline]
    pub fn recover(self, f: impl FnOnce(E) -> T) -> Outcome<T, E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Success(f(error)),
        }
    }

    /// Fail unless the predicate holds for the success value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outflow::Outcome;
    ///
    /// let checked: Outcome<i32, &str> = Outcome::success(5).ensure(|n| *n > 0, |_| "not positive");
    /// assert_eq!(checked, Outcome::success(5));
    /// ```
    #[inline]
    pub fn ensure(self, pred: impl FnOnce(&T) -> bool, on_false: impl FnOnce(T) -> E) -> Self {
        self.and_then(|value| Outcome::from_predicate(value, pred, on_false))
    }

    /// Combine two independent outcomes with a function of both values.
    ///
    /// Left-biased: when both sides fail, the LEFT failure is the one
    /// surfaced.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outflow::Outcome;
    ///
    /// let combined: Outcome<i32, &str> =
    ///     Outcome::success(2).zip_with(Outcome::success(3), |a, b| a * b);
    /// assert_eq!(combined, Outcome::success(6));
    ///
    /// let both_bad: Outcome<i32, &str> =
    ///     Outcome::failure("left").zip_with(Outcome::failure("right"), |a: i32, b: i32| a * b);
    /// assert_eq!(both_bad, Outcome::failure("left"));
    /// ```
    #[inline]
    pub fn zip_with<U, V>(self, other: Outcome<U, E>, f: impl FnOnce(T, U) -> V) -> Outcome<V, E> {
        match (self, other) {
            (Outcome::Success(a), Outcome::Success(b)) => Outcome::Success(f(a, b)),
            (Outcome::Failure(e), _) => Outcome::Failure(e),
            (_, Outcome::Failure(e)) => Outcome::Failure(e),
        }
    }

    /// Combine two independent outcomes into a pair. Left-biased on failure.
    #[inline]
    pub fn zip<U>(self, other: Outcome<U, E>) -> Outcome<(T, U), E> {
        self.zip_with(other, |a, b| (a, b))
    }

    /// Apply a successful function to a successful argument.
    ///
    /// This is the applicative combination primitive: the function side and
    /// the argument side are independent of each other's value. Left-biased:
    /// when both sides fail, the function side's failure is surfaced.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outflow::Outcome;
    ///
    /// let f: Outcome<_, &str> = Outcome::success(|n: i32| n + 1);
    /// assert_eq!(f.apply(Outcome::success(41)), Outcome::success(42));
    /// ```
    #[inline]
    pub fn apply<A, B>(self, argument: Outcome<A, E>) -> Outcome<B, E>
    where
        T: FnOnce(A) -> B,
    {
        match (self, argument) {
            (Outcome::Success(f), Outcome::Success(a)) => Outcome::Success(f(a)),
            (Outcome::Failure(e), _) => Outcome::Failure(e),
            (_, Outcome::Failure(e)) => Outcome::Failure(e),
        }
    }

    /// Collapse into a single value by handling both variants.
    #[inline]
    pub fn fold<U>(self, on_failure: impl FnOnce(E) -> U, on_success: impl FnOnce(T) -> U) -> U {
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(error) => on_failure(error),
        }
    }

    /// Swap the variants.
    #[inline]
    pub fn swap(self) -> Outcome<E, T> {
        match self {
            Outcome::Success(value) => Outcome::Failure(value),
            Outcome::Failure(error) => Outcome::Success(error),
        }
    }

    /// Wrap the failure in a [`ContextError`] carrying a breadcrumb.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outflow::Outcome;
    ///
    /// let out: Outcome<i32, _> = Outcome::failure("connection refused")
    ///     .context("loading user profile");
    ///
    /// match out {
    ///     Outcome::Failure(err) => {
    ///         assert_eq!(err.failure(), &"connection refused");
    ///         assert_eq!(err.trail(), &["loading user profile"]);
    ///     }
    ///     Outcome::Success(_) => unreachable!(),
    /// }
    /// ```
    #[inline]
    pub fn context(self, message: impl Into<String>) -> Outcome<T, ContextError<E>> {
        self.map_failure(|error| ContextError::new(error).context(message))
    }

    // ========== Extractors ==========

    /// Convert to `Outcome<&T, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// The success value, if any.
    #[inline]
    pub fn ok(self) -> Optional<T> {
        Optional::from_outcome(self)
    }

    /// The failure value, if any.
    #[inline]
    pub fn err(self) -> Optional<E> {
        Optional::from_outcome(self.swap())
    }

    /// Return the success value, or a default on failure.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// Return the success value, or compute one from the failure.
    #[inline]
    pub fn unwrap_or_else(self, f: impl FnOnce(E) -> T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => f(error),
        }
    }

    /// Convert into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }

    /// Iterate over the success value (zero or one items).
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().ok().into_iter()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
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

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.ok().into_iter()
    }
}
