//! A container for a value that may be absent.
//!
//! # Optional vs `std::option::Option`
//!
//! [`Optional<T>`] carries the same information as the standard `Option`,
//! but it is the absence leaf of this crate's effect algebra: it shares the
//! combinator vocabulary (`map`, `and_then`, `apply`, `from_predicate`) with
//! [`Outcome`](crate::Outcome) and the deferred containers, and converts
//! losslessly to and from `Option` at the boundary.
//!
//! Absence carries no reason. When the caller needs to know *why* nothing
//! happened, convert into an [`Outcome`](crate::Outcome) with
//! [`Outcome::from_optional`](crate::Outcome::from_optional).
//!
//! # Short-Circuiting
//!
//! Every combinator propagates `Absent` without invoking the supplied
//! function, so a chain stops at the first absent step:
//!
//! ```rust
//! use outflow::Optional;
//!
//! fn safe_divide(a: i32, b: i32) -> Optional<i32> {
//!     Optional::from_predicate(b, |n| *n != 0).map(|n| a / n)
//! }
//!
//! assert_eq!(safe_divide(10, 2), Optional::present(5));
//! assert_eq!(safe_divide(10, 0), Optional::absent());
//! ```

use crate::outcome::Outcome;

/// A value that is either `Present(T)` or `Absent`.
///
/// Exactly one variant holds at a time. `Absent` is the sole failure signal
/// and carries no reason; no combinator on this type ever raises an error.
///
/// # Example
///
/// ```rust
/// use outflow::Optional;
///
/// let present = Optional::present(42);
/// let absent: Optional<i32> = Optional::absent();
///
/// assert_eq!(present.map(|n| n + 1), Optional::present(43));
/// assert_eq!(absent.map(|n| n + 1), Optional::absent());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    /// A value is present.
    Present(T),
    /// No value. Carries no reason.
    Absent,
}

impl<T> Optional<T> {
    // ========== Constructors ==========

    /// Create a present value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outflow::Optional;
    ///
    /// let v = Optional::present(42);
    /// assert!(v.is_present());
    /// ```
    #[inline]
    pub fn present(value: T) -> Self {
        Optional::Present(value)
    }

    /// Create an absent value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outflow::Optional;
    ///
    /// let v: Optional<i32> = Optional::absent();
    /// assert!(v.is_absent());
    /// ```
    #[inline]
    pub fn absent() -> Self {
        Optional::Absent
    }

    /// Keep the value iff the predicate holds.
    ///
    /// This is the canonical way to express a validation without a branch
    /// statement at the call site.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outflow::Optional;
    ///
    /// assert_eq!(Optional::from_predicate(5, |n| *n != 0), Optional::present(5));
    /// assert_eq!(Optional::from_predicate(0, |n| *n != 0), Optional::absent());
    /// ```
    #[inline]
    pub fn from_predicate(value: T, pred: impl FnOnce(&T) -> bool) -> Self {
        if pred(&value) {
            Optional::Present(value)
        } else {
            Optional::Absent
        }
    }

    /// Keep the success value of an outcome, discarding any failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outflow::{Optional, Outcome};
    ///
    /// let ok: Outcome<i32, &str> = Outcome::success(42);
    /// let bad: Outcome<i32, &str> = Outcome::failure("nope");
    ///
    /// assert_eq!(Optional::from_outcome(ok), Optional::present(42));
    /// assert_eq!(Optional::from_outcome(bad), Optional::absent());
    /// ```
    #[inline]
    pub fn from_outcome<E>(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Optional::Present(value),
            Outcome::Failure(_) => Optional::Absent,
        }
    }

    // ========== Predicates ==========

    /// Returns `true` if a value is present.
    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Optional::Absent)
    }

    // ========== Combinators ==========

    /// Transform a present value. Absence propagates unchanged and the
    /// function is never invoked on it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outflow::Optional;
    ///
    /// assert_eq!(Optional::present(21).map(|n| n * 2), Optional::present(42));
    /// assert_eq!(Optional::<i32>::absent().map(|n| n * 2), Optional::absent());
    /// ```
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Optional<U> {
        match self {
            Optional::Present(value) => Optional::Present(f(value)),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Chain a computation that may itself come up empty, without nesting.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outflow::Optional;
    ///
    /// fn half(n: i32) -> Optional<i32> {
    ///     Optional::from_predicate(n, |n| n % 2 == 0).map(|n| n / 2)
    /// }
    ///
    /// assert_eq!(Optional::present(8).and_then(half), Optional::present(4));
    /// assert_eq!(Optional::present(7).and_then(half), Optional::absent());
    /// assert_eq!(Optional::absent().and_then(half), Optional::absent());
    /// ```
    #[inline]
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
        match self {
            Optional::Present(value) => f(value),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Drop the value unless the predicate holds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outflow::Optional;
    ///
    /// assert_eq!(Optional::present(4).filter(|n| n % 2 == 0), Optional::present(4));
    /// assert_eq!(Optional::present(3).filter(|n| n % 2 == 0), Optional::absent());
    /// ```
    #[inline]
    pub fn filter(self, pred: impl FnOnce(&T) -> bool) -> Self {
        self.and_then(|value| Optional::from_predicate(value, pred))
    }

    /// Fall back to another optional when absent.
    ///
    /// Recovery is always explicit at the call site; nothing in the algebra
    /// substitutes values implicitly.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outflow::Optional;
    ///
    /// assert_eq!(Optional::present(1).or_else(|| Optional::present(2)), Optional::present(1));
    /// assert_eq!(Optional::absent().or_else(|| Optional::present(2)), Optional::present(2));
    /// ```
    #[inline]
    pub fn or_else(self, f: impl FnOnce() -> Optional<T>) -> Self {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Absent => f(),
        }
    }

    /// Combine two independent optionals with a function of both values.
    ///
    /// Either side being absent makes the combination absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outflow::Optional;
    ///
    /// let combined = Optional::present(2).zip_with(Optional::present(3), |a, b| a * b);
    /// assert_eq!(combined, Optional::present(6));
    /// ```
    #[inline]
    pub fn zip_with<U, V>(self, other: Optional<U>, f: impl FnOnce(T, U) -> V) -> Optional<V> {
        match (self, other) {
            (Optional::Present(a), Optional::Present(b)) => Optional::Present(f(a, b)),
            _ => Optional::Absent,
        }
    }

    /// Combine two independent optionals into a pair.
    #[inline]
    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
        self.zip_with(other, |a, b| (a, b))
    }

    /// Apply a present function to a present argument.
    ///
    /// This is the applicative combination primitive: the function side and
    /// the argument side are independent of each other's value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outflow::Optional;
    ///
    /// let f = Optional::present(|n: i32| n + 1);
    /// assert_eq!(f.apply(Optional::present(41)), Optional::present(42));
    /// ```
    #[inline]
    pub fn apply<A, B>(self, argument: Optional<A>) -> Optional<B>
    where
        T: FnOnce(A) -> B,
    {
        match (self, argument) {
            (Optional::Present(f), Optional::Present(a)) => Optional::Present(f(a)),
            _ => Optional::Absent,
        }
    }

    /// Collapse into a single value by handling both variants.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outflow::Optional;
    ///
    /// let description = Optional::present(5).fold(|| "nothing".to_string(), |n| n.to_string());
    /// assert_eq!(description, "5");
    /// ```
    #[inline]
    pub fn fold<U>(self, on_absent: impl FnOnce() -> U, on_present: impl FnOnce(T) -> U) -> U {
        match self {
            Optional::Present(value) => on_present(value),
            Optional::Absent => on_absent(),
        }
    }

    // ========== Extractors ==========

    /// Convert to `Optional<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Return the value, or a default when absent.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => default,
        }
    }

    /// Return the value, or compute a default when absent.
    #[inline]
    pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => f(),
        }
    }

    /// Convert into a standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }

    /// Iterate over the present value (zero or one items).
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_iter()
    }
}

impl<T> Default for Optional<T> {
    /// The default optional is `Absent`.
    #[inline]
    fn default() -> Self {
        Optional::Absent
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Optional::Present(value),
            None => Optional::Absent,
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

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Option::from(self).into_iter()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_functor_identity(x: i32) {
            prop_assert_eq!(Optional::present(x).map(|v| v), Optional::present(x));
        }

        #[test]
        fn prop_functor_composition(x: i32) {
            let f = |v: i32| v.wrapping_add(1);
            let g = |v: i32| v.wrapping_mul(2);

            prop_assert_eq!(
                Optional::present(x).map(f).map(g),
                Optional::present(x).map(|v| g(f(v)))
            );
        }

        #[test]
        fn prop_monad_associativity(x: i32) {
            let f = |v: i32| Optional::from_predicate(v, |v| v % 2 == 0);
            let g = |v: i32| Optional::from_predicate(v, |v| *v >= 0);

            prop_assert_eq!(
                Optional::present(x).and_then(f).and_then(g),
                Optional::present(x).and_then(|v| f(v).and_then(g))
            );
        }

        #[test]
        fn prop_from_predicate_agrees(x: i32) {
            let kept = Optional::from_predicate(x, |v| v % 3 == 0);
            if x % 3 == 0 {
                prop_assert_eq!(kept, Optional::present(x));
            } else {
                prop_assert_eq!(kept, Optional::absent());
            }
        }

        #[test]
        fn prop_option_roundtrip(x: i32) {
            let optional = Optional::present(x);
            let back: Optional<i32> = optional.into_option().into();
            prop_assert_eq!(back, optional);
        }
    }
}
