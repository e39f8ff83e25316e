//! Constructor functions for deferred computations.

use std::future::Future;
use std::marker::PhantomData;

use crate::optional::Optional;
use crate::outcome::Outcome;
use crate::task::combinators::{Fail, FromOutcome, Pure, TryFuture};

/// A computation that immediately succeeds with the given value.
///
/// # Example
///
/// ```rust
/// use outflow::task::{self, Task};
/// use outflow::Outcome;
///
/// # tokio_test::block_on(async {
/// assert_eq!(task::pure::<_, String>(42).run().await, Outcome::success(42));
/// # });
/// ```
pub fn pure<T, E>(value: T) -> Pure<T, E>
where
    T: Send,
    E: Send,
{
    Pure {
        value,
        _marker: PhantomData,
    }
}

/// A computation that immediately fails with the given error.
///
/// # Example
///
/// ```rust
/// use outflow::task::{self, Task};
/// use outflow::Outcome;
///
/// # tokio_test::block_on(async {
/// assert_eq!(task::fail::<i32, _>("boom").run().await, Outcome::failure("boom"));
/// # });
/// ```
pub fn fail<T, E>(error: E) -> Fail<T, E>
where
    T: Send,
    E: Send,
{
    Fail {
        error,
        _marker: PhantomData,
    }
}

/// Lift an already-resolved outcome into a computation.
pub fn from_outcome<T, E>(outcome: Outcome<T, E>) -> FromOutcome<T, E>
where
    T: Send,
    E: Send,
{
    FromOutcome { outcome }
}

/// Lift an optional, turning absence into the supplied typed failure.
///
/// # Example
///
/// ```rust
/// use outflow::task::{self, Task};
/// use outflow::{Optional, Outcome};
///
/// # tokio_test::block_on(async {
/// let missing = task::from_optional(Optional::<i32>::absent(), || "missing");
/// assert_eq!(missing.run().await, Outcome::failure("missing"));
/// # });
/// ```
pub fn from_optional<T, E>(
    optional: Optional<T>,
    on_absent: impl FnOnce() -> E,
) -> FromOutcome<T, E>
where
    T: Send,
    E: Send,
{
    FromOutcome {
        outcome: Outcome::from_optional(optional, on_absent),
    }
}

/// Succeed with the value iff the predicate holds, resolved eagerly.
pub fn from_predicate<T, E>(
    value: T,
    pred: impl FnOnce(&T) -> bool,
    on_false: impl FnOnce(T) -> E,
) -> FromOutcome<T, E>
where
    T: Send,
    E: Send,
{
    FromOutcome {
        outcome: Outcome::from_predicate(value, pred, on_false),
    }
}

/// Wrap an external asynchronous operation that may reject.
///
/// Whatever the operation rejects with is passed through `on_reject` to
/// produce the typed failure; no untyped error escapes into the pipeline.
/// Running the returned computation twice is impossible (it is consumed);
/// building it twice invokes the operation twice.
///
/// # Example
///
/// ```rust
/// use outflow::task::{self, Task};
/// use outflow::Outcome;
///
/// async fn flaky_divide(a: i32, b: i32) -> Result<i32, String> {
///     if b == 0 {
///         Err("BOOM!".to_string())
///     } else {
///         Ok(a / b)
///     }
/// }
///
/// # tokio_test::block_on(async {
/// let safe = task::try_future(|| flaky_divide(10, 0), |_| "division by zero");
/// assert_eq!(safe.run().await, Outcome::failure("division by zero"));
/// # });
/// ```
pub fn try_future<F, Fut, T, Err, H, E>(f: F, on_reject: H) -> TryFuture<F, H>
where
    F: FnOnce() -> Fut + Send,
    Fut: Future<Output = Result<T, Err>> + Send,
    H: FnOnce(Err) -> E + Send,
    T: Send,
    E: Send,
{
    TryFuture { f, on_reject }
}
