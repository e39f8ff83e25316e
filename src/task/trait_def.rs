//! Task trait definition - the deferred fallible computation abstraction.

use std::future::Future;

use crate::outcome::Outcome;

/// A deferred computation that, when run, produces exactly one
/// [`Outcome`](crate::Outcome).
///
/// Implementing types are descriptions: building one performs no work, and
/// combinators build bigger descriptions out of smaller ones. Running takes
/// the description by value, so a single constructed value executes at most
/// once; executing an equivalent description twice re-invokes the underlying
/// operation both times.
///
/// # Type Parameters
///
/// * `Output` - the success type (must be `Send`)
/// * `Error` - the typed failure (must be `Send`)
///
/// # Example
///
/// ```rust
/// use outflow::task::{self, Task};
/// use outflow::Outcome;
///
/// fn parse_port(raw: String) -> impl Task<Output = u16, Error = String> {
///     task::from_outcome(raw.parse::<u16>().map_err(|e| e.to_string()).into())
/// }
///
/// # tokio_test::block_on(async {
/// assert_eq!(parse_port("8080".into()).run().await, Outcome::success(8080));
/// # });
/// ```
pub trait Task: Sized + Send {
    /// The success type produced by this computation.
    type Output: Send;

    /// The typed failure that may be produced instead.
    type Error: Send;

    /// Execute the computation.
    ///
    /// Suspends only inside the wrapped asynchronous operation (if any) and
    /// resolves to exactly one outcome. Rejections of wrapped operations
    /// arrive as `Failure` values, never as panics or untyped errors.
    fn run(self) -> impl Future<Output = Outcome<Self::Output, Self::Error>> + Send;
}
