//! A deferred computation that resolves to an [`Outcome`](crate::Outcome).
//!
//! A [`Task`] is a *description* of an asynchronous fallible computation -
//! the "network call that may fail" shape. Nothing happens until [`Task::run`]
//! is awaited, and running consumes the description: re-building and
//! re-running re-invokes the underlying operation, with no caching across
//! runs.
//!
//! # Design
//!
//! The module follows the `futures` crate pattern: combinators return
//! concrete types (zero heap allocation), and [`boxed`](TaskExt::boxed) is
//! the opt-in type erasure needed for collections, recursion, and match arms
//! returning different shapes.
//!
//! ```rust
//! use outflow::task::{self, Task, TaskExt};
//! use outflow::Outcome;
//!
//! # tokio_test::block_on(async {
//! let computation = task::pure::<_, String>(21)
//!     .map(|n| n * 2)
//!     .and_then(|n| task::pure(n + 1));
//!
//! assert_eq!(computation.run().await, Outcome::success(43));
//! # });
//! ```
//!
//! # Typed Rejections
//!
//! External asynchronous operations enter through [`try_future`]: the
//! wrapped future's rejection is passed through the supplied mapping so no
//! untyped error ever escapes into a pipeline.
//!
//! ```rust
//! use outflow::task::{self, Task};
//! use outflow::Outcome;
//!
//! # tokio_test::block_on(async {
//! let wrapped = task::try_future(
//!     || async { Err::<i32, &str>("BOOM!") },
//!     |reason| format!("upstream rejected: {reason}"),
//! );
//!
//! assert_eq!(
//!     wrapped.run().await,
//!     Outcome::failure("upstream rejected: BOOM!".to_string())
//! );
//! # });
//! ```
//!
//! All pure combinators (`map`, `and_then`, `zip_with`, ...) execute without
//! suspension; the only await points are inside wrapped operations.

pub mod boxed;
pub mod combinators;
pub mod constructors;
pub mod ext;
mod trait_def;

pub use boxed::{BoxFuture, BoxedTask};
pub use combinators::{
    AndThen, Apply, Context, Fail, FromOutcome, Map, MapFailure, OrElse, Pure, TryFuture, Zip,
    ZipWith,
};
pub use constructors::{fail, from_optional, from_outcome, from_predicate, pure, try_future};
pub use ext::TaskExt;
pub use trait_def::Task;

#[cfg(test)]
mod tests;
