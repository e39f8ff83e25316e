//! Extension trait providing combinator methods for all Tasks.

use crate::task::boxed::BoxedTask;
use crate::task::combinators::{
    AndThen, Apply, Context, Map, MapFailure, OrElse, Zip, ZipWith,
};
use crate::task::trait_def::Task;

/// Combinator methods, implemented for every [`Task`].
///
/// All methods return concrete description types; nothing executes until
/// [`run`](Task::run) is awaited.
///
/// # Example
///
/// ```rust
/// use outflow::task::{self, Task, TaskExt};
/// use outflow::Outcome;
///
/// # tokio_test::block_on(async {
/// let computation = task::pure::<_, String>(20)
///     .map(|n| n + 1)
///     .and_then(|n| task::pure(n * 2));
///
/// assert_eq!(computation.run().await, Outcome::success(42));
/// # });
/// ```
pub trait TaskExt: Task {
    /// Transform the success value.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: FnOnce(Self::Output) -> U + Send,
        U: Send,
    {
        Map { inner: self, f }
    }

    /// Transform the failure value.
    ///
    /// Useful for converting error types before chaining with `and_then`.
    fn map_failure<E2, F>(self, f: F) -> MapFailure<Self, F>
    where
        F: FnOnce(Self::Error) -> E2 + Send,
        E2: Send,
    {
        MapFailure { inner: self, f }
    }

    /// Chain a dependent computation.
    ///
    /// The continuation runs only on success. The first failure in a chain
    /// is the one surfaced; every later continuation is skipped.
    fn and_then<Next, F>(self, f: F) -> AndThen<Self, F>
    where
        Next: Task<Error = Self::Error>,
        F: FnOnce(Self::Output) -> Next + Send,
    {
        AndThen { inner: self, f }
    }

    /// Recover from a failure with another computation.
    ///
    /// Recovery is always explicit at the call site.
    fn or_else<Next, F>(self, f: F) -> OrElse<Self, F>
    where
        Next: Task<Output = Self::Output>,
        F: FnOnce(Self::Error) -> Next + Send,
    {
        OrElse { inner: self, f }
    }

    /// Apply this computed function to a computed argument.
    ///
    /// Applicative combination: the two sides are independent. Left-biased
    /// on double failure.
    fn apply<TA, B>(self, argument: TA) -> Apply<Self, TA>
    where
        TA: Task<Error = Self::Error>,
        Self::Output: FnOnce(TA::Output) -> B + Send,
        B: Send,
    {
        Apply {
            function: self,
            argument,
        }
    }

    /// Pair with an independent computation. Left-biased on double failure.
    fn zip<TB>(self, other: TB) -> Zip<Self, TB>
    where
        TB: Task<Error = Self::Error>,
    {
        Zip {
            first: self,
            second: other,
        }
    }

    /// Combine with an independent computation via a function of both
    /// values. Left-biased on double failure.
    fn zip_with<TB, F, V>(self, other: TB, f: F) -> ZipWith<Self, TB, F>
    where
        TB: Task<Error = Self::Error>,
        F: FnOnce(Self::Output, TB::Output) -> V + Send,
        V: Send,
    {
        ZipWith {
            first: self,
            second: other,
            f,
        }
    }

    /// Attach a breadcrumb to any failure this computation produces.
    ///
    /// See [`ContextError`](crate::ContextError).
    fn context(self, message: impl Into<String>) -> Context<Self> {
        Context {
            inner: self,
            message: message.into(),
        }
    }

    /// Convert to a boxed computation for type erasure.
    ///
    /// Needed for storing descriptions in collections, recursion, and match
    /// arms returning different shapes.
    fn boxed(self) -> BoxedTask<Self::Output, Self::Error>
    where
        Self: 'static,
        Self::Output: 'static,
        Self::Error: 'static,
    {
        BoxedTask::new(self)
    }
}

impl<T: Task> TaskExt for T {}
