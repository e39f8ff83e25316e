//! Extension trait providing combinator methods for all EnvTasks.

use crate::env_task::boxed::BoxedEnvTask;
use crate::env_task::combinators::{
    AndThen, Apply, Context, Map, MapFailure, OrElse, Tap, With, Zip, ZipWith,
};
use crate::env_task::reader::Local;
use crate::env_task::trait_def::EnvTask;
use std::marker::PhantomData;

/// Combinator methods, implemented for every [`EnvTask`].
///
/// All methods return concrete description types; nothing executes until
/// [`run`](EnvTask::run) is awaited with an environment.
///
/// # Example
///
/// ```rust
/// use outflow::env_task::prelude::*;
/// use outflow::Outcome;
///
/// #[derive(Clone)]
/// struct Env {
///     base: i32,
/// }
///
/// # tokio_test::block_on(async {
/// let computation = asks::<_, String, Env, _>(|env| env.base)
///     .map(|n| n + 1)
///     .and_then(|n| pure(n * 2));
///
/// assert_eq!(computation.run(&Env { base: 20 }).await, Outcome::success(42));
/// # });
/// ```
pub trait EnvTaskExt: EnvTask {
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
    /// The continuation receives the resolved value and may read the
    /// environment again. The first failure in a chain is the one surfaced;
    /// every later continuation is skipped and the environment is not
    /// consulted again.
    fn and_then<Next, F>(self, f: F) -> AndThen<Self, F>
    where
        Next: EnvTask<Error = Self::Error, Env = Self::Env>,
        F: FnOnce(Self::Output) -> Next + Send,
    {
        AndThen { inner: self, f }
    }

    /// Recover from a failure with another computation.
    ///
    /// Recovery is always explicit at the call site.
    fn or_else<Next, F>(self, f: F) -> OrElse<Self, F>
    where
        Next: EnvTask<Output = Self::Output, Env = Self::Env>,
        F: FnOnce(Self::Error) -> Next + Send,
    {
        OrElse { inner: self, f }
    }

    /// Apply this computed function to a computed argument.
    ///
    /// Applicative combination: the two sides are independent of each
    /// other's value. Left-biased on double failure.
    fn apply<TA, B>(self, argument: TA) -> Apply<Self, TA>
    where
        TA: EnvTask<Error = Self::Error, Env = Self::Env>,
        Self::Output: FnOnce(TA::Output) -> B + Send,
        B: Send,
    {
        Apply {
            function: self,
            argument,
        }
    }

    /// Pair with an independent computation.
    ///
    /// The parallel-eligible record-building step; left-biased on double
    /// failure.
    fn zip<TB>(self, other: TB) -> Zip<Self, TB>
    where
        TB: EnvTask<Error = Self::Error, Env = Self::Env>,
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
        TB: EnvTask<Error = Self::Error, Env = Self::Env>,
        F: FnOnce(Self::Output, TB::Output) -> V + Send,
        V: Send,
    {
        ZipWith {
            first: self,
            second: other,
            f,
        }
    }

    /// Append a sequential binding that reads everything bound so far.
    ///
    /// Yields `(prior, new)`; see [`With`] for the record-building idiom.
    fn with<Next, F>(self, f: F) -> With<Self, F, Next>
    where
        Self::Output: Clone,
        Next: EnvTask<Error = Self::Error, Env = Self::Env>,
        F: FnOnce(&Self::Output) -> Next + Send,
    {
        With {
            inner: self,
            f,
            _marker: PhantomData,
        }
    }

    /// Observe the success value with a side computation, keeping the value.
    fn tap<Side, F>(self, f: F) -> Tap<Self, F, Side>
    where
        Self::Output: Clone,
        Side: EnvTask<Output = (), Error = Self::Error, Env = Self::Env>,
        F: FnOnce(&Self::Output) -> Side + Send,
    {
        Tap {
            inner: self,
            f,
            _marker: PhantomData,
        }
    }

    /// Run this computation against a transformed environment.
    fn local<F, Env2>(self, f: F) -> Local<Self, F, Env2>
    where
        F: FnOnce(&Env2) -> Self::Env + Send,
        Env2: Clone + Send + Sync,
    {
        Local::new(self, f)
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
    /// Needed for collections, recursion, and match arms returning
    /// different shapes. Boxing clones the environment at run time to reach
    /// `'static`.
    fn boxed(self) -> BoxedEnvTask<Self::Output, Self::Error, Self::Env>
    where
        Self: 'static,
        Self::Output: 'static,
        Self::Error: 'static,
        Self::Env: 'static,
    {
        BoxedEnvTask::new(self)
    }
}

impl<T: EnvTask> EnvTaskExt for T {}
