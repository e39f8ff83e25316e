//! Constructor functions for environment-dependent computations.

use std::future::Future;
use std::marker::PhantomData;

use crate::env_task::combinators::{
    Fail, FromAsync, FromFn, FromOutcome, FromTask, Pure, Zip3, Zip4,
};
use crate::env_task::reader::{Ask, Asks, Local};
use crate::env_task::trait_def::EnvTask;
use crate::optional::Optional;
use crate::outcome::Outcome;
use crate::task::Task;

/// A computation that immediately succeeds, ignoring the environment.
///
/// # Example
///
/// ```rust
/// use outflow::env_task::prelude::*;
/// use outflow::Outcome;
///
/// # tokio_test::block_on(async {
/// assert_eq!(pure::<_, String, ()>(42).run(&()).await, Outcome::success(42));
/// # });
/// ```
pub fn pure<T, E, Env>(value: T) -> Pure<T, E, Env>
where
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    Pure {
        value,
        _marker: PhantomData,
    }
}

/// A computation that immediately fails, ignoring the environment.
pub fn fail<T, E, Env>(error: E) -> Fail<T, E, Env>
where
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    Fail {
        error,
        _marker: PhantomData,
    }
}

/// Lift an environment-free computation; the environment is ignored.
///
/// # Example
///
/// ```rust
/// use outflow::env_task::prelude::*;
/// use outflow::{task, Outcome};
///
/// # tokio_test::block_on(async {
/// let lifted = from_task::<_, ()>(task::pure::<_, String>(7));
/// assert_eq!(lifted.run(&()).await, Outcome::success(7));
/// # });
/// ```
pub fn from_task<Inner, Env>(inner: Inner) -> FromTask<Inner, Env>
where
    Inner: Task,
    Env: Clone + Send + Sync,
{
    FromTask {
        inner,
        _marker: PhantomData,
    }
}

/// A computation from a synchronous function of the environment.
///
/// # Example
///
/// ```rust
/// use outflow::env_task::prelude::*;
/// use outflow::Outcome;
///
/// #[derive(Clone)]
/// struct Env {
///     limit: i32,
/// }
///
/// # tokio_test::block_on(async {
/// let checked = from_fn(|env: &Env| {
///     Outcome::from_predicate(9, |n| *n <= env.limit, |n| format!("{n} over limit"))
/// });
/// assert_eq!(checked.run(&Env { limit: 10 }).await, Outcome::success(9));
/// # });
/// ```
pub fn from_fn<F, T, E, Env>(f: F) -> FromFn<F, Env>
where
    F: FnOnce(&Env) -> Outcome<T, E> + Send,
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    FromFn {
        f,
        _marker: PhantomData,
    }
}

/// A computation from an async function of the environment.
///
/// The function reads the environment synchronously and returns the future
/// in which suspension happens.
pub fn from_async<F, Fut, T, E, Env>(f: F) -> FromAsync<F, Env>
where
    F: FnOnce(&Env) -> Fut + Send,
    Fut: Future<Output = Outcome<T, E>> + Send,
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    FromAsync {
        f,
        _marker: PhantomData,
    }
}

/// Lift an already-resolved outcome; the environment is ignored.
pub fn from_outcome<T, E, Env>(outcome: Outcome<T, E>) -> FromOutcome<T, E, Env>
where
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    FromOutcome {
        outcome,
        _marker: PhantomData,
    }
}

/// Lift an optional, turning absence into the supplied typed failure.
pub fn from_optional<T, E, Env>(
    optional: Optional<T>,
    on_absent: impl FnOnce() -> E,
) -> FromOutcome<T, E, Env>
where
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    FromOutcome {
        outcome: Outcome::from_optional(optional, on_absent),
        _marker: PhantomData,
    }
}

/// The whole environment, cloned.
///
/// # Example
///
/// ```rust
/// use outflow::env_task::prelude::*;
/// use outflow::Outcome;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Env {
///     name: String,
/// }
///
/// # tokio_test::block_on(async {
/// let env = Env { name: "prod".into() };
/// assert_eq!(ask::<String, Env>().run(&env).await, Outcome::success(env.clone()));
/// # });
/// ```
pub fn ask<E, Env>() -> Ask<E, Env>
where
    E: Send,
    Env: Clone + Send + Sync,
{
    Ask::new()
}

/// A value projected out of the environment.
///
/// # Example
///
/// ```rust
/// use outflow::env_task::prelude::*;
/// use outflow::Outcome;
///
/// #[derive(Clone)]
/// struct Env {
///     year: i32,
/// }
///
/// # tokio_test::block_on(async {
/// let year = asks::<_, String, Env, _>(|env| env.year);
/// assert_eq!(year.run(&Env { year: 2024 }).await, Outcome::success(2024));
/// # });
/// ```
pub fn asks<U, E, Env, F>(f: F) -> Asks<F, E, Env>
where
    F: FnOnce(&Env) -> U + Send,
    U: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    Asks::new(f)
}

/// Run a computation against a transformed environment.
///
/// Adapts the outer environment into the one the inner computation
/// requires.
pub fn local<Inner, F, Env2>(f: F, inner: Inner) -> Local<Inner, F, Env2>
where
    Inner: EnvTask,
    F: FnOnce(&Env2) -> Inner::Env + Send,
    Env2: Clone + Send + Sync,
{
    Local::new(inner, f)
}

/// Combine three independent computations into a flat tuple.
///
/// Left-biased: the first failure in declaration order is the one surfaced.
pub fn zip3<A, B, C>(first: A, second: B, third: C) -> Zip3<A, B, C>
where
    A: EnvTask,
    B: EnvTask<Error = A::Error, Env = A::Env>,
    C: EnvTask<Error = A::Error, Env = A::Env>,
{
    Zip3 {
        first,
        second,
        third,
    }
}

/// Combine four independent computations into a flat tuple.
///
/// Left-biased: the first failure in declaration order is the one surfaced.
pub fn zip4<A, B, C, D>(first: A, second: B, third: C, fourth: D) -> Zip4<A, B, C, D>
where
    A: EnvTask,
    B: EnvTask<Error = A::Error, Env = A::Env>,
    C: EnvTask<Error = A::Error, Env = A::Env>,
    D: EnvTask<Error = A::Error, Env = A::Env>,
{
    Zip4 {
        first,
        second,
        third,
        fourth,
    }
}
