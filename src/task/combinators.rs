//! Combinator types for [`Task`].
//!
//! Each struct is a self-contained description; composing them allocates
//! nothing. Constructed through the free functions in
//! [`constructors`](crate::task::constructors) and the methods on
//! [`TaskExt`](crate::task::TaskExt).

use std::future::Future;
use std::marker::PhantomData;

use crate::context::ContextError;
use crate::outcome::Outcome;
use crate::task::trait_def::Task;

/// A computation that immediately succeeds with a stored value.
pub struct Pure<T, E> {
    pub(crate) value: T,
    pub(crate) _marker: PhantomData<E>,
}

impl<T, E> std::fmt::Debug for Pure<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pure").field("value", &"<value>").finish()
    }
}

impl<T, E> Task for Pure<T, E>
where
    T: Send,
    E: Send,
{
    type Output = T;
    type Error = E;

    async fn run(self) -> Outcome<T, E> {
        Outcome::Success(self.value)
    }
}

/// A computation that immediately fails with a stored error.
pub struct Fail<T, E> {
    pub(crate) error: E,
    pub(crate) _marker: PhantomData<T>,
}

impl<T, E> std::fmt::Debug for Fail<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fail").field("error", &"<error>").finish()
    }
}

impl<T, E> Task for Fail<T, E>
where
    T: Send,
    E: Send,
{
    type Output = T;
    type Error = E;

    async fn run(self) -> Outcome<T, E> {
        Outcome::Failure(self.error)
    }
}

/// A computation resolved ahead of time.
#[derive(Debug)]
pub struct FromOutcome<T, E> {
    pub(crate) outcome: Outcome<T, E>,
}

impl<T, E> Task for FromOutcome<T, E>
where
    T: Send,
    E: Send,
{
    type Output = T;
    type Error = E;

    async fn run(self) -> Outcome<T, E> {
        self.outcome
    }
}

/// An external asynchronous operation with its rejection mapping.
///
/// The wrapped future's error passes through the stored mapping, so the
/// failure that reaches the pipeline is always the caller's typed error.
pub struct TryFuture<F, H> {
    pub(crate) f: F,
    pub(crate) on_reject: H,
}

impl<F, H> std::fmt::Debug for TryFuture<F, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TryFuture")
            .field("f", &"<function>")
            .field("on_reject", &"<function>")
            .finish()
    }
}

impl<F, Fut, T, Err, H, E> Task for TryFuture<F, H>
where
    F: FnOnce() -> Fut + Send,
    Fut: Future<Output = Result<T, Err>> + Send,
    H: FnOnce(Err) -> E + Send,
    T: Send,
    E: Send,
{
    type Output = T;
    type Error = E;

    async fn run(self) -> Outcome<T, E> {
        match (self.f)().await {
            Ok(value) => Outcome::Success(value),
            Err(rejection) => Outcome::Failure((self.on_reject)(rejection)),
        }
    }
}

/// Transforms the success value of the inner computation.
pub struct Map<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for Map<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("inner", &"<task>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, U> Task for Map<Inner, F>
where
    Inner: Task,
    F: FnOnce(Inner::Output) -> U + Send,
    U: Send,
{
    type Output = U;
    type Error = Inner::Error;

    async fn run(self) -> Outcome<U, Inner::Error> {
        self.inner.run().await.map(self.f)
    }
}

/// Transforms the failure value of the inner computation.
pub struct MapFailure<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for MapFailure<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapFailure")
            .field("inner", &"<task>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, E2> Task for MapFailure<Inner, F>
where
    Inner: Task,
    F: FnOnce(Inner::Error) -> E2 + Send,
    E2: Send,
{
    type Output = Inner::Output;
    type Error = E2;

    async fn run(self) -> Outcome<Inner::Output, E2> {
        self.inner.run().await.map_failure(self.f)
    }
}

/// Chains a dependent computation after the inner one.
///
/// The continuation runs only on success; a failure short-circuits and
/// propagates unchanged.
pub struct AndThen<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for AndThen<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AndThen")
            .field("inner", &"<task>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, Next> Task for AndThen<Inner, F>
where
    Inner: Task,
    Next: Task<Error = Inner::Error>,
    F: FnOnce(Inner::Output) -> Next + Send,
{
    type Output = Next::Output;
    type Error = Inner::Error;

    async fn run(self) -> Outcome<Next::Output, Inner::Error> {
        match self.inner.run().await {
            Outcome::Success(value) => (self.f)(value).run().await,
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }
}

/// Recovers from a failure with another computation.
pub struct OrElse<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for OrElse<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrElse")
            .field("inner", &"<task>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, Next> Task for OrElse<Inner, F>
where
    Inner: Task,
    Next: Task<Output = Inner::Output>,
    F: FnOnce(Inner::Error) -> Next + Send,
{
    type Output = Inner::Output;
    type Error = Next::Error;

    async fn run(self) -> Outcome<Inner::Output, Next::Error> {
        match self.inner.run().await {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => (self.f)(error).run().await,
        }
    }
}

/// Applies a computed function to a computed argument.
///
/// The two sides are independent of each other's value. Evaluation is
/// sequential, function side first; when both sides fail, the function
/// side's failure is the one surfaced (left bias).
pub struct Apply<TF, TA> {
    pub(crate) function: TF,
    pub(crate) argument: TA,
}

impl<TF, TA> std::fmt::Debug for Apply<TF, TA> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Apply")
            .field("function", &"<task>")
            .field("argument", &"<task>")
            .finish()
    }
}

impl<TF, TA, F, B> Task for Apply<TF, TA>
where
    TF: Task<Output = F>,
    TA: Task<Error = TF::Error>,
    F: FnOnce(TA::Output) -> B + Send,
    B: Send,
{
    type Output = B;
    type Error = TF::Error;

    async fn run(self) -> Outcome<B, TF::Error> {
        match self.function.run().await {
            Outcome::Success(f) => self.argument.run().await.map(f),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }
}

/// Combines two independent computations into a pair.
///
/// Evaluation is sequential (first, then second); when both fail, the first
/// side's failure is the one surfaced (left bias).
#[derive(Debug)]
pub struct Zip<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<A, B> Task for Zip<A, B>
where
    A: Task,
    B: Task<Error = A::Error>,
{
    type Output = (A::Output, B::Output);
    type Error = A::Error;

    async fn run(self) -> Outcome<(A::Output, B::Output), A::Error> {
        match self.first.run().await {
            Outcome::Success(a) => self.second.run().await.map(|b| (a, b)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }
}

/// Combines two independent computations with a function of both values.
///
/// Same bias and ordering as [`Zip`], without the intermediate tuple.
pub struct ZipWith<A, B, F> {
    pub(crate) first: A,
    pub(crate) second: B,
    pub(crate) f: F,
}

impl<A, B, F> std::fmt::Debug for ZipWith<A, B, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZipWith")
            .field("first", &"<task>")
            .field("second", &"<task>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<A, B, F, V> Task for ZipWith<A, B, F>
where
    A: Task,
    B: Task<Error = A::Error>,
    F: FnOnce(A::Output, B::Output) -> V + Send,
    V: Send,
{
    type Output = V;
    type Error = A::Error;

    async fn run(self) -> Outcome<V, A::Error> {
        match self.first.run().await {
            Outcome::Success(a) => {
                let f = self.f;
                self.second.run().await.map(|b| f(a, b))
            }
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }
}

/// Attaches a breadcrumb to any failure the inner computation produces.
pub struct Context<Inner> {
    pub(crate) inner: Inner,
    pub(crate) message: String,
}

impl<Inner> std::fmt::Debug for Context<Inner> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("inner", &"<task>")
            .field("message", &self.message)
            .finish()
    }
}

impl<Inner> Task for Context<Inner>
where
    Inner: Task,
{
    type Output = Inner::Output;
    type Error = ContextError<Inner::Error>;

    async fn run(self) -> Outcome<Inner::Output, ContextError<Inner::Error>> {
        self.inner
            .run()
            .await
            .map_failure(|error| ContextError::new(error).context(self.message))
    }
}
