//! Reader operations for environment access.
//!
//! - [`Ask`] - the whole environment (cloned)
//! - [`Asks`] - a value projected out of the environment
//! - [`Local`] - run a computation against a transformed environment

use std::marker::PhantomData;

use crate::env_task::trait_def::EnvTask;
use crate::outcome::Outcome;

/// Yields the whole environment, cloned.
pub struct Ask<E, Env> {
    _marker: PhantomData<(E, Env)>,
}

impl<E, Env> std::fmt::Debug for Ask<E, Env> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ask").finish()
    }
}

impl<E, Env> Ask<E, Env> {
    pub(crate) fn new() -> Self {
        Ask {
            _marker: PhantomData,
        }
    }
}

impl<E, Env> Default for Ask<E, Env> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, Env> EnvTask for Ask<E, Env>
where
    E: Send,
    Env: Clone + Send + Sync,
{
    type Output = Env;
    type Error = E;
    type Env = Env;

    fn run(self, env: &Env) -> impl std::future::Future<Output = Outcome<Env, E>> + Send {
        let snapshot = env.clone();
        async move { Outcome::Success(snapshot) }
    }
}

/// Yields a value projected out of the environment.
///
/// This is how synchronous capabilities (clocks, configuration reads) enter
/// a pipeline.
pub struct Asks<F, E, Env> {
    pub(crate) f: F,
    _marker: PhantomData<(E, Env)>,
}

impl<F, E, Env> std::fmt::Debug for Asks<F, E, Env> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Asks").field("f", &"<function>").finish()
    }
}

impl<F, E, Env> Asks<F, E, Env> {
    pub(crate) fn new(f: F) -> Self {
        Asks {
            f,
            _marker: PhantomData,
        }
    }
}

impl<F, U, E, Env> EnvTask for Asks<F, E, Env>
where
    F: FnOnce(&Env) -> U + Send,
    U: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    type Output = U;
    type Error = E;
    type Env = Env;

    async fn run(self, env: &Env) -> Outcome<U, E> {
        Outcome::Success((self.f)(env))
    }
}

/// Runs an inner computation against a transformed environment.
///
/// The transformation adapts the outer environment into the one the inner
/// computation requires; this is how a pipeline written against a narrow
/// environment is embedded in a wider one.
pub struct Local<Inner, F, Env2> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
    pub(crate) _marker: PhantomData<Env2>,
}

impl<Inner, F, Env2> std::fmt::Debug for Local<Inner, F, Env2> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Local")
            .field("inner", &"<env task>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, Env2> Local<Inner, F, Env2> {
    pub(crate) fn new(inner: Inner, f: F) -> Self {
        Local {
            inner,
            f,
            _marker: PhantomData,
        }
    }
}

impl<Inner, F, Env2> EnvTask for Local<Inner, F, Env2>
where
    Inner: EnvTask,
    F: FnOnce(&Env2) -> Inner::Env + Send,
    Env2: Clone + Send + Sync,
{
    type Output = Inner::Output;
    type Error = Inner::Error;
    type Env = Env2;

    fn run(
        self,
        env: &Env2,
    ) -> impl std::future::Future<Output = Outcome<Self::Output, Self::Error>> + Send {
        let inner_env = (self.f)(env);
        async move { self.inner.run(&inner_env).await }
    }
}
