//! FromAsync - an asynchronous environment-dependent computation.

use std::future::Future;
use std::marker::PhantomData;

use crate::env_task::trait_def::EnvTask;
use crate::outcome::Outcome;

/// A computation from an async function of the environment.
///
/// The function reads the environment synchronously to produce its future;
/// the future itself is where suspension happens.
pub struct FromAsync<F, Env> {
    pub(crate) f: F,
    pub(crate) _marker: PhantomData<Env>,
}

impl<F, Env> std::fmt::Debug for FromAsync<F, Env> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromAsync").field("f", &"<function>").finish()
    }
}

impl<F, Fut, T, E, Env> EnvTask for FromAsync<F, Env>
where
    F: FnOnce(&Env) -> Fut + Send,
    Fut: Future<Output = Outcome<T, E>> + Send,
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    type Output = T;
    type Error = E;
    type Env = Env;

    fn run(self, env: &Env) -> impl Future<Output = Outcome<T, E>> + Send {
        (self.f)(env)
    }
}
