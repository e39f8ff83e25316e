//! FromFn - a synchronous environment-dependent computation.

use std::marker::PhantomData;

use crate::env_task::trait_def::EnvTask;
use crate::outcome::Outcome;

/// A computation from a synchronous function of the environment.
///
/// The function is stored directly in the struct and invoked when the
/// computation runs; there is no suspension.
pub struct FromFn<F, Env> {
    pub(crate) f: F,
    pub(crate) _marker: PhantomData<Env>,
}

impl<F, Env> std::fmt::Debug for FromFn<F, Env> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").field("f", &"<function>").finish()
    }
}

impl<F, T, E, Env> EnvTask for FromFn<F, Env>
where
    F: FnOnce(&Env) -> Outcome<T, E> + Send,
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    type Output = T;
    type Error = E;
    type Env = Env;

    async fn run(self, env: &Env) -> Outcome<T, E> {
        (self.f)(env)
    }
}
