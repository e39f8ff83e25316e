//! Pure - a computation that succeeds without touching the environment.

use std::marker::PhantomData;

use crate::env_task::trait_def::EnvTask;
use crate::outcome::Outcome;

/// A computation that immediately succeeds with a stored value, ignoring
/// the environment.
pub struct Pure<T, E, Env> {
    pub(crate) value: T,
    pub(crate) _marker: PhantomData<(E, Env)>,
}

impl<T, E, Env> std::fmt::Debug for Pure<T, E, Env> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pure").field("value", &"<value>").finish()
    }
}

impl<T, E, Env> EnvTask for Pure<T, E, Env>
where
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    type Output = T;
    type Error = E;
    type Env = Env;

    async fn run(self, _env: &Env) -> Outcome<T, E> {
        Outcome::Success(self.value)
    }
}
