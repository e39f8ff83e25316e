//! Fail - a computation that fails without touching the environment.

use std::marker::PhantomData;

use crate::env_task::trait_def::EnvTask;
use crate::outcome::Outcome;

/// A computation that immediately fails with a stored error, ignoring the
/// environment.
pub struct Fail<T, E, Env> {
    pub(crate) error: E,
    pub(crate) _marker: PhantomData<(T, Env)>,
}

impl<T, E, Env> std::fmt::Debug for Fail<T, E, Env> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fail").field("error", &"<error>").finish()
    }
}

impl<T, E, Env> EnvTask for Fail<T, E, Env>
where
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    type Output = T;
    type Error = E;
    type Env = Env;

    async fn run(self, _env: &Env) -> Outcome<T, E> {
        Outcome::Failure(self.error)
    }
}
