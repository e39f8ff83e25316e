//! FromOutcome - a computation resolved ahead of time.

use std::marker::PhantomData;

use crate::env_task::trait_def::EnvTask;
use crate::outcome::Outcome;

/// An already-resolved computation; the environment is ignored.
#[derive(Debug)]
pub struct FromOutcome<T, E, Env> {
    pub(crate) outcome: Outcome<T, E>,
    pub(crate) _marker: PhantomData<Env>,
}

impl<T, E, Env> EnvTask for FromOutcome<T, E, Env>
where
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    type Output = T;
    type Error = E;
    type Env = Env;

    async fn run(self, _env: &Env) -> Outcome<T, E> {
        self.outcome
    }
}
