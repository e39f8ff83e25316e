//! FromTask - lift an environment-free computation.

use std::marker::PhantomData;

use crate::env_task::trait_def::EnvTask;
use crate::outcome::Outcome;
use crate::task::Task;

/// Lifts a [`Task`](crate::task::Task) into an environment-dependent
/// pipeline; the environment is ignored.
pub struct FromTask<Inner, Env> {
    pub(crate) inner: Inner,
    pub(crate) _marker: PhantomData<Env>,
}

impl<Inner, Env> std::fmt::Debug for FromTask<Inner, Env> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromTask").field("inner", &"<task>").finish()
    }
}

impl<Inner, Env> EnvTask for FromTask<Inner, Env>
where
    Inner: Task,
    Env: Clone + Send + Sync,
{
    type Output = Inner::Output;
    type Error = Inner::Error;
    type Env = Env;

    async fn run(self, _env: &Env) -> Outcome<Inner::Output, Inner::Error> {
        self.inner.run().await
    }
}
