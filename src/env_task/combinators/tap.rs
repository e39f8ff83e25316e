//! Tap - observe a value without changing it.

use std::marker::PhantomData;

use crate::env_task::trait_def::EnvTask;
use crate::outcome::Outcome;

/// Runs a side computation against a borrowed success value, then yields
/// the original value.
///
/// Meant for observation (logging, metrics). If the side computation fails,
/// the whole computation fails.
pub struct Tap<Inner, F, Side> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
    pub(crate) _marker: PhantomData<Side>,
}

impl<Inner, F, Side> std::fmt::Debug for Tap<Inner, F, Side> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tap")
            .field("inner", &"<env task>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, Side> EnvTask for Tap<Inner, F, Side>
where
    Inner: EnvTask,
    Inner::Output: Clone,
    Side: EnvTask<Output = (), Error = Inner::Error, Env = Inner::Env>,
    F: FnOnce(&Inner::Output) -> Side + Send,
{
    type Output = Inner::Output;
    type Error = Inner::Error;
    type Env = Inner::Env;

    async fn run(self, env: &Self::Env) -> Outcome<Inner::Output, Inner::Error> {
        match self.inner.run(env).await {
            Outcome::Success(value) => {
                let kept = value.clone();
                (self.f)(&value).run(env).await.map(|()| kept)
            }
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }
}
