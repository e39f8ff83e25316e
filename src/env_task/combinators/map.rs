//! Map - transform the success value.

use crate::env_task::trait_def::EnvTask;
use crate::outcome::Outcome;

/// Transforms the success value of the inner computation. A failure
/// propagates unchanged and the function is never invoked on it.
pub struct Map<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for Map<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("inner", &"<env task>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, U> EnvTask for Map<Inner, F>
where
    Inner: EnvTask,
    F: FnOnce(Inner::Output) -> U + Send,
    U: Send,
{
    type Output = U;
    type Error = Inner::Error;
    type Env = Inner::Env;

    async fn run(self, env: &Self::Env) -> Outcome<U, Inner::Error> {
        self.inner.run(env).await.map(self.f)
    }
}
