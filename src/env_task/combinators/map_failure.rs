//! MapFailure - transform the failure value.

use crate::env_task::trait_def::EnvTask;
use crate::outcome::Outcome;

/// Transforms the failure value of the inner computation. A success
/// propagates unchanged.
pub struct MapFailure<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for MapFailure<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapFailure")
            .field("inner", &"<env task>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, E2> EnvTask for MapFailure<Inner, F>
where
    Inner: EnvTask,
    F: FnOnce(Inner::Error) -> E2 + Send,
    E2: Send,
{
    type Output = Inner::Output;
    type Error = E2;
    type Env = Inner::Env;

    async fn run(self, env: &Self::Env) -> Outcome<Inner::Output, E2> {
        self.inner.run(env).await.map_failure(self.f)
    }
}
