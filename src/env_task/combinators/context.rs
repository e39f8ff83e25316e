//! Context - attach a breadcrumb to failures.

use crate::context::ContextError;
use crate::env_task::trait_def::EnvTask;
use crate::outcome::Outcome;

/// Attaches a breadcrumb to any failure the inner computation produces.
///
/// See [`ContextError`](crate::ContextError).
pub struct Context<Inner> {
    pub(crate) inner: Inner,
    pub(crate) message: String,
}

impl<Inner> std::fmt::Debug for Context<Inner> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("inner", &"<env task>")
            .field("message", &self.message)
            .finish()
    }
}

impl<Inner> EnvTask for Context<Inner>
where
    Inner: EnvTask,
{
    type Output = Inner::Output;
    type Error = ContextError<Inner::Error>;
    type Env = Inner::Env;

    async fn run(self, env: &Self::Env) -> Outcome<Inner::Output, ContextError<Inner::Error>> {
        self.inner
            .run(env)
            .await
            .map_failure(|error| ContextError::new(error).context(self.message))
    }
}
