//! OrElse - recover from a failure.

use crate::env_task::trait_def::EnvTask;
use crate::outcome::Outcome;

/// Recovers from a failure with another computation.
///
/// The recovery function receives the failure and may read the environment;
/// a success passes through untouched. Recovery is always explicit at the
/// call site.
pub struct OrElse<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for OrElse<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrElse")
            .field("inner", &"<env task>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, Next> EnvTask for OrElse<Inner, F>
where
    Inner: EnvTask,
    Next: EnvTask<Output = Inner::Output, Env = Inner::Env>,
    F: FnOnce(Inner::Error) -> Next + Send,
{
    type Output = Inner::Output;
    type Error = Next::Error;
    type Env = Inner::Env;

    async fn run(self, env: &Self::Env) -> Outcome<Inner::Output, Next::Error> {
        match self.inner.run(env).await {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => (self.f)(error).run(env).await,
        }
    }
}
