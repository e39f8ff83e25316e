//! AndThen - chain dependent computations.

use crate::env_task::trait_def::EnvTask;
use crate::outcome::Outcome;

/// Chains a dependent computation after the inner one.
///
/// The continuation receives the resolved value and may read the
/// environment again; it runs only on success. Once a step fails, the
/// environment is not consulted again and the failure propagates unchanged.
///
/// The chained computation must share the error type; convert with
/// `map_failure` before chaining when the types differ.
pub struct AndThen<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for AndThen<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AndThen")
            .field("inner", &"<env task>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, Next> EnvTask for AndThen<Inner, F>
where
    Inner: EnvTask,
    Next: EnvTask<Error = Inner::Error, Env = Inner::Env>,
    F: FnOnce(Inner::Output) -> Next + Send,
{
    type Output = Next::Output;
    type Error = Inner::Error;
    type Env = Inner::Env;

    async fn run(self, env: &Self::Env) -> Outcome<Next::Output, Inner::Error> {
        match self.inner.run(env).await {
            Outcome::Success(value) => (self.f)(value).run(env).await,
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }
}
