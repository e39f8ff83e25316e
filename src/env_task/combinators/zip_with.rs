//! ZipWith - combine two independent computations with a function.

use crate::env_task::trait_def::EnvTask;
use crate::outcome::Outcome;

/// Combines two independent computations with a function of both values.
///
/// Same ordering and left bias as [`Zip`](crate::env_task::Zip), without
/// the intermediate tuple.
pub struct ZipWith<A, B, F> {
    pub(crate) first: A,
    pub(crate) second: B,
    pub(crate) f: F,
}

impl<A, B, F> std::fmt::Debug for ZipWith<A, B, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZipWith")
            .field("first", &"<env task>")
            .field("second", &"<env task>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<A, B, F, V> EnvTask for ZipWith<A, B, F>
where
    A: EnvTask,
    B: EnvTask<Error = A::Error, Env = A::Env>,
    F: FnOnce(A::Output, B::Output) -> V + Send,
    V: Send,
{
    type Output = V;
    type Error = A::Error;
    type Env = A::Env;

    async fn run(self, env: &Self::Env) -> Outcome<V, A::Error> {
        match self.first.run(env).await {
            Outcome::Success(a) => {
                let f = self.f;
                self.second.run(env).await.map(|b| f(a, b))
            }
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }
}
