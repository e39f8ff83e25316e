//! Apply - applicative combination of a computed function and argument.

use crate::env_task::trait_def::EnvTask;
use crate::outcome::Outcome;

/// Applies a computed function to a computed argument.
///
/// The two sides may both read the environment but are independent of each
/// other's value; this is the parallel-combination primitive. Evaluation is
/// sequential, function side first; use
/// [`par2`](crate::env_task::parallel::par2) when the sides should actually
/// run concurrently. When both sides fail, the function side's failure is
/// the one surfaced (left bias).
pub struct Apply<TF, TA> {
    pub(crate) function: TF,
    pub(crate) argument: TA,
}

impl<TF, TA> std::fmt::Debug for Apply<TF, TA> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Apply")
            .field("function", &"<env task>")
            .field("argument", &"<env task>")
            .finish()
    }
}

impl<TF, TA, F, B> EnvTask for Apply<TF, TA>
where
    TF: EnvTask<Output = F>,
    TA: EnvTask<Error = TF::Error, Env = TF::Env>,
    F: FnOnce(TA::Output) -> B + Send,
    B: Send,
{
    type Output = B;
    type Error = TF::Error;
    type Env = TF::Env;

    async fn run(self, env: &Self::Env) -> Outcome<B, TF::Error> {
        match self.function.run(env).await {
            Outcome::Success(f) => self.argument.run(env).await.map(f),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }
}
