//! Zip - combine independent computations into tuples.

use crate::env_task::trait_def::EnvTask;
use crate::outcome::Outcome;

/// Combines two independent computations into a pair.
///
/// This is the parallel-eligible record-building step: neither side depends
/// on the other's value, both read the same environment. Evaluation here is
/// sequential (first, then second) for predictability; reach for
/// [`par2`](crate::env_task::parallel::par2) when the sides should actually
/// overlap. When both fail, the first side's failure is the one surfaced
/// (left bias).
#[derive(Debug)]
pub struct Zip<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<A, B> EnvTask for Zip<A, B>
where
    A: EnvTask,
    B: EnvTask<Error = A::Error, Env = A::Env>,
{
    type Output = (A::Output, B::Output);
    type Error = A::Error;
    type Env = A::Env;

    async fn run(self, env: &Self::Env) -> Outcome<(A::Output, B::Output), A::Error> {
        match self.first.run(env).await {
            Outcome::Success(a) => self.second.run(env).await.map(|b| (a, b)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }
}

/// Combines three independent computations into a flat tuple.
#[derive(Debug)]
pub struct Zip3<A, B, C> {
    pub(crate) first: A,
    pub(crate) second: B,
    pub(crate) third: C,
}

impl<A, B, C> EnvTask for Zip3<A, B, C>
where
    A: EnvTask,
    B: EnvTask<Error = A::Error, Env = A::Env>,
    C: EnvTask<Error = A::Error, Env = A::Env>,
{
    type Output = (A::Output, B::Output, C::Output);
    type Error = A::Error;
    type Env = A::Env;

    async fn run(self, env: &Self::Env) -> Outcome<Self::Output, A::Error> {
        match self.first.run(env).await {
            Outcome::Success(a) => match self.second.run(env).await {
                Outcome::Success(b) => self.third.run(env).await.map(|c| (a, b, c)),
                Outcome::Failure(error) => Outcome::Failure(error),
            },
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }
}

/// Combines four independent computations into a flat tuple.
#[derive(Debug)]
pub struct Zip4<A, B, C, D> {
    pub(crate) first: A,
    pub(crate) second: B,
    pub(crate) third: C,
    pub(crate) fourth: D,
}

impl<A, B, C, D> EnvTask for Zip4<A, B, C, D>
where
    A: EnvTask,
    B: EnvTask<Error = A::Error, Env = A::Env>,
    C: EnvTask<Error = A::Error, Env = A::Env>,
    D: EnvTask<Error = A::Error, Env = A::Env>,
{
    type Output = (A::Output, B::Output, C::Output, D::Output);
    type Error = A::Error;
    type Env = A::Env;

    async fn run(self, env: &Self::Env) -> Outcome<Self::Output, A::Error> {
        match self.first.run(env).await {
            Outcome::Success(a) => match self.second.run(env).await {
                Outcome::Success(b) => match self.third.run(env).await {
                    Outcome::Success(c) => self.fourth.run(env).await.map(|d| (a, b, c, d)),
                    Outcome::Failure(error) => Outcome::Failure(error),
                },
                Outcome::Failure(error) => Outcome::Failure(error),
            },
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }
}
