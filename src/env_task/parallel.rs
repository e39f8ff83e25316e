//! Concurrent runners for independent computations.
//!
//! The `zip`/`apply` combinators evaluate their sides sequentially. When
//! two or three independent computations should actually overlap, these
//! runners await them together over one shared environment reference. The
//! environment is read-only, so no synchronization is involved, and callers
//! must not depend on either side's effects ordering relative to the other.

use crate::env_task::trait_def::EnvTask;
use crate::outcome::Outcome;

/// Run two independent computations concurrently against one environment.
///
/// Both run to completion; each side's outcome is returned separately.
///
/// # Example
///
/// ```rust
/// use outflow::env_task::prelude::*;
/// use outflow::Outcome;
///
/// # tokio_test::block_on(async {
/// let (a, b) = par2(pure::<_, String, ()>(1), pure::<_, String, ()>("x"), &()).await;
/// assert_eq!(a, Outcome::success(1));
/// assert_eq!(b, Outcome::success("x"));
/// # });
/// ```
pub async fn par2<A, B>(
    first: A,
    second: B,
    env: &A::Env,
) -> (
    Outcome<A::Output, A::Error>,
    Outcome<B::Output, B::Error>,
)
where
    A: EnvTask,
    B: EnvTask<Env = A::Env>,
{
    futures::join!(first.run(env), second.run(env))
}

/// Run three independent computations concurrently against one environment.
pub async fn par3<A, B, C>(
    first: A,
    second: B,
    third: C,
    env: &A::Env,
) -> (
    Outcome<A::Output, A::Error>,
    Outcome<B::Output, B::Error>,
    Outcome<C::Output, C::Error>,
)
where
    A: EnvTask,
    B: EnvTask<Env = A::Env>,
    C: EnvTask<Env = A::Env>,
{
    futures::join!(first.run(env), second.run(env), third.run(env))
}
