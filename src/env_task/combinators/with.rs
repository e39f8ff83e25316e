//! With - sequential record accumulation.

use std::marker::PhantomData;

use crate::env_task::trait_def::EnvTask;
use crate::outcome::Outcome;

/// Appends a sequential binding to the value accumulated so far.
///
/// The continuation borrows everything bound so far, produces the next
/// computation, and the result is the pair `(prior, new)`. Chained calls
/// grow a tuple record whose "field names" are the destructuring patterns
/// at the final `map`:
///
/// ```rust,ignore
/// get_user(first_id)
///     .with(|user| get_user(user.best_friend_id.clone()))
///     .map(|(user, best_friend)| ...)
/// ```
///
/// Because the next computation is built from the prior value, step N's
/// effects complete before step N+1 begins. Use
/// [`zip`](crate::env_task::EnvTaskExt::zip) instead when the new binding
/// is independent of the prior ones.
pub struct With<Inner, F, Next> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
    pub(crate) _marker: PhantomData<Next>,
}

impl<Inner, F, Next> std::fmt::Debug for With<Inner, F, Next> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("With")
            .field("inner", &"<env task>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, Next> EnvTask for With<Inner, F, Next>
where
    Inner: EnvTask,
    Inner::Output: Clone,
    Next: EnvTask<Error = Inner::Error, Env = Inner::Env>,
    F: FnOnce(&Inner::Output) -> Next + Send,
{
    type Output = (Inner::Output, Next::Output);
    type Error = Inner::Error;
    type Env = Inner::Env;

    async fn run(self, env: &Self::Env) -> Outcome<Self::Output, Self::Error> {
        match self.inner.run(env).await {
            Outcome::Success(value) => {
                let prior = value.clone();
                (self.f)(&value).run(env).await.map(|new| (prior, new))
            }
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }
}
