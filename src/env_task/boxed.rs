//! Type-erased environment-dependent computations.
//!
//! Boxing clones the environment at run time to give the stored future a
//! `'static` lifetime. This stays cheap when the environment is a record of
//! `Arc`-wrapped resources, which is the recommended shape.

use std::future::Future;
use std::pin::Pin;

use crate::env_task::trait_def::EnvTask;
use crate::outcome::Outcome;

/// A boxed future that is `Send`.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A type-erased environment-dependent computation.
///
/// # Example
///
/// ```rust
/// use outflow::env_task::prelude::*;
/// use outflow::Outcome;
///
/// # tokio_test::block_on(async {
/// let steps: Vec<BoxedEnvTask<i32, String, ()>> = vec![
///     pure(1).boxed(),
///     pure(2).map(|n| n * 2).boxed(),
/// ];
///
/// let mut total = 0;
/// for step in steps {
///     if let Outcome::Success(n) = step.run(&()).await {
///         total += n;
///     }
/// }
/// assert_eq!(total, 5);
/// # });
/// ```
pub struct BoxedEnvTask<T, E, Env> {
    // Takes an owned Env, cloned from the reference at run time.
    run_fn: Box<dyn FnOnce(Env) -> BoxFuture<'static, Outcome<T, E>> + Send>,
}

impl<T, E, Env> std::fmt::Debug for BoxedEnvTask<T, E, Env> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxedEnvTask")
            .field("run_fn", &"<function>")
            .finish()
    }
}

impl<T, E, Env> BoxedEnvTask<T, E, Env>
where
    T: Send + 'static,
    E: Send + 'static,
    Env: Clone + Send + Sync + 'static,
{
    /// Erase the concrete type of any environment-dependent computation.
    pub fn new<Inner>(inner: Inner) -> Self
    where
        Inner: EnvTask<Output = T, Error = E, Env = Env> + 'static,
    {
        BoxedEnvTask {
            run_fn: Box::new(move |env: Env| {
                Box::pin(async move { inner.run(&env).await })
            }),
        }
    }
}

impl<T, E, Env> EnvTask for BoxedEnvTask<T, E, Env>
where
    T: Send,
    E: Send,
    Env: Clone + Send + Sync,
{
    type Output = T;
    type Error = E;
    type Env = Env;

    fn run(self, env: &Env) -> impl Future<Output = Outcome<T, E>> + Send {
        let env_owned = env.clone();
        (self.run_fn)(env_owned)
    }
}
