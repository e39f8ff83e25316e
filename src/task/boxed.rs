//! Type-erased deferred computations.
//!
//! Combinators return concrete nested types, which cannot live together in
//! a `Vec` or be returned from different match arms. [`BoxedTask`] trades
//! one allocation for a single nameable type.

use std::future::Future;
use std::pin::Pin;

use crate::outcome::Outcome;
use crate::task::trait_def::Task;

/// A boxed future that is `Send`.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A type-erased deferred computation.
///
/// # Example
///
/// ```rust
/// use outflow::task::{self, BoxedTask, Task, TaskExt};
/// use outflow::Outcome;
///
/// # tokio_test::block_on(async {
/// let steps: Vec<BoxedTask<i32, String>> = vec![
///     task::pure(1).boxed(),
///     task::pure(2).map(|n| n * 2).boxed(),
/// ];
///
/// let mut total = 0;
/// for step in steps {
///     if let Outcome::Success(n) = step.run().await {
///         total += n;
///     }
/// }
/// assert_eq!(total, 5);
/// # });
/// ```
pub struct BoxedTask<T, E> {
    run_fn: Box<dyn FnOnce() -> BoxFuture<'static, Outcome<T, E>> + Send>,
}

impl<T, E> std::fmt::Debug for BoxedTask<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxedTask")
            .field("run_fn", &"<function>")
            .finish()
    }
}

impl<T, E> BoxedTask<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Erase the concrete type of any deferred computation.
    pub fn new<Inner>(inner: Inner) -> Self
    where
        Inner: Task<Output = T, Error = E> + 'static,
    {
        BoxedTask {
            run_fn: Box::new(move || Box::pin(inner.run())),
        }
    }
}

impl<T, E> Task for BoxedTask<T, E>
where
    T: Send,
    E: Send,
{
    type Output = T;
    type Error = E;

    fn run(self) -> impl Future<Output = Outcome<T, E>> + Send {
        (self.run_fn)()
    }
}
