//! Span instrumentation for deferred computations.
//!
//! Available behind the `tracing` feature. A [`Traced`] description enters
//! its span for the duration of the run, following the standard
//! `tracing::Instrument` pattern for async code.

use crate::env_task::EnvTask;
use crate::outcome::Outcome;
use crate::task::Task;

/// A deferred computation wrapped in a tracing span.
///
/// Created by [`TaskTracingExt::in_span`] or [`EnvTaskTracingExt::in_span`].
#[derive(Debug)]
pub struct Traced<Inner> {
    pub(crate) inner: Inner,
    pub(crate) span: tracing::Span,
}

impl<Inner> Task for Traced<Inner>
where
    Inner: Task,
{
    type Output = Inner::Output;
    type Error = Inner::Error;

    async fn run(self) -> Outcome<Self::Output, Self::Error> {
        use tracing::Instrument as _;
        self.inner.run().instrument(self.span).await
    }
}

impl<Inner> EnvTask for Traced<Inner>
where
    Inner: EnvTask,
{
    type Output = Inner::Output;
    type Error = Inner::Error;
    type Env = Inner::Env;

    async fn run(self, env: &Self::Env) -> Outcome<Self::Output, Self::Error> {
        use tracing::Instrument as _;
        self.inner.run(env).instrument(self.span).await
    }
}

/// Span instrumentation for [`Task`] pipelines.
pub trait TaskTracingExt: Task {
    /// Wrap this computation in a tracing span.
    ///
    /// The span is entered when the computation executes and exited when it
    /// settles.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use outflow::task::{self, TaskExt};
    /// use outflow::tracing::TaskTracingExt;
    /// use tracing::info_span;
    ///
    /// let computation = task::pure::<_, String>(42)
    ///     .map(|n| n + 1)
    ///     .in_span(info_span!("bump"));
    /// ```
    fn in_span(self, span: tracing::Span) -> Traced<Self> {
        Traced { inner: self, span }
    }
}

impl<T: Task> TaskTracingExt for T {}

/// Span instrumentation for [`EnvTask`] pipelines.
pub trait EnvTaskTracingExt: EnvTask {
    /// Wrap this computation in a tracing span.
    ///
    /// The span is entered when the computation executes and exited when it
    /// settles.
    fn in_span(self, span: tracing::Span) -> Traced<Self> {
        Traced { inner: self, span }
    }
}

impl<T: EnvTask> EnvTaskTracingExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env_task;
    use crate::task::{self, TaskExt};

    fn init_test_subscriber() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    #[tokio::test]
    async fn test_span_passes_value_through() {
        init_test_subscriber();
        let computation = task::pure::<_, String>(42).in_span(tracing::info_span!("passthrough"));
        assert_eq!(Task::run(computation).await, Outcome::success(42));
    }

    #[tokio::test]
    async fn test_failure_in_span_propagates() {
        let computation =
            task::fail::<i32, _>("oops".to_string()).in_span(tracing::info_span!("failing"));
        assert_eq!(Task::run(computation).await, Outcome::failure("oops".to_string()));
    }

    #[tokio::test]
    async fn test_env_task_span() {
        let computation = env_task::asks::<_, String, i32, _>(|env| env * 2)
            .in_span(tracing::debug_span!("doubling"));
        assert_eq!(EnvTask::run(computation, &21).await, Outcome::success(42));
    }

    #[tokio::test]
    async fn test_nested_spans_compose() {
        let inner = task::pure::<_, String>(1).in_span(tracing::debug_span!("inner"));
        let outer = inner
            .and_then(|n| task::pure(n + 1))
            .in_span(tracing::debug_span!("outer"));
        assert_eq!(Task::run(outer).await, Outcome::success(2));
    }
}
