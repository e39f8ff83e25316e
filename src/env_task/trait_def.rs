//! EnvTask trait definition - environment-dependent deferred computations.

use std::future::Future;

use crate::outcome::Outcome;

/// A deferred computation that reads an environment of dependencies and,
/// when run, produces exactly one [`Outcome`](crate::Outcome).
///
/// An `EnvTask` is a pure function of its environment: the environment is
/// only ever read (`&Env`), and supplying the same value yields an
/// equivalent computation. The environment is a capability record - a
/// read-only bundle of the dependencies (lookups, clocks, clients) the
/// computation's leaves consume.
///
/// # Type Parameters
///
/// * `Output` - the success type (must be `Send`)
/// * `Error` - the typed failure (must be `Send`)
/// * `Env` - the dependencies required to run (must be `Clone + Send + Sync`;
///   `Clone` is what boxing needs to reach `'static`, and stays cheap when
///   the record holds `Arc`-wrapped resources)
///
/// # Capability Bounds
///
/// Leaves are typically written against capability traits rather than a
/// concrete environment, so the required environment of a composed pipeline
/// is the union of its leaves' bounds - computed by the type system, not a
/// runtime registry:
///
/// ```rust,ignore
/// fn current_year<Env>() -> impl EnvTask<Output = i32, Error = LookupError, Env = Env>
/// where
///     Env: Clock + Clone + Send + Sync,
/// {
///     asks(|env: &Env| env.this_year())
/// }
/// ```
pub trait EnvTask: Sized + Send {
    /// The success type produced by this computation.
    type Output: Send;

    /// The typed failure that may be produced instead.
    type Error: Send;

    /// The environment required to run this computation.
    type Env: Clone + Send + Sync;

    /// Execute the computation against the given environment.
    ///
    /// The environment is read-only for the duration of the run, and it is
    /// not consulted after the first failure: once a step fails, remaining
    /// steps are skipped and the failure propagates unchanged.
    fn run(
        self,
        env: &Self::Env,
    ) -> impl Future<Output = Outcome<Self::Output, Self::Error>> + Send;
}
