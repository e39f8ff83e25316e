//! # Outflow
//!
//! > *Effects flow out; failures don't flow past.*
//!
//! A Rust library of composable effect containers.
//!
//! ## Philosophy
//!
//! Outflow models the three ways a computation can refuse to hand you a
//! plain value - absence, typed failure, and deferred (async) execution -
//! as four container shapes that share one combinator vocabulary:
//!
//! - [`Optional<T>`] - a value that may be absent, with no reason attached
//! - [`Outcome<T, E>`] - a value that may have failed with a typed error
//! - [`Task`](task::Task) - a deferred computation resolving to an [`Outcome`]
//! - [`EnvTask`](env_task::EnvTask) - a deferred computation that
//!   additionally reads an environment of dependencies supplied at run time
//!
//! Pipelines built from these containers short-circuit at the first
//! absence/failure: later steps never run, and the failure propagates
//! unchanged. Failures are always values returned from combinators, never
//! panics or exceptions.
//!
//! ## Quick Example
//!
//! ```rust
//! use outflow::{Optional, Outcome};
//!
//! fn safe_divide(a: i32, b: i32) -> Optional<i32> {
//!     Optional::from_predicate(b, |n| *n != 0).map(|n| a / n)
//! }
//!
//! assert_eq!(safe_divide(10, 2), Optional::present(5));
//! assert_eq!(safe_divide(10, 0), Optional::absent());
//!
//! #[derive(Debug, PartialEq)]
//! struct DivisionByZero;
//!
//! fn safe_divide_checked(a: i32, b: i32) -> Outcome<i32, DivisionByZero> {
//!     Outcome::from_optional(safe_divide(a, b), || DivisionByZero)
//! }
//!
//! assert_eq!(safe_divide_checked(10, 0), Outcome::failure(DivisionByZero));
//! ```
//!
//! ## Deferred Pipelines
//!
//! The two deferred containers follow the `Future`/`Iterator` design:
//! combinators return concrete types (no heap allocation), and `.boxed()`
//! is the opt-in type-erasure escape hatch for collections, recursion, and
//! match arms. See the [`task`] and [`env_task`] modules.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod context;
pub mod env_task;
pub mod optional;
pub mod outcome;
pub mod predicate;
pub mod task;
#[cfg(feature = "tracing")]
pub mod tracing;

// Re-exports
pub use context::ContextError;
pub use env_task::{BoxedEnvTask, EnvTask, EnvTaskExt};
pub use optional::Optional;
pub use outcome::Outcome;
pub use predicate::{Predicate, PredicateExt};
pub use task::{BoxedTask, Task, TaskExt};

/// Prelude module for convenient imports.
///
/// Exports the container types and their extension traits. The free-function
/// constructors for the deferred containers stay module-qualified
/// (`task::pure`, `env_task::asks`, ...) because the two modules
/// intentionally mirror each other's names; glob-import
/// [`env_task::prelude`] instead when working inside one layer.
pub mod prelude {
    pub use crate::context::ContextError;
    pub use crate::env_task::{BoxedEnvTask, EnvTask, EnvTaskExt};
    pub use crate::optional::Optional;
    pub use crate::outcome::Outcome;
    pub use crate::predicate::{Predicate, PredicateExt};
    pub use crate::task::{BoxedTask, Task, TaskExt};
    #[cfg(feature = "tracing")]
    pub use crate::tracing::{EnvTaskTracingExt, TaskTracingExt};
    pub use crate::{env_task, task};
}
