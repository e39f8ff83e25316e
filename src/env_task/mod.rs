//! A deferred computation that reads an environment of dependencies.
//!
//! An [`EnvTask`] is a pure function of an environment value to a deferred
//! fallible computation: dependency injection, asynchrony, and typed
//! failure in one shape. It is this crate's workhorse for application
//! pipelines - "fetch a user, look up their best friend, stamp the current
//! year" - where each leaf reads its own slice of the environment.
//!
//! # The Environment Is a Capability Record
//!
//! Leaves are written against capability traits, not a concrete struct:
//!
//! ```rust
//! use outflow::env_task::prelude::*;
//! use outflow::Outcome;
//!
//! trait Clock {
//!     fn this_year(&self) -> i32;
//! }
//!
//! fn current_year<Env>() -> impl EnvTask<Output = i32, Error = String, Env = Env>
//! where
//!     Env: Clock + Clone + Send + Sync,
//! {
//!     asks(|env: &Env| env.this_year())
//! }
//!
//! #[derive(Clone)]
//! struct Prod;
//! impl Clock for Prod {
//!     fn this_year(&self) -> i32 {
//!         2024
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! assert_eq!(current_year().run(&Prod).await, Outcome::success(2024));
//! # });
//! ```
//!
//! Composing computations unions their capability bounds: a pipeline built
//! from a leaf requiring `Env: UserStore` and one requiring `Env: Clock`
//! requires `Env: UserStore + Clock`, and one terminal environment value
//! carrying both capabilities runs the whole thing. The union is computed
//! by the type system; there is no registry.
//!
//! # Record Accumulation
//!
//! Multi-value pipelines grow a tuple record: [`zip`](EnvTaskExt::zip) /
//! [`zip3`](constructors::zip3) append independent bindings,
//! [`with`](EnvTaskExt::with) appends a binding that reads what came
//! before, and a final [`map`](EnvTaskExt::map) destructures into the named
//! result. Destructuring patterns play the role of field names.
//!
//! # Ordering and Failure
//!
//! Within one sequential chain (`and_then`, `with`), step N's effects
//! complete before step N+1 begins. Between the sides of `zip`/`apply` no
//! ordering is promised - they evaluate sequentially today, and
//! [`par2`](parallel::par2)/[`par3`](parallel::par3) run them concurrently;
//! correctness must not depend on which. The first failure short-circuits
//! the chain, and the environment is never consulted after it.

pub mod boxed;
pub mod combinators;
pub mod constructors;
pub mod ext;
pub mod parallel;
pub mod prelude;
pub mod reader;
mod trait_def;

pub use boxed::{BoxFuture, BoxedEnvTask};
pub use combinators::{
    AndThen, Apply, Context, Fail, FromAsync, FromFn, FromOutcome, FromTask, Map, MapFailure,
    OrElse, Pure, Tap, With, Zip, Zip3, Zip4, ZipWith,
};
pub use constructors::{
    ask, asks, fail, from_async, from_fn, from_optional, from_outcome, from_task, local, pure,
    zip3, zip4,
};
pub use ext::EnvTaskExt;
pub use parallel::{par2, par3};
pub use reader::{Ask, Asks, Local};
pub use trait_def::EnvTask;

#[cfg(test)]
mod tests;
