//! Glob-import surface for the environment-dependent layer.
//!
//! ```rust
//! use outflow::env_task::prelude::*;
//! use outflow::Outcome;
//!
//! # tokio_test::block_on(async {
//! let computation = pure::<_, String, ()>(42).map(|n| n + 1);
//! assert_eq!(computation.run(&()).await, Outcome::success(43));
//! # });
//! ```

// Traits
pub use crate::env_task::ext::EnvTaskExt;
pub use crate::env_task::trait_def::EnvTask;

// Boxing
pub use crate::env_task::boxed::{BoxFuture, BoxedEnvTask};

// Combinator types (for signatures; `impl EnvTask` usually suffices)
pub use crate::env_task::combinators::{
    AndThen, Apply, Context, Fail, FromAsync, FromFn, FromOutcome, FromTask, Map, MapFailure,
    OrElse, Pure, Tap, With, Zip, Zip3, Zip4, ZipWith,
};

// Reader types
pub use crate::env_task::reader::{Ask, Asks, Local};

// Constructors
pub use crate::env_task::constructors::{
    ask, asks, fail, from_async, from_fn, from_optional, from_outcome, from_task, local, pure,
    zip3, zip4,
};

// Concurrent runners
pub use crate::env_task::parallel::{par2, par3};
