//! Combinator types for [`EnvTask`](crate::env_task::EnvTask).
//!
//! One description type per combinator; composing them allocates nothing.
//! Constructed through the free functions in
//! [`constructors`](crate::env_task::constructors) and the methods on
//! [`EnvTaskExt`](crate::env_task::EnvTaskExt).

mod and_then;
mod apply;
mod context;
mod fail;
mod from_async;
mod from_fn;
mod from_outcome;
mod from_task;
mod map;
mod map_failure;
mod or_else;
mod pure;
mod tap;
mod with;
mod zip;
mod zip_with;

pub use and_then::AndThen;
pub use apply::Apply;
pub use context::Context;
pub use fail::Fail;
pub use from_async::FromAsync;
pub use from_fn::FromFn;
pub use from_outcome::FromOutcome;
pub use from_task::FromTask;
pub use map::Map;
pub use map_failure::MapFailure;
pub use or_else::OrElse;
pub use pure::Pure;
pub use tap::Tap;
pub use with::With;
pub use zip::{Zip, Zip3, Zip4};
pub use zip_with::ZipWith;
