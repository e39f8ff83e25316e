//! Breadcrumb trails for typed failures.
//!
//! Failures in this crate are plain values, and a value that crossed five
//! pipeline layers says nothing about which layers it crossed. Wrapping the
//! failure in a [`ContextError`] attaches a trail of operation descriptions
//! as it propagates, so the terminal caller can see what was being attempted.
//!
//! ```rust
//! use outflow::ContextError;
//!
//! let err = ContextError::new("connection refused")
//!     .context("querying the user table")
//!     .context("loading the profile page");
//!
//! assert_eq!(err.failure(), &"connection refused");
//! assert_eq!(err.trail().len(), 2);
//! ```
//!
//! The containers surface this through their `context` combinators:
//! [`Outcome::context`](crate::Outcome::context) for the synchronous layer,
//! and the `context` methods on [`TaskExt`](crate::TaskExt) and
//! [`EnvTaskExt`](crate::EnvTaskExt) for the deferred ones.

use std::error::Error as StdError;
use std::fmt;

/// A typed failure plus a trail of operation descriptions.
///
/// The trail grows from inner to outer: the first entry describes the
/// operation closest to the failure, the last the outermost one.
///
/// ```rust
/// use outflow::ContextError;
///
/// let err = ContextError::new("file not found").context("reading settings");
/// let rendered = format!("{err}");
/// assert!(rendered.contains("file not found"));
/// assert!(rendered.contains("reading settings"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextError<E> {
    failure: E,
    trail: Vec<String>,
}

impl<E> ContextError<E> {
    /// Wrap a failure with an empty trail.
    pub fn new(failure: E) -> Self {
        ContextError {
            failure,
            trail: Vec::new(),
        }
    }

    /// Append an operation description to the trail.
    pub fn context(mut self, message: impl Into<String>) -> Self {
        self.trail.push(message.into());
        self
    }

    /// The wrapped failure.
    pub fn failure(&self) -> &E {
        &self.failure
    }

    /// Unwrap the failure, discarding the trail.
    pub fn into_failure(self) -> E {
        self.failure
    }

    /// The operation descriptions, innermost first.
    pub fn trail(&self) -> &[String] {
        &self.trail
    }
}

impl<E: fmt::Display> fmt::Display for ContextError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.failure)?;
        for step in &self.trail {
            write!(f, "\n  -> {step}")?;
        }
        Ok(())
    }
}

impl<E: StdError + 'static> StdError for ContextError<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_trail() {
        let err = ContextError::new("base");
        assert_eq!(err.failure(), &"base");
        assert!(err.trail().is_empty());
    }

    #[test]
    fn test_trail_order_is_inner_first() {
        let err = ContextError::new("base")
            .context("inner operation")
            .context("outer operation");
        assert_eq!(err.trail(), &["inner operation", "outer operation"]);
    }

    #[test]
    fn test_display_renders_trail() {
        let err = ContextError::new("file not found")
            .context("reading settings")
            .context("starting up");

        let rendered = format!("{err}");
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "file not found");
        assert_eq!(lines[1], "  -> reading settings");
        assert_eq!(lines[2], "  -> starting up");
    }

    #[test]
    fn test_into_failure() {
        let err = ContextError::new("base").context("step");
        assert_eq!(err.into_failure(), "base");
    }

    #[test]
    fn test_source_points_at_failure() {
        use std::error::Error;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = ContextError::new(io).context("reading settings");
        assert!(err.source().is_some());
    }
}
