//! Error types for the dskit library.
//!
//! ## Key Components
//!
//! - [`Error`]: the single error type shared by every container and
//!   algorithm helper. Variants map one-to-one onto the precondition they
//!   report (empty container, missing key, foreign node handle, …).
//! - [`Result`]: crate-wide alias for `std::result::Result<T, Error>`.
//!
//! ## Example Usage
//!
//! ```
//! use dskit::ds::stack::Stack;
//! use dskit::error::Error;
//!
//! let mut stack: Stack<i32> = Stack::new();
//! assert!(matches!(stack.pop(), Err(Error::EmptyContainer(_))));
//!
//! stack.push(7);
//! assert_eq!(stack.pop().unwrap(), 7);
//! ```

use std::fmt;
use std::result;

/// Crate-wide result alias.
pub type Result<T> = result::Result<T, Error>;

/// Error returned when a container or algorithm precondition is violated.
///
/// Every failure is surfaced at the call that violated the precondition;
/// no container attempts recovery or leaves partial state behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required argument failed validation (insufficient destination
    /// space, mismatched slice lengths, and similar).
    InvalidArgument(String),
    /// A removal or inspection was invoked on an empty container. The
    /// payload names the rejected operation.
    EmptyContainer(&'static str),
    /// A keyed `get` found no entry for the requested key.
    KeyNotFound,
    /// A node handle does not address a live node of the target list.
    InvalidOperation(String),
    /// A graph operation named a vertex absent from the adjacency map.
    VertexNotFound,
}

impl Error {
    /// Creates an `InvalidArgument` error with the given description.
    #[inline]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Creates an `InvalidOperation` error with the given description.
    #[inline]
    pub fn invalid_operation(msg: impl Into<String>) -> Self {
        Error::InvalidOperation(msg.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Error::EmptyContainer(op) => write!(f, "{op} on empty container"),
            Error::KeyNotFound => f.write_str("key not found"),
            Error::InvalidOperation(msg) => write!(f, "invalid operation: {msg}"),
            Error::VertexNotFound => f.write_str("vertex not found"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_operation_for_empty_container() {
        let err = Error::EmptyContainer("pop");
        assert_eq!(err.to_string(), "pop on empty container");
    }

    #[test]
    fn display_includes_argument_message() {
        let err = Error::invalid_argument("offset past end");
        assert_eq!(err.to_string(), "invalid argument: offset past end");
    }

    #[test]
    fn display_for_keyed_lookups() {
        assert_eq!(Error::KeyNotFound.to_string(), "key not found");
        assert_eq!(Error::VertexNotFound.to_string(), "vertex not found");
    }

    #[test]
    fn debug_includes_variant_and_message() {
        let err = Error::invalid_operation("node belongs to another list");
        let dbg = format!("{:?}", err);
        assert!(dbg.contains("InvalidOperation"));
        assert!(dbg.contains("another list"));
    }

    #[test]
    fn clone_and_eq() {
        let a = Error::EmptyContainer("dequeue");
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, Error::EmptyContainer("pop"));
    }

    #[test]
    fn implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<Error>();
    }
}
