//! Errors returned by tree mutations.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DomError>;

/// Contract violations raised synchronously by [`Document`](crate::Document)
/// mutators.
///
/// None of these are recovered internally. Bulk operations stop at the
/// first error and keep the mutations made before it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// An argument is outside the range the operation accepts.
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// What was wrong with it.
        reason: String,
    },
    /// The operation would break the tree's shape: attaching an element to
    /// itself or to its own subtree, or attaching a node twice.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
    /// Content mutation on an element that cannot hold content.
    #[error("<{tag}> is a void element and cannot hold content")]
    VoidElement {
        /// Tag of the void element.
        tag: String,
    },
}

impl DomError {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_operation(reason: impl Into<String>) -> Self {
        Self::InvalidOperation(reason.into())
    }
}

/// Reject empty or all-whitespace text arguments.
pub(crate) fn require_non_empty(name: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DomError::invalid_argument(name, "must not be empty"));
    }
    Ok(())
}
