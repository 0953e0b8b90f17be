//! Errors surfaced by tree operations.

/// Errors triggered by binary tree operations.
///
/// Both variants are caller-recoverable: check
/// [`is_empty`](crate::BinaryTree::is_empty) or
/// [`contains`](crate::BinaryTree::contains) first, or handle the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// An operation that requires a non-empty tree was called on an
    /// empty one.
    #[error("precondition violated: {0}")]
    PreconditionViolated(&'static str),
    /// No node holds an item equal to the requested entry.
    #[error("entry not found in tree")]
    NotFound,
}
