//! Errors returned by [`BinaryTree`][crate::BinaryTree] operations.
//!
//! Looking up or removing a missing key is not an error: those operations
//! return `None`.

use thiserror::Error;

/// The ways a tree operation can fail.
#[derive(Error, Debug)]
pub enum TreeError {
    /// The operation needs at least one node (e.g. `min` or `max`).
    #[error("tree is empty")]
    Empty,

    /// Writing a dump of the tree failed.
    #[error("failed to write tree dump: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand for results of tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
