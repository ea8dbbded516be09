//! Error types for document operations.

use thiserror::Error;

use crate::document::NodeId;

/// Errors returned by fallible [`Document`](crate::Document) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// The id does not refer to a live node of this document.
    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    /// The operation needs an element node but got a text node.
    #[error("node {0} is not an element")]
    NotAnElement(NodeId),

    /// Inserting `child` under `parent` would break the tree.
    #[error("cannot insert node {child} under node {parent}")]
    HierarchyRequest {
        /// The would-be parent.
        parent: NodeId,
        /// The node being inserted.
        child: NodeId,
    },

    /// Class tokens must be non-empty and free of whitespace.
    #[error("invalid class token {0:?}")]
    InvalidToken(String),
}
