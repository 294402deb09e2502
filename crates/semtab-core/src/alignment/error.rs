//! Alignment graph error types.

use thiserror::Error;

/// Errors that can occur while assembling an alignment graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A node with this id is already present in the graph.
    #[error("duplicate node id: {0}")]
    DuplicateNode(String),

    /// A link endpoint referenced a node id that is not in the graph.
    #[error("unknown node id: {0}")]
    UnknownNode(String),
}
