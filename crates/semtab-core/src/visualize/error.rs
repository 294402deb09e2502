//! Visualization export error types.

use thiserror::Error;

/// Errors surfaced by the visualization export.
///
/// Per-link indexing inconsistencies are reported and skipped during
/// classification; only a failure of the final encoding step reaches the
/// caller, in which case nothing is written to the sink.
#[derive(Debug, Error)]
pub enum VisualizeError {
    /// The assembled document could not be serialized.
    #[error("failed to encode visualization document: {0}")]
    Encode(#[from] serde_json::Error),

    /// The encoded document could not be written to the sink.
    #[error("failed to write visualization document: {0}")]
    Io(#[from] std::io::Error),
}
