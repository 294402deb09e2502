//! Visualization export for alignment graphs.
//!
//! Flattens one snapshot of an [`AlignmentGraph`] plus the worksheet's
//! visible header columns into the indexed, classified JSON document the
//! client renders as a schema-mapping diagram.
//!
//! # Module Structure
//!
//! - `indexer` - node index assignment and anchor records
//! - `classifier` - link classification and routing
//! - `models` - wire DTOs
//!
//! One export call reads one immutable snapshot and builds its own index map
//! and output collections; re-invoking on a fresh snapshot is always safe.

mod classifier;
mod error;
mod indexer;
mod models;

pub use error::VisualizeError;
pub use models::{
    AlignObject, AnchorRecord, LinkRecord, NodeRecord, SourceRef, VisualizationDocument,
};

use std::io::Write;

use tracing::debug;

use crate::alignment::AlignmentGraph;
use crate::worksheet::HeaderTable;

// =============================================================================
// Update
// =============================================================================

/// A payload pushed to the client after server-side state changes.
pub trait Update {
    /// Tag the client dispatches on.
    fn update_type(&self) -> &'static str;

    /// Serialize the payload into the sink.
    fn write_json(&self, writer: &mut dyn Write) -> Result<(), VisualizeError>;
}

// =============================================================================
// Alignment visualization
// =============================================================================

/// Export of one alignment snapshot as a renderable document.
///
/// Borrows the graph and header table for the duration of one export; callers
/// are responsible for handing over a consistent snapshot (the connecting
/// subgraph is captured before this type is constructed).
pub struct AlignmentVisualizationUpdate<'a> {
    alignment_id: String,
    worksheet_id: String,
    graph: &'a AlignmentGraph,
    headers: &'a HeaderTable,
}

impl<'a> AlignmentVisualizationUpdate<'a> {
    /// Wire tag of this update kind.
    pub const UPDATE_TYPE: &'static str = "AlignmentVisualizationUpdate";

    /// Create an export over one alignment snapshot.
    pub fn new(
        alignment_id: impl Into<String>,
        worksheet_id: impl Into<String>,
        graph: &'a AlignmentGraph,
        headers: &'a HeaderTable,
    ) -> Self {
        Self {
            alignment_id: alignment_id.into(),
            worksheet_id: worksheet_id.into(),
            graph,
            headers,
        }
    }

    /// Assemble the document for this snapshot.
    pub fn build_document(&self) -> VisualizationDocument {
        let indexed = indexer::index_nodes(self.graph, self.headers);
        let classified = classifier::classify_links(self.graph, &indexed.index_of);

        debug!(
            worksheet_id = %self.worksheet_id,
            anchors = indexed.anchors.len(),
            nodes = indexed.nodes.len(),
            links = classified.links.len(),
            edge_links = classified.edge_links.len(),
            "assembled alignment visualization"
        );

        VisualizationDocument {
            update_type: Self::UPDATE_TYPE.to_string(),
            alignment_id: self.alignment_id.clone(),
            worksheet_id: self.worksheet_id.clone(),
            align_object: AlignObject {
                anchors: indexed.anchors,
                nodes: indexed.nodes,
                links: classified.links,
                edge_links: classified.edge_links,
            },
        }
    }
}

impl Update for AlignmentVisualizationUpdate<'_> {
    fn update_type(&self) -> &'static str {
        Self::UPDATE_TYPE
    }

    fn write_json(&self, writer: &mut dyn Write) -> Result<(), VisualizeError> {
        let document = self.build_document();
        // Encode fully before touching the sink so an encoding failure
        // flushes nothing.
        let encoded = serde_json::to_vec(&document)?;
        writer.write_all(&encoded)?;
        Ok(())
    }
}
