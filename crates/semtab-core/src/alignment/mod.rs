//! Semantic alignment graph between a tabular source and an ontology.
//!
//! An alignment maps the columns of one worksheet onto ontology classes and
//! properties. The mapping is held as a directed weighted multigraph whose
//! vertices are [`AlignmentNode`]s and whose edges are [`LabeledLink`]s. The
//! graph handed to consumers is the minimum-cost connecting subgraph computed
//! elsewhere; this module only models and stores it.
//!
//! # Components
//!
//! - [`AlignmentGraph`] - the multigraph with id-keyed vertex access
//! - [`AlignmentNode`] - node kinds (column, internal class, literal)
//! - [`LabeledLink`] - link label, status, key annotation and kind
//! - [`GraphError`] - graph assembly errors

mod error;
mod graph;
mod link;
mod node;

pub use error::GraphError;
pub use graph::{AlignmentGraph, ResolvedLink};
pub use link::{LabeledLink, LinkKeyInfo, LinkKind, LinkLabel, LinkStatus};
pub use node::{AlignmentNode, ColumnNode, InternalNode, LiteralNode};

/// Build the identifier of the alignment attached to one worksheet.
///
/// There is exactly one alignment per worksheet, so the id is derived from
/// the workspace and worksheet ids rather than generated.
pub fn construct_alignment_id(workspace_id: &str, worksheet_id: &str) -> String {
    format!("{}:{}AL", workspace_id, worksheet_id)
}
