//! Wire models for the visualization export.
//!
//! These are Data Transfer Objects (DTOs) that define the shape of the JSON
//! document sent to the diagram renderer. Field names are the wire contract.

use serde::Serialize;

// =============================================================================
// Document
// =============================================================================

/// The full visualization document for one alignment snapshot.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationDocument {
    /// Tag the client dispatches on.
    pub update_type: String,
    /// Identifier of the exported alignment.
    pub alignment_id: String,
    /// Identifier of the worksheet the alignment belongs to.
    pub worksheet_id: String,
    /// The indexed graph content.
    pub align_object: AlignObject,
}

/// Indexed nodes and classified links of one alignment.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignObject {
    /// One entry per visible header column, in column order.
    pub anchors: Vec<AnchorRecord>,
    /// Remaining graph vertices, indexed after the anchors.
    pub nodes: Vec<NodeRecord>,
    /// Links drawn between indexed nodes.
    pub links: Vec<LinkRecord>,
    /// Specialization links, drawn as annotations on another link.
    pub edge_links: Vec<LinkRecord>,
}

// =============================================================================
// Nodes
// =============================================================================

/// A graph vertex that is not bound to a header column.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRecord {
    /// Display label.
    pub label: String,
    /// Assigned index in the shared node index space.
    pub id: usize,
    /// Raw node identifier in the alignment graph.
    pub node_id: String,
    /// Node kind tag.
    pub node_type: String,
    /// Whether the user pinned this node.
    pub is_forced_by_user: bool,
    /// Ontology domain URI, empty if unknown.
    pub node_domain: String,
}

/// A node slot corresponding 1:1 to a visible header column.
///
/// Present for every header regardless of whether the alignment graph binds
/// a node to it; unbound headers get a placeholder synthesized from the raw
/// header metadata.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnchorRecord {
    /// Display label.
    pub label: String,
    /// Assigned index, equal to the header's column position.
    pub id: usize,
    /// Raw node identifier, or the header id for placeholders.
    pub node_id: String,
    /// Node kind tag.
    pub node_type: String,
    /// Whether the user pinned this node.
    pub is_forced_by_user: bool,
    /// Ontology domain URI, empty if unknown.
    pub node_domain: String,
    /// Identifier of the header column this anchor represents.
    pub h_node_id: String,
    /// Zero-based column position.
    pub column: usize,
}

// =============================================================================
// Links
// =============================================================================

/// Source endpoint of a link record.
///
/// Plain links point at a node index; specialization links reference the
/// link they refine by id instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SourceRef {
    /// Index into the shared node index space.
    Index(usize),
    /// Id of the specialized link.
    LinkId(String),
}

/// A classified link of the alignment graph.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    /// Source endpoint: a node index, or a link id for specialization links.
    pub source: SourceRef,
    /// Target node index.
    pub target: usize,
    /// Raw identifier of the source node.
    pub source_node_id: String,
    /// Raw identifier of the target node.
    pub target_node_id: String,
    /// Display label; carries a trailing `*` for key holder links.
    pub label: String,
    /// Link identifier.
    pub id: String,
    /// Review status tag.
    pub link_status: String,
    /// Ontology URI of the link's property.
    pub link_uri: String,
    /// Rendering category tag.
    pub link_type: String,
}
