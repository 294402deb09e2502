//! Node index assignment for the visualization export.
//!
//! Anchors claim indices `0..N` in source-table column order; the remaining
//! graph vertices are appended after them, in graph order. The index map is
//! keyed by node id, so a placeholder anchor (a header with no bound column
//! node) never becomes a link endpoint.

use std::collections::HashMap;

use crate::alignment::{AlignmentGraph, AlignmentNode};
use crate::worksheet::HeaderTable;

use super::models::{AnchorRecord, NodeRecord};

/// Output of the indexing pass.
pub(crate) struct IndexedNodes {
    /// Node id to assigned index, covering every column node bound to a
    /// visible header and every non-column vertex.
    pub index_of: HashMap<String, usize>,
    /// One anchor per visible header, in column order.
    pub anchors: Vec<AnchorRecord>,
    /// Records for the remaining vertices.
    pub nodes: Vec<NodeRecord>,
}

/// Assign every addressable vertex a dense index and emit its record.
pub(crate) fn index_nodes(graph: &AlignmentGraph, headers: &HeaderTable) -> IndexedNodes {
    let mut index_of = HashMap::new();
    let mut anchors = Vec::with_capacity(headers.len());
    let mut nodes = Vec::new();

    // One scan over the vertex set; only column nodes take part in anchor
    // binding.
    let mut bound: HashMap<&str, &AlignmentNode> = HashMap::new();
    for node in graph.nodes() {
        if let AlignmentNode::Column(column) = node {
            bound.insert(column.h_node_id.as_str(), node);
        }
    }

    for (position, header) in headers.columns().iter().enumerate() {
        match bound.get(header.id.as_str()) {
            Some(node) => {
                anchors.push(AnchorRecord {
                    label: node.label().to_string(),
                    id: position,
                    node_id: node.id().to_string(),
                    node_type: node.type_name().to_string(),
                    is_forced_by_user: node.is_forced(),
                    node_domain: node.domain().to_string(),
                    h_node_id: header.id.clone(),
                    column: position,
                });
                index_of.insert(node.id().to_string(), position);
            }
            None => {
                // No bound node: the anchor is synthesized from the header
                // itself and stays out of the index map.
                anchors.push(AnchorRecord {
                    label: header.name.clone(),
                    id: position,
                    node_id: header.id.clone(),
                    node_type: "ColumnNode".to_string(),
                    is_forced_by_user: false,
                    node_domain: String::new(),
                    h_node_id: header.id.clone(),
                    column: position,
                });
            }
        }
    }

    // Remaining vertices continue the index space after the anchors. Graph
    // order is insertion order, stable per snapshot only.
    let mut counter = headers.len();
    for node in graph.nodes() {
        if node.is_column() {
            continue;
        }
        nodes.push(NodeRecord {
            label: node.label().to_string(),
            id: counter,
            node_id: node.id().to_string(),
            node_type: node.type_name().to_string(),
            is_forced_by_user: node.is_forced(),
            node_domain: node.domain().to_string(),
        });
        index_of.insert(node.id().to_string(), counter);
        counter += 1;
    }

    IndexedNodes {
        index_of,
        anchors,
        nodes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::{ColumnNode, InternalNode};
    use crate::worksheet::HeaderColumn;

    fn headers(pairs: &[(&str, &str)]) -> HeaderTable {
        HeaderTable::from_columns(
            pairs
                .iter()
                .map(|(id, name)| HeaderColumn::new(*id, *name)),
        )
        .unwrap()
    }

    #[test]
    fn anchors_follow_header_order() {
        let mut graph = AlignmentGraph::new();
        graph
            .add_node(AlignmentNode::Column(ColumnNode::new("n2", "City", "h2", 1)))
            .unwrap();
        graph
            .add_node(AlignmentNode::Column(ColumnNode::new("n1", "Name", "h1", 0)))
            .unwrap();

        let indexed = index_nodes(&graph, &headers(&[("h1", "Name"), ("h2", "City")]));

        assert_eq!(indexed.anchors.len(), 2);
        assert_eq!(indexed.anchors[0].node_id, "n1");
        assert_eq!(indexed.anchors[1].node_id, "n2");
        assert_eq!(indexed.index_of["n1"], 0);
        assert_eq!(indexed.index_of["n2"], 1);
    }

    #[test]
    fn placeholder_anchor_stays_out_of_index_map() {
        let graph = AlignmentGraph::new();

        let indexed = index_nodes(&graph, &headers(&[("h1", "Name")]));

        assert_eq!(indexed.anchors.len(), 1);
        assert_eq!(indexed.anchors[0].node_id, "h1");
        assert_eq!(indexed.anchors[0].node_type, "ColumnNode");
        assert!(!indexed.anchors[0].is_forced_by_user);
        assert!(indexed.anchors[0].node_domain.is_empty());
        assert!(indexed.index_of.is_empty());
    }

    #[test]
    fn remaining_vertices_get_dense_indices_after_anchors() {
        let mut graph = AlignmentGraph::new();
        graph
            .add_node(AlignmentNode::Column(ColumnNode::new("n1", "Name", "h1", 0)))
            .unwrap();
        graph
            .add_node(AlignmentNode::Internal(InternalNode::new(
                "x1", "Person", "http://example.org/Person",
            )))
            .unwrap();
        graph
            .add_node(AlignmentNode::Internal(InternalNode::new(
                "x2", "City", "http://example.org/City",
            )))
            .unwrap();

        let indexed = index_nodes(&graph, &headers(&[("h1", "Name"), ("h2", "City")]));

        let mut indices: Vec<usize> = indexed.index_of.values().copied().collect();
        indices.sort_unstable();
        assert_eq!(indices, [0, 2, 3]);
        assert_eq!(indexed.nodes[0].id, 2);
        assert_eq!(indexed.nodes[1].id, 3);
    }
}
