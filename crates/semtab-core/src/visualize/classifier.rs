//! Link classification for the visualization export.
//!
//! Every graph edge becomes either a plain link record or, for the
//! specialization kinds, an edge-link record whose source field carries the
//! id of the link it refines instead of a node index. Edges with an endpoint
//! missing from the index map are reported and skipped; one inconsistent
//! edge must not abort the export.

use std::collections::HashMap;

use tracing::error;

use crate::alignment::{AlignmentGraph, LinkKeyInfo};

use super::models::{LinkRecord, SourceRef};

/// Output of the classification pass.
pub(crate) struct ClassifiedLinks {
    /// Links drawn between indexed nodes.
    pub links: Vec<LinkRecord>,
    /// Specialization links, rendered as annotations on another link.
    pub edge_links: Vec<LinkRecord>,
}

/// Classify every edge of the graph against the node index map.
pub(crate) fn classify_links(
    graph: &AlignmentGraph,
    index_of: &HashMap<String, usize>,
) -> ClassifiedLinks {
    let mut links = Vec::new();
    let mut edge_links = Vec::new();

    for resolved in graph.links() {
        let link = resolved.link;
        let source_id = resolved.source.id();
        let target_id = resolved.target.id();

        let (source_index, target_index) = match (
            index_of.get(source_id).copied(),
            index_of.get(target_id).copied(),
        ) {
            (Some(source), Some(target)) => (source, target),
            _ => {
                error!(
                    link_id = %link.id,
                    source = %source_id,
                    target = %target_id,
                    "link endpoint missing from vertex index, skipping"
                );
                continue;
            }
        };

        // A holder link terminates at a leaf column node.
        let holder = resolved.target.is_column() && !graph.has_outgoing(target_id);

        let mut label = link.label.local_name.clone();
        if holder && link.key_info == LinkKeyInfo::PartOfKey {
            label.push('*');
        }

        // The declared kind is authoritative for the type tag; the holder
        // designation shows through only for the plain object-property kind.
        let link_type = if holder && link.kind.is_generic() {
            "holderLink".to_string()
        } else {
            link.kind.type_name().to_string()
        };

        let mut record = LinkRecord {
            source: SourceRef::Index(source_index),
            target: target_index,
            source_node_id: source_id.to_string(),
            target_node_id: target_id.to_string(),
            label,
            id: link.id.clone(),
            link_status: link.status.as_str().to_string(),
            link_uri: link.label.uri.clone(),
            link_type,
        };

        if let Some(specialized) = link.kind.specialized_link_id() {
            record.source = SourceRef::LinkId(specialized.to_string());
            edge_links.push(record);
        } else {
            links.push(record);
        }
    }

    ClassifiedLinks { links, edge_links }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::{
        AlignmentNode, ColumnNode, InternalNode, LabeledLink, LinkKind, LinkLabel,
    };

    fn leaf_column_graph(kind: LinkKind, key_info: LinkKeyInfo) -> AlignmentGraph {
        let mut graph = AlignmentGraph::new();
        graph
            .add_node(AlignmentNode::Internal(InternalNode::new(
                "x1", "Person", "http://example.org/Person",
            )))
            .unwrap();
        graph
            .add_node(AlignmentNode::Column(ColumnNode::new("c1", "name", "h1", 0)))
            .unwrap();

        let mut link = LabeledLink::new(
            "l1",
            LinkLabel::new("hasName", "http://example.org/hasName"),
            kind,
        );
        link.key_info = key_info;
        graph.add_link("x1", "c1", link, 1.0).unwrap();
        graph
    }

    fn index_of(graph: &AlignmentGraph) -> HashMap<String, usize> {
        graph
            .nodes()
            .enumerate()
            .map(|(index, node)| (node.id().to_string(), index))
            .collect()
    }

    #[test]
    fn generic_link_to_leaf_column_becomes_holder() {
        let graph = leaf_column_graph(LinkKind::ObjectProperty, LinkKeyInfo::PartOfKey);

        let classified = classify_links(&graph, &index_of(&graph));

        assert_eq!(classified.links.len(), 1);
        assert_eq!(classified.links[0].link_type, "holderLink");
        assert_eq!(classified.links[0].label, "hasName*");
    }

    #[test]
    fn declared_kind_wins_over_holder_tag() {
        let graph = leaf_column_graph(LinkKind::DataProperty, LinkKeyInfo::PartOfKey);

        let classified = classify_links(&graph, &index_of(&graph));

        assert_eq!(classified.links[0].link_type, "DataPropertyLink");
        // The key marker depends only on the holder condition.
        assert_eq!(classified.links[0].label, "hasName*");
    }

    #[test]
    fn no_key_marker_without_part_of_key() {
        let graph = leaf_column_graph(LinkKind::ObjectProperty, LinkKeyInfo::None);

        let classified = classify_links(&graph, &index_of(&graph));

        assert_eq!(classified.links[0].label, "hasName");
    }

    #[test]
    fn unindexed_endpoint_drops_only_that_link() {
        let graph = leaf_column_graph(LinkKind::ObjectProperty, LinkKeyInfo::None);
        let mut partial = index_of(&graph);
        partial.remove("c1");

        let classified = classify_links(&graph, &partial);

        assert!(classified.links.is_empty());
        assert!(classified.edge_links.is_empty());
    }
}
