//! Directed weighted multigraph of alignment nodes and links.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use super::error::GraphError;
use super::link::LabeledLink;
use super::node::AlignmentNode;

/// A labeled link plus the weight it carries in the connecting subgraph.
#[derive(Debug, Clone)]
struct WeightedLink {
    link: LabeledLink,
    weight: f64,
}

/// One edge of the graph with both endpoints resolved.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedLink<'a> {
    /// Node the link starts at.
    pub source: &'a AlignmentNode,
    /// Node the link points to.
    pub target: &'a AlignmentNode,
    /// The link itself.
    pub link: &'a LabeledLink,
    /// Weight assigned by the subgraph computation.
    pub weight: f64,
}

/// The alignment graph: a directed weighted multigraph mapping source-table
/// columns onto ontology entities.
///
/// Vertices are unique by node id; parallel links between the same pair of
/// vertices are allowed. The graph is assembled by the alignment computation
/// and read-only for consumers such as the visualization export.
#[derive(Debug, Default)]
pub struct AlignmentGraph {
    graph: DiGraph<AlignmentNode, WeightedLink>,
    index_by_id: HashMap<String, NodeIndex>,
}

impl AlignmentGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, rejecting duplicate ids.
    pub fn add_node(&mut self, node: AlignmentNode) -> Result<NodeIndex, GraphError> {
        if self.index_by_id.contains_key(node.id()) {
            return Err(GraphError::DuplicateNode(node.id().to_string()));
        }
        let id = node.id().to_string();
        let index = self.graph.add_node(node);
        self.index_by_id.insert(id, index);
        Ok(index)
    }

    /// Add a link between two existing nodes.
    ///
    /// Parallel links between the same pair of nodes are allowed.
    pub fn add_link(
        &mut self,
        source_id: &str,
        target_id: &str,
        link: LabeledLink,
        weight: f64,
    ) -> Result<EdgeIndex, GraphError> {
        let source = self.lookup(source_id)?;
        let target = self.lookup(target_id)?;
        Ok(self.graph.add_edge(source, target, WeightedLink { link, weight }))
    }

    fn lookup(&self, id: &str) -> Result<NodeIndex, GraphError> {
        self.index_by_id
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode(id.to_string()))
    }

    /// Number of vertices.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of links.
    pub fn link_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Look a node up by id.
    pub fn node_by_id(&self, id: &str) -> Option<&AlignmentNode> {
        self.index_by_id.get(id).map(|&index| &self.graph[index])
    }

    /// Iterate all vertices in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &AlignmentNode> {
        self.graph.node_weights()
    }

    /// Iterate all links with their endpoints resolved.
    pub fn links(&self) -> impl Iterator<Item = ResolvedLink<'_>> {
        self.graph.edge_references().map(|edge| ResolvedLink {
            source: &self.graph[edge.source()],
            target: &self.graph[edge.target()],
            link: &edge.weight().link,
            weight: edge.weight().weight,
        })
    }

    /// Whether the node with this id has at least one outgoing link.
    ///
    /// Unknown ids have no links and return false.
    pub fn has_outgoing(&self, node_id: &str) -> bool {
        self.index_by_id
            .get(node_id)
            .map(|&index| {
                self.graph
                    .edges_directed(index, Direction::Outgoing)
                    .next()
                    .is_some()
            })
            .unwrap_or(false)
    }
}
