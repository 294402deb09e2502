//! Node kinds for the alignment graph.
//!
//! Nodes represent ontology entities the source table is mapped onto. They
//! come in three kinds:
//!
//! - **Column**: bound to one source-table header column
//! - **Internal**: an ontology class instance introduced by the alignment
//! - **Literal**: a constant value

use serde::{Deserialize, Serialize};

/// A node bound to one source-table header column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnNode {
    /// Unique identifier within the graph.
    pub id: String,
    /// Display label (local name of the column's semantic type).
    pub label: String,
    /// Ontology URI of the node's domain, empty if unknown.
    pub domain: String,
    /// Whether the user pinned this node.
    pub is_forced: bool,
    /// Identifier of the header column this node is bound to.
    pub h_node_id: String,
    /// Zero-based position of the bound column in the worksheet.
    pub column_index: usize,
}

impl ColumnNode {
    /// Create a new column node with an empty domain.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        h_node_id: impl Into<String>,
        column_index: usize,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            domain: String::new(),
            is_forced: false,
            h_node_id: h_node_id.into(),
            column_index,
        }
    }
}

/// An ontology class instance node introduced by the alignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InternalNode {
    /// Unique identifier within the graph.
    pub id: String,
    /// Display label (local name of the class).
    pub label: String,
    /// Ontology URI of the class, empty if unknown.
    pub domain: String,
    /// Whether the user pinned this node.
    pub is_forced: bool,
}

impl InternalNode {
    /// Create a new internal node.
    pub fn new(id: impl Into<String>, label: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            domain: domain.into(),
            is_forced: false,
        }
    }
}

/// A literal value node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiteralNode {
    /// Unique identifier within the graph.
    pub id: String,
    /// The literal value, used as the display label.
    pub label: String,
    /// Datatype URI of the literal, empty if untyped.
    pub domain: String,
    /// Whether the user pinned this node.
    pub is_forced: bool,
}

impl LiteralNode {
    /// Create a new literal node.
    pub fn new(id: impl Into<String>, label: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            domain: domain.into(),
            is_forced: false,
        }
    }
}

/// A vertex of the alignment graph.
///
/// This enum allows type-safe handling of the different node kinds while
/// keeping a unified interface for graph operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "node_type")]
pub enum AlignmentNode {
    /// A node bound to a source-table column.
    Column(ColumnNode),
    /// An ontology class instance node.
    Internal(InternalNode),
    /// A literal value node.
    Literal(LiteralNode),
}

impl AlignmentNode {
    /// Get the unique identifier for this node.
    pub fn id(&self) -> &str {
        match self {
            Self::Column(n) => &n.id,
            Self::Internal(n) => &n.id,
            Self::Literal(n) => &n.id,
        }
    }

    /// Get the display label for this node.
    pub fn label(&self) -> &str {
        match self {
            Self::Column(n) => &n.label,
            Self::Internal(n) => &n.label,
            Self::Literal(n) => &n.label,
        }
    }

    /// Get the ontology domain URI, empty if unknown.
    pub fn domain(&self) -> &str {
        match self {
            Self::Column(n) => &n.domain,
            Self::Internal(n) => &n.domain,
            Self::Literal(n) => &n.domain,
        }
    }

    /// Whether the user pinned this node.
    pub fn is_forced(&self) -> bool {
        match self {
            Self::Column(n) => n.is_forced,
            Self::Internal(n) => n.is_forced,
            Self::Literal(n) => n.is_forced,
        }
    }

    /// Get a human-readable type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Column(_) => "ColumnNode",
            Self::Internal(_) => "InternalNode",
            Self::Literal(_) => "LiteralNode",
        }
    }

    /// Borrow the column payload, if this is a column node.
    pub fn as_column(&self) -> Option<&ColumnNode> {
        match self {
            Self::Column(n) => Some(n),
            _ => None,
        }
    }

    /// Whether this node is bound to a source-table column.
    pub fn is_column(&self) -> bool {
        matches!(self, Self::Column(_))
    }
}
