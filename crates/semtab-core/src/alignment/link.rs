//! Link kinds for the alignment graph.
//!
//! Links are the directed, labeled edges of the alignment. Most carry an
//! ontology property between two nodes; the two specialization kinds refine
//! another link instead and reference it by id.

use serde::{Deserialize, Serialize};

/// Local name and URI of the ontology property a link carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkLabel {
    /// Local name, used for display.
    pub local_name: String,
    /// Full ontology URI.
    pub uri: String,
}

impl LinkLabel {
    /// Create a new link label.
    pub fn new(local_name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            local_name: local_name.into(),
            uri: uri.into(),
        }
    }
}

/// Review status of a link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkStatus {
    /// Proposed by the alignment, not reviewed.
    #[default]
    Normal,
    /// Explicitly confirmed by the user.
    ForcedByUser,
    /// Preferred by the interface over alternatives.
    PreferredByUI,
}

impl LinkStatus {
    /// Status tag as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::ForcedByUser => "ForcedByUser",
            Self::PreferredByUI => "PreferredByUI",
        }
    }
}

/// Key annotation carried by a link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkKeyInfo {
    /// The target column is part of the entity's key.
    PartOfKey,
    /// The target column holds the URI of the entity instance.
    UriOfInstance,
    /// No key information.
    #[default]
    None,
}

/// The declared kind of a link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "link_kind")]
pub enum LinkKind {
    /// A plain object property between two class nodes.
    ObjectProperty,
    /// A data property from a class node to a column.
    DataProperty,
    /// Connects a class node to the column holding its instances.
    ClassInstance,
    /// Declares a column's type as a subclass of its domain.
    ColumnSubClass,
    /// A subclass relation between two class nodes.
    SubClass,
    /// Refines another object-property link, referenced by id.
    ObjectPropertySpecialization {
        /// Id of the link this one specializes.
        specialized_link_id: String,
    },
    /// Binds a data property to the column holding its property values.
    DataPropertyOfColumn {
        /// Id of the link this one specializes.
        specialized_link_id: String,
    },
}

impl LinkKind {
    /// Get a human-readable type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::ObjectProperty => "ObjectPropertyLink",
            Self::DataProperty => "DataPropertyLink",
            Self::ClassInstance => "ClassInstanceLink",
            Self::ColumnSubClass => "ColumnSubClassLink",
            Self::SubClass => "SubClassLink",
            Self::ObjectPropertySpecialization { .. } => "ObjectPropertySpecializationLink",
            Self::DataPropertyOfColumn { .. } => "DataPropertyOfColumnLink",
        }
    }

    /// Id of the link this kind specializes, for the specialization kinds.
    pub fn specialized_link_id(&self) -> Option<&str> {
        match self {
            Self::ObjectPropertySpecialization {
                specialized_link_id,
            }
            | Self::DataPropertyOfColumn {
                specialized_link_id,
            } => Some(specialized_link_id),
            _ => None,
        }
    }

    /// Whether this is the plain object-property kind.
    pub fn is_generic(&self) -> bool {
        matches!(self, Self::ObjectProperty)
    }

    /// Whether this kind refines another link.
    pub fn is_specialization(&self) -> bool {
        self.specialized_link_id().is_some()
    }
}

/// A directed, labeled connection between two alignment nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledLink {
    /// Unique identifier within the graph.
    pub id: String,
    /// Ontology property the link carries.
    pub label: LinkLabel,
    /// Review status.
    pub status: LinkStatus,
    /// Key annotation.
    pub key_info: LinkKeyInfo,
    /// Declared kind.
    pub kind: LinkKind,
}

impl LabeledLink {
    /// Create a new link with default status and no key annotation.
    pub fn new(id: impl Into<String>, label: LinkLabel, kind: LinkKind) -> Self {
        Self {
            id: id.into(),
            label,
            status: LinkStatus::default(),
            key_info: LinkKeyInfo::default(),
            kind,
        }
    }
}
