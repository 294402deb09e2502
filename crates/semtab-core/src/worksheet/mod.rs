//! Source-table header columns visible to the client.
//!
//! The worksheet's visible leaf columns define the anchor slots of the
//! visualization. Their order is the source-table column order and is owned
//! by the worksheet view, not by the alignment.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while assembling a header table.
#[derive(Debug, Error)]
pub enum HeaderError {
    /// A header with this id is already present.
    #[error("duplicate header id: {0}")]
    DuplicateHeader(String),
}

/// A visible leaf column of the source table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderColumn {
    /// Identifier of the header, unique within the worksheet.
    pub id: String,
    /// Display name of the column.
    pub name: String,
}

impl HeaderColumn {
    /// Create a new header column.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Ordered collection of the visible leaf header columns of one worksheet.
#[derive(Debug, Clone, Default)]
pub struct HeaderTable {
    columns: Vec<HeaderColumn>,
    by_id: HashMap<String, usize>,
}

impl HeaderTable {
    /// Create an empty header table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a header table from columns in display order.
    pub fn from_columns(
        columns: impl IntoIterator<Item = HeaderColumn>,
    ) -> Result<Self, HeaderError> {
        let mut table = Self::new();
        for column in columns {
            table.push(column)?;
        }
        Ok(table)
    }

    /// Append a column, rejecting duplicate ids.
    pub fn push(&mut self, column: HeaderColumn) -> Result<(), HeaderError> {
        if self.by_id.contains_key(&column.id) {
            return Err(HeaderError::DuplicateHeader(column.id.clone()));
        }
        self.by_id.insert(column.id.clone(), self.columns.len());
        self.columns.push(column);
        Ok(())
    }

    /// Header ids in display order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.id.as_str())
    }

    /// Columns in display order.
    pub fn columns(&self) -> &[HeaderColumn] {
        &self.columns
    }

    /// Resolve a header id to its display name.
    pub fn column_name(&self, id: &str) -> Option<&str> {
        self.by_id
            .get(id)
            .map(|&position| self.columns[position].name.as_str())
    }

    /// Column at the given display position.
    pub fn get(&self, position: usize) -> Option<&HeaderColumn> {
        self.columns.get(position)
    }

    /// Number of visible columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the worksheet has no visible columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
