//! Dataset descriptors.

use std::collections::BTreeMap;

use opsdeck_core::{DomainError, DomainResult, Scalar};

/// A single dataset row: column name → cell value.
///
/// Rows have no intrinsic identity; identity is positional within the
/// per-dataset sequence.
pub type Row = BTreeMap<String, Scalar>;

/// Static description of one dataset: identity, column layout, and the
/// default rows used when nothing has been persisted yet.
///
/// Descriptors are externally owned configuration; the store never mutates
/// them.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetDescriptor {
    id: String,
    name: String,
    description: String,
    columns: Vec<String>,
    preview_columns: Vec<String>,
    rows: Vec<Row>,
}

impl DatasetDescriptor {
    /// Build a descriptor, enforcing the structural invariants:
    /// `preview_columns ⊆ columns` and every row's keys ⊆ `columns`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        columns: Vec<String>,
        preview_columns: Vec<String>,
        rows: Vec<Row>,
    ) -> DomainResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::validation("dataset id cannot be empty"));
        }
        if columns.is_empty() {
            return Err(DomainError::validation("dataset needs at least one column"));
        }

        for preview in &preview_columns {
            if !columns.contains(preview) {
                return Err(DomainError::validation(format!(
                    "preview column {preview:?} is not a dataset column"
                )));
            }
        }

        for (index, row) in rows.iter().enumerate() {
            for key in row.keys() {
                if !columns.contains(key) {
                    return Err(DomainError::validation(format!(
                        "row {index} references unknown column {key:?}"
                    )));
                }
            }
        }

        Ok(Self {
            id,
            name: name.into(),
            description: description.into(),
            columns,
            preview_columns,
            rows,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Full column layout, in display order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Columns shown in compact views; also the columns free-text search
    /// matches against.
    pub fn preview_columns(&self) -> &[String] {
        &self.preview_columns
    }

    /// Default rows: the source of truth for first-run state.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }
}
