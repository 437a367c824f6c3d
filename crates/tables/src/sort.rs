//! Single-key sorting.

use std::cmp::Ordering;

use opsdeck_core::Scalar;
use opsdeck_datasets::Row;

use crate::expand::DisplayRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// One active sort key and its direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub column: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Ascending,
        }
    }
}

/// Sort display refs by their source row's cell in the sort column.
///
/// Number/number pairs compare numerically; everything else compares by
/// rendered string. The underlying sort is stable, so ties keep display
/// order.
pub fn sort_refs(refs: &mut [DisplayRef], rows: &[Row], spec: &SortSpec) {
    refs.sort_by(|a, b| {
        let cell_a = rows.get(a.source_index).and_then(|r| r.get(&spec.column));
        let cell_b = rows.get(b.source_index).and_then(|r| r.get(&spec.column));
        let ordering = compare_cells(cell_a, cell_b);
        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

fn compare_cells(a: Option<&Scalar>, b: Option<&Scalar>) -> Ordering {
    match (a, b) {
        (Some(Scalar::Number(x)), Some(Scalar::Number(y))) => x.total_cmp(y),
        (Some(x), Some(y)) => x.to_display().cmp(&y.to_display()),
        // Missing cells sort first so sparse rows surface together.
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
    }
}
