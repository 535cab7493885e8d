//! Sort state and the stable ordering engine.

use crate::column::Column;
use crate::row::GridRow;
use serde::Deserialize;
use serde::Serialize;

/// Sort direction for the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    /// Lowest value first.
    Ascending,
    /// Highest value first.
    Descending,
}

/// The active sort: at most one `(column, direction)` pair.
///
/// `None` at the grid level means natural (input) order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    /// The sorted column's id.
    pub column_id: String,
    /// The sort direction.
    pub direction: SortDirection,
}

impl SortState {
    /// Create an ascending sort on a column.
    pub fn ascending(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Create a descending sort on a column.
    pub fn descending(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            direction: SortDirection::Descending,
        }
    }

    /// Advance the sort cycle for a column click.
    ///
    /// Clicking the active column cycles ascending → descending → none.
    /// Clicking a different column replaces the sort, ascending first.
    pub fn toggle(current: Option<SortState>, column_id: &str) -> Option<SortState> {
        match current {
            Some(state) if state.column_id == column_id => match state.direction {
                SortDirection::Ascending => Some(SortState::descending(column_id)),
                SortDirection::Descending => None,
            },
            _ => Some(SortState::ascending(column_id)),
        }
    }
}

/// Order `rows` by the active sort.
///
/// No active sort is a stable no-op. Otherwise rows are stably sorted on
/// the sort column's accessor output — never the rendered cell — with ties
/// keeping their input order. Descending is the exact reverse of the
/// ascending sequence, so toggling direction reverses the output without
/// reshuffling ties. Missing values order as the lowest sentinel.
pub fn apply<R: GridRow, V>(
    rows: &[R],
    sort: Option<&SortState>,
    columns: &[Column<R, V>],
) -> Vec<R> {
    let Some(sort) = sort else {
        return rows.to_vec();
    };
    let Some(column) = columns.iter().find(|c| c.id == sort.column_id) else {
        log::warn!("sort requested on unknown column {:?}", sort.column_id);
        return rows.to_vec();
    };

    let mut keyed: Vec<(crate::value::CellValue, R)> = rows
        .iter()
        .map(|row| (column.value(row), row.clone()))
        .collect();
    keyed.sort_by(|a, b| a.0.compare(&b.0));

    if sort.direction == SortDirection::Descending {
        keyed.reverse();
    }

    keyed.into_iter().map(|(_, row)| row).collect()
}
