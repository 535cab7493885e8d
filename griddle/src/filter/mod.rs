//! Filter state and the row-narrowing engine.

pub mod fuzzy;

use std::collections::HashMap;

use crate::column::Column;
use crate::row::GridRow;

/// Active filter values: one optional string per column, plus one optional
/// global query.
///
/// Setting an empty value removes the entry entirely — an empty filter means
/// "no constraint", never "match the empty string". Iteration order is
/// irrelevant; every constraint must hold for a row to pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    columns: HashMap<String, String>,
    global: Option<String>,
}

impl FilterState {
    /// Create an empty filter state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear the filter value for a column.
    ///
    /// An empty string removes the constraint. Whether the column accepts
    /// filtering at all is the grid's concern; the state only stores values.
    pub fn set(&mut self, column_id: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.columns.remove(&column_id.into());
        } else {
            self.columns.insert(column_id.into(), value);
        }
    }

    /// The filter value for a column, if any.
    pub fn get(&self, column_id: &str) -> Option<&str> {
        self.columns.get(column_id).map(String::as_str)
    }

    /// Set or clear the global filter query.
    pub fn set_global(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.global = if value.is_empty() { None } else { Some(value) };
    }

    /// The global filter query, if any.
    pub fn global(&self) -> Option<&str> {
        self.global.as_deref()
    }

    /// Remove a column's constraint.
    pub fn remove(&mut self, column_id: &str) {
        self.columns.remove(column_id);
    }

    /// Drop all constraints.
    pub fn clear(&mut self) {
        self.columns.clear();
        self.global = None;
    }

    /// `true` when no constraint is active.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.global.is_none()
    }

    /// Iterate over the active per-column constraints.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns
            .iter()
            .map(|(id, value)| (id.as_str(), value.as_str()))
    }
}

/// Narrow `rows` to those passing every active constraint.
///
/// Pure and order-preserving: rows are only removed, never reordered, so
/// the sort engine downstream sees input order for whatever survives.
pub fn apply<R: GridRow, V>(
    rows: &[R],
    state: &FilterState,
    columns: &[Column<R, V>],
) -> Vec<R> {
    if state.is_empty() {
        return rows.to_vec();
    }

    rows.iter()
        .filter(|row| passes_columns(*row, state, columns) && passes_global(*row, state, columns))
        .cloned()
        .collect()
}

/// Default per-column predicate: case-insensitive prefix match on the
/// stringified accessor value.
fn prefix_match(value_text: &str, query: &str) -> bool {
    value_text.to_lowercase().starts_with(&query.to_lowercase())
}

fn passes_columns<R: GridRow, V>(
    row: &R,
    state: &FilterState,
    columns: &[Column<R, V>],
) -> bool {
    for (column_id, query) in state.iter() {
        let Some(column) = columns.iter().find(|c| c.id == column_id) else {
            // Stale key for a column that no longer exists; not a constraint.
            continue;
        };
        if !column.filterable {
            continue;
        }
        let value = column.value(row);
        let passed = match column.custom_filter() {
            Some(predicate) => predicate(row, &value, query),
            // Missing values pass the default predicate.
            None => value.is_null() || prefix_match(&value.to_string(), query),
        };
        if !passed {
            return false;
        }
    }
    true
}

/// Global filter: fuzzy-match the query against the concatenation of every
/// filterable column's stringified value for this row.
fn passes_global<R: GridRow, V>(
    row: &R,
    state: &FilterState,
    columns: &[Column<R, V>],
) -> bool {
    let Some(query) = state.global() else {
        return true;
    };

    let mut haystack = String::new();
    for column in columns.iter().filter(|c| c.filterable) {
        let text = column.value(row).to_string();
        if text.is_empty() {
            continue;
        }
        if !haystack.is_empty() {
            haystack.push(' ');
        }
        haystack.push_str(&text);
    }

    fuzzy::is_match(query, &haystack)
}
