//! Row trait and field lookup helpers.

use std::hash::Hash;

use crate::value::CellValue;

/// Trait for rows that can be displayed in a [`DataGrid`](crate::grid::DataGrid).
///
/// Rows are opaque to the grid: it only ever reaches into them through
/// [`key`](GridRow::key) (identity for selection) and
/// [`field`](GridRow::field) (value lookup for column accessors). A path is
/// whatever string the column's accessor carries; flat structs match on the
/// field name, nested data can interpret dots (see [`json_field`]).
///
/// # Example
///
/// ```
/// use griddle::row::GridRow;
/// use griddle::value::CellValue;
///
/// #[derive(Clone)]
/// struct Student {
///     id: u32,
///     username: String,
/// }
///
/// impl GridRow for Student {
///     type Key = u32;
///
///     fn key(&self) -> u32 {
///         self.id
///     }
///
///     fn field(&self, path: &str) -> Option<CellValue> {
///         match path {
///             "username" => Some(self.username.as_str().into()),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait GridRow: Clone + Send + Sync + 'static {
    /// The key type used to identify this row.
    type Key: Clone + Eq + Hash + Send + Sync + 'static;

    /// Return a unique key for this row.
    fn key(&self) -> Self::Key;

    /// Look up the value behind an accessor path.
    ///
    /// Returning `None` is not an error: the grid treats the cell as
    /// [`CellValue::Null`] — it renders empty, sorts lowest, and passes the
    /// default prefix filter.
    fn field(&self, path: &str) -> Option<CellValue>;
}

/// Dotted-path lookup into JSON-shaped row data.
///
/// Walks `path` segment by segment through nested objects, converting the
/// leaf into a [`CellValue`]. Arrays and objects at the leaf are not cell
/// material and come back as `None`, as does any missing segment.
///
/// # Example
///
/// ```
/// use griddle::row::json_field;
/// use griddle::value::CellValue;
/// use serde_json::json;
///
/// let row = json!({"profile": {"name": "Dina"}});
/// assert_eq!(
///     json_field(&row, "profile.name"),
///     Some(CellValue::from("Dina")),
/// );
/// assert_eq!(json_field(&row, "profile.phone"), None);
/// ```
pub fn json_field(row: &serde_json::Value, path: &str) -> Option<CellValue> {
    let mut current = row;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    match current {
        serde_json::Value::Null => Some(CellValue::Null),
        serde_json::Value::Bool(v) => Some(CellValue::Bool(*v)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(CellValue::Int(i))
            } else {
                n.as_f64().map(CellValue::Float)
            }
        }
        serde_json::Value::String(s) => Some(CellValue::String(s.clone())),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
    }
}
