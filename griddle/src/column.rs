//! Column definitions.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::error::ConfigError;
use crate::row::GridRow;
use crate::value::CellValue;

/// Custom filter predicate: receives the row, the accessor value, and the
/// filter query.
pub type FilterPredicate<R> = Arc<dyn Fn(&R, &CellValue, &str) -> bool + Send + Sync>;

/// Cell renderer: turns a row and its accessor value into the caller's
/// display representation `V`. The grid never inspects `V`, only carries it.
pub type CellRenderer<R, V> = Arc<dyn Fn(&R, &CellValue) -> V + Send + Sync>;

/// CSV formatter: overrides the raw accessor value in exports.
pub type CsvFormatter<R> = Arc<dyn Fn(&R, &CellValue) -> String + Send + Sync>;

/// How a column extracts its value from a row.
pub enum Accessor<R> {
    /// A field path resolved through [`GridRow::field`].
    Field(String),
    /// A function computing the value from the row.
    With(Arc<dyn Fn(&R) -> CellValue + Send + Sync>),
}

impl<R: GridRow> Accessor<R> {
    /// Extract the value for a row. Missing fields become [`CellValue::Null`].
    pub fn value(&self, row: &R) -> CellValue {
        match self {
            Accessor::Field(path) => row.field(path).unwrap_or(CellValue::Null),
            Accessor::With(f) => f(row),
        }
    }
}

impl<R> Clone for Accessor<R> {
    fn clone(&self) -> Self {
        match self {
            Accessor::Field(path) => Accessor::Field(path.clone()),
            Accessor::With(f) => Accessor::With(Arc::clone(f)),
        }
    }
}

impl<R> fmt::Debug for Accessor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Field(path) => f.debug_tuple("Field").field(path).finish(),
            Accessor::With(_) => f.write_str("With(..)"),
        }
    }
}

/// A column definition.
///
/// `R` is the row type, `V` the display representation produced by an
/// optional cell renderer (plain text by default). Columns are supplied at
/// grid construction and immutable for the grid's lifetime.
///
/// # Example
///
/// ```ignore
/// let columns = vec![
///     Column::field("username", "Username"),
///     Column::field("fullname", "Nama Lengkap").fixed(200),
///     Column::with("age", "Age", |s: &Student| s.age.into()).filterable(false),
/// ];
/// ```
pub struct Column<R, V = String> {
    /// Unique identifier for this column.
    pub id: String,
    /// Header text displayed at the top.
    pub header: String,
    /// Whether this column participates in filtering.
    pub filterable: bool,
    /// Optional fixed width in pixels/characters, for the caller's layout.
    pub width: Option<u16>,
    accessor: Accessor<R>,
    filter: Option<FilterPredicate<R>>,
    renderer: Option<CellRenderer<R, V>>,
    csv: Option<CsvFormatter<R>>,
}

impl<R: GridRow, V> Column<R, V> {
    /// Create a column whose accessor is the field path `id`.
    pub fn field(id: impl Into<String>, header: impl Into<String>) -> Self {
        let id = id.into();
        let accessor = Accessor::Field(id.clone());
        Self::raw(id, header.into(), accessor)
    }

    /// Create a column with a computed accessor.
    pub fn with(
        id: impl Into<String>,
        header: impl Into<String>,
        accessor: impl Fn(&R) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        Self::raw(id.into(), header.into(), Accessor::With(Arc::new(accessor)))
    }

    fn raw(id: String, header: String, accessor: Accessor<R>) -> Self {
        Self {
            id,
            header,
            filterable: true,
            width: None,
            accessor,
            filter: None,
            renderer: None,
            csv: None,
        }
    }

    /// Point the accessor at a different field path than the id.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.accessor = Accessor::Field(path.into());
        self
    }

    /// Enable or disable filtering for this column (enabled by default).
    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    /// Override the default prefix filter with a custom predicate.
    pub fn filter_with(
        mut self,
        predicate: impl Fn(&R, &CellValue, &str) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.filter = Some(Arc::new(predicate));
        self
    }

    /// Set a custom cell renderer.
    pub fn render_with(
        mut self,
        renderer: impl Fn(&R, &CellValue) -> V + Send + Sync + 'static,
    ) -> Self {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    /// Set a CSV formatter overriding the raw value in exports.
    pub fn csv_with(
        mut self,
        formatter: impl Fn(&R, &CellValue) -> String + Send + Sync + 'static,
    ) -> Self {
        self.csv = Some(Arc::new(formatter));
        self
    }

    /// Set a fixed width for this column.
    pub fn fixed(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Extract this column's value from a row.
    pub fn value(&self, row: &R) -> CellValue {
        self.accessor.value(row)
    }

    /// The custom filter predicate, if any.
    pub fn custom_filter(&self) -> Option<&FilterPredicate<R>> {
        self.filter.as_ref()
    }

    /// The custom cell renderer, if any.
    pub fn renderer(&self) -> Option<&CellRenderer<R, V>> {
        self.renderer.as_ref()
    }

    /// Format this column's cell for CSV export.
    pub fn csv_value(&self, row: &R) -> String {
        let value = self.value(row);
        match &self.csv {
            Some(formatter) => formatter(row, &value),
            None => value.to_string(),
        }
    }
}

impl<R, V> Clone for Column<R, V> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            filterable: self.filterable,
            width: self.width,
            accessor: self.accessor.clone(),
            filter: self.filter.as_ref().map(Arc::clone),
            renderer: self.renderer.as_ref().map(Arc::clone),
            csv: self.csv.as_ref().map(Arc::clone),
        }
    }
}

impl<R, V> fmt::Debug for Column<R, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("accessor", &self.accessor)
            .field("filterable", &self.filterable)
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}

/// Validate a column set at construction time.
///
/// Rejects an empty set and duplicate ids. Runs once in the grid
/// constructors so a bad configuration never reaches the engines.
pub fn validate_columns<R, V>(columns: &[Column<R, V>]) -> Result<(), ConfigError> {
    if columns.is_empty() {
        return Err(ConfigError::NoColumns);
    }
    let mut seen = HashSet::new();
    for column in columns {
        if !seen.insert(column.id.as_str()) {
            return Err(ConfigError::DuplicateColumn {
                id: column.id.clone(),
            });
        }
    }
    Ok(())
}
