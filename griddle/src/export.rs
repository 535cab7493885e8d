//! CSV projection of the materialized row set.

use std::io::Write;

use crate::column::Column;
use crate::error::ExportError;
use crate::row::GridRow;

/// Export configuration: target filename and field separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvConfig {
    /// Suggested filename for the download sink.
    pub filename: String,
    /// Field separator byte.
    pub separator: u8,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            filename: "data.csv".to_owned(),
            separator: b',',
        }
    }
}

impl CsvConfig {
    /// Create a config with a filename and the default `,` separator.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ..Self::default()
        }
    }

    /// Set the field separator.
    pub fn separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }
}

/// A finished CSV projection: one header row plus one row per exported row.
///
/// Always rectangular — every data row has exactly one cell per column, in
/// column order. The grid builds this from the filtered+sorted set, never
/// from the current page, so the export does not depend on pagination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    /// Suggested filename.
    pub filename: String,
    /// Field separator byte.
    pub separator: u8,
    /// Column headers in column order.
    pub header: Vec<String>,
    /// Data rows, one `Vec<String>` per exported row.
    pub rows: Vec<Vec<String>>,
}

impl CsvExport {
    /// Serialize the export into a writer, honoring the separator.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), ExportError> {
        let mut csv = csv::WriterBuilder::new()
            .delimiter(self.separator)
            .from_writer(writer);
        csv.write_record(&self.header)?;
        for row in &self.rows {
            csv.write_record(row)?;
        }
        csv.flush()?;
        Ok(())
    }

    /// Serialize the export into a string.
    pub fn to_csv_string(&self) -> Result<String, ExportError> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }
}

/// Project rows into a CSV export.
///
/// Each cell is the column's accessor value in display form, unless the
/// column carries a CSV formatter, which overrides the raw value.
pub fn project<R: GridRow, V>(
    rows: &[R],
    columns: &[Column<R, V>],
    config: &CsvConfig,
) -> CsvExport {
    let header = columns.iter().map(|c| c.header.clone()).collect();
    let data = rows
        .iter()
        .map(|row| columns.iter().map(|c| c.csv_value(row)).collect())
        .collect();
    CsvExport {
        filename: config.filename.clone(),
        separator: config.separator,
        header,
        rows: data,
    }
}
