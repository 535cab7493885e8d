//! Error types.

/// Errors raised while constructing a grid.
///
/// Column and paging configuration is validated up front so a bad setup
/// fails at construction, not at render time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The column set is empty.
    #[error("no columns defined")]
    NoColumns,

    /// Two columns share the same id.
    #[error("duplicate column id: {id}")]
    DuplicateColumn {
        /// The offending column id.
        id: String,
    },

    /// A page size of zero was requested.
    #[error("page size must be at least 1")]
    ZeroPageSize,
}

/// Error type for delegated page-source failures.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct SourceError {
    /// Error message.
    pub message: String,
}

impl SourceError {
    /// Create a new source error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for SourceError {
    fn from(err: std::io::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<String> for SourceError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for SourceError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// Errors raised while writing a CSV export to a sink.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// CSV serialization failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The underlying writer failed.
    #[error("write error: {0}")]
    Io(#[from] std::io::Error),

    /// The exported bytes were not valid UTF-8.
    #[error("export is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
