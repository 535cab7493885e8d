//! A headless data-grid engine.
//!
//! Filtering, sorting, pagination, row selection and CSV projection over
//! caller-supplied rows, composed behind one [`DataGrid`](grid::DataGrid)
//! state machine. The grid owns state and projections only — it emits a
//! view model and structured events, and leaves presentation (DOM,
//! terminal, whatever) to the caller.
//!
//! Rows either live in memory (local mode, the grid runs its own engines)
//! or behind an async [`PageSource`](source::PageSource) (delegated mode,
//! the source owns filtering, sorting and slicing). The two modes are
//! mutually exclusive by construction.

pub mod column;
pub mod error;
pub mod export;
pub mod filter;
pub mod grid;
pub mod page;
pub mod prefs;
pub mod row;
pub mod selection;
pub mod sort;
pub mod source;
pub mod value;

pub mod prelude {
    //! Convenience re-exports for grid consumers.

    pub use crate::column::{Accessor, Column};
    pub use crate::error::{ConfigError, ExportError, SourceError};
    pub use crate::export::{CsvConfig, CsvExport};
    pub use crate::filter::FilterState;
    pub use crate::grid::{
        BulkAction, DataGrid, GridCallbacks, GridView, HeaderCell, RowAction, RowView,
    };
    pub use crate::page::{DEFAULT_PAGE_SIZE, PAGE_SIZES, PageState};
    pub use crate::prefs::{GridPrefs, MemoryBackend, PrefsBackend, PrefsProvider};
    pub use crate::row::GridRow;
    pub use crate::selection::{PageSelection, Selection};
    pub use crate::sort::{SortDirection, SortState};
    pub use crate::source::{PageRequest, PageResponse, PageSource};
    pub use crate::value::CellValue;
}
