//! The data grid: filter, sort, page and selection composed over one state
//! snapshot.

mod actions;
mod view;

pub use actions::{
    BulkAction, ErrorCallback, GridCallbacks, RowAction, RowCallback, RowsCallback,
};
pub use view::{GridView, HeaderCell, RowView};

use std::collections::HashSet;
use std::sync::Arc;

use crate::column::{Column, validate_columns};
use crate::error::{ConfigError, SourceError};
use crate::export::{self, CsvConfig, CsvExport};
use crate::filter::{self, FilterState};
use crate::page::PageState;
use crate::row::GridRow;
use crate::selection::{PageSelection, Selection};
use crate::sort::{self, SortState};
use crate::source::{PageRequest, PageResponse, PageSource};
use crate::value::CellValue;

/// Where the grid's rows come from.
///
/// The two modes are mutually exclusive by construction: a local grid runs
/// the filter/sort/page engines itself, a delegated grid forwards the whole
/// query to its source and never narrows or orders rows locally.
enum Mode<R: GridRow> {
    Local {
        rows: Vec<R>,
    },
    Delegated {
        source: Arc<dyn PageSource<R>>,
        sequence: u64,
        loading: bool,
    },
}

/// A headless data grid over rows of type `R`.
///
/// `V` is the display representation produced by column cell renderers
/// (plain text unless the caller says otherwise). The grid owns one
/// conceptual state `{filter, sort, page, selection}`; every interaction
/// recomputes the visible projection from scratch rather than patching it.
///
/// # Example
///
/// ```ignore
/// let mut grid = DataGrid::new(columns, students)?;
/// grid.set_filter("status", "act");
/// grid.toggle_sort("fullname");
/// grid.goto_page(1);
/// for row in grid.page_rows() { /* render */ }
/// ```
pub struct DataGrid<R: GridRow, V = String> {
    columns: Vec<Column<R, V>>,
    mode: Mode<R>,
    filter: FilterState,
    sort: Option<SortState>,
    page: PageState,
    selection: Selection<R::Key>,
    callbacks: GridCallbacks<R>,
    csv: CsvConfig,
    /// Filtered + sorted set (local mode). Mirrors `page_rows` in
    /// delegated mode, where the full set never exists on this side.
    view_rows: Vec<R>,
    /// The currently materialized page.
    page_rows: Vec<R>,
    page_count: usize,
    notified_selection: usize,
}

impl<R: GridRow, V> DataGrid<R, V> {
    /// Create a grid over a complete in-memory row set (local mode).
    ///
    /// Fails fast on a bad column set; see [`ConfigError`].
    pub fn new(columns: Vec<Column<R, V>>, rows: Vec<R>) -> Result<Self, ConfigError> {
        validate_columns(&columns)?;
        let mut grid = Self {
            columns,
            mode: Mode::Local { rows },
            filter: FilterState::new(),
            sort: None,
            page: PageState::default(),
            selection: Selection::new(),
            callbacks: GridCallbacks::new(),
            csv: CsvConfig::default(),
            view_rows: Vec::new(),
            page_rows: Vec::new(),
            page_count: 0,
            notified_selection: 0,
        };
        grid.recompute();
        Ok(grid)
    }

    /// Create a grid over an external row source (delegated mode).
    ///
    /// The grid starts empty; call [`load`](Self::load) (or issue and
    /// resolve a request yourself) to fetch the first page.
    pub fn with_source(
        columns: Vec<Column<R, V>>,
        source: Arc<dyn PageSource<R>>,
    ) -> Result<Self, ConfigError> {
        validate_columns(&columns)?;
        Ok(Self {
            columns,
            mode: Mode::Delegated {
                source,
                sequence: 0,
                loading: false,
            },
            filter: FilterState::new(),
            sort: None,
            page: PageState::default(),
            selection: Selection::new(),
            callbacks: GridCallbacks::new(),
            csv: CsvConfig::default(),
            view_rows: Vec::new(),
            page_rows: Vec::new(),
            page_count: 0,
            notified_selection: 0,
        })
    }

    /// Set the page size at construction time.
    pub fn with_page_size(mut self, size: usize) -> Result<Self, ConfigError> {
        self.page = PageState::new(size)?;
        self.recompute();
        Ok(self)
    }

    /// Attach the callback surface.
    pub fn with_callbacks(mut self, callbacks: GridCallbacks<R>) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Configure CSV export.
    pub fn with_csv(mut self, csv: CsvConfig) -> Self {
        self.csv = csv;
        self
    }

    // -------------------------------------------------------------------------
    // State access
    // -------------------------------------------------------------------------

    /// The column definitions.
    pub fn columns(&self) -> &[Column<R, V>] {
        &self.columns
    }

    /// The active filter state.
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// The active sort, if any.
    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// The current page index and size.
    pub fn page(&self) -> PageState {
        self.page
    }

    /// Total page count (authoritative from the source in delegated mode).
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// The currently materialized page of rows.
    pub fn page_rows(&self) -> &[R] {
        &self.page_rows
    }

    /// The filtered + sorted row set backing the current pages.
    ///
    /// In delegated mode only the current page is materialized on this
    /// side, so this is the same slice as [`page_rows`](Self::page_rows).
    pub fn filtered_rows(&self) -> &[R] {
        match self.mode {
            Mode::Local { .. } => &self.view_rows,
            Mode::Delegated { .. } => &self.page_rows,
        }
    }

    /// `true` when rows come from an external source.
    pub fn is_delegated(&self) -> bool {
        matches!(self.mode, Mode::Delegated { .. })
    }

    /// `true` while a delegated fetch is in flight.
    pub fn is_loading(&self) -> bool {
        match &self.mode {
            Mode::Local { .. } => false,
            Mode::Delegated { loading, .. } => *loading,
        }
    }

    // -------------------------------------------------------------------------
    // Filtering and sorting
    // -------------------------------------------------------------------------

    /// Set or clear a column's filter value.
    ///
    /// An empty value removes the constraint. Unknown or non-filterable
    /// columns are ignored with a warning — a filter key for a column with
    /// filtering disabled never enters the state.
    ///
    /// Local mode recomputes immediately and returns `None`; delegated mode
    /// returns the [`PageRequest`] to hand to the source.
    pub fn set_filter(&mut self, column_id: &str, value: &str) -> Option<PageRequest> {
        match self.columns.iter().find(|c| c.id == column_id) {
            Some(column) if column.filterable => {}
            Some(_) => {
                log::warn!("ignoring filter on non-filterable column {column_id:?}");
                return None;
            }
            None => {
                log::warn!("ignoring filter on unknown column {column_id:?}");
                return None;
            }
        }
        self.filter.set(column_id, value);
        self.after_query_change()
    }

    /// Set or clear the global fuzzy filter.
    pub fn set_global_filter(&mut self, value: &str) -> Option<PageRequest> {
        self.filter.set_global(value);
        self.after_query_change()
    }

    /// Advance the sort cycle for a column: ascending → descending → none.
    /// Sorting a different column replaces the previous sort.
    pub fn toggle_sort(&mut self, column_id: &str) -> Option<PageRequest> {
        if !self.columns.iter().any(|c| c.id == column_id) {
            log::warn!("ignoring sort on unknown column {column_id:?}");
            return None;
        }
        self.sort = SortState::toggle(self.sort.take(), column_id);
        self.after_query_change()
    }

    // -------------------------------------------------------------------------
    // Paging
    // -------------------------------------------------------------------------

    /// Jump to a page, clamped to the closest valid index.
    ///
    /// Returns the request to resolve in delegated mode; `None` when the
    /// clamped index equals the current page (nothing to do).
    pub fn goto_page(&mut self, index: usize) -> Option<PageRequest> {
        let previous = self.page.index;
        self.page.index = index;
        self.page.clamp(self.page_count);
        if self.page.index == previous {
            return None;
        }
        self.after_query_change()
    }

    /// Move to the next page, if any.
    pub fn next_page(&mut self) -> Option<PageRequest> {
        self.goto_page(self.page.index.saturating_add(1))
    }

    /// Move to the previous page, if any.
    pub fn prev_page(&mut self) -> Option<PageRequest> {
        self.goto_page(self.page.index.saturating_sub(1))
    }

    /// Change the page size, keeping the first row of the current page in
    /// view (its page index is recomputed for the new size).
    ///
    /// A zero size is ignored with a warning.
    pub fn set_page_size(&mut self, size: usize) -> Option<PageRequest> {
        if size == 0 {
            log::warn!("ignoring zero page size");
            return None;
        }
        if size == self.page.size {
            return None;
        }
        let first_visible = self.page.index * self.page.size;
        self.page.size = size;
        self.page.index = first_visible / size;
        self.after_query_change()
    }

    /// Re-issue the current query.
    ///
    /// Local mode recomputes in place; delegated mode returns a fresh
    /// request for the current state.
    pub fn refresh(&mut self) -> Option<PageRequest> {
        self.after_query_change()
    }

    fn after_query_change(&mut self) -> Option<PageRequest> {
        if let Some(request) = self.issue_request() {
            return Some(request);
        }
        self.recompute();
        None
    }

    fn issue_request(&mut self) -> Option<PageRequest> {
        match &mut self.mode {
            Mode::Local { .. } => None,
            Mode::Delegated {
                sequence, loading, ..
            } => {
                *sequence += 1;
                *loading = true;
                Some(PageRequest {
                    sequence: *sequence,
                    page: self.page,
                    filter: self.filter.clone(),
                    sort: self.sort.clone(),
                })
            }
        }
    }

    /// Recompute the local projection: filter → sort → count → clamp →
    /// slice → prune selection. Each step feeds the next; nothing here is
    /// incremental.
    fn recompute(&mut self) {
        let Mode::Local { rows } = &self.mode else {
            return;
        };
        let filtered = filter::apply(rows, &self.filter, &self.columns);
        let sorted = sort::apply(&filtered, self.sort.as_ref(), &self.columns);
        self.page_count = self.page.page_count(sorted.len());
        self.page.clamp(self.page_count);
        self.page_rows = self.page.slice(&sorted).to_vec();
        self.view_rows = sorted;

        let keep: HashSet<R::Key> = self.view_rows.iter().map(GridRow::key).collect();
        self.selection.retain(&keep);
        self.notify_selection();

        log::debug!(
            "recomputed grid: {} visible rows, page {}/{}",
            self.view_rows.len(),
            self.page.index,
            self.page_count,
        );
    }

    // -------------------------------------------------------------------------
    // Delegated fetch lifecycle
    // -------------------------------------------------------------------------

    /// Commit a source response for a previously issued request.
    ///
    /// Only the response matching the most recently issued request is
    /// applied; superseded responses are dropped on arrival and `false` is
    /// returned. Selection persists across committed pages.
    pub fn commit_page(&mut self, request: &PageRequest, response: PageResponse<R>) -> bool {
        let accepted = match &mut self.mode {
            Mode::Local { .. } => {
                log::warn!("commit_page called on a local grid");
                false
            }
            Mode::Delegated {
                sequence, loading, ..
            } => {
                if request.sequence == *sequence {
                    *loading = false;
                    true
                } else {
                    log::debug!(
                        "dropping stale page response (sequence {} superseded by {})",
                        request.sequence,
                        *sequence,
                    );
                    false
                }
            }
        };
        if !accepted {
            return false;
        }
        self.page_count = response.page_count;
        self.page.clamp(self.page_count);
        if self.page.index != request.page.index {
            log::debug!(
                "page index clamped to {} after authoritative page count {}",
                self.page.index,
                self.page_count,
            );
        }
        self.page_rows = response.rows;
        true
    }

    /// Record a fetch failure for a previously issued request.
    ///
    /// The last-good page stays rendered; the failure is surfaced through
    /// the `on_source_error` callback. Retrying is the caller's decision.
    pub fn fetch_failed(&mut self, request: &PageRequest, error: &SourceError) {
        if let Mode::Delegated {
            sequence, loading, ..
        } = &mut self.mode
        {
            if request.sequence == *sequence {
                *loading = false;
            }
        }
        log::warn!("page fetch failed: {error}");
        self.callbacks.emit_source_error(error);
    }

    /// Resolve an issued request against the grid's own source and commit
    /// the outcome.
    ///
    /// Returns `Ok(true)` when the response was committed, `Ok(false)` when
    /// it arrived stale. Errors are surfaced through
    /// [`fetch_failed`](Self::fetch_failed) and returned.
    pub async fn resolve(&mut self, request: PageRequest) -> Result<bool, SourceError> {
        let source = match &self.mode {
            Mode::Delegated { source, .. } => Arc::clone(source),
            Mode::Local { .. } => return Ok(false),
        };
        match source.fetch(request.clone()).await {
            Ok(response) => Ok(self.commit_page(&request, response)),
            Err(error) => {
                self.fetch_failed(&request, &error);
                Err(error)
            }
        }
    }

    /// Fetch the current page from the source in one await.
    ///
    /// Convenience for callers without concurrent interactions; issue and
    /// [`resolve`](Self::resolve) requests yourself to interleave.
    pub async fn load(&mut self) -> Result<bool, SourceError> {
        match self.refresh() {
            Some(request) => self.resolve(request).await,
            None => Ok(false),
        }
    }

    // -------------------------------------------------------------------------
    // Row data
    // -------------------------------------------------------------------------

    /// Replace the complete row set of a local grid.
    ///
    /// This is a wholesale identity change: the selection resets to empty
    /// and the projection recomputes.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        match &mut self.mode {
            Mode::Local { rows: current } => {
                *current = rows;
            }
            Mode::Delegated { .. } => {
                log::warn!("set_rows called on a delegated grid");
                return;
            }
        }
        self.selection.clear();
        self.recompute();
    }

    fn find_row(&self, key: &R::Key) -> Option<R> {
        let pool: &[R] = match &self.mode {
            Mode::Local { rows } => rows,
            Mode::Delegated { .. } => &self.page_rows,
        };
        pool.iter().find(|row| &row.key() == key).cloned()
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Toggle selection of one row.
    pub fn toggle_row(&mut self, key: R::Key) {
        self.selection.toggle(key);
        self.notify_selection();
    }

    /// Toggle selection of the currently visible page.
    ///
    /// Selects every row on the page unless all of them are already
    /// selected, in which case the page is deselected. Rows on other pages
    /// keep their state.
    pub fn toggle_page_selection(&mut self) {
        let keys: Vec<R::Key> = self.page_rows.iter().map(GridRow::key).collect();
        self.selection.toggle_page(&keys);
        self.notify_selection();
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.notify_selection();
    }

    /// Header-checkbox state for the current page (derived, not stored).
    pub fn page_selection(&self) -> PageSelection {
        let keys: Vec<R::Key> = self.page_rows.iter().map(GridRow::key).collect();
        self.selection.page_state(&keys)
    }

    /// Whether a row is selected.
    pub fn is_selected(&self, key: &R::Key) -> bool {
        self.selection.is_selected(key)
    }

    /// Number of selected rows across all pages.
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// The materialized selected rows, in visible order.
    ///
    /// In delegated mode only rows on the materialized page can be
    /// returned; keys selected on pages no longer held need a round-trip
    /// through the source to materialize.
    pub fn selected_rows(&self) -> Vec<R> {
        self.filtered_rows()
            .iter()
            .filter(|row| self.selection.is_selected(&row.key()))
            .cloned()
            .collect()
    }

    fn notify_selection(&mut self) {
        let count = self.selection.len();
        if count == self.notified_selection {
            return;
        }
        self.notified_selection = count;
        if self.callbacks.has_selection_listener() {
            let rows = self.selected_rows();
            self.callbacks.emit_selection_change(&rows);
        }
    }

    // -------------------------------------------------------------------------
    // Row actions
    // -------------------------------------------------------------------------

    /// Invoke the edit callback with the materialized row behind `key`.
    /// Returns `false` when the row is gone or no callback is set.
    pub fn edit_row(&self, key: &R::Key) -> bool {
        match self.find_row(key) {
            Some(row) => self.callbacks.emit_edit(&row),
            None => false,
        }
    }

    /// Invoke the row-click callback with the materialized row behind `key`.
    pub fn click_row(&self, key: &R::Key) -> bool {
        match self.find_row(key) {
            Some(row) => self.callbacks.emit_row_click(&row),
            None => false,
        }
    }

    /// Invoke a custom action by label with the materialized row.
    pub fn run_action(&self, label: &str, key: &R::Key) -> bool {
        let Some(action) = self.callbacks.find_action(label) else {
            return false;
        };
        match self.find_row(key) {
            Some(row) => {
                action.run(&row);
                true
            }
            None => false,
        }
    }

    /// Hand the selected rows to the remove callback and clear selection.
    ///
    /// The grid deletes nothing itself; the caller owns the deletion and is
    /// expected to re-supply fresh rows once it completes. Returns the rows
    /// that were handed over.
    pub fn remove_selected(&mut self) -> Vec<R> {
        let rows = self.selected_rows();
        if !rows.is_empty() {
            self.callbacks.emit_remove(&rows);
        }
        self.selection.clear();
        self.notify_selection();
        rows
    }

    /// Run a bulk action by label over the selected rows, then clear the
    /// selection. Returns the rows that were handed over, or `None` when no
    /// action carries that label.
    pub fn run_bulk_action(&mut self, label: &str) -> Option<Vec<R>> {
        let rows = self.selected_rows();
        let action = self.callbacks.find_bulk_action(label)?;
        if !rows.is_empty() {
            action.run(&rows);
        }
        self.selection.clear();
        self.notify_selection();
        Some(rows)
    }

    // -------------------------------------------------------------------------
    // Projections
    // -------------------------------------------------------------------------

    /// Project the filtered + sorted row set into a CSV export.
    ///
    /// Page-independent in local mode: every filtered row is exported, not
    /// just the current page. A delegated grid can only project the page it
    /// holds.
    pub fn export_csv(&self) -> CsvExport {
        export::project(self.filtered_rows(), &self.columns, &self.csv)
    }
}

impl<R: GridRow, V: From<CellValue>> DataGrid<R, V> {
    /// Produce the current view model.
    ///
    /// Cells go through the column's renderer when one is set; otherwise
    /// the raw value converts into `V` (empty for missing values).
    pub fn view(&self) -> GridView<R::Key, V> {
        let header = self
            .columns
            .iter()
            .map(|column| HeaderCell {
                id: column.id.clone(),
                header: column.header.clone(),
                sort: self
                    .sort
                    .as_ref()
                    .filter(|s| s.column_id == column.id)
                    .map(|s| s.direction),
                filterable: column.filterable,
                filter: self.filter.get(&column.id).map(str::to_owned),
                width: column.width,
            })
            .collect();

        let rows = self
            .page_rows
            .iter()
            .map(|row| {
                let key = row.key();
                let cells = self
                    .columns
                    .iter()
                    .map(|column| {
                        let value = column.value(row);
                        match column.renderer() {
                            Some(renderer) => renderer(row, &value),
                            None => V::from(value),
                        }
                    })
                    .collect();
                RowView {
                    selected: self.selection.is_selected(&key),
                    key,
                    cells,
                }
            })
            .collect();

        GridView {
            header,
            rows,
            page_index: self.page.index,
            page_count: self.page_count,
            page_size: self.page.size,
            loading: self.is_loading(),
            page_selection: self.page_selection(),
            selected_count: self.selection.len(),
        }
    }
}
