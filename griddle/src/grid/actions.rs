//! Caller-supplied callbacks and row-action descriptors.
//!
//! Everything here receives materialized row objects, never indices —
//! indices are unstable under filtering and sorting and must not leak out.

use std::fmt;
use std::sync::Arc;

use crate::error::SourceError;

/// Callback receiving a single materialized row.
pub type RowCallback<R> = Arc<dyn Fn(&R) + Send + Sync>;

/// Callback receiving a batch of materialized rows.
pub type RowsCallback<R> = Arc<dyn Fn(&[R]) + Send + Sync>;

/// Callback receiving a delegated-fetch failure.
pub type ErrorCallback = Arc<dyn Fn(&SourceError) + Send + Sync>;

/// A custom row action: a labeled button in the row's action menu.
pub struct RowAction<R> {
    /// Action label.
    pub label: String,
    /// Optional icon hint for the presentation layer.
    pub icon: Option<String>,
    handler: RowCallback<R>,
}

impl<R> RowAction<R> {
    /// Create an action with a label and a handler.
    pub fn new(label: impl Into<String>, handler: impl Fn(&R) + Send + Sync + 'static) -> Self {
        Self {
            label: label.into(),
            icon: None,
            handler: Arc::new(handler),
        }
    }

    /// Attach an icon hint.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Invoke the action for a row.
    pub fn run(&self, row: &R) {
        (self.handler)(row);
    }
}

impl<R> Clone for RowAction<R> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            icon: self.icon.clone(),
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<R> fmt::Debug for RowAction<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowAction")
            .field("label", &self.label)
            .field("icon", &self.icon)
            .finish_non_exhaustive()
    }
}

/// A bulk action over the current selection: restore, permanent delete,
/// export-to-service, whatever the caller wires up.
///
/// The handler receives the materialized selected rows; the grid clears the
/// selection after running it, as it does for the built-in remove.
pub struct BulkAction<R> {
    /// Action label.
    pub label: String,
    /// Optional icon hint for the presentation layer.
    pub icon: Option<String>,
    handler: RowsCallback<R>,
}

impl<R> BulkAction<R> {
    /// Create a bulk action with a label and a handler.
    pub fn new(label: impl Into<String>, handler: impl Fn(&[R]) + Send + Sync + 'static) -> Self {
        Self {
            label: label.into(),
            icon: None,
            handler: Arc::new(handler),
        }
    }

    /// Attach an icon hint.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Invoke the action for the selected rows.
    pub fn run(&self, rows: &[R]) {
        (self.handler)(rows);
    }
}

impl<R> Clone for BulkAction<R> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            icon: self.icon.clone(),
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<R> fmt::Debug for BulkAction<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BulkAction")
            .field("label", &self.label)
            .field("icon", &self.icon)
            .finish_non_exhaustive()
    }
}

/// The optional callback surface of a grid.
///
/// All hooks are optional; an unset hook makes the corresponding grid
/// operation a no-op rather than an error.
pub struct GridCallbacks<R> {
    on_edit: Option<RowCallback<R>>,
    on_remove: Option<RowsCallback<R>>,
    on_row_click: Option<RowCallback<R>>,
    on_selection_change: Option<RowsCallback<R>>,
    on_source_error: Option<ErrorCallback>,
    actions: Vec<RowAction<R>>,
    bulk_actions: Vec<BulkAction<R>>,
}

impl<R> Default for GridCallbacks<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> GridCallbacks<R> {
    /// Create an empty callback set.
    pub fn new() -> Self {
        Self {
            on_edit: None,
            on_remove: None,
            on_row_click: None,
            on_selection_change: None,
            on_source_error: None,
            actions: Vec::new(),
            bulk_actions: Vec::new(),
        }
    }

    /// Called with the row behind the edit action.
    pub fn on_edit(mut self, f: impl Fn(&R) + Send + Sync + 'static) -> Self {
        self.on_edit = Some(Arc::new(f));
        self
    }

    /// Called with the selected rows behind a bulk remove.
    ///
    /// The grid does not delete anything itself; the callee owns the
    /// deletion and re-supplies fresh rows afterwards.
    pub fn on_remove(mut self, f: impl Fn(&[R]) + Send + Sync + 'static) -> Self {
        self.on_remove = Some(Arc::new(f));
        self
    }

    /// Called with the clicked row.
    pub fn on_row_click(mut self, f: impl Fn(&R) + Send + Sync + 'static) -> Self {
        self.on_row_click = Some(Arc::new(f));
        self
    }

    /// Called with the materialized selected rows whenever the selected
    /// count changes.
    pub fn on_selection_change(mut self, f: impl Fn(&[R]) + Send + Sync + 'static) -> Self {
        self.on_selection_change = Some(Arc::new(f));
        self
    }

    /// Called when a delegated fetch fails. Retry policy stays with the
    /// caller; the grid keeps its last-good page.
    pub fn on_source_error(mut self, f: impl Fn(&SourceError) + Send + Sync + 'static) -> Self {
        self.on_source_error = Some(Arc::new(f));
        self
    }

    /// Add a custom row action.
    pub fn action(mut self, action: RowAction<R>) -> Self {
        self.actions.push(action);
        self
    }

    /// Add a bulk action over the selection.
    pub fn bulk_action(mut self, action: BulkAction<R>) -> Self {
        self.bulk_actions.push(action);
        self
    }

    /// The registered custom actions.
    pub fn actions(&self) -> &[RowAction<R>] {
        &self.actions
    }

    /// The registered bulk actions.
    pub fn bulk_actions(&self) -> &[BulkAction<R>] {
        &self.bulk_actions
    }

    pub(crate) fn emit_edit(&self, row: &R) -> bool {
        match &self.on_edit {
            Some(f) => {
                f(row);
                true
            }
            None => false,
        }
    }

    pub(crate) fn emit_remove(&self, rows: &[R]) -> bool {
        match &self.on_remove {
            Some(f) => {
                f(rows);
                true
            }
            None => false,
        }
    }

    pub(crate) fn emit_row_click(&self, row: &R) -> bool {
        match &self.on_row_click {
            Some(f) => {
                f(row);
                true
            }
            None => false,
        }
    }

    pub(crate) fn has_selection_listener(&self) -> bool {
        self.on_selection_change.is_some()
    }

    pub(crate) fn emit_selection_change(&self, rows: &[R]) {
        if let Some(f) = &self.on_selection_change {
            f(rows);
        }
    }

    pub(crate) fn emit_source_error(&self, error: &SourceError) {
        if let Some(f) = &self.on_source_error {
            f(error);
        }
    }

    pub(crate) fn find_action(&self, label: &str) -> Option<&RowAction<R>> {
        self.actions.iter().find(|a| a.label == label)
    }

    pub(crate) fn find_bulk_action(&self, label: &str) -> Option<&BulkAction<R>> {
        self.bulk_actions.iter().find(|a| a.label == label)
    }
}

impl<R> Clone for GridCallbacks<R> {
    fn clone(&self) -> Self {
        Self {
            on_edit: self.on_edit.as_ref().map(Arc::clone),
            on_remove: self.on_remove.as_ref().map(Arc::clone),
            on_row_click: self.on_row_click.as_ref().map(Arc::clone),
            on_selection_change: self.on_selection_change.as_ref().map(Arc::clone),
            on_source_error: self.on_source_error.as_ref().map(Arc::clone),
            actions: self.actions.clone(),
            bulk_actions: self.bulk_actions.clone(),
        }
    }
}

impl<R> fmt::Debug for GridCallbacks<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridCallbacks")
            .field("on_edit", &self.on_edit.is_some())
            .field("on_remove", &self.on_remove.is_some())
            .field("on_row_click", &self.on_row_click.is_some())
            .field("on_selection_change", &self.on_selection_change.is_some())
            .field("on_source_error", &self.on_source_error.is_some())
            .field("actions", &self.actions)
            .field("bulk_actions", &self.bulk_actions)
            .finish()
    }
}
