//! Row selection tracked by key.

use std::collections::HashSet;
use std::hash::Hash;

/// Derived selection state for the currently visible page.
///
/// Drives the header checkbox: unchecked, indeterminate, or checked. Always
/// computed from the page's keys, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSelection {
    /// No row on the page is selected.
    None,
    /// Some, but not all, rows on the page are selected.
    Partial,
    /// Every row on the page is selected.
    All,
}

/// Tracks selected rows by their keys.
///
/// Selection outlives page navigation: keys stay selected while the user
/// pages around, until the caller clears them, the visible set drops them,
/// or the row set is replaced wholesale.
#[derive(Debug, Clone)]
pub struct Selection<K: Clone + Eq + Hash> {
    selected: HashSet<K>,
}

impl<K: Clone + Eq + Hash> Default for Selection<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Eq + Hash> Selection<K> {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self {
            selected: HashSet::new(),
        }
    }

    /// Toggle selection for a key. Returns `true` if the key is now selected.
    pub fn toggle(&mut self, key: K) -> bool {
        if self.selected.contains(&key) {
            self.selected.remove(&key);
            false
        } else {
            self.selected.insert(key);
            true
        }
    }

    /// Toggle the whole page.
    ///
    /// If every key on the page is already selected, the page is
    /// deselected; otherwise every key on the page becomes selected. Rows
    /// on other pages are untouched either way.
    pub fn toggle_page(&mut self, page_keys: &[K]) {
        match self.page_state(page_keys) {
            PageSelection::All => {
                for key in page_keys {
                    self.selected.remove(key);
                }
            }
            _ => {
                for key in page_keys {
                    self.selected.insert(key.clone());
                }
            }
        }
    }

    /// Derive the header-checkbox state for a page.
    pub fn page_state(&self, page_keys: &[K]) -> PageSelection {
        if page_keys.is_empty() {
            return PageSelection::None;
        }
        let selected = page_keys
            .iter()
            .filter(|key| self.selected.contains(key))
            .count();
        if selected == 0 {
            PageSelection::None
        } else if selected == page_keys.len() {
            PageSelection::All
        } else {
            PageSelection::Partial
        }
    }

    /// Check if a key is selected.
    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    /// Drop keys no longer present in the visible row set.
    pub fn retain(&mut self, keep: &HashSet<K>) {
        self.selected.retain(|key| keep.contains(key));
    }

    /// Clear all selections.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Number of selected keys.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// `true` when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Iterate over the selected keys.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.selected.iter()
    }
}
