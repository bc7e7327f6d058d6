//! The selection model owns the authoritative item collection.

use parking_lot::RwLock;

use crate::engine::filter_items;
use crate::output::ChooserOutput;
use crate::{ChooserError, Item, SelectMode, VisibleItem};

//------------------------------------------------------------------------------
/// Owns the backing collection and enforces the selection-mode
/// invariants.
///
/// Construction performs the one and only reorder: a stable sort that
/// moves selected items ahead of unselected ones, ties keeping input
/// order. After that an item's index is a stable identity for the
/// model's lifetime, which is what lets filtered views address items by
/// index instead of holding copies.
///
/// All access goes through an internal lock, so the model can hand out
/// snapshots to a background filter while the caller's thread keeps
/// toggling.
pub struct SelectionModel {
    items: RwLock<Vec<Item>>,
    mode: SelectMode,
}

impl SelectionModel {
    /// Creates a model over `items` with the given selection mode.
    ///
    /// In [`SelectMode::Single`] at most one item may be selected; if
    /// the input carries several, the first one wins and the rest are
    /// cleared before the selected-first sort.
    pub fn new(mut items: Vec<Item>, mode: SelectMode) -> Self {
        if mode == SelectMode::Single {
            let mut seen = false;
            for item in items.iter_mut() {
                if item.selected && std::mem::replace(&mut seen, true) {
                    item.selected = false;
                }
            }
        }

        // sort_by_key is stable, so ties keep their input order
        items.sort_by_key(|item| !item.selected);
        trace!("model created: {} items, mode {mode:?}", items.len());

        Self {
            items: RwLock::new(items),
            mode,
        }
    }

    /// The selection cardinality policy this model was built with.
    pub fn mode(&self) -> SelectMode {
        self.mode
    }

    /// Number of items in the backing collection.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Returns true if the backing collection is empty.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Flips the selection state at `index` and returns the new state.
    ///
    /// [`SelectMode::Multiple`] flips unconditionally. In
    /// [`SelectMode::Single`], selecting an unselected item deselects
    /// the previous holder under the same write lock, so an observer
    /// never sees two selected items; re-tapping the sole selected item
    /// leaves it selected — the only way out of a single selection is
    /// selecting another item.
    ///
    /// An out-of-range index fails with
    /// [`ChooserError::IndexOutOfRange`] and leaves the model untouched.
    pub fn toggle(&self, index: usize) -> Result<bool, ChooserError> {
        let mut items = self.items.write();
        let len = items.len();
        if index >= len {
            return Err(ChooserError::IndexOutOfRange { index, len });
        }

        match self.mode {
            SelectMode::Multiple => {
                items[index].selected = !items[index].selected;
            }
            SelectMode::Single => {
                if !items[index].selected {
                    if let Some(previous) = items.iter_mut().find(|item| item.selected) {
                        previous.selected = false;
                    }
                    items[index].selected = true;
                }
            }
        }

        let selected = items[index].selected;
        debug!("toggle {index} -> {selected}");
        Ok(selected)
    }

    /// All selected items, in backing-collection order.
    pub fn selected_items(&self) -> Vec<Item> {
        self.items
            .read()
            .iter()
            .filter(|item| item.selected)
            .cloned()
            .collect()
    }

    /// One flag per backing item, `mask[i] == items[i].selected`. The
    /// length always equals the backing collection's.
    pub fn selection_mask(&self) -> Vec<bool> {
        self.items.read().iter().map(|item| item.selected).collect()
    }

    /// An immutable copy of the backing collection, taken under the read
    /// lock, for safe handoff to a background filter.
    pub fn snapshot(&self) -> Vec<Item> {
        self.items.read().clone()
    }

    /// Synchronously filters a fresh snapshot with the standard engine
    /// chain. Rows carry backing indices for [`toggle`](Self::toggle).
    pub fn query(&self, query: &str) -> Vec<VisibleItem> {
        filter_items(&self.snapshot(), query)
    }

    /// Selected items plus selection mask in one pass under the read
    /// lock; this is the confirm payload.
    pub fn selection(&self) -> ChooserOutput {
        let items = self.items.read();
        ChooserOutput {
            items: items.iter().filter(|item| item.selected).cloned().collect(),
            mask: items.iter().map(|item| item.selected).collect(),
        }
    }
}
