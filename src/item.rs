//! Item representation.
//!
//! Items are plain values; identity is the item's index in the model's
//! backing collection, never title equality (titles need not be unique).

/// One choosable option: a title used for matching and display, an
/// optional description, and its selection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Display text and match key.
    pub title: String,
    /// Secondary line; empty means "not shown".
    pub desc: String,
    /// Current selection state.
    pub selected: bool,
}

impl Item {
    /// Creates an unselected item.
    pub fn new(title: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            desc: desc.into(),
            selected: false,
        }
    }

    /// Sets the initial selection state.
    #[must_use]
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

/// One row of a filtered view: a copy of the item for display plus the
/// index it occupies in the backing collection.
///
/// The index is the row's identity; it is what
/// [`SelectionModel::toggle`](crate::SelectionModel::toggle) takes, so a
/// toggle through any view is visible through every other view of the
/// same model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleItem {
    /// Position in the backing collection.
    pub index: usize,
    /// The item as it was when the filter ran.
    pub item: Item,
}
