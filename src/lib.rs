//! Chooser is a filterable, selectable list model.
//!
//! It provides the data structure and algorithms behind a chooser dialog:
//! an authoritative backing collection of items, single or multiple
//! selection semantics, live substring filtering with last-query-wins
//! dispatch, and a bounded icon cache. Rendering and dialog chrome are
//! the embedder's job; the model behaves the same whether rows end up in
//! a list, a grid, or anywhere else.
//!
//! # Examples
//!
//! ```
//! use chooser::prelude::*;
//!
//! let model = SelectionModel::new(
//!     vec![
//!         Item::new("Wi-Fi Settings", ""),
//!         Item::new("Battery Saver", ""),
//!         Item::new("Dark Mode", "").selected(true),
//!     ],
//!     SelectMode::Single,
//! );
//!
//! // Selected items are stable-sorted to the front, so "Dark Mode" is
//! // now backing index 0.
//! let visible = model.query("wi");
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].item.title, "Wi-Fi Settings");
//!
//! // Toggling by original index replaces the single selection.
//! model.toggle(visible[0].index).unwrap();
//! assert_eq!(model.selection_mask(), vec![false, true, false]);
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

use std::fmt::Display;

use thiserror::Error;

pub use crate::item::{Item, VisibleItem};
pub use crate::model::SelectionModel;
pub use crate::output::ChooserOutput;

pub mod cache;
pub mod engine;
pub mod item;
pub mod matcher;
pub mod model;
mod output;
pub mod prelude;
pub mod session;

//------------------------------------------------------------------------------
/// Selection cardinality policy, fixed for a model's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectMode {
    /// At most one item is selected at any time. Selecting an item
    /// replaces the previous selection; re-tapping the sole selected
    /// item leaves it selected.
    #[default]
    Single,
    /// Any subset of items may be selected.
    Multiple,
}

/// Errors surfaced by the chooser core.
///
/// Filtering and the icon cache never fail on well-formed input; cache
/// capacity is enforced by silent eviction, not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChooserError {
    /// A toggle addressed an index outside the backing collection. The
    /// model state is untouched; this usually indicates a stale row
    /// index on the caller's side.
    #[error("index {index} out of range for {len} items")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the backing collection at the time of the call.
        len: usize,
    },
}

//==============================================================================
// A match engine decides item visibility for one query

/// A matching engine decides whether an item stays visible for the query
/// it was built from.
pub trait MatchEngine: Send + Sync + Display {
    /// Returns true if the item should be kept in the filtered view.
    fn match_item(&self, item: &Item) -> bool;
}

/// Factory for compiling a raw query string into a match engine.
pub trait MatchEngineFactory {
    /// Creates an engine for the given query. The query is taken
    /// literally; whitespace-only queries are not normalized to empty.
    fn create_engine(&self, query: &str) -> Box<dyn MatchEngine>;
}
