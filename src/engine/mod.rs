//! Filter engines.
//!
//! A query string is compiled into a [`MatchEngine`] which is then run
//! over an immutable snapshot of the backing collection. The standard
//! chain mirrors the classic chooser filter's two-step rule: match the
//! query against the whole lowercased title first, and only then against
//! its space-delimited words.

mod all;
mod or;
mod whole;
mod word;

pub use all::MatchAllEngine;
pub use or::OrEngine;
pub use whole::WholeTextEngine;
pub use word::WordEngine;

use crate::{Item, MatchEngine, MatchEngineFactory, VisibleItem};

//------------------------------------------------------------------------------
/// Builds the standard substring engine chain for a query.
///
/// The empty query compiles to [`MatchAllEngine`]; anything else, a
/// whitespace-only string included, compiles to whole-title matching
/// with a per-word fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringEngineFactory;

impl MatchEngineFactory for SubstringEngineFactory {
    fn create_engine(&self, query: &str) -> Box<dyn MatchEngine> {
        if query.is_empty() {
            return Box::new(MatchAllEngine);
        }

        Box::new(
            OrEngine::builder()
                .engines(vec![
                    Box::new(WholeTextEngine::builder(query).build()),
                    Box::new(WordEngine::builder(query).build()),
                ])
                .build(),
        )
    }
}

//------------------------------------------------------------------------------
/// Filters a snapshot of the backing collection with the standard engine
/// chain and returns the visible rows.
///
/// The filter is stable: output order equals input order, no re-sorting.
/// The snapshot is never mutated, and each returned row carries the
/// item's index in the snapshot (which equals its backing index).
pub fn filter_items(snapshot: &[Item], query: &str) -> Vec<VisibleItem> {
    let engine = SubstringEngineFactory.create_engine(query);
    run_engine(engine.as_ref(), snapshot)
}

/// Runs an already-built engine over a snapshot, preserving input order.
pub fn run_engine(engine: &dyn MatchEngine, snapshot: &[Item]) -> Vec<VisibleItem> {
    snapshot
        .iter()
        .enumerate()
        .filter(|(_, item)| engine.match_item(item))
        .map(|(index, item)| VisibleItem {
            index,
            item: item.clone(),
        })
        .collect()
}
