use std::fmt::{Display, Error, Formatter};

use crate::{Item, MatchEngine};

//------------------------------------------------------------------------------
// Per-word engine
/// Case-insensitive substring match against each single-space-delimited
/// word of the title, stopping at the first matching word.
///
/// Empty tokens produced by leading or doubled spaces never contain a
/// non-empty query, so they fall out naturally.
#[derive(Debug)]
pub struct WordEngine {
    query: String,
}

impl WordEngine {
    /// Starts building the engine; the query is lowercased once here.
    pub fn builder(query: &str) -> Self {
        Self {
            query: query.to_lowercase(),
        }
    }

    /// Finalizes the builder.
    pub fn build(self) -> Self {
        self
    }
}

impl MatchEngine for WordEngine {
    fn match_item(&self, item: &Item) -> bool {
        item.title
            .to_lowercase()
            .split(' ')
            .any(|word| word.contains(&self.query))
    }
}

impl Display for WordEngine {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "(Word|{})", self.query)
    }
}
