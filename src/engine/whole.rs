use std::fmt::{Display, Error, Formatter};

use crate::{Item, MatchEngine};

//------------------------------------------------------------------------------
// Whole-title engine
/// Case-insensitive substring match against the whole title.
///
/// This is the first rule of the chooser filter; it is the only rule
/// that can hit when the query spans a word boundary, and whitespace in
/// the query is matched literally.
#[derive(Debug)]
pub struct WholeTextEngine {
    query: String,
}

impl WholeTextEngine {
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

impl MatchEngine for WholeTextEngine {
    fn match_item(&self, item: &Item) -> bool {
        item.title.to_lowercase().contains(&self.query)
    }
}

impl Display for WholeTextEngine {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "(Whole|{})", self.query)
    }
}
