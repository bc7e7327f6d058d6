use std::fmt::{Display, Error, Formatter};

use crate::{Item, MatchEngine};

//------------------------------------------------------------------------------
// OrEngine, a combinator
/// Tries each inner engine in order and keeps the item on the first hit.
pub struct OrEngine {
    engines: Vec<Box<dyn MatchEngine>>,
}

impl OrEngine {
    /// Starts building an empty combinator.
    pub fn builder() -> Self {
        Self { engines: vec![] }
    }

    /// Appends engines; they are tried in the order given.
    pub fn engines(mut self, mut engines: Vec<Box<dyn MatchEngine>>) -> Self {
        self.engines.append(&mut engines);
        self
    }

    /// Finalizes the builder.
    pub fn build(self) -> Self {
        self
    }
}

impl MatchEngine for OrEngine {
    fn match_item(&self, item: &Item) -> bool {
        self.engines.iter().any(|engine| engine.match_item(item))
    }
}

impl Display for OrEngine {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(
            f,
            "(Or: {})",
            self.engines
                .iter()
                .map(|e| format!("{e}"))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::engine::{WholeTextEngine, WordEngine};

    #[test]
    fn first_hit_wins() {
        let engine = OrEngine::builder()
            .engines(vec![
                Box::new(WholeTextEngine::builder("mode").build()),
                Box::new(WordEngine::builder("mode").build()),
            ])
            .build();
        assert!(engine.match_item(&Item::new("Dark Mode", "")));
        assert!(!engine.match_item(&Item::new("Settings", "")));
    }

    #[test]
    fn empty_combinator_matches_nothing() {
        let engine = OrEngine::builder().build();
        assert!(!engine.match_item(&Item::new("Dark Mode", "")));
    }
}
