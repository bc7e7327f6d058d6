use std::fmt::{Display, Error, Formatter};

use crate::{Item, MatchEngine};

//------------------------------------------------------------------------------
// MatchAll engine
/// Engine for the empty query: every item stays visible, input order
/// untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchAllEngine;

impl MatchEngine for MatchAllEngine {
    fn match_item(&self, _item: &Item) -> bool {
        true
    }
}

impl Display for MatchAllEngine {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "(All)")
    }
}
