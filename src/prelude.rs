//! Convenience re-exports of commonly used types.
//!
//! This module provides a convenient way to import the commonly used
//! chooser types and traits with a single `use chooser::prelude::*;`
//! statement.

pub use crate::cache::{DEFAULT_ICON_CAPACITY, IconCache};
pub use crate::engine::{SubstringEngineFactory, filter_items};
pub use crate::matcher::{Matcher, MatcherControl};
pub use crate::output::ChooserOutput;
pub use crate::session::{ChooserSession, CompletionCallback};
pub use crate::*;
pub use std::sync::Arc;
