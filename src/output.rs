use crate::Item;

/// What a confirmed session hands back to its caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChooserOutput {
    /// The selected items, in backing-collection order.
    pub items: Vec<Item>,
    /// One flag per backing item, in backing order; the length always
    /// equals the backing collection's.
    pub mask: Vec<bool>,
}
