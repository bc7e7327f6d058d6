//! Bounded icon cache.

use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;

/// Default capacity of the icon cache.
pub const DEFAULT_ICON_CAPACITY: NonZeroUsize = NonZeroUsize::new(100).unwrap();

//------------------------------------------------------------------------------
/// A bounded least-recently-used cache from item title to a rendered
/// icon handle.
///
/// The handle type is the embedder's; the model never looks inside it.
/// Absence is never an error — a miss means the caller decodes the icon
/// again and [`put`](Self::put)s it back. Inserting past capacity
/// silently evicts the least recently used entry, and a
/// [`get`](Self::get) counts as a use. The cache is process-scoped and
/// released when the model is dropped.
pub struct IconCache<I> {
    icons: Mutex<LruCache<String, I>>,
}

impl<I: Clone> IconCache<I> {
    /// Creates a cache with [`DEFAULT_ICON_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_ICON_CAPACITY)
    }

    /// Creates a cache bounded to `capacity` entries.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            icons: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Looks up the icon for `title`, refreshing its recency on a hit.
    pub fn get(&self, title: &str) -> Option<I> {
        self.icons.lock().get(title).cloned()
    }

    /// Stores the icon for `title`, evicting the least recently used
    /// entry if the cache is full.
    pub fn put(&self, title: impl Into<String>, icon: I) {
        self.icons.lock().put(title.into(), icon);
    }

    /// Number of cached icons.
    pub fn len(&self) -> usize {
        self.icons.lock().len()
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.icons.lock().is_empty()
    }

    /// Drops every cached icon.
    pub fn clear(&self) {
        self.icons.lock().clear();
    }
}

impl<I: Clone> Default for IconCache<I> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn cache(capacity: usize) -> IconCache<u32> {
        IconCache::with_capacity(NonZeroUsize::new(capacity).unwrap())
    }

    #[test]
    fn miss_is_not_an_error() {
        let icons = cache(4);
        assert_eq!(icons.get("absent"), None);
        assert!(icons.is_empty());
    }

    #[test]
    fn inserting_past_capacity_evicts_the_least_recently_used() {
        let icons = cache(3);
        icons.put("a", 1);
        icons.put("b", 2);
        icons.put("c", 3);
        icons.put("d", 4);
        assert_eq!(icons.len(), 3);
        assert_eq!(icons.get("a"), None);
        assert_eq!(icons.get("b"), Some(2));
        assert_eq!(icons.get("d"), Some(4));
    }

    #[test]
    fn get_refreshes_recency_and_protects_from_eviction() {
        let icons = cache(2);
        icons.put("a", 1);
        icons.put("b", 2);
        // Touch "a" so "b" becomes the eviction candidate.
        assert_eq!(icons.get("a"), Some(1));
        icons.put("c", 3);
        assert_eq!(icons.get("a"), Some(1));
        assert_eq!(icons.get("b"), None);
    }

    #[test]
    fn put_overwrites_in_place() {
        let icons = cache(2);
        icons.put("a", 1);
        icons.put("a", 9);
        assert_eq!(icons.len(), 1);
        assert_eq!(icons.get("a"), Some(9));
    }

    #[test]
    fn clear_releases_everything() {
        let icons = cache(2);
        icons.put("a", 1);
        icons.clear();
        assert!(icons.is_empty());
        assert_eq!(icons.get("a"), None);
    }
}
