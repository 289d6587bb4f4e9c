use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::outcome::Outcome;

use super::{CacheError, Handle, Load};

struct Entry<T> {
    path: PathBuf,
    resource: Arc<T>,
}

/// Path-keyed store of loaded resources.
///
/// Invariants:
/// - at most one entry per path
/// - a path keeps its handle for as long as its entry lives
/// - handles start at 0, increase by one per insert and are never reused
/// - `by_path` and `entries` always describe the same set of entries
///
/// Resources are shared through `Arc`, so a holder may keep using one after the
/// cache has dropped its entry. The cache does no internal locking; callers
/// that share it across threads serialize access themselves.
pub struct ResourceCache<T> {
    by_path: HashMap<PathBuf, Handle>,
    entries: BTreeMap<Handle, Entry<T>>,
    next: u64,
}

impl<T: Load> ResourceCache<T> {
    pub fn new() -> Self {
        Self {
            by_path: HashMap::new(),
            entries: BTreeMap::new(),
            next: 0,
        }
    }

    /// Registers the resource at `path`, loading it on a cache miss.
    ///
    /// A path that is already cached returns its existing handle without
    /// reloading. A failed load leaves the cache untouched.
    pub fn add(&mut self, path: impl AsRef<Path>) -> Outcome<Handle, CacheError> {
        let path = path.as_ref();

        if let Some(&handle) = self.by_path.get(path) {
            log::debug!("resource cache hit: {} -> {handle}", path.display());
            return Outcome::success(handle);
        }

        let resource = match T::load_from_file(path) {
            Outcome::Success(resource) => resource,
            Outcome::Failure(err) => {
                log::warn!("resource load failed: {err}");
                return Outcome::failure(CacheError::from(err));
            }
        };

        let handle = Handle(self.next);
        self.next += 1;

        self.by_path.insert(path.to_path_buf(), handle);
        self.entries.insert(
            handle,
            Entry { path: path.to_path_buf(), resource: Arc::new(resource) },
        );

        log::debug!("resource cached: {} -> {handle}", path.display());
        Outcome::success(handle)
    }
}

impl<T> ResourceCache<T> {
    /// Drops the entry for `handle` and returns its resource.
    ///
    /// Unknown or already removed handles are a no-op.
    pub fn remove(&mut self, handle: Handle) -> Option<Arc<T>> {
        let entry = self.entries.remove(&handle)?;
        self.by_path.remove(&entry.path);
        log::debug!("resource evicted: {} ({handle})", entry.path.display());
        Some(entry.resource)
    }

    pub fn get(&self, handle: Handle) -> Option<Arc<T>> {
        self.entries.get(&handle).map(|e| Arc::clone(&e.resource))
    }

    #[inline]
    pub fn has(&self, handle: Handle) -> bool {
        self.entries.contains_key(&handle)
    }

    /// Handle currently assigned to `path`, if it is cached.
    pub fn handle_of(&self, path: impl AsRef<Path>) -> Option<Handle> {
        self.by_path.get(path.as_ref()).copied()
    }

    pub fn path_of(&self, handle: Handle) -> Option<&Path> {
        self.entries.get(&handle).map(|e| e.path.as_path())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry. The handle counter is kept, so later inserts still
    /// receive fresh handles.
    pub fn clear(&mut self) {
        self.by_path.clear();
        self.entries.clear();
    }

    /// Iterates entries in handle order.
    pub fn iter(&self) -> impl Iterator<Item = (Handle, &Path, &Arc<T>)> {
        self.entries
            .iter()
            .map(|(&handle, e)| (handle, e.path.as_path(), &e.resource))
    }
}

impl<T: Load> Default for ResourceCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashSet;

    use super::*;
    use crate::resource::LoadError;

    thread_local! {
        static LOADS: RefCell<Vec<PathBuf>> = const { RefCell::new(Vec::new()) };
        static BROKEN: RefCell<HashSet<PathBuf>> = RefCell::new(HashSet::new());
    }

    /// Test resource: records every load, fails for paths marked broken.
    #[derive(Debug)]
    struct Probe {
        source: PathBuf,
    }

    impl Load for Probe {
        fn load_from_file(path: &Path) -> Outcome<Self, LoadError> {
            LOADS.with(|l| l.borrow_mut().push(path.to_path_buf()));
            if BROKEN.with(|b| b.borrow().contains(path)) {
                return Outcome::failure(LoadError::invalid(path, "marked broken"));
            }
            Outcome::success(Self { source: path.to_path_buf() })
        }
    }

    fn loads_of(path: &str) -> usize {
        LOADS.with(|l| l.borrow().iter().filter(|p| p.as_path() == Path::new(path)).count())
    }

    fn break_path(path: &str) {
        BROKEN.with(|b| {
            b.borrow_mut().insert(PathBuf::from(path));
        });
    }

    fn fix_path(path: &str) {
        BROKEN.with(|b| {
            b.borrow_mut().remove(Path::new(path));
        });
    }

    // ── add ───────────────────────────────────────────────────────────────

    #[test]
    fn add_same_path_twice_returns_same_handle_without_reload() {
        let mut cache = ResourceCache::<Probe>::new();

        let first = cache.add("same.png").unwrap();
        let second = cache.add("same.png").unwrap();

        assert_eq!(first, second);
        assert_eq!(loads_of("same.png"), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn distinct_paths_get_increasing_handles() {
        let mut cache = ResourceCache::<Probe>::new();

        let a = cache.add("first.png").unwrap();
        let b = cache.add("second.png").unwrap();

        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert!(a < b);
    }

    #[test]
    fn failed_load_leaves_no_entry() {
        break_path("b.png");
        let mut cache = ResourceCache::<Probe>::new();

        let a = cache.add("a.png").unwrap();
        let err = cache.add("b.png").unwrap_error();

        assert_eq!(a.index(), 0);
        assert_eq!(err.path(), Path::new("b.png"));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(a).unwrap().source, PathBuf::from("a.png"));
        assert_eq!(cache.handle_of("b.png"), None);
    }

    #[test]
    fn failed_load_can_be_retried() {
        break_path("retry.png");
        let mut cache = ResourceCache::<Probe>::new();

        assert!(cache.add("retry.png").is_failure());
        fix_path("retry.png");
        let handle = cache.add("retry.png").unwrap();

        // The failed attempt consumed no handle.
        assert_eq!(handle.index(), 0);
        assert_eq!(loads_of("retry.png"), 2);
    }

    // ── remove / get / has ────────────────────────────────────────────────

    #[test]
    fn removed_handle_is_gone() {
        let mut cache = ResourceCache::<Probe>::new();
        let h = cache.add("gone.png").unwrap();

        assert!(cache.remove(h).is_some());
        assert!(cache.get(h).is_none());
        assert!(!cache.has(h));
        assert!(cache.is_empty());
    }

    #[test]
    fn remove_unknown_handle_is_noop() {
        let mut cache = ResourceCache::<Probe>::new();
        let h = cache.add("keep.png").unwrap();

        assert!(cache.remove(Handle(99)).is_none());
        assert!(cache.remove(h).is_some());
        assert!(cache.remove(h).is_none());
    }

    #[test]
    fn handles_are_never_reused() {
        let mut cache = ResourceCache::<Probe>::new();
        let a = cache.add("reuse.png").unwrap();
        cache.remove(a);

        let b = cache.add("reuse.png").unwrap();
        assert_ne!(a, b);
        assert_eq!(loads_of("reuse.png"), 2);

        cache.clear();
        let c = cache.add("other.png").unwrap();
        assert!(c > b);
    }

    #[test]
    fn has_agrees_with_get() {
        let mut cache = ResourceCache::<Probe>::new();
        let a = cache.add("x.png").unwrap();
        let b = cache.add("y.png").unwrap();
        cache.remove(a);

        for h in [a, b, Handle(7)] {
            assert_eq!(cache.has(h), cache.get(h).is_some());
        }
    }

    #[test]
    fn resource_outlives_its_entry() {
        let mut cache = ResourceCache::<Probe>::new();
        let h = cache.add("shared.png").unwrap();

        let held = cache.get(h).unwrap();
        cache.remove(h);

        assert_eq!(held.source, PathBuf::from("shared.png"));
        assert_eq!(Arc::strong_count(&held), 1);
    }

    // ── introspection ─────────────────────────────────────────────────────

    #[test]
    fn iter_yields_entries_in_handle_order() {
        let mut cache = ResourceCache::<Probe>::new();
        cache.add("one.png").unwrap();
        let two = cache.add("two.png").unwrap();
        cache.add("three.png").unwrap();
        cache.remove(two);

        let paths: Vec<_> = cache.iter().map(|(_, p, _)| p.to_path_buf()).collect();
        assert_eq!(paths, vec![PathBuf::from("one.png"), PathBuf::from("three.png")]);
        assert_eq!(cache.path_of(two), None);
    }
}
