//! LRU memoization in front of an expensive neighbor provider.
//! Only successful lookups are cached; a failed lookup is retried on the next request.

use std::cell::{Cell, RefCell};
use std::hash::Hash;
use std::num::NonZeroUsize;

use lru::LruCache;
use tracing::trace;

use super::provider::{Edge, NeighborProvider};

pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

pub struct CachingProvider<P, S: Hash + Eq> {
    inner: P,
    cache: RefCell<LruCache<S, Vec<Edge<S>>>>,
    capacity: usize,
    hits: Cell<u64>,
    misses: Cell<u64>,
}

impl<P, S: Clone + Hash + Eq> CachingProvider<P, S> {
    pub fn new(inner: P) -> Self { Self::with_capacity(inner, DEFAULT_CACHE_CAPACITY) }

    pub fn with_capacity(inner: P, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self { inner, cache: RefCell::new(LruCache::new(cap)), capacity, hits: Cell::new(0), misses: Cell::new(0) }
    }

    pub fn inner(&self) -> &P { &self.inner }
    pub fn into_inner(self) -> P { self.inner }

    // Counters for tests/telemetry
    pub fn hits(&self) -> u64 { self.hits.get() }
    pub fn misses(&self) -> u64 { self.misses.get() }
    pub fn cached(&self) -> usize { self.cache.borrow().len() }
    pub fn capacity(&self) -> usize { self.capacity }

    pub fn clear(&self) { self.cache.borrow_mut().clear() }
}

impl<P, S> NeighborProvider<S> for CachingProvider<P, S>
where
    P: NeighborProvider<S>,
    S: Clone + Hash + Eq,
{
    type Error = P::Error;

    fn neighbors(&self, state: &S) -> Result<Vec<Edge<S>>, P::Error> {
        if let Some(hit) = self.cache.borrow_mut().get(state).cloned() {
            self.hits.set(self.hits.get() + 1);
            return Ok(hit);
        }
        // The borrow is released before calling out so a re-entrant inner provider cannot panic.
        let edges = self.inner.neighbors(state)?;
        self.misses.set(self.misses.get() + 1);
        trace!(edges = edges.len(), cached = self.cached(), "neighbors_cache_fill");
        self.cache.borrow_mut().put(state.clone(), edges.clone());
        Ok(edges)
    }

    fn label(&self, state: &S) -> Option<String> { self.inner.label(state) }
}
