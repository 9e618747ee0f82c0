use std::hash::Hash;

use rustc_hash::FxHashSet;

/// States already expanded. Membership is permanent for the lifetime of a search.
pub struct ExploredSet<S> {
    states: FxHashSet<S>,
}

impl<S: Eq + Hash> ExploredSet<S> {
    pub fn new() -> Self { Self { states: FxHashSet::default() } }

    /// Returns false if the state was already explored.
    pub fn insert(&mut self, state: S) -> bool { self.states.insert(state) }

    pub fn contains(&self, state: &S) -> bool { self.states.contains(state) }

    pub fn len(&self) -> usize { self.states.len() }

    pub fn is_empty(&self) -> bool { self.states.is_empty() }
}

impl<S: Eq + Hash> Default for ExploredSet<S> {
    fn default() -> Self { Self::new() }
}
