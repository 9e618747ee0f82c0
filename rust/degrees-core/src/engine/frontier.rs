use std::collections::VecDeque;
use std::hash::Hash;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::errors::EmptyFrontier;
use super::node::Node;

/// Work-list of discovered but not yet expanded nodes.
///
/// `contains_state` runs once per discovered neighbor, so implementations keep a hash index
/// next to the ordered store instead of scanning it.
pub trait Frontier<S> {
    /// Inserts `node`. Keeping duplicate states out is the caller's job; duplicates only waste space.
    fn add(&mut self, node: Rc<Node<S>>);
    fn contains_state(&self, state: &S) -> bool;
    /// Removes one node according to the frontier's policy.
    fn remove(&mut self) -> Result<Rc<Node<S>>, EmptyFrontier>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool { self.len() == 0 }
}

/// Ordered nodes plus a per-state count of how many of them are pending.
struct Pending<S> {
    nodes: VecDeque<Rc<Node<S>>>,
    index: FxHashMap<S, u32>,
}

impl<S: Clone + Eq + Hash> Pending<S> {
    fn new() -> Self { Self { nodes: VecDeque::new(), index: FxHashMap::default() } }

    fn push(&mut self, node: Rc<Node<S>>) {
        *self.index.entry(node.state().clone()).or_insert(0) += 1;
        self.nodes.push_back(node);
    }

    fn forget(&mut self, node: Rc<Node<S>>) -> Rc<Node<S>> {
        if let Some(n) = self.index.get_mut(node.state()) {
            *n -= 1;
            if *n == 0 { self.index.remove(node.state()); }
        }
        node
    }

    fn pop_front(&mut self) -> Result<Rc<Node<S>>, EmptyFrontier> {
        let node = self.nodes.pop_front().ok_or(EmptyFrontier)?;
        Ok(self.forget(node))
    }

    fn pop_back(&mut self) -> Result<Rc<Node<S>>, EmptyFrontier> {
        let node = self.nodes.pop_back().ok_or(EmptyFrontier)?;
        Ok(self.forget(node))
    }
}

/// FIFO frontier: removes the earliest-added node (breadth-first).
pub struct QueueFrontier<S> {
    pending: Pending<S>,
}

impl<S: Clone + Eq + Hash> QueueFrontier<S> {
    pub fn new() -> Self { Self { pending: Pending::new() } }
}

impl<S: Clone + Eq + Hash> Default for QueueFrontier<S> {
    fn default() -> Self { Self::new() }
}

impl<S: Clone + Eq + Hash> Frontier<S> for QueueFrontier<S> {
    fn add(&mut self, node: Rc<Node<S>>) { self.pending.push(node) }
    fn contains_state(&self, state: &S) -> bool { self.pending.index.contains_key(state) }
    fn remove(&mut self) -> Result<Rc<Node<S>>, EmptyFrontier> { self.pending.pop_front() }
    fn len(&self) -> usize { self.pending.nodes.len() }
}

/// LIFO frontier: removes the most recently added node (depth-first).
pub struct StackFrontier<S> {
    pending: Pending<S>,
}

impl<S: Clone + Eq + Hash> StackFrontier<S> {
    pub fn new() -> Self { Self { pending: Pending::new() } }
}

impl<S: Clone + Eq + Hash> Default for StackFrontier<S> {
    fn default() -> Self { Self::new() }
}

impl<S: Clone + Eq + Hash> Frontier<S> for StackFrontier<S> {
    fn add(&mut self, node: Rc<Node<S>>) { self.pending.push(node) }
    fn contains_state(&self, state: &S) -> bool { self.pending.index.contains_key(state) }
    fn remove(&mut self) -> Result<Rc<Node<S>>, EmptyFrontier> { self.pending.pop_back() }
    fn len(&self) -> usize { self.pending.nodes.len() }
}
