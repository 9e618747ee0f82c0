use std::convert::Infallible;
use std::hash::Hash;

use indexmap::IndexMap;

use super::provider::{Edge, NeighborProvider};

/// In-memory graph with fixed adjacency, kept in insertion order.
///
/// Edges without an explicit label are labelled with the target's node label, falling back to
/// an empty string when the target was never declared.
#[derive(Clone, Debug)]
pub struct AdjacencyGraph<S: Hash + Eq> {
    labels: IndexMap<S, String>,
    out: IndexMap<S, Vec<(S, Option<String>)>>,
    edges: usize,
}

impl<S: Clone + Hash + Eq> AdjacencyGraph<S> {
    pub fn new() -> Self { Self { labels: IndexMap::new(), out: IndexMap::new(), edges: 0 } }

    pub fn add_node(&mut self, state: S, label: impl Into<String>) -> &mut Self {
        self.labels.insert(state, label.into());
        self
    }

    pub fn add_edge(&mut self, from: S, to: S, label: Option<String>) -> &mut Self {
        self.out.entry(from).or_default().push((to, label));
        self.edges += 1;
        self
    }

    /// Adds `from -> to` labelled with the target's node label.
    pub fn link(&mut self, from: S, to: S) -> &mut Self { self.add_edge(from, to, None) }

    pub fn node_label(&self, state: &S) -> Option<&str> { self.labels.get(state).map(String::as_str) }

    pub fn contains(&self, state: &S) -> bool { self.labels.contains_key(state) || self.out.contains_key(state) }

    pub fn nodes(&self) -> impl Iterator<Item = (&S, &str)> + '_ { self.labels.iter().map(|(s, l)| (s, l.as_str())) }

    pub fn node_count(&self) -> usize { self.labels.len() }

    pub fn edge_count(&self) -> usize { self.edges }

    pub fn edges_from(&self, state: &S) -> Vec<Edge<S>> {
        let Some(targets) = self.out.get(state) else { return Vec::new(); };
        targets
            .iter()
            .map(|(to, label)| {
                let label = match label {
                    Some(l) => l.clone(),
                    None => self.node_label(to).unwrap_or_default().to_string(),
                };
                Edge::new(to.clone(), label)
            })
            .collect()
    }
}

impl<S: Clone + Hash + Eq> Default for AdjacencyGraph<S> {
    fn default() -> Self { Self::new() }
}

impl<S: Clone + Hash + Eq> NeighborProvider<S> for AdjacencyGraph<S> {
    type Error = Infallible;

    fn neighbors(&self, state: &S) -> Result<Vec<Edge<S>>, Infallible> { Ok(self.edges_from(state)) }

    fn label(&self, state: &S) -> Option<String> { self.node_label(state).map(str::to_string) }
}
