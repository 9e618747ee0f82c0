use std::hash::Hash;

use tracing::{debug, info, warn};

use crate::errors::{EmptyFrontier, SearchError};
use crate::graph::NeighborProvider;
use crate::models::{Path, SearchReport};
use crate::options::{SearchOptions, Traversal};

use super::explored::ExploredSet;
use super::frontier::{Frontier, QueueFrontier, StackFrontier};
use super::node::Node;
use super::reconstruct::reconstruct;

pub type SearchResult<S, P> = Result<SearchReport<S>, SearchError<<P as NeighborProvider<S>>::Error>>;

/// Breadth-first search over a graph whose edges are only known by asking `provider`.
///
/// Each call builds its own frontier and explored set, so one engine can serve any number of
/// sequential searches. Among equally short paths the one returned is the first discovered,
/// which depends only on the order in which the provider lists edges.
pub struct SearchEngine<'p, P> {
    provider: &'p P,
    options: SearchOptions,
}

impl<'p, P> SearchEngine<'p, P> {
    pub fn new(provider: &'p P) -> Self { Self { provider, options: SearchOptions::default() } }

    pub fn with_options(provider: &'p P, options: SearchOptions) -> Self { Self { provider, options } }

    pub fn options(&self) -> &SearchOptions { &self.options }

    /// Shortest path from `source` to `target`, `Ok(None)` when `target` is unreachable.
    pub fn shortest_path<S>(&self, source: &S, target: &S) -> Result<Option<Path<S>>, SearchError<<P as NeighborProvider<S>>::Error>>
    where
        P: NeighborProvider<S>,
        S: Clone + Eq + Hash,
    {
        self.search(source, target).map(|r| r.path)
    }

    /// Like `shortest_path`, with expansion counters.
    pub fn search<S>(&self, source: &S, target: &S) -> SearchResult<S, P>
    where
        P: NeighborProvider<S>,
        S: Clone + Eq + Hash,
    {
        self.search_with(QueueFrontier::new(), source, target)
    }

    /// Runs with the frontier selected by `SearchOptions::traversal`.
    /// Depth-first results are paths but not necessarily shortest ones.
    pub fn find_path<S>(&self, source: &S, target: &S) -> SearchResult<S, P>
    where
        P: NeighborProvider<S>,
        S: Clone + Eq + Hash,
    {
        match self.options.traversal {
            Traversal::BreadthFirst => self.search_with(QueueFrontier::new(), source, target),
            Traversal::DepthFirst => self.search_with(StackFrontier::new(), source, target),
        }
    }

    pub fn search_with<S, F>(&self, mut frontier: F, source: &S, target: &S) -> SearchResult<S, P>
    where
        P: NeighborProvider<S>,
        S: Clone + Eq + Hash,
        F: Frontier<S>,
    {
        // No edge leads anywhere useful from the target itself; answer before any lookup.
        if source == target {
            debug!("source equals target");
            return Ok(SearchReport { path: Some(Path::empty()), expanded: 0, discovered: 0 });
        }

        let root_label = self.provider.label(source).unwrap_or_default();
        frontier.add(Node::root(source.clone(), root_label));
        let mut explored = ExploredSet::new();
        let mut expanded: u64 = 0;
        let mut discovered: u64 = 1;

        loop {
            let node = match frontier.remove() {
                Ok(n) => n,
                Err(EmptyFrontier) => {
                    info!(expanded, discovered, "search_exhausted");
                    return Ok(SearchReport { path: None, expanded, discovered });
                }
            };
            if self.options.limit_reached(expanded) {
                warn!(expanded, frontier = frontier.len() + 1, "expansion_limit");
                return Err(SearchError::ExpansionLimit { expanded });
            }
            expanded += 1;
            explored.insert(node.state().clone());

            let edges = self.provider.neighbors(node.state()).map_err(SearchError::NeighborLookup)?;
            debug!(expanded, depth = node.depth(), edges = edges.len(), frontier = frontier.len(), "expand");

            for edge in edges {
                if explored.contains(&edge.state) || frontier.contains_state(&edge.state) {
                    continue;
                }
                let child = Node::child(&node, edge.state, edge.label);
                discovered += 1;
                if child.state() == target {
                    let path = reconstruct(&child);
                    info!(expanded, discovered, degrees = path.degrees(), "search_found");
                    return Ok(SearchReport { path: Some(path), expanded, discovered });
                }
                frontier.add(child);
            }
        }
    }
}
