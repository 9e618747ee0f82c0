pub mod errors;
pub mod models;
pub mod options;
pub mod engine;
pub mod graph;
pub mod resolve;
pub mod store;
pub mod wiki;

pub use engine::{reconstruct, ExploredSet, Frontier, Node, QueueFrontier, SearchEngine, StackFrontier};
pub use errors::{EmptyFrontier, ResolveError, SearchError};
pub use graph::{AdjacencyGraph, CachingProvider, Edge, NeighborProvider};
pub use models::{Path, SearchReport, Step};
pub use options::{SearchOptions, Traversal};
pub use resolve::{name_key, Candidate, NameIndex, Resolution, Resolver};

pub fn version() -> &'static str { env!("CARGO_PKG_VERSION") }
