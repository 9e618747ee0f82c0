pub mod adjacency;
pub mod cache;
pub mod file;
pub mod provider;

pub use adjacency::AdjacencyGraph;
pub use cache::{CachingProvider, DEFAULT_CACHE_CAPACITY};
pub use file::{GraphFile, GraphFileError, LinkEntry, NodeEntry};
pub use provider::{Edge, NeighborProvider};
