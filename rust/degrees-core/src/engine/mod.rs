pub mod explored;
pub mod frontier;
pub mod node;
pub mod reconstruct;
pub mod search;

pub use explored::ExploredSet;
pub use frontier::{Frontier, QueueFrontier, StackFrontier};
pub use node::Node;
pub use reconstruct::reconstruct;
pub use search::{SearchEngine, SearchResult};
