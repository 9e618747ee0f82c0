use thiserror::Error;

/// Raised by `Frontier::remove` when nothing is left to expand.
/// The engine turns this into a `None` result; it never reaches callers of `shortest_path`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("frontier is empty")]
pub struct EmptyFrontier;

#[derive(Error, Debug)]
pub enum SearchError<E> {
    /// The neighbor provider failed; the search is abandoned with no partial result.
    #[error("neighbor lookup failed: {0}")]
    NeighborLookup(#[source] E),
    #[error("search aborted after {expanded} expansions")]
    ExpansionLimit { expanded: u64 },
}

impl<E> SearchError<E> {
    /// The provider's own error, if that is what stopped the search.
    pub fn into_lookup(self) -> Option<E> {
        match self {
            SearchError::NeighborLookup(e) => Some(e),
            SearchError::ExpansionLimit { .. } => None,
        }
    }

    pub fn is_lookup(&self) -> bool { matches!(self, SearchError::NeighborLookup(_)) }
}

/// Failures of the name/locator resolvers that build source and target states.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("`{query}` not found")]
    NotFound { query: String },
    #[error("`{query}` is ambiguous: {}", .candidates.join(", "))]
    Ambiguous { query: String, candidates: Vec<String> },
    #[error("`{query}` is not a valid article locator")]
    InvalidLocator { query: String },
}
