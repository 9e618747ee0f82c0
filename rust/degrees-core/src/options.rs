use serde::{Deserialize, Serialize};

/// Order in which discovered nodes are expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Traversal {
    /// FIFO frontier; the first path found is a shortest one.
    #[default]
    BreadthFirst,
    /// LIFO frontier; finds some path, not necessarily the shortest.
    DepthFirst,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub traversal: Traversal,
    /// Abort with `SearchError::ExpansionLimit` once this many nodes have been expanded.
    pub max_expansions: Option<u64>,
}

impl SearchOptions {
    pub fn breadth_first() -> Self { Self::default() }

    pub fn depth_first() -> Self { Self { traversal: Traversal::DepthFirst, ..Self::default() } }

    pub fn with_max_expansions(mut self, limit: u64) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    pub fn limit_reached(&self, expanded: u64) -> bool {
        self.max_expansions.map(|m| expanded >= m).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_are_unbounded_breadth_first() {
        let o = SearchOptions::default();
        assert_eq!(o.traversal, Traversal::BreadthFirst);
        assert_eq!(o.max_expansions, None);
        assert!(!o.limit_reached(u64::MAX));
    }

    #[test]
    fn deserializes_with_defaults_when_missing_fields() {
        let o: SearchOptions = serde_json::from_value(json!({ "traversal": "depth_first" })).unwrap();
        assert_eq!(o.traversal, Traversal::DepthFirst);
        assert_eq!(o.max_expansions, None);

        let o: SearchOptions = serde_json::from_value(json!({ "max_expansions": 10 })).unwrap();
        assert_eq!(o.traversal, Traversal::BreadthFirst);
        assert!(!o.limit_reached(9));
        assert!(o.limit_reached(10));
    }
}
