use std::env;
use std::path::PathBuf;

/// Defaults for the `path` command taken from the environment. Command-line flags win.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// DEGREES_GRAPH: JSON graph document used when neither --graph nor --db is given.
    pub graph: Option<PathBuf>,
    /// DEGREES_MAX_EXPANSIONS
    pub max_expansions: Option<u64>,
    /// DEGREES_CACHE_CAPACITY: neighbor cache entries, 0 disables the cache.
    pub cache_capacity: Option<usize>,
}

impl Config {
    pub fn from_env() -> Self { Self::from_lookup(|k| env::var(k).ok()) }

    pub fn from_lookup<F: Fn(&str) -> Option<String>>(get: F) -> Self {
        let graph = get("DEGREES_GRAPH").filter(|s| !s.trim().is_empty()).map(PathBuf::from);
        let max_expansions = get("DEGREES_MAX_EXPANSIONS").and_then(|s| s.trim().parse::<u64>().ok());
        let cache_capacity = get("DEGREES_CACHE_CAPACITY")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|n| *n > 0);
        Self { graph, max_expansions, cache_capacity }
    }
}
