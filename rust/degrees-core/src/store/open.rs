use std::env;
use std::path::Path;
use std::str::FromStr;

use rusqlite::{Connection, OpenFlags};
use thiserror::Error;
use tracing::debug;

/// Tuning for a link store opened for searching. Each field maps to one PRAGMA; `None` leaves
/// SQLite's default in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DbOpenConfig {
    pub query_only: bool,
    /// Page cache in KB.
    pub cache_size_kb: Option<i64>,
    pub mmap_size_bytes: Option<i64>,
    pub temp_store: Option<TempStore>,
}

/// Where SQLite keeps temporary tables and indices.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TempStore { Memory, File }

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown temp store `{0}`, expected MEMORY or FILE")]
pub struct UnknownTempStore(String);

impl TempStore {
    /// Keyword accepted by `PRAGMA temp_store`.
    pub fn as_sql(self) -> &'static str {
        match self {
            TempStore::Memory => "MEMORY",
            TempStore::File => "FILE",
        }
    }
}

impl FromStr for TempStore {
    type Err = UnknownTempStore;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("memory") {
            Ok(TempStore::Memory)
        } else if s.eq_ignore_ascii_case("file") {
            Ok(TempStore::File)
        } else {
            Err(UnknownTempStore(s.to_string()))
        }
    }
}

impl Default for DbOpenConfig {
    fn default() -> Self {
        Self {
            query_only: true,
            cache_size_kb: Some(64_000),
            mmap_size_bytes: Some(128 << 20),
            temp_store: Some(TempStore::Memory),
        }
    }
}

fn positive(v: &str) -> Option<i64> { v.trim().parse::<i64>().ok().filter(|n| *n > 0) }

impl DbOpenConfig {
    /// Defaults overridden by environment variables; a present but invalid or zero value disables the PRAGMA.
    ///
    /// - DEGREES_SQLITE_QUERY_ONLY: "1"/"0"
    /// - DEGREES_SQLITE_CACHE_SIZE_KB: KB
    /// - DEGREES_SQLITE_MMAP_SIZE: bytes
    /// - DEGREES_SQLITE_TEMP_STORE: "MEMORY" or "FILE"
    pub fn from_env() -> Self { Self::from_lookup(|k| env::var(k).ok()) }

    pub fn from_lookup<F: Fn(&str) -> Option<String>>(get: F) -> Self {
        let d = Self::default();
        Self {
            query_only: get("DEGREES_SQLITE_QUERY_ONLY").map_or(d.query_only, |v| v.trim() != "0"),
            cache_size_kb: get("DEGREES_SQLITE_CACHE_SIZE_KB").map_or(d.cache_size_kb, |v| positive(&v)),
            mmap_size_bytes: get("DEGREES_SQLITE_MMAP_SIZE").map_or(d.mmap_size_bytes, |v| positive(&v)),
            temp_store: get("DEGREES_SQLITE_TEMP_STORE").map_or(d.temp_store, |v| v.parse().ok()),
        }
    }

    /// PRAGMA statements this config stands for, in the order they are applied.
    pub fn pragmas(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(4);
        if self.query_only {
            out.push("PRAGMA query_only = ON".to_string());
        }
        if let Some(kb) = self.cache_size_kb {
            // Negative means KiB rather than pages.
            out.push(format!("PRAGMA cache_size = -{kb}"));
        }
        if let Some(bytes) = self.mmap_size_bytes {
            out.push(format!("PRAGMA mmap_size = {bytes}"));
        }
        if let Some(ts) = self.temp_store {
            out.push(format!("PRAGMA temp_store = {}", ts.as_sql()));
        }
        out
    }
}

/// Open read-only and apply `cfg`. PRAGMA failures are logged and otherwise ignored.
pub fn open_read_only<P: AsRef<Path>>(path: P, cfg: &DbOpenConfig) -> rusqlite::Result<Connection> {
    let conn = Connection::open_with_flags(path.as_ref(), OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX)?;
    for sql in cfg.pragmas() {
        // Some PRAGMAs return a row, so run them as a batch rather than `execute`.
        if let Err(e) = conn.execute_batch(&sql) {
            debug!(%sql, error = %e, "pragma_ignored");
        }
    }
    Ok(conn)
}
