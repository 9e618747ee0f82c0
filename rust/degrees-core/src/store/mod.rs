//! SQLite-backed link graph: `articles(id, title)` and ordered `links(src, dst, label, position)`.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use rustc_hash::FxHashSet;
use tracing::info;

use crate::graph::{Edge, GraphFile, NeighborProvider};
use crate::resolve::{name_key, Candidate, Resolution, Resolver};

pub mod open;
pub mod queries;

pub use open::{open_read_only, DbOpenConfig, TempStore, UnknownTempStore};
use queries::*;

pub struct LinkStore {
    conn: Connection,
}

impl LinkStore {
    /// Open an existing store for searching, PRAGMAs taken from the environment.
    pub fn open<P: AsRef<Path>>(path: P) -> rusqlite::Result<Self> {
        Self::open_with_config(path, &DbOpenConfig::from_env())
    }

    pub fn open_with_config<P: AsRef<Path>>(path: P, cfg: &DbOpenConfig) -> rusqlite::Result<Self> {
        Ok(Self { conn: open_read_only(path, cfg)? })
    }

    /// Open read-write, creating the file and schema when missing.
    pub fn create<P: AsRef<Path>>(path: P) -> rusqlite::Result<Self> {
        Self::with_schema(Connection::open(path)?)
    }

    pub fn in_memory() -> rusqlite::Result<Self> { Self::with_schema(Connection::open_in_memory()?) }

    fn with_schema(conn: Connection) -> rusqlite::Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    pub fn insert_article(&self, id: &str, title: &str) -> rusqlite::Result<()> {
        self.conn.execute(INSERT_ARTICLE, params![id, title, name_key(title)])?;
        Ok(())
    }

    pub fn insert_link(&self, src: &str, dst: &str, label: Option<&str>) -> rusqlite::Result<()> {
        self.conn.execute(INSERT_LINK, params![src, dst, label])?;
        Ok(())
    }

    /// Copies a graph document into the store in one transaction, links in document order.
    ///
    /// A source that has links in the document gets exactly those links: whatever the store held
    /// for it before is replaced, so importing the same document twice changes nothing.
    pub fn import(&self, file: &GraphFile) -> rusqlite::Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut art = tx.prepare_cached(INSERT_ARTICLE)?;
            for n in &file.nodes {
                art.execute(params![n.id, n.title, name_key(&n.title)])?;
            }
            let mut clear = tx.prepare_cached(DELETE_LINKS_FROM)?;
            let mut cleared = FxHashSet::default();
            for l in &file.links {
                if cleared.insert(l.from.as_str()) {
                    clear.execute([&l.from])?;
                }
            }
            let mut link = tx.prepare_cached(INSERT_LINK)?;
            for l in &file.links {
                link.execute(params![l.from, l.to, l.label])?;
            }
        }
        tx.commit()?;
        info!(articles = file.nodes.len(), links = file.links.len(), "store_import");
        Ok(())
    }

    pub fn title(&self, id: &str) -> rusqlite::Result<Option<String>> {
        self.conn.query_row(TITLE_BY_ID, [id], |r| r.get(0)).optional()
    }

    pub fn article_count(&self) -> rusqlite::Result<u64> { self.count(COUNT_ARTICLES) }

    pub fn link_count(&self) -> rusqlite::Result<u64> { self.count(COUNT_LINKS) }

    fn count(&self, sql: &str) -> rusqlite::Result<u64> {
        let n: i64 = self.conn.query_row(sql, [], |r| r.get(0))?;
        Ok(n.max(0) as u64)
    }
}

impl NeighborProvider<String> for LinkStore {
    type Error = rusqlite::Error;

    fn neighbors(&self, state: &String) -> rusqlite::Result<Vec<Edge<String>>> {
        let mut st = self.conn.prepare_cached(LINKS_FROM)?;
        let edges = st
            .query_map([state], |r| Ok(Edge { state: r.get(0)?, label: r.get(1)? }))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(edges)
    }

    fn label(&self, state: &String) -> Option<String> { self.title(state).ok().flatten() }
}

/// Exact article ids win; otherwise titles are matched on `name_key`, like `NameIndex`.
impl Resolver<String> for LinkStore {
    type Error = rusqlite::Error;

    fn resolve(&self, query: &str) -> rusqlite::Result<Resolution<String>> {
        let query = query.trim();
        if self.title(query)?.is_some() {
            return Ok(Resolution::Resolved(query.to_string()));
        }
        let mut st = self.conn.prepare_cached(IDS_BY_TITLE_KEY)?;
        let cands = st
            .query_map([name_key(query)], |r| {
                let id: String = r.get(0)?;
                let title: String = r.get(1)?;
                Ok(Candidate { description: format!("{title} ({id})"), state: id })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(Resolution::from(cands))
    }
}
