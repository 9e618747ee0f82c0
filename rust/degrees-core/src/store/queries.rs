pub const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS articles (
        id        TEXT PRIMARY KEY,
        title     TEXT NOT NULL,
        title_key TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS links (
        src      TEXT NOT NULL,
        dst      TEXT NOT NULL,
        label    TEXT,
        position INTEGER NOT NULL
    );
    CREATE INDEX IF NOT EXISTS links_src_position ON links (src, position);
    CREATE INDEX IF NOT EXISTS articles_title_key ON articles (title_key);
";

// `title_key` is computed by the caller with `resolve::name_key`; SQLite NOCASE only folds ASCII.
pub const INSERT_ARTICLE: &str = "INSERT OR REPLACE INTO articles (id, title, title_key) VALUES (?1, ?2, ?3)";

pub const DELETE_LINKS_FROM: &str = "DELETE FROM links WHERE src = ?1";

// Appends after the last link of the same source so document order is preserved.
pub const INSERT_LINK: &str = "INSERT INTO links (src, dst, label, position) \
    VALUES (?1, ?2, ?3, (SELECT COALESCE(MAX(position) + 1, 0) FROM links WHERE src = ?1))";

// Explicit label, else the target article's title, else its id.
pub const LINKS_FROM: &str = "SELECT l.dst, COALESCE(l.label, a.title, l.dst) \
    FROM links l LEFT JOIN articles a ON a.id = l.dst \
    WHERE l.src = ?1 ORDER BY l.position ASC, l.rowid ASC";

pub const TITLE_BY_ID: &str = "SELECT title FROM articles WHERE id = ?1";
pub const IDS_BY_TITLE_KEY: &str = "SELECT id, title FROM articles WHERE title_key = ?1 ORDER BY id ASC";

pub const COUNT_ARTICLES: &str = "SELECT COUNT(*) FROM articles";
pub const COUNT_LINKS: &str = "SELECT COUNT(*) FROM links";
