use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::article::DocumentSource;

/// Saved article pages in one directory, one `<title>.html` file per article.
///
/// The file name is the page id's path after `/wiki/`, still percent-encoded the way links write
/// it, with `/` stored as `%2F`: `…/wiki/Stati_Uniti_d%27America` is `Stati_Uniti_d%27America.html`.
/// A missing file is a missing article.
#[derive(Clone, Debug)]
pub struct PageDir {
    root: PathBuf,
}

impl PageDir {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self { Self { root: root.into() } }

    pub fn root(&self) -> &Path { &self.root }

    /// File holding the page `locator`, `None` when it is not an article id.
    pub fn file_for(&self, locator: &str) -> Option<PathBuf> {
        let (_, encoded) = locator.split_once("/wiki/")?;
        if encoded.is_empty() || encoded.starts_with('.') {
            return None;
        }
        Some(self.root.join(format!("{}.html", encoded.replace('/', "%2F"))))
    }
}

impl DocumentSource for PageDir {
    type Error = std::io::Error;

    fn fetch(&self, locator: &str) -> Result<Option<String>, std::io::Error> {
        let Some(path) = self.file_for(locator) else { return Ok(None) };
        match fs::read_to_string(&path) {
            Ok(body) => Ok(Some(body)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_follow_the_encoded_title() {
        let dir = PageDir::new("/pages");
        assert_eq!(
            dir.file_for("https://it.wikipedia.org/wiki/Stati_Uniti_d%27America"),
            Some(PathBuf::from("/pages/Stati_Uniti_d%27America.html"))
        );
        assert_eq!(dir.file_for("https://en.wikipedia.org/wiki/AC/DC"), Some(PathBuf::from("/pages/AC%2FDC.html")));
        assert_eq!(dir.file_for("https://it.wikipedia.org/wiki/"), None);
        assert_eq!(dir.file_for("https://it.wikipedia.org/wiki/../secret"), None);
        assert_eq!(dir.file_for("Roma"), None);
    }

    #[test]
    fn reads_saved_pages_and_reports_absent_ones() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("Roma.html"), r#"<a href="/wiki/Italia">Italia</a>"#).unwrap();
        let dir = PageDir::new(tmp.path());
        let body = dir.fetch("https://it.wikipedia.org/wiki/Roma").unwrap();
        assert_eq!(body.as_deref(), Some(r#"<a href="/wiki/Italia">Italia</a>"#));
        assert_eq!(dir.fetch("https://it.wikipedia.org/wiki/Atlantide").unwrap(), None);
    }

    #[test]
    fn unreadable_entries_are_errors() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("Cartella.html")).unwrap();
        let dir = PageDir::new(tmp.path());
        assert!(dir.fetch("https://it.wikipedia.org/wiki/Cartella").is_err());
    }
}
