use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::errors::ResolveError;
use crate::graph::{Edge, NeighborProvider};
use crate::resolve::{Resolution, Resolver};

use super::links::extract_links;
use super::title::{decode_title, page_id_for_title, title_for_page_id};

/// Where article documents come from. Transport, retries and timeouts are the implementor's business.
pub trait DocumentSource {
    type Error;

    /// Body of the document at `locator`, `None` when no such document exists.
    fn fetch(&self, locator: &str) -> Result<Option<String>, Self::Error>;
}

impl<D: DocumentSource + ?Sized> DocumentSource for &D {
    type Error = D::Error;
    fn fetch(&self, locator: &str) -> Result<Option<String>, D::Error> { (**self).fetch(locator) }
}

#[derive(Error, Debug)]
pub enum ArticleError<E> {
    #[error("fetching {locator}: {source}")]
    Fetch { locator: String, #[source] source: E },
    #[error("article {0} does not exist")]
    Missing(String),
    #[error(transparent)]
    Locator(#[from] ResolveError),
}

/// Neighbor provider over article pages: fetches a page and follows its article links.
pub struct ArticleLinks<D> {
    base: Url,
    source: D,
}

impl<D: DocumentSource> ArticleLinks<D> {
    pub fn new(base: Url, source: D) -> Self { Self { base, source } }

    pub fn base(&self) -> &Url { &self.base }
}

impl<D: DocumentSource> NeighborProvider<String> for ArticleLinks<D> {
    type Error = ArticleError<D::Error>;

    fn neighbors(&self, state: &String) -> Result<Vec<Edge<String>>, Self::Error> {
        let body = self
            .source
            .fetch(state)
            .map_err(|source| ArticleError::Fetch { locator: state.clone(), source })?
            .ok_or_else(|| ArticleError::Missing(state.clone()))?;
        let edges = extract_links(&self.base, &body);
        debug!(bytes = body.len(), edges = edges.len(), "article_links");
        Ok(edges)
    }

    fn label(&self, state: &String) -> Option<String> { Some(title_for_page_id(state)) }
}

/// Resolves titles or article URLs on one edition to page ids.
///
/// A query that parses as a URL must point at an article (`*.wikipedia.org/wiki/...`). Its title is
/// re-encoded the way page links are, without query or fragment, so it names the same state as the
/// links that lead to it. Anything else is taken as a title. Either way the document source decides
/// existence.
pub struct ArticleResolver<D> {
    base: Url,
    source: D,
}

impl<D: DocumentSource> ArticleResolver<D> {
    pub fn new(base: Url, source: D) -> Self { Self { base, source } }

    /// Page id the query denotes, before checking that it exists.
    pub fn locate(&self, query: &str) -> Result<String, ResolveError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ResolveError::NotFound { query: query.to_string() });
        }
        // "Batman: Begins" is a title, not a URL with scheme "batman".
        if !query.contains("://") {
            return Ok(page_id_for_title(&self.base, query));
        }
        let invalid = || ResolveError::InvalidLocator { query: query.to_string() };
        let url = Url::parse(query).map_err(|_| invalid())?;
        let host = url.host_str().filter(|h| h.ends_with(".wikipedia.org")).ok_or_else(invalid)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid());
        }
        let title = url.path().strip_prefix("/wiki/").map(decode_title).ok_or_else(invalid)?;
        if title.trim().is_empty() {
            return Err(invalid());
        }
        // Same edition: reuse the configured base so scheme and port agree with the link ids.
        if self.base.host_str() == Some(host) {
            return Ok(page_id_for_title(&self.base, &title));
        }
        let mut origin = url.clone();
        origin.set_path("");
        origin.set_query(None);
        origin.set_fragment(None);
        Ok(page_id_for_title(&origin, &title))
    }
}

impl<D: DocumentSource> Resolver<String> for ArticleResolver<D> {
    type Error = ArticleError<D::Error>;

    fn resolve(&self, query: &str) -> Result<Resolution<String>, Self::Error> {
        let id = self.locate(query)?;
        let exists = self
            .source
            .fetch(&id)
            .map_err(|source| ArticleError::Fetch { locator: id.clone(), source })?
            .is_some();
        Ok(if exists { Resolution::Resolved(id) } else { Resolution::NotFound })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Pages(HashMap<String, String>);

    impl DocumentSource for Pages {
        type Error = std::convert::Infallible;
        fn fetch(&self, locator: &str) -> Result<Option<String>, Self::Error> { Ok(self.0.get(locator).cloned()) }
    }

    fn it() -> Url { Url::parse("https://it.wikipedia.org").unwrap() }

    fn pages() -> Pages {
        let mut m = HashMap::new();
        m.insert("https://it.wikipedia.org/wiki/Roma".to_string(), r#"<a href="/wiki/Italia">Italia</a>"#.to_string());
        m.insert("https://it.wikipedia.org/wiki/Italia".to_string(), String::new());
        Pages(m)
    }

    #[test]
    fn provider_follows_page_links() {
        let p = ArticleLinks::new(it(), pages());
        let edges = p.neighbors(&"https://it.wikipedia.org/wiki/Roma".to_string()).unwrap();
        assert_eq!(edges, vec![Edge::new("https://it.wikipedia.org/wiki/Italia".to_string(), "Italia")]);
        assert_eq!(p.label(&"https://it.wikipedia.org/wiki/Roma".to_string()).as_deref(), Some("Roma"));
    }

    #[test]
    fn missing_page_is_a_lookup_failure() {
        let p = ArticleLinks::new(it(), pages());
        let err = p.neighbors(&"https://it.wikipedia.org/wiki/Atlantide".to_string()).unwrap_err();
        assert!(matches!(err, ArticleError::Missing(ref id) if id.ends_with("/Atlantide")));
    }

    #[test]
    fn resolver_accepts_titles_and_article_urls() {
        let r = ArticleResolver::new(it(), pages());
        assert_eq!(r.resolve("Roma").unwrap(), Resolution::Resolved("https://it.wikipedia.org/wiki/Roma".into()));
        assert_eq!(
            r.resolve("https://it.wikipedia.org/wiki/Italia").unwrap(),
            Resolution::Resolved("https://it.wikipedia.org/wiki/Italia".into())
        );
        assert_eq!(r.resolve("Atlantide").unwrap(), Resolution::NotFound);
    }

    #[test]
    fn resolver_rejects_foreign_urls() {
        let r = ArticleResolver::new(it(), pages());
        let err = r.resolve("https://example.org/wiki/Roma").unwrap_err();
        assert!(matches!(err, ArticleError::Locator(ResolveError::InvalidLocator { .. })));
        assert!(r.locate("https://it.wikipedia.org/w/index.php").is_err());
        assert!(r.locate("https://it.wikipedia.org/wiki/").is_err());
    }

    #[test]
    fn article_urls_are_normalised_like_page_links() {
        let r = ArticleResolver::new(it(), pages());
        assert_eq!(r.locate("https://it.wikipedia.org/wiki/Italia#Storia").unwrap(), "https://it.wikipedia.org/wiki/Italia");
        assert_eq!(r.locate("http://it.wikipedia.org/wiki/Italia?oldid=1").unwrap(), "https://it.wikipedia.org/wiki/Italia");
        assert_eq!(
            r.locate("https://it.wikipedia.org/wiki/Stati_Uniti_d'America").unwrap(),
            "https://it.wikipedia.org/wiki/Stati_Uniti_d%27America"
        );
        assert_eq!(r.locate("https://en.wikipedia.org/wiki/São Paulo").unwrap(), "https://en.wikipedia.org/wiki/S%C3%A3o_Paulo");
        assert_eq!(
            r.resolve("https://it.wikipedia.org/wiki/Italia#Storia").unwrap(),
            Resolution::Resolved("https://it.wikipedia.org/wiki/Italia".into())
        );
    }
}
