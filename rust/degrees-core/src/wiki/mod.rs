//! Article-graph adapter: page ids are absolute article URLs, edges are the `/wiki/` links of a page.
//! Fetching is injected through `DocumentSource`; nothing here touches the network. `PageDir` serves
//! pages saved to disk.

pub mod article;
pub mod editions;
pub mod links;
pub mod pages;
pub mod title;

pub use article::{ArticleError, ArticleLinks, ArticleResolver, DocumentSource};
pub use editions::{base_url, Edition, Editions};
pub use links::extract_links;
pub use pages::PageDir;
pub use title::{encode_title, page_id_for_title, title_for_page_id};
