use url::Url;

use crate::graph::Edge;
use super::title::title_for_page_id;

const ARTICLE_PREFIX: &str = "/wiki/";

/// Outbound article links of a rendered page, in document order.
///
/// Only anchors whose `href` starts with `/wiki/` count. Targets containing `:` live in a
/// non-content namespace (`File:`, `Category:`, `Help:` ...) and are skipped. Fragments are dropped so
/// `/wiki/Italia#Storia` and `/wiki/Italia` are the same state. Duplicates are kept; the search
/// ignores states it has already seen.
pub fn extract_links(base: &Url, html: &str) -> Vec<Edge<String>> {
    let root = base.as_str().trim_end_matches('/');
    anchor_hrefs(html)
        .filter_map(article_path)
        .map(|path| {
            let id = format!("{root}{path}");
            let label = title_for_page_id(&id);
            Edge::new(id, label)
        })
        .collect()
}

fn article_path(href: &str) -> Option<String> {
    let href = href.replace("&amp;", "&");
    let path = href.split('#').next().unwrap_or_default();
    let name = path.strip_prefix(ARTICLE_PREFIX)?;
    if name.is_empty() || name.contains(':') {
        return None;
    }
    Some(path.to_string())
}

/// `href` values of every `<a ...>` tag. The first `href` of a tag wins, as in a browser.
fn anchor_hrefs(html: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = html;
    std::iter::from_fn(move || loop {
        let start = next_anchor(rest)?;
        let (attrs, used) = start_tag_attrs(&rest[start + 2..]);
        rest = &rest[start + 2 + used..];
        if let Some((_, href)) = attrs.into_iter().find(|(name, _)| name.eq_ignore_ascii_case("href")) {
            return Some(href);
        }
    })
}

fn next_anchor(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut from = 0;
    while let Some(off) = s[from..].find('<') {
        let at = from + off;
        if let [a, ws, ..] = &bytes[at + 1..] {
            if a.eq_ignore_ascii_case(&b'a') && ws.is_ascii_whitespace() {
                return Some(at);
            }
        }
        from = at + 1;
    }
    None
}

/// Splits the body of a start tag into `(name, value)` pairs up to the closing `>`.
/// Quoted values are opaque, so `>` or `href=` inside them mean nothing. Returns the pairs and
/// the number of bytes consumed, the `>` included.
fn start_tag_attrs(tag: &str) -> (Vec<(&str, &str)>, usize) {
    let b = tag.as_bytes();
    let skip_ws = |mut i: usize| {
        while i < b.len() && b[i].is_ascii_whitespace() {
            i += 1;
        }
        i
    };
    let mut attrs = Vec::new();
    let mut i = 0;
    loop {
        while i < b.len() && (b[i].is_ascii_whitespace() || b[i] == b'/') {
            i += 1;
        }
        if i >= b.len() {
            return (attrs, b.len());
        }
        if b[i] == b'>' {
            return (attrs, i + 1);
        }
        let name_start = i;
        while i < b.len() && !b[i].is_ascii_whitespace() && !matches!(b[i], b'=' | b'>' | b'/') {
            i += 1;
        }
        if i == name_start {
            // Stray `=` with no name.
            i += 1;
            continue;
        }
        let name = &tag[name_start..i];
        let after_name = skip_ws(i);
        if after_name >= b.len() || b[after_name] != b'=' {
            attrs.push((name, ""));
            continue;
        }
        i = skip_ws(after_name + 1);
        let value = match b.get(i) {
            Some(&q @ (b'"' | b'\'')) => {
                let body = i + 1;
                let end = tag[body..].find(q as char).map_or(b.len(), |off| body + off);
                i = (end + 1).min(b.len());
                &tag[body..end]
            }
            _ => {
                let start = i;
                while i < b.len() && !b[i].is_ascii_whitespace() && b[i] != b'>' {
                    i += 1;
                }
                &tag[start..i]
            }
        };
        attrs.push((name, value));
    }
}
