use url::Url;

/// Display title of an article: the path after `/wiki/` (or the last segment), percent-decoded,
/// underscores as spaces.
pub fn title_for_page_id(page_id: &str) -> String {
    let encoded = match page_id.split_once("/wiki/") {
        Some((_, rest)) => rest,
        None => page_id.rsplit('/').next().unwrap_or(page_id),
    };
    decode_title(encoded)
}

pub(crate) fn decode_title(encoded: &str) -> String { percent_decode(encoded).replace('_', " ") }

/// Page id (absolute article URL) for a human-readable title on the edition at `base`.
pub fn page_id_for_title(base: &Url, title: &str) -> String {
    format!("{}/wiki/{}", base.as_str().trim_end_matches('/'), encode_title(title))
}

/// Escapes a title the way MediaWiki writes article links: spaces become underscores and
/// everything outside the unreserved set and `;@$!*(),/~:` is percent-encoded.
pub fn encode_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for b in title.trim().replace(' ', "_").bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' => out.push(b as char),
            b'-' | b'_' | b'.' | b'~' | b';' | b'@' | b'$' | b'!' | b'*' | b'(' | b')' | b',' | b'/' | b':' => out.push(b as char),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

fn hex(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

// Malformed escapes are kept verbatim; invalid UTF-8 is replaced.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(h), Some(l)) = (hex(bytes[i + 1]), hex(bytes[i + 2])) {
                out.push(h << 4 | l);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}
