//! Link header parsing (RFC 8288)

use reqwest::header::{HeaderMap, LINK};

/// Extract the `rel="next"` URL from a response's headers.
///
/// Only the first `Link` header line is inspected.
pub fn next_link(headers: &HeaderMap) -> Option<String> {
    headers
        .get(LINK)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| parse_link_header(v, "next"))
}

/// Parse a Link header and extract the URL for the given rel
pub fn parse_link_header(header: &str, target_rel: &str) -> Option<String> {
    // Link header format: <url>; rel="next", <url>; rel="prev"
    for part in split_entries(header) {
        // Params start after the closing '>', the URL itself may contain ';'
        let Some((url, params)) = part.strip_prefix('<').and_then(|p| p.split_once('>')) else {
            continue;
        };

        let rel = params.split(';').find_map(|segment| {
            let (key, value) = segment.split_once('=')?;
            key.trim()
                .eq_ignore_ascii_case("rel")
                .then(|| value.trim().trim_matches('"').trim_matches('\''))
        });

        if rel.is_some_and(|r| r.split_whitespace().any(|r| r.eq_ignore_ascii_case(target_rel))) {
            return Some(url.to_string());
        }
    }

    None
}

/// Split on commas that sit outside `<...>`, so URLs containing commas survive
fn split_entries(header: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut in_url = false;
    let mut start = 0;

    for (i, c) in header.char_indices() {
        match c {
            '<' => in_url = true,
            '>' => in_url = false,
            ',' if !in_url => {
                entries.push(header[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    entries.push(header[start..].trim());

    entries.into_iter().filter(|e| !e.is_empty()).collect()
}
