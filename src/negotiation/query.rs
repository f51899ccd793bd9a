//! Reserved query parameter extraction and stripping.

use url::form_urlencoded;

/// A query string split around the reserved locale parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySplit {
    /// Decoded value of the first occurrence, if non-empty
    pub value: Option<String>,
    /// The remaining pairs, in their original encoding and order
    pub remaining: Option<String>,
}

/// Pull the reserved parameter out of a raw query string.
///
/// Every occurrence of `key` is removed from `remaining`; only the first one
/// provides `value`. Other pairs are kept byte-for-byte so the redirect target
/// does not re-encode anything the client sent.
pub fn split_query(query: Option<&str>, key: &str) -> QuerySplit {
    let Some(query) = query else {
        return QuerySplit::default();
    };

    let mut value: Option<String> = None;
    let mut kept: Vec<&str> = Vec::new();

    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        match form_urlencoded::parse(pair.as_bytes()).next() {
            Some((name, v)) if name == key => {
                if value.is_none() {
                    value = Some(v.into_owned());
                }
            }
            _ => kept.push(pair),
        }
    }

    QuerySplit {
        value: value.filter(|v| !v.trim().is_empty()),
        remaining: (!kept.is_empty()).then(|| kept.join("&")),
    }
}

/// Build the redirect target for `path` with the remaining query, if any.
///
/// Leading slashes and backslashes collapse to a single `/` so the target
/// always stays on the same host (`//host/x` would be protocol-relative).
pub fn redirect_location(path: &str, remaining: Option<&str>) -> String {
    let path = path.trim_start_matches(['/', '\\']);
    match remaining {
        Some(query) => format!("/{}?{}", path, query),
        None => format!("/{}", path),
    }
}
